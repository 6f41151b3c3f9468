pub mod config;
pub mod count;
pub mod error;
pub mod model;
pub mod report;
pub mod validate;

pub use config::{
    ValidationConfig, DEFAULT_DATASET_DIR, EXPECTED_CLASSES, IMAGE_EXTENSIONS,
    MIN_IMAGES_PER_CLASS,
};
pub use count::count_files;
pub use error::{DatasetCheckError, Result};
pub use model::{ClassRow, DatasetIssue, DatasetWarning, FileCounts, ValidationReport};
pub use report::{render_report, render_table, SUCCESS_LINE};
pub use validate::validate_dataset;
