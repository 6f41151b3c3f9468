use std::fmt;
use std::path::PathBuf;

/// Per-class counts shown in the summary table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassRow {
    pub name: String,
    pub images: usize,
    pub non_images: usize,
}

/// Image and non-image file counts for one folder.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FileCounts {
    pub images: usize,
    pub non_images: usize,
}

/// Findings that fail validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatasetIssue {
    /// Root is missing or not a directory. Nothing else gets checked.
    DatasetNotFound { root: PathBuf },
    /// All absent class folders, in expected-class order.
    MissingClasses { names: Vec<String> },
    InsufficientImages {
        class: String,
        found: usize,
        minimum: usize,
    },
}

impl fmt::Display for DatasetIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DatasetNotFound { root } => {
                write!(f, "Dataset folder not found: {}", root.display())
            }
            Self::MissingClasses { names } => {
                write!(f, "Missing class folders: {}", names.join(", "))
            }
            Self::InsufficientImages {
                class,
                found,
                minimum,
            } => write!(f, "{class}: only {found} images (minimum {minimum})"),
        }
    }
}

/// Advisories that never affect the verdict.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatasetWarning {
    NonImageFiles { class: String, count: usize },
    /// Root entries outside the expected class list, sorted ascending.
    UnexpectedEntries { names: Vec<String> },
}

impl fmt::Display for DatasetWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonImageFiles { class, count } => {
                write!(f, "{class}: {count} non-image file(s) present (ignored)")
            }
            Self::UnexpectedEntries { names } => {
                write!(f, "Unexpected items present: {}", names.join(", "))
            }
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    pub errors: Vec<DatasetIssue>,
    pub warnings: Vec<DatasetWarning>,
    pub rows: Vec<ClassRow>,
}

impl ValidationReport {
    pub(crate) fn dataset_not_found(root: impl Into<PathBuf>) -> Self {
        Self {
            errors: vec![DatasetIssue::DatasetNotFound { root: root.into() }],
            ..Self::default()
        }
    }

    /// Passing means no errors were recorded; warnings are ignored.
    pub fn passed(&self) -> bool {
        self.errors.is_empty()
    }
}
