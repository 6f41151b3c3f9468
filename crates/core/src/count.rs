use std::path::Path;

use tracing::debug;
use walkdir::{DirEntry, WalkDir};

use crate::config::ValidationConfig;
use crate::error::{DatasetCheckError, Result};
use crate::model::FileCounts;

/// Counts image and non-image files directly inside `dir`.
///
/// Subdirectories are skipped, as are symlinks that do not resolve to a
/// regular file. A missing `dir` is an error, not an empty count.
pub fn count_files(dir: &Path, config: &ValidationConfig) -> Result<FileCounts> {
    let mut counts = FileCounts::default();

    for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
        let entry = entry.map_err(|err| DatasetCheckError::read_dir(dir, err))?;
        if !is_regular_file(&entry) {
            debug!("skipping non-file entry {}", entry.path().display());
            continue;
        }

        if config.is_image(entry.path()) {
            counts.images += 1;
        } else {
            counts.non_images += 1;
        }
    }

    Ok(counts)
}

fn is_regular_file(entry: &DirEntry) -> bool {
    let file_type = entry.file_type();
    file_type.is_file() || (file_type.is_symlink() && entry.path().is_file())
}
