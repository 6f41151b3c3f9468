use std::collections::HashSet;
use std::path::Path;

use tracing::{debug, info};
use walkdir::WalkDir;

use crate::config::ValidationConfig;
use crate::count::count_files;
use crate::error::{DatasetCheckError, Result};
use crate::model::{ClassRow, DatasetIssue, DatasetWarning, ValidationReport};

/// Checks `root` against the expected class layout in `config`.
///
/// A missing or non-directory root yields a report with a single
/// [`DatasetIssue::DatasetNotFound`]. Every other check runs to completion and
/// accumulates into the report. Filesystem failures while listing entries are
/// returned as errors.
pub fn validate_dataset(root: &Path, config: &ValidationConfig) -> Result<ValidationReport> {
    info!("validating dataset at {}", root.display());

    if !root.is_dir() {
        return Ok(ValidationReport::dataset_not_found(root));
    }

    let entries = list_root(root)?;
    let existing_dirs = entries
        .iter()
        .filter(|entry| entry.is_dir)
        .map(|entry| entry.name.as_str())
        .collect::<HashSet<_>>();

    let mut report = ValidationReport::default();

    let missing = config
        .expected_classes
        .iter()
        .filter(|class| !existing_dirs.contains(class.as_str()))
        .cloned()
        .collect::<Vec<_>>();
    if !missing.is_empty() {
        report
            .errors
            .push(DatasetIssue::MissingClasses { names: missing });
    }

    for class in &config.expected_classes {
        if !existing_dirs.contains(class.as_str()) {
            continue;
        }

        let counts = count_files(&root.join(class), config)?;
        debug!(
            "class {}: {} image(s), {} non-image file(s)",
            class, counts.images, counts.non_images
        );

        if counts.images < config.min_images_per_class {
            report.errors.push(DatasetIssue::InsufficientImages {
                class: class.clone(),
                found: counts.images,
                minimum: config.min_images_per_class,
            });
        }

        if counts.non_images > 0 {
            report.warnings.push(DatasetWarning::NonImageFiles {
                class: class.clone(),
                count: counts.non_images,
            });
        }

        report.rows.push(ClassRow {
            name: class.clone(),
            images: counts.images,
            non_images: counts.non_images,
        });
    }

    let mut unexpected = entries
        .into_iter()
        .map(|entry| entry.name)
        .filter(|name| !config.is_expected_class(name))
        .collect::<Vec<_>>();
    if !unexpected.is_empty() {
        unexpected.sort();
        report
            .warnings
            .push(DatasetWarning::UnexpectedEntries { names: unexpected });
    }

    info!(
        "dataset validation finished: {} error(s), {} warning(s)",
        report.errors.len(),
        report.warnings.len()
    );
    Ok(report)
}

struct RootEntry {
    name: String,
    is_dir: bool,
}

fn list_root(root: &Path) -> Result<Vec<RootEntry>> {
    let mut entries = Vec::new();
    for entry in WalkDir::new(root).min_depth(1).max_depth(1) {
        let entry = entry.map_err(|err| DatasetCheckError::read_dir(root, err))?;
        entries.push(RootEntry {
            name: entry.file_name().to_string_lossy().to_string(),
            is_dir: entry.path().is_dir(),
        });
    }
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::Path;

    use super::validate_dataset;
    use crate::config::ValidationConfig;
    use crate::model::{ClassRow, DatasetIssue, DatasetWarning};

    fn small_config() -> ValidationConfig {
        ValidationConfig {
            expected_classes: vec!["Cats".to_string(), "Dogs".to_string()],
            image_extensions: vec!["png".to_string()],
            min_images_per_class: 2,
        }
    }

    fn class_with(root: &Path, class: &str, files: &[&str]) {
        let dir = root.join(class);
        fs::create_dir(&dir).expect("create class dir");
        for file in files {
            fs::write(dir.join(file), b"x").expect("write file");
        }
    }

    #[test]
    fn root_that_is_a_file_fails_fast() {
        let dir = tempfile::tempdir().expect("tempdir");
        let root = dir.path().join("dataset.zip");
        fs::write(&root, b"x").expect("write file");

        let report = validate_dataset(&root, &small_config()).expect("report");

        assert_eq!(
            report.errors,
            vec![DatasetIssue::DatasetNotFound { root: root.clone() }]
        );
        assert!(report.warnings.is_empty());
        assert!(report.rows.is_empty());
        assert!(!report.passed());
    }

    #[test]
    fn custom_config_drives_classes_and_threshold() {
        let dir = tempfile::tempdir().expect("tempdir");
        class_with(dir.path(), "Cats", &["a.png", "b.PNG"]);
        class_with(dir.path(), "Dogs", &["a.png", "b.jpg"]);

        let report = validate_dataset(dir.path(), &small_config()).expect("report");

        assert_eq!(
            report.errors,
            vec![DatasetIssue::InsufficientImages {
                class: "Dogs".to_string(),
                found: 1,
                minimum: 2,
            }]
        );
        assert_eq!(
            report.warnings,
            vec![DatasetWarning::NonImageFiles {
                class: "Dogs".to_string(),
                count: 1,
            }]
        );
        assert_eq!(
            report.rows,
            vec![
                ClassRow {
                    name: "Cats".to_string(),
                    images: 2,
                    non_images: 0,
                },
                ClassRow {
                    name: "Dogs".to_string(),
                    images: 1,
                    non_images: 1,
                },
            ]
        );
    }

    #[test]
    fn class_name_that_is_a_file_counts_as_missing() {
        let dir = tempfile::tempdir().expect("tempdir");
        class_with(dir.path(), "Cats", &["a.png", "b.png"]);
        fs::write(dir.path().join("Dogs"), b"x").expect("write file");

        let report = validate_dataset(dir.path(), &small_config()).expect("report");

        assert_eq!(
            report.errors,
            vec![DatasetIssue::MissingClasses {
                names: vec!["Dogs".to_string()],
            }]
        );
        assert!(report.warnings.is_empty());
        assert_eq!(report.rows.len(), 1);
    }

    #[test]
    fn lowercase_class_folder_is_missing_and_unexpected() {
        let dir = tempfile::tempdir().expect("tempdir");
        class_with(dir.path(), "Cats", &["a.png", "b.png"]);
        class_with(dir.path(), "dogs", &["a.png", "b.png"]);

        let report = validate_dataset(dir.path(), &small_config()).expect("report");

        assert_eq!(
            report.errors,
            vec![DatasetIssue::MissingClasses {
                names: vec!["Dogs".to_string()],
            }]
        );
        assert_eq!(
            report.warnings,
            vec![DatasetWarning::UnexpectedEntries {
                names: vec!["dogs".to_string()],
            }]
        );
    }

    #[test]
    fn errors_and_warnings_keep_fixed_order() {
        let dir = tempfile::tempdir().expect("tempdir");
        class_with(dir.path(), "Dogs", &["notes.txt"]);
        fs::write(dir.path().join("zeta.txt"), b"x").expect("write file");
        fs::create_dir(dir.path().join("alpha")).expect("create dir");

        let report = validate_dataset(dir.path(), &small_config()).expect("report");

        assert_eq!(
            report.errors,
            vec![
                DatasetIssue::MissingClasses {
                    names: vec!["Cats".to_string()],
                },
                DatasetIssue::InsufficientImages {
                    class: "Dogs".to_string(),
                    found: 0,
                    minimum: 2,
                },
            ]
        );
        assert_eq!(
            report.warnings,
            vec![
                DatasetWarning::NonImageFiles {
                    class: "Dogs".to_string(),
                    count: 1,
                },
                DatasetWarning::UnexpectedEntries {
                    names: vec!["alpha".to_string(), "zeta.txt".to_string()],
                },
            ]
        );
        assert_eq!(report.rows.len(), 1);
        assert_eq!(report.passed(), report.errors.is_empty());
    }
}
