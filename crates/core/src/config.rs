use std::path::Path;

/// Class folders every dataset must contain, in reporting order.
pub const EXPECTED_CLASSES: &[&str] = &["Rice", "Dosa", "Idli", "Chapati"];

/// Recognized image extensions, lowercase and without the leading dot.
pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "webp"];

pub const MIN_IMAGES_PER_CLASS: usize = 50;

/// Name of the dataset folder next to the install directory.
pub const DEFAULT_DATASET_DIR: &str = "ml_dataset";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationConfig {
    /// Expected class folder names. Matched case-sensitively.
    pub expected_classes: Vec<String>,
    /// Image extensions, lowercase, no leading dot.
    pub image_extensions: Vec<String>,
    pub min_images_per_class: usize,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            expected_classes: EXPECTED_CLASSES.iter().map(|name| name.to_string()).collect(),
            image_extensions: IMAGE_EXTENSIONS.iter().map(|ext| ext.to_string()).collect(),
            min_images_per_class: MIN_IMAGES_PER_CLASS,
        }
    }
}

impl ValidationConfig {
    pub fn is_expected_class(&self, name: &str) -> bool {
        self.expected_classes.iter().any(|class| class == name)
    }

    /// Classifies a file by extension, ignoring case.
    pub fn is_image(&self, path: &Path) -> bool {
        let Some(extension) = path.extension() else {
            return false;
        };
        let extension = extension.to_string_lossy().to_lowercase();
        self.image_extensions
            .iter()
            .any(|known| *known == extension)
    }
}
