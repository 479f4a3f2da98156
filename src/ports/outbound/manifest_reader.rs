use crate::shared::Result;
use std::path::Path;

/// ManifestReader port for reading bean container manifests
///
/// This port abstracts the file system operations needed to load the
/// manifest describing a bean container snapshot.
pub trait ManifestReader {
    /// Reads the manifest at the specified path
    ///
    /// # Arguments
    /// * `manifest_path` - Path to the manifest file
    ///
    /// # Returns
    /// The raw content of the manifest as a string
    ///
    /// # Errors
    /// Returns an error if:
    /// - The manifest does not exist
    /// - The path is a symlink or not a regular file
    /// - The file cannot be read due to permissions or I/O errors
    fn read_manifest(&self, manifest_path: &Path) -> Result<String>;
}
