use crate::ports::outbound::ManifestReader;
use crate::shared::error::AnalyzerError;
use crate::shared::security::validate_regular_file;
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// FileSystemReader adapter for reading bean container manifests
///
/// Every read goes through the shared security checks: symbolic links,
/// non-regular files and oversized files are rejected before any byte is read.
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }

    fn safe_read_file(&self, path: &Path, file_description: &str) -> Result<String> {
        validate_regular_file(path, file_description)?;

        fs::read_to_string(path).map_err(|e| {
            AnalyzerError::FileReadError {
                path: path.to_path_buf(),
                details: e.to_string(),
            }
            .into()
        })
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl ManifestReader for FileSystemReader {
    fn read_manifest(&self, manifest_path: &Path) -> Result<String> {
        if !manifest_path.exists() && manifest_path.symlink_metadata().is_err() {
            return Err(AnalyzerError::ManifestNotFound {
                path: manifest_path.to_path_buf(),
                suggestion: format!(
                    "No manifest at \"{}\".\n   \
                     Export your bean container to a TOML manifest, or specify its location with the --manifest option.",
                    manifest_path.display()
                ),
            }
            .into());
        }

        self.safe_read_file(manifest_path, "manifest")
    }
}
