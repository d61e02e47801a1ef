use crate::shared::error::ExtensionError;
use crate::shared::security::read_regular_file;
use crate::shared::Result;
use std::path::Path;

/// FileSystemReader adapter for reading build descriptors
///
/// Applies the shared safety checks (no symlinks, regular file, size
/// limit) and maps failures onto descriptor errors.
#[derive(Debug, Clone, Copy)]
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }

    /// Reads a descriptor file
    ///
    /// # Errors
    /// - `DescriptorNotFound` when the file does not exist
    /// - `DescriptorReadError` when it exists but cannot be read safely
    pub fn read_descriptor(&self, path: &Path) -> Result<String> {
        if !path.exists() {
            let project_dir = path.parent().unwrap_or(path);
            return Err(ExtensionError::DescriptorNotFound {
                path: path.to_path_buf(),
                suggestion: format!(
                    "No {} in project directory \"{}\".\n   \
                     Please run in the root directory of the project, or specify the correct path with the --path option.",
                    file_name(path),
                    project_dir.display()
                ),
            }
            .into());
        }

        read_regular_file(path, file_name(path)).map_err(|e| {
            ExtensionError::DescriptorReadError {
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

fn file_name(path: &Path) -> &str {
    path.file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("build descriptor")
}
