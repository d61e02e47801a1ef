use crate::ports::outbound::OutputPresenter;
use crate::shared::error::ExtensionError;
use crate::shared::security::validate_not_symlink;
use crate::shared::Result;
use std::fs;
use std::io::{self, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// FileSystemWriter adapter for replacing build descriptors atomically
///
/// Content is written to a temporary file next to the target and renamed
/// over it. Readers see either the old or the new file, and the original
/// file permissions are kept.
#[derive(Debug, Clone, Copy)]
pub struct FileSystemWriter;

impl FileSystemWriter {
    pub fn new() -> Self {
        Self
    }

    pub fn write_atomically(&self, path: &Path, content: &str) -> Result<()> {
        let write_error = |details: String| ExtensionError::DescriptorWriteError {
            path: path.to_path_buf(),
            details,
        };

        validate_not_symlink(path, "write")?;

        let parent = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        if !parent.is_dir() {
            return Err(write_error(format!(
                "Parent directory does not exist: {}",
                parent.display()
            ))
            .into());
        }

        let mut temp_file = NamedTempFile::new_in(parent)
            .map_err(|e| write_error(format!("Failed to create temporary file: {}", e)))?;

        temp_file
            .write_all(content.as_bytes())
            .and_then(|_| temp_file.as_file().sync_all())
            .map_err(|e| write_error(e.to_string()))?;

        if let Ok(metadata) = fs::metadata(path) {
            temp_file
                .as_file()
                .set_permissions(metadata.permissions())
                .map_err(|e| write_error(format!("Failed to copy permissions: {}", e)))?;
        }

        temp_file
            .persist(path)
            .map_err(|e| write_error(e.error.to_string()))?;

        Ok(())
    }
}

impl Default for FileSystemWriter {
    fn default() -> Self {
        Self::new()
    }
}

/// StdoutPresenter adapter for writing output to stdout
///
/// This adapter implements the OutputPresenter port for stdout output.
pub struct StdoutPresenter;

impl StdoutPresenter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for StdoutPresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputPresenter for StdoutPresenter {
    fn present(&self, content: &str) -> Result<()> {
        io::stdout()
            .write_all(content.as_bytes())
            .map_err(|e| anyhow::anyhow!("Failed to write to stdout: {}", e))?;
        Ok(())
    }
}
