use crate::extension_removal::domain::Dependency;
use crate::shared::Result;
use std::path::{Path, PathBuf};

/// DescriptorRepository port for reading and rewriting a build descriptor
///
/// One implementation exists per build tool family. Implementations own the
/// file format; the core only sees the flat list of declared dependencies.
pub trait DescriptorRepository {
    /// Location of the descriptor inside the project directory
    fn descriptor_path(&self, project_path: &Path) -> PathBuf;

    /// Reads the declared dependencies from the project's descriptor
    ///
    /// # Errors
    /// Returns an error if:
    /// - The descriptor does not exist
    /// - The descriptor cannot be read or parsed
    fn read_dependencies(&self, project_path: &Path) -> Result<Vec<Dependency>>;

    /// Rewrites the descriptor so that it declares exactly `dependencies`
    ///
    /// `dependencies` must be a subset of what the descriptor declares.
    /// Everything that is not a dependency declaration is preserved, and the
    /// write is atomic: readers see either the old or the new file.
    ///
    /// # Errors
    /// Returns an error if the descriptor cannot be read or replaced, or if
    /// `dependencies` names a dependency the descriptor does not declare
    fn write_dependencies(&self, project_path: &Path, dependencies: &[Dependency]) -> Result<()>;
}

impl<T: DescriptorRepository + ?Sized> DescriptorRepository for Box<T> {
    fn descriptor_path(&self, project_path: &Path) -> PathBuf {
        (**self).descriptor_path(project_path)
    }

    fn read_dependencies(&self, project_path: &Path) -> Result<Vec<Dependency>> {
        (**self).read_dependencies(project_path)
    }

    fn write_dependencies(&self, project_path: &Path, dependencies: &[Dependency]) -> Result<()> {
        (**self).write_dependencies(project_path, dependencies)
    }
}
