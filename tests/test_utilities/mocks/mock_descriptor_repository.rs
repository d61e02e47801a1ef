use ext_remove::prelude::*;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Mock DescriptorRepository holding the declared dependencies in memory
///
/// Clones share state, so a test can keep a handle after moving the mock
/// into a use case.
#[derive(Clone)]
pub struct MockDescriptorRepository {
    pub dependencies: Arc<Mutex<Vec<Dependency>>>,
    pub writes: Arc<Mutex<Vec<Vec<Dependency>>>>,
    pub fail_read: bool,
    pub fail_write: bool,
}

impl MockDescriptorRepository {
    pub fn new(dependencies: Vec<Dependency>) -> Self {
        Self {
            dependencies: Arc::new(Mutex::new(dependencies)),
            writes: Arc::new(Mutex::new(Vec::new())),
            fail_read: false,
            fail_write: false,
        }
    }

    pub fn with_read_failure() -> Self {
        Self {
            fail_read: true,
            ..Self::new(Vec::new())
        }
    }

    pub fn with_write_failure(dependencies: Vec<Dependency>) -> Self {
        Self {
            fail_write: true,
            ..Self::new(dependencies)
        }
    }

    pub fn current(&self) -> Vec<Dependency> {
        self.dependencies.lock().unwrap().clone()
    }

    pub fn artifacts(&self) -> Vec<String> {
        self.current()
            .iter()
            .map(|d| d.artifact().to_string())
            .collect()
    }

    pub fn write_count(&self) -> usize {
        self.writes.lock().unwrap().len()
    }
}

impl DescriptorRepository for MockDescriptorRepository {
    fn descriptor_path(&self, project_path: &Path) -> PathBuf {
        project_path.join("pom.xml")
    }

    fn read_dependencies(&self, _project_path: &Path) -> Result<Vec<Dependency>> {
        if self.fail_read {
            anyhow::bail!("Mock descriptor read failure");
        }
        Ok(self.current())
    }

    fn write_dependencies(&self, _project_path: &Path, dependencies: &[Dependency]) -> Result<()> {
        if self.fail_write {
            anyhow::bail!("Mock descriptor write failure");
        }
        *self.dependencies.lock().unwrap() = dependencies.to_vec();
        self.writes.lock().unwrap().push(dependencies.to_vec());
        Ok(())
    }
}
