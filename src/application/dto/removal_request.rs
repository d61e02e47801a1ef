use crate::extension_removal::domain::Dependency;
use std::path::PathBuf;

/// RemovalRequest - Request DTO for the remove-extensions use case
#[derive(Debug, Clone)]
pub struct RemovalRequest {
    /// Path to the project directory containing the build descriptor
    pub project_path: PathBuf,
    /// Raw extension queries in the order the user gave them
    pub queries: Vec<String>,
    /// Resolve and report without rewriting the descriptor
    pub dry_run: bool,
    /// Dependency list to resolve queries against instead of a fresh read.
    /// Removal and `changed` are still evaluated against the descriptor on disk.
    pub installed_snapshot: Option<Vec<Dependency>>,
}

impl RemovalRequest {
    pub fn new(project_path: PathBuf, queries: Vec<String>) -> Self {
        Self {
            project_path,
            queries,
            dry_run: false,
            installed_snapshot: None,
        }
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn with_installed_snapshot(mut self, installed: Vec<Dependency>) -> Self {
        self.installed_snapshot = Some(installed);
        self
    }
}
