use crate::extension_removal::domain::RemovalOutcome;
use std::path::PathBuf;

/// RemovalResponse - Response DTO from the remove-extensions use case
#[derive(Debug, Clone)]
pub struct RemovalResponse {
    /// What the batch resolved, removed and left unmatched
    pub outcome: RemovalOutcome,
    /// The descriptor that was read (and written, when changed)
    pub descriptor_path: PathBuf,
    /// True when the descriptor was deliberately left untouched
    pub dry_run: bool,
}

impl RemovalResponse {
    pub fn new(outcome: RemovalOutcome, descriptor_path: PathBuf, dry_run: bool) -> Self {
        Self {
            outcome,
            descriptor_path,
            dry_run,
        }
    }

    pub fn success(&self) -> bool {
        self.outcome.success()
    }
}
