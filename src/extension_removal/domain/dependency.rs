use crate::shared::Result;
use serde::Serialize;
use std::fmt;

/// Identity of a declared dependency for matching, deduplication and removal.
///
/// Two dependencies with the same group and artifact are the same dependency
/// regardless of how their versions are spelled.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DependencyKey {
    group: String,
    artifact: String,
}

impl DependencyKey {
    pub fn group(&self) -> &str {
        &self.group
    }

    pub fn artifact(&self) -> &str {
        &self.artifact
    }
}

impl fmt::Display for DependencyKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.group, self.artifact)
    }
}

/// A dependency declared in a build descriptor
///
/// Structural equality (including the version) is used only to compare whole
/// dependency lists; use [`Dependency::key`] for identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Dependency {
    group: String,
    artifact: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    version: Option<String>,
}

impl Dependency {
    pub fn new(
        group: impl Into<String>,
        artifact: impl Into<String>,
        version: Option<String>,
    ) -> Result<Self> {
        let group = group.into();
        let artifact = artifact.into();

        if artifact.trim().is_empty() {
            anyhow::bail!("Dependency artifact id cannot be empty (group: '{}')", group);
        }

        Ok(Self {
            group,
            artifact,
            version: version.filter(|v| !v.is_empty()),
        })
    }

    pub fn group(&self) -> &str {
        &self.group
    }

    pub fn artifact(&self) -> &str {
        &self.artifact
    }

    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    pub fn key(&self) -> DependencyKey {
        DependencyKey {
            group: self.group.clone(),
            artifact: self.artifact.clone(),
        }
    }

    /// True when `other` denotes the same dependency, ignoring the version
    pub fn same_identity(&self, other: &Dependency) -> bool {
        self.group == other.group && self.artifact == other.artifact
    }
}

impl fmt::Display for Dependency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.version {
            Some(version) => write!(f, "{}:{}:{}", self.group, self.artifact, version),
            None => write!(f, "{}:{}", self.group, self.artifact),
        }
    }
}
