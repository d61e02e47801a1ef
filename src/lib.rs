//! ext-remove - extension removal for Maven and Gradle projects
//!
//! This library resolves user-supplied extension identifiers (short names,
//! `group:artifact[:version]` coordinates, glob patterns) against the
//! dependencies a build descriptor declares, and removes the matches,
//! following hexagonal architecture and Domain-Driven Design principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`extension_removal`): Queries, matching and batch removal
//! - **Application Layer** (`application`): Use cases and application services
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use ext_remove::prelude::*;
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<()> {
//! // Create adapters
//! let descriptor = MavenDescriptor::new();
//! let progress_reporter = StderrProgressReporter::new();
//!
//! // Create use case
//! let use_case =
//!     RemoveExtensionsUseCase::new(descriptor, progress_reporter, MatchOptions::default());
//!
//! // Execute
//! let request = RemovalRequest::new(
//!     PathBuf::from("."),
//!     vec!["agroal".to_string(), "commons-io:commons-io".to_string()],
//! );
//! let response = use_case.execute(request)?;
//!
//! // Format output
//! let formatter = TextReportFormatter::new(false);
//! println!("{}", formatter.format(&response)?);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod extension_removal;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::descriptors::{BuildTool, GradleDescriptor, MavenDescriptor};
    pub use crate::adapters::outbound::filesystem::{
        FileSystemReader, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{JsonReportFormatter, TextReportFormatter};
    pub use crate::application::dto::{OutputFormat, RemovalRequest, RemovalResponse};
    pub use crate::application::use_cases::RemoveExtensionsUseCase;
    pub use crate::extension_removal::domain::{
        Dependency, DependencyKey, MatchOptions, MatchResult, Query, QueryKind, RemovalOutcome,
    };
    pub use crate::extension_removal::services::{
        GlobPattern, QueryResolver, RemovalEngine, RemovalPlan, TokenMatcher,
    };
    pub use crate::ports::inbound::ExtensionRemovalPort;
    pub use crate::ports::outbound::{
        DescriptorRepository, OutputPresenter, ProgressReporter, ReportFormatter,
    };
    pub use crate::shared::Result;
}
