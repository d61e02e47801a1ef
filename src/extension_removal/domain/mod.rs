pub mod dependency;
pub mod match_options;
pub mod query;
pub mod removal_outcome;

pub use dependency::{Dependency, DependencyKey};
pub use match_options::MatchOptions;
pub use query::{Query, QueryKind};
pub use removal_outcome::{MatchResult, RemovalOutcome};
