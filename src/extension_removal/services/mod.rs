mod glob_pattern;
mod query_resolver;
mod removal_engine;
mod token_matcher;

pub use glob_pattern::GlobPattern;
pub use query_resolver::QueryResolver;
pub use removal_engine::{RemovalEngine, RemovalPlan};
pub use token_matcher::TokenMatcher;
