use super::dependency::Dependency;
use super::query::Query;
use serde::Serialize;

/// The dependencies a single query resolved to
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchResult {
    query: Query,
    matches: Vec<Dependency>,
}

impl MatchResult {
    pub fn new(query: Query, matches: Vec<Dependency>) -> Self {
        Self { query, matches }
    }

    pub fn query(&self) -> &Query {
        &self.query
    }

    pub fn matches(&self) -> &[Dependency] {
        &self.matches
    }

    pub fn is_unmatched(&self) -> bool {
        self.matches.is_empty()
    }

    /// More than one dependency matched; all of them are removed
    pub fn is_ambiguous(&self) -> bool {
        self.matches.len() > 1
    }
}

/// Structured result of one removal invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemovalOutcome {
    resolutions: Vec<MatchResult>,
    removed: Vec<Dependency>,
    dropped: usize,
    skipped_blank: usize,
}

impl RemovalOutcome {
    pub fn new(
        resolutions: Vec<MatchResult>,
        removed: Vec<Dependency>,
        dropped: usize,
        skipped_blank: usize,
    ) -> Self {
        Self {
            resolutions,
            removed,
            dropped,
            skipped_blank,
        }
    }

    /// Distinct queries in the order they were first given
    pub fn attempted_queries(&self) -> Vec<&Query> {
        self.resolutions.iter().map(MatchResult::query).collect()
    }

    pub fn resolutions(&self) -> &[MatchResult] {
        &self.resolutions
    }

    /// Dependencies selected by the queries, whether or not they were still
    /// declared when the plan was applied
    pub fn removed(&self) -> &[Dependency] {
        &self.removed
    }

    /// Number of dependencies actually dropped from the descriptor's list
    pub fn dropped(&self) -> usize {
        self.dropped
    }

    pub fn unmatched_queries(&self) -> Vec<&Query> {
        self.resolutions
            .iter()
            .filter(|r| r.is_unmatched())
            .map(MatchResult::query)
            .collect()
    }

    /// Whether the descriptor's dependency list differs after the operation
    pub fn changed(&self) -> bool {
        self.dropped > 0
    }

    /// Number of blank entries that were ignored
    pub fn skipped_blank(&self) -> usize {
        self.skipped_blank
    }

    /// True when every query matched at least one dependency
    pub fn success(&self) -> bool {
        self.resolutions.iter().all(|r| !r.is_unmatched())
    }
}
