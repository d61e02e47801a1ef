use super::query_resolver::QueryResolver;
use super::token_matcher::TokenMatcher;
use crate::extension_removal::domain::{
    Dependency, DependencyKey, MatchOptions, MatchResult, Query, RemovalOutcome,
};
use std::collections::HashSet;

/// What a batch of queries selected, before it is applied to a descriptor
#[derive(Debug, Clone)]
pub struct RemovalPlan {
    resolutions: Vec<MatchResult>,
    removed: Vec<Dependency>,
    removal_keys: HashSet<DependencyKey>,
    skipped_blank: usize,
}

impl RemovalPlan {
    pub fn resolutions(&self) -> &[MatchResult] {
        &self.resolutions
    }

    /// Union of all matches, in installed order, one per dependency key
    pub fn removed(&self) -> &[Dependency] {
        &self.removed
    }

    pub fn skipped_blank(&self) -> usize {
        self.skipped_blank
    }

    /// Returns `current` without the selected dependencies and whether that
    /// differs from `current`.
    ///
    /// `current` is normally the list the plan was resolved against, but may
    /// be a newer read of the descriptor; `changed` always reflects `current`.
    pub fn apply(&self, current: &[Dependency]) -> (Vec<Dependency>, bool) {
        let remaining: Vec<Dependency> = current
            .iter()
            .filter(|dep| !self.removal_keys.contains(&dep.key()))
            .cloned()
            .collect();
        let changed = remaining.as_slice() != current;
        (remaining, changed)
    }

    /// `dropped` is how many dependencies `apply` actually took out
    pub fn into_outcome(self, dropped: usize) -> RemovalOutcome {
        RemovalOutcome::new(self.resolutions, self.removed, dropped, self.skipped_blank)
    }
}

/// RemovalEngine - Resolves a batch of queries and builds the removal set
///
/// Every query is resolved against the original list, so the order of
/// queries within a batch never changes the result. Identical queries are
/// resolved once. A query without matches is recorded, not raised.
#[derive(Debug, Clone, Default)]
pub struct RemovalEngine {
    resolver: QueryResolver,
}

impl RemovalEngine {
    pub fn new(options: MatchOptions) -> Self {
        Self {
            resolver: QueryResolver::new(TokenMatcher::new(options)),
        }
    }

    pub fn options(&self) -> &MatchOptions {
        self.resolver.matcher().options()
    }

    pub fn plan<S: AsRef<str>>(&self, installed: &[Dependency], raw_queries: &[S]) -> RemovalPlan {
        let mut skipped_blank = 0;
        let mut queries: Vec<Query> = Vec::new();
        for raw in raw_queries {
            match Query::parse(raw.as_ref(), self.options()) {
                Some(query) if !queries.contains(&query) => queries.push(query),
                Some(_) => {}
                None => skipped_blank += 1,
            }
        }

        let resolutions: Vec<MatchResult> = queries
            .iter()
            .map(|query| self.resolver.resolve(installed, query))
            .collect();

        let removal_keys: HashSet<DependencyKey> = resolutions
            .iter()
            .flat_map(|r| r.matches().iter().map(Dependency::key))
            .collect();

        let mut seen = HashSet::new();
        let removed = installed
            .iter()
            .filter(|dep| {
                let key = dep.key();
                removal_keys.contains(&key) && seen.insert(key)
            })
            .cloned()
            .collect();

        RemovalPlan {
            resolutions,
            removed,
            removal_keys,
            skipped_blank,
        }
    }

    /// Resolves `raw_queries` against `installed` and applies the result to
    /// the same list. Returns the outcome and the remaining dependencies.
    pub fn remove_all<S: AsRef<str>>(
        &self,
        installed: &[Dependency],
        raw_queries: &[S],
    ) -> (RemovalOutcome, Vec<Dependency>) {
        let plan = self.plan(installed, raw_queries);
        let (remaining, _) = plan.apply(installed);
        let dropped = installed.len() - remaining.len();
        (plan.into_outcome(dropped), remaining)
    }
}
