use super::token_matcher::TokenMatcher;
use crate::extension_removal::domain::{Dependency, MatchResult, Query};
use std::collections::HashSet;

/// QueryResolver - Resolves one query against the installed dependency list
///
/// Collects every matching dependency, not just the first, in installed
/// order. A dependency declared twice (same group and artifact) appears once.
#[derive(Debug, Clone, Default)]
pub struct QueryResolver {
    matcher: TokenMatcher,
}

impl QueryResolver {
    pub fn new(matcher: TokenMatcher) -> Self {
        Self { matcher }
    }

    pub fn matcher(&self) -> &TokenMatcher {
        &self.matcher
    }

    pub fn resolve(&self, installed: &[Dependency], query: &Query) -> MatchResult {
        let mut seen = HashSet::new();
        let matches = installed
            .iter()
            .filter(|dep| self.matcher.matches(dep, query))
            .filter(|dep| seen.insert(dep.key()))
            .cloned()
            .collect();

        MatchResult::new(query.clone(), matches)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extension_removal::domain::MatchOptions;

    fn query(raw: &str) -> Query {
        Query::parse(raw, &MatchOptions::default()).unwrap()
    }

    fn installed() -> Vec<Dependency> {
        vec![
            Dependency::new("io.quarkus", "quarkus-jdbc-postgresql", None).unwrap(),
            Dependency::new("io.quarkus", "quarkus-jdbc-h2", None).unwrap(),
            Dependency::new("io.quarkus", "quarkus-agroal", None).unwrap(),
        ]
    }

    #[test]
    fn test_resolve_collects_all_matches_in_order() {
        let result = QueryResolver::default().resolve(&installed(), &query("jdbc"));
        let artifacts: Vec<&str> = result.matches().iter().map(|d| d.artifact()).collect();
        assert_eq!(artifacts, vec!["quarkus-jdbc-postgresql", "quarkus-jdbc-h2"]);
        assert!(result.is_ambiguous());
    }

    #[test]
    fn test_resolve_no_match() {
        let result = QueryResolver::default().resolve(&installed(), &query("missing"));
        assert!(result.is_unmatched());
        assert_eq!(result.query().text(), "missing");
    }

    #[test]
    fn test_resolve_does_not_mutate_input() {
        let deps = installed();
        let before = deps.clone();
        let _ = QueryResolver::default().resolve(&deps, &query("agroal"));
        assert_eq!(deps, before);
    }

    #[test]
    fn test_resolve_collapses_duplicate_declarations() {
        let deps = vec![
            Dependency::new("commons-io", "commons-io", Some("2.6".into())).unwrap(),
            Dependency::new("commons-io", "commons-io", Some("2.7".into())).unwrap(),
        ];
        let result = QueryResolver::default().resolve(&deps, &query("commons-io:commons-io"));
        assert_eq!(result.matches().len(), 1);
        assert_eq!(result.matches()[0].version(), Some("2.6"));
    }
}
