use super::glob_pattern::GlobPattern;
use crate::extension_removal::domain::{Dependency, MatchOptions, Query, QueryKind};

/// TokenMatcher - Decides whether one dependency is selected by one query
///
/// Dispatches on the query kind:
/// - Coordinate: exact group/artifact (and version, when given)
/// - Glob: segment-scoped wildcards over the artifact id, case-insensitive
/// - Fragment: contiguous run of artifact tokens, prefix token dropped
#[derive(Debug, Clone, Default)]
pub struct TokenMatcher {
    options: MatchOptions,
}

impl TokenMatcher {
    pub fn new(options: MatchOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &MatchOptions {
        &self.options
    }

    pub fn matches(&self, dependency: &Dependency, query: &Query) -> bool {
        match query.kind() {
            QueryKind::Coordinate {
                group,
                artifact,
                version,
            } => Self::matches_coordinate(dependency, group, artifact, version.as_deref()),
            QueryKind::Glob { pattern } => self.matches_glob(dependency, pattern),
            QueryKind::Fragment {
                tokens,
                malformed_coordinate,
            } => !malformed_coordinate && self.matches_fragment(dependency, tokens),
        }
    }

    fn matches_coordinate(
        dependency: &Dependency,
        group: &str,
        artifact: &str,
        version: Option<&str>,
    ) -> bool {
        dependency.group() == group
            && dependency.artifact() == artifact
            && (version.is_none() || dependency.version() == version)
    }

    /// The pattern may cover the full artifact id or the id without its
    /// prefix token, so `smallrye**` selects `quarkus-smallrye-health`.
    fn matches_glob(&self, dependency: &Dependency, pattern: &str) -> bool {
        let glob = GlobPattern::compile(pattern);
        let name = self.options.normalize(dependency.artifact());
        if glob.matches(&name) {
            return true;
        }

        let tokens = self.options.tokenize(dependency.artifact());
        let stripped = self.options.strip_prefix(&tokens);
        stripped.len() < tokens.len() && glob.matches(&stripped.join("-"))
    }

    fn matches_fragment(&self, dependency: &Dependency, query_tokens: &[String]) -> bool {
        if query_tokens.is_empty() {
            return false;
        }

        let tokens = self.options.tokenize(dependency.artifact());
        // "quarkus-arc" names the prefix itself and is compared unstripped
        let haystack = if query_tokens.len() > 1 && self.options.is_prefix_token(&query_tokens[0])
        {
            &tokens[..]
        } else {
            self.options.strip_prefix(&tokens)
        };

        if contains_token_run(haystack, query_tokens) {
            return true;
        }

        // "vert.x" / "vert-x" also stand for the single token "vertx"
        if query_tokens.len() > 1 {
            let compact = query_tokens.concat();
            return haystack.iter().any(|token| *token == compact);
        }

        false
    }
}

/// True when `needle` occurs as a contiguous run of `haystack`.
///
/// Tokens compare exactly, except that the last token of a multi-token
/// needle may be a prefix of its counterpart ("jdbc-postgre").
fn contains_token_run(haystack: &[String], needle: &[String]) -> bool {
    let Some((last, leading)) = needle.split_last() else {
        return false;
    };
    if needle.len() > haystack.len() {
        return false;
    }

    haystack.windows(needle.len()).any(|window| {
        let (window_last, window_leading) = match window.split_last() {
            Some(parts) => parts,
            None => return false,
        };
        let last_matches = if leading.is_empty() {
            window_last == last
        } else {
            window_last.starts_with(last.as_str())
        };
        window_leading == leading && last_matches
    })
}
