use super::match_options::MatchOptions;
use serde::{Serialize, Serializer};
use std::fmt;
use std::hash::{Hash, Hasher};

/// Markers that turn a query into a glob pattern
const WILDCARDS: [char; 2] = ['*', '?'];

/// The three ways a query can select dependencies
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryKind {
    /// `group:artifact[:version]`, matched exactly
    Coordinate {
        group: String,
        artifact: String,
        version: Option<String>,
    },
    /// Normalized shell-style pattern over the artifact id
    Glob { pattern: String },
    /// Normalized tokens matched as a contiguous run of artifact tokens
    Fragment {
        tokens: Vec<String>,
        /// Colon-bearing text that does not fit the coordinate grammar.
        /// Such a query never matches.
        malformed_coordinate: bool,
    },
}

/// A user query, trimmed and classified
///
/// Equality and hashing use the trimmed text only, so the same query typed
/// twice in one batch collapses to one.
#[derive(Debug, Clone)]
pub struct Query {
    raw: String,
    text: String,
    kind: QueryKind,
}

impl Query {
    /// Classifies a raw query string.
    ///
    /// Returns `None` for a blank query. Every other input yields exactly one
    /// [`QueryKind`]; coordinate syntax takes precedence over wildcards.
    pub fn parse(raw: &str, options: &MatchOptions) -> Option<Self> {
        let text = raw.trim();
        if text.is_empty() {
            return None;
        }

        let kind = if text.contains(':') {
            parse_coordinate(text).unwrap_or_else(|| QueryKind::Fragment {
                tokens: options.tokenize(text),
                malformed_coordinate: true,
            })
        } else if text.contains(WILDCARDS) {
            QueryKind::Glob {
                pattern: options.normalize(text),
            }
        } else {
            QueryKind::Fragment {
                tokens: options.tokenize(text),
                malformed_coordinate: false,
            }
        };

        Some(Self {
            raw: raw.to_string(),
            text: text.to_string(),
            kind,
        })
    }

    /// The string exactly as the user supplied it
    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn kind(&self) -> &QueryKind {
        &self.kind
    }

    pub fn is_malformed_coordinate(&self) -> bool {
        matches!(
            self.kind,
            QueryKind::Fragment {
                malformed_coordinate: true,
                ..
            }
        )
    }
}

/// Parses `group:artifact` or `group:artifact:version` with non-empty segments
fn parse_coordinate(text: &str) -> Option<QueryKind> {
    let segments: Vec<&str> = text.split(':').map(str::trim).collect();
    if segments.iter().any(|s| s.is_empty()) {
        return None;
    }

    match segments.as_slice() {
        [group, artifact] => Some(QueryKind::Coordinate {
            group: group.to_string(),
            artifact: artifact.to_string(),
            version: None,
        }),
        [group, artifact, version] => Some(QueryKind::Coordinate {
            group: group.to_string(),
            artifact: artifact.to_string(),
            version: Some(version.to_string()),
        }),
        _ => None,
    }
}

impl PartialEq for Query {
    fn eq(&self, other: &Self) -> bool {
        self.text == other.text
    }
}

impl Eq for Query {}

impl Hash for Query {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.text.hash(state);
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl Serialize for Query {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.text)
    }
}
