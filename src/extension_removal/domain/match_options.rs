use crate::shared::error::ExtensionError;
use crate::shared::Result;

/// Organizational prefix dropped from artifact ids before fragment matching
pub const DEFAULT_PREFIX: &str = "quarkus";

/// Characters treated as token separators by default
pub const DEFAULT_SEPARATORS: [char; 2] = ['-', '.'];

/// Canonical separator every configured separator is folded into
const CANONICAL_SEPARATOR: char = '-';

/// Characters that carry meaning in queries and can never be separators
const RESERVED_CHARS: [char; 3] = ['*', '?', ':'];

/// Normalization settings shared by query parsing and matching
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchOptions {
    prefix: Option<String>,
    separators: Vec<char>,
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self {
            prefix: Some(DEFAULT_PREFIX.to_string()),
            separators: DEFAULT_SEPARATORS.to_vec(),
        }
    }
}

impl MatchOptions {
    /// Creates options with the given prefix token and separator set.
    ///
    /// An empty prefix disables prefix stripping. `-` is always a separator.
    pub fn new(prefix: Option<String>, separators: Vec<char>) -> Result<Self> {
        let mut options = Self::default().with_separators(separators)?;
        options = options.with_prefix(prefix)?;
        Ok(options)
    }

    pub fn with_prefix(mut self, prefix: Option<String>) -> Result<Self> {
        let prefix = prefix
            .map(|p| p.trim().to_lowercase())
            .filter(|p| !p.is_empty());

        if let Some(ref p) = prefix {
            if p.chars().any(|c| self.is_separator(c) || RESERVED_CHARS.contains(&c)) {
                return Err(ExtensionError::Validation {
                    message: format!(
                        "prefix '{}' must be a single token without separators or wildcards",
                        p
                    ),
                }
                .into());
            }
        }

        self.prefix = prefix;
        Ok(self)
    }

    pub fn with_separators(mut self, separators: Vec<char>) -> Result<Self> {
        if let Some(c) = separators.iter().find(|c| RESERVED_CHARS.contains(c)) {
            return Err(ExtensionError::Validation {
                message: format!("'{}' cannot be used as a token separator", c),
            }
            .into());
        }

        let mut normalized = vec![CANONICAL_SEPARATOR];
        for c in separators {
            if !normalized.contains(&c) {
                normalized.push(c);
            }
        }
        self.separators = normalized;
        Ok(self)
    }

    pub fn prefix(&self) -> Option<&str> {
        self.prefix.as_deref()
    }

    pub fn separators(&self) -> &[char] {
        &self.separators
    }

    fn is_separator(&self, c: char) -> bool {
        self.separators.contains(&c)
    }

    /// Lower-cases and folds every separator into `-`
    pub fn normalize(&self, text: &str) -> String {
        text.chars()
            .map(|c| {
                if self.is_separator(c) {
                    CANONICAL_SEPARATOR
                } else {
                    c
                }
            })
            .collect::<String>()
            .to_lowercase()
    }

    /// Splits a name into its normalized, non-empty tokens
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        self.normalize(text)
            .split(CANONICAL_SEPARATOR)
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .collect()
    }

    pub fn is_prefix_token(&self, token: &str) -> bool {
        self.prefix.as_deref() == Some(token)
    }

    /// Drops the leading prefix token, if present
    pub fn strip_prefix<'a>(&self, tokens: &'a [String]) -> &'a [String] {
        match tokens.split_first() {
            Some((first, rest)) if self.is_prefix_token(first) => rest,
            _ => tokens,
        }
    }
}
