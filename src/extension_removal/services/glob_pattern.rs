/// Segment separator that `*` and `?` never cross
const SEGMENT_SEPARATOR: char = '-';

/// One element of a compiled glob
#[derive(Debug, Clone, PartialEq, Eq)]
enum GlobToken {
    Literal(char),
    /// `?` - exactly one character inside a segment
    AnyChar,
    /// `*` - zero or more characters inside a segment
    Star,
    /// `**` - zero or more characters, across segments
    GlobStar,
}

/// Shell-style pattern scoped to hyphen-delimited segments
///
/// The pattern must cover the whole name. Both sides are expected to be
/// normalized (lower-cased, separators folded to `-`) by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlobPattern {
    tokens: Vec<GlobToken>,
}

impl GlobPattern {
    pub fn compile(pattern: &str) -> Self {
        let mut tokens = Vec::new();
        let mut chars = pattern.chars().peekable();

        while let Some(c) = chars.next() {
            match c {
                '*' => {
                    let mut is_globstar = false;
                    while chars.peek() == Some(&'*') {
                        chars.next();
                        is_globstar = true;
                    }
                    let token = if is_globstar {
                        GlobToken::GlobStar
                    } else {
                        GlobToken::Star
                    };
                    // Adjacent stars collapse; a globstar absorbs a plain star
                    match tokens.last_mut() {
                        Some(GlobToken::GlobStar) => {}
                        Some(last @ GlobToken::Star) => *last = token,
                        _ => tokens.push(token),
                    }
                }
                '?' => tokens.push(GlobToken::AnyChar),
                other => tokens.push(GlobToken::Literal(other)),
            }
        }

        Self { tokens }
    }

    /// Matches the whole of `name`
    pub fn matches(&self, name: &str) -> bool {
        let name: Vec<char> = name.chars().collect();
        let (p_len, n_len) = (self.tokens.len(), name.len());

        // matched[i][j]: tokens[i..] matches name[j..]
        let mut matched = vec![vec![false; n_len + 1]; p_len + 1];
        matched[p_len][n_len] = true;

        for i in (0..p_len).rev() {
            for j in (0..=n_len).rev() {
                let current = name.get(j).copied();
                matched[i][j] = match &self.tokens[i] {
                    GlobToken::Literal(c) => current == Some(*c) && matched[i + 1][j + 1],
                    GlobToken::AnyChar => {
                        matches!(current, Some(c) if c != SEGMENT_SEPARATOR)
                            && matched[i + 1][j + 1]
                    }
                    GlobToken::Star => {
                        matched[i + 1][j]
                            || (matches!(current, Some(c) if c != SEGMENT_SEPARATOR)
                                && matched[i][j + 1])
                    }
                    GlobToken::GlobStar => {
                        matched[i + 1][j] || (current.is_some() && matched[i][j + 1])
                    }
                };
            }
        }

        matched[0][0]
    }
}
