use regex_automata::meta::{BuildError, Regex};
use std::fmt;

/// Characters a `*` in an origin pattern may stand for (RFC 3986 unreserved).
const URL_UNRESERVED_CLASS: &str = "[A-Za-z0-9._~-]";
const WILDCARD: char = '*';

#[derive(Debug)]
pub enum PatternError {
    Build(Box<BuildError>),
}

impl fmt::Display for PatternError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PatternError::Build(_) => write!(f, "failed to compile origin pattern"),
        }
    }
}

impl std::error::Error for PatternError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PatternError::Build(err) => Some(err.as_ref()),
        }
    }
}

/// A configured origin, optionally containing `*` wildcards.
///
/// Each `*` matches one or more URL-unreserved characters, every other
/// character matches itself literally, and the pattern must cover the whole
/// origin. Matching is case-sensitive.
#[derive(Clone, Debug)]
pub struct OriginPattern {
    source: String,
    regex: Regex,
}

impl OriginPattern {
    pub fn new(source: &str) -> Result<Self, PatternError> {
        let regex = Regex::new(&Self::translate(source))
            .map_err(|err| PatternError::Build(Box::new(err)))?;

        Ok(Self {
            source: source.to_string(),
            regex,
        })
    }

    fn translate(source: &str) -> String {
        let wildcard = format!("{URL_UNRESERVED_CLASS}+");
        let body = source
            .split(WILDCARD)
            .map(regex_syntax_escape)
            .collect::<Vec<_>>()
            .join(&wildcard);
        format!("^{body}$")
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn has_wildcard(&self) -> bool {
        self.source.contains(WILDCARD)
    }

    pub fn matches(&self, origin: &str) -> bool {
        self.regex.is_match(origin.as_bytes())
    }
}

impl PartialEq for OriginPattern {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source
    }
}

impl Eq for OriginPattern {}

fn regex_syntax_escape(segment: &str) -> String {
    let mut escaped = String::with_capacity(segment.len());
    for ch in segment.chars() {
        if is_meta_character(ch) {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}

fn is_meta_character(ch: char) -> bool {
    matches!(
        ch,
        '\\' | '.'
            | '+'
            | '*'
            | '?'
            | '('
            | ')'
            | '|'
            | '['
            | ']'
            | '{'
            | '}'
            | '^'
            | '$'
            | '#'
            | '&'
            | '-'
            | '~'
    )
}

/// Origins permitted to read responses.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum AllowedOrigins {
    /// The `*` token: every origin, and requests without one.
    #[default]
    Any,
    List(Vec<OriginPattern>),
}

impl AllowedOrigins {
    pub fn any() -> Self {
        Self::Any
    }

    pub fn list<I, S>(patterns: I) -> Result<Self, PatternError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        patterns
            .into_iter()
            .map(|pattern| OriginPattern::new(pattern.as_ref()))
            .collect::<Result<Vec<_>, _>>()
            .map(Self::List)
    }

    pub fn is_any(&self) -> bool {
        matches!(self, Self::Any)
    }

    /// Whether a present, non-empty `origin` matches one of the listed patterns.
    /// Always `true` for [`AllowedOrigins::Any`].
    pub fn allows(&self, origin: &str) -> bool {
        match self {
            Self::Any => true,
            Self::List(patterns) => {
                if origin.is_empty() {
                    return false;
                }
                patterns.iter().any(|pattern| pattern.matches(origin))
            }
        }
    }
}

#[cfg(test)]
#[path = "origin_test.rs"]
mod origin_test;
