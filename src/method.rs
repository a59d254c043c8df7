use crate::constants::method;
use crate::util::equals_ignore_case;
use std::fmt;

/// HTTP verb of an inbound request.
///
/// Parsing is case-insensitive. Tokens outside the nine standard verbs are
/// kept verbatim in [`Method::Other`] so they can still be compared against
/// configured method lists.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Head,
    Post,
    Put,
    Delete,
    Connect,
    Options,
    Trace,
    Patch,
    Other(String),
}

impl Method {
    pub fn parse(token: &str) -> Self {
        let token = token.trim();
        [
            Self::Get,
            Self::Head,
            Self::Post,
            Self::Put,
            Self::Delete,
            Self::Connect,
            Self::Options,
            Self::Trace,
            Self::Patch,
        ]
        .into_iter()
        .find(|candidate| equals_ignore_case(candidate.as_str(), token))
        .unwrap_or_else(|| Self::Other(token.to_string()))
    }

    /// Canonical token. Standard verbs are upper-case; other tokens keep the
    /// casing they arrived with.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Get => method::GET,
            Self::Head => method::HEAD,
            Self::Post => method::POST,
            Self::Put => method::PUT,
            Self::Delete => method::DELETE,
            Self::Connect => method::CONNECT,
            Self::Options => method::OPTIONS,
            Self::Trace => method::TRACE,
            Self::Patch => method::PATCH,
            Self::Other(token) => token,
        }
    }

    pub fn is(&self, token: &str) -> bool {
        equals_ignore_case(self.as_str(), token.trim())
    }

    pub fn is_not(&self, token: &str) -> bool {
        !self.is(token)
    }

    pub fn is_options(&self) -> bool {
        matches!(self, Self::Options)
    }

    pub fn is_standard(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

impl From<&str> for Method {
    fn from(value: &str) -> Self {
        Self::parse(value)
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
#[path = "method_test.rs"]
mod method_test;
