use crate::constants::{defaults, header_set};
use crate::util::{matches_any, matches_prefix, normalize_lower};
use once_cell::sync::Lazy;
use std::collections::HashSet;

/// Lower-cased names that are admitted regardless of configuration.
static BUILTIN_ALLOWED: Lazy<HashSet<String>> = Lazy::new(|| {
    header_set::CORS_SAFELISTED
        .iter()
        .chain(header_set::FORBIDDEN)
        .chain(header_set::PLATFORM)
        .map(|name| normalize_lower(name))
        .collect()
});

/// Configured request headers a client may send.
///
/// The effective allow-set is the configured list plus the CORS-safelisted,
/// browser-controlled and platform header tables. Names starting with a
/// forbidden-wildcard prefix (`Proxy-`, `Sec-`) are never listed and never
/// cause a rejection.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct AllowedHeaders(Vec<String>);

impl AllowedHeaders {
    pub fn list<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(values.into_iter().map(Into::into).collect())
    }

    pub fn values(&self) -> &[String] {
        &self.0
    }

    pub fn is_forbidden_wildcard(name: &str) -> bool {
        matches_prefix(name, header_set::FORBIDDEN_WILDCARD_PREFIXES)
    }

    /// Whether `name` belongs to the effective allow-set.
    pub fn allows_header(&self, name: &str) -> bool {
        let name = name.trim();
        BUILTIN_ALLOWED.contains(&normalize_lower(name)) || matches_any(name, &self.0)
    }

    /// Requested headers to echo in `Access-Control-Allow-Headers`.
    ///
    /// Forbidden-wildcard names are dropped first, then the rest are kept if
    /// they belong to the allow-set. Entries keep the requested casing.
    pub fn confirm<'r>(&self, requested: &[&'r str]) -> Vec<&'r str> {
        requested
            .iter()
            .copied()
            .filter(|name| !Self::is_forbidden_wildcard(name))
            .filter(|name| self.allows_header(name))
            .collect()
    }

    /// First header name that is neither forbidden-wildcard nor allowed.
    pub fn first_disallowed<'r, I>(&self, names: I) -> Option<&'r str>
    where
        I: IntoIterator<Item = &'r str>,
    {
        names
            .into_iter()
            .filter(|name| !Self::is_forbidden_wildcard(name))
            .find(|name| !self.allows_header(name))
    }
}

impl Default for AllowedHeaders {
    fn default() -> Self {
        Self::list(defaults::ALLOWED_HEADERS.iter().copied())
    }
}

#[cfg(test)]
#[path = "allowed_headers_test.rs"]
mod allowed_headers_test;
