use crate::constants::header;
use crate::context::RequestContext;
use crate::method::Method;
use crate::util::{normalize_lower, starts_with_ignore_case};
use indexmap::IndexMap;

const JSON_MEDIA_TYPE: &str = "application/json";

/// Request view with a parsed method and lower-cased header names.
///
/// When the same header arrives under several casings the last one wins.
#[doc(hidden)]
pub struct NormalizedRequest<'a> {
    method: Method,
    headers: IndexMap<String, &'a str>,
    body: Option<&'a str>,
}

impl<'a> NormalizedRequest<'a> {
    #[doc(hidden)]
    pub fn new(request: &RequestContext<'a>) -> Self {
        let mut headers = IndexMap::with_capacity(request.headers.len());
        for (name, value) in &request.headers {
            headers.insert(normalize_lower(name.trim()), *value);
        }

        Self {
            method: Method::parse(request.method),
            headers,
            body: request.body,
        }
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn is_options(&self) -> bool {
        self.method.is_options()
    }

    pub fn header(&self, name: &str) -> Option<&'a str> {
        self.headers.get(&normalize_lower(name)).copied()
    }

    /// Lower-cased names of every received header.
    pub fn header_names(&self) -> impl Iterator<Item = &str> {
        self.headers.keys().map(String::as_str)
    }

    /// The `Origin` header exactly as received, treating an empty value as absent.
    pub fn origin(&self) -> Option<&'a str> {
        self.header(header::ORIGIN).filter(|origin| !origin.is_empty())
    }

    /// Tokens of `Access-Control-Request-Headers`, trimmed, empty ones dropped.
    pub fn requested_headers(&self) -> Vec<&'a str> {
        self.header(header::ACCESS_CONTROL_REQUEST_HEADERS)
            .map(|value| {
                value
                    .split(',')
                    .map(str::trim)
                    .filter(|token| !token.is_empty())
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn has_json_body(&self) -> bool {
        self.header(header::CONTENT_TYPE)
            .is_some_and(|value| starts_with_ignore_case(value.trim_start(), JSON_MEDIA_TYPE))
    }

    pub fn body(&self) -> Option<&'a str> {
        self.body
    }
}

#[cfg(test)]
#[path = "normalized_request_test.rs"]
mod normalized_request_test;
