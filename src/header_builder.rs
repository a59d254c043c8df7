use crate::allowed_headers::AllowedHeaders;
use crate::allowed_methods::AllowedMethods;
use crate::config::CorsConfig;
use crate::constants::header;
use crate::headers::{HeaderCollection, Headers};
use crate::origin::AllowedOrigins;

/// `Access-Control-Allow-Origin` for a request origin.
///
/// The wildcard configuration always yields `*`. Otherwise the request origin
/// is echoed verbatim when it matches a configured pattern, and nothing is
/// emitted when it is absent or unmatched.
pub fn origin_header(origin: Option<&str>, allowed_origins: &AllowedOrigins) -> Headers {
    build_origin_headers(origin, allowed_origins).into_headers()
}

/// Preflight response headers.
///
/// `Access-Control-Allow-Methods` and `Access-Control-Max-Age` are always
/// present. `Access-Control-Allow-Headers` lists the requested headers that
/// survive [`AllowedHeaders::confirm`], in requested casing, and is omitted
/// when none do.
pub fn preflight_headers(
    allowed_headers: &AllowedHeaders,
    allowed_methods: &AllowedMethods,
    max_age: &str,
    requested_headers: &[&str],
) -> Headers {
    build_preflight_headers(allowed_headers, allowed_methods, max_age, requested_headers)
        .into_headers()
}

fn build_origin_headers(origin: Option<&str>, allowed_origins: &AllowedOrigins) -> HeaderCollection {
    let mut headers = HeaderCollection::with_estimate(1);
    match (allowed_origins, origin) {
        (AllowedOrigins::Any, _) => {
            headers.push(header::ACCESS_CONTROL_ALLOW_ORIGIN, "*".to_string());
        }
        (AllowedOrigins::List(_), Some(origin)) if allowed_origins.allows(origin) => {
            headers.push(header::ACCESS_CONTROL_ALLOW_ORIGIN, origin.to_string());
        }
        _ => {}
    }
    headers
}

fn build_preflight_headers(
    allowed_headers: &AllowedHeaders,
    allowed_methods: &AllowedMethods,
    max_age: &str,
    requested_headers: &[&str],
) -> HeaderCollection {
    let mut headers = HeaderCollection::with_estimate(3);
    headers.push(
        header::ACCESS_CONTROL_ALLOW_METHODS,
        allowed_methods.header_value(),
    );

    let confirmed = allowed_headers.confirm(requested_headers);
    if !confirmed.is_empty() {
        headers.push(header::ACCESS_CONTROL_ALLOW_HEADERS, confirmed.join(", "));
    }

    headers.push(header::ACCESS_CONTROL_MAX_AGE, max_age.to_string());
    headers
}

pub(crate) struct HeaderBuilder<'a> {
    config: &'a CorsConfig,
}

impl<'a> HeaderBuilder<'a> {
    pub(crate) fn new(config: &'a CorsConfig) -> Self {
        Self { config }
    }

    pub(crate) fn build_origin_headers(&self, origin: Option<&str>) -> HeaderCollection {
        build_origin_headers(origin, &self.config.allowed_origins)
    }

    pub(crate) fn build_preflight_headers(&self, requested_headers: &[&str]) -> HeaderCollection {
        build_preflight_headers(
            &self.config.allowed_headers,
            &self.config.allowed_methods,
            &self.config.max_age,
            requested_headers,
        )
    }
}

#[cfg(test)]
#[path = "header_builder_test.rs"]
mod header_builder_test;
