use crate::body::{Payload, read_body};
use crate::config::CorsConfig;
use crate::constants::{header, status};
use crate::context::RequestContext;
use crate::header_builder::HeaderBuilder;
use crate::headers::HeaderCollection;
use crate::method::Method;
use crate::normalized_request::NormalizedRequest;
use crate::options::{CorsOptions, ValidationError};
use crate::result::{CorsDecision, CorsResult, Rejection};
use tracing::{debug, warn};

/// Core CORS engine that evaluates requests against a resolved [`CorsConfig`].
///
/// Evaluation holds no state between calls, so one engine may serve requests
/// from many threads.
#[derive(Debug, Clone)]
pub struct Cors {
    config: CorsConfig,
}

impl Cors {
    /// Resolves `options` against the built-in defaults only.
    pub fn new(options: CorsOptions) -> Result<Self, ValidationError> {
        Self::with_fallback(options, &CorsOptions::default())
    }

    /// Resolves `options` over `fallback`, usually [`CorsOptions::from_env`].
    pub fn with_fallback(
        options: CorsOptions,
        fallback: &CorsOptions,
    ) -> Result<Self, ValidationError> {
        Ok(Self::from_config(options.resolve(fallback)?))
    }

    pub fn from_config(config: CorsConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CorsConfig {
        &self.config
    }

    pub fn check(&self, request: &RequestContext<'_>) -> CorsDecision {
        let normalized = NormalizedRequest::new(request);
        let builder = HeaderBuilder::new(&self.config);
        let headers = builder.build_origin_headers(normalized.origin());

        if normalized.is_options() {
            self.process_preflight(&normalized, &builder, headers)
        } else {
            self.process_simple(&normalized, headers)
        }
    }

    fn process_preflight(
        &self,
        normalized: &NormalizedRequest<'_>,
        builder: &HeaderBuilder<'_>,
        mut headers: HeaderCollection,
    ) -> CorsDecision {
        let requested_headers = normalized.requested_headers();
        headers.extend(builder.build_preflight_headers(&requested_headers));
        debug!(
            origin = ?normalized.origin(),
            requested_headers = ?requested_headers,
            "answering CORS preflight"
        );

        CorsDecision::Preflight(CorsResult {
            status: status::NO_CONTENT,
            headers: headers.into_headers(),
            data: None,
            method: normalized.method().clone(),
        })
    }

    fn process_simple(
        &self,
        normalized: &NormalizedRequest<'_>,
        headers: HeaderCollection,
    ) -> CorsDecision {
        let method = normalized.method().clone();

        let data = match read_body(normalized.body(), normalized.has_json_body()) {
            Ok(data) => data,
            Err((raw, err)) => {
                warn!(error = %err, "request body declared as JSON could not be parsed");
                return Self::reject(Rejection::MalformedBody, headers, Some(raw), method);
            }
        };

        if !self.config.allowed_methods.allows_method(method.as_str()) {
            debug!(%method, "CORS request method not allowed");
            return Self::reject(
                Rejection::MethodNotAllowed {
                    method: method.clone(),
                },
                headers,
                data,
                method,
            );
        }

        if let Some(name) = self
            .config
            .allowed_headers
            .first_disallowed(normalized.header_names())
        {
            debug!(header = name, "CORS request header not allowed");
            let reason = Rejection::HeaderNotAllowed {
                header: name.to_string(),
            };
            return Self::reject(reason, headers, data, method);
        }

        if self.config.strict && !headers.contains(header::ACCESS_CONTROL_ALLOW_ORIGIN) {
            debug!(origin = ?normalized.origin(), "CORS origin not allowed in strict mode");
            return Self::reject(Rejection::OriginNotAllowed, headers, data, method);
        }

        CorsDecision::Simple(CorsResult {
            status: status::OK,
            headers: headers.into_headers(),
            data,
            method,
        })
    }

    fn reject(
        reason: Rejection,
        headers: HeaderCollection,
        data: Option<Payload>,
        method: Method,
    ) -> CorsDecision {
        CorsDecision::Rejected {
            result: CorsResult {
                status: reason.status(),
                headers: headers.into_headers(),
                data,
                method,
            },
            reason,
        }
    }
}

/// Resolves `overrides` over `fallback` for this call only and evaluates `request`.
pub fn evaluate(
    request: &RequestContext<'_>,
    overrides: &CorsOptions,
    fallback: &CorsOptions,
) -> Result<CorsDecision, ValidationError> {
    Ok(Cors::from_config(overrides.resolve(fallback)?).check(request))
}

#[cfg(test)]
#[path = "cors_test.rs"]
mod cors_test;
