use crate::allowed_headers::AllowedHeaders;
use crate::allowed_methods::AllowedMethods;
use crate::constants::defaults;
use crate::origin::AllowedOrigins;

/// Fully resolved configuration. Built by [`crate::CorsOptions::resolve`]
/// and never mutated afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CorsConfig {
    pub allowed_origins: AllowedOrigins,
    pub allowed_methods: AllowedMethods,
    pub allowed_headers: AllowedHeaders,
    pub max_age: String,
    pub strict: bool,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: AllowedOrigins::Any,
            allowed_methods: AllowedMethods::default(),
            allowed_headers: AllowedHeaders::default(),
            max_age: defaults::MAX_AGE.to_string(),
            strict: defaults::STRICT,
        }
    }
}
