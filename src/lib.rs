mod allowed_headers;
mod allowed_methods;
mod body;
mod config;
pub mod constants;
mod context;
mod cors;
mod header_builder;
mod headers;
mod method;
mod normalized_request;
mod options;
mod origin;
mod result;
mod util;

pub use allowed_headers::AllowedHeaders;
pub use allowed_methods::AllowedMethods;
pub use body::Payload;
pub use config::CorsConfig;
pub use context::RequestContext;
pub use cors::{Cors, evaluate};
pub use header_builder::{origin_header, preflight_headers};
pub use headers::Headers;
pub use method::Method;
#[doc(hidden)]
pub use normalized_request::NormalizedRequest;
pub use options::{CorsOptions, SettingValue, ValidationError};
pub use origin::{AllowedOrigins, OriginPattern, PatternError};
pub use result::{CorsDecision, CorsResult, Rejection};
pub use util::{equals_ignore_case, matches_any, matches_prefix, normalize_lower};
