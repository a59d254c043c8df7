pub mod header {
    pub const ACCESS_CONTROL_ALLOW_ORIGIN: &str = "Access-Control-Allow-Origin";
    pub const ACCESS_CONTROL_ALLOW_METHODS: &str = "Access-Control-Allow-Methods";
    pub const ACCESS_CONTROL_ALLOW_HEADERS: &str = "Access-Control-Allow-Headers";
    pub const ACCESS_CONTROL_MAX_AGE: &str = "Access-Control-Max-Age";
    pub const ACCESS_CONTROL_REQUEST_HEADERS: &str = "Access-Control-Request-Headers";
    pub const ACCESS_CONTROL_REQUEST_METHOD: &str = "Access-Control-Request-Method";
    pub const CONTENT_TYPE: &str = "Content-Type";
    pub const ORIGIN: &str = "Origin";
}

pub mod method {
    pub const CONNECT: &str = "CONNECT";
    pub const DELETE: &str = "DELETE";
    pub const GET: &str = "GET";
    pub const HEAD: &str = "HEAD";
    pub const OPTIONS: &str = "OPTIONS";
    pub const PATCH: &str = "PATCH";
    pub const POST: &str = "POST";
    pub const PUT: &str = "PUT";
    pub const TRACE: &str = "TRACE";
}

pub mod status {
    pub const OK: u16 = 200;
    pub const NO_CONTENT: u16 = 204;
    pub const BAD_REQUEST: u16 = 400;
    /// Returned when strict mode rejects a request whose origin was not allowed.
    pub const UNAUTHORIZED: u16 = 401;
    pub const METHOD_NOT_ALLOWED: u16 = 405;
    pub const PRECONDITION_FAILED: u16 = 412;
}

/// Environment variables consulted by [`crate::CorsOptions::from_env`].
pub mod env {
    pub const ALLOWED_ORIGINS: &str = "CORS_ALLOWED_ORIGINS";
    pub const ALLOWED_METHODS: &str = "CORS_ALLOWED_METHODS";
    pub const ALLOWED_HEADERS: &str = "CORS_ALLOWED_HEADERS";
    pub const MAX_AGE: &str = "CORS_MAX_AGE";
    pub const STRICT: &str = "CORS_STRICT";
}

pub mod defaults {
    use super::method;

    pub const ALLOWED_ORIGINS: &str = "*";
    pub const ALLOWED_METHODS: &[&str] = &[
        method::GET,
        method::OPTIONS,
        method::POST,
        method::PUT,
        method::PATCH,
        method::DELETE,
    ];
    pub const ALLOWED_HEADERS: &[&str] = &[
        "Content-Type",
        "X-Amz-Date",
        "Authorization",
        "X-Api-Key",
        "X-Amz-Security-Token",
    ];
    pub const MAX_AGE: &str = "600";
    pub const STRICT: bool = true;
}

/// Header name tables reconciled against request headers.
pub mod header_set {
    /// Headers browsers may send without triggering a preflight.
    pub const CORS_SAFELISTED: &[&str] = &[
        "Accept",
        "Accept-Language",
        "Content-Language",
        "Content-Type",
        "DPR",
        "Downlink",
        "Save-Data",
        "Viewport-Width",
        "Width",
    ];

    /// Browser-controlled headers a request carries even though scripts cannot set them.
    pub const FORBIDDEN: &[&str] = &[
        "Accept-Charset",
        "Accept-Encoding",
        "Access-Control-Request-Headers",
        "Access-Control-Request-Method",
        "Connection",
        "Content-Length",
        "Cookie",
        "Cookie2",
        "Date",
        "DNT",
        "Expect",
        "Host",
        "Keep-Alive",
        "Origin",
        "Referer",
        "TE",
        "Trailer",
        "Transfer-Encoding",
        "Upgrade",
        "Via",
        "User-Agent",
    ];

    /// Prefixes of forbidden header families. Never allow-listed, never rejected.
    pub const FORBIDDEN_WILDCARD_PREFIXES: &[&str] = &["Proxy-", "Sec-"];

    /// Headers the API gateway and its CDN attach to every proxied event.
    pub const PLATFORM: &[&str] = &[
        "X-Amz-Date",
        "X-Amz-Security-Token",
        "X-Api-Key",
        "X-Amz-Cf-Id",
        "X-Amzn-Trace-Id",
        "X-Forwarded-For",
        "X-Forwarded-Port",
        "X-Forwarded-Proto",
        "CloudFront-Forwarded-Proto",
        "CloudFront-Is-Desktop-Viewer",
        "CloudFront-Is-Mobile-Viewer",
        "CloudFront-Is-SmartTV-Viewer",
        "CloudFront-Is-Tablet-Viewer",
        "CloudFront-Viewer-Country",
    ];
}
