use gateway_cors_rs::constants::{header, method};
use gateway_cors_rs::{Cors, CorsDecision, CorsOptions, RequestContext, SettingValue};

#[derive(Default)]
pub struct CorsBuilder {
    options: CorsOptions,
    fallback: CorsOptions,
}

impl CorsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn allowed_origins(mut self, value: impl Into<SettingValue>) -> Self {
        self.options = self.options.allowed_origins(value);
        self
    }

    pub fn allowed_methods(mut self, value: impl Into<SettingValue>) -> Self {
        self.options = self.options.allowed_methods(value);
        self
    }

    pub fn allowed_headers(mut self, value: impl Into<SettingValue>) -> Self {
        self.options = self.options.allowed_headers(value);
        self
    }

    pub fn max_age(mut self, value: impl Into<SettingValue>) -> Self {
        self.options = self.options.max_age(value);
        self
    }

    pub fn strict(mut self, value: impl Into<SettingValue>) -> Self {
        self.options = self.options.strict(value);
        self
    }

    pub fn fallback(mut self, fallback: CorsOptions) -> Self {
        self.fallback = fallback;
        self
    }

    pub fn build(self) -> Cors {
        Cors::with_fallback(self.options, &self.fallback).expect("valid CORS configuration")
    }
}

pub struct RequestBuilder {
    method: String,
    headers: Vec<(String, String)>,
    body: Option<String>,
}

impl RequestBuilder {
    pub fn new(method: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    pub fn origin(self, origin: impl Into<String>) -> Self {
        self.header(header::ORIGIN, origin)
    }

    pub fn request_headers(self, value: impl Into<String>) -> Self {
        self.header(header::ACCESS_CONTROL_REQUEST_HEADERS, value)
    }

    pub fn json_body(self, body: impl Into<String>) -> Self {
        self.header(header::CONTENT_TYPE, "application/json").body(body)
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    pub fn check(self, cors: &Cors) -> CorsDecision {
        let RequestBuilder {
            method,
            headers,
            body,
        } = self;
        let ctx = RequestContext {
            method: &method,
            headers: headers
                .iter()
                .map(|(name, value)| (name.as_str(), value.as_str()))
                .collect(),
            body: body.as_deref(),
        };
        cors.check(&ctx)
    }
}

pub fn cors() -> CorsBuilder {
    CorsBuilder::new()
}

pub fn preflight_request() -> RequestBuilder {
    RequestBuilder::new(method::OPTIONS)
}

pub fn simple_request() -> RequestBuilder {
    RequestBuilder::new(method::GET)
}

pub fn request(method: &str) -> RequestBuilder {
    RequestBuilder::new(method)
}
