use crate::body::Payload;
use crate::constants::status;
use crate::headers::Headers;
use crate::method::Method;

/// Response descriptor produced for one request.
#[derive(Debug, Clone, PartialEq)]
pub struct CorsResult {
    pub status: u16,
    pub headers: Headers,
    /// Parsed or raw body. Always `None` for preflights.
    pub data: Option<Payload>,
    pub method: Method,
}

/// Why a non-preflight request was refused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    /// The body was declared as JSON but did not parse.
    MalformedBody,
    MethodNotAllowed { method: Method },
    HeaderNotAllowed { header: String },
    /// Strict mode and no `Access-Control-Allow-Origin` was granted.
    OriginNotAllowed,
}

impl Rejection {
    pub fn status(&self) -> u16 {
        match self {
            Self::MalformedBody => status::BAD_REQUEST,
            Self::MethodNotAllowed { .. } => status::METHOD_NOT_ALLOWED,
            Self::HeaderNotAllowed { .. } => status::PRECONDITION_FAILED,
            Self::OriginNotAllowed => status::UNAUTHORIZED,
        }
    }
}

/// Outcome of evaluating a request.
#[derive(Debug, Clone, PartialEq)]
pub enum CorsDecision {
    /// `OPTIONS` request answered with the negotiated preflight headers.
    Preflight(CorsResult),
    /// Request admitted; the handler should continue and attach the headers.
    Simple(CorsResult),
    Rejected {
        reason: Rejection,
        result: CorsResult,
    },
}

impl CorsDecision {
    pub fn result(&self) -> &CorsResult {
        match self {
            Self::Preflight(result) | Self::Simple(result) => result,
            Self::Rejected { result, .. } => result,
        }
    }

    pub fn into_result(self) -> CorsResult {
        match self {
            Self::Preflight(result) | Self::Simple(result) => result,
            Self::Rejected { result, .. } => result,
        }
    }

    pub fn status(&self) -> u16 {
        self.result().status
    }

    pub fn headers(&self) -> &Headers {
        &self.result().headers
    }

    pub fn rejection(&self) -> Option<&Rejection> {
        match self {
            Self::Rejected { reason, .. } => Some(reason),
            _ => None,
        }
    }

    /// Whether the host should answer immediately instead of running its handler.
    pub fn end_response(&self) -> bool {
        !matches!(self, Self::Simple(_))
    }
}
