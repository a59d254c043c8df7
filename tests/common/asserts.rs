use super::headers::header_value;
use gateway_cors_rs::{CorsDecision, CorsResult, Headers, Rejection};

pub fn assert_simple(decision: CorsDecision) -> CorsResult {
    match decision {
        CorsDecision::Simple(result) => result,
        other => panic!("expected simple decision, got {:?}", other),
    }
}

pub fn assert_preflight(decision: CorsDecision) -> Headers {
    match decision {
        CorsDecision::Preflight(result) => {
            assert_eq!(result.status, 204, "preflight should answer 204");
            assert!(result.data.is_none(), "preflight should not carry data");
            result.headers
        }
        other => panic!("expected preflight decision, got {:?}", other),
    }
}

pub fn assert_rejected(decision: CorsDecision) -> (Rejection, CorsResult) {
    match decision {
        CorsDecision::Rejected { reason, result } => {
            assert_eq!(result.status, reason.status());
            (reason, result)
        }
        other => panic!("expected rejected decision, got {:?}", other),
    }
}

pub fn assert_header_eq(headers: &Headers, name: &str, expected: &str) {
    assert_eq!(
        header_value(headers, name),
        Some(expected),
        "header {name} mismatch"
    );
}

pub fn assert_header_absent(headers: &Headers, name: &str) {
    assert!(
        header_value(headers, name).is_none(),
        "header {name} should be absent, got {:?}",
        header_value(headers, name)
    );
}
