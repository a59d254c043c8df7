mod common;

use common::asserts::{
    assert_header_absent, assert_header_eq, assert_preflight, assert_rejected, assert_simple,
};
use common::builders::{cors, preflight_request, simple_request};
use gateway_cors_rs::constants::header;
use gateway_cors_rs::{AllowedHeaders, Rejection};

#[test]
fn default_allow_list_covers_gateway_headers() {
    let cors = cors().build();

    let result = assert_simple(
        simple_request()
            .header("Authorization", "Bearer token")
            .header("X-Api-Key", "key")
            .header("X-Amz-Date", "20240101T000000Z")
            .header("X-Amz-Security-Token", "token")
            .check(&cors),
    );

    assert_eq!(result.status, 200);
}

#[test]
fn configured_headers_replace_defaults() {
    let cors = cors().allowed_headers("X-Foo").build();

    let (reason, _) = assert_rejected(
        simple_request()
            .header("Authorization", "Bearer token")
            .check(&cors),
    );

    assert_eq!(
        reason,
        Rejection::HeaderNotAllowed {
            header: "authorization".to_string()
        }
    );
}

#[test]
fn configured_header_match_ignores_case() {
    let cors = cors().allowed_headers("x-foo, X-BAR").build();

    let result = assert_simple(
        simple_request()
            .header("X-Foo", "1")
            .header("x-bar", "2")
            .check(&cors),
    );

    assert_eq!(result.status, 200);
}

#[test]
fn first_unlisted_header_in_request_order_is_reported() {
    let cors = cors().allowed_headers("X-Foo").build();

    let (reason, _) = assert_rejected(
        simple_request()
            .header("X-Foo", "1")
            .header("X-Second", "2")
            .header("X-Third", "3")
            .check(&cors),
    );

    assert_eq!(
        reason,
        Rejection::HeaderNotAllowed {
            header: "x-second".to_string()
        }
    );
}

#[test]
fn preflight_drops_forbidden_wildcard_even_when_configured() {
    let cors = cors().allowed_headers("Sec-Custom, X-Foo").build();

    let headers = assert_preflight(
        preflight_request()
            .origin("https://foo.bar")
            .request_headers("Sec-Custom, X-Foo")
            .check(&cors),
    );

    assert_header_eq(&headers, header::ACCESS_CONTROL_ALLOW_HEADERS, "X-Foo");
}

#[test]
fn preflight_confirms_builtin_headers_without_configuration() {
    let cors = cors().allowed_headers(Vec::<String>::new()).build();

    let headers = assert_preflight(
        preflight_request()
            .origin("https://foo.bar")
            .request_headers("Content-Type, Accept-Language, X-Amzn-Trace-Id")
            .check(&cors),
    );

    assert_header_eq(
        &headers,
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        "Content-Type, Accept-Language, X-Amzn-Trace-Id",
    );
}

#[test]
fn preflight_ignores_empty_request_header_tokens() {
    let cors = cors().allowed_headers("X-Foo").build();

    let headers = assert_preflight(
        preflight_request()
            .origin("https://foo.bar")
            .request_headers(" , X-Foo,, ")
            .check(&cors),
    );

    assert_header_eq(&headers, header::ACCESS_CONTROL_ALLOW_HEADERS, "X-Foo");
}

#[test]
fn preflight_with_empty_request_headers_omits_allow_headers() {
    let headers = assert_preflight(
        preflight_request()
            .origin("https://foo.bar")
            .request_headers("")
            .check(&cors().build()),
    );

    assert_header_absent(&headers, header::ACCESS_CONTROL_ALLOW_HEADERS);
}

#[test]
fn allowed_headers_reports_forbidden_wildcards() {
    assert!(AllowedHeaders::is_forbidden_wildcard("Sec-WebSocket-Key"));
    assert!(AllowedHeaders::is_forbidden_wildcard("proxy-connection"));
    assert!(!AllowedHeaders::is_forbidden_wildcard("X-Sec-Token"));
}

#[test]
fn allowed_headers_default_contains_authorization() {
    let headers = AllowedHeaders::default();

    assert!(headers.allows_header("authorization"));
    assert!(!headers.allows_header("X-Custom"));
}
