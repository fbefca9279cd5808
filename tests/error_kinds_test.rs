//! Each malformed input maps to its own error kind.

mod common;

use common::fixtures::{self, BASE};
use signed_url::{ParameterSet, Timeout};

#[test]
fn test_verify_without_query_is_invalid_query() {
    common::assert_error_kind(fixtures::signer().verify("http://test.com"), "invalid_query");
}

#[test]
fn test_verify_without_signature_is_signature_invalid() {
    common::assert_error_kind(
        fixtures::signer().verify("http://test.com?foo=bar"),
        "signature_invalid",
    );
}

#[test]
fn test_verify_past_expiry_is_signature_expired() {
    let past = chrono::Utc::now().timestamp() - 3600;
    let url = format!("http://test.com?foo=bar&_signature=1234&_expires={past}");
    common::assert_error_kind(fixtures::signer().verify(&url), "signature_expired");
}

#[test]
fn test_create_without_params_is_invalid_query() {
    common::assert_error_kind(
        fixtures::signer().create(BASE, ParameterSet::new(), None),
        "invalid_query",
    );
}

#[test]
fn test_create_with_past_timeouts_is_invalid_timeout() {
    let past = chrono::Utc::now() - chrono::Duration::days(1);
    let timeouts = [
        Timeout::from("-1 minute"),
        Timeout::from("yesterday"),
        Timeout::At(past.timestamp()),
        Timeout::DateTime(past),
    ];

    for timeout in timeouts {
        common::assert_error_kind(
            fixtures::signer().create(BASE, fixtures::foo_bar(), Some(timeout)),
            "invalid_timeout",
        );
    }
}

#[test]
fn test_create_with_unparsable_timeout_is_invalid_timeout() {
    common::assert_error_kind(
        fixtures::signer().create(
            "https://example.com/?foo=bar",
            ParameterSet::new(),
            Some("YouCannotParseMe".into()),
        ),
        "invalid_timeout",
    );
}
