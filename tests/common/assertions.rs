//! Assertion helpers for tests.

use signed_url::{SignedUrlError, UrlSigner};

/// Assert a result failed with the given error kind
pub fn assert_error_kind<T: std::fmt::Debug>(result: Result<T, SignedUrlError>, expected: &str) {
    match result {
        Err(e) => assert_eq!(e.kind(), expected, "Unexpected error: {e}"),
        Ok(value) => panic!("Expected {expected} error, got Ok({value:?})"),
    }
}

/// Assert a URL verifies successfully
pub fn assert_valid(signer: &UrlSigner, url: &str) {
    match signer.verify(url) {
        Ok(valid) => assert!(valid, "Expected valid signature for {url}"),
        Err(e) => panic!("Expected valid signature for {url}, got error: {e}"),
    }
}

/// Assert a URL is well-formed but its signature does not match
pub fn assert_mismatch(signer: &UrlSigner, url: &str) {
    match signer.verify(url) {
        Ok(valid) => assert!(!valid, "Expected signature mismatch for {url}"),
        Err(e) => panic!("Expected signature mismatch for {url}, got error: {e}"),
    }
}
