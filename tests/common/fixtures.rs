//! Test fixtures and constants.

use regex::Regex;
use signed_url::{ParameterSet, UrlSigner};

/// Secret used throughout the integration tests
pub const SECRET: &str = "test";

/// Base URL without a query string
pub const BASE: &str = "http://test.com";

/// Signature of `foo=bar&baz=1` under [`SECRET`]
pub const FOO_BAR_SIGNATURE: &str =
    "395150b277ca25dd7a52e9345bb9c7bc4b133f001e912fe3a7ed48316a8f5a29";

pub fn signer() -> UrlSigner {
    UrlSigner::new(SECRET)
}

pub fn foo_bar() -> ParameterSet {
    ParameterSet::from([("foo", "bar"), ("baz", "1")])
}

/// Parameter sets exercised by the round-trip tests
pub fn sample_parameter_sets() -> Vec<ParameterSet> {
    let mut with_bare = ParameterSet::from([("download", "1")]);
    with_bare.insert_bare("inline");

    vec![
        foo_bar(),
        ParameterSet::from([("single", "value")]),
        ParameterSet::from([("empty", "")]),
        ParameterSet::from([("q", "hello world"), ("path", "/a/b?c=d&e")]),
        ParameterSet::from([("name", "Zoë"), ("emoji", "🚀"), ("plus", "1+1=2")]),
        ParameterSet::from([("z", "1"), ("a", "2"), ("m", "3")]),
        with_bare,
    ]
}

/// Replace the signature value of a signed URL
pub fn replace_signature(url: &str, replacement: &str) -> String {
    let re = Regex::new(r"_signature=[0-9a-z]+").unwrap();
    re.replace(url, format!("_signature={replacement}").as_str())
        .into_owned()
}

/// Replace the expiry value of a signed URL
pub fn replace_expires(url: &str, replacement: &str) -> String {
    let re = Regex::new(r"_expires=[0-9]+").unwrap();
    re.replace(url, replacement).into_owned()
}
