//! Query string parsing and canonical serialization.
//!
//! Serialization follows `application/x-www-form-urlencoded`: alphanumerics
//! and `-_.` pass through, spaces become `+`, everything else is
//! percent-encoded. A bare key (`?flag`) parses to a `None` value but is
//! serialized back as `flag=`. Signatures are always computed over the
//! serialized form, so both sides agree on that quirk.

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use thiserror::Error;

use crate::models::ParameterSet;

const QUERY_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_').remove(b'.');

/// A URL split around its query string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UrlParts<'a> {
    /// Everything before the `?`
    pub base: &'a str,
    /// Text between `?` and `#`, if a `?` is present
    pub query: Option<&'a str>,
    /// Text after `#`, if present
    pub fragment: Option<&'a str>,
}

/// Split a URL into base, query and fragment without further validation.
pub fn split_url(url: &str) -> UrlParts<'_> {
    let (rest, fragment) = match url.split_once('#') {
        Some((rest, fragment)) => (rest, Some(fragment)),
        None => (url, None),
    };
    let (base, query) = match rest.split_once('?') {
        Some((base, query)) => (base, Some(query)),
        None => (rest, None),
    };
    UrlParts {
        base,
        query,
        fragment,
    }
}

/// A query token whose percent-decoded bytes are not valid UTF-8.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Query token is not valid UTF-8: {0}")]
pub struct InvalidEncoding(pub String);

/// Parse a query string. Later duplicates overwrite earlier values in place.
///
/// Tokens that do not decode to UTF-8 reject the whole query: replacing
/// them would let distinct URLs share one canonical form.
pub fn parse_query(query: &str) -> Result<ParameterSet, InvalidEncoding> {
    let mut params = ParameterSet::new();
    for token in query.split('&').filter(|token| !token.is_empty()) {
        let invalid = || InvalidEncoding(token.to_string());
        match token.split_once('=') {
            Some((name, value)) => {
                let name = decode(name).ok_or_else(invalid)?;
                let value = decode(value).ok_or_else(invalid)?;
                params.set(name, Some(value));
            }
            None => params.set(decode(token).ok_or_else(invalid)?, None),
        }
    }
    Ok(params)
}

/// Serialize parameters in insertion order.
pub fn build_query(params: &ParameterSet) -> String {
    params
        .iter()
        .map(|(name, value)| {
            format!(
                "{}={}",
                encode_component(name),
                encode_component(value.unwrap_or(""))
            )
        })
        .collect::<Vec<_>>()
        .join("&")
}

/// Form-encode a single name or value.
pub fn encode_component(component: &str) -> String {
    component
        .split(' ')
        .map(|part| utf8_percent_encode(part, QUERY_COMPONENT).to_string())
        .collect::<Vec<_>>()
        .join("+")
}

fn decode(component: &str) -> Option<String> {
    percent_decode_str(&component.replace('+', " "))
        .decode_utf8()
        .ok()
        .map(|decoded| decoded.into_owned())
}
