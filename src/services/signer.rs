use hmac::{Hmac, Mac};
use sha2::Sha256;
use subtle::ConstantTimeEq;

use crate::error::SignedUrlError;

type HmacSha256 = Hmac<Sha256>;

/// Algorithm used for every signature
pub const ALGORITHM: &str = "HMAC-SHA256";

/// Compute the lowercase hex HMAC-SHA256 of a canonical query string.
///
/// An empty query is never a valid signing target.
pub fn sign(query: &str, secret: &[u8]) -> Result<String, SignedUrlError> {
    if query.is_empty() {
        return Err(SignedUrlError::InvalidQuery(
            "Hash cannot be created, query string empty",
        ));
    }

    let mut mac = HmacSha256::new_from_slice(secret).expect("HMAC can take key of any size");
    mac.update(query.as_bytes());

    Ok(hex::encode(mac.finalize().into_bytes()))
}

/// Compare two signatures in constant time.
pub fn signatures_match(expected: &str, provided: &str) -> bool {
    let expected = expected.as_bytes();
    let provided = provided.as_bytes();

    // Length is not secret: every valid signature is 64 hex chars
    if expected.len() != provided.len() {
        return false;
    }

    expected.ct_eq(provided).into()
}
