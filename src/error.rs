use thiserror::Error;

/// Failures raised while creating or verifying a signed URL.
///
/// `UrlSigner::verify` only returns `Ok(false)` for a well-formed URL whose
/// signature does not match. Every structural problem is one of these.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SignedUrlError {
    #[error("Invalid query: {0}")]
    InvalidQuery(&'static str),

    #[error("Invalid timeout: {0}")]
    InvalidTimeout(String),

    #[error("Invalid signature: {0}")]
    SignatureInvalid(&'static str),

    #[error("Signature has expired (expires={0})")]
    SignatureExpired(String),
}

impl SignedUrlError {
    /// Short, stable name of the error kind
    pub fn kind(&self) -> &'static str {
        match self {
            SignedUrlError::InvalidQuery(_) => "invalid_query",
            SignedUrlError::InvalidTimeout(_) => "invalid_timeout",
            SignedUrlError::SignatureInvalid(_) => "signature_invalid",
            SignedUrlError::SignatureExpired(_) => "signature_expired",
        }
    }
}
