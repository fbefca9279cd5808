use chrono::{DateTime, Utc};
use std::fmt;

use crate::error::SignedUrlError;
use crate::models::{CodecConfig, ParameterSet, Timeout};
use crate::services::{query_codec, signer, timeout_resolver};

/// Creates and verifies URLs whose query string is protected by an
/// HMAC-SHA256 signature, optionally with an absolute expiry.
///
/// The signature parameter is always appended last. The expiry parameter is
/// added before signing, so it is covered by the signature.
#[derive(Clone)]
pub struct UrlSigner {
    secret: Vec<u8>,
    config: CodecConfig,
}

impl UrlSigner {
    pub fn new(secret: impl AsRef<[u8]>) -> Self {
        Self::with_config(secret, CodecConfig::default())
    }

    /// Use custom names for the signature and expiry parameters
    pub fn with_config(secret: impl AsRef<[u8]>, config: CodecConfig) -> Self {
        Self {
            secret: secret.as_ref().to_vec(),
            config,
        }
    }

    /// Generate a new signer with a random 32-byte secret
    pub fn with_random_secret() -> Self {
        use rand::Rng;
        let secret: [u8; 32] = rand::thread_rng().gen();
        Self::new(secret)
    }

    pub fn set_secret(&mut self, secret: impl AsRef<[u8]>) {
        self.secret = secret.as_ref().to_vec();
    }

    pub fn secret(&self) -> &[u8] {
        &self.secret
    }

    pub fn algorithm(&self) -> &'static str {
        signer::ALGORITHM
    }

    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    /// Extract the parameters of a URL's query string
    pub fn params_from_url(url: &str) -> Result<ParameterSet, SignedUrlError> {
        let query = query_codec::split_url(url)
            .query
            .ok_or(SignedUrlError::InvalidQuery("No query parameters specified"))?;
        query_codec::parse_query(query)
            .map_err(|_| SignedUrlError::InvalidQuery("Query is not valid UTF-8"))
    }

    /// Sign a canonical query string with this signer's secret
    pub fn sign_query(&self, query: &str) -> Result<String, SignedUrlError> {
        signer::sign(query, &self.secret)
    }

    /// Build a signed URL from `base` plus `data`.
    ///
    /// Parameters already present in `base` are kept and come first; `data`
    /// overrides them on key collisions. Fails with `InvalidQuery` when
    /// neither supplies a parameter.
    pub fn create(
        &self,
        base: &str,
        data: ParameterSet,
        timeout: Option<Timeout>,
    ) -> Result<String, SignedUrlError> {
        self.create_at(base, data, timeout, Utc::now())
    }

    /// [`create`](Self::create) against an explicit clock
    pub fn create_at(
        &self,
        base: &str,
        data: ParameterSet,
        timeout: Option<Timeout>,
        now: DateTime<Utc>,
    ) -> Result<String, SignedUrlError> {
        let parts = query_codec::split_url(base);

        let mut params = parts
            .query
            .map(query_codec::parse_query)
            .transpose()
            .map_err(|_| SignedUrlError::InvalidQuery("Query is not valid UTF-8"))?
            .unwrap_or_default();
        if params.is_empty() && data.is_empty() {
            return Err(SignedUrlError::InvalidQuery("No query parameters specified"));
        }
        params.merge(data);

        // Re-signing an already signed URL replaces the old signature
        params.remove(&self.config.signature_param);

        let expires = match timeout {
            Some(timeout) => {
                let expires = timeout_resolver::resolve_future(&timeout, now)?;
                params.insert(self.config.expires_param.as_str(), expires.to_string());
                Some(expires)
            }
            None => None,
        };

        let query = query_codec::build_query(&params);
        let signature = self.sign_query(&query)?;

        let mut url = format!(
            "{}?{}&{}={}",
            parts.base,
            query,
            query_codec::encode_component(&self.config.signature_param),
            signature
        );
        if let Some(fragment) = parts.fragment {
            url.push('#');
            url.push_str(fragment);
        }

        tracing::debug!(params = params.len(), ?expires, "Created signed URL");
        Ok(url)
    }

    /// Verify a signed URL.
    ///
    /// Returns `Ok(false)` when the signature does not match, or when the query
    /// carries bytes that do not decode to UTF-8. A present expiry is checked
    /// before the signature.
    pub fn verify(&self, url: &str) -> Result<bool, SignedUrlError> {
        self.verify_at(url, Utc::now())
    }

    /// [`verify`](Self::verify) against an explicit clock
    pub fn verify_at(&self, url: &str, now: DateTime<Utc>) -> Result<bool, SignedUrlError> {
        let query = query_codec::split_url(url)
            .query
            .filter(|query| !query.is_empty())
            .ok_or(SignedUrlError::InvalidQuery(
                "No URI parameters provided, cannot validate",
            ))?;

        // No signature can cover bytes that do not decode
        let mut params = match query_codec::parse_query(query) {
            Ok(params) => params,
            Err(e) => {
                tracing::debug!(%e, "Rejected signed URL");
                return Ok(false);
            }
        };

        let signature = match params.remove(&self.config.signature_param) {
            Some(Some(signature)) if !signature.is_empty() => signature,
            _ => return Err(SignedUrlError::SignatureInvalid("No signature found")),
        };

        if let Some(expires) = params.get(&self.config.expires_param) {
            // Unreadable expiry values fail closed
            let expired = expires
                .and_then(|value| value.trim().parse::<i64>().ok())
                .map_or(true, |timestamp| timestamp < now.timestamp());
            if expired {
                tracing::debug!(expires = ?expires, "Signed URL has expired");
                return Err(SignedUrlError::SignatureExpired(
                    expires.unwrap_or_default().to_string(),
                ));
            }
        }

        let expected = self.sign_query(&query_codec::build_query(&params))?;
        let valid = signer::signatures_match(&expected, &signature);

        tracing::debug!(valid, "Verified signed URL");
        Ok(valid)
    }
}

impl fmt::Debug for UrlSigner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UrlSigner")
            .field("secret", &"<redacted>")
            .field("algorithm", &self.algorithm())
            .field("config", &self.config)
            .finish()
    }
}
