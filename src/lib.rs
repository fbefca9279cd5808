//! Signed URLs
//!
//! Builds URLs whose query parameters are protected by an HMAC-SHA256
//! signature, with an optional absolute expiry, and verifies them again.
//!
//! ```
//! use signed_url::{ParameterSet, UrlSigner};
//!
//! let signer = UrlSigner::new("secret");
//! let url = signer
//!     .create("https://example.com/download", ParameterSet::from([("file", "report.pdf")]), None)
//!     .unwrap();
//! assert!(signer.verify(&url).unwrap());
//! ```

pub mod error;
pub mod models;
pub mod services;

pub use error::SignedUrlError;
pub use models::{CodecConfig, ParameterSet, Timeout};
pub use services::UrlSigner;
