pub mod query_codec;
pub mod signer;
pub mod timeout_resolver;
pub mod url_signer;

pub use query_codec::{build_query, parse_query, split_url, UrlParts};
pub use url_signer::UrlSigner;
