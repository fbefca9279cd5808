pub mod config;
pub mod params;
pub mod timeout;

pub use config::CodecConfig;
pub use params::ParameterSet;
pub use timeout::Timeout;
