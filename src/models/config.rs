use serde::Deserialize;
use std::path::Path;

/// Per-instance codec configuration, loadable from a YAML file
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct CodecConfig {
    /// Query parameter carrying the signature
    #[serde(default = "default_signature_param")]
    pub signature_param: String,

    /// Query parameter carrying the expiry timestamp
    #[serde(default = "default_expires_param")]
    pub expires_param: String,
}

fn default_signature_param() -> String {
    "_signature".to_string()
}

fn default_expires_param() -> String {
    "_expires".to_string()
}

impl CodecConfig {
    /// Load configuration from a YAML file, falling back to defaults
    pub fn load_from_file(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => Self::from_yaml(&content).unwrap_or_else(|e| {
                tracing::warn!(%e, path = %path.display(), "Failed to parse config, using defaults");
                Self::default()
            }),
            Err(e) => {
                tracing::warn!(%e, path = %path.display(), "Failed to read config, using defaults");
                Self::default()
            }
        }
    }

    /// Parse configuration from a YAML document
    pub fn from_yaml(content: &str) -> Result<Self, serde_yaml::Error> {
        let config: Self = serde_yaml::from_str(content)?;
        tracing::debug!(
            signature_param = %config.signature_param,
            expires_param = %config.expires_param,
            "Loaded configuration"
        );
        Ok(config)
    }
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            signature_param: default_signature_param(),
            expires_param: default_expires_param(),
        }
    }
}
