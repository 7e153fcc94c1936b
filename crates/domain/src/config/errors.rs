#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {0}: {1}")]
    FileRead(String, String),

    #[error("Failed to parse config: {0}")]
    Parse(String),

    #[error("Configuration validation error: {0}")]
    Validation(String),

    #[error("Invalid zone {zone}: {reason}")]
    Zone { zone: String, reason: String },
}

impl ConfigError {
    pub fn zone(zone: &str, reason: impl Into<String>) -> Self {
        ConfigError::Zone {
            zone: zone.to_string(),
            reason: reason.into(),
        }
    }
}
