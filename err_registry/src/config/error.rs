//! Error types for configuration loading

use std::path::PathBuf;

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read configuration file '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid configuration document: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("First code {code} is negative: negative codes would reach the -1 sentinel")]
    InvalidFirstCode { code: i32 },

    #[error("Unknown miss policy '{value}': expected 'ignore' or 'report_internal'")]
    InvalidMissPolicy { value: String },
}

impl ConfigError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
