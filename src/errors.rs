use thiserror::Error;

/// Configuration loading and inspection errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to open configuration file '{path}'")]
    OpenError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read configuration file '{path}'")]
    ReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid configuration format in '{origin}'")]
    DecodeError {
        origin: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("Unsupported configuration shape: '{shape}'")]
    UnsupportedShape { shape: String },

    #[error("Failed to write inspection output")]
    OutputError(#[from] std::io::Error),
}

impl ConfigError {
    /// Name of the phase that failed, as reported to the operator.
    pub fn phase(&self) -> &'static str {
        match self {
            ConfigError::OpenError { .. } => "open",
            ConfigError::ReadError { .. } => "read",
            ConfigError::DecodeError { .. } => "decode",
            ConfigError::UnsupportedShape { .. } => "shape",
            ConfigError::OutputError(_) => "output",
        }
    }

    /// True for failures that happened before any decoding was attempted.
    pub fn is_io(&self) -> bool {
        matches!(
            self,
            ConfigError::OpenError { .. } | ConfigError::ReadError { .. }
        )
    }
}

/// Result type alias for convenience
pub type ConfigResult<T> = Result<T, ConfigError>;
