use thiserror::Error;

/// Configuration errors raised during startup.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing environment variable: {0}")]
    MissingEnvVar(String),

    #[error("PORT is not a valid port number: {0}")]
    InvalidPort(String),
}
