use thiserror::Error;

#[derive(Error, Debug)]
pub enum LayerError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Invalid configuration value for '{field}': {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Invalid payload: {message}")]
    InvalidPayload { message: String },
}

pub type Result<T> = std::result::Result<T, LayerError>;
