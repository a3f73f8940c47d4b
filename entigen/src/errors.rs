use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Unknown type: {0}")]
    UnknownType(String),

    #[error("Failed to enumerate fields of {type_path}: {reason}")]
    FieldSource { type_path: String, reason: String },

    #[error("File name pattern has no '{{}}' placeholder: {0}")]
    InvalidPattern(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;
