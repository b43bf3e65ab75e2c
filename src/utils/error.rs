use thiserror::Error;

#[derive(Error, Debug)]
pub enum AtlasError {
    #[error("Unknown directionality symbol: {glyph}")]
    InvalidSymbol { glyph: String },

    #[error("Severity {value} is outside the valid range -2..=2")]
    InvalidSeverity { value: i8 },

    #[error("Unknown disorder: {name}")]
    DisorderNotFound { name: String },

    #[error("Malformed row: {reason}")]
    MalformedRow { reason: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, AtlasError>;
