//! Error types shared across the meter pipeline

use thiserror::Error;

#[derive(Error, Debug)]
pub(crate) enum MeterError {
    /// The input container failed validation or could not be decoded as PCM.
    #[error("invalid audio format: {0}")]
    InvalidAudioFormat(String),

    /// A persisted peak dataset exists but could not be deserialized.
    /// The bad file is left in place for inspection.
    #[error("corrupt peak data in {path}: {source}")]
    PersistedDatasetCorrupt {
        path: String,
        source: serde_json::Error,
    },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("image encode error: {0}")]
    Image(#[from] image::ImageError),
}

pub(crate) type Result<T> = std::result::Result<T, MeterError>;
