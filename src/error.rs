use thiserror::Error;

/// Errors raised by the spin machines when asked for something impossible.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SlotError {
    #[error("party size {requested} is outside {min}..={max}")]
    InvalidMemberCount { requested: usize, min: usize, max: usize },

    #[error("cannot draw {requested} distinct items from {available}")]
    NotEnoughCandidates { requested: usize, available: usize },
}

/// Errors from reading or writing the persisted files.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Error, Debug)]
pub enum AudioError {
    #[error("No audio output device found")]
    NoDevice,

    #[error("Failed to get device config: {0}")]
    Config(String),

    #[error("Unsupported sample format: {0}")]
    UnsupportedFormat(String),

    #[error("Stream error: {0}")]
    Stream(String),
}

pub type AudioResult<T> = Result<T, AudioError>;
