use thiserror::Error;

/// Problems with the contents of an SPE file.
#[derive(Error, Debug)]
pub enum FormatError {
    #[error("Header too short: expected 4100 bytes, got {actual}")]
    HeaderTooShort { actual: usize },

    #[error("Truncated payload: expected {expected} bytes of frame data, got {actual}")]
    TruncatedPayload { expected: usize, actual: usize },

    #[error("Unknown datatype {0} (expected 0-3)")]
    UnknownDatatype(i16),

    #[error("Invalid frame count: {0}")]
    InvalidFrameCount(i32),

    #[error("Failed to decode {0}")]
    Decode(String),

    #[error("Invalid frame shape: {0}")]
    Shape(#[from] ndarray::ShapeError),
}

#[derive(Error, Debug)]
pub enum SpeError {
    #[error(transparent)]
    Format(#[from] FormatError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SpeError>;
