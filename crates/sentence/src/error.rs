use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Sentence data is empty")]
    EmptyDataset,

    #[error("Failed to decode line {line}: {source}")]
    Decode {
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("Line {line} out of range (dataset has {len} lines)")]
    LineOutOfRange { line: usize, len: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Check if a fresh draw could succeed where this one failed
    pub fn is_retryable(&self) -> bool {
        matches!(self, Error::Decode { .. })
    }

    /// Index position of the line that caused this error, if any
    pub fn line(&self) -> Option<usize> {
        match self {
            Error::Decode { line, .. } | Error::LineOutOfRange { line, .. } => Some(*line),
            _ => None,
        }
    }
}
