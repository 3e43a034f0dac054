use thiserror::Error;

/// Errors raised while loading a raw table from disk.
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("read csv {path}: {source}")]
    Csv {
        path: String,
        #[source]
        source: csv::Error,
    },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("empty input file: {0}")]
    EmptyInput(String),
}

pub type Result<T> = std::result::Result<T, IngestError>;
