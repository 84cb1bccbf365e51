use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Storage unavailable: {0}")]
    Storage(String),

    #[error("Record source not found: {0}")]
    SourceNotFound(String),

    #[error("Predicate evaluation failed for {source_name}/{record}: {reason}")]
    PredicateEvaluation {
        source_name: String,
        record: String,
        reason: String,
    },

    #[error("Invalid synonym data: {0}")]
    InvalidSynonyms(String),

    #[error("Unknown attribute category: {0}")]
    UnknownCategory(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}
