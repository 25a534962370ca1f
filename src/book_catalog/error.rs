use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("{}", malformed_record_message(.index, .reason))]
    MalformedRecord {
        /// Position of the offending entry in the storage file, when known.
        index: Option<usize>,
        reason: String,
    },

    #[error("Storage format error: {0}")]
    StorageFormat(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("No id left after {0}; cannot add another book")]
    IdsExhausted(i64),
}

impl CatalogError {
    pub fn malformed(reason: impl Into<String>) -> Self {
        CatalogError::MalformedRecord {
            index: None,
            reason: reason.into(),
        }
    }

    /// Attaches the entry position to a `MalformedRecord`; other variants pass through.
    pub fn at_index(self, position: usize) -> Self {
        match self {
            CatalogError::MalformedRecord { reason, .. } => CatalogError::MalformedRecord {
                index: Some(position),
                reason,
            },
            other => other,
        }
    }
}

fn malformed_record_message(index: &Option<usize>, reason: &str) -> String {
    match index {
        Some(i) => format!("Malformed record at entry {}: {}", i, reason),
        None => format!("Malformed record: {}", reason),
    }
}

impl From<confique::Error> for CatalogError {
    fn from(err: confique::Error) -> Self {
        CatalogError::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, CatalogError>;
