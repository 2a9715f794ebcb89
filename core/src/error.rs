use chrono::NaiveDate;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LedgerError {
    #[error("duplicate workload entry for athlete {athlete_id} on {date}")]
    DuplicateEntry { athlete_id: String, date: NaiveDate },

    #[error("invalid workload entry for athlete {athlete_id} on {date}: {reason}")]
    InvalidEntry {
        athlete_id: String,
        date: NaiveDate,
        reason: String,
    },
}

impl LedgerError {
    /// Kort label for metrics (`reason`-label)
    pub fn kind(&self) -> &'static str {
        match self {
            LedgerError::DuplicateEntry { .. } => "duplicate",
            LedgerError::InvalidEntry { .. } => "invalid",
        }
    }
}

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("io error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("json parse at {path}: {message}")]
    Json { path: String, message: String },

    #[error("json encode: {0}")]
    Encode(#[from] serde_json::Error),

    #[error(transparent)]
    Ledger(#[from] LedgerError),
}
