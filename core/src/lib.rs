pub mod acwr;
pub mod cli;
pub mod error;
pub mod json_api;
pub mod ledger;
pub mod metrics;
pub mod risk;
pub mod storage;
pub mod types;

#[cfg(feature = "python")]
mod py;

pub use acwr::AcwrCalculator;
pub use error::{LedgerError, StorageError};
pub use json_api::compute_acwr_json;
pub use ledger::{SharedLedger, WorkloadLedger, WorkloadStore};
pub use risk::RiskClassifier;
pub use storage::{load_ledger, save_ledger};
pub use types::{AcwrResult, Cfg, RiskZone, WorkloadEntry};
