use std::path::Path;

use crate::error::StorageError;
use crate::ledger::WorkloadLedger;
use crate::types::WorkloadEntry;

/// Parser en JSON-liste med entries. Feil peker på feltet (serde_path_to_error).
pub fn parse_entries(json: &str) -> Result<Vec<WorkloadEntry>, StorageError> {
    let mut de = serde_json::Deserializer::from_str(json);
    serde_path_to_error::deserialize(&mut de).map_err(|e| StorageError::Json {
        path: e.path().to_string(),
        message: e.inner().to_string(),
    })
}

/// Bygger ledger ved å registrere hver entry på nytt, så duplikater og
/// ugyldige verdier i fila avvises på samme måte som ved `record`.
pub fn ledger_from_entries(entries: Vec<WorkloadEntry>) -> Result<WorkloadLedger, StorageError> {
    let mut ledger = WorkloadLedger::new();
    for entry in entries {
        ledger.record(entry)?;
    }
    Ok(ledger)
}

/// Leser inn ledger fra disk (JSON).
/// Hvis filen ikke finnes, returneres en tom ledger.
pub fn load_ledger(path: &str) -> Result<WorkloadLedger, StorageError> {
    if !Path::new(path).exists() {
        log::info!("⚠️ Fant ikke ledger på {}, starter med tom ledger", path);
        return Ok(WorkloadLedger::new());
    }

    let contents = std::fs::read_to_string(path).map_err(|source| StorageError::Io {
        path: path.to_string(),
        source,
    })?;
    let ledger = ledger_from_entries(parse_entries(&contents)?)?;
    log::info!("📂 Ledger lastet fra {} ({} entries)", path, ledger.len());
    Ok(ledger)
}

/// Lagrer ledger til disk som JSON (pretty-print), sortert på utøver og dato.
pub fn save_ledger(ledger: &WorkloadLedger, path: &str) -> Result<(), StorageError> {
    let entries: Vec<&WorkloadEntry> = ledger.iter().collect();
    let json = serde_json::to_string_pretty(&entries)?;
    std::fs::write(path, json).map_err(|source| StorageError::Io {
        path: path.to_string(),
        source,
    })?;
    log::info!("✅ Ledger lagret til {} ({} entries)", path, entries.len());
    Ok(())
}
