use std::collections::BTreeMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::NaiveDate;

use crate::error::LedgerError;
use crate::metrics;
use crate::types::WorkloadEntry;

pub const RPE_MIN: i64 = 1;
pub const RPE_MAX: i64 = 10;

/// Lesegrensesnitt som ACWR-beregningen trenger.
pub trait WorkloadStore {
    /// Sum av minutter × RPE for datoer i `[from, to]` (inklusiv). 0 hvis tomt.
    fn sum_load(&self, athlete_id: &str, from: NaiveDate, to: NaiveDate) -> f64;
}

/// Avviser entries før lagring: varighet < 0 eller RPE utenfor [1, 10].
pub fn validate_entry(entry: &WorkloadEntry) -> Result<(), LedgerError> {
    let reason = if entry.duration_minutes < 0 {
        Some(format!(
            "duration_minutes must be >= 0, got {}",
            entry.duration_minutes
        ))
    } else if !(RPE_MIN..=RPE_MAX).contains(&entry.rpe) {
        Some(format!(
            "rpe must be in [{RPE_MIN}, {RPE_MAX}], got {}",
            entry.rpe
        ))
    } else {
        None
    };

    match reason {
        Some(reason) => Err(LedgerError::InvalidEntry {
            athlete_id: entry.athlete_id.clone(),
            date: entry.date,
            reason,
        }),
        None => Ok(()),
    }
}

/// Append-only lager av treningsdager, én per (utøver, dato).
#[derive(Debug, Clone, Default)]
pub struct WorkloadLedger {
    by_athlete: BTreeMap<String, BTreeMap<NaiveDate, WorkloadEntry>>,
}

impl WorkloadLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lagrer en ny entry. Eksisterende (utøver, dato) gir `DuplicateEntry`
    /// og ledgeren er uendret.
    pub fn record(&mut self, entry: WorkloadEntry) -> Result<(), LedgerError> {
        let m = metrics::global();
        if let Err(e) = validate_entry(&entry) {
            log::warn!("rejected workload entry: {e}");
            m.observe_rejected(e.kind());
            return Err(e);
        }

        let days = self.by_athlete.entry(entry.athlete_id.clone()).or_default();
        if days.contains_key(&entry.date) {
            let e = LedgerError::DuplicateEntry {
                athlete_id: entry.athlete_id,
                date: entry.date,
            };
            log::warn!("rejected workload entry: {e}");
            m.observe_rejected(e.kind());
            return Err(e);
        }

        days.insert(entry.date, entry);
        m.entries_recorded_total.inc();
        Ok(())
    }

    /// Eksplisitt korrigering: bytter ut hele entryen og returnerer den gamle.
    pub fn replace(&mut self, entry: WorkloadEntry) -> Result<Option<WorkloadEntry>, LedgerError> {
        let m = metrics::global();
        if let Err(e) = validate_entry(&entry) {
            log::warn!("rejected workload replacement: {e}");
            m.observe_rejected(e.kind());
            return Err(e);
        }

        let days = self.by_athlete.entry(entry.athlete_id.clone()).or_default();
        let previous = days.insert(entry.date, entry);
        match &previous {
            Some(old) => {
                log::info!(
                    "replaced workload entry athlete={} date={} (load {} -> {})",
                    old.athlete_id,
                    old.date,
                    old.load(),
                    days[&old.date].load()
                );
                m.entries_replaced_total.inc();
            }
            None => m.entries_recorded_total.inc(),
        }
        Ok(previous)
    }

    pub fn get(&self, athlete_id: &str, date: NaiveDate) -> Option<&WorkloadEntry> {
        self.by_athlete.get(athlete_id)?.get(&date)
    }

    /// Entries i `[from, to]`, sortert på dato.
    pub fn entries(&self, athlete_id: &str, from: NaiveDate, to: NaiveDate) -> Vec<&WorkloadEntry> {
        if from > to {
            return Vec::new();
        }
        match self.by_athlete.get(athlete_id) {
            Some(days) => days.range(from..=to).map(|(_, e)| e).collect(),
            None => Vec::new(),
        }
    }

    /// Alle entries, sortert på utøver og dato.
    pub fn iter(&self) -> impl Iterator<Item = &WorkloadEntry> {
        self.by_athlete.values().flat_map(|days| days.values())
    }

    pub fn athletes(&self) -> impl Iterator<Item = &str> {
        self.by_athlete
            .iter()
            .filter(|(_, days)| !days.is_empty())
            .map(|(id, _)| id.as_str())
    }

    pub fn len(&self) -> usize {
        self.by_athlete.values().map(BTreeMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl WorkloadStore for WorkloadLedger {
    fn sum_load(&self, athlete_id: &str, from: NaiveDate, to: NaiveDate) -> f64 {
        self.entries(athlete_id, from, to)
            .into_iter()
            .map(WorkloadEntry::load)
            .sum()
    }
}

/// Trådsikker ledger. Skrivelåsen holdes over duplikatsjekk + insert, så
/// samtidige `record` for samme (utøver, dato) serialiseres.
#[derive(Debug, Clone, Default)]
pub struct SharedLedger {
    inner: Arc<RwLock<WorkloadLedger>>,
}

impl SharedLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_ledger(ledger: WorkloadLedger) -> Self {
        Self {
            inner: Arc::new(RwLock::new(ledger)),
        }
    }

    // Entries er uforanderlige, så en forgiftet lås etterlater aldri halvskrevne data.
    fn read(&self) -> RwLockReadGuard<'_, WorkloadLedger> {
        self.inner.read().unwrap_or_else(|p| p.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, WorkloadLedger> {
        self.inner.write().unwrap_or_else(|p| p.into_inner())
    }

    pub fn record(&self, entry: WorkloadEntry) -> Result<(), LedgerError> {
        self.write().record(entry)
    }

    pub fn replace(&self, entry: WorkloadEntry) -> Result<Option<WorkloadEntry>, LedgerError> {
        self.write().replace(entry)
    }

    pub fn get(&self, athlete_id: &str, date: NaiveDate) -> Option<WorkloadEntry> {
        self.read().get(athlete_id, date).cloned()
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// Kopi av nåværende innhold (f.eks. for lagring til disk)
    pub fn snapshot(&self) -> WorkloadLedger {
        self.read().clone()
    }
}

impl WorkloadStore for SharedLedger {
    fn sum_load(&self, athlete_id: &str, from: NaiveDate, to: NaiveDate) -> f64 {
        self.read().sum_load(athlete_id, from, to)
    }
}
