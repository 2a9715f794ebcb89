use chrono::NaiveDate;

use crate::acwr::{window_start, AcwrCalculator};
use crate::metrics;
use crate::storage::{ledger_from_entries, parse_entries};
use crate::types::{AcwrReport, Cfg, SeriesPoint};

fn parse_cfg(cfg_json: Option<&str>) -> Result<Cfg, String> {
    match cfg_json {
        None => Ok(Cfg::default()),
        Some(s) if s.trim().is_empty() => Ok(Cfg::default()),
        Some(s) => {
            let mut de = serde_json::Deserializer::from_str(s);
            serde_path_to_error::deserialize(&mut de)
                .map_err(|e| format!("cfg parse at {}: {}", e.path(), e.inner()))
        }
    }
}

/// JSON inn → JSON ut. Entries registreres i rekkefølge; første duplikat eller
/// ugyldige entry avbryter hele kallet.
pub fn compute_acwr_json(
    entries_json: &str,
    athlete_id: &str,
    reference_date: &str,
    cfg_json: Option<&str>,
) -> Result<String, String> {
    let reference_date = NaiveDate::parse_from_str(reference_date.trim(), "%Y-%m-%d")
        .map_err(|e| format!("reference_date '{reference_date}': {e}"))?;
    let cfg = parse_cfg(cfg_json)?;

    let entries = parse_entries(entries_json).map_err(|e| e.to_string())?;
    let ledger = ledger_from_entries(entries).map_err(|e| e.to_string())?;

    let result = AcwrCalculator::execute(&ledger, athlete_id, reference_date);
    metrics::global().observe_acwr(result.risk_zone);

    let series = cfg.include_series().then(|| {
        let from = window_start(reference_date, i64::from(cfg.series_days()));
        AcwrCalculator::series(&ledger, athlete_id, from, reference_date)
            .into_iter()
            .map(|(date, result)| SeriesPoint { date, result })
            .collect::<Vec<_>>()
    });

    let report = AcwrReport {
        athlete_id: athlete_id.to_string(),
        reference_date,
        result,
        series,
    };
    serde_json::to_string(&report).map_err(|e| e.to_string())
}
