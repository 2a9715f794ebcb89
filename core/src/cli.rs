use anyhow::Context;
use chrono::NaiveDate;

use crate::acwr::{AcwrCalculator, ACUTE_WINDOW_DAYS, CHRONIC_WINDOW_DAYS};
use crate::ledger::WorkloadStore;
use crate::metrics;
use crate::risk::RiskClassifier;
use crate::storage::load_ledger;

/// Lesbar ACWR-rapport. Avrunding (2 desimaler) skjer kun her.
pub fn format_acwr_report<S: WorkloadStore + ?Sized>(
    ledger: &S,
    athlete_id: &str,
    reference_date: NaiveDate,
) -> String {
    let r = AcwrCalculator::execute(ledger, athlete_id, reference_date);
    metrics::global().observe_acwr(r.risk_zone);

    let mut out = format!(
        "--- ACWR Report ---\n\
         Athlete: {athlete_id}\n\
         Reference date: {reference_date}\n\
         Acute load ({ACUTE_WINDOW_DAYS}d): {:.2}\n\
         Chronic load ({CHRONIC_WINDOW_DAYS}d/4): {:.2}\n\
         ACWR: {:.2}\n\
         Risk zone: {}\n",
        r.acute_load, r.chronic_load, r.ratio, r.risk_zone
    );
    if r.chronic_load > 0.0 && RiskClassifier::is_below_sweet_spot(r.ratio) {
        out.push_str("Note: ratio under 0.80 (mulig undertrening)\n");
    }
    out
}

pub fn print_acwr_report<S: WorkloadStore + ?Sized>(
    ledger: &S,
    athlete_id: &str,
    reference_date: NaiveDate,
) {
    print!("{}", format_acwr_report(ledger, athlete_id, reference_date));
}

/// Leser ledger-fil og bygger rapport. `reference_date` på formen YYYY-MM-DD.
pub fn report_from_file(path: &str, athlete_id: &str, reference_date: &str) -> anyhow::Result<String> {
    let date = NaiveDate::parse_from_str(reference_date, "%Y-%m-%d")
        .with_context(|| format!("ugyldig dato '{reference_date}'"))?;
    let ledger = load_ledger(path).with_context(|| format!("kunne ikke laste ledger fra {path}"))?;
    Ok(format_acwr_report(&ledger, athlete_id, date))
}
