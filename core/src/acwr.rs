use chrono::{Duration, NaiveDate};

use crate::ledger::WorkloadStore;
use crate::risk::RiskClassifier;
use crate::types::AcwrResult;

pub const ACUTE_WINDOW_DAYS: i64 = 7;
pub const CHRONIC_WINDOW_DAYS: i64 = 28;
/// 28 dager = 4 uker; kronisk sum deles på dette for å havne på ukesnivå
pub const CHRONIC_WEEKS: f64 = 4.0;

/// Første dag i et vindu på `days` dager som slutter på `end`. Klemmes til `NaiveDate::MIN`.
pub fn window_start(end: NaiveDate, days: i64) -> NaiveDate {
    end.checked_sub_signed(Duration::days(days - 1))
        .unwrap_or(NaiveDate::MIN)
}

/// Acute:Chronic Workload Ratio.
///
/// Akutt  = sum over `[ref - 6, ref]` (7 dager, rå sum)
/// Kronisk = sum over `[ref - 27, ref]` (28 dager) / 4
/// Ratio  = akutt / kronisk, eller 0 når kronisk er 0 (ingen historikk ≠ høy risiko)
pub struct AcwrCalculator;

impl AcwrCalculator {
    pub fn execute<S: WorkloadStore + ?Sized>(
        ledger: &S,
        athlete_id: &str,
        reference_date: NaiveDate,
    ) -> AcwrResult {
        let acute_from = window_start(reference_date, ACUTE_WINDOW_DAYS);
        let chronic_from = window_start(reference_date, CHRONIC_WINDOW_DAYS);

        let acute_load = ledger.sum_load(athlete_id, acute_from, reference_date);
        let chronic_load = ledger.sum_load(athlete_id, chronic_from, reference_date) / CHRONIC_WEEKS;

        let ratio = if chronic_load > 0.0 {
            acute_load / chronic_load
        } else {
            0.0
        };
        let risk_zone = RiskClassifier::classify(ratio);

        log::debug!(
            "acwr athlete={athlete_id} ref={reference_date} acute={acute_load} chronic={chronic_load} ratio={ratio} zone={risk_zone}"
        );

        AcwrResult {
            ratio,
            acute_load,
            chronic_load,
            risk_zone,
        }
    }

    /// Én ACWR per dag i `[from, to]`. Tom hvis `from > to`.
    pub fn series<S: WorkloadStore + ?Sized>(
        ledger: &S,
        athlete_id: &str,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Vec<(NaiveDate, AcwrResult)> {
        from.iter_days()
            .take_while(|d| *d <= to)
            .map(|d| (d, Self::execute(ledger, athlete_id, d)))
            .collect()
    }
}
