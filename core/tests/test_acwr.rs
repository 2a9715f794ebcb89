use chrono::{Duration, NaiveDate};
use zone14_core::{AcwrCalculator, RiskZone, SharedLedger, WorkloadEntry, WorkloadLedger};

fn d(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

/// `days` påfølgende dager som slutter på `end`, alle med samme økt
fn steady_ledger(athlete: &str, end: NaiveDate, days: i64, minutes: i64, rpe: i64) -> WorkloadLedger {
    let mut ledger = WorkloadLedger::new();
    for i in 0..days {
        ledger
            .record(WorkloadEntry::new(athlete, end - Duration::days(i), minutes, rpe))
            .unwrap();
    }
    ledger
}

#[test]
fn steady_training_gives_ratio_one() {
    // 28 dager à 90 min @ RPE 7 = 630/dag
    let ref_date = d("2024-05-31");
    let ledger = steady_ledger("ola", ref_date, 28, 90, 7);

    let r = AcwrCalculator::execute(&ledger, "ola", ref_date);
    assert_eq!(r.acute_load, 4410.0);
    assert_eq!(r.chronic_load, 17640.0 / 4.0);
    assert_eq!(r.ratio, 1.0);
    assert_eq!(r.risk_zone, RiskZone::Safe);
}

#[test]
fn no_history_gives_zero_ratio_not_error() {
    let ledger = WorkloadLedger::new();
    let r = AcwrCalculator::execute(&ledger, "ola", d("2024-05-31"));
    assert_eq!(r.acute_load, 0.0);
    assert_eq!(r.chronic_load, 0.0);
    assert_eq!(r.ratio, 0.0);
    assert_eq!(r.risk_zone, RiskZone::Safe);
}

#[test]
fn acute_window_is_seven_days_inclusive() {
    let ref_date = d("2024-05-31");
    let mut ledger = WorkloadLedger::new();
    ledger.record(WorkloadEntry::new("ola", ref_date, 10, 1)).unwrap(); // 10
    ledger.record(WorkloadEntry::new("ola", ref_date - Duration::days(6), 20, 1)).unwrap(); // 20
    ledger.record(WorkloadEntry::new("ola", ref_date - Duration::days(7), 40, 1)).unwrap(); // utenfor akutt
    ledger.record(WorkloadEntry::new("ola", ref_date + Duration::days(1), 80, 1)).unwrap(); // fremtid

    let r = AcwrCalculator::execute(&ledger, "ola", ref_date);
    assert_eq!(r.acute_load, 30.0);
    assert_eq!(r.chronic_load, 70.0 / 4.0);
}

#[test]
fn chronic_window_is_twenty_eight_days_inclusive() {
    let ref_date = d("2024-05-31");
    let mut ledger = WorkloadLedger::new();
    ledger.record(WorkloadEntry::new("ola", ref_date - Duration::days(27), 100, 4)).unwrap(); // 400, innenfor
    ledger.record(WorkloadEntry::new("ola", ref_date - Duration::days(28), 100, 10)).unwrap(); // utenfor

    let r = AcwrCalculator::execute(&ledger, "ola", ref_date);
    assert_eq!(r.acute_load, 0.0);
    assert_eq!(r.chronic_load, 100.0);
    assert_eq!(r.ratio, 0.0);
    assert_eq!(r.risk_zone, RiskZone::Safe);
}

#[test]
fn sudden_spike_is_high_risk() {
    // All belastning siste 7 dager → akutt = sum, kronisk = sum/4 → ratio 4
    let ref_date = d("2024-05-31");
    let ledger = steady_ledger("ola", ref_date, 7, 60, 8);
    let r = AcwrCalculator::execute(&ledger, "ola", ref_date);
    assert_eq!(r.ratio, 4.0);
    assert_eq!(r.risk_zone, RiskZone::HighRisk);
}

#[test]
fn moderate_increase_lands_in_caution() {
    // 21 dager à 300, så 7 dager à 500: akutt 3500, kronisk (6300+3500)/4 = 2450 → 1.4286
    let ref_date = d("2024-05-31");
    let mut ledger = WorkloadLedger::new();
    for i in 0..28 {
        let date = ref_date - Duration::days(i);
        let (minutes, rpe) = if i < 7 { (100, 5) } else { (60, 5) };
        ledger.record(WorkloadEntry::new("ola", date, minutes, rpe)).unwrap();
    }
    let r = AcwrCalculator::execute(&ledger, "ola", ref_date);
    assert_eq!(r.acute_load, 3500.0);
    assert_eq!(r.chronic_load, 2450.0);
    assert!((r.ratio - 3500.0 / 2450.0).abs() < 1e-12);
    assert_eq!(r.risk_zone, RiskZone::Caution);
}

#[test]
fn other_athletes_do_not_leak_into_result() {
    let ref_date = d("2024-05-31");
    let mut ledger = steady_ledger("ola", ref_date, 28, 90, 7);
    for i in 0..7 {
        ledger
            .record(WorkloadEntry::new("kari", ref_date - Duration::days(i), 200, 10))
            .unwrap();
    }
    let r = AcwrCalculator::execute(&ledger, "ola", ref_date);
    assert_eq!(r.ratio, 1.0);
}

#[test]
fn execute_is_idempotent() {
    let ref_date = d("2024-05-31");
    let mut ledger = steady_ledger("ola", ref_date, 20, 47, 6);
    ledger.record(WorkloadEntry::new("ola", ref_date - Duration::days(22), 13, 3)).unwrap();

    let a = AcwrCalculator::execute(&ledger, "ola", ref_date);
    let b = AcwrCalculator::execute(&ledger, "ola", ref_date);
    assert_eq!(a.ratio.to_bits(), b.ratio.to_bits());
    assert_eq!(a.acute_load.to_bits(), b.acute_load.to_bits());
    assert_eq!(a.chronic_load.to_bits(), b.chronic_load.to_bits());
    assert_eq!(a.risk_zone, b.risk_zone);
}

#[test]
fn shared_ledger_gives_same_result_as_plain() {
    let ref_date = d("2024-05-31");
    let plain = steady_ledger("ola", ref_date, 28, 90, 7);
    let shared = SharedLedger::from_ledger(plain.clone());
    assert_eq!(
        AcwrCalculator::execute(&plain, "ola", ref_date),
        AcwrCalculator::execute(&shared, "ola", ref_date)
    );
}

#[test]
fn series_has_one_point_per_day() {
    let ref_date = d("2024-05-31");
    let ledger = steady_ledger("ola", ref_date, 28, 90, 7);
    let from = ref_date - Duration::days(6);

    let series = AcwrCalculator::series(&ledger, "ola", from, ref_date);
    assert_eq!(series.len(), 7);
    assert_eq!(series.first().unwrap().0, from);
    assert_eq!(series.last().unwrap().0, ref_date);
    assert_eq!(series.last().unwrap().1.ratio, 1.0);
    // ratio er aldri negativ
    assert!(series.iter().all(|(_, r)| r.ratio >= 0.0));

    assert!(AcwrCalculator::series(&ledger, "ola", ref_date, from).is_empty());
}

#[test]
fn earliest_representable_date_does_not_panic() {
    let empty = AcwrCalculator::execute(&WorkloadLedger::new(), "ola", NaiveDate::MIN);
    assert_eq!(empty.ratio, 0.0);
    assert_eq!(empty.risk_zone, RiskZone::Safe);

    // vinduene klemmes til NaiveDate::MIN, så entryen på MIN telles i begge
    let mut ledger = WorkloadLedger::new();
    ledger.record(WorkloadEntry::new("ola", NaiveDate::MIN, 60, 5)).unwrap();
    let r = AcwrCalculator::execute(&ledger, "ola", NaiveDate::MIN);
    assert_eq!(r.acute_load, 300.0);
    assert_eq!(r.chronic_load, 75.0);
    assert_eq!(r.ratio, 4.0);

    let series = AcwrCalculator::series(&ledger, "ola", NaiveDate::MIN, NaiveDate::MIN + Duration::days(2));
    assert_eq!(series.len(), 3);
}

#[test]
fn window_start_clamps_to_min() {
    use zone14_core::acwr::window_start;
    assert_eq!(window_start(d("2024-05-31"), 7), d("2024-05-25"));
    assert_eq!(window_start(d("2024-05-31"), 1), d("2024-05-31"));
    assert_eq!(window_start(NaiveDate::MIN, 28), NaiveDate::MIN);
}
