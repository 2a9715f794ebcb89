use once_cell::sync::Lazy;
use prometheus::{Encoder, IntCounter, IntCounterVec, Opts, Registry, TextEncoder};

use crate::types::RiskZone;

/// Tellere for ledger og ACWR. Eget `Registry` per instans slik at tester
/// kan lage isolerte instanser uten navnekollisjon.
#[derive(Clone)]
pub struct Metrics {
    registry: Registry,
    pub entries_recorded_total: IntCounter,
    pub entries_rejected_total: IntCounterVec,
    pub entries_replaced_total: IntCounter,
    pub acwr_computations_total: IntCounterVec,
}

impl Metrics {
    pub fn try_new() -> prometheus::Result<Self> {
        let registry = Registry::new();

        let entries_recorded_total = IntCounter::with_opts(Opts::new(
            "zone14_workload_entries_recorded_total",
            "Workload entries accepted by the ledger",
        ))?;
        let entries_rejected_total = IntCounterVec::new(
            Opts::new(
                "zone14_workload_entries_rejected_total",
                "Workload entries rejected by the ledger",
            ),
            &["reason"],
        )?;
        let entries_replaced_total = IntCounter::with_opts(Opts::new(
            "zone14_workload_entries_replaced_total",
            "Workload entries replaced through the correction path",
        ))?;
        let acwr_computations_total = IntCounterVec::new(
            Opts::new(
                "zone14_acwr_computations_total",
                "ACWR computations by resulting risk zone",
            ),
            &["risk_zone"],
        )?;

        registry.register(Box::new(entries_recorded_total.clone()))?;
        registry.register(Box::new(entries_rejected_total.clone()))?;
        registry.register(Box::new(entries_replaced_total.clone()))?;
        registry.register(Box::new(acwr_computations_total.clone()))?;

        Ok(Self {
            registry,
            entries_recorded_total,
            entries_rejected_total,
            entries_replaced_total,
            acwr_computations_total,
        })
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn observe_rejected(&self, reason: &str) {
        self.entries_rejected_total.with_label_values(&[reason]).inc();
    }

    pub fn observe_acwr(&self, zone: RiskZone) {
        self.acwr_computations_total
            .with_label_values(&[zone.as_str()])
            .inc();
    }

    /// Tekstformat (Prometheus exposition)
    pub fn gather_text(&self) -> String {
        let mut buf = Vec::new();
        let encoder = TextEncoder::new();
        if let Err(e) = encoder.encode(&self.registry.gather(), &mut buf) {
            log::warn!("metrics encode failed: {e}");
            return String::new();
        }
        String::from_utf8(buf).unwrap_or_default()
    }
}

static GLOBAL: Lazy<Metrics> =
    Lazy::new(|| Metrics::try_new().expect("static metric definitions are valid"));

/// Prosess-globale metrics
pub fn global() -> &'static Metrics {
    &GLOBAL
}
