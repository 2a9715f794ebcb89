use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Én registrert treningsdag for én utøver.
///
/// Belastning (load) = varighet i minutter × RPE (1–10).
/// Entries er uforanderlige når de først er lagret; korrigering skjer via
/// `WorkloadLedger::replace`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkloadEntry {
    #[serde(alias = "athleteId")]
    pub athlete_id: String,
    pub date: NaiveDate,
    #[serde(alias = "durationMinutes", alias = "duration")]
    pub duration_minutes: i64,
    #[serde(alias = "ratingOfPerceivedExertion")]
    pub rpe: i64,
}

impl WorkloadEntry {
    pub fn new(athlete_id: impl Into<String>, date: NaiveDate, duration_minutes: i64, rpe: i64) -> Self {
        Self {
            athlete_id: athlete_id.into(),
            date,
            duration_minutes,
            rpe,
        }
    }

    /// sRPE-belastning = minutter × RPE. Multipliseres i f64 så store varigheter ikke flyter over.
    pub fn load(&self) -> f64 {
        self.duration_minutes as f64 * self.rpe as f64
    }
}

/// Risikosone for en ACWR-verdi.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskZone {
    Safe,
    Caution,
    HighRisk,
}

impl RiskZone {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskZone::Safe => "safe",
            RiskZone::Caution => "caution",
            RiskZone::HighRisk => "high_risk",
        }
    }
}

impl std::fmt::Display for RiskZone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AcwrResult {
    pub ratio: f64,
    pub acute_load: f64,
    /// 28-dagers sum normalisert til ukesnivå (sum / 4)
    pub chronic_load: f64,
    pub risk_zone: RiskZone,
}

/// Valgfri konfig for JSON-grensesnittet.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Cfg {
    pub include_series: Option<bool>,
    pub series_days: Option<u32>,
}

impl Cfg {
    pub const DEFAULT_SERIES_DAYS: u32 = 28;
    pub const MAX_SERIES_DAYS: u32 = 366;

    pub fn include_series(&self) -> bool {
        self.include_series.unwrap_or(false)
    }

    /// Antall dager i serien, klemt til [1, 366]
    pub fn series_days(&self) -> u32 {
        self.series_days
            .unwrap_or(Self::DEFAULT_SERIES_DAYS)
            .clamp(1, Self::MAX_SERIES_DAYS)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeriesPoint {
    pub date: NaiveDate,
    #[serde(flatten)]
    pub result: AcwrResult,
}

/// Utdata fra `compute_acwr_json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AcwrReport {
    pub athlete_id: String,
    pub reference_date: NaiveDate,
    #[serde(flatten)]
    pub result: AcwrResult,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub series: Option<Vec<SeriesPoint>>,
}
