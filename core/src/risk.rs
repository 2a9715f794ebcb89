use crate::types::RiskZone;

/// Øvre grense (inklusiv) for safe-sonen
pub const SAFE_UPPER: f64 = 1.3;
/// Øvre grense (inklusiv) for caution-sonen
pub const CAUTION_UPPER: f64 = 1.5;
/// Nedre grense for "sweet spot". Under dette er fortsatt safe (ren grenseklassifisering).
pub const SWEET_SPOT_LOWER: f64 = 0.8;

pub struct RiskClassifier;

impl RiskClassifier {
    /// Ratio → sone. Likhet på en grense havner i sonen med lavest risiko.
    /// Total: NaN og negative verdier gir safe, +inf gir high_risk.
    pub fn classify(ratio: f64) -> RiskZone {
        match ratio {
            r if r > CAUTION_UPPER => RiskZone::HighRisk,
            r if r > SAFE_UPPER => RiskZone::Caution,
            _ => RiskZone::Safe,
        }
    }

    /// Under sweet spot (< 0.8). Kan tyde på undertrening; endrer ikke sonen.
    pub fn is_below_sweet_spot(ratio: f64) -> bool {
        ratio < SWEET_SPOT_LOWER
    }
}
