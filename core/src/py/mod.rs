use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::wrap_pyfunction;

use crate::json_api;

// ──────────────────────────────────────────────────────────────────────────────
// Python-grensesnitt: JSON inn, JSON ut. All logikk ligger i json_api.
// ──────────────────────────────────────────────────────────────────────────────

#[pyfunction]
#[pyo3(signature = (entries_json, athlete_id, reference_date, cfg_json=None))]
fn compute_acwr_json(
    entries_json: &str,
    athlete_id: &str,
    reference_date: &str,
    cfg_json: Option<&str>,
) -> PyResult<String> {
    json_api::compute_acwr_json(entries_json, athlete_id, reference_date, cfg_json)
        .map_err(PyValueError::new_err)
}

#[pyfunction]
fn classify_ratio(ratio: f64) -> String {
    crate::risk::RiskClassifier::classify(ratio).as_str().to_string()
}

#[pyfunction]
fn metrics_text() -> String {
    crate::metrics::global().gather_text()
}

#[pymodule]
fn zone14_core(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(compute_acwr_json, m)?)?;
    m.add_function(wrap_pyfunction!(classify_ratio, m)?)?;
    m.add_function(wrap_pyfunction!(metrics_text, m)?)?;
    Ok(())
}
