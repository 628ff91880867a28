use serde::{Deserialize, Serialize};

/// Latest reporting-week statistics (mirrors `GET /current-stats`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentStats {
    pub weekly_cases: f64,
    pub hospitalizations: f64,
    #[serde(default)]
    pub positive_rate: f64,
    /// Dominant variant name, e.g. "PQ.2".
    pub variant: String,
    /// Already formatted by the backend, e.g. "Aug 17, 2025".
    pub date: String,
}

/// One point of a case-count series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    /// ISO date, `YYYY-MM-DD`.
    pub date: String,
    pub value: f64,
}

/// Risk block of a prediction response.
///
/// `level` stays a free string on purpose: the dashboard renders any level
/// outside Low/Moderate as high risk, so an unknown value must flow through
/// instead of failing deserialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskAssessment {
    pub level: String,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub score: Option<f64>,
}

/// Mirrors `GET /predict` and `POST /predict-custom`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResponse {
    pub historical: Vec<SeriesPoint>,
    pub predictions: Vec<SeriesPoint>,
    pub risk_assessment: RiskAssessment,
    /// "Increasing", "Decreasing" or "Stable".
    pub trend: String,
    #[serde(default)]
    pub current_cases: Option<f64>,
    #[serde(default)]
    pub predicted_cases: Option<f64>,
}
