//! Loads remote data and fans it into one render-ready value per mode.
//! Rendering derivations live in `viewmodel`; this module only talks to
//! the API.

use common::{CurrentStats, CustomInputSet, PredictionResponse};

use crate::api_client::{prediction, stats};

/// Everything one dashboard render needs, tagged by mode.
#[derive(Debug, Clone, PartialEq)]
pub enum DashboardData {
    Default {
        /// `None` when the stats fetch failed; the panel degrades, the page
        /// does not.
        stats: Option<CurrentStats>,
        prediction: PredictionResponse,
    },
    Custom {
        input: CustomInputSet,
        prediction: PredictionResponse,
    },
}

impl DashboardData {
    pub fn prediction(&self) -> &PredictionResponse {
        match self {
            DashboardData::Default { prediction, .. } => prediction,
            DashboardData::Custom { prediction, .. } => prediction,
        }
    }

    pub fn custom_input(&self) -> Option<&CustomInputSet> {
        match self {
            DashboardData::Default { .. } => None,
            DashboardData::Custom { input, .. } => Some(input),
        }
    }
}

/// Default-mode load. Stats and predictions are fetched sequentially; a
/// stats failure is logged and degrades that panel, while a prediction
/// failure is the page-level error.
pub async fn load_default() -> Result<DashboardData, String> {
    let stats = match stats::fetch_current_stats().await {
        Ok(stats) => Some(stats),
        Err(e) => {
            log::error!("Current stats unavailable, degrading panel: {}", e);
            None
        }
    };

    let prediction = prediction::fetch_prediction().await?;
    log::info!("Dashboard data loaded successfully");

    Ok(DashboardData::Default { stats, prediction })
}

/// Custom-mode load. The input must already carry an accepted location
/// match; the modal enforces that before constructing a `CustomInputSet`.
pub async fn load_custom(input: CustomInputSet) -> Result<DashboardData, String> {
    let prediction = prediction::fetch_custom_prediction(&input).await?;
    Ok(DashboardData::Custom { input, prediction })
}
