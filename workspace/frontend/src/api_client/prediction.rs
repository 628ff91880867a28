use common::{CustomInputSet, PredictionResponse};

use crate::api_client;

/// Fetch the default (national data) forecast.
pub async fn fetch_prediction() -> Result<PredictionResponse, String> {
    log::trace!("Fetching default prediction");
    let result = api_client::get::<PredictionResponse>("/predict").await;

    if let Err(ref e) = result {
        log::error!("Failed to fetch predictions: {}", e);
    } else {
        log::info!("Successfully fetched default prediction");
    }

    result
}

/// Request a forecast for user-supplied location and parameters.
pub async fn fetch_custom_prediction(
    input: &CustomInputSet,
) -> Result<PredictionResponse, String> {
    log::trace!("Requesting custom prediction for: {}", input.location);
    let result = api_client::post::<PredictionResponse, _>("/predict-custom", input).await;

    if let Err(ref e) = result {
        log::error!(
            "Failed to generate custom prediction for {}: {}",
            input.location,
            e
        );
    } else {
        log::info!("Custom prediction generated for {}", input.location);
    }

    result
}
