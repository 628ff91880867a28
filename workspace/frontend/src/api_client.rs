pub mod health;
pub mod location;
pub mod prediction;
pub mod stats;

use gloo_net::http::Request;
use serde::{de::DeserializeOwned, Deserialize, Serialize};

use crate::settings;

fn api_base() -> String {
    settings::get_settings().api_base_url()
}

/// Error body returned by the prediction API on failure.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

/// GET against the prediction API. The backend returns bare JSON payloads
/// (no envelope), so the body deserializes straight into `T`.
pub async fn get<T>(endpoint: &str) -> Result<T, String>
where
    T: DeserializeOwned,
{
    let url = format!("{}{}", api_base(), endpoint);
    get_absolute(&url).await.map_err(|e| {
        log::error!("GET {} - {}", endpoint, e);
        e
    })
}

/// GET an absolute URL. Used directly for the external location lookup
/// service, which lives outside the prediction API.
pub async fn get_absolute<T>(url: &str) -> Result<T, String>
where
    T: DeserializeOwned,
{
    log::debug!("GET request to: {}", url);

    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    log::trace!("GET {} - Response received, parsing JSON", url);
    response
        .json::<T>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// POST against the prediction API with a JSON body.
pub async fn post<T, B>(endpoint: &str, body: &B) -> Result<T, String>
where
    T: DeserializeOwned,
    B: Serialize,
{
    let url = format!("{}{}", api_base(), endpoint);
    log::debug!("POST request to: {}", url);

    let response = Request::post(&url)
        .json(body)
        .map_err(|e| {
            let error_msg = format!("Failed to serialize request: {}", e);
            log::error!("POST {} - {}", endpoint, error_msg);
            error_msg
        })?
        .send()
        .await
        .map_err(|e| {
            let error_msg = format!("Request failed: {}", e);
            log::error!("POST {} - {}", endpoint, error_msg);
            error_msg
        })?;

    if !response.ok() {
        log::warn!("POST {} - Non-OK response: {}", endpoint, response.status());
        let error_body: Result<ErrorBody, _> = response.json().await;
        return Err(match error_body {
            Ok(err) => {
                log::error!("POST {} - API error: {}", endpoint, err.error);
                format!("Error: {}", err.error)
            }
            Err(_) => {
                let error_msg = format!("HTTP error: {}", response.status());
                log::error!("POST {} - {}", endpoint, error_msg);
                error_msg
            }
        });
    }

    log::trace!("POST {} - Response received, parsing JSON", endpoint);
    let parsed = response.json::<T>().await.map_err(|e| {
        let error_msg = format!("Failed to parse response: {}", e);
        log::error!("POST {} - {}", endpoint, error_msg);
        error_msg
    })?;

    log::info!("POST {} - Success", endpoint);
    Ok(parsed)
}
