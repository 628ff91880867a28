use common::CurrentStats;

use crate::api_client;

/// Fetch the latest reporting-week statistics.
pub async fn fetch_current_stats() -> Result<CurrentStats, String> {
    log::trace!("Fetching current reporting-week statistics");
    let result = api_client::get::<CurrentStats>("/current-stats").await;

    if let Err(ref e) = result {
        log::error!("Failed to fetch current stats: {}", e);
    } else {
        log::info!("Successfully fetched current stats");
    }

    result
}
