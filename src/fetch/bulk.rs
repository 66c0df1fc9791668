//! Bulk acquisition: one request for the full hero list.

use reqwest::StatusCode;
use tracing::{info, warn};

use super::types::FetchError;
use crate::hero::Hero;
use crate::TARGET_WEB_REQUEST;

/// Fetches the complete hero list in one request. No token, no cache:
/// the call happens once per run.
pub async fn fetch_all(client: &reqwest::Client, url: &str) -> Result<Vec<Hero>, FetchError> {
    info!(target: TARGET_WEB_REQUEST, "Loading hero list from {}", url);
    let response = client.get(url).send().await?;

    if response.status() != StatusCode::OK {
        warn!(
            target: TARGET_WEB_REQUEST,
            "Non-OK status {} from {}",
            response.status(),
            url
        );
        return Err(FetchError::BulkStatus {
            status: response.status().as_u16(),
        });
    }

    let heroes = response.json::<Vec<Hero>>().await?;
    info!(target: TARGET_WEB_REQUEST, "Loaded {} heroes", heroes.len());
    Ok(heroes)
}
