//! Type definitions for the fetch module.

use thiserror::Error;
use tokio::time::Duration;

// Id range scanned by the per-id variants.
pub const START_ID: u32 = 1;
pub const MAX_ID: u32 = 731;

pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// A failed acquisition. Status errors are fatal to the enclosing
/// batch; nothing here is retried.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("failed to fetch hero {id}: status {status}")]
    HeroStatus { id: u32, status: u16 },

    #[error("failed to fetch hero list: status {status}")]
    BulkStatus { status: u16 },

    #[error("request error: {0}")]
    Request(#[from] reqwest::Error),
}
