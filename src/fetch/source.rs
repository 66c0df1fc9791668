//! Per-id record sources.

use async_trait::async_trait;
use reqwest::StatusCode;
use tracing::{debug, warn};

use super::types::FetchError;
use crate::hero::Hero;
use crate::TARGET_WEB_REQUEST;

/// A source of individual hero records, one per id.
#[async_trait]
pub trait HeroSource: Send + Sync {
    async fn fetch_hero(&self, id: u32) -> Result<Hero, FetchError>;
}

/// The remote per-record API: `GET <base>/<token>/<id>`.
pub struct ApiHeroSource {
    client: reqwest::Client,
    base_url: String,
    access_token: String,
}

impl ApiHeroSource {
    pub fn new(client: reqwest::Client, base_url: &str, access_token: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            access_token: access_token.to_string(),
        }
    }

    fn hero_url(&self, id: u32) -> String {
        format!("{}/{}/{}", self.base_url, self.access_token, id)
    }
}

#[async_trait]
impl HeroSource for ApiHeroSource {
    async fn fetch_hero(&self, id: u32) -> Result<Hero, FetchError> {
        debug!(target: TARGET_WEB_REQUEST, "Requesting hero {}", id);
        let response = self.client.get(self.hero_url(id)).send().await?;

        if response.status() != StatusCode::OK {
            warn!(
                target: TARGET_WEB_REQUEST,
                "Non-OK status {} for hero {}",
                response.status(),
                id
            );
            return Err(FetchError::HeroStatus {
                id,
                status: response.status().as_u16(),
            });
        }

        let hero = response.json::<Hero>().await?;
        debug!(target: TARGET_WEB_REQUEST, "Fetched hero {}: {}", id, hero.name);
        Ok(hero)
    }
}
