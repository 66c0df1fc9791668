use anyhow::{Context, Result};
use std::env;

const DEFAULT_HERO_API_BASE: &str = "https://superheroapi.com/api";
const DEFAULT_BULK_API_URL: &str = "https://akabab.github.io/superhero-api/api/all.json";

/// Access token for the per-id hero API, required for per-id scans.
pub fn access_token() -> Result<String> {
    env::var("ACCESS_TOKEN").context("ACCESS_TOKEN environment variable required")
}

/// Base URL of the per-id hero API. Overridable so scans can point at a
/// local server.
pub fn hero_api_base() -> String {
    env::var("HERO_API_BASE").unwrap_or(DEFAULT_HERO_API_BASE.to_string())
}

/// URL of the bulk hero list. No token applies.
pub fn bulk_api_url() -> String {
    env::var("BULK_API_URL").unwrap_or(DEFAULT_BULK_API_URL.to_string())
}
