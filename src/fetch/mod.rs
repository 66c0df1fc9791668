//! Hero record acquisition: per-id sources, the request cache, and the
//! bulk list endpoint.

mod bulk;
mod cache;
mod client;
mod fetcher;
mod source;
mod types;

pub use self::bulk::fetch_all;
pub use self::cache::HeroCache;
pub use self::client::create_http_client;
pub use self::fetcher::HeroFetcher;
pub use self::source::{ApiHeroSource, HeroSource};
pub use self::types::{FetchError, MAX_ID, START_ID};
