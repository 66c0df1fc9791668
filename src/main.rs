use anyhow::Result;
use tracing::info;

use heroscan::environment;
use heroscan::fetch::{create_http_client, ApiHeroSource, HeroFetcher, MAX_ID, START_ID};
use heroscan::hero::{tallest, HeroQuery};
use heroscan::logging::configure_logging;

/// Concurrent per-id scan: one request per id, all in flight at once.
#[tokio::main]
async fn main() -> Result<()> {
    configure_logging();

    let access_token = environment::access_token()?;
    let client = create_http_client()?;
    let source = ApiHeroSource::new(client, &environment::hero_api_base(), &access_token);
    let fetcher = HeroFetcher::new(source);

    let heroes = fetcher.fetch_range_concurrent(START_ID..=MAX_ID).await?;

    let query = HeroQuery::new("Male", true);
    match tallest(&heroes, &query) {
        Some(hero) => {
            info!("Tallest {} hero with a job: {}", query.gender, hero.name);
            println!("{}", serde_json::to_string_pretty(hero)?);
        }
        None => println!("{{}}"),
    }

    fetcher.cache().clear();
    Ok(())
}
