use anyhow::Result;
use tracing::info;

use heroscan::environment;
use heroscan::fetch::{create_http_client, fetch_all};
use heroscan::hero::{tallest, HeroQuery};
use heroscan::logging::configure_logging;

/// Bulk variant: fetch the whole hero list in one request, no token,
/// no cache.
#[tokio::main]
async fn main() -> Result<()> {
    configure_logging();

    let client = create_http_client()?;
    let heroes = fetch_all(&client, &environment::bulk_api_url()).await?;

    let query = HeroQuery::new("Male", true);
    match tallest(&heroes, &query) {
        Some(hero) => {
            info!("Tallest {} hero with a job: {}", query.gender, hero.name);
            println!("{}", serde_json::to_string_pretty(hero)?);
        }
        None => println!("{{}}"),
    }

    Ok(())
}
