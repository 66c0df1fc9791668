//! Cached per-id fetching with sequential and concurrent scans.

use std::ops::RangeInclusive;

use futures::future::try_join_all;
use tracing::{debug, info};

use super::cache::HeroCache;
use super::source::HeroSource;
use super::types::FetchError;
use crate::hero::Hero;
use crate::TARGET_WEB_REQUEST;

/// Fetches hero records by id through a [`HeroSource`], keeping every
/// successful response in an owned [`HeroCache`].
pub struct HeroFetcher<S> {
    source: S,
    cache: HeroCache,
}

impl<S: HeroSource> HeroFetcher<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            cache: HeroCache::new(),
        }
    }

    pub fn cache(&self) -> &HeroCache {
        &self.cache
    }

    /// Fetches one record, serving repeats from the cache. Failures
    /// propagate and leave the cache untouched.
    pub async fn fetch_hero(&self, id: u32) -> Result<Hero, FetchError> {
        if let Some(hero) = self.cache.get(id) {
            debug!(target: TARGET_WEB_REQUEST, "Cache hit for hero {}", id);
            return Ok(hero);
        }

        let hero = self.source.fetch_hero(id).await?;
        self.cache.insert(id, hero.clone());
        Ok(hero)
    }

    /// Fetches the whole id range one request at a time, in increasing
    /// id order. The first failure ends the scan.
    pub async fn fetch_range_sequential(
        &self,
        ids: RangeInclusive<u32>,
    ) -> Result<Vec<Hero>, FetchError> {
        let mut heroes = Vec::with_capacity(ids.clone().count());
        for id in ids {
            heroes.push(self.fetch_hero(id).await?);
        }
        info!(target: TARGET_WEB_REQUEST, "Fetched {} heroes sequentially", heroes.len());
        Ok(heroes)
    }

    /// Launches one fetch per id and awaits the whole batch. Results
    /// come back in id order; the first failure aborts the batch.
    pub async fn fetch_range_concurrent(
        &self,
        ids: RangeInclusive<u32>,
    ) -> Result<Vec<Hero>, FetchError> {
        let heroes = try_join_all(ids.map(|id| self.fetch_hero(id))).await?;
        info!(target: TARGET_WEB_REQUEST, "Fetched {} heroes concurrently", heroes.len());
        Ok(heroes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hero::{Appearance, Work};
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Source backed by a fixed map, counting every call that reaches it.
    struct MockHeroSource {
        heroes: HashMap<u32, Hero>,
        failures: HashMap<u32, u16>,
        calls: AtomicUsize,
    }

    impl MockHeroSource {
        fn new(heroes: Vec<(u32, Hero)>, failures: Vec<(u32, u16)>) -> Self {
            Self {
                heroes: heroes.into_iter().collect(),
                failures: failures.into_iter().collect(),
                calls: AtomicUsize::new(0),
            }
        }

        fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl HeroSource for MockHeroSource {
        async fn fetch_hero(&self, id: u32) -> Result<Hero, FetchError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if let Some(&status) = self.failures.get(&id) {
                return Err(FetchError::HeroStatus { id, status });
            }
            Ok(self.heroes.get(&id).cloned().unwrap_or_default())
        }
    }

    fn batman() -> Hero {
        Hero {
            name: "Batman".to_string(),
            appearance: Appearance {
                gender: "Male".to_string(),
                height: vec!["6'2".to_string(), "188 cm".to_string()],
            },
            work: Work {
                occupation: "CEO of Wayne Enterprises".to_string(),
                base: "Gotham City".to_string(),
            },
        }
    }

    #[tokio::test]
    async fn test_second_fetch_served_from_cache() {
        let fetcher = HeroFetcher::new(MockHeroSource::new(vec![(1, batman())], vec![]));

        let first = fetcher.fetch_hero(1).await.unwrap();
        assert_eq!(first.name, "Batman");
        assert_eq!(fetcher.source.call_count(), 1);

        let second = fetcher.fetch_hero(1).await.unwrap();
        assert_eq!(second, first);
        assert_eq!(fetcher.source.call_count(), 1);
    }

    #[tokio::test]
    async fn test_error_message_carries_id_and_status() {
        let fetcher = HeroFetcher::new(MockHeroSource::new(vec![], vec![(1, 404)]));

        let err = fetcher.fetch_hero(1).await.unwrap_err();
        let message = err.to_string();
        assert!(message.contains("1"), "missing id in {:?}", message);
        assert!(message.contains("404"), "missing status in {:?}", message);
    }

    #[tokio::test]
    async fn test_failed_fetch_is_not_cached() {
        let fetcher = HeroFetcher::new(MockHeroSource::new(vec![], vec![(1, 500)]));

        assert!(fetcher.fetch_hero(1).await.is_err());
        assert!(fetcher.cache().is_empty());

        // A repeat attempt reaches the source again.
        assert!(fetcher.fetch_hero(1).await.is_err());
        assert_eq!(fetcher.source.call_count(), 2);
    }

    #[tokio::test]
    async fn test_sequential_scan_collects_in_id_order() {
        let mut robin = batman();
        robin.name = "Robin".to_string();
        let fetcher = HeroFetcher::new(MockHeroSource::new(
            vec![(1, batman()), (2, robin)],
            vec![],
        ));

        let heroes = fetcher.fetch_range_sequential(1..=2).await.unwrap();
        assert_eq!(heroes.len(), 2);
        assert_eq!(heroes[0].name, "Batman");
        assert_eq!(heroes[1].name, "Robin");
        assert_eq!(fetcher.cache().len(), 2);
    }

    #[tokio::test]
    async fn test_concurrent_scan_collects_in_id_order() {
        let mut robin = batman();
        robin.name = "Robin".to_string();
        let fetcher = HeroFetcher::new(MockHeroSource::new(
            vec![(1, batman()), (2, robin), (3, Hero::default())],
            vec![],
        ));

        let heroes = fetcher.fetch_range_concurrent(1..=3).await.unwrap();
        assert_eq!(heroes.len(), 3);
        assert_eq!(heroes[0].name, "Batman");
        assert_eq!(heroes[1].name, "Robin");
        assert_eq!(fetcher.source.call_count(), 3);
    }

    #[tokio::test]
    async fn test_concurrent_scan_aborts_on_single_failure() {
        let fetcher = HeroFetcher::new(MockHeroSource::new(
            vec![(1, batman()), (3, Hero::default())],
            vec![(2, 503)],
        ));

        let err = fetcher.fetch_range_concurrent(1..=3).await.unwrap_err();
        assert!(err.to_string().contains("503"));
    }

    #[tokio::test]
    async fn test_sequential_scan_stops_at_first_failure() {
        let fetcher = HeroFetcher::new(MockHeroSource::new(
            vec![(1, batman())],
            vec![(2, 404)],
        ));

        assert!(fetcher.fetch_range_sequential(1..=3).await.is_err());
        // Id 3 was never requested.
        assert_eq!(fetcher.source.call_count(), 2);
    }
}
