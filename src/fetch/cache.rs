//! In-memory id-to-record cache shared across fetches.

use dashmap::DashMap;

use crate::hero::Hero;

/// Process-lifetime cache mapping hero id to record.
///
/// Populated lazily on first successful fetch; failed fetches are never
/// inserted. No eviction: the id range is bounded, so growth is too.
/// `DashMap` keeps concurrent per-id fetches lock-free across ids.
#[derive(Debug, Default)]
pub struct HeroCache {
    entries: DashMap<u32, Hero>,
}

impl HeroCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: u32) -> Option<Hero> {
        self.entries.get(&id).map(|entry| entry.clone())
    }

    pub fn insert(&self, id: u32, hero: Hero) {
        self.entries.insert(id, hero);
    }

    /// Drops all cached records. Called between query runs.
    pub fn clear(&self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
