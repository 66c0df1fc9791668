//! Tallest-hero aggregation over a fetched record set.

use tracing::debug;

use super::height::height_to_cm;
use super::types::{Hero, HeroQuery};

/// A hero is employed when the workplace is neither empty nor the
/// `"-"` sentinel.
pub fn is_employed(hero: &Hero) -> bool {
    !matches!(hero.work.base.as_str(), "" | "-")
}

/// Finds the tallest hero matching the query.
///
/// A hero is a candidate when its gender matches and its employment
/// classification equals `has_job`. Candidates whose formatted height
/// fails to normalize are skipped. The strictly tallest candidate wins;
/// on ties the first one in source order is kept. `None` when no
/// candidate qualifies.
pub fn tallest<'a>(heroes: &'a [Hero], query: &HeroQuery) -> Option<&'a Hero> {
    let mut best: Option<(&Hero, u32)> = None;

    for hero in heroes {
        if hero.appearance.gender != query.gender || is_employed(hero) != query.has_job {
            continue;
        }

        let height_cm = match height_to_cm(hero.formatted_height()) {
            Ok(cm) => cm,
            Err(err) => {
                debug!("Skipping {:?}: {}", hero.name, err);
                continue;
            }
        };

        match best {
            Some((_, best_cm)) if height_cm <= best_cm => {}
            _ => best = Some((hero, height_cm)),
        }
    }

    best.map(|(hero, _)| hero)
}
