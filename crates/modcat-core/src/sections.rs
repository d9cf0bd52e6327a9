//! Homepage sections.
//!
//! Sections are filled in priority order and share one exclusion set, so an
//! entry shown in an earlier section never repeats in a later one.

use rand::Rng;
use std::collections::HashSet;

use crate::catalog::{Catalog, CatalogEntry, EntryId};
use crate::sampler::{sample, take_unused};

/// Categories that make up "Popular Games".
pub const GAME_CATEGORIES: &[&str] = &["Strategy", "Arcade", "Action", "Simulation", "RPG"];
/// Categories never treated as games when no explicit game category is present.
pub const NON_GAME_CATEGORIES: &[&str] = &["Tools", "Photography", "Productivity"];
/// Categories that make up "Essential Apps".
pub const APP_CATEGORIES: &[&str] = &["Tools", "Photography", "Productivity", "Social"];

fn in_any(entry: &CatalogEntry, categories: &[&str]) -> bool {
    entry.category().is_some_and(|c| categories.contains(&c))
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HomeSections {
    /// Leading entries of the feed.
    pub newest: Vec<EntryId>,
    /// Random picks from the whole catalog.
    pub recommended: Vec<EntryId>,
    /// Random picks from game categories.
    pub games: Vec<EntryId>,
    /// First unused entries from app categories.
    pub apps: Vec<EntryId>,
}

impl HomeSections {
    pub fn compose<R: Rng + ?Sized>(catalog: &Catalog, size: usize, rng: &mut R) -> Self {
        let mut used: HashSet<EntryId> = HashSet::new();

        let newest = take_unused(&catalog.newest(size), size, &mut used);

        let recommended = sample(rng, &catalog.ids(), size, &mut used);

        let mut game_pool = catalog.ids_where(|e| in_any(e, GAME_CATEGORIES));
        if game_pool.is_empty() {
            game_pool = catalog.ids_where(|e| !in_any(e, NON_GAME_CATEGORIES));
        }
        let games = sample(rng, &game_pool, size, &mut used);

        let app_pool = catalog.ids_where(|e| in_any(e, APP_CATEGORIES));
        let apps = take_unused(&app_pool, size, &mut used);

        tracing::debug!(
            newest = newest.len(),
            recommended = recommended.len(),
            games = games.len(),
            apps = apps.len(),
            "composed homepage sections"
        );

        Self {
            newest,
            recommended,
            games,
            apps,
        }
    }

    /// Compose with the thread-local RNG.
    pub fn compose_random(catalog: &Catalog, size: usize) -> Self {
        Self::compose(catalog, size, &mut rand::thread_rng())
    }

    /// Sections as (title, ids) in display order.
    pub fn titled(&self) -> [(&'static str, &[EntryId]); 4] {
        [
            ("Newest Additions", self.newest.as_slice()),
            ("Recommended", self.recommended.as_slice()),
            ("Popular Games", self.games.as_slice()),
            ("Essential Apps", self.apps.as_slice()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn catalog_of(categories: &[&str]) -> Catalog {
        let items: Vec<serde_json::Value> = categories
            .iter()
            .enumerate()
            .map(|(i, c)| serde_json::json!({ "Name": format!("Mod {i}"), "Category": c }))
            .collect();
        Catalog::from_value(serde_json::Value::Array(items)).unwrap()
    }

    fn mixed() -> Catalog {
        let mut cats = Vec::new();
        for i in 0..40 {
            cats.push(match i % 5 {
                0 => "Strategy",
                1 => "Tools",
                2 => "Arcade",
                3 => "Photography",
                _ => "RPG",
            });
        }
        catalog_of(&cats)
    }

    #[test]
    fn sections_never_overlap() {
        let catalog = mixed();
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let s = HomeSections::compose(&catalog, 8, &mut rng);
            assert_eq!(s.newest, catalog.newest(8));
            assert_eq!(s.recommended.len(), 8);
            let mut all = HashSet::new();
            for (_, ids) in s.titled() {
                for id in ids {
                    assert!(all.insert(*id), "{id} appears in two sections");
                }
            }
        }
    }

    #[test]
    fn games_and_apps_respect_categories() {
        let catalog = mixed();
        let mut rng = StdRng::seed_from_u64(9);
        let s = HomeSections::compose(&catalog, 8, &mut rng);
        for id in &s.games {
            assert!(in_any(catalog.get(*id).unwrap(), GAME_CATEGORIES));
        }
        for id in &s.apps {
            assert!(in_any(catalog.get(*id).unwrap(), APP_CATEGORIES));
        }
        assert_eq!(s.games.len(), 8);
        assert!(!s.apps.is_empty());
    }

    #[test]
    fn games_fall_back_to_non_app_categories() {
        let catalog = catalog_of(&["Puzzle", "Tools", "Racing", "Photography", "Music"]);
        let mut rng = StdRng::seed_from_u64(1);
        let s = HomeSections::compose(&catalog, 1, &mut rng);
        for id in &s.games {
            let cat = catalog.get(*id).unwrap().category().unwrap();
            assert!(!NON_GAME_CATEGORIES.contains(&cat));
        }
    }

    #[test]
    fn small_catalog_is_consumed_by_early_sections() {
        let catalog = catalog_of(&["Strategy", "Tools", "Arcade"]);
        let mut rng = StdRng::seed_from_u64(5);
        let s = HomeSections::compose(&catalog, 8, &mut rng);
        assert_eq!(s.newest.len(), 3);
        assert!(s.recommended.is_empty());
        assert!(s.games.is_empty());
        assert!(s.apps.is_empty());
    }

    #[test]
    fn empty_catalog_yields_empty_sections() {
        let s = HomeSections::compose_random(&Catalog::default(), 8);
        assert_eq!(s, HomeSections::default());
    }
}
