// crates/cityfind-core/tests/properties.rs
//! Invariants of the resolution API checked over the whole embedded catalog.

use cityfind_core::{levenshtein, CityIndex, Tier};
use std::collections::HashSet;

const FRAGMENTS: &[&str] = &[
    "a", "o", "lon", "san", "new", "ber", "pheonix", "berln", "mosc", "sao", "st", "uk", "город",
    "москва", "x", "zzzz", "los angeles", "  paris  ", "ca", "de",
];

fn index() -> &'static CityIndex {
    CityIndex::load().expect("embedded dataset is valid")
}

fn queries() -> Vec<String> {
    let idx = index();
    idx.catalog()
        .iter()
        .map(|(_, e)| e.name.clone())
        .chain(idx.aliases().iter().map(|a| a.alias.clone()))
        .chain(FRAGMENTS.iter().map(|f| f.to_string()))
        .collect()
}

#[test]
fn results_are_capped_and_unique() {
    let idx = index();
    for q in queries() {
        for limit in [0, 1, 5, 10, 20] {
            let out = idx.search(&q, limit);
            assert!(out.len() <= limit, "{q:?} exceeded {limit}");
            let unique: HashSet<_> = out.iter().collect();
            assert_eq!(unique.len(), out.len(), "{q:?} has duplicates");
        }
    }
}

#[test]
fn empty_query_is_popular() {
    let idx = index();
    for n in [0, 1, 5, 20, 100] {
        assert_eq!(idx.search("", n), idx.popular_cities(n));
        assert_eq!(idx.search(" \t", n), idx.popular_cities(n));
    }
}

#[test]
fn every_catalog_city_is_found_by_its_own_name() {
    let idx = index();
    for (_, entry) in idx.catalog().iter() {
        assert!(idx.is_exact_match(&entry.name), "{}", entry.name);
        assert_eq!(idx.resolve(&entry.name), Some(entry.name.as_str()));
        assert_eq!(idx.search(&entry.name, 10)[0], entry.name, "{}", entry.name);
    }
}

#[test]
fn every_alias_resolves_to_its_target() {
    let idx = index();
    for alias in idx.aliases().iter() {
        let canonical = idx.city_name(alias.city);
        assert_eq!(idx.search(&alias.alias, 10)[0], canonical, "{}", alias.alias);
        assert!(idx.is_exact_match_with_aliases(&alias.alias));
    }
}

#[test]
fn exact_match_excludes_fuzzy_tier() {
    let idx = index();
    for q in queries() {
        let fuzzy = idx
            .match_candidates(&q, None)
            .iter()
            .any(|c| c.tier == Tier::Fuzzy);
        if idx.is_exact_match(&q) || idx.is_exact_match_with_aliases(&q) {
            assert!(!fuzzy, "{q:?} is exact but ran the fuzzy tier");
        }
    }
}

#[test]
fn tiers_are_ordered() {
    let idx = index();
    for q in queries() {
        let tiers: Vec<Tier> = idx.match_candidates(&q, None).iter().map(|c| c.tier).collect();
        assert!(tiers.windows(2).all(|w| w[0] <= w[1]), "{q:?}: {tiers:?}");
    }
}

#[test]
fn normalization_is_idempotent() {
    let idx = index();
    for q in queries() {
        let once = idx.normalize(&q);
        assert_eq!(idx.normalize(&once), once);
        let display = idx.normalize_for_display(&q);
        assert_eq!(idx.normalize_for_display(display), display);
    }
}

#[test]
fn distance_is_a_metric() {
    let names: Vec<String> = index()
        .catalog()
        .iter()
        .take(60)
        .map(|(_, e)| e.key.clone())
        .collect();
    for a in &names {
        assert_eq!(levenshtein(a, a), 0);
        for b in &names {
            assert_eq!(levenshtein(a, b), levenshtein(b, a));
            assert_eq!(levenshtein(a, ""), a.chars().count());
        }
    }
}
