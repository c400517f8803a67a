//! Basic usage example for cityfind
//!
//! This example demonstrates how to:
//! - Load the embedded city index
//! - Resolve exact names, aliases, prefixes and typos
//! - Inspect which tier produced each candidate
//! - Read the popular-cities list

use cityfind::{CityIndex, Result};

fn main() -> Result<()> {
    println!("=== cityfind Basic Usage Example ===\n");

    println!("Loading city index...");
    let index = CityIndex::load()?;
    let stats = index.stats();
    println!(
        "✓ {} cities, {} aliases, {} popular\n",
        stats.cities, stats.aliases, stats.popular
    );

    // Example 1: one query per tier
    println!("--- Example 1: Search ---");
    for query in ["moscow", "Москва", "lon", "burg", "Pheonix", "qwerty"] {
        println!("{query:>8} → {:?}", index.search(query, 5));
    }
    println!();

    // Example 2: tier and edit distance
    println!("--- Example 2: Explain ---");
    for c in index.match_candidates("berln", Some(5)) {
        println!(
            "  {:<10} {:<16} {:?}",
            index.city_name(c.city),
            c.tier.as_str(),
            c.distance
        );
    }
    println!();

    // Example 3: exact match suppresses the dropdown
    println!("--- Example 3: Exact match ---");
    for query in ["London UK", "Питер", "Lond"] {
        println!(
            "  {query:<10} exact={} alias-aware={}",
            index.is_exact_match(query),
            index.is_exact_match_with_aliases(query)
        );
    }
    println!();

    // Example 4: empty input
    println!("--- Example 4: Popular cities ---");
    for (i, city) in index.search("", 5).iter().enumerate() {
        println!("{}. {}", i + 1, index.normalize_for_display(city));
    }

    Ok(())
}
