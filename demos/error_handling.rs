//! Error handling example for cityfind
//!
//! Building an index validates the static data and fails fast; lookups
//! themselves never fail.

use cityfind::{CityError, CityIndex, MatchConfig, Result};

fn main() -> Result<()> {
    println!("=== cityfind Error Handling Example ===\n");

    // Example 1: loading the embedded dataset
    println!("--- Example 1: Loading the index ---");
    match CityIndex::load() {
        Ok(index) => println!("✓ Index loaded: {} cities", index.stats().cities),
        Err(e) => {
            eprintln!("✗ Failed to load index: {e}");
            return Err(e);
        }
    }
    println!();

    // Example 2: inconsistent data is rejected at build time
    println!("--- Example 2: Validation errors ---");
    let attempts = [
        CityIndex::builder().cities(["Berlin", "Berlin"]).build(),
        CityIndex::builder().cities(["Berlin", " "]).build(),
        CityIndex::builder()
            .cities(["Berlin"])
            .alias("Прага", "Prague")
            .build(),
        CityIndex::builder()
            .cities(["Berlin", "Bern"])
            .aliases([("BE", "Berlin"), ("be", "Bern")])
            .build(),
        CityIndex::builder().cities(["Berlin"]).popular(["Paris"]).build(),
    ];
    for attempt in attempts {
        match attempt {
            Ok(_) => println!("  unexpectedly valid"),
            Err(e) => println!("  ✗ {e}"),
        }
    }
    println!();

    // Example 3: missing dataset file
    println!("--- Example 3: Missing file ---");
    match CityIndex::load_from_path("does/not/exist.json", MatchConfig::default()) {
        Err(CityError::NotFound(path)) => println!("  not found: {path}"),
        Err(e) => println!("  other error: {e}"),
        Ok(_) => println!("  unexpectedly loaded"),
    }
    println!();

    // Example 4: queries that match nothing are not errors
    println!("--- Example 4: Empty results ---");
    let index = CityIndex::load()?;
    for query in ["", "   ", "zzzzzz", "!!!"] {
        println!("  {query:?} → {:?}", index.search(query, 3));
    }

    Ok(())
}
