//! Basic usage example for dinedb-rs
//!
//! This example demonstrates how to:
//! - Load the bundled restaurant catalog
//! - Search by text and location
//! - Ask for suggestions while typing
//! - Browse by occasion and keep favorites

use dinedb_core::prelude::*;

fn main() -> Result<()> {
    println!("=== dinedb-rs Basic Usage Example ===\n");

    println!("Loading restaurant catalog...");
    let catalog = Catalog::load()?;
    println!("✓ Catalog loaded: {} restaurants\n", catalog.len());

    // Example 1: Text search
    println!("--- Example 1: Search for 'sushi' ---");
    for hit in catalog.search(&SearchQuery::new("sushi")) {
        println!("- {} ({})", hit.name(), hit.restaurant.location);
    }
    println!();

    // Example 2: Text plus location filter
    println!("--- Example 2: 'italian' in 'downtown' ---");
    for hit in catalog.search(&SearchQuery::new("italian").with_location("downtown")) {
        println!("- {} ({})", hit.name(), hit.restaurant.price_range);
    }
    println!();

    // Example 3: Suggestions
    println!("--- Example 3: Suggestions for 'da' ---");
    for s in catalog.suggest("da") {
        println!("- [{}] {}", s.kind, s.value);
    }
    println!();

    // Example 4: Occasion browsing, best rated first
    println!("--- Example 4: Date night, best rated first ---");
    let mut dates = catalog.by_occasion("date");
    dinedb_core::favorites::sort_restaurants(&mut dates, SortOrder::Rating);
    for r in &dates {
        println!("- {} ⭐ {}", r.name, r.rating);
    }
    println!();

    // Example 5: Favorites
    println!("--- Example 5: Favorites ---");
    let mut favorites = Favorites::new();
    favorites.add("6");
    favorites.add("1");
    for r in favorites.resolve(&catalog, SortOrder::Name) {
        println!("♥ {}", r.name);
    }

    Ok(())
}
