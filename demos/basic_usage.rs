//! Basic usage example for vnlocale-rs
//!
//! This example demonstrates how to:
//! - Build the locale from the bundled dataset
//! - Walk provinces, districts and wards by code
//! - Run accent-insensitive, scoped searches

use vnlocale_rs::prelude::*;

fn main() -> Result<()> {
    println!("=== vnlocale-rs Basic Usage Example ===\n");

    println!("Building locale index...");
    let locale = VietnamLocale::new()?;
    let stats = locale.stats();
    println!(
        "✓ {} provinces, {} districts, {} wards\n",
        stats.provinces, stats.districts, stats.wards
    );

    // Example 1: List provinces
    println!("--- Example 1: Provinces ---");
    for (i, p) in locale.provinces().iter().enumerate() {
        println!("{}. {} [{}] ({})", i + 1, p.description, p.code, p.slug_name);
    }
    println!();

    // Example 2: Drill down by code
    println!("--- Example 2: Districts and wards by code ---");
    if let Some(districts) = locale.districts_by_province_code("79") {
        println!("Districts of Hồ Chí Minh: {}", districts.len());
        for d in districts.iter().take(3) {
            let wards = locale.wards_by_district(&d.code).map_or(0, |g| g.len());
            println!("  {} ({} wards)", d.name, wards);
        }
    }
    println!();

    // Example 3: Search with or without accents
    println!("--- Example 3: Province search ---");
    for query in ["ho chi minh", "Đà Nẵng", "tau"] {
        let names: Vec<&str> = locale
            .search_province(query)
            .iter()
            .map(|p| p.name.as_str())
            .collect();
        println!("  {query:>12} -> {names:?}");
    }
    println!();

    // Example 4: Scoped ward search
    println!("--- Example 4: Ward search narrowed by codes ---");
    let everywhere = locale.search_ward("phuong 3", None, None);
    let in_q3 = locale.search_ward("phuong 3", Some("770"), Some("79"));
    println!("  'phuong 3' everywhere: {}", everywhere.len());
    for w in &everywhere {
        println!("    {}", w.detail);
    }
    println!("  'phuong 3' in Quận 3: {}", in_q3.len());
    println!();

    // Example 5: Category chosen at runtime
    println!("--- Example 5: search_by_name ---");
    let hits = locale.search_by_name("district", "quan 1", DrillDown::province("79"))?;
    for hit in hits {
        println!("  {} {}", hit.code(), hit.label());
    }

    Ok(())
}
