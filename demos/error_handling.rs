//! Error handling example for vnlocale-rs
//!
//! Lookups and searches never fail: unknown codes give `None` or an empty
//! result. Errors come from building a locale out of inconsistent data and
//! from arguments the API cannot interpret.

use vnlocale_rs::prelude::*;
use vnlocale_rs::WardRaw;

fn main() -> Result<()> {
    println!("=== vnlocale-rs Error Handling Example ===\n");

    let locale = VietnamLocale::new()?;

    // Example 1: Unknown codes
    println!("--- Example 1: Unknown codes ---");
    for code in ["79", "00", "", "7 9"] {
        match locale.province(code) {
            Some(p) => println!("  Found: {} ({})", p.name, p.code),
            None => println!("  Not found: {code:?}"),
        }
    }
    let hits = locale.search_ward("phuong", Some("999"), None);
    println!("  Wards under unknown district: {}", hits.len());
    println!();

    // Example 2: Unknown category
    println!("--- Example 2: Unknown category ---");
    match locale.search_by_name("street", "le loi", DrillDown::none()) {
        Ok(hits) => println!("  {} hits", hits.len()),
        Err(e) => println!("  ✗ {e}"),
    }
    println!();

    // Example 3: Inconsistent dataset
    println!("--- Example 3: Building from a broken dataset ---");
    let mut dataset = Dataset::bundled()?.clone();
    dataset.wards.push(WardRaw {
        code: "99999".into(),
        district_code: "000".into(),
        province_code: "79".into(),
        name: "Phường Ma".into(),
        slug_name: "Phuong Ma".into(),
    });
    match VietnamLocale::from_dataset(dataset) {
        Ok(_) => println!("  unexpectedly built"),
        Err(e) if e.is_referential() => println!("  ✗ referential integrity: {e}"),
        Err(e) => return Err(e),
    }
    println!();

    // Example 4: Invalid configuration
    println!("--- Example 4: Invalid search config ---");
    match SearchConfig::builder().ward_fields(Vec::new()).build() {
        Ok(_) => println!("  unexpectedly valid"),
        Err(e) => println!("  ✗ {e}"),
    }

    Ok(())
}
