//! Structural properties of the index over the bundled dataset.
#![cfg(feature = "bundled")]

use std::collections::HashSet;
use vnlocale_core::prelude::*;
use vnlocale_core::text::to_lower_case_and_remove_accents;

#[test]
fn every_record_is_reachable_through_its_codes() {
    let locale = VietnamLocale::new().unwrap();

    for p in locale.provinces() {
        assert_eq!(locale.province(&p.code), Some(p));
    }
    for d in locale.districts() {
        assert_eq!(locale.district(&d.code), Some(d));
        let siblings = locale.districts_by_province_code(&d.province_code).unwrap();
        assert!(siblings.iter().any(|x| x == d));
    }
    for w in locale.wards() {
        let district = locale.district(&w.district_code).unwrap();
        assert_eq!(district.province_code, w.province_code);
        let province = locale.province(&w.province_code).unwrap();
        assert_eq!(
            w.detail,
            format!("{}, {}, {}", w.name, district.name, province.description)
        );
        assert_eq!(w.raw_detail, to_lower_case_and_remove_accents(&w.detail));

        let pair = locale
            .wards_by_province_and_district(&w.province_code, &w.district_code)
            .unwrap();
        assert!(pair.iter().any(|x| x == w));
    }
}

#[test]
fn groups_partition_their_collections() {
    let locale = VietnamLocale::new().unwrap();
    let stats = locale.stats();

    let district_total: usize = locale
        .provinces()
        .iter()
        .filter_map(|p| locale.districts_by_province_code(&p.code))
        .map(|g| g.len())
        .sum();
    assert_eq!(district_total, stats.districts);

    let ward_total: usize = locale
        .districts()
        .iter()
        .filter_map(|d| locale.wards_by_district(&d.code))
        .map(|g| g.len())
        .sum();
    assert_eq!(ward_total, stats.wards);

    let by_province: usize = locale
        .provinces()
        .iter()
        .filter_map(|p| locale.wards_by_province(&p.code))
        .map(|g| g.len())
        .sum();
    assert_eq!(by_province, stats.wards);
}

#[test]
fn groups_keep_dataset_order() {
    let locale = VietnamLocale::new().unwrap();
    let order: Vec<&str> = locale
        .wards()
        .iter()
        .filter(|w| w.district_code == "770")
        .map(|w| w.code.as_str())
        .collect();
    let grouped: Vec<&str> = locale
        .wards_by_district("770")
        .unwrap()
        .iter()
        .map(|w| w.code.as_str())
        .collect();
    assert_eq!(order, grouped);
}

#[test]
fn scoped_results_are_subsets() {
    let locale = VietnamLocale::new().unwrap();
    for query in ["phuong", "phuong 3", "1", "ben", "hoa"] {
        let all: HashSet<&str> = locale
            .search_ward(query, None, None)
            .iter()
            .map(|w| w.code.as_str())
            .collect();
        for p in locale.provinces() {
            let in_province = locale.search_ward(query, None, Some(&p.code));
            for w in &in_province {
                assert!(all.contains(w.code.as_str()), "{query}: {} escaped scope", w.code);
                assert_eq!(w.province_code, p.code);
            }
        }
        for d in locale.districts() {
            let in_district = locale.search_ward(query, Some(&d.code), None);
            let in_both = locale.search_ward(query, Some(&d.code), Some(&d.province_code));
            assert_eq!(in_district, in_both);
            assert!(in_district.iter().all(|w| w.district_code == d.code));
        }
    }
}
