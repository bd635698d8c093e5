//! Construction failures on inconsistent datasets.

use vnlocale_core::{Dataset, District, LocaleError, Province, VietnamLocale, WardRaw};

fn province(code: &str) -> Province {
    Province {
        code: code.into(),
        name: format!("Tỉnh {code}"),
        description: format!("Tỉnh {code}"),
        slug_name: format!("Tinh {code}"),
    }
}

fn district(code: &str, province_code: &str) -> District {
    District {
        code: code.into(),
        province_code: province_code.into(),
        name: format!("Huyện {code}"),
        slug_name: format!("Huyen {code}"),
    }
}

fn ward(code: &str, district_code: &str, province_code: &str) -> WardRaw {
    WardRaw {
        code: code.into(),
        district_code: district_code.into(),
        province_code: province_code.into(),
        name: format!("Xã {code}"),
        slug_name: format!("Xa {code}"),
    }
}

#[test]
fn empty_dataset_builds_and_searches_to_nothing() {
    use vnlocale_core::LocaleSearch;

    let locale = VietnamLocale::from_dataset(Dataset::default()).unwrap();
    assert_eq!(locale.stats().wards, 0);
    assert!(locale.search_province("a").is_empty());
    assert!(locale.search_ward("a", None, None).is_empty());
}

#[test]
fn ward_with_unknown_district_fails() {
    let dataset = Dataset::new(
        vec![province("01")],
        vec![district("001", "01")],
        vec![ward("1", "002", "01")],
    );
    let err = VietnamLocale::from_dataset(dataset).unwrap_err();
    assert!(err.is_referential());
    assert!(err.to_string().contains("district_code `002`"));
}

#[test]
fn ward_with_unknown_province_fails() {
    let dataset = Dataset::new(
        vec![province("01")],
        vec![district("001", "01")],
        vec![ward("1", "001", "02")],
    );
    assert!(VietnamLocale::from_dataset(dataset)
        .unwrap_err()
        .is_referential());
}

#[test]
fn ward_province_must_match_its_district() {
    let dataset = Dataset::new(
        vec![province("01"), province("02")],
        vec![district("001", "01")],
        vec![ward("1", "001", "02")],
    );
    let err = VietnamLocale::from_dataset(dataset).unwrap_err();
    assert!(err.to_string().contains("disagrees"));
}

#[test]
fn district_with_unknown_province_fails() {
    let dataset = Dataset::new(vec![province("01")], vec![district("001", "09")], vec![]);
    assert!(VietnamLocale::from_dataset(dataset)
        .unwrap_err()
        .is_referential());
}

#[test]
fn duplicate_codes_fail() {
    let dataset = Dataset::new(vec![province("01"), province("01")], vec![], vec![]);
    let err = VietnamLocale::from_dataset(dataset).unwrap_err();
    assert!(matches!(err, LocaleError::DuplicateCode { .. }));
    assert_eq!(err.to_string(), "duplicate province code `01`");
}

#[test]
fn province_without_districts_is_valid() {
    let dataset = Dataset::new(vec![province("01"), province("02")], vec![district("001", "01")], vec![]);
    let locale = VietnamLocale::from_dataset(dataset).unwrap();
    assert!(locale.districts_by_province_code("02").is_none());
    assert!(locale.wards_by_province("01").is_none());
}
