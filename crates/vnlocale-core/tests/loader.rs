//! Loading datasets from directories and snapshots.
#![cfg(feature = "json")]

use std::fs;
use std::path::Path;
use tempfile::TempDir;
use vnlocale_core::prelude::*;
use vnlocale_core::WardRaw;

const PROVINCES: &str = r#"[
  {"code":"48","name":"Đà Nẵng","description":"Thành phố Đà Nẵng","slug_name":"Da Nang"}
]"#;
const DISTRICTS: &str = r#"[
  {"code":"492","province_code":"48","name":"Quận Hải Châu","slug_name":"Quan Hai Chau"}
]"#;
const WARDS: &str = r#"[
  {"code":"20227","district_code":"492","province_code":"48","name":"Phường Thạch Thang","slug_name":"Phuong Thach Thang"},
  {"code":"20230","district_code":"492","province_code":"48","name":"Phường Hải Châu I","slug_name":"Phuong Hai Chau I"}
]"#;

fn write_dir(dir: &Path) {
    fs::write(dir.join("province.json"), PROVINCES).unwrap();
    fs::write(dir.join("district.json"), DISTRICTS).unwrap();
    fs::write(dir.join("ward.json"), WARDS).unwrap();
}

#[test]
fn loads_plain_json_directory() {
    let tmp = TempDir::new().unwrap();
    write_dir(tmp.path());

    let locale = VietnamLocale::load_from_dir(tmp.path()).unwrap();
    assert_eq!(locale.stats().wards, 2);
    let hits = locale.search_ward("thach", None, Some("48"));
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].detail, "Phường Thạch Thang, Quận Hải Châu, Thành phố Đà Nẵng");
}

#[test]
fn missing_file_is_not_found() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("province.json"), PROVINCES).unwrap();
    let err = Dataset::load_from_dir(tmp.path()).unwrap_err();
    assert!(matches!(err, LocaleError::NotFound(_)), "{err}");
}

#[test]
fn malformed_json_is_reported() {
    let tmp = TempDir::new().unwrap();
    write_dir(tmp.path());
    fs::write(tmp.path().join("ward.json"), "[{\"code\":1}]").unwrap();
    let err = Dataset::load_from_dir(tmp.path()).unwrap_err();
    assert!(matches!(err, LocaleError::Json(_)));
}

#[cfg(feature = "compact")]
#[test]
fn loads_gzipped_files() {
    use flate2::write::GzEncoder;
    use flate2::Compression;
    use std::io::Write;

    let tmp = TempDir::new().unwrap();
    write_dir(tmp.path());
    fs::remove_file(tmp.path().join("ward.json")).unwrap();

    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(WARDS.as_bytes()).unwrap();
    fs::write(tmp.path().join("ward.json.gz"), encoder.finish().unwrap()).unwrap();

    let dataset = Dataset::load_from_dir(tmp.path()).unwrap();
    assert_eq!(dataset.wards.len(), 2);
}

#[test]
fn snapshot_file_round_trip() {
    let tmp = TempDir::new().unwrap();
    write_dir(tmp.path());
    let dataset = Dataset::load_from_dir(tmp.path()).unwrap();

    let snapshot = tmp.path().join("vn.bin");
    dataset.save_snapshot(&snapshot).unwrap();
    let restored = Dataset::load_snapshot(&snapshot).unwrap();
    assert_eq!(restored, dataset);
    assert_eq!(restored.wards[1], WardRaw {
        code: "20230".into(),
        district_code: "492".into(),
        province_code: "48".into(),
        name: "Phường Hải Châu I".into(),
        slug_name: "Phuong Hai Chau I".into(),
    });
}

#[test]
fn search_config_from_json_file() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("search.json");
    fs::write(
        &path,
        r#"{"ward":{"fields":["slug_name","raw_detail"]},"limit":5}"#,
    )
    .unwrap();

    let config = SearchConfig::load_from_path(&path).unwrap();
    assert_eq!(config.limit, Some(5));
    assert_eq!(config.ward.fields, vec![SearchField::SlugName, SearchField::RawDetail]);
    assert_eq!(config.province, SearchConfig::default().province);
}
