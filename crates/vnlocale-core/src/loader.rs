// crates/vnlocale-core/src/loader.rs

//! Reading datasets from disk, from the crate's bundled copy, and from
//! binary snapshots.
//!
//! A dataset directory holds `province.json`, `district.json` and
//! `ward.json`, each a JSON array of records. With the `compact` feature
//! any of them may instead be stored gzip-compressed with a `.gz` suffix.

use crate::error::Result;
use crate::model::VietnamLocale;
use crate::raw::Dataset;
use bincode::Options;
use std::path::Path;
use tracing::info;

#[cfg(feature = "json")]
use crate::error::LocaleError;
#[cfg(feature = "json")]
use serde::de::DeserializeOwned;
#[cfg(feature = "json")]
use std::fs::File;
#[cfg(feature = "json")]
use std::io::{BufReader, Read};
#[cfg(feature = "json")]
use std::path::PathBuf;

#[cfg(feature = "bundled")]
use once_cell::sync::OnceCell;

pub const PROVINCE_FILE: &str = "province.json";
pub const DISTRICT_FILE: &str = "district.json";
pub const WARD_FILE: &str = "ward.json";

/// Upper bound for decoding a snapshot.
pub const SNAPSHOT_LIMIT: u64 = 256 * 1024 * 1024;

fn snapshot_options() -> impl Options {
    bincode::DefaultOptions::new()
        .with_limit(SNAPSHOT_LIMIT)
        .allow_trailing_bytes()
}

#[cfg(feature = "bundled")]
static BUNDLED: OnceCell<Dataset> = OnceCell::new();

impl Dataset {
    /// Loads `province.json`, `district.json` and `ward.json` from `dir`.
    #[cfg(feature = "json")]
    pub fn load_from_dir(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();
        let dataset = Self::new(
            read_records(dir, PROVINCE_FILE)?,
            read_records(dir, DISTRICT_FILE)?,
            read_records(dir, WARD_FILE)?,
        );
        info!(
            dir = %dir.display(),
            provinces = dataset.provinces.len(),
            districts = dataset.districts.len(),
            wards = dataset.wards.len(),
            "dataset loaded"
        );
        Ok(dataset)
    }

    /// Parses the three JSON arrays directly.
    #[cfg(feature = "json")]
    pub fn from_json_strs(provinces: &str, districts: &str, wards: &str) -> Result<Self> {
        Ok(Self::new(
            serde_json::from_str(provinces)?,
            serde_json::from_str(districts)?,
            serde_json::from_str(wards)?,
        ))
    }

    /// The dataset compiled into the crate, parsed once per process.
    #[cfg(feature = "bundled")]
    pub fn bundled() -> Result<&'static Dataset> {
        BUNDLED.get_or_try_init(|| {
            let dataset = Self::from_json_strs(
                include_str!("../data/province.json"),
                include_str!("../data/district.json"),
                include_str!("../data/ward.json"),
            )?;
            info!(
                provinces = dataset.provinces.len(),
                districts = dataset.districts.len(),
                wards = dataset.wards.len(),
                "bundled dataset parsed"
            );
            Ok(dataset)
        })
    }

    /// Encodes the dataset as a bincode snapshot.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(snapshot_options().serialize(self)?)
    }

    /// Decodes a snapshot produced by [`Dataset::to_bytes`].
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        Ok(snapshot_options().deserialize(data)?)
    }

    pub fn save_snapshot(&self, path: impl AsRef<Path>) -> Result<()> {
        std::fs::write(path, self.to_bytes()?)?;
        Ok(())
    }

    pub fn load_snapshot(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let data = std::fs::read(path)?;
        let dataset = Self::from_bytes(&data)?;
        info!(path = %path.display(), bytes = data.len(), "snapshot loaded");
        Ok(dataset)
    }
}

impl VietnamLocale {
    /// Loads a dataset directory and builds the locale with the default
    /// search configuration.
    #[cfg(feature = "json")]
    pub fn load_from_dir(dir: impl AsRef<Path>) -> Result<Self> {
        Self::from_dataset(Dataset::load_from_dir(dir)?)
    }
}

#[cfg(feature = "json")]
fn read_records<T: DeserializeOwned>(dir: &Path, file: &str) -> Result<Vec<T>> {
    let reader = open_stream(&dir.join(file))?;
    Ok(serde_json::from_reader(reader)?)
}

/// Opens `path`, or its `.gz` sibling when only that exists.
#[cfg(feature = "json")]
fn open_stream(path: &Path) -> Result<Box<dyn Read>> {
    if path.is_file() {
        return Ok(Box::new(BufReader::new(File::open(path)?)));
    }

    #[cfg(feature = "compact")]
    {
        let gz = gz_sibling(path);
        if gz.is_file() {
            let file = File::open(&gz)?;
            return Ok(Box::new(flate2::read::GzDecoder::new(BufReader::new(file))));
        }
    }

    Err(LocaleError::NotFound(format!(
        "dataset file {}",
        path.display()
    )))
}

#[cfg(feature = "json")]
fn gz_sibling(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(".gz");
    PathBuf::from(name)
}
