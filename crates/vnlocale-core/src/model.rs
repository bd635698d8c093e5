// crates/vnlocale-core/src/model.rs
use crate::config::{SearchConfig, SearchField};
use crate::enrich::enrich_wards;
use crate::error::Result;
use crate::index::{Group, IndexBuilder, LocaleIndex};
use crate::raw::Dataset;
use crate::traits::{NameMatch, Searchable};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A first-level administrative unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Province {
    pub code: String,
    /// Short display name, e.g. `"Hồ Chí Minh"`.
    pub name: String,
    /// Full display name, e.g. `"Thành phố Hồ Chí Minh"`.
    pub description: String,
    /// Accent-free name, e.g. `"Ho Chi Minh"`.
    pub slug_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct District {
    pub code: String,
    pub province_code: String,
    pub name: String,
    pub slug_name: String,
}

/// A ward enriched with its full address line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ward {
    pub code: String,
    pub district_code: String,
    pub province_code: String,
    pub name: String,
    pub slug_name: String,
    /// `"{ward}, {district}, {province description}"`.
    pub detail: String,
    /// `detail`, lowercased and accent-folded.
    pub raw_detail: String,
}

impl Province {
    pub fn code(&self) -> &str {
        &self.code
    }
    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn description(&self) -> &str {
        &self.description
    }
    pub fn slug_name(&self) -> &str {
        &self.slug_name
    }
}

impl District {
    pub fn code(&self) -> &str {
        &self.code
    }
    pub fn province_code(&self) -> &str {
        &self.province_code
    }
    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn slug_name(&self) -> &str {
        &self.slug_name
    }
}

impl Ward {
    pub fn code(&self) -> &str {
        &self.code
    }
    pub fn district_code(&self) -> &str {
        &self.district_code
    }
    pub fn province_code(&self) -> &str {
        &self.province_code
    }
    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn slug_name(&self) -> &str {
        &self.slug_name
    }
    pub fn detail(&self) -> &str {
        &self.detail
    }
    pub fn raw_detail(&self) -> &str {
        &self.raw_detail
    }
}

impl NameMatch for Province {
    fn name_str(&self) -> &str {
        &self.name
    }
}

impl NameMatch for District {
    fn name_str(&self) -> &str {
        &self.name
    }
}

impl NameMatch for Ward {
    fn name_str(&self) -> &str {
        &self.name
    }
}

impl Searchable for Province {
    fn field(&self, field: SearchField) -> Option<&str> {
        match field {
            SearchField::Name => Some(&self.name),
            SearchField::Description => Some(&self.description),
            SearchField::SlugName => Some(&self.slug_name),
            SearchField::Detail | SearchField::RawDetail => None,
        }
    }
}

impl Searchable for District {
    fn field(&self, field: SearchField) -> Option<&str> {
        match field {
            SearchField::Name => Some(&self.name),
            SearchField::SlugName => Some(&self.slug_name),
            SearchField::Description | SearchField::Detail | SearchField::RawDetail => None,
        }
    }
}

impl Searchable for Ward {
    fn field(&self, field: SearchField) -> Option<&str> {
        match field {
            SearchField::Name => Some(&self.name),
            SearchField::SlugName => Some(&self.slug_name),
            SearchField::Detail => Some(&self.detail),
            SearchField::RawDetail => Some(&self.raw_detail),
            SearchField::Description => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DbStats {
    pub provinces: usize,
    pub districts: usize,
    pub wards: usize,
}

/// The locale facade: owns the records, their lookup index and the search
/// configuration. Immutable once built, so it can be shared freely between
/// threads.
#[derive(Debug, Clone)]
pub struct VietnamLocale {
    provinces: Vec<Province>,
    districts: Vec<District>,
    wards: Vec<Ward>,
    index: LocaleIndex,
    config: SearchConfig,
}

impl VietnamLocale {
    /// Builds the locale from the dataset compiled into the crate.
    #[cfg(feature = "bundled")]
    pub fn new() -> Result<Self> {
        Self::from_dataset(Dataset::bundled()?.clone())
    }

    pub fn from_dataset(dataset: Dataset) -> Result<Self> {
        Self::with_config(dataset, SearchConfig::default())
    }

    /// Validates `dataset`, enriches its wards and builds every index.
    ///
    /// Fails on duplicate province or district codes, on any foreign key
    /// that does not resolve, and on an invalid `config`.
    pub fn with_config(dataset: Dataset, config: SearchConfig) -> Result<Self> {
        config.validate()?;
        let Dataset {
            provinces,
            districts,
            wards,
        } = dataset;

        let builder = IndexBuilder::new(&provinces, &districts)?;
        let wards = enrich_wards(wards, builder.district_map(), builder.province_map())?;
        let index = builder.build(&wards);

        debug!(
            provinces = provinces.len(),
            districts = districts.len(),
            wards = wards.len(),
            "locale index built"
        );

        Ok(Self {
            provinces,
            districts,
            wards,
            index,
            config,
        })
    }

    /// Same records and index, different search configuration.
    pub fn reconfigure(mut self, config: SearchConfig) -> Result<Self> {
        config.validate()?;
        self.config = config;
        Ok(self)
    }

    pub fn provinces(&self) -> &[Province] {
        &self.provinces
    }

    pub fn districts(&self) -> &[District] {
        &self.districts
    }

    /// Enriched wards, in dataset order.
    pub fn wards(&self) -> &[Ward] {
        &self.wards
    }

    pub fn index(&self) -> &LocaleIndex {
        &self.index
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn stats(&self) -> DbStats {
        DbStats {
            provinces: self.provinces.len(),
            districts: self.districts.len(),
            wards: self.wards.len(),
        }
    }

    pub fn province(&self, code: &str) -> Option<&Province> {
        self.index
            .province_position(code)
            .map(|pos| &self.provinces[pos])
    }

    pub fn district(&self, code: &str) -> Option<&District> {
        self.index
            .district_position(code)
            .map(|pos| &self.districts[pos])
    }

    /// Districts of a province, in dataset order.
    pub fn districts_by_province_code(&self, province_code: &str) -> Option<Group<'_, District>> {
        self.index
            .districts_in_province(province_code)
            .map(|positions| Group::at(&self.districts, positions))
    }

    pub fn wards_by_district(&self, district_code: &str) -> Option<Group<'_, Ward>> {
        self.index
            .wards_in_district(district_code)
            .map(|positions| Group::at(&self.wards, positions))
    }

    pub fn wards_by_province(&self, province_code: &str) -> Option<Group<'_, Ward>> {
        self.index
            .wards_in_province(province_code)
            .map(|positions| Group::at(&self.wards, positions))
    }

    /// Wards carrying both codes. `None` when no ward has that pair.
    pub fn wards_by_province_and_district(
        &self,
        province_code: &str,
        district_code: &str,
    ) -> Option<Group<'_, Ward>> {
        self.index
            .wards_in_province_and_district(province_code, district_code)
            .map(|positions| Group::at(&self.wards, positions))
    }
}
