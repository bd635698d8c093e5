// crates/vnlocale-core/src/config.rs

//! Search configuration: which record fields each category ranks on, the
//! minimum ranking a match needs, and an optional result cap.
//!
//! The defaults reproduce the reference behaviour: provinces are matched on
//! their description and slug, districts and wards on their slug only, all
//! with the `Contains` threshold.

use crate::error::{LocaleError, Result};
use crate::ranking::Ranking;
use crate::search::Category;
use serde::{Deserialize, Serialize};

/// A record field the ranker can read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchField {
    Name,
    Description,
    SlugName,
    Detail,
    RawDetail,
}

/// Fields and threshold for one search category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldConfig {
    /// Ranked in order; an earlier field wins ties between equal rankings.
    pub fields: Vec<SearchField>,
    #[serde(default = "default_threshold")]
    pub threshold: Ranking,
}

fn default_threshold() -> Ranking {
    Ranking::Contains
}

impl FieldConfig {
    pub fn new(fields: impl Into<Vec<SearchField>>) -> Self {
        Self {
            fields: fields.into(),
            threshold: default_threshold(),
        }
    }
}

/// Per-category search configuration held by a [`crate::VietnamLocale`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub province: FieldConfig,
    pub district: FieldConfig,
    pub ward: FieldConfig,
    /// Truncate every result list to this many hits. `None` keeps them all.
    pub limit: Option<usize>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            province: FieldConfig::new([SearchField::Description, SearchField::SlugName]),
            district: FieldConfig::new([SearchField::SlugName]),
            ward: FieldConfig::new([SearchField::SlugName]),
            limit: None,
        }
    }
}

impl SearchConfig {
    pub fn builder() -> SearchConfigBuilder {
        SearchConfigBuilder::new()
    }

    pub fn for_category(&self, category: Category) -> &FieldConfig {
        match category {
            Category::Province => &self.province,
            Category::District => &self.district,
            Category::Ward => &self.ward,
        }
    }

    /// Rejects configurations that could never produce a match.
    pub fn validate(&self) -> Result<()> {
        for category in Category::ALL {
            let cfg = self.for_category(category);
            if cfg.fields.is_empty() {
                return Err(LocaleError::InvalidArgument(format!(
                    "no search fields configured for {category}"
                )));
            }
            if cfg.threshold == Ranking::NoMatch {
                return Err(LocaleError::InvalidArgument(format!(
                    "threshold for {category} would accept every record"
                )));
            }
        }
        if self.limit == Some(0) {
            return Err(LocaleError::InvalidArgument(
                "limit must be at least 1".to_owned(),
            ));
        }
        Ok(())
    }

    /// Parses and validates a JSON config. Missing sections keep their defaults.
    #[cfg(feature = "json")]
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: SearchConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    #[cfg(feature = "json")]
    pub fn load_from_path(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| {
            LocaleError::NotFound(format!("Config not found at {}: {}", path.display(), e))
        })?;
        Self::from_json_str(&json)
    }
}

/// Builder for [`SearchConfig`] with the reference defaults.
#[derive(Debug, Clone, Default)]
pub struct SearchConfigBuilder {
    config: SearchConfig,
}

impl SearchConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: SearchConfig::default(),
        }
    }

    pub fn province_fields(mut self, fields: impl Into<Vec<SearchField>>) -> Self {
        self.config.province.fields = fields.into();
        self
    }

    pub fn district_fields(mut self, fields: impl Into<Vec<SearchField>>) -> Self {
        self.config.district.fields = fields.into();
        self
    }

    pub fn ward_fields(mut self, fields: impl Into<Vec<SearchField>>) -> Self {
        self.config.ward.fields = fields.into();
        self
    }

    /// Apply the same threshold to all three categories.
    pub fn threshold(mut self, ranking: Ranking) -> Self {
        self.config.province.threshold = ranking;
        self.config.district.threshold = ranking;
        self.config.ward.threshold = ranking;
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.config.limit = Some(limit);
        self
    }

    /// Also match wards on their folded "ward, district, province" string.
    pub fn search_ward_detail(mut self, enabled: bool) -> Self {
        let fields = &mut self.config.ward.fields;
        fields.retain(|f| *f != SearchField::RawDetail);
        if enabled {
            fields.push(SearchField::RawDetail);
        }
        self
    }

    pub fn build(self) -> Result<SearchConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}
