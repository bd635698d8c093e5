// crates/vnlocale-core/src/search.rs

//! Scoped fuzzy search over provinces, districts and wards.
//!
//! A search first picks a candidate pool through the index (all records of
//! the category, or the bucket named by the drill-down codes), then ranks the
//! pool with [`crate::ranking`] on the fields configured for the category.
//! Field values are accent-folded before ranking so that an accent-free
//! query can match `name` and `description` as well as the slugs.

use crate::config::SearchField;
use crate::error::LocaleError;
use crate::index::Group;
use crate::model::{District, Province, VietnamLocale, Ward};
use crate::ranking::{match_sorter, KeyExtractor, MatchOptions};
use crate::text::{fold, fold_key, Case};
use crate::traits::{LocaleSearch, Searchable};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;
use tracing::{debug, instrument, trace};

/// What kind of record a search returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Province,
    District,
    Ward,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Province, Category::District, Category::Ward];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Province => "province",
            Category::District => "district",
            Category::Ward => "ward",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = LocaleError;

    /// Case-insensitive, surrounding whitespace ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Category::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| LocaleError::InvalidArgument(format!("unknown search category `{s}`")))
    }
}

/// Optional scoping codes. Blank codes count as absent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DrillDown<'a> {
    pub province_code: Option<&'a str>,
    pub district_code: Option<&'a str>,
}

impl<'a> DrillDown<'a> {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn province(code: &'a str) -> Self {
        Self {
            province_code: Some(code),
            district_code: None,
        }
    }

    pub fn district(code: &'a str) -> Self {
        Self {
            province_code: None,
            district_code: Some(code),
        }
    }

    pub fn with_province(mut self, code: &'a str) -> Self {
        self.province_code = Some(code);
        self
    }

    pub fn with_district(mut self, code: &'a str) -> Self {
        self.district_code = Some(code);
        self
    }

    fn normalized(self) -> Self {
        Self {
            province_code: present(self.province_code),
            district_code: present(self.district_code),
        }
    }
}

fn present(code: Option<&str>) -> Option<&str> {
    code.filter(|c| !c.trim().is_empty())
}

/// A category together with the scoping codes that apply to it.
///
/// Codes that do not apply to a category are dropped when the scope is
/// built from a [`DrillDown`]: provinces ignore both codes, districts ignore
/// the district code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchScope<'a> {
    Province,
    District {
        province_code: Option<&'a str>,
    },
    Ward {
        province_code: Option<&'a str>,
        district_code: Option<&'a str>,
    },
}

impl<'a> SearchScope<'a> {
    pub fn new(category: Category, drill_down: DrillDown<'a>) -> Self {
        let DrillDown {
            province_code,
            district_code,
        } = drill_down.normalized();
        match category {
            Category::Province => SearchScope::Province,
            Category::District => SearchScope::District { province_code },
            Category::Ward => SearchScope::Ward {
                province_code,
                district_code,
            },
        }
    }

    pub fn category(&self) -> Category {
        match self {
            SearchScope::Province => Category::Province,
            SearchScope::District { .. } => Category::District,
            SearchScope::Ward { .. } => Category::Ward,
        }
    }
}

/// One search result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "category", rename_all = "lowercase")]
pub enum SearchHit<'a> {
    Province(&'a Province),
    District(&'a District),
    Ward(&'a Ward),
}

impl<'a> SearchHit<'a> {
    pub fn category(&self) -> Category {
        match self {
            SearchHit::Province(_) => Category::Province,
            SearchHit::District(_) => Category::District,
            SearchHit::Ward(_) => Category::Ward,
        }
    }

    pub fn code(&self) -> &'a str {
        match *self {
            SearchHit::Province(p) => &p.code,
            SearchHit::District(d) => &d.code,
            SearchHit::Ward(w) => &w.code,
        }
    }

    pub fn name(&self) -> &'a str {
        match *self {
            SearchHit::Province(p) => &p.name,
            SearchHit::District(d) => &d.name,
            SearchHit::Ward(w) => &w.name,
        }
    }

    /// The line a listing would show: the description for provinces, the
    /// full address for wards.
    pub fn label(&self) -> &'a str {
        match *self {
            SearchHit::Province(p) => &p.description,
            SearchHit::District(d) => &d.name,
            SearchHit::Ward(w) => &w.detail,
        }
    }

    pub fn as_province(&self) -> Option<&'a Province> {
        match *self {
            SearchHit::Province(p) => Some(p),
            _ => None,
        }
    }

    pub fn as_district(&self) -> Option<&'a District> {
        match *self {
            SearchHit::District(d) => Some(d),
            _ => None,
        }
    }

    pub fn as_ward(&self) -> Option<&'a Ward> {
        match *self {
            SearchHit::Ward(w) => Some(w),
            _ => None,
        }
    }
}

/// Reads a field and folds it with the case kept.
struct FoldedField(SearchField);

impl<T: Searchable> KeyExtractor<T> for FoldedField {
    fn extract<'t>(&self, item: &'t T) -> Option<Cow<'t, str>> {
        item.field(self.0).map(|value| fold(value, Case::Preserve))
    }
}

impl VietnamLocale {
    fn rank<'a, T: Searchable>(
        &self,
        category: Category,
        pool: Group<'a, T>,
        query: &str,
    ) -> Vec<&'a T> {
        let field_config = self.config().for_category(category);
        let keys: Vec<FoldedField> = field_config.fields.iter().copied().map(FoldedField).collect();
        let options = MatchOptions {
            threshold: field_config.threshold,
            keep_diacritics: false,
        };
        let mut hits = match_sorter(pool, query, &keys, &options);
        if let Some(limit) = self.config().limit {
            hits.truncate(limit);
        }
        trace!(%category, pool = pool.len(), hits = hits.len(), "ranked");
        hits
    }

    fn district_pool(&self, province_code: Option<&str>) -> Option<Group<'_, District>> {
        match province_code {
            Some(p) => self.districts_by_province_code(p),
            None => Some(Group::all(self.districts())),
        }
    }

    fn ward_pool(
        &self,
        province_code: Option<&str>,
        district_code: Option<&str>,
    ) -> Option<Group<'_, Ward>> {
        match (province_code, district_code) {
            (Some(p), Some(d)) => self.wards_by_province_and_district(p, d),
            (Some(p), None) => self.wards_by_province(p),
            (None, Some(d)) => self.wards_by_district(d),
            (None, None) => Some(Group::all(self.wards())),
        }
    }

    fn search_districts(&self, query: &str, province_code: Option<&str>) -> Vec<&District> {
        if query.trim().is_empty() {
            return Vec::new();
        }
        match self.district_pool(present(province_code)) {
            Some(pool) => self.rank(Category::District, pool, query),
            None => {
                debug!(?province_code, "no districts under scope");
                Vec::new()
            }
        }
    }

    fn search_wards(
        &self,
        query: &str,
        province_code: Option<&str>,
        district_code: Option<&str>,
    ) -> Vec<&Ward> {
        if query.trim().is_empty() {
            return Vec::new();
        }
        match self.ward_pool(present(province_code), present(district_code)) {
            Some(pool) => self.rank(Category::Ward, pool, query),
            None => {
                debug!(?province_code, ?district_code, "no wards under scope");
                Vec::new()
            }
        }
    }

    fn search_provinces(&self, query: &str) -> Vec<&Province> {
        if query.trim().is_empty() {
            return Vec::new();
        }
        self.rank(Category::Province, Group::all(self.provinces()), query)
    }
}

impl LocaleSearch for VietnamLocale {
    #[instrument(level = "trace", skip(self))]
    fn search(&self, scope: SearchScope<'_>, query: &str) -> Vec<SearchHit<'_>> {
        match scope {
            SearchScope::Province => self
                .search_provinces(query)
                .into_iter()
                .map(SearchHit::Province)
                .collect(),
            SearchScope::District { province_code } => self
                .search_districts(query, province_code)
                .into_iter()
                .map(SearchHit::District)
                .collect(),
            SearchScope::Ward {
                province_code,
                district_code,
            } => self
                .search_wards(query, province_code, district_code)
                .into_iter()
                .map(SearchHit::Ward)
                .collect(),
        }
    }

    #[instrument(level = "trace", skip(self))]
    fn search_province(&self, query: &str) -> Vec<&Province> {
        self.search_provinces(&fold_key(query))
    }

    #[instrument(level = "trace", skip(self))]
    fn search_district(&self, query: &str, province_code: Option<&str>) -> Vec<&District> {
        self.search_districts(&fold_key(query), province_code)
    }

    #[instrument(level = "trace", skip(self))]
    fn search_ward(
        &self,
        query: &str,
        district_code: Option<&str>,
        province_code: Option<&str>,
    ) -> Vec<&Ward> {
        self.search_wards(&fold_key(query), province_code, district_code)
    }
}
