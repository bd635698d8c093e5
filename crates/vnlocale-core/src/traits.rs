// crates/vnlocale-core/src/traits.rs
use crate::config::SearchField;
use crate::error::Result;
use crate::model::{District, Province, Ward};
use crate::search::{DrillDown, SearchHit, SearchScope};
use crate::text::{equals_folded, fold, fold_key, Case};

/// Field access for the ranker.
///
/// Returns `None` for fields a record type does not carry (a province has
/// no `detail`), which the ranker treats as "no value for this key".
pub trait Searchable {
    fn field(&self, field: SearchField) -> Option<&str>;
}

/// Name-based matching helpers for records with a display name.
///
/// Comparisons go through the lowercase accent fold, so `"ha noi"` names
/// the province `"Hà Nội"`.
///
/// # Examples
/// ```rust
/// use vnlocale_core::traits::NameMatch;
///
/// struct Place(&'static str);
/// impl NameMatch for Place {
///     fn name_str(&self) -> &str { self.0 }
/// }
///
/// assert!(Place("Đà Nẵng").is_named("da nang"));
/// assert!(Place("Phường Bến Nghé").name_contains("BEN NGHE"));
/// ```
pub trait NameMatch {
    fn name_str(&self) -> &str;

    #[inline]
    fn is_named(&self, q: &str) -> bool {
        equals_folded(self.name_str(), q)
    }

    #[inline]
    fn name_contains(&self, q: &str) -> bool {
        fold(self.name_str(), Case::Lower).contains(fold_key(q).as_str())
    }
}

/// The search operations offered by the locale facade.
pub trait LocaleSearch {
    /// Runs a scoped search. `query` must already be folded with
    /// [`crate::to_lower_case_and_remove_accents`].
    fn search(&self, scope: SearchScope<'_>, query: &str) -> Vec<SearchHit<'_>>;

    /// Like [`LocaleSearch::search`] with the category given by name
    /// (`"province"`, `"district"`, `"ward"`) and a raw query.
    ///
    /// Fails with [`crate::LocaleError::InvalidArgument`] for any other name.
    fn search_by_name(
        &self,
        category: &str,
        query: &str,
        drill_down: DrillDown<'_>,
    ) -> Result<Vec<SearchHit<'_>>> {
        let category = category.parse()?;
        Ok(self.search(SearchScope::new(category, drill_down), &fold_key(query)))
    }

    fn search_province(&self, query: &str) -> Vec<&Province>;

    fn search_district(&self, query: &str, province_code: Option<&str>) -> Vec<&District>;

    fn search_ward(
        &self,
        query: &str,
        district_code: Option<&str>,
        province_code: Option<&str>,
    ) -> Vec<&Ward>;
}
