// crates/vnlocale-core/src/ranking.rs

//! Match-sorter style ranking.
//!
//! Given a collection, a query and a list of keys, [`match_sorter`] keeps the
//! items whose best key ranks at or above a threshold and orders them best
//! match first. The tiers, from best to worst:
//!
//! | Tier                 | Meaning                                         |
//! |----------------------|-------------------------------------------------|
//! | `CaseSensitiveEqual` | candidate and query are byte-equal              |
//! | `Equal`              | equal after lowercasing                         |
//! | `StartsWith`         | candidate starts with the query                 |
//! | `WordStartsWith`     | a space-separated word starts with the query    |
//! | `Contains`           | query occurs anywhere in the candidate          |
//! | `Acronym`            | query occurs in the candidate's word initials   |
//! | `Matches(f64)`       | query chars occur in order; score in `(1, 2]`   |
//! | `NoMatch`            | nothing of the above                            |
//!
//! The search engine treats this module as a black box: it only picks keys
//! and a threshold.

use std::borrow::Cow;
use std::cmp::Ordering;

use memchr::memmem::Finder;
use serde::{Deserialize, Serialize};
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Quality of a match between a candidate string and a query.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub enum Ranking {
    CaseSensitiveEqual,
    Equal,
    StartsWith,
    WordStartsWith,
    Contains,
    Acronym,
    /// In-order character match. The score is `1 + 1 / spread`, capped at 2.
    Matches(f64),
    NoMatch,
}

impl Ranking {
    fn tier(&self) -> u8 {
        match self {
            Ranking::CaseSensitiveEqual => 7,
            Ranking::Equal => 6,
            Ranking::StartsWith => 5,
            Ranking::WordStartsWith => 4,
            Ranking::Contains => 3,
            Ranking::Acronym => 2,
            Ranking::Matches(_) => 1,
            Ranking::NoMatch => 0,
        }
    }

    /// True if this ranking is at least as good as `threshold`.
    #[inline]
    pub fn meets(&self, threshold: &Ranking) -> bool {
        *self != Ranking::NoMatch && self >= threshold
    }
}

impl PartialEq for Ranking {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Ranking::Matches(a), Ranking::Matches(b)) => a == b,
            _ => self.tier() == other.tier(),
        }
    }
}

// Fixed tiers compare by tier; two `Matches` compare by score. `Acronym`
// outranks every `Matches` score.
impl PartialOrd for Ranking {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Ranking::Matches(a), Ranking::Matches(b)) => a.partial_cmp(b),
            _ => self.tier().partial_cmp(&other.tier()),
        }
    }
}

/// Strips combining marks via NFD unless `keep_diacritics` is set.
///
/// ASCII input is always borrowed.
pub fn prepare_value_for_comparison(s: &str, keep_diacritics: bool) -> Cow<'_, str> {
    if keep_diacritics || s.is_ascii() {
        return Cow::Borrowed(s);
    }
    let stripped: String = s.nfd().filter(|c| !is_combining_mark(*c)).collect();
    if stripped == s {
        Cow::Borrowed(s)
    } else {
        Cow::Owned(stripped)
    }
}

/// First character of every word, words split on space and hyphen.
///
/// ```
/// use vnlocale_core::ranking::get_acronym;
///
/// assert_eq!(get_acronym("ba ria - vung tau"), "brvt");
/// assert_eq!(get_acronym("thanh pho ho chi minh"), "tphcm");
/// ```
pub fn get_acronym(s: &str) -> String {
    let mut acronym = String::new();
    let mut at_boundary = true;
    for c in s.chars() {
        let delimiter = c == ' ' || c == '-';
        if at_boundary && !delimiter {
            acronym.push(c);
        }
        at_boundary = delimiter;
    }
    acronym
}

/// Greedy in-order character match; closer matches score higher.
pub fn get_closeness_ranking(candidate: &str, query: &str) -> Ranking {
    let mut chars = candidate.chars().enumerate();
    let mut first: Option<usize> = None;
    let mut last = 0;
    for q in query.chars() {
        match chars.find(|&(_, c)| c == q) {
            Some((pos, _)) => {
                first.get_or_insert(pos);
                last = pos;
            }
            None => return Ranking::NoMatch,
        }
    }
    let spread = last - first.unwrap_or(0);
    if spread == 0 {
        Ranking::Matches(2.0)
    } else {
        Ranking::Matches(1.0 + 1.0 / spread as f64)
    }
}

/// A query prepared once and ranked against many candidates.
///
/// Both substring finders are built here, so ranking a collection builds
/// them once per query rather than once per item.
pub struct PreparedQuery {
    prepared: String,
    lower: String,
    char_count: usize,
    keep_diacritics: bool,
    // `None` for an empty query; memmem panics on an empty needle.
    finder: Option<Finder<'static>>,
    // The query with a leading space: a hit is an occurrence at a word start.
    word_finder: Option<Finder<'static>>,
}

impl PreparedQuery {
    pub fn new(query: &str, keep_diacritics: bool) -> Self {
        let prepared = prepare_value_for_comparison(query, keep_diacritics).into_owned();
        let lower = prepared.to_lowercase();
        let char_count = lower.chars().count();
        let (finder, word_finder) = if lower.is_empty() {
            (None, None)
        } else {
            let word = format!(" {lower}");
            (
                Some(Finder::new(lower.as_bytes()).into_owned()),
                Some(Finder::new(word.as_bytes()).into_owned()),
            )
        };
        Self {
            prepared,
            lower,
            char_count,
            keep_diacritics,
            finder,
            word_finder,
        }
    }

    /// Ranks one candidate.
    pub fn rank(&self, candidate: &str) -> Ranking {
        let candidate = prepare_value_for_comparison(candidate, self.keep_diacritics);
        if self.char_count > candidate.chars().count() {
            return Ranking::NoMatch;
        }
        if *candidate == *self.prepared {
            return Ranking::CaseSensitiveEqual;
        }

        let lower = candidate.to_lowercase();
        let (Some(finder), Some(word_finder)) = (&self.finder, &self.word_finder) else {
            return if lower.is_empty() {
                Ranking::Equal
            } else {
                Ranking::StartsWith
            };
        };

        let bytes = lower.as_bytes();
        if let Some(first) = finder.find(bytes) {
            if first == 0 {
                return if lower.len() == self.lower.len() {
                    Ranking::Equal
                } else {
                    Ranking::StartsWith
                };
            }
            // Searched separately: an earlier mid-word hit may overlap it.
            if word_finder.find(bytes).is_some() {
                return Ranking::WordStartsWith;
            }
            return Ranking::Contains;
        }

        if self.char_count == 1 {
            return Ranking::NoMatch;
        }
        if get_acronym(&lower).contains(&self.lower) {
            return Ranking::Acronym;
        }
        get_closeness_ranking(&lower, &self.lower)
    }
}

/// Ranks a single candidate against a query.
///
/// ```
/// use vnlocale_core::ranking::{get_match_ranking, Ranking};
///
/// assert_eq!(get_match_ranking("Quan 3", "Quan 3", false), Ranking::CaseSensitiveEqual);
/// assert_eq!(get_match_ranking("Quan 3", "quan 3", false), Ranking::Equal);
/// assert_eq!(get_match_ranking("Quan 10", "quan 1", false), Ranking::StartsWith);
/// assert_eq!(get_match_ranking("Thanh pho Thu Duc", "thu", false), Ranking::WordStartsWith);
/// assert_eq!(get_match_ranking("Phuong 13", "3", false), Ranking::Contains);
/// assert_eq!(get_match_ranking("Quan 3", "hanoi", false), Ranking::NoMatch);
/// ```
pub fn get_match_ranking(candidate: &str, query: &str, keep_diacritics: bool) -> Ranking {
    PreparedQuery::new(query, keep_diacritics).rank(candidate)
}

/// Reads a matchable string out of an item.
pub trait KeyExtractor<T: ?Sized> {
    fn extract<'t>(&self, item: &'t T) -> Option<Cow<'t, str>>;
}

/// Key for collections of plain strings: the item itself.
#[derive(Debug, Clone, Copy, Default)]
pub struct AsIs;

impl<T: AsRef<str> + ?Sized> KeyExtractor<T> for AsIs {
    fn extract<'t>(&self, item: &'t T) -> Option<Cow<'t, str>> {
        Some(Cow::Borrowed(item.as_ref()))
    }
}

/// Options for [`match_sorter`].
#[derive(Debug, Clone, PartialEq)]
pub struct MatchOptions {
    /// Items whose best key ranks below this are dropped.
    pub threshold: Ranking,
    /// When false (default) combining marks are stripped before comparing.
    pub keep_diacritics: bool,
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self {
            threshold: Ranking::Matches(1.0),
            keep_diacritics: false,
        }
    }
}

/// One surviving item together with how it matched.
#[derive(Debug, Clone)]
pub struct RankedItem<'a, T: ?Sized> {
    pub item: &'a T,
    /// Position in the input collection.
    pub index: usize,
    pub rank: Ranking,
    /// The key value that produced `rank`.
    pub ranked_value: Cow<'a, str>,
    pub key_index: usize,
}

/// Best ranking of `item` over `keys`; the earliest key wins ties.
pub fn get_highest_ranking<'a, T: ?Sized, K: KeyExtractor<T>>(
    item: &'a T,
    index: usize,
    keys: &[K],
    query: &PreparedQuery,
) -> RankedItem<'a, T> {
    let mut best = RankedItem {
        item,
        index,
        rank: Ranking::NoMatch,
        ranked_value: Cow::Borrowed(""),
        key_index: 0,
    };
    for (key_index, key) in keys.iter().enumerate() {
        let Some(value) = key.extract(item) else {
            continue;
        };
        let rank = query.rank(&value);
        if rank > best.rank {
            best.rank = rank;
            best.ranked_value = value;
            best.key_index = key_index;
        }
    }
    best
}

/// Rank descending, then key index ascending, then ranked value ascending.
pub fn sort_ranked_values<T: ?Sized>(a: &RankedItem<'_, T>, b: &RankedItem<'_, T>) -> Ordering {
    b.rank
        .partial_cmp(&a.rank)
        .unwrap_or(Ordering::Equal)
        .then_with(|| a.key_index.cmp(&b.key_index))
        .then_with(|| compare_values(&a.ranked_value, &b.ranked_value))
}

/// Letters compare case-insensitively; byte order only splits values that
/// differ in case alone.
fn compare_values(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
        .then_with(|| a.cmp(b))
}

/// Filters and orders `items` by how well they match `query`.
///
/// Ties that survive all three sort levels keep their input order.
///
/// ```
/// use vnlocale_core::ranking::{match_sorter, AsIs, MatchOptions};
///
/// let items = ["Quan 3", "Quan 10", "Huyen Cu Chi", "Quan 1"];
/// let hits = match_sorter(items.iter().copied(), "quan 1", &[AsIs], &MatchOptions::default());
/// assert_eq!(hits, vec!["Quan 1", "Quan 10"]);
/// ```
pub fn match_sorter<'a, T, K, I>(items: I, query: &str, keys: &[K], options: &MatchOptions) -> Vec<&'a T>
where
    T: ?Sized + 'a,
    K: KeyExtractor<T>,
    I: IntoIterator<Item = &'a T>,
{
    rank_items(items, query, keys, options)
        .into_iter()
        .map(|ranked| ranked.item)
        .collect()
}

/// Like [`match_sorter`] but keeps the ranking details of every hit.
pub fn rank_items<'a, T, K, I>(
    items: I,
    query: &str,
    keys: &[K],
    options: &MatchOptions,
) -> Vec<RankedItem<'a, T>>
where
    T: ?Sized + 'a,
    K: KeyExtractor<T>,
    I: IntoIterator<Item = &'a T>,
{
    let pq = PreparedQuery::new(query, options.keep_diacritics);
    let mut ranked: Vec<RankedItem<'a, T>> = items
        .into_iter()
        .enumerate()
        .map(|(index, item)| get_highest_ranking(item, index, keys, &pq))
        .filter(|r| r.rank.meets(&options.threshold))
        .collect();
    // Stable: equal items stay in input order.
    ranked.sort_by(sort_ranked_values);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Place {
        name: &'static str,
        slug: &'static str,
    }

    #[derive(Clone, Copy)]
    enum PlaceKey {
        Name,
        Slug,
    }

    impl KeyExtractor<Place> for PlaceKey {
        fn extract<'t>(&self, item: &'t Place) -> Option<Cow<'t, str>> {
            Some(Cow::Borrowed(match self {
                PlaceKey::Name => item.name,
                PlaceKey::Slug => item.slug,
            }))
        }
    }

    fn contains() -> MatchOptions {
        MatchOptions {
            threshold: Ranking::Contains,
            ..MatchOptions::default()
        }
    }

    #[test]
    fn tier_ordering_descends() {
        assert!(Ranking::CaseSensitiveEqual > Ranking::Equal);
        assert!(Ranking::Equal > Ranking::StartsWith);
        assert!(Ranking::StartsWith > Ranking::WordStartsWith);
        assert!(Ranking::WordStartsWith > Ranking::Contains);
        assert!(Ranking::Contains > Ranking::Acronym);
        assert!(Ranking::Acronym > Ranking::Matches(2.0));
        assert!(Ranking::Matches(1.9) > Ranking::Matches(1.1));
        assert!(Ranking::Matches(1.01) > Ranking::NoMatch);
    }

    #[test]
    fn meets_respects_threshold() {
        assert!(Ranking::StartsWith.meets(&Ranking::Contains));
        assert!(Ranking::Contains.meets(&Ranking::Contains));
        assert!(!Ranking::Acronym.meets(&Ranking::Contains));
        assert!(!Ranking::NoMatch.meets(&Ranking::NoMatch));
    }

    #[test]
    fn query_longer_than_candidate_never_matches() {
        assert_eq!(get_match_ranking("Ha", "ha noi", false), Ranking::NoMatch);
    }

    #[test]
    fn acronym_and_fuzzy_tiers() {
        assert_eq!(
            get_match_ranking("Thanh pho Ho Chi Minh", "tphcm", false),
            Ranking::Acronym
        );
        assert!(matches!(
            get_match_ranking("Phuong Ben Nghe", "pbnh", false),
            Ranking::Matches(_)
        ));
        assert_eq!(get_match_ranking("Quan 3", "x", false), Ranking::NoMatch);
    }

    #[test]
    fn diacritics_stripped_unless_kept() {
        assert_eq!(get_match_ranking("Cần Thơ", "can", false), Ranking::StartsWith);
        assert_eq!(get_match_ranking("Cần Thơ", "can", true), Ranking::NoMatch);
    }

    #[test]
    fn word_start_found_after_an_inner_hit() {
        // First occurrence is mid-word, the second starts a word.
        assert_eq!(get_match_ranking("ahoa hoa", "hoa", false), Ranking::WordStartsWith);
    }

    #[test]
    fn word_start_found_when_hits_overlap() {
        // The mid-word hit at 1 overlaps the word-start hit at 4.
        assert_eq!(get_match_ranking("xan an an", "an an", false), Ranking::WordStartsWith);
        assert_eq!(get_match_ranking("xanan an", "an an", false), Ranking::Contains);
    }

    #[test]
    fn prepared_query_ranks_many_candidates() {
        let pq = PreparedQuery::new("hoa", false);
        assert_eq!(pq.rank("Hoa Minh"), Ranking::StartsWith);
        assert_eq!(pq.rank("Phuong Hoa Minh"), Ranking::WordStartsWith);
        assert_eq!(pq.rank("Khoa"), Ranking::Contains);
        assert_eq!(pq.rank("Quan 3"), Ranking::NoMatch);
    }

    #[test]
    fn ties_sort_case_insensitively() {
        let items = ["Xa an Phu", "Xa An Binh", "xa an binh"];
        let hits = match_sorter(items.iter().copied(), "xa", &[AsIs], &contains());
        assert_eq!(hits, vec!["Xa An Binh", "xa an binh", "Xa an Phu"]);
    }

    #[test]
    fn empty_query_starts_every_candidate() {
        assert_eq!(get_match_ranking("abc", "", false), Ranking::StartsWith);
        assert_eq!(get_match_ranking("", "", false), Ranking::CaseSensitiveEqual);
    }

    #[test]
    fn better_tiers_sort_first_then_alphabetical() {
        let items = ["Xa Phuong 3", "Phuong 13", "Phuong 3 Moi", "Phuong 3", "Khu 3"];
        let hits = match_sorter(items.iter().copied(), "phuong 3", &[AsIs], &contains());
        // "Phuong 13" is only an in-order match, below the Contains threshold.
        assert_eq!(hits, vec!["Phuong 3", "Phuong 3 Moi", "Xa Phuong 3"]);

        let hits = match_sorter(items.iter().copied(), "3", &[AsIs], &contains());
        assert_eq!(hits, vec!["Khu 3", "Phuong 3", "Phuong 3 Moi", "Xa Phuong 3", "Phuong 13"]);
    }

    #[test]
    fn threshold_drops_weak_matches() {
        let items = ["Thanh pho Ho Chi Minh", "Ho Chi Minh"];
        let hits = match_sorter(items.iter().copied(), "tphcm", &[AsIs], &contains());
        assert!(hits.is_empty());
        let hits = match_sorter(items.iter().copied(), "tphcm", &[AsIs], &MatchOptions::default());
        assert_eq!(hits, vec!["Thanh pho Ho Chi Minh"]);
    }

    #[test]
    fn earlier_key_wins_equal_ranks() {
        let places = [
            Place { name: "Alpha", slug: "beta" },
            Place { name: "beta", slug: "Alpha" },
        ];
        let ranked = rank_items(&places, "alpha", &[PlaceKey::Name, PlaceKey::Slug], &contains());
        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].key_index, 0);
        assert_eq!(ranked[0].item.slug, "beta");
        assert_eq!(ranked[1].key_index, 1);
    }

    #[test]
    fn best_key_is_reported() {
        let places = [Place { name: "Thanh pho Can Tho", slug: "Can Tho" }];
        let ranked = rank_items(&places, "can", &[PlaceKey::Name, PlaceKey::Slug], &contains());
        assert_eq!(ranked[0].rank, Ranking::StartsWith);
        assert_eq!(ranked[0].ranked_value, "Can Tho");
        assert_eq!(ranked[0].key_index, 1);
    }

    #[test]
    fn stable_for_full_ties() {
        let places = [
            Place { name: "Phuong 1", slug: "x" },
            Place { name: "Phuong 1", slug: "y" },
        ];
        let hits = match_sorter(&places, "phuong 1", &[PlaceKey::Name], &contains());
        assert_eq!(hits[0].slug, "x");
        assert_eq!(hits[1].slug, "y");
    }
}
