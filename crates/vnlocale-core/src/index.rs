// crates/vnlocale-core/src/index.rs

//! Lookup tables over the record collections.
//!
//! The index never copies records. Every table stores positions into the
//! `Vec`s owned by [`crate::VietnamLocale`], and groups keep the relative
//! dataset order of their members.

use crate::enrich::validate_districts;
use crate::error::{LocaleError, Result};
use crate::model::{District, Province, Ward};
use std::collections::HashMap;
use std::iter::FusedIterator;
use std::slice;

/// Positions of records sharing one key, in dataset order.
pub type Positions = Vec<usize>;

/// A keyed view over a record slice.
pub struct CodeMap<'a, T> {
    items: &'a [T],
    positions: &'a HashMap<String, usize>,
}

impl<'a, T> CodeMap<'a, T> {
    pub fn get(&self, code: &str) -> Option<&'a T> {
        self.positions.get(code).map(|&pos| &self.items[pos])
    }

    pub fn contains(&self, code: &str) -> bool {
        self.positions.contains_key(code)
    }
}

impl<T> Clone for CodeMap<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for CodeMap<'_, T> {}

/// A group of records borrowed from the locale.
///
/// Either a whole collection or the members of one index bucket.
#[derive(Debug)]
pub struct Group<'a, T> {
    items: &'a [T],
    positions: Option<&'a [usize]>,
}

impl<T> Clone for Group<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Group<'_, T> {}

impl<'a, T> Group<'a, T> {
    /// Every record of `items`.
    pub fn all(items: &'a [T]) -> Self {
        Self {
            items,
            positions: None,
        }
    }

    /// The records of `items` at `positions`.
    pub fn at(items: &'a [T], positions: &'a [usize]) -> Self {
        Self {
            items,
            positions: Some(positions),
        }
    }

    pub fn len(&self) -> usize {
        self.positions.map_or(self.items.len(), <[usize]>::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn iter(&self) -> GroupIter<'a, T> {
        match self.positions {
            None => GroupIter::All(self.items.iter()),
            Some(positions) => GroupIter::Picked {
                items: self.items,
                positions: positions.iter(),
            },
        }
    }

    pub fn to_vec(&self) -> Vec<&'a T> {
        self.iter().collect()
    }
}

impl<'a, T> IntoIterator for Group<'a, T> {
    type Item = &'a T;
    type IntoIter = GroupIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &Group<'a, T> {
    type Item = &'a T;
    type IntoIter = GroupIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

pub enum GroupIter<'a, T> {
    All(slice::Iter<'a, T>),
    Picked {
        items: &'a [T],
        positions: slice::Iter<'a, usize>,
    },
}

impl<'a, T> Iterator for GroupIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            GroupIter::All(it) => it.next(),
            GroupIter::Picked { items, positions } => positions.next().map(|&pos| &items[pos]),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self {
            GroupIter::All(it) => it.size_hint(),
            GroupIter::Picked { positions, .. } => positions.size_hint(),
        }
    }
}

impl<T> ExactSizeIterator for GroupIter<'_, T> {}
impl<T> FusedIterator for GroupIter<'_, T> {}

/// All lookup tables of a locale.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocaleIndex {
    province_by_code: HashMap<String, usize>,
    district_by_code: HashMap<String, usize>,
    districts_by_province: HashMap<String, Positions>,
    wards_by_district: HashMap<String, Positions>,
    wards_by_province: HashMap<String, Positions>,
    // province code -> district code -> wards
    wards_by_province_and_district: HashMap<String, HashMap<String, Positions>>,
}

impl LocaleIndex {
    /// Validates and indexes already enriched records in one go.
    pub fn build(provinces: &[Province], districts: &[District], wards: &[Ward]) -> Result<Self> {
        Ok(IndexBuilder::new(provinces, districts)?.build(wards))
    }

    pub fn province_position(&self, code: &str) -> Option<usize> {
        self.province_by_code.get(code).copied()
    }

    pub fn district_position(&self, code: &str) -> Option<usize> {
        self.district_by_code.get(code).copied()
    }

    pub fn districts_in_province(&self, province_code: &str) -> Option<&[usize]> {
        self.districts_by_province
            .get(province_code)
            .map(Vec::as_slice)
    }

    pub fn wards_in_district(&self, district_code: &str) -> Option<&[usize]> {
        self.wards_by_district.get(district_code).map(Vec::as_slice)
    }

    pub fn wards_in_province(&self, province_code: &str) -> Option<&[usize]> {
        self.wards_by_province.get(province_code).map(Vec::as_slice)
    }

    pub fn wards_in_province_and_district(
        &self,
        province_code: &str,
        district_code: &str,
    ) -> Option<&[usize]> {
        self.wards_by_province_and_district
            .get(province_code)?
            .get(district_code)
            .map(Vec::as_slice)
    }
}

/// Two-phase index construction.
///
/// [`IndexBuilder::new`] keys provinces and districts (rejecting duplicate
/// codes and districts of unknown provinces), which is what ward enrichment
/// needs to resolve parents. [`IndexBuilder::build`] then groups the
/// enriched wards.
pub struct IndexBuilder<'a> {
    provinces: &'a [Province],
    districts: &'a [District],
    province_by_code: HashMap<String, usize>,
    district_by_code: HashMap<String, usize>,
}

impl<'a> IndexBuilder<'a> {
    pub fn new(provinces: &'a [Province], districts: &'a [District]) -> Result<Self> {
        let province_by_code = key_by(provinces, "province", |p| &p.code)?;
        let district_by_code = key_by(districts, "district", |d| &d.code)?;
        let builder = Self {
            provinces,
            districts,
            province_by_code,
            district_by_code,
        };
        validate_districts(districts, builder.province_map())?;
        Ok(builder)
    }

    pub fn province_map(&self) -> CodeMap<'_, Province> {
        CodeMap {
            items: self.provinces,
            positions: &self.province_by_code,
        }
    }

    pub fn district_map(&self) -> CodeMap<'_, District> {
        CodeMap {
            items: self.districts,
            positions: &self.district_by_code,
        }
    }

    pub fn build(self, wards: &[Ward]) -> LocaleIndex {
        let mut composite: HashMap<String, HashMap<String, Positions>> = HashMap::new();
        for (pos, ward) in wards.iter().enumerate() {
            composite
                .entry(ward.province_code.clone())
                .or_default()
                .entry(ward.district_code.clone())
                .or_default()
                .push(pos);
        }

        LocaleIndex {
            districts_by_province: group_by(self.districts, |d| &d.province_code),
            wards_by_district: group_by(wards, |w| &w.district_code),
            wards_by_province: group_by(wards, |w| &w.province_code),
            wards_by_province_and_district: composite,
            province_by_code: self.province_by_code,
            district_by_code: self.district_by_code,
        }
    }
}

fn key_by<T>(
    items: &[T],
    entity: &'static str,
    code: impl Fn(&T) -> &String,
) -> Result<HashMap<String, usize>> {
    let mut map = HashMap::with_capacity(items.len());
    for (pos, item) in items.iter().enumerate() {
        let key = code(item);
        if map.insert(key.clone(), pos).is_some() {
            return Err(LocaleError::DuplicateCode {
                entity,
                code: key.clone(),
            });
        }
    }
    Ok(map)
}

fn group_by<T>(items: &[T], key: impl Fn(&T) -> &String) -> HashMap<String, Positions> {
    let mut groups: HashMap<String, Positions> = HashMap::new();
    for (pos, item) in items.iter().enumerate() {
        groups.entry(key(item).clone()).or_default().push(pos);
    }
    groups
}
