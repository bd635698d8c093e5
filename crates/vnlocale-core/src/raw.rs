// crates/vnlocale-core/src/raw.rs

//! Records as they are stored in the dataset files.

use crate::model::{District, Province};
use serde::{Deserialize, Serialize};

/// A ward before enrichment: no `detail` / `raw_detail` yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WardRaw {
    pub code: String,
    pub district_code: String,
    pub province_code: String,
    pub name: String,
    pub slug_name: String,
}

/// The three flat record collections, in source order.
///
/// This is the immutable input every [`crate::VietnamLocale`] is built from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dataset {
    pub provinces: Vec<Province>,
    pub districts: Vec<District>,
    pub wards: Vec<WardRaw>,
}

impl Dataset {
    pub fn new(provinces: Vec<Province>, districts: Vec<District>, wards: Vec<WardRaw>) -> Self {
        Self {
            provinces,
            districts,
            wards,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.provinces.is_empty() && self.districts.is_empty() && self.wards.is_empty()
    }
}
