// crates/vnlocale-core/src/enrich.rs

//! Referential checks and ward enrichment.

use crate::error::{LocaleError, Result};
use crate::index::CodeMap;
use crate::model::{District, Province, Ward};
use crate::raw::WardRaw;
use crate::text::to_lower_case_and_remove_accents;

/// Every district must name an existing province.
pub fn validate_districts(districts: &[District], provinces: CodeMap<'_, Province>) -> Result<()> {
    match districts
        .iter()
        .find(|d| !provinces.contains(&d.province_code))
    {
        Some(d) => Err(LocaleError::unresolved(
            "district",
            &d.code,
            "province_code",
            &d.province_code,
        )),
        None => Ok(()),
    }
}

/// `"{ward}, {district}, {province description}"`.
pub fn ward_detail(ward_name: &str, district: &District, province: &Province) -> String {
    format!("{ward_name}, {}, {}", district.name, province.description)
}

/// Turns raw wards into enriched ones, preserving order.
///
/// All-or-nothing: the first ward whose district or province does not
/// resolve, or whose province disagrees with its district's, fails the whole
/// batch.
pub fn enrich_wards(
    raw: Vec<WardRaw>,
    districts: CodeMap<'_, District>,
    provinces: CodeMap<'_, Province>,
) -> Result<Vec<Ward>> {
    raw.into_iter()
        .map(|w| enrich_ward(w, districts, provinces))
        .collect()
}

fn enrich_ward(
    raw: WardRaw,
    districts: CodeMap<'_, District>,
    provinces: CodeMap<'_, Province>,
) -> Result<Ward> {
    let district = districts
        .get(&raw.district_code)
        .ok_or_else(|| LocaleError::unresolved("ward", &raw.code, "district_code", &raw.district_code))?;
    let province = provinces
        .get(&raw.province_code)
        .ok_or_else(|| LocaleError::unresolved("ward", &raw.code, "province_code", &raw.province_code))?;
    if district.province_code != raw.province_code {
        return Err(LocaleError::ReferentialIntegrity {
            entity: "ward",
            code: raw.code,
            field: "province_code",
            target: raw.province_code,
            problem: "disagrees with its district",
        });
    }

    let detail = ward_detail(&raw.name, district, province);
    let raw_detail = to_lower_case_and_remove_accents(&detail);
    Ok(Ward {
        code: raw.code,
        district_code: raw.district_code,
        province_code: raw.province_code,
        name: raw.name,
        slug_name: raw.slug_name,
        detail,
        raw_detail,
    })
}
