//! Zone eligibility checks

use std::collections::BTreeMap;

use crate::model::ZoneSpec;

/// Leading 2-digit prefix of a postal code.
///
/// Zone specs are 2-digit by config validation; eligibility is matched on
/// the first two characters of the (trimmed) postal code.
pub fn postal_prefix(postal_code: &str) -> &str {
    let trimmed = postal_code.trim();
    trimmed.get(..2).unwrap_or(trimmed)
}

/// Whether a (country, postal prefix) pair is inside a mode's zone set.
///
/// Absent country or unparseable prefix is a plain `false`, never an
/// error: ineligibility is an expected outcome, not a failure.
pub fn is_allowed(
    country_code: &str,
    postal_prefix: &str,
    zone_map: &BTreeMap<String, Vec<ZoneSpec>>,
) -> bool {
    let Some(specs) = zone_map.get(country_code) else {
        return false;
    };
    let Ok(prefix) = postal_prefix.trim().parse::<u32>() else {
        return false;
    };
    specs.iter().any(|spec| spec.matches(prefix))
}
