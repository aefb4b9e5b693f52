//! Per-mode tariff configuration

use std::collections::BTreeMap;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use frakt_types::{ConfigError, TransportMode};

/// A serviceable postal zone: a single 2-digit prefix or an inclusive range.
///
/// Config files carry these as strings (`"11"` or `"11-19"`); they are
/// parsed once at load time so the eligibility check never re-parses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ZoneSpec {
    Single(u32),
    Range(u32, u32),
}

impl ZoneSpec {
    /// Whether a numeric postal prefix falls inside this zone
    pub fn matches(&self, prefix: u32) -> bool {
        match *self {
            ZoneSpec::Single(zone) => prefix == zone,
            ZoneSpec::Range(start, end) => prefix >= start && prefix <= end,
        }
    }
}

impl FromStr for ZoneSpec {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parse = |part: &str| {
            part.trim()
                .parse::<u32>()
                .map_err(|_| ConfigError::ParseError(format!("invalid zone spec: {:?}", s)))
        };
        match s.split_once('-') {
            Some((start, end)) => Ok(ZoneSpec::Range(parse(start)?, parse(end)?)),
            None => Ok(ZoneSpec::Single(parse(s)?)),
        }
    }
}

impl TryFrom<String> for ZoneSpec {
    type Error = ConfigError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<ZoneSpec> for String {
    fn from(spec: ZoneSpec) -> Self {
        spec.to_string()
    }
}

impl std::fmt::Display for ZoneSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match *self {
            ZoneSpec::Single(zone) => write!(f, "{:02}", zone),
            ZoneSpec::Range(start, end) => write!(f, "{:02}-{:02}", start, end),
        }
    }
}

/// Tariff configuration for one transport mode.
///
/// Immutable for the duration of a quote computation; callers receive a
/// snapshot from a `ModeConfigProvider` and never mutate it mid-evaluation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ModeConfig {
    #[serde(default)]
    pub description: String,

    /// Base price per km for the full-truckload reference price
    pub km_price_eur: f64,

    /// Serviceable zones per country code
    #[serde(default)]
    pub available_zones: BTreeMap<String, Vec<ZoneSpec>>,

    /// Directional FTL multipliers keyed `"CC-CC"`, default 1.0
    #[serde(default)]
    pub balance_factors: BTreeMap<String, f64>,

    /// Hard admission bounds for chargeable weight
    pub min_allowed_weight_kg: f64,
    pub max_allowed_weight_kg: f64,

    // Calibration anchors for the price-per-kg curve.
    // Anchor 1 is a fixed (weight, price) pair; anchors 2 and 3 are linear
    // in the FTL price: price_per_kg = (k * ftl + m) / weight.
    pub p1: f64,
    pub price_p1: f64,
    pub p2: f64,
    pub p2k: f64,
    pub p2m: f64,
    pub p3: f64,
    pub p3k: f64,
    pub p3m: f64,

    /// Weight above which pricing reverts to the flat FTL rate
    pub default_breakpoint: f64,

    /// Hard ceiling beyond which the mode cannot serve
    pub max_weight_kg: f64,

    pub transit_speed_kmpd: f64,

    /// Local hour after which pickup planning loses a day
    pub cutoff_hour: u8,

    /// Calendar days added on top of the business-day lead time
    #[serde(default)]
    pub extra_pickup_days: u32,

    /// Kilograms of CO2 per tonne-km
    pub co2_per_ton_km: f64,
}

impl ModeConfig {
    /// Validate the invariants the curve math depends on.
    ///
    /// Runs once at load time so the evaluator never has to recover from a
    /// malformed tariff mid-formula. The evaluator still re-checks its own
    /// preconditions and reports `bad_config` as a status value.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.km_price_eur <= 0.0 {
            return Err(ConfigError::Validation(format!(
                "km_price_eur must be > 0, got {}",
                self.km_price_eur
            )));
        }
        if self.price_p1 <= 0.0 {
            return Err(ConfigError::Validation(format!(
                "price_p1 must be > 0, got {}",
                self.price_p1
            )));
        }
        if !(0.0 < self.p1 && self.p1 < self.p2 && self.p2 < self.p3) {
            return Err(ConfigError::Validation(format!(
                "calibration weights must satisfy 0 < p1 < p2 < p3, got {} / {} / {}",
                self.p1, self.p2, self.p3
            )));
        }
        if !(self.p3 < self.default_breakpoint && self.default_breakpoint <= self.max_weight_kg) {
            return Err(ConfigError::Validation(format!(
                "breakpoint must satisfy p3 < breakpoint <= max_weight_kg, got {} / {} / {}",
                self.p3, self.default_breakpoint, self.max_weight_kg
            )));
        }
        if self.min_allowed_weight_kg < 0.0
            || self.min_allowed_weight_kg > self.max_allowed_weight_kg
        {
            return Err(ConfigError::Validation(format!(
                "weight bounds must satisfy 0 <= min <= max, got {} / {}",
                self.min_allowed_weight_kg, self.max_allowed_weight_kg
            )));
        }
        if self.transit_speed_kmpd <= 0.0 {
            return Err(ConfigError::Validation(format!(
                "transit_speed_kmpd must be > 0, got {}",
                self.transit_speed_kmpd
            )));
        }
        if self.cutoff_hour > 23 {
            return Err(ConfigError::Validation(format!(
                "cutoff_hour must be within 0..=23, got {}",
                self.cutoff_hour
            )));
        }
        // Zone specs are 2-digit postal prefixes; callers match on the
        // leading two characters of the postal code.
        for (country, specs) in &self.available_zones {
            for spec in specs {
                let valid = match *spec {
                    ZoneSpec::Single(zone) => zone <= 99,
                    ZoneSpec::Range(start, end) => start <= end && end <= 99,
                };
                if !valid {
                    return Err(ConfigError::Validation(format!(
                        "zone spec {} for {} is not a 2-digit prefix",
                        spec, country
                    )));
                }
            }
        }
        Ok(())
    }

    /// Directional FTL multiplier for an origin/destination country pair
    pub fn balance_factor(&self, origin_country: &str, dest_country: &str) -> f64 {
        let key = format!("{}-{}", origin_country, dest_country);
        self.balance_factors.get(&key).copied().unwrap_or(1.0)
    }
}

/// Immutable per-request snapshot of every configured mode tariff
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ModeConfigSet {
    pub modes: BTreeMap<TransportMode, ModeConfig>,
}

impl ModeConfigSet {
    pub fn get(&self, mode: TransportMode) -> Option<&ModeConfig> {
        self.modes.get(&mode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn road_config() -> ModeConfig {
        ModeConfig {
            description: "Road freight".to_string(),
            km_price_eur: 1.1,
            available_zones: BTreeMap::from([
                ("SE".to_string(), vec![ZoneSpec::Range(10, 19), ZoneSpec::Single(20)]),
                ("DE".to_string(), vec![ZoneSpec::Range(1, 99)]),
            ]),
            balance_factors: BTreeMap::from([("SE-DE".to_string(), 1.1)]),
            min_allowed_weight_kg: 1.0,
            max_allowed_weight_kg: 25160.0,
            p1: 30.0,
            price_p1: 50.0,
            p2: 500.0,
            p2k: 0.7,
            p2m: 100.0,
            p3: 2500.0,
            p3k: 0.9,
            p3m: 50.0,
            default_breakpoint: 15000.0,
            max_weight_kg: 25160.0,
            transit_speed_kmpd: 500.0,
            cutoff_hour: 14,
            extra_pickup_days: 0,
            co2_per_ton_km: 0.062,
        }
    }

    #[test]
    fn test_zone_spec_parses_single_and_range() {
        assert_eq!("20".parse::<ZoneSpec>().unwrap(), ZoneSpec::Single(20));
        assert_eq!("11-19".parse::<ZoneSpec>().unwrap(), ZoneSpec::Range(11, 19));
    }

    #[test]
    fn test_zone_spec_rejects_garbage() {
        assert!("1a".parse::<ZoneSpec>().is_err());
        assert!("11-".parse::<ZoneSpec>().is_err());
        assert!("".parse::<ZoneSpec>().is_err());
    }

    #[test]
    fn test_zone_spec_range_is_inclusive() {
        let spec = ZoneSpec::Range(11, 19);
        assert!(spec.matches(11));
        assert!(spec.matches(19));
        assert!(!spec.matches(20));
    }

    #[test]
    fn test_zone_spec_display_keeps_two_digits() {
        assert_eq!(ZoneSpec::Single(5).to_string(), "05");
        assert_eq!(ZoneSpec::Range(1, 9).to_string(), "01-09");
    }

    #[test]
    fn test_valid_config_passes() {
        assert!(road_config().validate().is_ok());
    }

    #[test]
    fn test_non_monotonic_calibration_rejected() {
        let mut config = road_config();
        config.p2 = 20.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_breakpoint_above_max_weight_rejected() {
        let mut config = road_config();
        config.default_breakpoint = 30000.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_three_digit_zone_spec_rejected() {
        let mut config = road_config();
        config
            .available_zones
            .insert("FI".to_string(), vec![ZoneSpec::Single(114)]);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_balance_factor_is_directional() {
        let config = road_config();
        assert!((config.balance_factor("SE", "DE") - 1.1).abs() < f64::EPSILON);
        assert!((config.balance_factor("DE", "SE") - 1.0).abs() < f64::EPSILON);
    }
}
