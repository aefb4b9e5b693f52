//! Core types for freight quoting

use std::collections::BTreeMap;
use std::str::FromStr;

use chrono::NaiveDate;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::Error;

/// Transport mode a quote is computed for
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, ValueEnum, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum TransportMode {
    Road,
    Rail,
    Ocean,
}

impl TransportMode {
    /// Every mode a quote request is evaluated against
    pub const ALL: [TransportMode; 3] =
        [TransportMode::Road, TransportMode::Rail, TransportMode::Ocean];

    pub fn as_str(&self) -> &'static str {
        match self {
            TransportMode::Road => "road",
            TransportMode::Rail => "rail",
            TransportMode::Ocean => "ocean",
        }
    }
}

impl std::fmt::Display for TransportMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TransportMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "road" => Ok(TransportMode::Road),
            "rail" => Ok(TransportMode::Rail),
            "ocean" => Ok(TransportMode::Ocean),
            other => Err(Error::UnknownMode(other.to_string())),
        }
    }
}

/// Terminal status of a per-mode quote evaluation.
///
/// Business rejections are values, never errors: one mode failing its
/// eligibility or configuration checks must not abort the other modes
/// of the same request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuoteStatus {
    Success,
    NotAvailable,
    WeightNotAllowed,
    WeightExceedsMax,
    BadConfig,
}

impl QuoteStatus {
    pub fn is_success(&self) -> bool {
        matches!(self, QuoteStatus::Success)
    }
}

impl std::fmt::Display for QuoteStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            QuoteStatus::Success => "success",
            QuoteStatus::NotAvailable => "not_available",
            QuoteStatus::WeightNotAllowed => "weight_not_allowed",
            QuoteStatus::WeightExceedsMax => "weight_exceeds_max",
            QuoteStatus::BadConfig => "bad_config",
        };
        write!(f, "{}", s)
    }
}

/// A WGS84 coordinate in degrees
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinate {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    pub fn is_finite(&self) -> bool {
        self.lat.is_finite() && self.lon.is_finite()
    }
}

/// Result of one mode's quote evaluation
///
/// Computed fresh per request; persistence of accepted quotes is the
/// calling system's concern.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct QuoteResult {
    pub available: bool,
    pub status: QuoteStatus,
    pub total_price_eur: Option<f64>,
    pub ftl_price_eur: Option<f64>,
    pub distance_km: Option<f64>,
    /// [min, max] transit days
    pub transit_time_days: Option<[u32; 2]>,
    pub earliest_pickup_date: Option<NaiveDate>,
    pub co2_emissions_grams: Option<f64>,
}

impl QuoteResult {
    /// A terminal rejection carrying no price data
    pub fn rejected(status: QuoteStatus) -> Self {
        Self {
            available: false,
            status,
            total_price_eur: None,
            ftl_price_eur: None,
            distance_km: None,
            transit_time_days: None,
            earliest_pickup_date: None,
            co2_emissions_grams: None,
        }
    }
}

/// Quote results keyed by transport mode, one entry per mode
pub type QuoteResultSet = BTreeMap<TransportMode, QuoteResult>;
