//! Domain services

pub mod calendar_planner;
pub mod geo_distance;
pub mod holidays;
pub mod mode_quoter;
pub mod price_curve;
pub mod zone_eligibility;

pub use calendar_planner::earliest_pickup;
pub use geo_distance::distance_km;
pub use mode_quoter::quote;
pub use price_curve::{evaluate, PriceCurve};
pub use zone_eligibility::{is_allowed, postal_prefix};
