//! Quote request shape

use serde::{Deserialize, Serialize};

use frakt_types::Coordinate;

/// A validated quote request, evaluated once per transport mode
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct QuoteRequest {
    pub pickup_coordinate: Coordinate,
    pub delivery_coordinate: Coordinate,
    pub pickup_country: String,
    pub pickup_postal_code: String,
    pub delivery_country: String,
    pub delivery_postal_code: String,
    pub chargeable_weight_kg: f64,
}
