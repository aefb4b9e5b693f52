//! CLI argument definitions

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use clap::{Args, Parser, Subcommand};

use frakt_domain::model::QuoteRequest;
use frakt_types::{Coordinate, OutputFormat, TransportMode};

#[derive(Parser)]
#[command(name = "fraktquote", about = "Multi-mode freight quoting", version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Shipment parameters shared by quoting and booking
#[derive(Args)]
pub struct ShipmentArgs {
    /// Pickup country code (ISO 3166-1 alpha-2)
    #[arg(long)]
    pub from_country: String,

    /// Pickup postal code
    #[arg(long)]
    pub from_postal: String,

    #[arg(long)]
    pub from_lat: f64,

    #[arg(long)]
    pub from_lon: f64,

    /// Delivery country code (ISO 3166-1 alpha-2)
    #[arg(long)]
    pub to_country: String,

    /// Delivery postal code
    #[arg(long)]
    pub to_postal: String,

    #[arg(long)]
    pub to_lat: f64,

    #[arg(long)]
    pub to_lon: f64,

    /// Chargeable weight in kg
    #[arg(long)]
    pub weight: f64,
}

impl ShipmentArgs {
    pub fn into_request(self) -> QuoteRequest {
        QuoteRequest {
            pickup_coordinate: Coordinate::new(self.from_lat, self.from_lon),
            delivery_coordinate: Coordinate::new(self.to_lat, self.to_lon),
            pickup_country: self.from_country,
            pickup_postal_code: self.from_postal,
            delivery_country: self.to_country,
            delivery_postal_code: self.to_postal,
            chargeable_weight_kg: self.weight,
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Quote every transport mode for a shipment
    Quote {
        #[command(flatten)]
        shipment: ShipmentArgs,

        /// Tariff file override
        #[arg(long)]
        tariff: Option<PathBuf>,

        /// Output format override
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,

        /// Pin the request time (RFC 3339, e.g. 2026-08-03T08:00:00Z)
        #[arg(long)]
        at: Option<DateTime<Utc>>,
    },

    /// List the configured transport modes
    Modes {
        /// Tariff file override
        #[arg(long)]
        tariff: Option<PathBuf>,

        /// Output format override
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// Quote one mode and mint a booking reference
    Book {
        #[command(flatten)]
        shipment: ShipmentArgs,

        /// Transport mode to book
        #[arg(long, value_enum)]
        mode: TransportMode,

        /// Tariff file override
        #[arg(long)]
        tariff: Option<PathBuf>,

        /// Pin the request time (RFC 3339, e.g. 2026-08-03T08:00:00Z)
        #[arg(long)]
        at: Option<DateTime<Utc>>,
    },
}
