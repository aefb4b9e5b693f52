//! Command handlers

use std::path::PathBuf;

use chrono::Utc;

use frakt_app::booking::generate_booking_reference;
use frakt_app::config::Config;
use frakt_app::quote_service::QuoteService;
use frakt_app::repository::{open_tariff_provider, open_tariff_provider_at};
use frakt_domain::repository::ModeConfigProvider;
use frakt_domain::service::mode_quoter;
use frakt_infra::persistence::FileModeConfigProvider;
use frakt_types::{QuoteResult, QuoteStatus, Result};

use crate::cli::{Cli, Commands};
use crate::output::{output_booking, output_modes, output_quotes};

pub fn execute(cli: Cli) -> Result<()> {
    let config = Config::load()?;

    match cli.command {
        Commands::Quote { shipment, tariff, format, at } => {
            let provider = open_provider(&config, tariff)?;
            let service = QuoteService::new(provider);
            let request = shipment.into_request();
            let now_utc = at.unwrap_or_else(Utc::now);

            let results = service.quote_all_modes(&request, now_utc)?;
            output_quotes(format.unwrap_or(config.output_format), &results)
        }

        Commands::Modes { tariff, format } => {
            let provider = open_provider(&config, tariff)?;
            let snapshot = provider.snapshot()?;
            output_modes(format.unwrap_or(config.output_format), &snapshot)
        }

        Commands::Book { shipment, mode, tariff, at } => {
            let provider = open_provider(&config, tariff)?;
            let snapshot = provider.snapshot()?;
            let request = shipment.into_request();
            let now_utc = at.unwrap_or_else(Utc::now);

            let result = match snapshot.get(mode) {
                Some(mode_config) => mode_quoter::quote(mode_config, &request, now_utc)?,
                None => QuoteResult::rejected(QuoteStatus::NotAvailable),
            };

            // Only a successful quote gets a reference; persisting the
            // booking is the surrounding system's job.
            let reference = result.status.is_success().then(generate_booking_reference);
            output_booking(mode, &result, reference.as_deref())
        }
    }
}

fn open_provider(
    config: &Config,
    path_override: Option<PathBuf>,
) -> Result<FileModeConfigProvider> {
    match path_override {
        Some(path) => open_tariff_provider_at(path),
        None => open_tariff_provider(config),
    }
}
