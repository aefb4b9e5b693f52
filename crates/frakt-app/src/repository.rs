//! Repository adapters for the tariff provider

use std::path::PathBuf;

use frakt_infra::persistence::FileModeConfigProvider;
use frakt_types::Result;

use crate::config::Config;

/// Open the tariff provider configured for this installation
pub fn open_tariff_provider(config: &Config) -> Result<FileModeConfigProvider> {
    FileModeConfigProvider::load(config.tariff_path()?)
}

/// Open a tariff provider at a custom path
pub fn open_tariff_provider_at(tariff_path: PathBuf) -> Result<FileModeConfigProvider> {
    FileModeConfigProvider::load(tariff_path)
}
