//! File-based implementation of ModeConfigProvider
//!
//! Tariffs live in one TOML file with a table per transport mode. The
//! whole file is parsed and validated at load time; `snapshot()` hands
//! out clones so a `reload()` can never change a quote mid-computation.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use frakt_domain::model::{ModeConfig, ModeConfigSet};
use frakt_domain::repository::ModeConfigProvider;
use frakt_types::{ConfigError, Error, Result, TransportMode};

/// File-based tariff provider (TOML)
pub struct FileModeConfigProvider {
    tariff_path: PathBuf,
    set: ModeConfigSet,
}

#[derive(Debug, Deserialize)]
struct TariffFile {
    #[serde(default)]
    modes: BTreeMap<String, ModeConfig>,
}

impl FileModeConfigProvider {
    /// Load and validate a tariff file
    pub fn load(tariff_path: impl Into<PathBuf>) -> Result<Self> {
        let tariff_path = tariff_path.into();
        let set = read_tariff_file(&tariff_path)?;
        Ok(Self { tariff_path, set })
    }

    /// Get the tariff file path
    pub fn tariff_path(&self) -> &Path {
        &self.tariff_path
    }

    /// Re-read the tariff file, replacing the in-memory set
    pub fn reload(&mut self) -> Result<()> {
        self.set = read_tariff_file(&self.tariff_path)?;
        Ok(())
    }
}

impl ModeConfigProvider for FileModeConfigProvider {
    fn snapshot(&self) -> Result<ModeConfigSet> {
        Ok(self.set.clone())
    }
}

fn read_tariff_file(path: &Path) -> Result<ModeConfigSet> {
    if !path.exists() {
        return Err(Error::Config(ConfigError::NotFound));
    }
    let content = std::fs::read_to_string(path)?;
    let file: TariffFile = toml::from_str(&content)
        .map_err(|e| Error::Config(ConfigError::ParseError(e.to_string())))?;

    let mut modes = BTreeMap::new();
    for (name, config) in file.modes {
        let mode: TransportMode = name.parse()?;
        config.validate().map_err(|e| match e {
            ConfigError::Validation(msg) => {
                ConfigError::Validation(format!("mode {}: {}", mode, msg))
            }
            other => other,
        })?;
        modes.insert(mode, config);
    }
    Ok(ModeConfigSet { modes })
}
