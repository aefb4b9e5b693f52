//! Repository trait definitions

use frakt_types::Error;

use crate::model::ModeConfigSet;

/// Source of mode tariff configuration.
///
/// One snapshot is taken per quote request and used for the whole
/// computation, so a concurrent tariff reload can never change the
/// configuration mid-evaluation.
pub trait ModeConfigProvider {
    /// An immutable snapshot of every configured mode tariff
    fn snapshot(&self) -> Result<ModeConfigSet, Error>;
}
