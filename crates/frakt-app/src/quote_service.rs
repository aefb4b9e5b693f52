//! Quote Service - Core Use Case for Multi-Mode Freight Quoting
//!
//! This service orchestrates the complete quoting workflow:
//! 1. Take one immutable tariff snapshot for the whole request
//! 2. Quote every transport mode independently
//! 3. Collect one result per mode, rejections included

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};

use frakt_domain::model::QuoteRequest;
use frakt_domain::repository::ModeConfigProvider;
use frakt_domain::service::mode_quoter;
use frakt_types::{QuoteResult, QuoteResultSet, QuoteStatus, Result, TransportMode};

/// Multi-mode quote orchestrator
pub struct QuoteService<P> {
    provider: P,
}

impl<P: ModeConfigProvider> QuoteService<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    /// Quote every transport mode for one request.
    ///
    /// Each mode is evaluated against the same tariff snapshot and in
    /// isolation: a mode with no tariff yields `not_available`, a mode
    /// with a broken tariff yields `bad_config`, and neither disturbs
    /// the other modes' results.
    pub fn quote_all_modes(
        &self,
        request: &QuoteRequest,
        now_utc: DateTime<Utc>,
    ) -> Result<QuoteResultSet> {
        let snapshot = self.provider.snapshot()?;

        let mut results = BTreeMap::new();
        for mode in TransportMode::ALL {
            let result = match snapshot.get(mode) {
                Some(config) => mode_quoter::quote(config, request, now_utc)?,
                None => QuoteResult::rejected(QuoteStatus::NotAvailable),
            };
            results.insert(mode, result);
        }
        Ok(results)
    }
}
