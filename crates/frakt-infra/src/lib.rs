//! Infrastructure layer - tariff configuration loading

pub mod persistence;
