//! Core components of `esg-scorecard`.
//!
//! This module contains the foundational building blocks of the library, including:
//! - The primary [`EsgError`] type.
//! - Shared models like [`Pillar`] and [`RiskTier`].
//! - Scoring/display configuration and its defaults.

/// Scoring and display configuration (`ScorecardConfig`) and its builder.
pub mod config;
/// Default thresholds, label limits and ceilings.
pub mod constants;
/// The primary error type (`EsgError`) for the crate.
pub mod error;
/// Display-only label truncation.
pub mod labels;
/// Shared data models used across modules (e.g., `Pillar`, `RiskTier`).
pub mod models;

#[cfg(feature = "dataframe")]
pub mod dataframe;

// convenient re-exports so most code can just `use crate::core::Pillar`
pub use config::{RiskSource, ScorecardConfig, ScorecardConfigBuilder};
pub use error::EsgError;
pub use labels::truncate_label;
pub use models::{Pillar, RiskBand, RiskThresholds, RiskTier, classify_risk};
