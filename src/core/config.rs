//! Scoring and display configuration + builder.

use serde::{Deserialize, Serialize};

use crate::core::RiskThresholds;
use crate::core::constants::{DISPLAY_NAME_LIMIT, FALLBACK_MAX_SCORE, RADAR_LABEL_LIMIT};

/// Which risk label a score card presents.
///
/// Datasets carry a stored label per company which is not always what the
/// thresholds would compute from the stored total. Neither value is ever
/// rewritten; this only selects which one is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskSource {
    /// Show the label stored in the dataset.
    #[default]
    Stored,
    /// Show the label computed from the summed raw scores.
    Computed,
}

/// Settings shared by [`crate::ScoreAggregator`] and [`crate::Dashboard`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScorecardConfig {
    pub thresholds: RiskThresholds,
    pub risk_source: RiskSource,
    pub radar_label_limit: usize,
    pub display_name_limit: usize,
    pub fallback_max_score: f64,
}

impl Default for ScorecardConfig {
    fn default() -> Self {
        Self {
            thresholds: RiskThresholds::default(),
            risk_source: RiskSource::default(),
            radar_label_limit: RADAR_LABEL_LIMIT,
            display_name_limit: DISPLAY_NAME_LIMIT,
            fallback_max_score: FALLBACK_MAX_SCORE,
        }
    }
}

impl ScorecardConfig {
    /// Create a new builder starting from the defaults.
    #[must_use]
    pub fn builder() -> ScorecardConfigBuilder {
        ScorecardConfigBuilder::default()
    }
}

/// Builder for [`ScorecardConfig`].
#[derive(Debug, Clone, Default)]
pub struct ScorecardConfigBuilder {
    config: ScorecardConfig,
}

impl ScorecardConfigBuilder {
    /// Overrides the `Low` / `Medium` lower bounds.
    #[must_use]
    pub const fn thresholds(mut self, low: f64, medium: f64) -> Self {
        self.config.thresholds = RiskThresholds { low, medium };
        self
    }

    /// Selects whether cards show the stored or the computed risk label.
    #[must_use]
    pub const fn risk_source(mut self, source: RiskSource) -> Self {
        self.config.risk_source = source;
        self
    }

    /// Max characters of a radar axis label before truncation.
    #[must_use]
    pub const fn radar_label_limit(mut self, limit: usize) -> Self {
        self.config.radar_label_limit = limit;
        self
    }

    /// Max characters of a comparison-chart company name before truncation.
    #[must_use]
    pub const fn display_name_limit(mut self, limit: usize) -> Self {
        self.config.display_name_limit = limit;
        self
    }

    /// Max score assumed for criteria missing from the taxonomy.
    #[must_use]
    pub const fn fallback_max_score(mut self, score: f64) -> Self {
        self.config.fallback_max_score = score;
        self
    }

    #[must_use]
    pub fn build(self) -> ScorecardConfig {
        self.config
    }
}
