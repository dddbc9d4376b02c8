use serde::Serialize;

use crate::core::{Pillar, RiskTier};

/// Per-pillar subtotals of one company.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct PillarTotals {
    pub environmental: f64,
    pub social: f64,
    pub governance: f64,
}

impl PillarTotals {
    #[must_use]
    pub const fn get(&self, pillar: Pillar) -> f64 {
        match pillar {
            Pillar::Environmental => self.environmental,
            Pillar::Social => self.social,
            Pillar::Governance => self.governance,
        }
    }

    /// Sum of the three subtotals, added in pillar order.
    #[must_use]
    pub fn sum(&self) -> f64 {
        self.environmental + self.social + self.governance
    }
}

/// One axis of a company's radar chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RadarPoint {
    pub pillar: Pillar,
    /// Full criterion name; identity is never truncated.
    pub criterion: String,
    /// Axis label, truncated for display.
    pub label: String,
    pub score: f64,
    pub max_score: f64,
}

/// One company's row in the cross-company comparison chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonRow {
    /// Name truncated for the chart axis.
    pub display_name: String,
    /// Untruncated name for tooltips and lookups.
    pub full_name: String,
    pub totals: PillarTotals,
    /// Sum of `totals`; may exceed the nominal ceiling.
    pub total_score: f64,
    pub category: String,
}

/// Progress-bar data for one pillar of one company.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PillarProgress {
    pub pillar: Pillar,
    pub total: f64,
    pub ceiling: f64,
    /// `total / ceiling`, unclamped. Zero when the ceiling is zero.
    pub ratio: f64,
    /// `ratio` clamped to `[0, 1]` for bar widths.
    pub display_ratio: f64,
}

/// The overview card of one company.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreCard {
    pub name: String,
    pub category: String,
    pub color: String,
    pub note: Option<String>,
    /// Total as stored in the dataset.
    pub stored_total: f64,
    /// Total recomputed from raw scores.
    pub computed_total: f64,
    /// Label selected by the configured [`crate::RiskSource`].
    pub risk: RiskTier,
    /// Whether `computed_total` is above the taxonomy's overall ceiling.
    pub exceeds_ceiling: bool,
    pub pillars: Vec<PillarProgress>,
}

/// Stored vs. recomputed totals and risk labels of one company.
///
/// A mismatch is reported, never corrected.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RiskAudit {
    pub stored: RiskTier,
    pub computed: RiskTier,
    pub stored_total: f64,
    pub computed_total: f64,
    pub label_consistent: bool,
    pub total_consistent: bool,
}

impl RiskAudit {
    #[must_use]
    pub const fn is_consistent(&self) -> bool {
        self.label_consistent && self.total_consistent
    }
}

/// One criterion bar of the detailed breakdown.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CriterionBar {
    pub criterion: String,
    pub score: f64,
    pub max_score: f64,
    /// `score / max_score`; above 1.0 for outliers.
    pub ratio: f64,
}

/// All criterion bars of one pillar.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PillarBreakdown {
    pub pillar: Pillar,
    pub criteria: Vec<CriterionBar>,
}
