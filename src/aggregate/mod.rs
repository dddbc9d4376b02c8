//! Derives presentation-ready aggregates from raw per-criterion scores.
//!
//! Every operation here is a pure, infallible function of the taxonomy, the
//! configuration and one immutable [`CompanyRecord`].

mod model;

pub use model::{
    ComparisonRow, CriterionBar, PillarBreakdown, PillarProgress, PillarTotals, RadarPoint,
    RiskAudit, ScoreCard,
};

use crate::company::CompanyRecord;
use crate::core::{Pillar, RiskSource, RiskTier, ScorecardConfig, truncate_label};
use crate::taxonomy::Taxonomy;

/// Totals closer than this are considered equal when auditing stored values.
const TOTAL_TOLERANCE: f64 = 1e-9;

/// Stateless scorer bound to a taxonomy.
///
/// # Example
///
/// ```
/// use esg_scorecard::{CompanyRecord, Pillar, RiskTier, ScoreAggregator, Taxonomy};
///
/// let taxonomy = Taxonomy::builder()
///     .criterion(Pillar::Environmental, "Carbon", 60.0, "")
///     .criterion(Pillar::Social, "Safety", 30.0, "")
///     .criterion(Pillar::Governance, "Disclosure", 10.0, "")
///     .build();
/// let company = CompanyRecord::builder("Acme Power", "Renewable")
///     .score(Pillar::Environmental, "Carbon", 50.0)
///     .score(Pillar::Social, "Safety", 25.0)
///     .score(Pillar::Governance, "Disclosure", 10.0)
///     .build();
///
/// let agg = ScoreAggregator::new(&taxonomy);
/// assert_eq!(agg.compute_total_score(&company), 85.0);
/// assert_eq!(agg.classify_risk(85.0), RiskTier::Low);
/// ```
#[derive(Debug, Clone)]
pub struct ScoreAggregator<'a> {
    taxonomy: &'a Taxonomy,
    config: ScorecardConfig,
}

impl<'a> ScoreAggregator<'a> {
    /// Creates an aggregator with the default configuration.
    #[must_use]
    pub fn new(taxonomy: &'a Taxonomy) -> Self {
        Self::with_config(taxonomy, ScorecardConfig::default())
    }

    #[must_use]
    pub const fn with_config(taxonomy: &'a Taxonomy, config: ScorecardConfig) -> Self {
        Self { taxonomy, config }
    }

    #[must_use]
    pub const fn taxonomy(&self) -> &'a Taxonomy {
        self.taxonomy
    }

    #[must_use]
    pub const fn config(&self) -> &ScorecardConfig {
        &self.config
    }

    /// Sums the company's raw scores over every criterion registered under `pillar`.
    ///
    /// A criterion the company has no entry for contributes zero.
    #[must_use]
    pub fn compute_pillar_total(&self, company: &CompanyRecord, pillar: Pillar) -> f64 {
        self.taxonomy
            .criteria(pillar)
            .iter()
            .map(|c| company.scores.get(pillar, &c.name).unwrap_or(0.0))
            .sum()
    }

    /// Subtotals for all three pillars.
    #[must_use]
    pub fn pillar_totals(&self, company: &CompanyRecord) -> PillarTotals {
        PillarTotals {
            environmental: self.compute_pillar_total(company, Pillar::Environmental),
            social: self.compute_pillar_total(company, Pillar::Social),
            governance: self.compute_pillar_total(company, Pillar::Governance),
        }
    }

    /// Sum of the three pillar totals. Never clamped; may exceed the ceiling.
    #[must_use]
    pub fn compute_total_score(&self, company: &CompanyRecord) -> f64 {
        self.pillar_totals(company).sum()
    }

    /// Maps a total to its risk tier using the configured thresholds.
    #[must_use]
    pub fn classify_risk(&self, total: f64) -> RiskTier {
        self.config.thresholds.classify(total)
    }

    /// One radar axis per criterion: taxonomy criteria first, in
    /// pillar-then-declaration order.
    ///
    /// Scores the company records for criteria the taxonomy does not know are
    /// appended after their pillar's criteria (sorted by name) with the
    /// fallback max score. Such a company yields more than `taxonomy.len()`
    /// points; the series has exactly one point per taxonomy criterion only
    /// when every scored criterion is registered, which dataset validation
    /// guarantees for loaded companies.
    #[must_use]
    pub fn build_radar_series(&self, company: &CompanyRecord) -> Vec<RadarPoint> {
        let limit = self.config.radar_label_limit;
        let mut out = Vec::with_capacity(self.taxonomy.len());
        for pillar in Pillar::ALL {
            for (criterion, score, max_score) in self.pillar_entries(company, pillar) {
                out.push(RadarPoint {
                    pillar,
                    label: truncate_label(&criterion, limit),
                    criterion,
                    score,
                    max_score,
                });
            }
        }
        out
    }

    /// The company's row in the cross-company comparison chart.
    #[must_use]
    pub fn build_comparison_row(&self, company: &CompanyRecord) -> ComparisonRow {
        let totals = self.pillar_totals(company);
        ComparisonRow {
            display_name: truncate_label(&company.name, self.config.display_name_limit),
            full_name: company.name.clone(),
            totals,
            total_score: totals.sum(),
            category: company.category.clone(),
        }
    }

    /// Pillar total relative to the pillar ceiling, for progress bars.
    #[must_use]
    pub fn pillar_progress(&self, company: &CompanyRecord, pillar: Pillar) -> PillarProgress {
        let total = self.compute_pillar_total(company, pillar);
        let ceiling = self.taxonomy.ceiling(pillar);
        let ratio = if ceiling > 0.0 { total / ceiling } else { 0.0 };
        PillarProgress {
            pillar,
            total,
            ceiling,
            ratio,
            display_ratio: ratio.clamp(0.0, 1.0),
        }
    }

    /// The overview card: stored and computed totals, risk label and pillar bars.
    #[must_use]
    pub fn score_card(&self, company: &CompanyRecord) -> ScoreCard {
        let pillars: Vec<_> = Pillar::ALL
            .into_iter()
            .map(|p| self.pillar_progress(company, p))
            .collect();
        let computed_total: f64 = pillars.iter().map(|p| p.total).sum();
        let risk = match self.config.risk_source {
            RiskSource::Stored => company.risk,
            RiskSource::Computed => self.classify_risk(computed_total),
        };
        ScoreCard {
            name: company.name.clone(),
            category: company.category.clone(),
            color: company.color.clone(),
            note: company.note.clone(),
            stored_total: company.total_score,
            computed_total,
            risk,
            exceeds_ceiling: computed_total > self.taxonomy.total_ceiling(),
            pillars,
        }
    }

    /// Compares the stored total and label with what the thresholds compute.
    ///
    /// The label check classifies the *stored* total, so a label is only
    /// flagged when it disagrees with the dataset's own number.
    #[must_use]
    pub fn risk_audit(&self, company: &CompanyRecord) -> RiskAudit {
        let computed_total = self.compute_total_score(company);
        let computed = self.classify_risk(company.total_score);
        RiskAudit {
            stored: company.risk,
            computed,
            stored_total: company.total_score,
            computed_total,
            label_consistent: computed == company.risk,
            total_consistent: (computed_total - company.total_score).abs() <= TOTAL_TOLERANCE,
        }
    }

    /// Per-criterion bars grouped by pillar, in the same order as the radar series.
    #[must_use]
    pub fn pillar_breakdown(&self, company: &CompanyRecord) -> Vec<PillarBreakdown> {
        Pillar::ALL
            .into_iter()
            .map(|pillar| PillarBreakdown {
                pillar,
                criteria: self
                    .pillar_entries(company, pillar)
                    .map(|(criterion, score, max_score)| CriterionBar {
                        criterion,
                        score,
                        max_score,
                        ratio: if max_score > 0.0 { score / max_score } else { 0.0 },
                    })
                    .collect(),
            })
            .collect()
    }

    /// `(criterion, score, max_score)` for one pillar: taxonomy criteria, then unknown extras.
    fn pillar_entries<'c>(
        &'c self,
        company: &'c CompanyRecord,
        pillar: Pillar,
    ) -> impl Iterator<Item = (String, f64, f64)> + 'c {
        let known = self.taxonomy.criteria(pillar).iter().map(move |c| {
            let score = company.scores.get(pillar, &c.name).unwrap_or(0.0);
            (c.name.clone(), score, c.weight)
        });
        let fallback = self.config.fallback_max_score;
        let extra = company
            .scores
            .pillar(pillar)
            .iter()
            .filter(move |(name, _)| self.taxonomy.find(pillar, name.as_str()).is_none())
            .map(move |(name, score)| (name.clone(), *score, fallback));
        known.chain(extra)
    }
}
