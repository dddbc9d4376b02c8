mod model;

pub use model::{CompanyRecord, PillarScores};

use crate::core::{Pillar, RiskTier};

impl CompanyRecord {
    /// Create a builder for a company with the given name and category tag.
    pub fn builder(name: impl Into<String>, category: impl Into<String>) -> CompanyBuilder {
        CompanyBuilder {
            record: CompanyRecord {
                name: name.into(),
                category: category.into(),
                scores: PillarScores::default(),
                total_score: 0.0,
                risk: RiskTier::High,
                color: String::from("#000000"),
                note: None,
            },
        }
    }
}

/// A builder for hand-assembled [`CompanyRecord`]s, mostly useful in tests and demos.
///
/// Stored total and risk default to `0.0` / `High Risk` until set.
#[derive(Debug, Clone)]
pub struct CompanyBuilder {
    record: CompanyRecord,
}

impl CompanyBuilder {
    /// Records a raw score for one criterion.
    #[must_use]
    pub fn score(mut self, pillar: Pillar, criterion: impl Into<String>, value: f64) -> Self {
        self.record.scores.insert(pillar, criterion, value);
        self
    }

    /// Sets the stored total score.
    #[must_use]
    pub const fn total_score(mut self, total: f64) -> Self {
        self.record.total_score = total;
        self
    }

    /// Sets the stored risk label.
    #[must_use]
    pub const fn risk(mut self, risk: RiskTier) -> Self {
        self.record.risk = risk;
        self
    }

    #[must_use]
    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.record.color = color.into();
        self
    }

    #[must_use]
    pub fn note(mut self, note: impl Into<String>) -> Self {
        self.record.note = Some(note.into());
        self
    }

    #[must_use]
    pub fn build(self) -> CompanyRecord {
        self.record
    }
}
