mod model;

pub use model::Criterion;

use serde::Serialize;

use crate::core::Pillar;

/// The static table of weighted criteria, grouped by pillar.
///
/// Criteria keep their declaration order, and iteration always visits pillars
/// in [`Pillar::ALL`] order, so every series derived from a taxonomy has a
/// stable layout.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Taxonomy {
    pillars: [Vec<Criterion>; 3],
}

impl Taxonomy {
    /// Create a new builder.
    #[must_use]
    pub fn builder() -> TaxonomyBuilder {
        TaxonomyBuilder::default()
    }

    /// The ordered criteria of one pillar.
    #[must_use]
    pub fn criteria(&self, pillar: Pillar) -> &[Criterion] {
        &self.pillars[pillar.index()]
    }

    /// Every criterion in pillar-then-declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (Pillar, &Criterion)> + '_ {
        Pillar::ALL
            .into_iter()
            .flat_map(move |p| self.criteria(p).iter().map(move |c| (p, c)))
    }

    /// Number of criteria across all pillars.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pillars.iter().map(Vec::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Looks up a criterion by its exact name within a pillar.
    #[must_use]
    pub fn find(&self, pillar: Pillar, name: &str) -> Option<&Criterion> {
        self.criteria(pillar).iter().find(|c| c.name == name)
    }

    /// The configured weight of a criterion, if it exists.
    #[must_use]
    pub fn weight(&self, pillar: Pillar, name: &str) -> Option<f64> {
        self.find(pillar, name).map(|c| c.weight)
    }

    /// Maximum attainable points for a pillar: the sum of its weights.
    #[must_use]
    pub fn ceiling(&self, pillar: Pillar) -> f64 {
        self.criteria(pillar).iter().map(|c| c.weight).sum()
    }

    /// Sum of all pillar ceilings.
    #[must_use]
    pub fn total_ceiling(&self) -> f64 {
        Pillar::ALL.into_iter().map(|p| self.ceiling(p)).sum()
    }
}

/// Builder for [`Taxonomy`]. Criteria are appended in call order.
#[derive(Debug, Clone, Default)]
pub struct TaxonomyBuilder {
    pillars: [Vec<Criterion>; 3],
}

impl TaxonomyBuilder {
    /// Appends a criterion to `pillar`.
    #[must_use]
    pub fn criterion(
        mut self,
        pillar: Pillar,
        name: impl Into<String>,
        weight: f64,
        description: impl Into<String>,
    ) -> Self {
        self.pillars[pillar.index()].push(Criterion::new(name, weight, description));
        self
    }

    /// Appends an already-built criterion to `pillar`.
    pub(crate) fn push(&mut self, pillar: Pillar, criterion: Criterion) {
        self.pillars[pillar.index()].push(criterion);
    }

    /// Finishes the taxonomy. Uniqueness and weight checks belong to dataset validation.
    #[must_use]
    pub fn build(self) -> Taxonomy {
        Taxonomy {
            pillars: self.pillars,
        }
    }
}
