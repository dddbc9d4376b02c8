//! View models for a presentation layer.
//!
//! Selection lives in a caller-owned [`ViewState`]; the dashboard itself
//! holds no notion of what is selected and renders purely from its inputs.

mod model;

pub use model::{
    CompanyDetail, CriteriaModel, CriteriaSection, OverviewModel, Screen, View, ViewState,
};

use crate::aggregate::ScoreAggregator;
use crate::core::{EsgError, Pillar, ScorecardConfig};
use crate::dataset::Dataset;

/// Maps a dataset plus explicit view state to screen models.
#[derive(Debug, Clone)]
pub struct Dashboard<'a> {
    dataset: &'a Dataset,
    aggregator: ScoreAggregator<'a>,
}

impl<'a> Dashboard<'a> {
    #[must_use]
    pub fn new(dataset: &'a Dataset) -> Self {
        Self::with_config(dataset, ScorecardConfig::default())
    }

    #[must_use]
    pub const fn with_config(dataset: &'a Dataset, config: ScorecardConfig) -> Self {
        Self {
            dataset,
            aggregator: dataset.aggregator_with(config),
        }
    }

    #[must_use]
    pub const fn aggregator(&self) -> &ScoreAggregator<'a> {
        &self.aggregator
    }

    /// Builds the screen for `state`.
    ///
    /// # Errors
    ///
    /// Returns [`EsgError::UnknownCompany`] if the overview is requested with a
    /// selection that is not in the dataset.
    pub fn render(&self, state: &ViewState) -> Result<Screen, EsgError> {
        match state.view {
            View::Overview => self.overview(state.selected.as_deref()).map(Screen::Overview),
            View::Criteria => Ok(Screen::Criteria(self.criteria())),
        }
    }

    /// Cards and comparison rows for every company, plus the detail of `selected`.
    ///
    /// # Errors
    ///
    /// Returns [`EsgError::UnknownCompany`] if `selected` is not in the dataset.
    pub fn overview(&self, selected: Option<&str>) -> Result<OverviewModel, EsgError> {
        let companies = self.dataset.companies();
        let detail = selected.map(|name| self.detail(name)).transpose()?;
        Ok(OverviewModel {
            legend: self.aggregator.config().thresholds.bands().to_vec(),
            cards: companies.iter().map(|c| self.aggregator.score_card(c)).collect(),
            comparison: companies
                .iter()
                .map(|c| self.aggregator.build_comparison_row(c))
                .collect(),
            detail,
        })
    }

    /// Radar series and per-criterion bars for one company.
    ///
    /// # Errors
    ///
    /// Returns [`EsgError::UnknownCompany`] if `name` is not in the dataset.
    pub fn detail(&self, name: &str) -> Result<CompanyDetail, EsgError> {
        let company = self
            .dataset
            .company(name)
            .ok_or_else(|| EsgError::UnknownCompany(name.to_string()))?;
        Ok(CompanyDetail {
            name: company.name.clone(),
            color: company.color.clone(),
            radar: self.aggregator.build_radar_series(company),
            breakdown: self.aggregator.pillar_breakdown(company),
        })
    }

    /// The criteria screen: each pillar with its total weight, plus methodology notes.
    #[must_use]
    pub fn criteria(&self) -> CriteriaModel {
        let taxonomy = self.dataset.taxonomy();
        let methodology = self.dataset.methodology();
        CriteriaModel {
            title: format!("{} Industry Scoring Criteria", methodology.industry),
            sections: Pillar::ALL
                .into_iter()
                .map(|pillar| CriteriaSection {
                    pillar,
                    total_weight: taxonomy.ceiling(pillar),
                    criteria: taxonomy.criteria(pillar).to_vec(),
                })
                .collect(),
            notes: methodology.notes.clone(),
        }
    }
}
