use serde::Serialize;

use crate::aggregate::{ComparisonRow, PillarBreakdown, RadarPoint, ScoreCard};
use crate::core::{Pillar, RiskBand};
use crate::taxonomy::Criterion;

/// Which screen the dashboard shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum View {
    /// Company cards, comparison chart and the selected company's detail.
    #[default]
    Overview,
    /// The scoring criteria and methodology notes.
    Criteria,
}

/// Explicit application state passed into [`crate::Dashboard::render`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct ViewState {
    pub view: View,
    pub selected: Option<String>,
}

impl ViewState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Switches screens. The company selection is kept.
    pub fn select_view(&mut self, view: View) {
        self.view = view;
    }

    /// Selects `name`, or clears the selection if `name` is already selected.
    pub fn toggle_company(&mut self, name: &str) {
        if self.selected.as_deref() == Some(name) {
            self.selected = None;
        } else {
            self.selected = Some(name.to_string());
        }
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }
}

/// Detailed breakdown of the selected company.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompanyDetail {
    pub name: String,
    pub color: String,
    pub radar: Vec<RadarPoint>,
    pub breakdown: Vec<PillarBreakdown>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OverviewModel {
    /// Score range of each risk tier under the configured thresholds.
    pub legend: Vec<RiskBand>,
    pub cards: Vec<ScoreCard>,
    pub comparison: Vec<ComparisonRow>,
    pub detail: Option<CompanyDetail>,
}

/// One pillar of the criteria screen.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CriteriaSection {
    pub pillar: Pillar,
    pub total_weight: f64,
    pub criteria: Vec<Criterion>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CriteriaModel {
    pub title: String,
    pub sections: Vec<CriteriaSection>,
    pub notes: Vec<String>,
}

/// Everything a renderer needs for one frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Screen {
    Overview(OverviewModel),
    Criteria(CriteriaModel),
}
