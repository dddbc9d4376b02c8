//! esg-scorecard: transparent ESG scoring for the energy sector.
//!
//! A fixed taxonomy of weighted criteria, grouped into environmental, social
//! and governance pillars, is applied to per-company raw scores to produce
//! pillar subtotals, totals, risk tiers and chart-ready series.
//!
//! ```
//! use esg_scorecard::{Dashboard, Dataset, Screen, ViewState};
//!
//! let dataset = Dataset::reference()?;
//! let mut state = ViewState::new();
//! state.toggle_company("NextEra Energy");
//!
//! let Screen::Overview(overview) = Dashboard::new(&dataset).render(&state)? else {
//!     unreachable!("default view is the overview");
//! };
//! assert_eq!(overview.cards.len(), 7);
//! assert!(overview.detail.is_some());
//! # Ok::<(), esg_scorecard::EsgError>(())
//! ```

pub mod aggregate;
pub mod company;
pub mod core;
pub mod dataset;
pub mod taxonomy;
pub mod view;

pub use aggregate::{
    ComparisonRow, CriterionBar, PillarBreakdown, PillarProgress, PillarTotals, RadarPoint,
    RiskAudit, ScoreAggregator, ScoreCard,
};
pub use company::{CompanyBuilder, CompanyRecord, PillarScores};
pub use crate::core::{
    EsgError, Pillar, RiskBand, RiskSource, RiskThresholds, RiskTier, ScorecardConfig,
    ScorecardConfigBuilder, classify_risk, truncate_label,
};
pub use dataset::{Dataset, LoadOptions, Methodology, ValidationReport};
pub use taxonomy::{Criterion, Taxonomy, TaxonomyBuilder};
pub use view::{
    CompanyDetail, CriteriaModel, CriteriaSection, Dashboard, OverviewModel, Screen, View,
    ViewState,
};

#[cfg(feature = "dataframe")]
pub use crate::core::dataframe::{ToDataFrame, ToDataFrameVec};
