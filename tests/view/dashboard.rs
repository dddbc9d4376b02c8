use esg_scorecard::{
    Dashboard, EsgError, Pillar, RiskSource, RiskTier, Screen, ScorecardConfig, View, ViewState,
};

use crate::common::{REFERENCE_COMPANIES, reference};

#[test]
fn overview_without_selection_has_no_detail() {
    let dataset = reference();
    let screen = Dashboard::new(&dataset).render(&ViewState::new()).unwrap();
    let Screen::Overview(overview) = screen else {
        panic!("default view should be the overview");
    };

    assert!(overview.detail.is_none());
    let legend: Vec<_> = overview
        .legend
        .iter()
        .map(|b| (b.tier, b.lower, b.upper))
        .collect();
    assert_eq!(
        legend,
        [
            (RiskTier::Low, Some(85.0), None),
            (RiskTier::Medium, Some(60.0), Some(85.0)),
            (RiskTier::High, None, Some(60.0)),
        ]
    );
    let names: Vec<_> = overview.cards.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, REFERENCE_COMPANIES);
    assert_eq!(overview.comparison.len(), 7);
    assert_eq!(overview.comparison[4].display_name, "American Electr...");
    assert_eq!(overview.comparison[4].full_name, "American Electric Power");
}

#[test]
fn selecting_a_company_adds_its_detail() {
    let dataset = reference();
    let dashboard = Dashboard::new(&dataset);
    let mut state = ViewState::new();
    state.toggle_company("Ormat Technologies");

    let Screen::Overview(overview) = dashboard.render(&state).unwrap() else {
        panic!("expected overview");
    };
    let detail = overview.detail.unwrap();
    assert_eq!(detail.name, "Ormat Technologies");
    assert_eq!(detail.color, "#95E1D3");
    assert_eq!(detail.radar.len(), 12);
    assert_eq!(detail.breakdown.len(), 3);
    assert_eq!(detail.breakdown[1].pillar, Pillar::Social);
    assert_eq!(detail.breakdown[1].criteria.len(), 4);

    state.toggle_company("Ormat Technologies");
    let Screen::Overview(overview) = dashboard.render(&state).unwrap() else {
        panic!("expected overview");
    };
    assert!(overview.detail.is_none());
}

#[test]
fn unknown_selection_is_an_error() {
    let dataset = reference();
    let mut state = ViewState::new();
    state.toggle_company("Chevron");
    let err = Dashboard::new(&dataset).render(&state).unwrap_err();
    assert!(matches!(err, EsgError::UnknownCompany(ref n) if n == "Chevron"), "{err}");
}

#[test]
fn criteria_view_lists_pillars_with_weights_and_notes() {
    let dataset = reference();
    let mut state = ViewState::new();
    state.toggle_company("Chevron");
    state.select_view(View::Criteria);

    // the criteria screen does not depend on the selection
    let Screen::Criteria(criteria) = Dashboard::new(&dataset).render(&state).unwrap() else {
        panic!("expected criteria screen");
    };
    assert_eq!(criteria.title, "Energy Industry Scoring Criteria");
    let weights: Vec<_> = criteria
        .sections
        .iter()
        .map(|s| (s.pillar, s.total_weight, s.criteria.len()))
        .collect();
    assert_eq!(
        weights,
        [
            (Pillar::Environmental, 60.0, 5),
            (Pillar::Social, 30.0, 4),
            (Pillar::Governance, 10.0, 3),
        ]
    );
    assert_eq!(criteria.sections[0].criteria[0].weight, 20.0);
    assert!(criteria.notes[4].contains("exceed 100 points"));
}

#[test]
fn cards_follow_configured_risk_source() {
    let dataset = reference();
    let config = ScorecardConfig::builder()
        .risk_source(RiskSource::Computed)
        .thresholds(87.0, 65.0)
        .build();
    let overview = Dashboard::with_config(&dataset, config)
        .overview(None)
        .unwrap();

    let risk_of = |name: &str| {
        overview
            .cards
            .iter()
            .find(|c| c.name == name)
            .map(|c| c.risk)
            .unwrap()
    };
    assert_eq!(risk_of("American Electric Power"), RiskTier::Medium);
    assert_eq!(risk_of("Phillips 66"), RiskTier::High);
    assert_eq!(risk_of("Ormat Technologies"), RiskTier::Low);
    assert_eq!(overview.legend[0].lower, Some(87.0));
    assert_eq!(overview.legend[2].upper, Some(65.0));
}
