use esg_scorecard::dataset::validate;
use esg_scorecard::{
    CompanyRecord, Dataset, EsgError, LoadOptions, Methodology, Pillar, RiskTier, Taxonomy,
};

use crate::common::{fixture, load_fixture, reference};

fn validation_errors(result: Result<Dataset, EsgError>) -> Vec<String> {
    match result {
        Err(EsgError::Validation(errors)) => errors,
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[test]
fn reference_outliers_are_warnings_not_errors() {
    let dataset = reference();
    assert!(
        dataset
            .warnings()
            .iter()
            .any(|w| w.contains("Exxon Mobil") && w.contains("Water Management")),
        "{:?}",
        dataset.warnings()
    );
    // NextEra exceeds the ceiling but carries a note, so it is not flagged for that
    assert!(
        !dataset
            .warnings()
            .iter()
            .any(|w| w.contains("NextEra Energy") && w.contains("ceiling"))
    );
}

#[test]
fn strict_mode_promotes_warnings() {
    let json = fixture("dataset_minimal");
    let errors = validation_errors(Dataset::from_json_str_with(
        &json,
        &LoadOptions::default().strict(true),
    ));
    assert!(
        errors.iter().any(|e| e.contains("Gulf Oil") && e.contains("Water")),
        "{errors:?}"
    );
}

#[test]
fn missing_scores_are_reported_as_warnings() {
    let dataset = load_fixture("dataset_minimal");
    assert!(
        dataset
            .warnings()
            .iter()
            .any(|w| w.contains("Gulf Oil") && w.contains("counted as 0"))
    );
}

#[test]
fn inconsistent_label_is_flagged_not_fixed() {
    let dataset = load_fixture("dataset_inconsistent_label");
    let company = dataset.company("Coastal Wind Partner").unwrap();
    assert_eq!(company.risk, RiskTier::Low);

    let audit = dataset.aggregator().risk_audit(company);
    assert!(!audit.label_consistent);
    assert!(audit.total_consistent);
    assert_eq!(audit.computed, RiskTier::High);
    assert!(
        dataset
            .warnings()
            .iter()
            .any(|w| w.contains("stored label 'Low Risk'"))
    );
}

#[test]
fn duplicate_criterion_is_an_error() {
    let errors = validation_errors(Dataset::from_json_str(&fixture(
        "dataset_duplicate_criterion",
    )));
    assert!(
        errors
            .iter()
            .any(|e| e.contains("duplicate criterion 'Emissions'")),
        "{errors:?}"
    );
}

#[test]
fn unknown_criterion_is_an_error() {
    let errors = validation_errors(Dataset::from_json_str(&fixture(
        "dataset_unknown_criterion",
    )));
    assert!(
        errors
            .iter()
            .any(|e| e.contains("'Lobbying' is not a social criterion")),
        "{errors:?}"
    );
}

#[test]
fn ceiling_mismatch_is_an_error() {
    let errors = validation_errors(Dataset::from_json_str_with(
        &fixture("dataset_minimal"),
        &LoadOptions::energy(),
    ));
    assert!(
        errors
            .iter()
            .any(|e| e.starts_with("environmental: criteria weights sum to 10")),
        "{errors:?}"
    );
}

#[test]
fn structural_errors_are_collected_together() {
    let taxonomy = Taxonomy::builder()
        .criterion(Pillar::Environmental, "Carbon", -1.0, "")
        .criterion(Pillar::Social, "", 5.0, "")
        .criterion(Pillar::Governance, "Board", 5.0, "")
        .build();
    let bad = CompanyRecord::builder("Dup", "Oil & Gas")
        .score(Pillar::Governance, "Board", f64::NAN)
        .color("orange")
        .build();
    let companies = vec![bad.clone(), bad];
    let dataset = Dataset::new(
        Methodology::default(),
        taxonomy,
        companies,
        &LoadOptions::default(),
    );
    let errors = validation_errors(dataset);

    for needle in [
        "invalid weight -1",
        "criterion with empty name",
        "duplicate company 'Dup'",
        "not of the form #RRGGBB",
        "score for 'Board' is invalid",
    ] {
        assert!(errors.iter().any(|e| e.contains(needle)), "{needle}: {errors:?}");
    }
}

#[test]
fn report_is_available_without_loading() {
    let dataset = load_fixture("dataset_minimal");
    let report = validate(&dataset, &LoadOptions::default());
    assert!(report.is_valid());
    assert_eq!(report.warnings, dataset.warnings());
}

#[test]
fn misspelled_pillar_in_company_scores_is_rejected() {
    let body = fixture("dataset_minimal").replace(r#""governance": {"#, r#""govenance": {"#);
    let err = Dataset::from_json_str(&body).unwrap_err();
    match err {
        EsgError::Json(e) => assert!(e.to_string().contains("unknown field `govenance`"), "{e}"),
        other => panic!("expected JSON error, got {other:?}"),
    }
}

#[test]
fn misspelled_pillar_in_criteria_is_rejected() {
    let body = fixture("dataset_minimal").replace(r#""social": ["#, r#""socail": ["#);
    let err = Dataset::from_json_str(&body).unwrap_err();
    match err {
        EsgError::Json(e) => assert!(e.to_string().contains("unknown field `socail`"), "{e}"),
        other => panic!("expected JSON error, got {other:?}"),
    }
}

#[test]
fn stored_total_mismatch_and_unannotated_excess_are_warnings() {
    let body = fixture("dataset_minimal").replace(r#""Emissions": 6,"#, r#""Emissions": 9,"#);
    let dataset = Dataset::from_json_str(&body).unwrap();
    let warnings = dataset.warnings();

    for needle in [
        "Coastal Wind Partner: stored total 20 differs from computed total 23",
        "Coastal Wind Partner: total 23 exceeds the ceiling of 20 without a note",
        "Coastal Wind Partner: 'Emissions' scores 9, above its weight of 6",
    ] {
        assert!(warnings.iter().any(|w| w == needle), "{needle}: {warnings:?}");
    }
}

#[test]
fn annotated_excess_is_not_flagged() {
    let body = fixture("dataset_minimal")
        .replace(r#""Emissions": 6,"#, r#""Emissions": 9,"#)
        .replace(
            r#""totalScore": 20,"#,
            r#""totalScore": 23, "note": "Exceptional performance","#,
        );
    let dataset = Dataset::from_json_str(&body).unwrap();
    assert!(
        !dataset.warnings().iter().any(|w| w.contains("ceiling")),
        "{:?}",
        dataset.warnings()
    );
    assert!(!dataset.warnings().iter().any(|w| w.contains("differs")));
}

#[test]
fn empty_pillar_is_a_warning() {
    let taxonomy = Taxonomy::builder()
        .criterion(Pillar::Environmental, "Carbon", 60.0, "")
        .criterion(Pillar::Social, "Safety", 40.0, "")
        .build();
    let dataset =
        Dataset::new(Methodology::default(), taxonomy, Vec::new(), &LoadOptions::default())
            .unwrap();
    assert_eq!(dataset.warnings(), ["governance: pillar has no criteria"]);

    let strict = Dataset::new(
        Methodology::default(),
        Taxonomy::builder()
            .criterion(Pillar::Environmental, "Carbon", 60.0, "")
            .criterion(Pillar::Social, "Safety", 40.0, "")
            .build(),
        Vec::new(),
        &LoadOptions::default().strict(true),
    );
    assert_eq!(validation_errors(strict), ["governance: pillar has no criteria"]);
}
