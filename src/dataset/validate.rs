//! Startup schema validation for loaded datasets.
//!
//! Errors make a dataset unusable. Warnings describe data-quality issues the
//! aggregator tolerates (outlier scores, stored totals or labels that differ
//! from a recomputation); they are reported, never corrected.

use std::collections::HashSet;

use crate::aggregate::ScoreAggregator;
use crate::core::Pillar;
use crate::dataset::{Dataset, LoadOptions, ValidationReport};

const CEILING_TOLERANCE: f64 = 1e-9;

/// Runs every check against `dataset`.
///
/// In strict mode warnings are moved into `errors`.
#[must_use]
pub fn validate(dataset: &Dataset, options: &LoadOptions) -> ValidationReport {
    let mut report = ValidationReport::default();

    validate_taxonomy(dataset, options, &mut report);
    validate_companies(dataset, &mut report);

    if options.strict && !report.warnings.is_empty() {
        let promoted = std::mem::take(&mut report.warnings);
        report.errors.extend(promoted);
    }
    report
}

fn validate_taxonomy(dataset: &Dataset, options: &LoadOptions, report: &mut ValidationReport) {
    let taxonomy = dataset.taxonomy();
    for pillar in Pillar::ALL {
        let criteria = taxonomy.criteria(pillar);
        if criteria.is_empty() {
            report.warn(format!("{pillar}: pillar has no criteria"));
        }

        let mut seen = HashSet::new();
        for c in criteria {
            if c.name.trim().is_empty() {
                report.error(format!("{pillar}: criterion with empty name"));
            } else if !seen.insert(c.name.as_str()) {
                report.error(format!("{pillar}: duplicate criterion '{}'", c.name));
            }
            if !c.weight.is_finite() || c.weight <= 0.0 {
                report.error(format!(
                    "{pillar}: criterion '{}' has invalid weight {}",
                    c.name, c.weight
                ));
            }
        }

        if let Some(expected) = options.expected_ceilings {
            let want = expected[pillar.index()];
            let got = taxonomy.ceiling(pillar);
            if (got - want).abs() > CEILING_TOLERANCE {
                report.error(format!(
                    "{pillar}: criteria weights sum to {got}, expected ceiling {want}"
                ));
            }
        }
    }
}

fn validate_companies(dataset: &Dataset, report: &mut ValidationReport) {
    let taxonomy = dataset.taxonomy();
    let agg = ScoreAggregator::new(taxonomy);
    let total_ceiling = taxonomy.total_ceiling();
    let mut names = HashSet::new();

    for company in dataset.companies() {
        let name = company.name.as_str();
        if name.trim().is_empty() {
            report.error("company with empty name".to_string());
        } else if !names.insert(name) {
            report.error(format!("duplicate company '{name}'"));
        }
        if !is_hex_color(&company.color) {
            report.error(format!(
                "{name}: color '{}' is not of the form #RRGGBB",
                company.color
            ));
        }
        if !company.total_score.is_finite() {
            report.error(format!("{name}: stored total is not a finite number"));
            continue;
        }

        for (pillar, criterion, score) in company.scores.iter() {
            if !score.is_finite() || score < 0.0 {
                report.error(format!(
                    "{name}: {pillar} score for '{criterion}' is invalid ({score})"
                ));
                continue;
            }
            match taxonomy.weight(pillar, criterion) {
                None => report.error(format!(
                    "{name}: '{criterion}' is not a {pillar} criterion"
                )),
                Some(weight) if score > weight => report.warn(format!(
                    "{name}: '{criterion}' scores {score}, above its weight of {weight}"
                )),
                Some(_) => {}
            }
        }
        for (pillar, c) in taxonomy.iter() {
            if company.scores.get(pillar, &c.name).is_none() {
                report.warn(format!(
                    "{name}: no {pillar} score for '{}', counted as 0",
                    c.name
                ));
            }
        }

        let audit = agg.risk_audit(company);
        if !audit.total_consistent {
            report.warn(format!(
                "{name}: stored total {} differs from computed total {}",
                audit.stored_total, audit.computed_total
            ));
        }
        if !audit.label_consistent {
            report.warn(format!(
                "{name}: stored label '{}' but a total of {} classifies as '{}'",
                audit.stored, audit.stored_total, audit.computed
            ));
        }
        if audit.computed_total > total_ceiling && company.note.is_none() {
            report.warn(format!(
                "{name}: total {} exceeds the ceiling of {total_ceiling} without a note",
                audit.computed_total
            ));
        }
    }
}

fn is_hex_color(s: &str) -> bool {
    s.strip_prefix('#')
        .is_some_and(|hex| hex.len() == 6 && hex.chars().all(|c| c.is_ascii_hexdigit()))
}
