//! Prints both dashboard screens for the bundled energy-sector dataset.
//!
//! Run with: cargo run --example dashboard --features tracing-subscriber

use esg_scorecard::{Dashboard, Dataset, Pillar, Screen, View, ViewState};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    #[cfg(feature = "tracing-subscriber")]
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let dataset = Dataset::reference()?;
    let dashboard = Dashboard::new(&dataset);
    let mut state = ViewState::new();

    println!(
        "=== {} | {} Industry ESG Scores | {} ===\n",
        dataset.methodology().name,
        dataset.methodology().industry,
        dataset.methodology().year
    );

    state.toggle_company("NextEra Energy");
    if let Screen::Overview(overview) = dashboard.render(&state)? {
        for band in &overview.legend {
            let lower = band.lower.unwrap_or(0.0);
            match band.upper {
                Some(upper) => println!("{:<12} {lower}-<{upper}", band.tier),
                None => println!("{:<12} {lower}+", band.tier),
            }
        }
        println!();
        for card in &overview.cards {
            println!(
                "{:<26} {:<10} {:>6} {}",
                card.name, card.category, card.stored_total, card.risk
            );
            for bar in &card.pillars {
                println!(
                    "    {:<14} {:>5}/{:<3} {:>5.1}%",
                    bar.pillar,
                    bar.total,
                    bar.ceiling,
                    bar.display_ratio * 100.0
                );
            }
            if let Some(note) = &card.note {
                println!("    note: {note}");
            }
        }

        println!("\n--- comparison ---");
        for row in &overview.comparison {
            println!(
                "{:<18} {}: {:>5} {}: {:>5} {}: {:>5}  total {}",
                row.display_name,
                Pillar::Environmental.short(),
                row.totals.environmental,
                Pillar::Social.short(),
                row.totals.social,
                Pillar::Governance.short(),
                row.totals.governance,
                row.total_score
            );
        }

        if let Some(detail) = &overview.detail {
            println!("\n--- detailed breakdown: {} ---", detail.name);
            for point in &detail.radar {
                println!("{:<28} {:>4}/{}", point.label, point.score, point.max_score);
            }
        }
    }

    state.select_view(View::Criteria);
    if let Screen::Criteria(criteria) = dashboard.render(&state)? {
        println!("\n=== {} ===", criteria.title);
        for section in &criteria.sections {
            println!("\n{} (Total: {} points)", section.pillar, section.total_weight);
            for c in &section.criteria {
                println!("  {:<34} {:>3} pts  {}", c.name, c.weight, c.description);
            }
        }
        println!("\nMethodology notes:");
        for note in &criteria.notes {
            println!("  - {note}");
        }
    }

    for warning in dataset.warnings() {
        eprintln!("warning: {warning}");
    }
    Ok(())
}
