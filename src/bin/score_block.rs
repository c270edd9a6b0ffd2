//! Score an entire block of profiles from a CSV export
//!
//! Outputs per-profile scores and regime picks for comparison across the
//! block, plus a distribution summary.

use chrono::Local;
use financial_wellness::profile::load_profiles;
use financial_wellness::score::{HealthScoreResult, Persona, ScoreEngine};
use financial_wellness::tax::{compare_regimes, Regime, TaxComparison, TaxInputs};
use rayon::prelude::*;
use std::path::Path;
use std::time::Instant;

fn main() {
    env_logger::init();

    let start = Instant::now();
    let input_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "profiles.csv".to_string());

    println!("Loading profiles from {}...", input_path);
    let profiles = load_profiles(Path::new(&input_path)).expect("Failed to load profiles");
    println!("Loaded {} profiles in {:?}", profiles.len(), start.elapsed());

    if profiles.is_empty() {
        println!("No profiles to score.");
        return;
    }

    let engine = ScoreEngine::new(Local::now().date_naive());

    println!("Scoring profiles...");
    let score_start = Instant::now();

    // Pure per-profile computation, no ordering requirement between profiles
    let results: Vec<(HealthScoreResult, TaxComparison)> = profiles
        .par_iter()
        .map(|profile| {
            let health = engine.score_profile(profile);
            let tax = compare_regimes(&TaxInputs::from_profile(profile));
            (health, tax)
        })
        .collect();

    println!("Scoring complete in {:?}", score_start.elapsed());

    // Write per-profile output
    let output_path = "block_scores_output.csv";
    let mut writer = csv::Writer::from_path(output_path).expect("Failed to create output file");
    writer
        .write_record([
            "name",
            "persona",
            "score",
            "savings_rate_pct",
            "tax_old",
            "tax_new",
            "better_regime",
            "tax_savings",
        ])
        .expect("Failed to write header");

    for (profile, (health, tax)) in profiles.iter().zip(&results) {
        writer
            .write_record([
                profile.name.clone(),
                health.persona.label().to_string(),
                health.score.to_string(),
                format!("{:.1}", health.savings_rate),
                tax.tax_old.to_string(),
                tax.tax_new.to_string(),
                tax.better.label().to_string(),
                tax.savings.to_string(),
            ])
            .expect("Failed to write row");
    }
    writer.flush().expect("Failed to flush output");
    println!("Output written to {}", output_path);

    // Distribution summary
    let total = results.len();
    let average: f64 =
        results.iter().map(|(h, _)| h.score as f64).sum::<f64>() / total as f64;

    let mut below_50 = 0;
    let mut mid_band = 0;
    let mut top_band = 0;
    let mut young = 0;
    let mut family = 0;
    let mut established = 0;
    let mut new_cheaper = 0;

    for (health, tax) in &results {
        match health.score {
            0..=49 => below_50 += 1,
            50..=74 => mid_band += 1,
            _ => top_band += 1,
        }
        match health.persona {
            Persona::YoungAccumulator => young += 1,
            Persona::FamilyBuilder => family += 1,
            Persona::EstablishedProtector => established += 1,
        }
        if tax.better == Regime::New {
            new_cheaper += 1;
        }
    }

    println!("\nBlock Summary:");
    println!("  Profiles: {}", total);
    println!("  Average score: {:.1}", average);
    println!(
        "  Score bands: {} below 50, {} in 50-74, {} at 75+",
        below_50, mid_band, top_band
    );
    println!(
        "  Personas: {} Young Accumulator, {} Family Builder, {} Established Protector",
        young, family, established
    );
    println!(
        "  New regime cheaper for {} of {} profiles",
        new_cheaper, total
    );

    println!("\nTotal time: {:?}", start.elapsed());
}
