//! Render a wellness report for a single profile
//!
//! Reads the profile JSON the host application persists after onboarding,
//! scores it, and prints the factor breakdown, goal progress, and the tax
//! regime comparison.

use anyhow::{bail, Context, Result};
use chrono::{Local, NaiveDate};
use clap::Parser;
use financial_wellness::profile::load_profile;
use financial_wellness::tax::{compare_regimes, TaxInputs};
use financial_wellness::{format_inr, goal_progress, ScoreEngine};
use std::fs::File;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(about = "Financial wellness report for one profile")]
struct Args {
    /// Profile JSON file
    profile: PathBuf,

    /// Tax inputs JSON (salary, other income, itemized deductions).
    /// Defaults to the annualized profile income with no deductions.
    #[arg(long)]
    tax: Option<PathBuf>,

    /// Score as of this date instead of today (YYYY-MM-DD)
    #[arg(long)]
    as_of: Option<NaiveDate>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let state = load_profile(&args.profile)
        .with_context(|| format!("loading {}", args.profile.display()))?;
    let Some(profile) = state.profile() else {
        bail!(
            "{} holds no financial data yet; complete onboarding first",
            args.profile.display()
        );
    };

    let as_of = args.as_of.unwrap_or_else(|| Local::now().date_naive());
    let result = ScoreEngine::new(as_of).score_profile(profile);

    println!(
        "Wellness report for {} (age {}, {})",
        if profile.name.is_empty() { "unnamed profile" } else { &profile.name },
        profile.age_on(as_of),
        result.persona.label()
    );
    println!();
    println!("  Net worth:        {}", format_inr(profile.net_worth()));
    println!("  Monthly income:   {}", format_inr(profile.monthly_income));
    println!("  Monthly expenses: {}", format_inr(profile.monthly_expenses));
    println!("  Monthly savings:  {}", format_inr(profile.monthly_savings()));
    if let Some(risk) = profile.risk_tolerance {
        println!("  Risk tolerance:   {}", risk.label());
    }

    println!();
    println!("Health score: {}/100", result.score);
    println!("  {:<12} {:>6} {:>7} {:>7}", "Factor", "Score", "Weight", "Points");
    let rows = [
        ("savings", result.sub_scores.savings, result.weights.savings),
        ("emergency", result.sub_scores.emergency, result.weights.emergency),
        ("debt", result.sub_scores.debt, result.weights.debt),
        ("insurance", result.sub_scores.insurance, result.weights.insurance),
        ("investment", result.sub_scores.investment, result.weights.investment),
    ];
    for (factor, score, weight) in rows {
        println!(
            "  {:<12} {:>6.2} {:>7.0} {:>7.1}",
            factor,
            score,
            weight,
            score * weight
        );
    }
    if result.savings_rate < 0.0 {
        println!("  Overspend penalty applied: -10");
    }

    let assessable: Vec<_> = profile
        .custom_goals
        .iter()
        .filter_map(|goal| goal_progress(goal).map(|progress| (goal, progress)))
        .collect();
    if !assessable.is_empty() {
        println!();
        println!("Goals:");
        for (goal, progress) in assessable {
            let deadline = goal
                .target_date
                .map(|date| format!(" by {}", date))
                .unwrap_or_default();
            println!(
                "  {:<20} {:>6.2}% of {}{} ({})",
                goal.name,
                progress.percent,
                format_inr(goal.target_amount),
                deadline,
                progress.status.label()
            );
        }
    }

    let inputs = match &args.tax {
        Some(path) => {
            let file =
                File::open(path).with_context(|| format!("opening {}", path.display()))?;
            serde_json::from_reader(file)
                .with_context(|| format!("parsing tax inputs in {}", path.display()))?
        }
        None => TaxInputs::from_profile(profile),
    };
    let comparison = compare_regimes(&inputs);

    println!();
    println!("Tax regime comparison on {} gross:", format_inr(inputs.gross_income()));
    println!(
        "  Old regime: {:>12}  (top slab {:.0}%)",
        format_inr(comparison.tax_old as f64),
        comparison.top_slab_old * 100.0
    );
    println!(
        "  New regime: {:>12}  (top slab {:.0}%)",
        format_inr(comparison.tax_new as f64),
        comparison.top_slab_new * 100.0
    );
    println!(
        "  The {} regime is better, saving {}",
        comparison.better.label(),
        format_inr(comparison.savings as f64)
    );

    Ok(())
}
