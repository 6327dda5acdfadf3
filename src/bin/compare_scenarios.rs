//! Compare what-if projection scenarios side by side
//!
//! Reconstructs the base series once, runs a grid of organic and repayment
//! scenarios in parallel, and writes per-year totals for each scenario to
//! scenario_comparison.csv.

use std::fs::File;
use std::io::Write;
use std::time::Instant;

use debt_clock_engine::{
    projection::{ProjectionParams, RepaymentPlan},
    reconstruction::ReconstructionConfig,
    series, ScenarioRunner,
};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let start = Instant::now();
    println!("Reconstructing base series from embedded baseline...");

    let sparse = series::static_baseline()?;
    let runner = ScenarioRunner::from_reconstruction(&sparse, &ReconstructionConfig::default())?;
    println!(
        "Base series: {} years in {:?}",
        runner.base_series().len(),
        start.elapsed()
    );

    // Scenario grid: organic growth sweep plus two repayment plans
    let mut labels = Vec::new();
    let mut params_set = Vec::new();
    for rate in [5.0, 10.0, 14.87] {
        labels.push(format!("organic_{rate}pct"));
        params_set.push(ProjectionParams {
            growth_rate_percent: rate,
            horizon_years: 10,
            repayment: None,
        });
    }
    for (repayment, interest) in [(500.0, 5.0), (1500.0, 5.0)] {
        labels.push(format!("repay_{repayment}B_at_{interest}pct"));
        params_set.push(ProjectionParams {
            growth_rate_percent: 0.0,
            horizon_years: 10,
            repayment: Some(RepaymentPlan {
                annual_repayment_billions: repayment,
                interest_rate_percent: interest,
            }),
        });
    }

    println!("Running {} scenarios...", params_set.len());
    let run_start = Instant::now();
    let results = runner.run_scenarios(&params_set)?;
    println!("Scenarios complete in {:?}", run_start.elapsed());

    // One row per projected year, one total-debt column per scenario
    let output_path = "scenario_comparison.csv";
    let mut file = File::create(output_path)?;
    writeln!(file, "Year,{}", labels.join(","))?;

    let base_len = runner.base_series().len();
    let horizon = results[0].len() - base_len;
    for offset in 0..horizon {
        let idx = base_len + offset;
        let year = results[0].records()[idx].year;
        let totals: Vec<String> = results
            .iter()
            .map(|series| format!("{:.2}", series.records()[idx].total_debt))
            .collect();
        writeln!(file, "{},{}", year, totals.join(","))?;
    }

    println!("Output written to {}", output_path);

    // Print final-year summary
    println!("\nFinal projected year:");
    for (label, result) in labels.iter().zip(&results) {
        if let Some(last) = result.last() {
            println!("  {:<24} {:>12.2}B total, {:>12.0} per citizen",
                label,
                last.total_debt,
                last.debt_per_citizen.unwrap_or(0.0));
        }
    }

    println!("\nTotal time: {:?}", start.elapsed());
    Ok(())
}
