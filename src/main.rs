//! Debt Clock Engine CLI
//!
//! Reconstructs the historical window from the embedded baseline, projects
//! it forward under the chosen model, and prints the series with derived
//! metrics. Optionally writes the CSV export and runs the live counter.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;

use debt_clock_engine::{
    export, metrics, series,
    projection::{project, ProjectionParams, RepaymentPlan},
    reconstruction::{reconstruct, ReconstructionConfig},
    ticker::LiveTicker,
    GdpTable,
};

#[derive(Debug, Parser)]
#[command(name = "debt_clock_engine", about = "Debt simulation and projection engine")]
struct Args {
    /// Annual growth rate for reconstruction and organic projection (%)
    #[arg(long, default_value_t = 14.87)]
    growth_rate: f64,

    /// Years to project past the end of the historical window
    #[arg(long, default_value_t = 5)]
    horizon: u32,

    /// Annual repayment in billions; switches projection to the repayment model
    #[arg(long)]
    repayment: Option<f64>,

    /// Interest rate for the repayment model (%)
    #[arg(long, default_value_t = 5.0)]
    interest_rate: f64,

    /// First year of the historical window
    #[arg(long, default_value_t = 2000)]
    start_year: i32,

    /// Last year of the historical window
    #[arg(long, default_value_t = 2025)]
    end_year: i32,

    /// Exchange rate, local currency units per USD
    #[arg(long, default_value_t = 130.0)]
    exchange_rate: f64,

    /// Write the projected series as CSV to this path
    #[arg(long)]
    output: Option<PathBuf>,

    /// Run the live counter for this many seconds after printing
    #[arg(long, default_value_t = 0)]
    live_seconds: u64,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    println!("Debt Clock Engine v0.1.0");
    println!("========================\n");

    let sparse = series::static_baseline().context("loading embedded baseline")?;
    let config = ReconstructionConfig {
        start_year: args.start_year,
        end_year: args.end_year,
        growth_rate_percent: args.growth_rate,
        ..Default::default()
    };
    let historical = reconstruct(&sparse, &config)?;

    let params = ProjectionParams {
        growth_rate_percent: args.growth_rate,
        horizon_years: args.horizon,
        repayment: args.repayment.map(|amount| RepaymentPlan {
            annual_repayment_billions: amount,
            interest_rate_percent: args.interest_rate,
        }),
    };
    let projected = project(&historical, &params)?;

    match &params.repayment {
        Some(plan) => println!(
            "Repayment model: {:.2}B/year at {:.2}% interest, {} year horizon",
            plan.annual_repayment_billions, plan.interest_rate_percent, params.horizon_years
        ),
        None => println!(
            "Organic model: {:.2}% growth, {} year horizon",
            params.growth_rate_percent, params.horizon_years
        ),
    }
    println!();

    // Print series table
    println!("{:>5} {:>14} {:>14} {:>14} {:>12} {:>14}",
        "Year", "Total (B)", "External (B)", "Internal (B)", "Deficit (B)", "Per Citizen");
    println!("{}", "-".repeat(78));
    for record in &projected {
        println!("{:>5} {:>14.2} {:>14.2} {:>14.2} {:>12.2} {:>14}",
            record.year,
            record.total_debt,
            record.external_debt,
            record.internal_debt,
            record.budget_deficit,
            record
                .debt_per_citizen
                .map(|v| format!("{:.0}", v))
                .unwrap_or_else(|| "-".to_string()),
        );
    }

    // Derived metrics for the latest historical snapshot
    let latest = historical
        .last()
        .context("historical window is empty")?;
    let usd = metrics::convert_to_usd(latest, args.exchange_rate)?;
    let gdp = GdpTable::kenya_reference();
    let trend = metrics::debt_to_gdp(&historical, &gdp);
    let crossed = metrics::milestones_crossed(
        latest.total_debt,
        &metrics::DEFAULT_MILESTONES_BILLIONS,
    );

    println!("\nCurrent snapshot ({}):", latest.year);
    println!("  Total Debt: {:.2}B local ({:.2}B USD at {:.2}/USD)",
        latest.total_debt, usd.total_debt, args.exchange_rate);
    if let Some(per_citizen) = latest.debt_per_citizen {
        println!("  Debt per Citizen: ~{:.0} local", per_citizen);
    }
    if let Some(point) = trend.last() {
        println!("  Debt-to-GDP: {:.1}%", point.ratio_percent);
    }
    println!("  Milestones crossed: {}/{}",
        crossed,
        metrics::DEFAULT_MILESTONES_BILLIONS.len());

    if let Some(path) = &args.output {
        export::write_csv_path(&projected, path)
            .with_context(|| format!("writing CSV to {}", path.display()))?;
        println!("\nProjected series written to: {}", path.display());
    }

    if args.live_seconds > 0 {
        println!("\nLive counter (simulated, {}s):", args.live_seconds);
        let mut ticker = LiveTicker::from_series(&historical)?;
        for _ in 0..args.live_seconds {
            std::thread::sleep(Duration::from_secs(1));
            println!("  {:.2}B local", ticker.current_value() / 1e9);
        }
        ticker.stop();
    }

    Ok(())
}
