//! Run the calculator over every scenario in a CSV file
//!
//! Usage: run_scenarios [input.csv] [output.csv]
//!
//! Input columns: Label,UnitPrice,TrancheSize,CustomTrancheSize,TotalTarget.
//! Scenarios that produce no result are written with empty figures.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::time::Instant;
use tranche_calculator::input::loader::DEFAULT_SCENARIOS_PATH;
use tranche_calculator::input::load_scenarios;
use tranche_calculator::{run_scenarios, RateConfig, ScenarioOutcome};

#[derive(Parser, Debug)]
#[command(name = "run_scenarios", about = "Batch tranche calculations from CSV")]
struct Args {
    /// Scenario CSV
    #[arg(default_value = DEFAULT_SCENARIOS_PATH)]
    input: PathBuf,

    /// Output CSV
    #[arg(default_value = "scenario_output.csv")]
    output: PathBuf,

    /// Deal structure CSV (Parameter,Value)
    #[arg(long)]
    deal_config: Option<PathBuf>,
}

const HEADER: [&str; 15] = [
    "Label",
    "UnitPrice",
    "TrancheSize",
    "TotalTarget",
    "MarketValue",
    "BuyerPays",
    "SellerNetPayout",
    "ConsultantCommission",
    "BuyerSavings",
    "TransactionsNeeded",
    "TotalContractValue",
    "TotalBuyerPays",
    "TotalSellerPayout",
    "TotalConsultantFees",
    "TotalBuyerSavings",
];

fn to_record(outcome: &ScenarioOutcome) -> Vec<String> {
    let input = &outcome.input;
    let mut record = vec![
        outcome.label.clone(),
        format!("{:.2}", input.unit_price),
        input
            .effective_tranche_size()
            .map(|s| format!("{:.4}", s))
            .unwrap_or_default(),
        format!("{:.4}", input.total_target),
    ];

    match &outcome.result {
        Some(r) => {
            record.extend([
                format!("{:.2}", r.market_value),
                format!("{:.2}", r.buyer_pays),
                format!("{:.2}", r.seller_net_payout),
                format!("{:.2}", r.consultant_commission),
                format!("{:.2}", r.buyer_savings),
                r.transactions_needed.to_string(),
                format!("{:.2}", r.total_contract_value),
                format!("{:.2}", r.total_buyer_pays),
                format!("{:.2}", r.total_seller_payout),
                format!("{:.2}", r.total_consultant_fees),
                format!("{:.2}", r.total_buyer_savings),
            ]);
        }
        None => record.resize(HEADER.len(), String::new()),
    }

    record
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let start = Instant::now();

    let rates = match &args.deal_config {
        Some(path) => RateConfig::from_csv_path(path)
            .with_context(|| format!("loading deal structure from {}", path.display()))?,
        None => RateConfig::default(),
    };

    println!("Loading scenarios from {}...", args.input.display());
    let scenarios = load_scenarios(&args.input)
        .with_context(|| format!("loading scenarios from {}", args.input.display()))?;
    println!("Loaded {} scenarios in {:?}", scenarios.len(), start.elapsed());

    let outcomes = run_scenarios(&rates, &scenarios);
    let missing = outcomes.iter().filter(|o| o.result.is_none()).count();

    let mut writer = csv::Writer::from_path(&args.output)
        .with_context(|| format!("creating {}", args.output.display()))?;
    writer.write_record(HEADER)?;
    for outcome in &outcomes {
        writer.write_record(to_record(outcome))?;
    }
    writer.flush()?;

    println!("Output written to {}", args.output.display());
    if missing > 0 {
        println!("  {} scenario(s) had no valid result", missing);
    }
    println!("\nTotal time: {:?}", start.elapsed());

    Ok(())
}
