//! BTC Tranche Calculator CLI
//!
//! Command-line front end for the tranche calculator

use anyhow::{bail, Context, Result};
use chrono::Utc;
use clap::Parser;
use std::path::PathBuf;
use tranche_calculator::{
    export_to_dir, CalculationInput, CalculatorSession, ExportDocument, RateConfig,
    TranchePreset, DEFAULT_EXPORT_PREFIX,
};
use tranche_calculator::input::{DEFAULT_TOTAL_TARGET, DEFAULT_UNIT_PRICE};
use tranche_calculator::report;

#[derive(Parser, Debug)]
#[command(name = "tranche_calculator", version, about = "BTC tranche deal calculator")]
struct Cli {
    /// BTC price in USD
    #[arg(long, default_value_t = DEFAULT_UNIT_PRICE, allow_negative_numbers = true)]
    btc_price: f64,

    /// Standard tranche size (4000, 5000 or 6000 BTC)
    #[arg(long, default_value_t = 4000.0)]
    tranche: f64,

    /// Custom tranche size, overrides --tranche
    #[arg(long, allow_hyphen_values = true)]
    custom_tranche: Option<String>,

    /// Total BTC target across all tranches
    #[arg(long, default_value_t = DEFAULT_TOTAL_TARGET, allow_negative_numbers = true)]
    total_target: f64,

    /// Deal structure CSV (Parameter,Value); built-in rates when omitted
    #[arg(long)]
    deal_config: Option<PathBuf>,

    /// Directory to write the JSON export into
    #[arg(long)]
    export: Option<PathBuf>,

    /// Export filename prefix
    #[arg(long, default_value = DEFAULT_EXPORT_PREFIX)]
    prefix: String,

    /// Print the export document to stdout instead of the report
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let Some(preset) = TranchePreset::from_size(cli.tranche) else {
        bail!(
            "--tranche must be one of 4000, 5000 or 6000 (got {}); use --custom-tranche for other sizes",
            cli.tranche
        );
    };

    let rates = match &cli.deal_config {
        Some(path) => RateConfig::from_csv_path(path)
            .with_context(|| format!("loading deal structure from {}", path.display()))?,
        None => RateConfig::default(),
    };

    let input = CalculationInput {
        unit_price: cli.btc_price,
        tranche_size: preset.size(),
        custom_tranche_size: cli.custom_tranche.clone(),
        total_target: cli.total_target,
    };
    let session = CalculatorSession::with_input(rates, input);
    let now = Utc::now();

    if cli.json {
        match ExportDocument::from_session(&session, now) {
            Some(document) => println!("{}", document.to_json_pretty()?),
            None => eprintln!("No result: BTC price and tranche size must be positive"),
        }
    } else {
        println!("BTC Tranche Calculator v{}", env!("CARGO_PKG_VERSION"));
        println!("===========================\n");

        match session.result() {
            Some(result) => print!("{}", report::render(session.input(), result, session.rates())),
            None => {
                print!("{}", report::render_deal_structure(session.rates()));
                println!("\nNo result: BTC price and tranche size must be positive");
            }
        }
    }

    if let Some(dir) = &cli.export {
        let written = export_to_dir(&session, dir, &cli.prefix, now)
            .with_context(|| format!("exporting to {}", dir.display()))?;
        if let Some(path) = written {
            eprintln!("\nExport written to: {}", path.display());
        }
    }

    Ok(())
}
