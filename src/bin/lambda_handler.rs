//! AWS Lambda handler for tranche calculations
//!
//! Accepts the calculator inputs as a JSON event and returns the export
//! document. Every field is optional and defaults to the calculator's
//! initial state.

use chrono::Utc;
use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use serde::{Deserialize, Serialize};
use tranche_calculator::export::DealStructure;
use tranche_calculator::input::{DEFAULT_TOTAL_TARGET, DEFAULT_UNIT_PRICE};
use tranche_calculator::{CalculationInput, CalculatorSession, ExportDocument, RateConfig, TranchePreset};

/// Input event
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationRequest {
    /// BTC price in USD (default: 117,699)
    #[serde(default = "default_btc_price")]
    pub btc_price: f64,

    /// Standard tranche size (default: 4,000)
    #[serde(default = "default_tranche_size")]
    pub tranche_size: f64,

    /// Custom tranche size, overrides `tranche_size` when not blank
    #[serde(default)]
    pub custom_tranche_size: Option<String>,

    /// Total BTC target (default: 60,000)
    #[serde(default = "default_total_target")]
    pub total_target: f64,

    /// Rate overrides; built-in deal structure when absent
    #[serde(default)]
    pub deal_structure: Option<DealStructure>,
}

fn default_btc_price() -> f64 { DEFAULT_UNIT_PRICE }
fn default_tranche_size() -> f64 { TranchePreset::default().size() }
fn default_total_target() -> f64 { DEFAULT_TOTAL_TARGET }

/// Output payload
#[derive(Debug, Serialize)]
pub struct CalculationResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document: Option<ExportDocument>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub execution_time_ms: u64,
}

async fn handler(event: LambdaEvent<CalculationRequest>) -> Result<CalculationResponse, Error> {
    let start = std::time::Instant::now();
    let request = event.payload;

    let rates = request
        .deal_structure
        .map(RateConfig::from)
        .unwrap_or_default();

    let input = CalculationInput {
        unit_price: request.btc_price,
        tranche_size: request.tranche_size,
        custom_tranche_size: request.custom_tranche_size,
        total_target: request.total_target,
    };

    let session = CalculatorSession::with_input(rates, input);
    let document = ExportDocument::from_session(&session, Utc::now());
    let error = match document {
        Some(_) => None,
        None => {
            log::warn!("Rejected request: {:?}", session.input());
            Some("btcPrice and tranche size must be positive numbers".to_string())
        }
    };

    Ok(CalculationResponse {
        document,
        error,
        execution_time_ms: start.elapsed().as_millis() as u64,
    })
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init();
    run(service_fn(handler)).await
}
