//! JSON export of a calculation
//!
//! The document bundles the inputs, the deal structure, and the single
//! tranche and full contract figures. Files are named
//! `{prefix}-{YYYY-MM-DD}.json`.

use crate::calculator::TrancheResult;
use crate::deal::RateConfig;
use crate::error::Result;
use crate::input::CalculationInput;
use crate::session::CalculatorSession;
use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Default filename prefix for exports
pub const DEFAULT_EXPORT_PREFIX: &str = "btc-tranche-calculation";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DealStructure {
    pub total_discount: f64,
    pub net_buyer_discount: f64,
    pub seller_margin: f64,
    pub consultant_fee: f64,
}

impl From<&RateConfig> for DealStructure {
    fn from(rates: &RateConfig) -> Self {
        Self {
            total_discount: rates.total_discount_percent,
            net_buyer_discount: rates.net_buyer_discount_percent,
            seller_margin: rates.seller_margin_percent,
            consultant_fee: rates.consultant_fee_percent,
        }
    }
}

impl From<DealStructure> for RateConfig {
    fn from(deal: DealStructure) -> Self {
        Self {
            total_discount_percent: deal.total_discount,
            net_buyer_discount_percent: deal.net_buyer_discount,
            seller_margin_percent: deal.seller_margin,
            consultant_fee_percent: deal.consultant_fee,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SingleTranche {
    pub market_value: f64,
    pub buyer_pays: f64,
    pub seller_net_payout: f64,
    pub consultant_commission: f64,
    pub buyer_savings: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FullContract {
    pub total_target: f64,
    pub transactions_needed: u64,
    pub total_contract_value: f64,
    pub total_buyer_pays: f64,
    pub total_seller_payout: f64,
    pub total_consultant_fees: f64,
    pub total_buyer_savings: f64,
}

/// Exported calculation document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportDocument {
    /// ISO-8601 UTC timestamp with millisecond precision
    pub calculation_date: String,
    pub unit_price: f64,
    /// Tranche size the result was computed with
    pub tranche_size: f64,
    pub deal_structure: DealStructure,
    pub single_tranche: SingleTranche,
    pub full_contract: FullContract,
}

impl ExportDocument {
    /// Build the document for a result.
    ///
    /// Price and target come from the current inputs; the tranche size is
    /// the effective size recorded on the result.
    pub fn new(
        input: &CalculationInput,
        result: &TrancheResult,
        rates: &RateConfig,
        calculated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            calculation_date: calculated_at.to_rfc3339_opts(SecondsFormat::Millis, true),
            unit_price: input.unit_price,
            tranche_size: result.size,
            deal_structure: DealStructure::from(rates),
            single_tranche: SingleTranche {
                market_value: result.market_value,
                buyer_pays: result.buyer_pays,
                seller_net_payout: result.seller_net_payout,
                consultant_commission: result.consultant_commission,
                buyer_savings: result.buyer_savings,
            },
            full_contract: FullContract {
                total_target: input.total_target,
                transactions_needed: result.transactions_needed,
                total_contract_value: result.total_contract_value,
                total_buyer_pays: result.total_buyer_pays,
                total_seller_payout: result.total_seller_payout,
                total_consultant_fees: result.total_consultant_fees,
                total_buyer_savings: result.total_buyer_savings,
            },
        }
    }

    /// Build the document for the session's current result, if any
    pub fn from_session(session: &CalculatorSession, calculated_at: DateTime<Utc>) -> Option<Self> {
        session
            .result()
            .map(|result| Self::new(session.input(), result, session.rates(), calculated_at))
    }

    /// Pretty-printed JSON
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Export filename for a given date
pub fn export_filename(prefix: &str, date: NaiveDate) -> String {
    format!("{}-{}.json", prefix, date.format("%Y-%m-%d"))
}

/// Write the session's result to `dir`.
///
/// Returns the written path, or `None` without touching the filesystem when
/// the session has no result yet.
pub fn export_to_dir(
    session: &CalculatorSession,
    dir: &Path,
    prefix: &str,
    now: DateTime<Utc>,
) -> Result<Option<PathBuf>> {
    let Some(document) = ExportDocument::from_session(session, now) else {
        log::debug!("Nothing to export: no result computed yet");
        return Ok(None);
    };

    let path = dir.join(export_filename(prefix, now.date_naive()));
    fs::write(&path, document.to_json_pretty()?)?;
    log::info!("Exported calculation to {}", path.display());

    Ok(Some(path))
}
