//! Tranche calculation output

use serde::{Deserialize, Serialize};

/// Economics of a single tranche and of the full contract.
///
/// Always built in one piece by the calculator; never patched field by field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrancheResult {
    // Single tranche
    pub size: f64,
    pub market_value: f64,
    pub buyer_pays: f64,
    pub seller_net_payout: f64,
    pub consultant_commission: f64,
    pub buyer_savings: f64,
    /// Price per BTC after the buyer discount
    pub effective_unit_price: f64,
    pub actual_buyer_discount_percent: f64,
    pub actual_consultant_percent: f64,
    /// Seller payout relative to what the buyer pays, in percent
    pub seller_net_margin_percent: f64,

    // Full contract
    pub transactions_needed: u64,
    pub total_contract_value: f64,
    pub total_buyer_pays: f64,
    pub total_seller_payout: f64,
    pub total_consultant_fees: f64,
    pub total_buyer_savings: f64,
}
