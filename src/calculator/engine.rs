//! Closed-form tranche economics

use crate::deal::RateConfig;
use crate::input::{parse_amount, CalculationInput};
use super::result::TrancheResult;

/// Compute tranche economics from raw inputs.
///
/// `custom_tranche_size` overrides `tranche_size` when it is present and not
/// blank; an override that does not parse leaves no usable size. Returns
/// `None` when the unit price or the effective tranche size is not a positive
/// finite number, or the total target is not finite.
pub fn compute(
    unit_price: f64,
    tranche_size: f64,
    custom_tranche_size: Option<&str>,
    total_target: f64,
    rates: &RateConfig,
) -> Option<TrancheResult> {
    let size = match custom_tranche_size.map(str::trim).filter(|s| !s.is_empty()) {
        Some(text) => parse_amount(text)?,
        None => tranche_size,
    };

    if !is_positive(size) || !is_positive(unit_price) || !total_target.is_finite() {
        return None;
    }

    let discount_rate = rates.net_buyer_discount_rate();
    let fee_rate = rates.consultant_fee_rate();

    let effective_unit_price = unit_price * (1.0 - discount_rate);

    let market_value = size * unit_price;
    let buyer_pays = size * effective_unit_price;
    let consultant_commission = size * unit_price * fee_rate;
    let seller_net_payout = market_value - consultant_commission;
    let buyer_savings = market_value - buyer_pays;

    let total_contract_value = total_target * unit_price;
    let total_buyer_pays = total_target * effective_unit_price;
    let total_consultant_fees = total_target * unit_price * fee_rate;
    let total_seller_payout = total_contract_value - total_consultant_fees;
    let total_buyer_savings = total_contract_value - total_buyer_pays;

    Some(TrancheResult {
        size,
        market_value,
        buyer_pays,
        seller_net_payout,
        consultant_commission,
        buyer_savings,
        effective_unit_price,
        actual_buyer_discount_percent: buyer_savings / market_value * 100.0,
        actual_consultant_percent: consultant_commission / market_value * 100.0,
        seller_net_margin_percent: (seller_net_payout - buyer_pays) / buyer_pays * 100.0,
        transactions_needed: transactions_needed(total_target, size),
        total_contract_value,
        total_buyer_pays,
        total_seller_payout,
        total_consultant_fees,
        total_buyer_savings,
    })
}

/// Number of tranches needed to reach the target; a partial tranche counts
/// as a whole one. Non-positive targets need none.
pub fn transactions_needed(total_target: f64, size: f64) -> u64 {
    let count = (total_target / size).ceil();
    if count > 0.0 {
        count as u64
    } else {
        0
    }
}

fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

/// Calculator bound to a deal structure
#[derive(Debug, Clone, Default)]
pub struct TrancheCalculator {
    rates: RateConfig,
}

impl TrancheCalculator {
    pub fn new(rates: RateConfig) -> Self {
        Self { rates }
    }

    pub fn rates(&self) -> &RateConfig {
        &self.rates
    }

    /// Compute the result for a set of inputs
    pub fn calculate(&self, input: &CalculationInput) -> Option<TrancheResult> {
        let result = compute(
            input.unit_price,
            input.tranche_size,
            input.custom_tranche_size.as_deref(),
            input.total_target,
            &self.rates,
        );

        if result.is_none() {
            log::debug!(
                "No result for unit_price={} tranche_size={:?} total_target={}",
                input.unit_price,
                input.effective_tranche_size(),
                input.total_target,
            );
        }

        result
    }
}
