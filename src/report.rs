//! Plain-text rendering of a calculation

use crate::calculator::TrancheResult;
use crate::deal::RateConfig;
use crate::format::{format_currency, format_percent, format_quantity};
use crate::input::CalculationInput;
use std::fmt::Write;

/// Render the deal structure block on its own (shown even without a result)
pub fn render_deal_structure(rates: &RateConfig) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Deal Structure");
    let _ = writeln!(out, "  Total Discount:      {}%", rates.total_discount_percent);
    let _ = writeln!(out, "  Net Buyer Discount:  {}%", rates.net_buyer_discount_percent);
    let _ = writeln!(out, "  Seller Margin:       {}%", rates.seller_margin_percent);
    let _ = writeln!(out, "  Consultant Fee:      {}%", rates.consultant_fee_percent);
    out
}

/// Render the full report for a result
pub fn render(input: &CalculationInput, result: &TrancheResult, rates: &RateConfig) -> String {
    let mut out = render_deal_structure(rates);
    let r = result;

    let _ = writeln!(out);
    let _ = writeln!(out, "Single Tranche Analysis ({} BTC)", format_quantity(r.size));
    let _ = writeln!(
        out,
        "  Market Value:          {:>18}  ({} BTC x {})",
        format_currency(r.market_value),
        format_quantity(r.size),
        format_currency(input.unit_price),
    );
    let _ = writeln!(
        out,
        "  Buyer Pays:            {:>18}  ({} per BTC)",
        format_currency(r.buyer_pays),
        format_currency(r.effective_unit_price),
    );
    let _ = writeln!(out, "  Seller Net Payout:     {:>18}  (after consultant fee)", format_currency(r.seller_net_payout));
    let _ = writeln!(
        out,
        "  Consultant Commission: {:>18}  ({}% of market value)",
        format_currency(r.consultant_commission),
        rates.consultant_fee_percent,
    );
    let _ = writeln!(
        out,
        "  Buyer Savings:         {:>18}  ({} discount achieved)",
        format_currency(r.buyer_savings),
        format_percent(r.actual_buyer_discount_percent),
    );

    let _ = writeln!(out);
    let _ = writeln!(out, "Payment Flow");
    let _ = writeln!(out, "  Buyer -> Seller:       {:>18}", format_currency(r.buyer_pays));
    let _ = writeln!(out, "  Seller -> Consultant:  {:>18}", format_currency(r.consultant_commission));
    let _ = writeln!(out, "  Seller Net:            {:>18}", format_currency(r.seller_net_payout));

    let _ = writeln!(out);
    let _ = writeln!(out, "Full Contract Summary ({} BTC target)", format_quantity(input.total_target));
    let _ = writeln!(out, "  Transactions Needed:   {:>18}", r.transactions_needed);
    let _ = writeln!(out, "  Total Contract Value:  {:>18}", format_currency(r.total_contract_value));
    let _ = writeln!(out, "  Total Buyer Payment:   {:>18}", format_currency(r.total_buyer_pays));
    let _ = writeln!(out, "  Total Seller Payout:   {:>18}", format_currency(r.total_seller_payout));
    let _ = writeln!(out, "  Total Consultant Fees: {:>18}", format_currency(r.total_consultant_fees));
    let _ = writeln!(out, "  Total Buyer Savings:   {:>18}", format_currency(r.total_buyer_savings));

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::CalculatorSession;

    #[test]
    fn test_render_reference_case() {
        let session = CalculatorSession::default();
        let text = render(session.input(), session.result().unwrap(), session.rates());

        assert!(text.contains("Single Tranche Analysis (4,000 BTC)"));
        assert!(text.contains("$470,796,000"));
        assert!(text.contains("4,000 BTC x $117,699"));
        assert!(text.contains("$113,580 per BTC"));
        assert!(text.contains("$463,734,060"));
        assert!(text.contains("$7,061,940"));
        assert!(text.contains("3.50% discount achieved"));
        assert!(text.contains("Full Contract Summary (60,000 BTC target)"));
        assert!(text.contains("$7,061,940,000"));
    }

    #[test]
    fn test_deal_structure_lists_all_rates() {
        let text = render_deal_structure(&RateConfig::default());

        assert!(text.contains("Total Discount:      7%"));
        assert!(text.contains("Net Buyer Discount:  3.5%"));
        assert!(text.contains("Seller Margin:       2%"));
        assert!(text.contains("Consultant Fee:      1.5%"));
    }
}
