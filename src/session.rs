//! Calculator session and batch scenario runner
//!
//! The session holds the current inputs and the last valid result. Every
//! mutator calls `recompute()` itself, so callers never deal with a stale
//! result after changing an input.

use crate::calculator::{TrancheCalculator, TrancheResult};
use crate::deal::RateConfig;
use crate::input::{parse_amount_or_zero, CalculationInput, Scenario, TranchePreset};
use rayon::prelude::*;
use serde::Serialize;

/// Interactive calculator state
///
/// # Example
/// ```ignore
/// let mut session = CalculatorSession::default();
/// session.select_preset(TranchePreset::Btc5000);
/// let result = session.result().unwrap();
/// assert_eq!(result.transactions_needed, 12);
/// ```
#[derive(Debug, Clone)]
pub struct CalculatorSession {
    calculator: TrancheCalculator,
    input: CalculationInput,
    result: Option<TrancheResult>,
}

impl CalculatorSession {
    /// Create a session with default inputs and compute the initial result
    pub fn new(rates: RateConfig) -> Self {
        Self::with_input(rates, CalculationInput::default())
    }

    /// Create a session from explicit inputs
    pub fn with_input(rates: RateConfig, input: CalculationInput) -> Self {
        let mut session = Self {
            calculator: TrancheCalculator::new(rates),
            input,
            result: None,
        };
        session.recompute();
        session
    }

    /// Recalculate from the current inputs.
    ///
    /// Replaces the held result only when the inputs are valid; otherwise the
    /// previous result stays in place. Returns whether it was replaced.
    pub fn recompute(&mut self) -> bool {
        match self.calculator.calculate(&self.input) {
            Some(result) => {
                self.result = Some(result);
                true
            }
            None => false,
        }
    }

    pub fn set_unit_price(&mut self, unit_price: f64) -> bool {
        self.input.unit_price = unit_price;
        self.recompute()
    }

    /// Set the unit price from free text; unparsable text counts as zero
    pub fn set_unit_price_text(&mut self, text: &str) -> bool {
        self.set_unit_price(parse_amount_or_zero(text))
    }

    /// Pick a standard tranche size. Clears any custom override.
    pub fn select_preset(&mut self, preset: TranchePreset) -> bool {
        self.input.tranche_size = preset.size();
        self.input.custom_tranche_size = None;
        self.recompute()
    }

    pub fn set_custom_tranche_size(&mut self, text: impl Into<String>) -> bool {
        self.input.custom_tranche_size = Some(text.into());
        self.recompute()
    }

    pub fn clear_custom_tranche_size(&mut self) -> bool {
        self.input.custom_tranche_size = None;
        self.recompute()
    }

    pub fn set_total_target(&mut self, total_target: f64) -> bool {
        self.input.total_target = total_target;
        self.recompute()
    }

    /// Set the total target from free text; unparsable text counts as zero
    pub fn set_total_target_text(&mut self, text: &str) -> bool {
        self.set_total_target(parse_amount_or_zero(text))
    }

    pub fn input(&self) -> &CalculationInput {
        &self.input
    }

    pub fn result(&self) -> Option<&TrancheResult> {
        self.result.as_ref()
    }

    pub fn rates(&self) -> &RateConfig {
        self.calculator.rates()
    }
}

impl Default for CalculatorSession {
    fn default() -> Self {
        Self::new(RateConfig::default())
    }
}

/// Result of evaluating one scenario
#[derive(Debug, Clone, Serialize)]
pub struct ScenarioOutcome {
    pub label: String,
    pub input: CalculationInput,
    pub result: Option<TrancheResult>,
}

/// Evaluate scenarios in parallel; output order matches input order
pub fn run_scenarios(rates: &RateConfig, scenarios: &[Scenario]) -> Vec<ScenarioOutcome> {
    let calculator = TrancheCalculator::new(*rates);

    scenarios
        .par_iter()
        .map(|scenario| {
            let result = calculator.calculate(&scenario.input);
            if result.is_none() {
                log::warn!("Scenario {} produced no result", scenario.label);
            }
            ScenarioOutcome {
                label: scenario.label.clone(),
                input: scenario.input.clone(),
                result,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_result() {
        let session = CalculatorSession::default();
        let result = session.result().expect("default inputs are valid");

        assert_eq!(result.size, 4000.0);
        assert_eq!(result.transactions_needed, 15);
    }

    #[test]
    fn test_invalid_inputs_keep_previous_result() {
        let mut session = CalculatorSession::default();
        let before = session.result().cloned();

        assert!(!session.set_unit_price(0.0));
        assert_eq!(session.result().cloned(), before);

        assert!(!session.set_unit_price(-5.0));
        assert_eq!(session.result().cloned(), before);

        assert!(!session.set_unit_price_text("not a price"));
        assert_eq!(session.result().cloned(), before);
        assert_eq!(session.input().unit_price, 0.0);
    }

    #[test]
    fn test_unparsable_custom_keeps_previous_result() {
        let mut session = CalculatorSession::default();
        let before = session.result().cloned();

        assert!(!session.set_custom_tranche_size("abc"));
        assert_eq!(session.result().cloned(), before);

        assert!(!session.set_custom_tranche_size("-5"));
        assert_eq!(session.result().cloned(), before);

        assert!(session.clear_custom_tranche_size());
        assert_eq!(session.result().cloned(), before);
    }

    #[test]
    fn test_recovers_after_invalid_input() {
        let mut session = CalculatorSession::default();

        session.set_unit_price(0.0);
        assert!(session.set_unit_price(100_000.0));
        assert_eq!(session.result().unwrap().market_value, 400_000_000.0);
    }

    #[test]
    fn test_preset_selection_clears_custom() {
        let mut session = CalculatorSession::default();

        assert!(session.set_custom_tranche_size("4500"));
        assert_eq!(session.result().unwrap().size, 4500.0);

        assert!(session.select_preset(TranchePreset::Btc6000));
        assert_eq!(session.input().custom_tranche_size, None);
        assert_eq!(session.result().unwrap().size, 6000.0);
        assert_eq!(session.result().unwrap().transactions_needed, 10);
    }

    #[test]
    fn test_total_target_text() {
        let mut session = CalculatorSession::default();

        assert!(session.set_total_target_text("20000"));
        assert_eq!(session.result().unwrap().transactions_needed, 5);

        // Zero target is still a valid calculation
        assert!(session.set_total_target_text("junk"));
        assert_eq!(session.result().unwrap().transactions_needed, 0);
        assert_eq!(session.result().unwrap().total_contract_value, 0.0);
    }

    #[test]
    fn test_no_initial_result_for_invalid_input() {
        let input = CalculationInput::new(0.0, 4_000.0, 60_000.0);
        let session = CalculatorSession::with_input(RateConfig::default(), input);
        assert!(session.result().is_none());
    }

    #[test]
    fn test_run_scenarios_preserves_order() {
        let scenarios: Vec<Scenario> = [4_000.0, 5_000.0, 6_000.0, 0.0]
            .iter()
            .enumerate()
            .map(|(i, &size)| Scenario {
                label: format!("s{}", i),
                input: CalculationInput::new(117_699.0, size, 60_000.0),
            })
            .collect();

        let outcomes = run_scenarios(&RateConfig::default(), &scenarios);
        assert_eq!(outcomes.len(), 4);

        let counts: Vec<Option<u64>> = outcomes
            .iter()
            .map(|o| o.result.as_ref().map(|r| r.transactions_needed))
            .collect();
        assert_eq!(counts, vec![Some(15), Some(12), Some(10), None]);
        assert_eq!(outcomes[3].label, "s3");
    }
}
