//! Calculator inputs and scenario loading

mod data;
pub mod loader;

pub use data::{
    CalculationInput, TranchePreset, parse_amount, parse_amount_or_zero,
    DEFAULT_TOTAL_TARGET, DEFAULT_UNIT_PRICE,
};
pub use loader::{Scenario, load_scenarios, load_scenarios_from_reader};
