//! BTC Tranche Calculator - deal economics for OTC Bitcoin tranche purchases
//!
//! This library provides:
//! - Single tranche and full contract figures from price, tranche size and target
//! - Deal structure (discount and fee rates) with CSV overrides
//! - An explicit-recompute calculator session and a parallel scenario runner
//! - JSON export and plain-text reporting

pub mod error;
pub mod deal;
pub mod input;
pub mod calculator;
pub mod session;
pub mod export;
pub mod format;
pub mod report;

// Re-export commonly used types
pub use error::{CalculatorError, Result};
pub use deal::RateConfig;
pub use input::{CalculationInput, TranchePreset, Scenario};
pub use calculator::{TrancheCalculator, TrancheResult, compute};
pub use session::{CalculatorSession, ScenarioOutcome, run_scenarios};
pub use export::{ExportDocument, export_filename, export_to_dir, DEFAULT_EXPORT_PREFIX};
