//! Tranche economics calculator

mod engine;
mod result;

pub use engine::{TrancheCalculator, compute, transactions_needed};
pub use result::TrancheResult;
