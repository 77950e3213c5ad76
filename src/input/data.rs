//! Calculation inputs as entered on the calculator form

use serde::{Deserialize, Serialize};

/// Default BTC price in USD
pub const DEFAULT_UNIT_PRICE: f64 = 117_699.0;

/// Default total quantity across all tranches
pub const DEFAULT_TOTAL_TARGET: f64 = 60_000.0;

/// Standard tranche sizes offered for selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TranchePreset {
    /// 4,000 BTC
    Btc4000,
    /// 5,000 BTC
    Btc5000,
    /// 6,000 BTC
    Btc6000,
}

impl TranchePreset {
    pub const ALL: [TranchePreset; 3] = [
        TranchePreset::Btc4000,
        TranchePreset::Btc5000,
        TranchePreset::Btc6000,
    ];

    /// Quantity per tranche
    pub fn size(&self) -> f64 {
        match self {
            TranchePreset::Btc4000 => 4_000.0,
            TranchePreset::Btc5000 => 5_000.0,
            TranchePreset::Btc6000 => 6_000.0,
        }
    }

    /// Match a quantity against the preset sizes
    pub fn from_size(size: f64) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.size() == size)
    }
}

impl Default for TranchePreset {
    fn default() -> Self {
        TranchePreset::Btc4000
    }
}

/// Parse a free-text numeric field.
///
/// Returns `None` for blank text, text that is not a number, and non-finite
/// values.
pub fn parse_amount(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Parse a free-text numeric field, coercing anything unparsable to zero
pub fn parse_amount_or_zero(text: &str) -> f64 {
    parse_amount(text).unwrap_or(0.0)
}

/// The four inputs tracked by the calculator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationInput {
    /// Price per BTC in USD
    pub unit_price: f64,

    /// Selected tranche size (normally one of the presets)
    pub tranche_size: f64,

    /// Free-text override for the tranche size; blank means no override
    pub custom_tranche_size: Option<String>,

    /// Total BTC quantity across all tranches
    pub total_target: f64,
}

impl Default for CalculationInput {
    fn default() -> Self {
        Self {
            unit_price: DEFAULT_UNIT_PRICE,
            tranche_size: TranchePreset::default().size(),
            custom_tranche_size: None,
            total_target: DEFAULT_TOTAL_TARGET,
        }
    }
}

impl CalculationInput {
    pub fn new(unit_price: f64, tranche_size: f64, total_target: f64) -> Self {
        Self {
            unit_price,
            tranche_size,
            custom_tranche_size: None,
            total_target,
        }
    }

    /// Set the custom tranche override
    pub fn with_custom_tranche_size(mut self, custom: impl Into<String>) -> Self {
        self.custom_tranche_size = Some(custom.into());
        self
    }

    /// The override text, if one is present and not blank
    pub fn custom_override(&self) -> Option<&str> {
        self.custom_tranche_size
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }

    /// Tranche size the calculation should use.
    ///
    /// A present override wins even when it does not parse, in which case
    /// there is no usable size at all.
    pub fn effective_tranche_size(&self) -> Option<f64> {
        match self.custom_override() {
            Some(text) => parse_amount(text),
            None => Some(self.tranche_size),
        }
    }
}
