//! Deal structure: the fixed percentages that drive tranche economics

pub mod loader;

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Rate percentages for a deal, expressed in percent (3.5 = 3.5%)
///
/// Only `net_buyer_discount_percent` and `consultant_fee_percent` feed the
/// formulas. The other two are quoted deal terms carried through to the
/// report and export unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RateConfig {
    /// Headline discount off market quoted for the deal
    pub total_discount_percent: f64,

    /// Discount off market price the buyer actually receives
    pub net_buyer_discount_percent: f64,

    /// Margin quoted to the seller
    pub seller_margin_percent: f64,

    /// Consultant commission as a percentage of gross market value
    pub consultant_fee_percent: f64,
}

impl Default for RateConfig {
    fn default() -> Self {
        Self {
            total_discount_percent: 7.0,
            net_buyer_discount_percent: 3.5,
            seller_margin_percent: 2.0,
            consultant_fee_percent: 1.5,
        }
    }
}

impl RateConfig {
    /// Load the deal structure from the default location (data/deal/)
    pub fn from_csv() -> crate::Result<Self> {
        Self::from_csv_path(Path::new(loader::DEFAULT_DEAL_PATH))
    }

    /// Load the deal structure from a CSV file, starting from the defaults
    pub fn from_csv_path(path: &Path) -> crate::Result<Self> {
        loader::load_rate_config(path)
    }

    /// Buyer discount as a fraction (0.035 for 3.5%)
    pub fn net_buyer_discount_rate(&self) -> f64 {
        self.net_buyer_discount_percent / 100.0
    }

    /// Consultant fee as a fraction (0.015 for 1.5%)
    pub fn consultant_fee_rate(&self) -> f64 {
        self.consultant_fee_percent / 100.0
    }
}
