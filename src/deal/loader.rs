//! CSV-based deal structure loader
//!
//! The file holds one `Parameter,Value` row per rate. Rows that are absent
//! keep their default value.

use super::RateConfig;
use crate::error::{CalculatorError, Result};
use csv::{ReaderBuilder, Trim};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Default path to the deal structure file
pub const DEFAULT_DEAL_PATH: &str = "data/deal/deal_structure.csv";

/// Load a rate configuration from a CSV file
pub fn load_rate_config(path: &Path) -> Result<RateConfig> {
    let file = File::open(path)?;
    let rates = load_rate_config_from_reader(file)?;
    log::info!("Loaded deal structure from {}", path.display());
    Ok(rates)
}

/// Load a rate configuration from any reader
pub fn load_rate_config_from_reader<R: Read>(reader: R) -> Result<RateConfig> {
    let mut reader = ReaderBuilder::new().trim(Trim::All).from_reader(reader);
    let mut rates = RateConfig::default();

    for result in reader.records() {
        let record = result?;
        let name = record.get(0).unwrap_or_default();
        let raw = record.get(1).unwrap_or_default();

        let value: f64 = raw
            .parse()
            .ok()
            .filter(|v: &f64| v.is_finite())
            .ok_or_else(|| CalculatorError::InvalidValue {
                field: name.to_string(),
                value: raw.to_string(),
            })?;

        match name {
            "total_discount" => rates.total_discount_percent = value,
            "net_buyer_discount" => rates.net_buyer_discount_percent = value,
            "seller_margin" => rates.seller_margin_percent = value,
            "consultant_fee" => rates.consultant_fee_percent = value,
            other => return Err(CalculatorError::UnknownParameter(other.to_string())),
        }
    }

    Ok(rates)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_partial_override_keeps_defaults() {
        let data = "Parameter,Value\nnet_buyer_discount, 4.0\nconsultant_fee,2.25\n";
        let rates = load_rate_config_from_reader(data.as_bytes()).unwrap();

        assert_eq!(rates.net_buyer_discount_percent, 4.0);
        assert_eq!(rates.consultant_fee_percent, 2.25);
        assert_eq!(rates.total_discount_percent, 7.0);
        assert_eq!(rates.seller_margin_percent, 2.0);
    }

    #[test]
    fn test_unknown_parameter_rejected() {
        let data = "Parameter,Value\nbroker_fee,1.0\n";
        let err = load_rate_config_from_reader(data.as_bytes()).unwrap_err();
        assert!(matches!(err, CalculatorError::UnknownParameter(ref name) if name == "broker_fee"));
    }

    #[test]
    fn test_unparsable_value_rejected() {
        let data = "Parameter,Value\nseller_margin,two\n";
        let err = load_rate_config_from_reader(data.as_bytes()).unwrap_err();
        assert!(matches!(err, CalculatorError::InvalidValue { ref field, .. } if field == "seller_margin"));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "Parameter,Value").unwrap();
        writeln!(file, "total_discount,8.0").unwrap();

        let rates = load_rate_config(file.path()).unwrap();
        assert_eq!(rates.total_discount_percent, 8.0);
        assert_eq!(rates.net_buyer_discount_percent, 3.5);
    }
}
