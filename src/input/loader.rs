//! Load calculation scenarios from CSV

use super::CalculationInput;
use crate::error::Result;
use csv::{Reader, ReaderBuilder, Trim};
use serde::{Deserialize, Serialize};
use std::io::Read;
use std::path::Path;

/// Default path to the sample scenario file
pub const DEFAULT_SCENARIOS_PATH: &str = "data/scenarios.csv";

/// Raw CSV row
#[derive(Debug, Deserialize)]
struct CsvRow {
    #[serde(rename = "Label")]
    label: String,
    #[serde(rename = "UnitPrice")]
    unit_price: f64,
    #[serde(rename = "TrancheSize")]
    tranche_size: f64,
    #[serde(rename = "CustomTrancheSize", default)]
    custom_tranche_size: Option<String>,
    #[serde(rename = "TotalTarget")]
    total_target: f64,
}

impl CsvRow {
    fn to_scenario(self) -> Scenario {
        Scenario {
            label: self.label,
            input: CalculationInput {
                unit_price: self.unit_price,
                tranche_size: self.tranche_size,
                custom_tranche_size: self.custom_tranche_size.filter(|s| !s.trim().is_empty()),
                total_target: self.total_target,
            },
        }
    }
}

/// A named set of calculator inputs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub label: String,
    pub input: CalculationInput,
}

fn collect_rows<R: Read>(mut reader: Reader<R>) -> Result<Vec<Scenario>> {
    let mut scenarios = Vec::new();

    for result in reader.deserialize() {
        let row: CsvRow = result?;
        scenarios.push(row.to_scenario());
    }

    Ok(scenarios)
}

/// Load all scenarios from a CSV file
pub fn load_scenarios<P: AsRef<Path>>(path: P) -> Result<Vec<Scenario>> {
    let reader = ReaderBuilder::new().trim(Trim::All).from_path(path.as_ref())?;
    let scenarios = collect_rows(reader)?;
    log::info!("Loaded {} scenarios from {}", scenarios.len(), path.as_ref().display());
    Ok(scenarios)
}

/// Load scenarios from any reader (e.g., string buffer)
pub fn load_scenarios_from_reader<R: Read>(reader: R) -> Result<Vec<Scenario>> {
    collect_rows(ReaderBuilder::new().trim(Trim::All).from_reader(reader))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_from_reader() {
        let data = "\
Label,UnitPrice,TrancheSize,CustomTrancheSize,TotalTarget
base,117699,4000,,60000
custom,100000,5000,4500,60000
";
        let scenarios = load_scenarios_from_reader(data.as_bytes()).unwrap();
        assert_eq!(scenarios.len(), 2);

        assert_eq!(scenarios[0].label, "base");
        assert_eq!(scenarios[0].input.custom_tranche_size, None);
        assert_eq!(scenarios[0].input.effective_tranche_size(), Some(4000.0));

        assert_eq!(scenarios[1].input.custom_tranche_size.as_deref(), Some("4500"));
        assert_eq!(scenarios[1].input.effective_tranche_size(), Some(4500.0));
    }

    #[test]
    fn test_malformed_row_is_error() {
        let data = "Label,UnitPrice,TrancheSize,CustomTrancheSize,TotalTarget\nbad,price,4000,,60000\n";
        assert!(load_scenarios_from_reader(data.as_bytes()).is_err());
    }

    #[test]
    fn test_load_default_scenarios() {
        let scenarios = load_scenarios(DEFAULT_SCENARIOS_PATH).expect("Failed to load scenarios");
        assert!(!scenarios.is_empty());
        assert_eq!(scenarios[0].input, CalculationInput::default());
    }
}
