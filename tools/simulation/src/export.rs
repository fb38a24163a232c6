//! Per-step records and CSV export.
//!
//! One `StepRecord` per simulation step, with the same columns the
//! downstream analysis reads: market state, the arrival (if any), and
//! the maker's belief against the true value.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Snapshot of one simulation step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StepRecord {
    pub time: f64,
    pub arrival: bool,
    pub trader_type: String,
    pub order_type: String,
    pub is_buy: bool,
    pub quantity: f64,
    pub exec_price_avg: f64,
    pub num_trades: usize,
    pub best_bid: f64,
    pub best_ask: f64,
    pub spread: f64,
    pub belief_p: f64,
    pub true_value: f64,
    pub fees: f64,
}

/// Write records to a CSV file with a header row.
pub fn write_csv(path: &Path, records: &[StepRecord]) -> csv::Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;
    Ok(())
}

/// Render records as an in-memory CSV string.
pub fn to_csv_string(records: &[StepRecord]) -> csv::Result<String> {
    let mut buffer = Vec::new();
    {
        let mut writer = csv::Writer::from_writer(&mut buffer);
        for record in records {
            writer.serialize(record)?;
        }
        writer.flush()?;
    }
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> StepRecord {
        StepRecord {
            time: 0.42,
            arrival: true,
            trader_type: "noise".to_string(),
            order_type: "LIMIT".to_string(),
            is_buy: true,
            quantity: 3.0,
            exec_price_avg: 100.5,
            num_trades: 1,
            best_bid: 99.0,
            best_ask: 101.0,
            spread: 2.0,
            belief_p: 0.55,
            true_value: 110.0,
            fees: 0.603,
        }
    }

    #[test]
    fn csv_has_header_and_one_row_per_record() {
        let csv = to_csv_string(&[sample(), sample()]).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("time,arrival,trader_type,order_type,is_buy"));
        assert!(lines[1].contains("noise"));
        assert!(lines[1].contains("LIMIT"));
    }

    #[test]
    fn empty_input_yields_no_rows() {
        let csv = to_csv_string(&[]).unwrap();
        assert!(csv.is_empty());
    }

    #[test]
    fn record_round_trips_through_json() {
        let record = sample();
        let json = serde_json::to_string(&record).unwrap();
        let back: StepRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }
}
