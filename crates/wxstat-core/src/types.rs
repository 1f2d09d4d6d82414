//! Core data types for daily weather observations

use serde::{Deserialize, Serialize};

/// Temperatures are whole degrees Fahrenheit, as recorded in the source table
pub type Fahrenheit = i32;

/// One day's observation: the date and its low/high temperatures
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DailyRecord {
    /// ISO-8601 date (or date-time) exactly as it appeared in the input
    pub date: String,

    #[serde(rename = "min")]
    pub min_temp: Fahrenheit,

    #[serde(rename = "max")]
    pub max_temp: Fahrenheit,
}

impl DailyRecord {
    pub fn new(date: impl Into<String>, min_temp: Fahrenheit, max_temp: Fahrenheit) -> Self {
        Self {
            date: date.into(),
            min_temp,
            max_temp,
        }
    }
}

/// Records in input row order. Order matters: extremes are traced back to
/// their day by position.
pub type Dataset = Vec<DailyRecord>;

/// Result of a min/max reduction
///
/// `index` points into the sequence that was reduced, not into a dataset.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Extreme {
    pub value: f64,
    pub index: usize,
}

impl Extreme {
    pub fn new(value: f64, index: usize) -> Self {
        Self { value, index }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_daily_record_serde() {
        let json = r#"{"date":"2021-07-06","min":49,"max":67}"#;
        let record: DailyRecord = serde_json::from_str(json).unwrap();

        assert_eq!(record, DailyRecord::new("2021-07-06", 49, 67));
        assert_eq!(serde_json::to_string(&record).unwrap(), json);
    }

    #[test]
    fn test_extreme_as_tuple_fields() {
        let extreme = Extreme::new(1.0, 2);
        assert_eq!((extreme.value, extreme.index), (1.0, 2));
    }
}
