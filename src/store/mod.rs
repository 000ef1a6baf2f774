use std::collections::HashMap;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

use crate::helpers::numeric::aggregate_f64;

pub mod csv_loader;
pub mod table;
pub mod table_db;

/// One CSV record keyed by header name. Values are kept as loaded.
pub type Row = HashMap<String, String>;

/// Error type used across the crate
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("File not found at path '{}'", .0.display())]
    FileNotFound(PathBuf),

    #[error("Non-numeric value {value:?} encountered in '{column}' column")]
    NumericParse { column: String, value: String },
}

/// Aggregate operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AggregateOp {
    /// Sum of all numeric values
    Sum,
    /// Count of numeric values
    Count,
    /// Arithmetic mean
    Average,
    /// Minimum value
    Min,
    /// Maximum value
    Max,
}

impl AggregateOp {
    /// Reduce `values`; `None` when there is nothing to reduce.
    pub fn apply(self, values: &[f64]) -> Option<f64> {
        aggregate_f64(values, self)
    }
}

impl fmt::Display for AggregateOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AggregateOp::Sum => "Sum",
            AggregateOp::Count => "Count",
            AggregateOp::Average => "Average",
            AggregateOp::Min => "Minimum",
            AggregateOp::Max => "Maximum",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_op_display() {
        assert_eq!(AggregateOp::Average.to_string(), "Average");
        assert_eq!(AggregateOp::Min.to_string(), "Minimum");
        assert_eq!(AggregateOp::Max.to_string(), "Maximum");
    }

    #[test]
    fn test_op_apply() {
        assert_eq!(AggregateOp::Max.apply(&[41.9, 45.4]), Some(45.4));
        assert_eq!(AggregateOp::Sum.apply(&[]), None);
    }

    #[test]
    fn test_error_messages() {
        let err = StoreError::FileNotFound(PathBuf::from("missing/Cities.csv"));
        assert_eq!(
            err.to_string(),
            "File not found at path 'missing/Cities.csv'"
        );

        let err = StoreError::NumericParse {
            column: "temperature".into(),
            value: "x".into(),
        };
        assert_eq!(
            err.to_string(),
            "Non-numeric value \"x\" encountered in 'temperature' column"
        );
    }
}
