use std::{
    collections::{BTreeMap, BTreeSet},
    fmt,
};
use tracing::error;

use crate::{
    helpers::numeric::is_unsigned_decimal,
    store::{AggregateOp, Row, StoreError},
};

/// A named, ordered collection of rows
///
/// # Examples
///
/// ```rust
/// # use city_stats::{AggregateOp, Row, Table};
/// let rows: Vec<Row> = ["10", "20", "30"]
///     .iter()
///     .map(|v| Row::from([("value".to_string(), v.to_string())]))
///     .collect();
/// let table = Table::new("values", rows);
/// assert_eq!(table.aggregate("value", AggregateOp::Average), Some(20.0));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    name: String,
    rows: Vec<Row>,
}

impl Table {
    pub fn new(name: impl Into<String>, rows: Vec<Row>) -> Self {
        Table {
            name: name.into(),
            rows,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Rows matching `predicate`, in table order.
    pub fn filter<P>(&self, predicate: P) -> Vec<Row>
    where
        P: Fn(&Row) -> bool,
    {
        self.rows.iter().filter(|&row| predicate(row)).cloned().collect()
    }

    /// Rows whose `column` equals `value`. Rows without the column never match.
    pub fn filter_eq(&self, column: &str, value: &str) -> Vec<Row> {
        self.filter(|row| row.get(column).is_some_and(|v| v == value))
    }

    /// Aggregates a numeric column
    ///
    /// Cells that are missing, empty or not a non-negative decimal are
    /// skipped. Returns `None` when no cell qualifies; conversion failures
    /// are logged and also yield `None`.
    ///
    /// # Example
    /// ```rust
    /// # use city_stats::{AggregateOp, Table};
    /// let table = Table::new("empty", Vec::new());
    /// assert_eq!(table.aggregate("temperature", AggregateOp::Max), None);
    /// ```
    pub fn aggregate(&self, column: &str, op: AggregateOp) -> Option<f64> {
        self.aggregate_with(column, |values| op.apply(values))
    }

    /// Same as [`Table::aggregate`] with a caller-supplied reducer.
    ///
    /// The reducer is only called with a non-empty slice.
    pub fn aggregate_with<F>(&self, column: &str, reducer: F) -> Option<f64>
    where
        F: FnOnce(&[f64]) -> Option<f64>,
    {
        match self.numeric_values(column) {
            Ok(values) if values.is_empty() => None,
            Ok(values) => reducer(&values),
            Err(e) => {
                error!("{} ({})", e, self.name);
                None
            }
        }
    }

    /// Non-catching form of [`Table::aggregate`].
    pub fn try_aggregate(
        &self,
        column: &str,
        op: AggregateOp,
    ) -> Result<Option<f64>, StoreError> {
        let values = self.numeric_values(column)?;
        Ok(op.apply(&values))
    }

    /// Distinct values of `column`, sorted. Rows lacking the column are skipped.
    pub fn distinct(&self, column: &str) -> BTreeSet<String> {
        self.rows
            .iter()
            .filter_map(|row| row.get(column).cloned())
            .collect()
    }

    /// Splits the table into one sub-table per distinct `column` value,
    /// keyed and ordered by that value. Rows lacking the column are skipped.
    pub fn partition_by(&self, column: &str) -> BTreeMap<String, Table> {
        let mut groups: BTreeMap<String, Table> = BTreeMap::new();
        for row in &self.rows {
            if let Some(key) = row.get(column) {
                groups
                    .entry(key.clone())
                    .or_insert_with(|| Table::new(format!("{}_{}", key, self.name), Vec::new()))
                    .rows
                    .push(row.clone());
            }
        }
        groups
    }

    /// Group-by aggregation
    ///
    /// # Arguments
    /// * `group_col` - Column whose distinct values form the groups
    /// * `agg_col` - Numeric column to aggregate within each group
    /// * `op` - Aggregate operation
    ///
    /// # Returns
    /// Every group key mapped to its aggregate; groups without a valid
    /// numeric cell map to `None`.
    pub fn group_by(
        &self,
        group_col: &str,
        agg_col: &str,
        op: AggregateOp,
    ) -> BTreeMap<String, Option<f64>> {
        self.partition_by(group_col)
            .into_iter()
            .map(|(key, group)| {
                let value = group.aggregate(agg_col, op);
                (key, value)
            })
            .collect()
    }

    fn numeric_values(&self, column: &str) -> Result<Vec<f64>, StoreError> {
        self.rows
            .iter()
            .filter_map(|row| row.get(column))
            .filter(|v| is_unsigned_decimal(v))
            .map(|v| {
                fast_float::parse::<f64, _>(v).map_err(|_| StoreError::NumericParse {
                    column: column.to_string(),
                    value: v.clone(),
                })
            })
            .collect()
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Table({}): {} rows", self.name, self.rows.len())
    }
}
