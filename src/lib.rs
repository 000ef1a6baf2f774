//! # city_stats
//!
//! `city_stats` loads the `Cities.csv` and `Countries.csv` datasets into a
//! small in-memory table store and reports per-country statistics over them.
//!
//! - Memory-mapped CSV loading into header-keyed rows
//! - Lenient numeric coercion (non-numeric cells are skipped, not fatal)
//! - Predicate filtering, aggregation and group-by over a [`Table`]
//! - A name-indexed [`TableDb`] registry
//!
//! # Aggregations
//!
//! - **Sum**, **Count**, **Average**, **Min**, **Max** via [`AggregateOp`]
//! - Arbitrary reducers via [`Table::aggregate_with`]
//!
//! # Example
//!
//! ```rust,no_run
//! use city_stats::{AggregateOp, TableDb, load_csv};
//! use std::path::Path;
//!
//! let mut db = TableDb::new();
//! db.insert("Cities", load_csv(Path::new("data/Cities.csv")));
//!
//! if let Some(cities) = db.search("Cities") {
//!     let italy = cities.filter_eq("country", "Italy");
//!     println!("{} Italian cities", italy.len());
//!
//!     let avg = cities.aggregate("temperature", AggregateOp::Average);
//!     println!("Average temperature: {:?}", avg);
//!
//!     for (country, lat) in cities.group_by("country", "latitude", AggregateOp::Max) {
//!         println!("{country} => {lat:?}");
//!     }
//! }
//! ```

mod helpers;
pub mod report;
pub mod store;

pub use helpers::numeric::{is_unsigned_decimal, parse_numeric};
pub use report::{CountryReport, ReportConfig, ReportLine, build_report, run};
pub use store::{
    AggregateOp, Row, StoreError,
    csv_loader::{load_csv, try_load_csv},
    table::Table,
    table_db::TableDb,
};
