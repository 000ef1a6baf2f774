//! Country statistics report over the `Cities` table.
//!
//! [`build_report`] computes every line as a [`ReportLine`]; [`run`] wires
//! loading, the [`TableDb`] and printing together and returns the process
//! exit status.

use std::{
    fmt,
    path::{Path, PathBuf},
};
use tracing::{error, info};

use crate::store::{AggregateOp, csv_loader::load_csv, table::Table, table_db::TableDb};

pub const CITIES_TABLE: &str = "Cities";
pub const COUNTRIES_TABLE: &str = "Countries";

const COUNTRY_COLUMN: &str = "country";
const TEMPERATURE_COLUMN: &str = "temperature";
const LATITUDE_COLUMN: &str = "latitude";

/// Inputs of a report run
#[derive(Debug, Clone, PartialEq)]
pub struct ReportConfig {
    /// Directory holding both CSV files
    pub data_dir: PathBuf,
    pub cities_file: String,
    pub countries_file: String,
    /// Countries whose average temperature is reported
    pub average_countries: Vec<String>,
    /// (country, op) pairs reported as min/max temperature lines
    pub extreme_queries: Vec<(String, AggregateOp)>,
}

impl Default for ReportConfig {
    fn default() -> Self {
        ReportConfig {
            data_dir: PathBuf::from("data"),
            cities_file: "Cities.csv".to_string(),
            countries_file: "Countries.csv".to_string(),
            average_countries: vec!["Italy".to_string(), "Sweden".to_string()],
            extreme_queries: vec![
                ("Italy".to_string(), AggregateOp::Min),
                ("Sweden".to_string(), AggregateOp::Max),
            ],
        }
    }
}

impl ReportConfig {
    pub fn with_data_dir(data_dir: impl AsRef<Path>) -> Self {
        ReportConfig {
            data_dir: data_dir.as_ref().to_path_buf(),
            ..Default::default()
        }
    }

    pub fn cities_path(&self) -> PathBuf {
        self.data_dir.join(&self.cities_file)
    }

    pub fn countries_path(&self) -> PathBuf {
        self.data_dir.join(&self.countries_file)
    }
}

/// One printed line of the report
#[derive(Debug, Clone, PartialEq)]
pub enum ReportLine {
    Temperature {
        country: String,
        op: AggregateOp,
        value: Option<f64>,
    },
    NoCities {
        country: String,
    },
    Blank,
    /// `None` when the country has no valid latitude
    Latitude {
        country: String,
        range: Option<(f64, f64)>,
    },
    /// A latitude cell passed the digit check but did not convert
    LatitudeError {
        country: String,
    },
}

impl fmt::Display for ReportLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportLine::Temperature { country, op, value } => write!(
                f,
                "{} temperature for cities in {}: {}",
                op,
                country,
                Number(*value)
            ),
            ReportLine::NoCities { country } => write!(f, "No cities found in {}.", country),
            ReportLine::Blank => Ok(()),
            ReportLine::Latitude {
                country,
                range: Some((min, max)),
            } => write!(
                f,
                "{}: Min Latitude = {:?}, Max Latitude = {:?}",
                country, min, max
            ),
            ReportLine::Latitude {
                country,
                range: None,
            } => write!(f, "{}: No valid latitude data.", country),
            ReportLine::LatitudeError { country } => {
                write!(f, "{}: Error converting latitude to float.", country)
            }
        }
    }
}

/// Renders an optional aggregate; absent values print as `None`.
struct Number(Option<f64>);

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(v) => write!(f, "{:?}", v),
            None => f.write_str("None"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CountryReport {
    pub lines: Vec<ReportLine>,
}

impl fmt::Display for CountryReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

/// Computes the full report over `cities`.
pub fn build_report(cities: &Table, config: &ReportConfig) -> CountryReport {
    let mut lines = Vec::new();

    for country in &config.average_countries {
        lines.push(temperature_line(cities, country, AggregateOp::Average));
    }
    for (country, op) in &config.extreme_queries {
        lines.push(temperature_line(cities, country, *op));
    }

    lines.push(ReportLine::Blank);

    for (country, group) in cities.partition_by(COUNTRY_COLUMN) {
        lines.push(latitude_line(country, &group));
    }

    CountryReport { lines }
}

fn temperature_line(cities: &Table, country: &str, op: AggregateOp) -> ReportLine {
    let rows = cities.filter_eq(COUNTRY_COLUMN, country);
    if rows.is_empty() {
        return ReportLine::NoCities {
            country: country.to_string(),
        };
    }

    let scoped = Table::new(format!("{}_{}", country, cities.name()), rows);
    ReportLine::Temperature {
        country: country.to_string(),
        op,
        value: scoped.aggregate(TEMPERATURE_COLUMN, op),
    }
}

fn latitude_line(country: String, group: &Table) -> ReportLine {
    let min = group.try_aggregate(LATITUDE_COLUMN, AggregateOp::Min);
    let max = group.try_aggregate(LATITUDE_COLUMN, AggregateOp::Max);
    match (min, max) {
        (Ok(min), Ok(max)) => ReportLine::Latitude {
            country,
            range: min.zip(max),
        },
        (Err(e), _) | (_, Err(e)) => {
            error!("{} ({})", e, group.name());
            ReportLine::LatitudeError { country }
        }
    }
}

/// Loads both datasets, prints the report and returns the exit status.
///
/// Returns 1 if either dataset is missing or empty, or if the `Cities`
/// table cannot be found; 0 otherwise.
pub fn run(config: &ReportConfig) -> i32 {
    let cities_data = load_csv(&config.cities_path());
    let countries_data = load_csv(&config.countries_path());

    if cities_data.is_empty() || countries_data.is_empty() {
        error!("Failed to load data. Exiting.");
        return 1;
    }

    let mut db = TableDb::new();
    db.insert(CITIES_TABLE, cities_data);
    db.insert(COUNTRIES_TABLE, countries_data);

    let Some(cities) = db.search(CITIES_TABLE) else {
        error!("'{}' table not found in the database.", CITIES_TABLE);
        return 1;
    };
    info!("{}, {} tables loaded", cities, db.len());

    print!("{}", build_report(cities, config));
    0
}
