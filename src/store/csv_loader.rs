use memmap2::Mmap;
use std::{fs::File, io::ErrorKind, path::Path};
use tracing::{debug, error};

use crate::store::{Row, StoreError};

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Loads a CSV file into header-keyed rows, in file order.
///
/// Never fails: a missing or unreadable file is logged and yields an empty
/// vector. Use [`try_load_csv`] to get the error instead.
///
/// # Example
/// ```rust,no_run
/// # use city_stats::load_csv;
/// let rows = load_csv("data/Cities.csv".as_ref());
/// println!("{} cities", rows.len());
/// ```
pub fn load_csv(path: &Path) -> Vec<Row> {
    match try_load_csv(path) {
        Ok(rows) => rows,
        Err(e @ StoreError::FileNotFound(_)) => {
            error!("{e}. Please check the file location.");
            Vec::new()
        }
        Err(e) => {
            error!("An error occurred while reading '{}': {}", path.display(), e);
            Vec::new()
        }
    }
}

/// Memory-maps `path` and parses it with a header-aware reader.
///
/// # Errors
/// Returns a [`StoreError`] if:
/// - the file does not exist ([`StoreError::FileNotFound`])
/// - the file cannot be opened or mapped
/// - a record is not valid CSV / UTF-8
pub fn try_load_csv(path: &Path) -> Result<Vec<Row>, StoreError> {
    let file = File::open(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => StoreError::FileNotFound(path.to_path_buf()),
        _ => StoreError::Io(e),
    })?;

    if file.metadata()?.len() == 0 {
        debug!("{} is empty", path.display());
        return Ok(Vec::new());
    }

    // The mapping lives only for the duration of the parse.
    let mmap = unsafe { Mmap::map(&file)? };
    let buf: &[u8] = &mmap[..];
    let buf = buf.strip_prefix(UTF8_BOM).unwrap_or(buf);

    let rows = parse_rows(buf)?;
    debug!("loaded {} rows from {}", rows.len(), path.display());
    Ok(rows)
}

fn parse_rows(buf: &[u8]) -> Result<Vec<Row>, StoreError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(buf);

    let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        // Short records keep only the columns they have; extra fields are dropped.
        let row: Row = headers
            .iter()
            .zip(record.iter())
            .map(|(h, v)| (h.clone(), v.to_string()))
            .collect();
        rows.push(row);
    }

    Ok(rows)
}
