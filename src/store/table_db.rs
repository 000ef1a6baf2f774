use std::collections::HashMap;
use tracing::debug;

use crate::store::{Row, table::Table};

/// Name-indexed registry of tables
#[derive(Debug, Default)]
pub struct TableDb {
    tables: HashMap<String, Table>,
}

impl TableDb {
    pub fn new() -> Self {
        TableDb {
            tables: HashMap::new(),
        }
    }

    /// Stores `rows` as a table named `name`, replacing any table already
    /// registered under that name.
    pub fn insert(&mut self, name: &str, rows: Vec<Row>) {
        let table = Table::new(name, rows);
        debug!("insert {}", table);
        self.tables.insert(name.to_string(), table);
    }

    pub fn search(&self, name: &str) -> Option<&Table> {
        self.tables.get(name)
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    /// Registered table names, sorted.
    pub fn table_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.tables.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(n: usize) -> Vec<Row> {
        (0..n)
            .map(|i| Row::from([("id".to_string(), i.to_string())]))
            .collect()
    }

    #[test]
    fn test_insert_then_search() {
        let mut db = TableDb::new();
        db.insert("Cities", rows(4));

        let table = db.search("Cities").unwrap();
        assert_eq!(table.len(), 4);
        assert_eq!(table.name(), "Cities");
    }

    #[test]
    fn test_search_unknown() {
        let mut db = TableDb::new();
        assert!(db.search("Cities").is_none());
        db.insert("Countries", rows(1));
        assert!(db.search("Cities").is_none());
    }

    #[test]
    fn test_insert_overwrites() {
        let mut db = TableDb::new();
        db.insert("Cities", rows(4));
        db.insert("Cities", rows(2));

        assert_eq!(db.len(), 1);
        assert_eq!(db.search("Cities").unwrap().len(), 2);
    }

    #[test]
    fn test_table_names_sorted() {
        let mut db = TableDb::new();
        db.insert("Countries", rows(1));
        db.insert("Cities", rows(1));
        assert_eq!(db.table_names(), ["Cities", "Countries"]);
    }
}
