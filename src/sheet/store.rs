//! Grid data store
//!
//! Owns every row and the column schema. Cells are addressed by
//! (row index, column key); nothing outside the store holds references into it.

use super::column::{column_def, ColumnDef, COLUMNS};
use super::seed;
use super::SheetError;
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;

/// A scalar stored in a cell
///
/// Free text in practice. No type coercion is ever applied: a committed edit
/// is always stored as `Text`, whatever it looks like.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CellValue {
    Text(String),
    Number(i64),
}

impl CellValue {
    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Text(s) if s.is_empty())
    }
}

impl Default for CellValue {
    fn default() -> Self {
        CellValue::Text(String::new())
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Text(s) => f.write_str(s),
            CellValue::Number(n) => write!(f, "{}", n),
        }
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::Text(s.to_string())
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::Text(s)
    }
}

impl From<i64> for CellValue {
    fn from(n: i64) -> Self {
        CellValue::Number(n)
    }
}

/// One row of the sheet
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Row {
    pub id: u32,
    pub cells: HashMap<String, CellValue>,
}

impl Row {
    /// Build a row with every schema column present (blank unless given)
    pub fn new(id: u32, values: &[(&str, &str)]) -> Self {
        let mut cells: HashMap<String, CellValue> = COLUMNS
            .iter()
            .map(|c| (c.key.to_string(), CellValue::default()))
            .collect();
        for (key, value) in values {
            cells.insert((*key).to_string(), CellValue::from(*value));
        }
        Self { id, cells }
    }

    /// Value for a column, empty if unset
    pub fn get(&self, key: &str) -> CellValue {
        self.cells.get(key).cloned().unwrap_or_default()
    }

    #[allow(dead_code)]
    pub fn is_blank(&self) -> bool {
        self.cells.values().all(CellValue::is_empty)
    }
}

/// The authoritative row collection plus the fixed column schema
#[derive(Debug, Clone)]
pub struct GridStore {
    rows: Vec<Row>,
}

impl GridStore {
    /// Seed rows followed by the blank rows, ids ascending from 1
    pub fn initialize() -> Self {
        Self {
            rows: seed::seed_rows(),
        }
    }

    /// Build a store from arbitrary rows
    #[allow(dead_code)]
    pub fn from_rows(rows: Vec<Row>) -> Self {
        Self { rows }
    }

    pub fn columns(&self) -> &'static [ColumnDef] {
        &COLUMNS
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn row(&self, index: usize) -> Result<&Row, SheetError> {
        self.rows.get(index).ok_or(SheetError::RowOutOfBounds {
            index,
            len: self.rows.len(),
        })
    }

    /// Current value at (row, column); empty string if the cell was never set
    pub fn get_cell(&self, row: usize, key: &str) -> Result<CellValue, SheetError> {
        Self::check_column(key)?;
        Ok(self.row(row)?.get(key))
    }

    /// Stringified value at (row, column), as shown in the grid
    pub fn display_value(&self, row: usize, key: &str) -> Result<String, SheetError> {
        self.get_cell(row, key).map(|v| v.to_string())
    }

    /// Replace exactly one cell. Every other row and cell is left untouched.
    pub fn set_cell(
        &mut self,
        row: usize,
        key: &str,
        value: impl Into<CellValue>,
    ) -> Result<(), SheetError> {
        Self::check_column(key)?;
        let len = self.rows.len();
        let target = self
            .rows
            .get_mut(row)
            .ok_or(SheetError::RowOutOfBounds { index: row, len })?;
        target.cells.insert(key.to_string(), value.into());
        Ok(())
    }

    fn check_column(key: &str) -> Result<(), SheetError> {
        match column_def(key) {
            Some(_) => Ok(()),
            None => Err(SheetError::UnknownColumn(key.to_string())),
        }
    }
}

impl Default for GridStore {
    fn default() -> Self {
        Self::initialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initialize_yields_seed_then_blank_rows() {
        let store = GridStore::initialize();
        assert_eq!(store.row_count(), 25);

        let first = store.row(0).unwrap();
        assert_eq!(first.id, 1);
        assert_eq!(
            first.get("job-request"),
            CellValue::from("Launch social media campaign for pro...")
        );
        assert_eq!(first.get("status"), CellValue::from("in-process"));
        assert_eq!(first.get("priority"), CellValue::from("Medium"));

        for (offset, row) in store.rows()[5..].iter().enumerate() {
            assert_eq!(row.id as usize, offset + 6);
            assert!(row.is_blank());
            for col in store.columns() {
                assert_eq!(row.get(col.key), CellValue::from(""));
            }
        }
    }

    #[test]
    fn get_cell_returns_seeded_values() {
        let store = GridStore::initialize();
        assert_eq!(
            store.get_cell(1, "submitter").unwrap(),
            CellValue::from("Irfan Khan")
        );
        assert_eq!(
            store.get_cell(4, "est-value").unwrap(),
            CellValue::from("2,800,000 ₹")
        );
        assert_eq!(store.display_value(3, "status").unwrap(), "Complete");
    }

    #[test]
    fn every_row_has_every_column() {
        let store = GridStore::initialize();
        for row in store.rows() {
            for col in store.columns() {
                assert!(row.cells.contains_key(col.key), "row {} missing {}", row.id, col.key);
            }
        }
    }

    #[test]
    fn out_of_range_row_is_an_error() {
        let store = GridStore::initialize();
        assert_eq!(
            store.get_cell(25, "status"),
            Err(SheetError::RowOutOfBounds { index: 25, len: 25 })
        );
    }

    #[test]
    fn unknown_column_is_an_error() {
        let mut store = GridStore::initialize();
        assert_eq!(
            store.get_cell(0, "Status"),
            Err(SheetError::UnknownColumn("Status".to_string()))
        );
        assert!(store.set_cell(0, "notes", "x").is_err());
    }

    #[test]
    fn set_cell_touches_exactly_one_coordinate() {
        let mut store = GridStore::initialize();
        let before = store.clone();

        store.set_cell(2, "assigned", "Nobody").unwrap();

        for (r, row) in store.rows().iter().enumerate() {
            assert_eq!(row.id, before.rows()[r].id);
            for col in store.columns() {
                let expected = if r == 2 && col.key == "assigned" {
                    CellValue::from("Nobody")
                } else {
                    before.get_cell(r, col.key).unwrap()
                };
                assert_eq!(store.get_cell(r, col.key).unwrap(), expected);
            }
        }
    }

    #[test]
    fn missing_cell_reads_as_empty() {
        let mut row = Row::new(7, &[]);
        row.cells.remove("url");
        let store = GridStore::from_rows(vec![row]);
        assert_eq!(store.get_cell(0, "url").unwrap(), CellValue::default());
    }

    #[test]
    fn number_values_stringify() {
        let mut store = GridStore::initialize();
        store.set_cell(6, "est-value", 42_i64).unwrap();
        assert_eq!(store.display_value(6, "est-value").unwrap(), "42");
    }
}
