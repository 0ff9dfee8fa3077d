//! Tabular dataset fed to the charting service.

use crate::error::ChartError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ColumnKind {
    Date,
    Number,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub kind: ColumnKind,
    pub label: String,
}

/// An x/y dataset: one leading date column plus one or more number columns,
/// with one `(date, values)` entry per row.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DataTable {
    columns: Vec<Column>,
    rows: Vec<(NaiveDate, Vec<f64>)>,
}

impl DataTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn date_column(mut self, label: &str) -> Self {
        self.columns.push(Column {
            kind: ColumnKind::Date,
            label: label.to_string(),
        });
        self
    }

    pub fn number_column(mut self, label: &str) -> Self {
        self.columns.push(Column {
            kind: ColumnKind::Number,
            label: label.to_string(),
        });
        self
    }

    /// Appends a row. The value count must match the number columns defined
    /// so far.
    pub fn row(mut self, date: NaiveDate, values: &[f64]) -> Result<Self, ChartError> {
        let expected = self.number_column_count();
        if values.len() != expected {
            return Err(ChartError::RowArity {
                expected,
                got: values.len(),
            });
        }
        self.rows.push((date, values.to_vec()));
        Ok(self)
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn rows(&self) -> &[(NaiveDate, Vec<f64>)] {
        &self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    fn number_column_count(&self) -> usize {
        self.columns
            .iter()
            .filter(|c| c.kind == ColumnKind::Number)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn rows_match_number_column_arity() {
        let table = DataTable::new()
            .date_column("day")
            .number_column("visits")
            .number_column("errors")
            .row(date(2024, 1, 1), &[10.0, 2.0])
            .unwrap();
        assert_eq!(table.rows().len(), 1);
    }

    #[test]
    fn mismatched_row_arity_is_rejected() {
        let err = DataTable::new()
            .date_column("day")
            .number_column("visits")
            .row(date(2024, 1, 1), &[10.0, 2.0])
            .unwrap_err();
        assert!(matches!(err, ChartError::RowArity { expected: 1, got: 2 }));
    }
}
