//! Table views supplied by the table-loading collaborator.
//!
//! Two views back every request: the *raw* view in its original shape and
//! the *runtime* view the chart actually renders, which may be pivoted into
//! wide format. All cell values are kept as raw text.

use crate::error::ExplainError;
use crate::ExplainResult;
use serde::{Deserialize, Serialize};

/// An ordered set of named fields and the rows beneath them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableView {
    fields: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl TableView {
    /// Build a view, checking every row matches the field count.
    pub fn new(fields: Vec<String>, rows: Vec<Vec<String>>) -> ExplainResult<Self> {
        for (idx, row) in rows.iter().enumerate() {
            if row.len() != fields.len() {
                return Err(ExplainError::input(format!(
                    "row {} has {} values for {} fields",
                    idx,
                    row.len(),
                    fields.len()
                )));
            }
        }
        Ok(Self { fields, rows })
    }

    /// Convenience constructor for literal tables.
    pub fn from_strs(fields: &[&str], rows: &[&[&str]]) -> ExplainResult<Self> {
        Self::new(
            fields.iter().map(|f| f.to_string()).collect(),
            rows.iter()
                .map(|row| row.iter().map(|v| v.to_string()).collect())
                .collect(),
        )
    }

    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn field_index(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|f| f == name)
    }

    /// Cell value by row index and field name.
    pub fn value(&self, row: usize, field: &str) -> Option<&str> {
        let idx = self.field_index(field)?;
        self.rows.get(row)?.get(idx).map(String::as_str)
    }

    /// All values under one field, in row order.
    pub fn column(&self, field: &str) -> Option<Vec<&str>> {
        let idx = self.field_index(field)?;
        Some(
            self.rows
                .iter()
                .filter_map(|row| row.get(idx).map(String::as_str))
                .collect(),
        )
    }
}
