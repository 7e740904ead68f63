//! Column-oriented numeric tables feeding the chart

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// A named column of values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    pub name: String,
    pub values: Vec<f64>,
}

impl Column {
    pub fn new(name: impl Into<String>, values: Vec<f64>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// `(min, max)` over the finite values, or `None` if there are none
    pub fn range(&self) -> Option<(f64, f64)> {
        self.values
            .iter()
            .copied()
            .filter(|v| v.is_finite())
            .fold(None, |acc, v| match acc {
                None => Some((v, v)),
                Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            })
    }
}

/// An ordered set of equally long columns. Row `i` is the `i`-th value of
/// every column.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Table {
    columns: Vec<Column>,
}

impl Table {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a column. Its length must match the existing rows.
    pub fn add_column(&mut self, column: Column) -> Result<()> {
        if let Some(first) = self.columns.first() {
            if first.len() != column.len() {
                return Err(Error::LengthMismatch {
                    expected: first.len(),
                    found: column.len(),
                });
            }
        }
        if self.column_by_name(&column.name).is_some() {
            return Err(Error::InvalidData(format!(
                "duplicate column name '{}'",
                column.name
            )));
        }
        self.columns.push(column);
        Ok(())
    }

    /// Builder-style [`add_column`](Self::add_column)
    pub fn with_column(mut self, name: impl Into<String>, values: Vec<f64>) -> Result<Self> {
        self.add_column(Column::new(name, values))?;
        Ok(self)
    }

    pub fn column_by_name(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Like [`column_by_name`](Self::column_by_name) but missing columns are an error
    pub fn require_column(&self, name: &str) -> Result<&Column> {
        self.column_by_name(name)
            .ok_or_else(|| Error::MissingColumn(name.to_string()))
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|c| c.name.as_str())
    }

    pub fn number_of_columns(&self) -> usize {
        self.columns.len()
    }

    pub fn number_of_rows(&self) -> usize {
        self.columns.first().map_or(0, Column::len)
    }
}
