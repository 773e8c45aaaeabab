//! Tabular input data: named columns of scalar values plus an optional row index.

use std::borrow::Cow;
use std::collections::HashMap;

use crate::common::{Error, Result};
use crate::table::format::{Number, shortest_form};

/// Source column name to header text.
pub type ColumnDisplayMap = HashMap<String, String>;

/// Source column name to number format spec.
pub type ColumnFormatMap = HashMap<String, String>;

/// A single scalar cell value.
///
/// `Float(NaN)` is treated the same as `Null`.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl Value {
    pub fn is_null(&self) -> bool {
        match self {
            Value::Null => true,
            Value::Float(v) => v.is_nan(),
            _ => false,
        }
    }

    /// The value as a number, if it is one. Booleans are not numbers here.
    pub fn as_number(&self) -> Option<Number> {
        match *self {
            Value::Int(v) => Some(Number::Int(v)),
            Value::Float(v) if !v.is_nan() => Some(Number::Float(v)),
            _ => None,
        }
    }

    /// Plain display text: decimal integers, shortest round-trip floats
    /// (`120.0`, `0.99`, `1e+16`), `true`/`false`, text verbatim, nulls empty.
    pub fn display_text(&self) -> Cow<'_, str> {
        match self {
            Value::Null => Cow::Borrowed(""),
            Value::Bool(true) => Cow::Borrowed("true"),
            Value::Bool(false) => Cow::Borrowed("false"),
            Value::Int(v) => Cow::Owned(itoa::Buffer::new().format(*v).to_string()),
            Value::Float(v) if v.is_nan() => Cow::Borrowed(""),
            Value::Float(v) => Cow::Owned(shortest_form(*v)),
            Value::Text(s) => Cow::Borrowed(s),
        }
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(i64::from(v))
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Text(v)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::Null, Into::into)
    }
}

/// A named column of values.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub name: String,
    pub values: Vec<Value>,
}

impl Column {
    pub fn new<V: Into<Value>>(name: impl Into<String>, values: impl IntoIterator<Item = V>) -> Self {
        Self {
            name: name.into(),
            values: values.into_iter().map(Into::into).collect(),
        }
    }
}

/// Row labels, optionally named.
#[derive(Debug, Clone, PartialEq)]
pub struct RowIndex {
    pub name: Option<String>,
    pub labels: Vec<Value>,
}

impl RowIndex {
    pub fn new<V: Into<Value>>(labels: impl IntoIterator<Item = V>) -> Self {
        Self {
            name: None,
            labels: labels.into_iter().map(Into::into).collect(),
        }
    }

    pub fn named<V: Into<Value>>(name: impl Into<String>, labels: impl IntoIterator<Item = V>) -> Self {
        Self {
            name: Some(name.into()),
            labels: labels.into_iter().map(Into::into).collect(),
        }
    }

    /// `0..rows` labels, as data frames number rows when no index is given.
    pub fn range(rows: usize) -> Self {
        Self::new((0..rows as i64).map(Value::Int))
    }
}

/// Ordered named columns of equal length.
///
/// ```
/// use deckbook::table::{Column, TabularData};
///
/// let data = TabularData::new(vec![
///     Column::new("Quantity", [120, 250]),
///     Column::new("UnitPrice", [0.99, 0.59]),
/// ]);
/// assert_eq!(data.validate().unwrap(), 2);
/// assert_eq!(data.column_names().collect::<Vec<_>>(), ["Quantity", "UnitPrice"]);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TabularData {
    columns: Vec<Column>,
    index: Option<RowIndex>,
}

impl TabularData {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            index: None,
        }
    }

    pub fn with_index(mut self, index: RowIndex) -> Self {
        self.index = Some(index);
        self
    }

    pub fn push_column(&mut self, column: Column) {
        self.columns.push(column);
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|c| c.name.as_str())
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Number of rows; zero when there are no columns and no index.
    pub fn row_count(&self) -> usize {
        self.columns
            .first()
            .map(|c| c.values.len())
            .or_else(|| self.index.as_ref().map(|i| i.labels.len()))
            .unwrap_or(0)
    }

    pub fn index(&self) -> Option<&RowIndex> {
        self.index.as_ref()
    }

    /// Check that every column and the index have the same length, and
    /// return that length.
    pub fn validate(&self) -> Result<usize> {
        let rows = self.row_count();
        if let Some(column) = self.columns.iter().find(|c| c.values.len() != rows) {
            return Err(Error::InvalidInput(format!(
                "column '{}' has {} values, expected {}",
                column.name,
                column.values.len(),
                rows
            )));
        }
        if let Some(index) = &self.index
            && index.labels.len() != rows
        {
            return Err(Error::InvalidInput(format!(
                "row index has {} labels, expected {}",
                index.labels.len(),
                rows
            )));
        }
        Ok(rows)
    }

    /// Cell at (`row`, `col`), both zero-based over the data columns.
    pub fn value(&self, row: usize, col: usize) -> Option<&Value> {
        self.columns.get(col).and_then(|c| c.values.get(row))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_text() {
        assert_eq!(Value::Int(120).display_text(), "120");
        assert_eq!(Value::Float(120.0).display_text(), "120.0");
        assert_eq!(Value::Float(0.99).display_text(), "0.99");
        assert_eq!(Value::Float(-2.5).display_text(), "-2.5");
        assert_eq!(Value::Float(1e16).display_text(), "1e+16");
        assert_eq!(Value::Float(-1.5e20).display_text(), "-1.5e+20");
        assert_eq!(Value::Float(1e-7).display_text(), "1e-07");
        assert_eq!(Value::Float(0.0001).display_text(), "0.0001");
        assert_eq!(Value::Float(-0.0).display_text(), "-0.0");
        assert_eq!(Value::Bool(true).display_text(), "true");
        assert_eq!(Value::Text("Widget".into()).display_text(), "Widget");
        assert_eq!(Value::Null.display_text(), "");
        assert_eq!(Value::Float(f64::NAN).display_text(), "");
    }

    #[test]
    fn test_nan_is_null_and_not_a_number() {
        assert!(Value::Float(f64::NAN).is_null());
        assert_eq!(Value::Float(f64::NAN).as_number(), None);
        assert_eq!(Value::Bool(true).as_number(), None);
        assert_eq!(Value::Int(3).as_number(), Some(Number::Int(3)));
    }

    #[test]
    fn test_option_conversion() {
        let column = Column::new("Score", [Some(1.5), None]);
        assert_eq!(column.values, vec![Value::Float(1.5), Value::Null]);
    }

    #[test]
    fn test_validate_ragged_columns() {
        let data = TabularData::new(vec![
            Column::new("a", [1, 2, 3]),
            Column::new("b", [1, 2]),
        ]);
        assert!(matches!(data.validate(), Err(Error::InvalidInput(_))));
    }

    #[test]
    fn test_validate_index_length() {
        let data = TabularData::new(vec![Column::new("a", [1, 2])]).with_index(RowIndex::range(3));
        assert!(data.validate().is_err());

        let data = TabularData::new(vec![Column::new("a", [1, 2])]).with_index(RowIndex::range(2));
        assert_eq!(data.validate().unwrap(), 2);
    }

    #[test]
    fn test_empty_data() {
        let data = TabularData::default();
        assert_eq!(data.validate().unwrap(), 0);
        assert_eq!(data.column_count(), 0);
    }
}
