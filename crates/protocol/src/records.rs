//! Tabular record data exchanged with list and table operations.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One row of field values.
///
/// Values are positional; the owning [`RecordData`] carries the column names.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    pub field_values: Vec<Value>,
}

impl Record {
    /// Creates a row from its field values.
    pub fn new(field_values: Vec<Value>) -> Self {
        Self { field_values }
    }

    pub fn len(&self) -> usize {
        self.field_values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.field_values.is_empty()
    }
}

/// A set of records sharing one column layout.
///
/// This is the shape used both for merge inputs and retrieve outputs.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordData {
    /// Column names, in the order values appear in each record
    pub field_names: Vec<String>,
    /// Rows of positional values
    pub records: Vec<Record>,
}

impl RecordData {
    /// Creates record data from column names and rows.
    pub fn new(field_names: Vec<String>, records: Vec<Record>) -> Self {
        Self {
            field_names,
            records,
        }
    }

    /// Builds record data from `(column, value)` rows.
    ///
    /// The first row defines the column layout; subsequent rows contribute
    /// values in that order. Rows missing a column contribute `Value::Null`.
    pub fn from_rows<'a, I, R>(rows: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = (&'a str, Value)>,
    {
        let mut field_names: Vec<String> = Vec::new();
        let mut records = Vec::new();

        for row in rows {
            let pairs: Vec<(&str, Value)> = row.into_iter().collect();
            if field_names.is_empty() {
                field_names = pairs.iter().map(|(name, _)| (*name).to_string()).collect();
            }
            let field_values = field_names
                .iter()
                .map(|name| {
                    pairs
                        .iter()
                        .find(|(n, _)| n == name)
                        .map(|(_, v)| v.clone())
                        .unwrap_or(Value::Null)
                })
                .collect();
            records.push(Record::new(field_values));
        }

        Self {
            field_names,
            records,
        }
    }

    /// Index of a named column, if present.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.field_names.iter().position(|n| n == name)
    }

    /// Value at `(row, column-name)`, if both exist.
    pub fn value(&self, row: usize, column: &str) -> Option<&Value> {
        let index = self.column_index(column)?;
        self.records.get(row)?.field_values.get(index)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
