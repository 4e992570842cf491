//! Turns column-keyed JSON rows into a renderable table.

use serde_json::Value;

use crate::api::Row;

/// Tabular view of a decoded response. Headers follow the first row's key
/// order (the backend serializes its records with stable field order).
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn from_rows(rows: &[Row]) -> Table {
        let Some(first) = rows.first() else {
            return Table::default();
        };
        let headers: Vec<String> = first.keys().cloned().collect();
        let body = rows
            .iter()
            .map(|row| headers.iter().map(|h| cell(row.get(h))).collect())
            .collect();
        Table {
            headers,
            rows: body,
        }
    }

    /// Single-record variant, used for the add-review confirmation.
    pub fn from_record(record: &Row) -> Table {
        Table::from_rows(std::slice::from_ref(record))
    }
}

fn cell(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}
