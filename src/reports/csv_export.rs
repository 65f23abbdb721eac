// src/reports/csv_export.rs

use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde_json::Value;

use crate::domain::record::{normalize_date, TestRecord};
use crate::errors::ServerError;

/// Columns surfaced before the alphabetical remainder: id first, then
/// date fields, then vehicle/owner/contact, then result/type.
const PRIORITY_COLUMNS: &[&str] = &[
    "id",
    "date",
    "testDate",
    "expiryDate",
    "createdAt",
    "vehicleNumber",
    "ownerName",
    "mobileNumber",
    "testResult",
    "vehicleType",
    "fuelType",
];

/// Identifier-like columns that spreadsheets would otherwise mangle
/// (scientific notation on long phone numbers, dropped leading zeros).
/// Wrapped as `="value"` so they import as literal text.
const FORMULA_GUARDED_COLUMNS: &[&str] = &["vehicleNumber", "mobileNumber"];

pub fn export_filename(today: NaiveDate) -> String {
    format!("pollution_reports_{}.csv", today.format("%Y-%m-%d"))
}

/// Serialize the current filtered view to CSV text. Refuses an empty
/// view outright; the caller surfaces the message instead of handing
/// the user a zero-byte file.
pub fn export_csv(view: &[&TestRecord]) -> Result<String, ServerError> {
    if view.is_empty() {
        return Err(ServerError::CsvError(
            "No records match the current filters".into(),
        ));
    }

    let columns = column_set(view);

    let mut out = String::new();
    out.push_str(&join_row(columns.iter().map(|c| csv_escape(c)).collect()));

    for record in view {
        let cells = columns
            .iter()
            .map(|col| format_cell(record, col))
            .collect();
        out.push_str(&join_row(cells));
    }
    Ok(out)
}

/// Union of keys across the view plus the synthetic `id`/`date`
/// columns, alphabetical with the priority list pulled to the front.
fn column_set(view: &[&TestRecord]) -> Vec<String> {
    let mut keys: BTreeSet<String> = BTreeSet::new();
    keys.insert("id".into());
    keys.insert("date".into());
    for record in view {
        keys.extend(record.fields.keys().cloned());
    }

    let mut ordered: Vec<String> = Vec::with_capacity(keys.len());
    for col in PRIORITY_COLUMNS {
        if keys.remove(*col) {
            ordered.push((*col).to_string());
        }
    }
    ordered.extend(keys); // remainder stays alphabetical
    ordered
}

fn format_cell(record: &TestRecord, col: &str) -> String {
    if col == "id" {
        return csv_escape(&record.id);
    }
    if col == "date" {
        return record.day_string();
    }

    let value = match record.fields.get(col) {
        None | Some(Value::Null) => return String::new(),
        Some(v) => v,
    };

    // Date-like values render as calendar days whatever their encoding.
    if let Some(dt) = date_like(value) {
        return dt.format("%Y-%m-%d").to_string();
    }

    let raw = stringify(value);
    if FORMULA_GUARDED_COLUMNS.contains(&col) {
        return format!("=\"{raw}\"");
    }
    csv_escape(&raw)
}

/// Provider-timestamp objects and RFC 3339 strings read as dates; a
/// bare `YYYY-MM-DD` string is already in output form and passes
/// through the generic path untouched.
fn date_like(value: &Value) -> Option<chrono::NaiveDateTime> {
    match value {
        Value::Object(_) => normalize_date(Some(value)),
        Value::String(s) if s.contains('T') => normalize_date(Some(value)),
        _ => None,
    }
}

fn stringify(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        other => serde_json::to_string(other).unwrap_or_default(),
    }
}

/// RFC 4180 quoting: a field containing comma, quote or newline is
/// wrapped in double quotes with internal quotes doubled.
fn csv_escape(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') || field.contains('\r') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

fn join_row(cells: Vec<String>) -> String {
    let mut row = cells.join(",");
    row.push('\n');
    row
}
