// src/db/records.rs
//
// The pollution_tests table is a small document store: one JSON object
// per test, keyed by a random id. Legacy imports mean the key set and
// the date encodings vary per document; interpretation happens in
// domain::record, never here.
use rand::distributions::Alphanumeric;
use rand::{thread_rng, Rng};
use rusqlite::{params, Connection, OptionalExtension};
use serde_json::{Map, Value};

use crate::errors::ServerError;

/// A raw stored document, before date normalization.
#[derive(Debug, Clone)]
pub struct RawDocument {
    pub id: String,
    pub fields: Map<String, Value>,
}

/// Random 20-char alphanumeric document id.
pub fn new_document_id() -> String {
    thread_rng()
        .sample_iter(&Alphanumeric)
        .take(20)
        .map(char::from)
        .collect()
}

pub fn insert_record(
    conn: &Connection,
    id: &str,
    fields: &Map<String, Value>,
    now: i64,
) -> Result<(), ServerError> {
    let data = serde_json::to_string(fields)
        .map_err(|e| ServerError::DbError(format!("serialize record failed: {e}")))?;

    conn.execute(
        "insert into pollution_tests (id, data, created_at) values (?, ?, ?)",
        params![id, data, now],
    )
    .map_err(|e| ServerError::DbError(format!("insert record failed: {e}")))?;
    Ok(())
}

/// The complete collection, no pagination and no server-side filtering.
/// All narrowing happens in memory after the fetch.
pub fn list_records(conn: &Connection) -> Result<Vec<RawDocument>, ServerError> {
    let mut stmt = conn
        .prepare("select id, data from pollution_tests")
        .map_err(|e| ServerError::DbError(format!("prepare list records failed: {e}")))?;

    let rows = stmt
        .query_map([], |row| {
            Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?))
        })
        .map_err(|e| ServerError::DbError(format!("list records failed: {e}")))?;

    let mut docs = Vec::new();
    for r in rows {
        let (id, data) = r.map_err(|e| ServerError::DbError(e.to_string()))?;
        docs.push(parse_document(id, &data)?);
    }
    Ok(docs)
}

/// Every test on file for one registration number (exact match on the
/// stored field, which intake uppercases).
pub fn records_for_vehicle(
    conn: &Connection,
    vehicle_number: &str,
) -> Result<Vec<RawDocument>, ServerError> {
    let mut stmt = conn
        .prepare(
            "select id, data from pollution_tests
             where json_extract(data, '$.vehicleNumber') = ?",
        )
        .map_err(|e| ServerError::DbError(format!("prepare vehicle lookup failed: {e}")))?;

    let rows = stmt
        .query_map(params![vehicle_number], |row| {
            Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?))
        })
        .map_err(|e| ServerError::DbError(format!("vehicle lookup failed: {e}")))?;

    let mut docs = Vec::new();
    for r in rows {
        let (id, data) = r.map_err(|e| ServerError::DbError(e.to_string()))?;
        docs.push(parse_document(id, &data)?);
    }
    Ok(docs)
}

pub fn find_record(conn: &Connection, id: &str) -> Result<Option<RawDocument>, ServerError> {
    let data: Option<String> = conn
        .query_row(
            "select data from pollution_tests where id = ?",
            params![id],
            |r| r.get(0),
        )
        .optional()
        .map_err(|e| ServerError::DbError(format!("select record failed: {e}")))?;

    match data {
        Some(data) => Ok(Some(parse_document(id.to_string(), &data)?)),
        None => Ok(None),
    }
}

fn parse_document(id: String, data: &str) -> Result<RawDocument, ServerError> {
    let fields: Map<String, Value> = serde_json::from_str(data)
        .map_err(|e| ServerError::DbError(format!("corrupt record {id}: {e}")))?;
    Ok(RawDocument { id, fields })
}
