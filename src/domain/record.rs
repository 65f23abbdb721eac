// src/domain/record.rs

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde_json::{Map, Value};

use crate::db::records::RawDocument;

/// Select options offered by the intake and report filter forms. The
/// stored documents stay loosely typed, so these are suggestions for
/// the UI rather than a validation whitelist.
pub const VEHICLE_TYPES: &[&str] = &["bike", "car", "auto", "truck", "bus"];
pub const FUEL_TYPES: &[&str] = &["petrol", "diesel", "cng", "electric"];
pub const TEST_RESULTS: &[&str] = &["Pass", "Fail"];

/// One emission test, flattened from its stored document and stamped
/// with a single canonical date. This is the anti-corruption layer
/// between the raw document store and everything downstream: no other
/// module looks at the raw date encodings.
#[derive(Debug, Clone, PartialEq)]
pub struct TestRecord {
    pub id: String,
    pub fields: Map<String, Value>,
    /// Normalized date: `testDate` if present, else `createdAt`, else
    /// the epoch sentinel (sorts a record with unusable dates last).
    pub date: NaiveDateTime,
}

impl TestRecord {
    pub fn from_document(doc: RawDocument) -> Self {
        let date = normalize_date(doc.fields.get("testDate"))
            .or_else(|| normalize_date(doc.fields.get("createdAt")))
            .unwrap_or_else(epoch);
        TestRecord {
            id: doc.id,
            fields: doc.fields,
            date,
        }
    }

    /// String field accessor; non-string values read as absent.
    pub fn field_str(&self, key: &str) -> Option<&str> {
        self.fields.get(key).and_then(Value::as_str)
    }

    /// Calendar-day rendering of the normalized date. Range filtering
    /// compares these strings so time-of-day can never exclude a
    /// record on a boundary day.
    pub fn day_string(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    /// Expiry date, when the document carries one in any encoding.
    pub fn expiry_date(&self) -> Option<NaiveDateTime> {
        normalize_date(self.fields.get("expiryDate"))
    }
}

/// The "unknown/oldest" sentinel.
pub fn epoch() -> NaiveDateTime {
    DateTime::UNIX_EPOCH.naive_utc()
}

/// Normalize the heterogeneous stored date encodings to one type:
/// - provider timestamp objects: {"seconds": i64[, "nanoseconds": u32]}
/// - RFC 3339 strings, or bare `YYYY-MM-DD` day strings
/// - integer epoch milliseconds
/// Anything else is unusable and reads as None.
pub fn normalize_date(value: Option<&Value>) -> Option<NaiveDateTime> {
    match value? {
        Value::Object(map) => {
            let seconds = map.get("seconds").and_then(Value::as_i64)?;
            let nanos = map
                .get("nanoseconds")
                .and_then(Value::as_u64)
                .unwrap_or(0) as u32;
            DateTime::from_timestamp(seconds, nanos).map(|dt| dt.naive_utc())
        }
        Value::String(s) => parse_date_string(s),
        Value::Number(n) => {
            let millis = n.as_i64()?;
            DateTime::from_timestamp_millis(millis).map(|dt| dt.naive_utc())
        }
        _ => None,
    }
}

fn parse_date_string(s: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc).naive_utc());
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

/// Fetcher ordering: most recent first. Ties broken by id so the order
/// is stable across requests.
pub fn sort_newest_first(records: &mut [TestRecord]) {
    records.sort_by(|a, b| b.date.cmp(&a.date).then_with(|| a.id.cmp(&b.id)));
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn doc(fields: Value) -> RawDocument {
        match fields {
            Value::Object(map) => RawDocument {
                id: "t1".into(),
                fields: map,
            },
            _ => panic!("expected object"),
        }
    }

    #[test]
    fn timestamp_object_is_normalized() {
        let r = TestRecord::from_document(doc(json!({
            "testDate": { "seconds": 1_754_006_400, "nanoseconds": 0 }
        })));
        assert_eq!(r.day_string(), "2025-08-01");
    }

    #[test]
    fn rfc3339_string_is_normalized() {
        let r = TestRecord::from_document(doc(json!({
            "testDate": "2026-02-10T14:30:00+05:30"
        })));
        assert_eq!(r.day_string(), "2026-02-10");
    }

    #[test]
    fn day_string_is_normalized_to_midnight() {
        let r = TestRecord::from_document(doc(json!({ "testDate": "2026-02-10" })));
        assert_eq!(r.date, NaiveDate::from_ymd_opt(2026, 2, 10).unwrap().and_hms_opt(0, 0, 0).unwrap());
    }

    #[test]
    fn millis_number_is_normalized() {
        let r = TestRecord::from_document(doc(json!({ "testDate": 1_754_006_400_000i64 })));
        assert_eq!(r.day_string(), "2025-08-01");
    }

    #[test]
    fn created_at_is_the_fallback() {
        let r = TestRecord::from_document(doc(json!({
            "createdAt": { "seconds": 1_754_006_400 }
        })));
        assert_eq!(r.day_string(), "2025-08-01");
    }

    #[test]
    fn test_date_wins_over_created_at() {
        let r = TestRecord::from_document(doc(json!({
            "testDate": "2026-01-05",
            "createdAt": "2026-01-09"
        })));
        assert_eq!(r.day_string(), "2026-01-05");
    }

    #[test]
    fn missing_or_malformed_dates_default_to_epoch() {
        let missing = TestRecord::from_document(doc(json!({ "ownerName": "Kumar" })));
        assert_eq!(missing.date, epoch());

        let garbage = TestRecord::from_document(doc(json!({
            "testDate": "not a date",
            "createdAt": true
        })));
        assert_eq!(garbage.date, epoch());
    }

    #[test]
    fn sort_is_descending_by_date() {
        let mut records = vec![
            TestRecord::from_document(RawDocument {
                id: "d3".into(),
                fields: json!({ "testDate": "2026-03-01" }).as_object().unwrap().clone(),
            }),
            TestRecord::from_document(RawDocument {
                id: "d1".into(),
                fields: json!({ "testDate": "2026-01-01" }).as_object().unwrap().clone(),
            }),
            TestRecord::from_document(RawDocument {
                id: "d2".into(),
                fields: json!({ "testDate": "2026-02-01" }).as_object().unwrap().clone(),
            }),
        ];
        sort_newest_first(&mut records);

        let ids: Vec<&str> = records.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["d3", "d2", "d1"]);
    }
}
