// src/domain/verification.rs

use chrono::NaiveDateTime;

use crate::domain::record::TestRecord;

/// Outcome of a public certificate lookup: the most recent test for the
/// vehicle plus whether its certificate is still in force.
#[derive(Debug)]
pub struct VerificationOutcome {
    pub record: TestRecord,
    pub expiry: Option<NaiveDateTime>,
    pub is_valid: bool,
}

/// Pick the latest test among a vehicle's records and judge validity
/// against `now`. A missing or malformed expiry reads as expired, so a
/// damaged record can never present a valid certificate.
pub fn verify_latest(records: Vec<TestRecord>, now: NaiveDateTime) -> Option<VerificationOutcome> {
    let record = records.into_iter().max_by(|a, b| a.date.cmp(&b.date))?;
    let expiry = record.expiry_date();
    let is_valid = expiry.map(|e| e > now).unwrap_or(false);
    Some(VerificationOutcome {
        record,
        expiry,
        is_valid,
    })
}

/// Certificate status for a single known record (detail page).
pub fn certificate_is_valid(record: &TestRecord, now: NaiveDateTime) -> bool {
    record.expiry_date().map(|e| e > now).unwrap_or(false)
}
