// src/tests/router_tests/verification_tests.rs

use chrono::{Duration, Utc};
use serde_json::json;

use crate::router::handle;
use crate::tests::utils::{get, init_test_db, read_body, seed_test_record};

#[test]
fn lookup_without_query_renders_the_form() {
    let db = init_test_db();
    let resp = handle(get("/verification", None), &db).unwrap();
    assert_eq!(resp.status(), 200);
    assert!(read_body(resp).contains("Verify Certificate"));
}

#[test]
fn valid_certificate_is_reported_from_the_latest_test() {
    let db = init_test_db();
    let future = (Utc::now() + Duration::days(90)).to_rfc3339();

    // An old expired test and a newer valid one for the same vehicle.
    seed_test_record(&db, "old", json!({
        "vehicleNumber": "TN-01-AB-1234", "testResult": "Pass",
        "testDate": "2024-01-10", "expiryDate": "2024-07-10"
    }));
    seed_test_record(&db, "new", json!({
        "vehicleNumber": "TN-01-AB-1234", "testResult": "Pass",
        "testDate": "2026-01-10", "expiryDate": future
    }));

    // Lowercase input is normalized before the lookup.
    let resp = handle(get("/verification?vehicle=tn-01-ab-1234", None), &db).unwrap();
    let body = read_body(resp);
    assert!(body.contains("VALID"));
    assert!(body.contains("/certificate/new"));
}

#[test]
fn expired_certificate_is_flagged() {
    let db = init_test_db();
    seed_test_record(&db, "old", json!({
        "vehicleNumber": "TN-01-AB-1234", "testResult": "Pass",
        "testDate": "2024-01-10", "expiryDate": "2024-07-10"
    }));

    let resp = handle(get("/verification?vehicle=TN-01-AB-1234", None), &db).unwrap();
    assert!(read_body(resp).contains("EXPIRED"));
}

#[test]
fn unknown_vehicle_reports_no_records() {
    let db = init_test_db();
    let resp = handle(get("/verification?vehicle=KA-00-XX-0000", None), &db).unwrap();
    assert!(read_body(resp).contains("No records found"));
}

#[test]
fn certificate_page_renders_record_details() {
    let db = init_test_db();
    let future = (Utc::now() + Duration::days(90)).to_rfc3339();
    seed_test_record(&db, "cert1", json!({
        "vehicleNumber": "TN-01-AB-1234", "ownerName": "Kumar",
        "vehicleType": "car", "fuelType": "petrol",
        "testResult": "Pass", "testDate": "2026-01-10", "expiryDate": future
    }));

    let resp = handle(get("/certificate/cert1", None), &db).unwrap();
    let body = read_body(resp);
    assert!(body.contains("TN-01-AB-1234"));
    assert!(body.contains("Kumar"));
    assert!(body.contains("VALID"));
}

#[test]
fn missing_certificate_is_not_found() {
    let db = init_test_db();
    let err = handle(get("/certificate/nope", None), &db).unwrap_err();
    assert!(matches!(err, crate::errors::ServerError::NotFound));
}
