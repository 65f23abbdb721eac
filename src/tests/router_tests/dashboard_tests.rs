// src/tests/router_tests/dashboard_tests.rs

use chrono::Utc;
use serde_json::json;

use crate::router::handle;
use crate::tests::utils::{get, init_test_db, read_body, seed_test_record, signed_in_user};

#[test]
fn staff_overview_shows_stats_and_recent_tests() {
    let db = init_test_db();
    let (_, token) = signed_in_user(&db, "staff@example.com", "staff");

    seed_test_record(&db, "t1", json!({
        "vehicleNumber": "TN-10-AA-0001", "ownerName": "Anand",
        "vehicleType": "car", "fuelType": "petrol",
        "testResult": "Pass", "testDate": "2026-03-01"
    }));
    seed_test_record(&db, "t2", json!({
        "vehicleNumber": "TN-10-AA-0002", "ownerName": "Bala",
        "vehicleType": "bike", "fuelType": "petrol",
        "testResult": "Fail", "testDate": "2026-03-02"
    }));

    let resp = handle(get("/dashboard", Some(&token)), &db).unwrap();
    assert_eq!(resp.status(), 200);

    let body = read_body(resp);
    assert!(body.contains("Dashboard Overview"));
    assert!(body.contains("TN-10-AA-0002"));
    assert!(body.contains("Vehicle Types"));
}

#[test]
fn today_period_narrows_the_overview() {
    let db = init_test_db();
    let (_, token) = signed_in_user(&db, "staff@example.com", "staff");

    let today = Utc::now().format("%Y-%m-%d").to_string();
    seed_test_record(&db, "old", json!({
        "vehicleNumber": "TN-10-AA-0001", "testResult": "Pass",
        "testDate": "2020-01-01"
    }));
    seed_test_record(&db, "fresh", json!({
        "vehicleNumber": "TN-10-AA-0002", "testResult": "Pass",
        "testDate": today
    }));

    let resp = handle(get("/dashboard?period=today", Some(&token)), &db).unwrap();
    let body = read_body(resp);
    assert!(body.contains("TN-10-AA-0002"));
    assert!(!body.contains("TN-10-AA-0001"));
}

#[test]
fn plain_user_sees_only_their_vehicle() {
    let db = init_test_db();
    // signed_in_user registers the vehicle TN-01-AB-1234
    let (_, token) = signed_in_user(&db, "owner@example.com", "user");

    seed_test_record(&db, "mine", json!({
        "vehicleNumber": "TN-01-AB-1234", "ownerName": "Owner",
        "testResult": "Pass", "testDate": "2026-03-01"
    }));
    seed_test_record(&db, "other", json!({
        "vehicleNumber": "KA-05-ZZ-0000", "ownerName": "Someone Else",
        "testResult": "Fail", "testDate": "2026-03-02"
    }));

    let resp = handle(get("/dashboard", Some(&token)), &db).unwrap();
    let body = read_body(resp);
    assert!(body.contains("User Dashboard"));
    assert!(body.contains("TN-01-AB-1234"));
    assert!(!body.contains("KA-05-ZZ-0000"));
    // No reports link for plain users.
    assert!(!body.contains("href=\"/reports\""));
}
