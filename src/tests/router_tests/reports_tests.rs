// src/tests/router_tests/reports_tests.rs

use serde_json::json;

use crate::errors::ServerError;
use crate::router::handle;
use crate::tests::utils::{get, header, init_test_db, read_body, seed_test_record, signed_in_user};

fn seed_three(db: &crate::db::connection::Database) {
    seed_test_record(db, "t1", json!({
        "vehicleNumber": "TN-10-AA-0001", "ownerName": "Anand",
        "mobileNumber": "9876543210",
        "vehicleType": "car", "fuelType": "petrol",
        "testResult": "Pass", "testDate": "2026-03-01"
    }));
    seed_test_record(db, "t2", json!({
        "vehicleNumber": "TN-10-AA-0002", "ownerName": "Bala",
        "vehicleType": "bike", "fuelType": "petrol",
        "testResult": "Fail", "testDate": "2026-03-02"
    }));
    seed_test_record(db, "t3", json!({
        "vehicleNumber": "TN-10-AA-0003", "ownerName": "Chandru",
        "vehicleType": "truck", "fuelType": "diesel",
        "testResult": "Pass", "testDate": "2026-03-03"
    }));
}

#[test]
fn reports_page_requires_staff() {
    let db = init_test_db();
    let (_, token) = signed_in_user(&db, "owner@example.com", "user");

    let err = handle(get("/reports", Some(&token)), &db).unwrap_err();
    assert!(matches!(err, ServerError::Unauthorized(_)));
}

#[test]
fn reports_page_applies_filters() {
    let db = init_test_db();
    let (_, token) = signed_in_user(&db, "staff@example.com", "staff");
    seed_three(&db);

    let resp = handle(
        get("/reports?status=Pass&fuel_type=diesel", Some(&token)),
        &db,
    )
    .unwrap();
    let body = read_body(resp);

    assert!(body.contains("TN-10-AA-0003"));
    assert!(!body.contains("TN-10-AA-0001")); // petrol
    assert!(!body.contains("TN-10-AA-0002")); // Fail
}

#[test]
fn export_streams_csv_with_guarded_identifiers() {
    let db = init_test_db();
    let (user_id, token) = signed_in_user(&db, "staff@example.com", "staff");
    seed_three(&db);

    let resp = handle(get("/reports/export", Some(&token)), &db).unwrap();
    assert_eq!(resp.status(), 200);
    assert!(header(&resp, "Content-Type").starts_with("text/csv"));
    assert!(header(&resp, "Content-Disposition").contains("pollution_reports_"));

    let body = read_body(resp);
    let mut lines = body.lines();
    let csv_header = lines.next().unwrap();
    assert!(csv_header.starts_with("id,date,testDate"));
    assert_eq!(lines.count(), 3);
    assert!(body.contains("=\"9876543210\""));
    assert!(body.contains("=\"TN-10-AA-0001\""));

    // The export was recorded against the staff account.
    let recorded: i64 = db
        .with_conn(|conn| {
            conn.query_row(
                "select count(*) from export_events where user_id = ?",
                rusqlite::params![user_id],
                |r| r.get(0),
            )
            .map_err(|e| ServerError::DbError(e.to_string()))
        })
        .unwrap();
    assert_eq!(recorded, 1);
}

#[test]
fn export_with_empty_view_is_refused() {
    let db = init_test_db();
    let (user_id, token) = signed_in_user(&db, "staff@example.com", "staff");
    seed_three(&db);

    let err = handle(
        get("/reports/export?status=Pass&fuel_type=cng", Some(&token)),
        &db,
    )
    .unwrap_err();
    assert!(matches!(err, ServerError::CsvError(_)));

    // Nothing was recorded for the refused export.
    let recorded: i64 = db
        .with_conn(|conn| {
            conn.query_row(
                "select count(*) from export_events where user_id = ?",
                rusqlite::params![user_id],
                |r| r.get(0),
            )
            .map_err(|e| ServerError::DbError(e.to_string()))
        })
        .unwrap();
    assert_eq!(recorded, 0);
}

#[test]
fn export_honours_date_range_inclusively() {
    let db = init_test_db();
    let (_, token) = signed_in_user(&db, "staff@example.com", "staff");
    seed_three(&db);

    let resp = handle(
        get(
            "/reports/export?period=custom&start_date=2026-03-02&end_date=2026-03-03",
            Some(&token),
        ),
        &db,
    )
    .unwrap();
    let body = read_body(resp);

    assert!(!body.contains("TN-10-AA-0001"));
    assert!(body.contains("TN-10-AA-0002"));
    assert!(body.contains("TN-10-AA-0003"));
}

#[test]
fn recording_a_test_feeds_the_reports() {
    let db = init_test_db();
    let (_, token) = signed_in_user(&db, "staff@example.com", "staff");

    let resp = handle(
        crate::tests::utils::post_form(
            "/tests",
            Some(&token),
            "vehicle_number=tn-99-zz-1111&owner_name=Devi&mobile_number=9000090000&vehicle_type=auto&fuel_type=cng&test_result=Pass",
        ),
        &db,
    )
    .unwrap();
    assert_eq!(resp.status(), 302);

    let resp = handle(get("/reports", Some(&token)), &db).unwrap();
    let body = read_body(resp);
    assert!(body.contains("TN-99-ZZ-1111")); // stored uppercased
    assert!(body.contains("Devi"));
}
