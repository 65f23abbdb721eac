// src/tests/router_tests/users_tests.rs

use crate::errors::ServerError;
use crate::router::handle;
use crate::tests::utils::{get, init_test_db, post_form, read_body, signed_in_user};

#[test]
fn user_management_is_admin_only() {
    let db = init_test_db();
    let (_, staff_token) = signed_in_user(&db, "staff@example.com", "staff");

    let err = handle(get("/users", Some(&staff_token)), &db).unwrap_err();
    assert!(matches!(err, ServerError::Unauthorized(_)));
}

#[test]
fn admin_can_create_and_delete_accounts() {
    let db = init_test_db();
    let (_, token) = signed_in_user(&db, "admin@example.com", "admin");

    // Create a staff account through the form.
    let resp = handle(
        post_form(
            "/users",
            Some(&token),
            "name=New+Staff&email=newstaff@example.com&vehicle_number=&mobile_number=9123456780&password=secret1&role=staff",
        ),
        &db,
    )
    .unwrap();
    assert_eq!(resp.status(), 302);

    let resp = handle(get("/users", Some(&token)), &db).unwrap();
    let body = read_body(resp);
    assert!(body.contains("newstaff@example.com"));
    assert!(body.contains("New Staff"));

    // The new account can sign in.
    let resp = handle(
        post_form("/login", None, "email=newstaff@example.com&password=secret1"),
        &db,
    )
    .unwrap();
    assert_eq!(resp.status(), 302);

    // Find its id and delete it.
    let new_id: i64 = db
        .with_conn(|conn| {
            conn.query_row(
                "select id from users where email = 'newstaff@example.com'",
                [],
                |r| r.get(0),
            )
            .map_err(|e| ServerError::DbError(e.to_string()))
        })
        .unwrap();

    let resp = handle(
        post_form(&format!("/users/{new_id}/delete"), Some(&token), ""),
        &db,
    )
    .unwrap();
    assert_eq!(resp.status(), 302);

    let resp = handle(get("/users", Some(&token)), &db).unwrap();
    assert!(!read_body(resp).contains("newstaff@example.com"));
}

#[test]
fn duplicate_email_shows_an_error_not_a_crash() {
    let db = init_test_db();
    let (_, token) = signed_in_user(&db, "admin@example.com", "admin");

    let resp = handle(
        post_form(
            "/users",
            Some(&token),
            "name=Dup&email=admin@example.com&vehicle_number=&mobile_number=&password=secret1&role=user",
        ),
        &db,
    )
    .unwrap();
    assert_eq!(resp.status(), 200);
    assert!(read_body(resp).contains("already exists"));
}

#[test]
fn unknown_role_is_rejected() {
    let db = init_test_db();
    let (_, token) = signed_in_user(&db, "admin@example.com", "admin");

    let err = handle(
        post_form(
            "/users",
            Some(&token),
            "name=X&email=x@example.com&password=secret1&role=superuser",
        ),
        &db,
    )
    .unwrap_err();
    assert!(matches!(err, ServerError::BadRequest(_)));
}

#[test]
fn profile_shows_account_details() {
    let db = init_test_db();
    let (_, token) = signed_in_user(&db, "owner@example.com", "user");

    let resp = handle(get("/profile", Some(&token)), &db).unwrap();
    let body = read_body(resp);
    assert!(body.contains("owner@example.com"));
    assert!(body.contains("TN-01-AB-1234"));
}
