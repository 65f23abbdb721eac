// src/tests/router_tests/auth_tests.rs
use crate::router::handle;
use crate::tests::utils::{get, header, init_test_db, post_form, read_body, signed_in_user};

#[test]
fn register_creates_account_and_signs_in() {
    let db = init_test_db();

    let req = post_form(
        "/register",
        None,
        "name=Kumar&email=kumar@example.com&vehicle_number=tn-38-cd-4321&mobile_number=9876501234&password=secret1&confirm_password=secret1",
    );
    let resp = handle(req, &db).unwrap();

    assert_eq!(resp.status(), 302);
    assert_eq!(header(&resp, "Location"), "/dashboard");
    assert!(header(&resp, "Set-Cookie").starts_with("session="));
}

#[test]
fn register_rejects_mismatched_passwords() {
    let db = init_test_db();

    let req = post_form(
        "/register",
        None,
        "name=Kumar&email=kumar@example.com&vehicle_number=TN-38-CD-4321&mobile_number=9876501234&password=secret1&confirm_password=different",
    );
    let resp = handle(req, &db).unwrap();

    assert_eq!(resp.status(), 200);
    assert!(read_body(resp).contains("Passwords do not match"));
}

#[test]
fn login_round_trip() {
    let db = init_test_db();
    signed_in_user(&db, "staff@example.com", "staff");

    // Wrong password stays on the login page with an error.
    let bad = post_form("/login", None, "email=staff@example.com&password=wrong11");
    let resp = handle(bad, &db).unwrap();
    assert_eq!(resp.status(), 200);
    assert!(read_body(resp).contains("check your credentials"));

    // Correct password redirects with a session cookie.
    let good = post_form("/login", None, "email=staff@example.com&password=secret1");
    let resp = handle(good, &db).unwrap();
    assert_eq!(resp.status(), 302);
    assert_eq!(header(&resp, "Location"), "/dashboard");

    let cookie = header(&resp, "Set-Cookie").to_string();
    let token = cookie
        .trim_start_matches("session=")
        .split(';')
        .next()
        .unwrap()
        .to_string();

    // The issued session opens the dashboard.
    let resp = handle(get("/dashboard", Some(&token)), &db).unwrap();
    assert_eq!(resp.status(), 200);
    assert!(read_body(resp).contains("staff@example.com"));
}

#[test]
fn unknown_email_fails_like_wrong_password() {
    let db = init_test_db();

    let req = post_form("/login", None, "email=nobody@example.com&password=secret1");
    let resp = handle(req, &db).unwrap();
    assert_eq!(resp.status(), 200);
    assert!(read_body(resp).contains("check your credentials"));
}

#[test]
fn dashboard_redirects_without_session() {
    let db = init_test_db();

    let resp = handle(get("/dashboard", None), &db).unwrap();
    assert_eq!(resp.status(), 302);
    assert_eq!(header(&resp, "Location"), "/login");
}

#[test]
fn logout_revokes_the_session() {
    let db = init_test_db();
    let (_, token) = signed_in_user(&db, "staff@example.com", "staff");

    let resp = handle(post_form("/logout", Some(&token), ""), &db).unwrap();
    assert_eq!(resp.status(), 302);

    // The old token no longer opens the dashboard.
    let resp = handle(get("/dashboard", Some(&token)), &db).unwrap();
    assert_eq!(resp.status(), 302);
    assert_eq!(header(&resp, "Location"), "/login");
}
