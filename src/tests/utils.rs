use std::io::Read;
use std::time::{SystemTime, UNIX_EPOCH};

use astra::{Body, Response};
use http::Method;
use serde_json::{Map, Value};

use crate::auth::sessions;
use crate::db::connection::{init_db, Database};
use crate::db::records;
use crate::db::users::{create_user, NewUser};

/// Fresh file-backed test DB using the production schema. A unique path
/// per call keeps parallel tests from trampling each other.
pub fn init_test_db() -> Database {
    let path = std::env::temp_dir().join(format!(
        "emission_portal_test_{}.sqlite",
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ));
    let db = Database::new(path.to_string_lossy());

    init_db(&db, "sql/schema.sql").expect("Failed to initialize test DB");
    db
}

pub fn now_unix() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_secs() as i64
}

/// Create an account with the given role and an open session; returns
/// (user_id, session_token).
pub fn signed_in_user(db: &Database, email: &str, role: &str) -> (i64, String) {
    let now = now_unix();
    let user_id = db
        .with_conn(|conn| {
            create_user(
                conn,
                &NewUser {
                    name: "Test Account".into(),
                    email: email.into(),
                    password: "secret1".into(),
                    role: role.into(),
                    vehicle_number: Some("TN-01-AB-1234".into()),
                    mobile_number: Some("9876543210".into()),
                },
                now,
            )
        })
        .expect("Failed to create user");

    let token = db
        .with_conn(|conn| sessions::create_session(conn, user_id, now))
        .expect("Failed to create session");

    (user_id, token)
}

/// Insert a test record document straight into the store.
pub fn seed_test_record(db: &Database, id: &str, fields: Value) {
    let fields: Map<String, Value> = fields.as_object().expect("expected object").clone();
    db.with_conn(|conn| records::insert_record(conn, id, &fields, now_unix()))
        .expect("Failed to seed record");
}

pub fn get(path: &str, session: Option<&str>) -> astra::Request {
    request(Method::GET, path, session, Body::empty())
}

pub fn post_form(path: &str, session: Option<&str>, form: &str) -> astra::Request {
    let mut req = request(Method::POST, path, session, Body::from(form.to_string()));
    req.headers_mut().insert(
        "Content-Type",
        "application/x-www-form-urlencoded".parse().unwrap(),
    );
    req
}

fn request(method: Method, path: &str, session: Option<&str>, body: Body) -> astra::Request {
    let mut builder = http::Request::builder().method(method).uri(path);
    if let Some(token) = session {
        builder = builder.header("Cookie", format!("session={token}"));
    }
    builder.body(body).unwrap()
}

pub fn read_body(resp: Response) -> String {
    let mut body = String::new();
    resp.into_body()
        .reader()
        .read_to_string(&mut body)
        .unwrap();
    body
}

pub fn header<'a>(resp: &'a Response, name: &str) -> &'a str {
    resp.headers()
        .get(name)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
}
