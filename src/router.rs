use std::collections::HashMap;
use std::io::Read;
use std::time::{SystemTime, UNIX_EPOCH};

use astra::Request;
use chrono::{DateTime, Months, NaiveDate, NaiveDateTime, SecondsFormat};
use serde_json::{Map, Value};

use crate::auth::password::{check_password_policy, verify_password};
use crate::auth::sessions::{self, CurrentUser};
use crate::db::connection::Database;
use crate::db::{exports, records, users};
use crate::domain::filter::{derive_view, FilterState};
use crate::domain::record::TestRecord;
use crate::domain::stats::compute_stats;
use crate::domain::verification::{certificate_is_valid, verify_latest};
use crate::errors::ServerError;
use crate::reports::{export_csv, export_filename};
use crate::responses::{
    csv_response, html_response, redirect_response, redirect_with_cookie, ResultResp,
};
use crate::store::RecordStore;
use crate::templates::pages;

pub fn handle(mut req: Request, db: &Database) -> ResultResp {
    let method = req.method().as_str().to_string();
    let path = req.uri().path().to_string();
    let now = now_unix();

    match (method.as_str(), path.as_str()) {
        ("GET", "/") => html_response(pages::home_page()),
        ("GET", "/about") => html_response(pages::about_page()),
        ("GET", "/contact") => html_response(pages::contact_page()),

        ("GET", "/verification") => verification(&req, db, now),
        ("GET", p) if p.starts_with("/certificate/") => {
            certificate(db, p.trim_start_matches("/certificate/"), now)
        }

        ("GET", "/login") => html_response(pages::login_page(None)),
        ("POST", "/login") => login(&mut req, db, now),
        ("GET", "/register") => html_response(pages::register_page(None)),
        ("POST", "/register") => register(&mut req, db, now),
        ("POST", "/logout") => logout(&req, db, now),

        ("GET", "/dashboard") => dashboard(&req, db, now),
        ("GET", "/reports") => reports(&req, db, now),
        ("GET", "/reports/export") => reports_export(&req, db, now),

        ("GET", "/tests/new") => new_test_form(&req, db, now),
        ("POST", "/tests") => create_test(&mut req, db, now),

        ("GET", "/users") => users_list(&req, db, now),
        ("POST", "/users") => users_create(&mut req, db, now),
        ("POST", p) if p.starts_with("/users/") && p.ends_with("/delete") => {
            users_delete(&req, db, p, now)
        }

        ("GET", "/profile") => profile(&req, db, now),

        _ => Err(ServerError::NotFound),
    }
}

// ---- public pages -------------------------------------------------------

fn verification(req: &Request, db: &Database, now: i64) -> ResultResp {
    let params = parse_query(req);
    let vehicle = params
        .get("vehicle")
        .map(|v| v.trim().to_uppercase())
        .unwrap_or_default();
    if vehicle.is_empty() {
        return html_response(pages::verification_page(None, None));
    }

    // A failed lookup degrades to the "no records" state; the page
    // never crashes over storage trouble.
    let outcome = match db.tests_for_vehicle(&vehicle) {
        Ok(records) => verify_latest(records, now_datetime(now)),
        Err(e) => {
            log::error!("certificate lookup for {vehicle} failed: {e}");
            None
        }
    };
    html_response(pages::verification_page(Some(&vehicle), outcome.as_ref()))
}

fn certificate(db: &Database, id: &str, now: i64) -> ResultResp {
    let Some(record) = db.find_test(id)? else {
        return Err(ServerError::NotFound);
    };
    let is_valid = certificate_is_valid(&record, now_datetime(now));
    html_response(pages::certificate_page(&record, is_valid))
}

// ---- auth ---------------------------------------------------------------

fn login(req: &mut Request, db: &Database, now: i64) -> ResultResp {
    let form = parse_form(req)?;
    let email = form.get("email").map(String::as_str).unwrap_or("");
    let password = form.get("password").map(String::as_str).unwrap_or("");

    // Malformed emails fail the same way as unknown ones.
    let found = match db.with_conn(|conn| users::find_login(conn, email)) {
        Ok(found) => found,
        Err(ServerError::BadRequest(_)) => None,
        Err(other) => return Err(other),
    };

    let verified = found.filter(|(_, stored)| verify_password(stored, password));
    let Some((user_id, _)) = verified else {
        log::warn!("failed login attempt for {email}");
        return html_response(pages::login_page(Some(
            "Failed to log in. Please check your credentials.",
        )));
    };

    let token = db.with_conn(|conn| {
        users::touch_last_login(conn, user_id, now)?;
        sessions::create_session(conn, user_id, now)
    })?;

    redirect_with_cookie("/dashboard", &session_cookie(&token))
}

fn register(req: &mut Request, db: &Database, now: i64) -> ResultResp {
    let form = parse_form(req)?;
    let get = |key: &str| form.get(key).map(String::as_str).unwrap_or("");

    if get("password") != get("confirm_password") {
        return html_response(pages::register_page(Some("Passwords do not match")));
    }
    if let Err(e) = check_password_policy(get("password")) {
        return html_response(pages::register_page(Some(&e.to_string())));
    }

    let new = users::NewUser {
        name: get("name").to_string(),
        email: get("email").to_string(),
        password: get("password").to_string(),
        role: "user".to_string(),
        vehicle_number: Some(get("vehicle_number").to_string()),
        mobile_number: Some(get("mobile_number").to_string()),
    };

    let user_id = match db.with_conn(|conn| users::create_user(conn, &new, now)) {
        Ok(id) => id,
        Err(ServerError::BadRequest(msg)) => {
            return html_response(pages::register_page(Some(&msg)));
        }
        Err(other) => return Err(other),
    };

    let token = db.with_conn(|conn| sessions::create_session(conn, user_id, now))?;
    redirect_with_cookie("/dashboard", &session_cookie(&token))
}

fn logout(req: &Request, db: &Database, now: i64) -> ResultResp {
    if let Some(token) = session_token(req) {
        db.with_conn(|conn| sessions::revoke_session(conn, &token, now))?;
    }
    redirect_with_cookie("/", "session=; Max-Age=0; Path=/; HttpOnly")
}

// ---- signed-in pages ----------------------------------------------------

fn dashboard(req: &Request, db: &Database, now: i64) -> ResultResp {
    let Some(user) = current_user(req, db, now)? else {
        return redirect_response("/login");
    };

    // Plain users only see their own vehicle's history.
    if !user.is_staff() {
        let records = match &user.vehicle_number {
            Some(vehicle) => fetch_or_empty(|| db.tests_for_vehicle(vehicle)),
            None => Vec::new(),
        };
        let rows: Vec<&TestRecord> = records.iter().collect();
        return html_response(pages::vehicle_dashboard_page(&user, &rows));
    }

    let all = fetch_or_empty(|| db.list_tests());
    let filter = FilterState::from_params(&parse_query(req), today(now));
    let view = derive_view(&all, &filter);
    let stats = compute_stats(&view, &all, today(now));
    let recent: Vec<&TestRecord> = view.iter().take(5).copied().collect();

    html_response(pages::dashboard_page(&user, filter.period, &stats, &recent))
}

fn reports(req: &Request, db: &Database, now: i64) -> ResultResp {
    let user = require_staff(req, db, now)?;

    let all = fetch_or_empty(|| db.list_tests());
    let filter = FilterState::from_params(&parse_query(req), today(now));
    let view = derive_view(&all, &filter);
    let exports_this_month =
        db.with_conn(|conn| exports::count_exports_this_month(conn, user.id, now))?;

    html_response(pages::reports_page(&user, &filter, &view, exports_this_month))
}

fn reports_export(req: &Request, db: &Database, now: i64) -> ResultResp {
    let user = require_staff(req, db, now)?;

    let all = fetch_or_empty(|| db.list_tests());
    let filter = FilterState::from_params(&parse_query(req), today(now));
    let view = derive_view(&all, &filter);

    let csv = match export_csv(&view) {
        Ok(csv) => csv,
        Err(e) => {
            log::warn!("export refused for {}: {e}", user.email);
            return Err(e);
        }
    };

    db.with_conn(|conn| exports::record_export(conn, user.id, view.len(), now))?;
    csv_response(csv, &export_filename(today(now)))
}

fn new_test_form(req: &Request, db: &Database, now: i64) -> ResultResp {
    let user = require_staff(req, db, now)?;
    html_response(pages::new_test_page(&user, None))
}

fn create_test(req: &mut Request, db: &Database, now: i64) -> ResultResp {
    let user = require_staff(req, db, now)?;
    let form = parse_form(req)?;
    let get = |key: &str| form.get(key).map(|s| s.trim()).unwrap_or("");

    let vehicle = get("vehicle_number").to_uppercase();
    if vehicle.is_empty() || get("owner_name").is_empty() {
        return html_response(pages::new_test_page(
            &user,
            Some("Vehicle number and owner name are required"),
        ));
    }

    let tested_at = now_datetime(now).and_utc();
    let expires_at = tested_at
        .checked_add_months(Months::new(6))
        .unwrap_or(tested_at);
    let stamp = |dt: chrono::DateTime<chrono::Utc>| {
        Value::String(dt.to_rfc3339_opts(SecondsFormat::Secs, true))
    };

    let mut fields = Map::new();
    fields.insert("vehicleNumber".into(), Value::String(vehicle));
    fields.insert("ownerName".into(), Value::String(get("owner_name").into()));
    if !get("mobile_number").is_empty() {
        fields.insert(
            "mobileNumber".into(),
            Value::String(get("mobile_number").into()),
        );
    }
    fields.insert(
        "vehicleType".into(),
        Value::String(get("vehicle_type").into()),
    );
    fields.insert("fuelType".into(), Value::String(get("fuel_type").into()));
    fields.insert(
        "testResult".into(),
        Value::String(get("test_result").into()),
    );
    fields.insert("testDate".into(), stamp(tested_at));
    fields.insert("expiryDate".into(), stamp(expires_at));
    fields.insert("createdAt".into(), stamp(tested_at));
    fields.insert("recordedBy".into(), Value::String(user.email.clone()));

    let id = records::new_document_id();
    db.with_conn(|conn| records::insert_record(conn, &id, &fields, now))?;

    redirect_response("/reports")
}

fn users_list(req: &Request, db: &Database, now: i64) -> ResultResp {
    let user = require_admin(req, db, now)?;
    let list = db.with_conn(|conn| users::list_users(conn))?;
    html_response(pages::users_page(&user, &list, None))
}

fn users_create(req: &mut Request, db: &Database, now: i64) -> ResultResp {
    let user = require_admin(req, db, now)?;
    let form = parse_form(req)?;
    let get = |key: &str| form.get(key).map(String::as_str).unwrap_or("");

    let role = match get("role") {
        r @ ("user" | "staff" | "admin") => r.to_string(),
        other => {
            return Err(ServerError::BadRequest(format!("unknown role: {other}")));
        }
    };

    if let Err(e) = check_password_policy(get("password")) {
        let list = db.with_conn(|conn| users::list_users(conn))?;
        return html_response(pages::users_page(&user, &list, Some(&e.to_string())));
    }

    let new = users::NewUser {
        name: get("name").to_string(),
        email: get("email").to_string(),
        password: get("password").to_string(),
        role,
        vehicle_number: Some(get("vehicle_number").to_string()),
        mobile_number: Some(get("mobile_number").to_string()),
    };

    match db.with_conn(|conn| users::create_user(conn, &new, now)) {
        Ok(_) => redirect_response("/users"),
        Err(ServerError::BadRequest(msg)) => {
            let list = db.with_conn(|conn| users::list_users(conn))?;
            html_response(pages::users_page(&user, &list, Some(&msg)))
        }
        Err(other) => Err(other),
    }
}

fn users_delete(req: &Request, db: &Database, path: &str, now: i64) -> ResultResp {
    require_admin(req, db, now)?;

    let id: i64 = path
        .trim_start_matches("/users/")
        .trim_end_matches("/delete")
        .parse()
        .map_err(|_| ServerError::BadRequest("invalid user id".into()))?;

    db.with_conn(|conn| users::delete_user(conn, id))?;
    redirect_response("/users")
}

fn profile(req: &Request, db: &Database, now: i64) -> ResultResp {
    let Some(user) = current_user(req, db, now)? else {
        return redirect_response("/login");
    };
    let row = db
        .with_conn(|conn| users::find_user(conn, user.id))?
        .ok_or(ServerError::NotFound)?;
    html_response(pages::profile_page(&user, &row))
}

// ---- helpers ------------------------------------------------------------

/// A failed record fetch logs the diagnostic and renders the empty
/// state instead of failing the page.
fn fetch_or_empty<F>(fetch: F) -> Vec<TestRecord>
where
    F: FnOnce() -> Result<Vec<TestRecord>, ServerError>,
{
    match fetch() {
        Ok(records) => records,
        Err(e) => {
            log::error!("fetching test records failed: {e}");
            Vec::new()
        }
    }
}

fn current_user(
    req: &Request,
    db: &Database,
    now: i64,
) -> Result<Option<CurrentUser>, ServerError> {
    let Some(token) = session_token(req) else {
        return Ok(None);
    };
    db.with_conn(|conn| sessions::load_user_from_session(conn, &token, now))
}

fn require_staff(req: &Request, db: &Database, now: i64) -> Result<CurrentUser, ServerError> {
    let user = current_user(req, db, now)?
        .ok_or_else(|| ServerError::Unauthorized("Please sign in".into()))?;
    if !user.is_staff() {
        return Err(ServerError::Unauthorized("Staff access only".into()));
    }
    Ok(user)
}

fn require_admin(req: &Request, db: &Database, now: i64) -> Result<CurrentUser, ServerError> {
    let user = current_user(req, db, now)?
        .ok_or_else(|| ServerError::Unauthorized("Please sign in".into()))?;
    if !user.is_admin() {
        return Err(ServerError::Unauthorized("Admins only".into()));
    }
    Ok(user)
}

fn session_cookie(token: &str) -> String {
    format!("session={token}; Path=/; HttpOnly; SameSite=Lax")
}

fn session_token(req: &Request) -> Option<String> {
    let header = req.headers().get("Cookie")?.to_str().ok()?;
    header.split(';').find_map(|pair| {
        let (name, value) = pair.trim().split_once('=')?;
        (name == "session").then(|| value.to_string())
    })
}

fn parse_query(req: &Request) -> HashMap<String, String> {
    let query = req.uri().query().unwrap_or("");
    url::form_urlencoded::parse(query.as_bytes())
        .into_owned()
        .collect()
}

fn parse_form(req: &mut Request) -> Result<HashMap<String, String>, ServerError> {
    let mut body = Vec::new();
    req.body_mut()
        .reader()
        .read_to_end(&mut body)
        .map_err(|e| ServerError::BadRequest(format!("unreadable request body: {e}")))?;
    Ok(url::form_urlencoded::parse(&body).into_owned().collect())
}

fn now_unix() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs() as i64
}

fn now_datetime(now: i64) -> NaiveDateTime {
    DateTime::from_timestamp(now, 0)
        .map(|dt| dt.naive_utc())
        .unwrap_or_else(|| DateTime::UNIX_EPOCH.naive_utc())
}

fn today(now: i64) -> NaiveDate {
    now_datetime(now).date()
}
