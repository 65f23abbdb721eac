use std::env;
use std::net::SocketAddr;
use std::time::{SystemTime, UNIX_EPOCH};

use astra::Server;

use crate::db::connection::{init_db, Database};
use crate::responses::error_to_response;
use crate::router::handle;

mod auth;
mod db;
mod domain;
mod errors;
mod reports;
mod responses;
mod router;
mod store;
mod templates;

#[cfg(test)]
mod tests;

fn main() {
    env_logger::init();

    let db_path = env::var("PORTAL_DB").unwrap_or_else(|_| "emission_portal.sqlite3".to_string());
    let db = Database::new(db_path);

    if let Err(e) = init_db(&db, "sql/schema.sql") {
        log::error!("database initialization failed: {e}");
        std::process::exit(1);
    }

    // Bootstrap admin so a fresh install is immediately usable.
    let admin_email = env::var("ADMIN_EMAIL").unwrap_or_else(|_| "admin@anbu-emission.com".into());
    let admin_password = env::var("ADMIN_PASSWORD").unwrap_or_else(|_| "change-me-soon".into());
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs() as i64;
    if let Err(e) = db.with_conn(|conn| db::users::ensure_admin(conn, &admin_email, &admin_password, now)) {
        log::error!("admin bootstrap failed: {e}");
        std::process::exit(1);
    }

    let addr: SocketAddr = env::var("PORTAL_ADDR")
        .unwrap_or_else(|_| "127.0.0.1:3000".to_string())
        .parse()
        .expect("PORTAL_ADDR must be host:port");
    log::info!("starting server at http://{addr}");

    let server = Server::bind(addr).max_workers(8);

    let result = server.serve(move |req, _info| match handle(req, &db) {
        Ok(resp) => resp,
        Err(err) => error_to_response(err),
    });

    if let Err(e) = result {
        log::error!("server ended with error: {e}");
    }
}
