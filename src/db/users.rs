// src/db/users.rs
use rusqlite::{params, Connection, OptionalExtension};

use crate::auth::password::hash_password;
use crate::errors::ServerError;

#[derive(Debug, Clone)]
pub struct UserRow {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub role: String,
    pub vehicle_number: Option<String>,
    pub mobile_number: Option<String>,
    pub created_at: i64,
    pub last_login_at: Option<i64>,
}

/// Input for both self-registration and admin-created accounts.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: String,
    pub vehicle_number: Option<String>,
    pub mobile_number: Option<String>,
}

/// Trim + lowercase, minimal sanity check.
pub fn normalize_email(email: &str) -> Result<String, ServerError> {
    let e = email.trim().to_lowercase();
    if e.is_empty() || !e.contains('@') || e.starts_with('@') || e.ends_with('@') {
        return Err(ServerError::BadRequest("invalid email".into()));
    }
    Ok(e)
}

/// Insert a new account. Fails with BadRequest if the email is taken.
pub fn create_user(conn: &Connection, new: &NewUser, now: i64) -> Result<i64, ServerError> {
    let email = normalize_email(&new.email)?;
    let password = hash_password(&new.password);
    let vehicle = new
        .vehicle_number
        .as_deref()
        .map(|v| v.trim().to_uppercase())
        .filter(|v| !v.is_empty());
    let mobile = new
        .mobile_number
        .as_deref()
        .map(str::trim)
        .filter(|m| !m.is_empty());

    let inserted = conn
        .execute(
            r#"
            insert or ignore into users
              (name, email, password, role, vehicle_number, mobile_number, created_at)
            values (?, ?, ?, ?, ?, ?, ?)
            "#,
            params![
                new.name.trim(),
                email,
                password,
                new.role,
                vehicle,
                mobile,
                now
            ],
        )
        .map_err(|e| ServerError::DbError(format!("insert user failed: {e}")))?;

    if inserted == 0 {
        return Err(ServerError::BadRequest(
            "An account with this email already exists".into(),
        ));
    }

    Ok(conn.last_insert_rowid())
}

/// Look up the credentials blob for a login attempt.
pub fn find_login(
    conn: &Connection,
    email: &str,
) -> Result<Option<(i64, Vec<u8>)>, ServerError> {
    let email = normalize_email(email)?;
    conn.query_row(
        "select id, password from users where email = ?",
        params![email],
        |r| Ok((r.get(0)?, r.get(1)?)),
    )
    .optional()
    .map_err(|e| ServerError::DbError(format!("select login failed: {e}")))
}

pub fn touch_last_login(conn: &Connection, user_id: i64, now: i64) -> Result<(), ServerError> {
    conn.execute(
        "update users set last_login_at = ? where id = ?",
        params![now, user_id],
    )
    .map_err(|e| ServerError::DbError(format!("update last_login_at failed: {e}")))?;
    Ok(())
}

/// All accounts, newest first. Admin user-management listing.
pub fn list_users(conn: &Connection) -> Result<Vec<UserRow>, ServerError> {
    let mut stmt = conn
        .prepare(
            r#"
            select id, name, email, role, vehicle_number, mobile_number,
                   created_at, last_login_at
            from users
            order by created_at desc, id desc
            "#,
        )
        .map_err(|e| ServerError::DbError(format!("prepare list users failed: {e}")))?;

    let rows = stmt
        .query_map([], |row| {
            Ok(UserRow {
                id: row.get(0)?,
                name: row.get(1)?,
                email: row.get(2)?,
                role: row.get(3)?,
                vehicle_number: row.get(4)?,
                mobile_number: row.get(5)?,
                created_at: row.get(6)?,
                last_login_at: row.get(7)?,
            })
        })
        .map_err(|e| ServerError::DbError(format!("list users failed: {e}")))?;

    let mut users = Vec::new();
    for r in rows {
        users.push(r.map_err(|e| ServerError::DbError(e.to_string()))?);
    }
    Ok(users)
}

pub fn find_user(conn: &Connection, user_id: i64) -> Result<Option<UserRow>, ServerError> {
    conn.query_row(
        r#"
        select id, name, email, role, vehicle_number, mobile_number,
               created_at, last_login_at
        from users
        where id = ?
        "#,
        params![user_id],
        |row| {
            Ok(UserRow {
                id: row.get(0)?,
                name: row.get(1)?,
                email: row.get(2)?,
                role: row.get(3)?,
                vehicle_number: row.get(4)?,
                mobile_number: row.get(5)?,
                created_at: row.get(6)?,
                last_login_at: row.get(7)?,
            })
        },
    )
    .optional()
    .map_err(|e| ServerError::DbError(format!("select user failed: {e}")))
}

/// Delete an account. Sessions and export events cascade.
pub fn delete_user(conn: &Connection, user_id: i64) -> Result<(), ServerError> {
    let deleted = conn
        .execute("delete from users where id = ?", params![user_id])
        .map_err(|e| ServerError::DbError(format!("delete user failed: {e}")))?;
    if deleted == 0 {
        return Err(ServerError::NotFound);
    }
    Ok(())
}

/// Make sure a bootstrap admin account exists. Called once at startup;
/// idempotent, so an existing admin (same email) is left untouched.
pub fn ensure_admin(
    conn: &Connection,
    email: &str,
    password: &str,
    now: i64,
) -> Result<(), ServerError> {
    let exists: Option<i64> = conn
        .query_row(
            "select id from users where email = ?",
            params![normalize_email(email)?],
            |r| r.get(0),
        )
        .optional()
        .map_err(|e| ServerError::DbError(format!("select admin failed: {e}")))?;

    if exists.is_some() {
        return Ok(());
    }

    create_user(
        conn,
        &NewUser {
            name: "Administrator".into(),
            email: email.into(),
            password: password.into(),
            role: "admin".into(),
            vehicle_number: None,
            mobile_number: None,
        },
        now,
    )?;
    log::info!("created bootstrap admin account for {email}");
    Ok(())
}
