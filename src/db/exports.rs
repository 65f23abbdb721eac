use rusqlite::{params, Connection};
use time::OffsetDateTime;

use crate::errors::ServerError;

/// Records a successful CSV export.
pub fn record_export(
    conn: &Connection,
    user_id: i64,
    row_count: usize,
    now: i64,
) -> Result<(), ServerError> {
    conn.execute(
        "insert into export_events (user_id, row_count, created_at) values (?, ?, ?)",
        params![user_id, row_count as i64, now],
    )
    .map_err(|e| ServerError::DbError(format!("record export failed: {e}")))?;
    Ok(())
}

/// Counts exports for the user in the current calendar month (UTC).
pub fn count_exports_this_month(
    conn: &Connection,
    user_id: i64,
    now: i64,
) -> Result<i64, ServerError> {
    let start_of_month = start_of_month(now);

    let count: i64 = conn
        .query_row(
            "select count(*) from export_events where user_id = ? and created_at >= ?",
            params![user_id, start_of_month],
            |r| r.get(0),
        )
        .map_err(|e| ServerError::DbError(format!("count exports failed: {e}")))?;

    Ok(count)
}

/// Start of the calendar month containing `now`, as a unix timestamp.
fn start_of_month(now: i64) -> i64 {
    let dt = OffsetDateTime::from_unix_timestamp(now).unwrap_or_else(|_| OffsetDateTime::now_utc());

    // Day 1 is valid for every month, so replace_day can't fail here.
    dt.replace_day(1)
        .unwrap_or(dt)
        .replace_time(time::Time::MIDNIGHT)
        .unix_timestamp()
}
