// templates/pages/profile.rs

use crate::auth::sessions::CurrentUser;
use crate::db::users::UserRow;
use crate::templates::dashboard_layout;
use chrono::DateTime;
use maud::{html, Markup};

pub fn profile_page(user: &CurrentUser, row: &UserRow) -> Markup {
    dashboard_layout(
        "My Profile",
        user,
        html! {
            main class="container" style="padding: 1.5rem 1rem; max-width: 720px;" {
                h1 { "My Profile" }
                p style="color: #64748b;" { "Your account details." }

                div class="card" {
                    div style="display: grid; grid-template-columns: repeat(auto-fit, minmax(220px, 1fr)); gap: 1.25rem;" {
                        (detail("Full Name", if row.name.is_empty() { "N/A" } else { row.name.as_str() }))
                        (detail("Email Address", &row.email))
                        (detail("Account Role", &row.role))
                        (detail("Vehicle Number", row.vehicle_number.as_deref().unwrap_or("N/A")))
                        (detail("Mobile Number", row.mobile_number.as_deref().unwrap_or("N/A")))
                        (detail("Member Since", &member_since(row.created_at)))
                    }
                }
            }
        },
    )
}

fn detail(label: &str, value: &str) -> Markup {
    html! {
        div {
            div style="font-size: 0.8rem; font-weight: 600; color: #64748b; text-transform: uppercase;" { (label) }
            div style="margin-top: 0.25rem;" { (value) }
        }
    }
}

fn member_since(created_at: i64) -> String {
    DateTime::from_timestamp(created_at, 0)
        .map(|dt| dt.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| "N/A".into())
}
