// templates/pages/users.rs

use crate::auth::sessions::CurrentUser;
use crate::db::users::UserRow;
use crate::templates::dashboard_layout;
use chrono::DateTime;
use maud::{html, Markup};

pub fn users_page(user: &CurrentUser, users: &[UserRow], error: Option<&str>) -> Markup {
    dashboard_layout(
        "User Management",
        user,
        html! {
            main class="container" style="padding: 1.5rem 1rem;" {
                h1 { "User Management" }
                p style="color: #64748b;" { "Manage registered users and their details." }

                @if let Some(msg) = error {
                    div class="error-message" { (msg) }
                }

                section class="card" {
                    h3 { "Create New User Account" }
                    form method="post" action="/users" class="form-grid" {
                        div {
                            label for="name" { "Full Name" }
                            input type="text" id="name" name="name" placeholder="John Doe" required;
                        }
                        div {
                            label for="email" { "Email Address" }
                            input type="email" id="email" name="email" placeholder="user@example.com" required;
                        }
                        div {
                            label for="vehicle_number" { "Vehicle Number" }
                            input type="text" id="vehicle_number" name="vehicle_number" placeholder="TN-01-AB-1234" class="uppercase";
                        }
                        div {
                            label for="mobile_number" { "Mobile Number" }
                            input type="tel" id="mobile_number" name="mobile_number" placeholder="9876543210";
                        }
                        div {
                            label for="password" { "Password" }
                            input type="password" id="password" name="password" placeholder="••••••••" required;
                        }
                        div {
                            label for="role" { "Role" }
                            select name="role" id="role" {
                                option value="user" selected { "User" }
                                option value="staff" { "Staff" }
                                option value="admin" { "Admin" }
                            }
                        }
                        div style="display: flex; align-items: flex-end;" {
                            button type="submit" class="btn btn-primary" style="width: 100%;" { "Create Account" }
                        }
                    }
                }

                section class="card" {
                    div style="overflow-x: auto;" {
                        table class="data-table" {
                            thead {
                                tr {
                                    th { "Name / Contact" }
                                    th { "Vehicle" }
                                    th { "Role" }
                                    th { "Joined" }
                                    th { "Actions" }
                                }
                            }
                            tbody {
                                @if users.is_empty() {
                                    tr { td colspan="5" style="text-align: center; padding: 2rem; color: #64748b;" { "No records found" } }
                                }
                                @for row in users {
                                    tr {
                                        td {
                                            div style="font-weight: 600;" {
                                                @if row.name.is_empty() { "N/A" } @else { (row.name) }
                                            }
                                            div style="font-size: 0.85rem; color: #64748b;" { (row.email) }
                                            @if let Some(mobile) = &row.mobile_number {
                                                div style="font-size: 0.8rem; color: #64748b;" { (mobile) }
                                            }
                                        }
                                        td class="uppercase" { (row.vehicle_number.as_deref().unwrap_or("-")) }
                                        td class="capitalize" { (row.role) }
                                        td style="color: #64748b;" { (joined_day(row.created_at)) }
                                        td {
                                            form method="post" action=(format!("/users/{}/delete", row.id))
                                                onsubmit="return confirm('Are you sure? This will delete the record from the database.');"
                                                style="margin: 0;"
                                            {
                                                button type="submit" class="btn btn-danger" { "Remove" }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        },
    )
}

fn joined_day(created_at: i64) -> String {
    DateTime::from_timestamp(created_at, 0)
        .map(|dt| dt.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| "N/A".into())
}
