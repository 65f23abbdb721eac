use crate::auth::sessions::CurrentUser;
use crate::domain::filter::Period;
use crate::domain::record::TestRecord;
use crate::domain::stats::DashboardStats;
use crate::templates::components::{breakdown_bars, period_tabs, stat_card, status_badge};
use crate::templates::dashboard_layout;
use maud::{html, Markup};

/// Staff/admin overview: period tabs, stat cards, breakdowns, recent
/// tests.
pub fn dashboard_page(
    user: &CurrentUser,
    period: Period,
    stats: &DashboardStats,
    recent: &[&TestRecord],
) -> Markup {
    let total_sub = if period == Period::All {
        "Lifetime tests"
    } else {
        "In selected period"
    };
    dashboard_layout(
        "Dashboard",
        user,
        html! {
            main class="container" style="padding: 1.5rem 1rem;" {
                h1 { "Dashboard Overview" }
                p style="color: #64748b;" {
                    "Welcome back, " strong { (user.email) }
                    " | Role: " span class="capitalize" { (user.role) }
                }

                (period_tabs(period.as_str(), |p| format!("/dashboard?period={p}")))

                div style="display: grid; grid-template-columns: repeat(auto-fit, minmax(180px, 1fr)); gap: 1rem;" {
                    (stat_card("Total Tests", stats.total, total_sub))
                    (stat_card("Passed", stats.passed, "Vehicles cleared"))
                    (stat_card("Failed", stats.failed, "Needs attention"))
                    (stat_card("Today's Activity", stats.today_count, "Tests run today"))
                }

                div style="display: grid; grid-template-columns: repeat(auto-fit, minmax(300px, 1fr)); gap: 1.25rem; margin-top: 1.25rem;" {
                    (breakdown_bars("Vehicle Types", &stats.vehicle_types))
                    (breakdown_bars("Fuel Types", &stats.fuel_types))
                }

                section class="card" {
                    h2 {
                        @if period == Period::All { "Recent Tests" } @else { "Tests in Period" }
                    }
                    (tests_table(recent, "No tests recorded in this period."))
                }
            }
        },
    )
}

/// What a plain user sees: the tests on file for their own vehicle.
pub fn vehicle_dashboard_page(user: &CurrentUser, records: &[&TestRecord]) -> Markup {
    dashboard_layout(
        "Dashboard",
        user,
        html! {
            main class="container" style="padding: 1.5rem 1rem;" {
                h1 { "User Dashboard" }
                p style="color: #64748b;" {
                    "Welcome back, "
                    strong {
                        @if user.name.is_empty() { (user.email) } @else { (user.name) }
                    }
                }

                section class="card" {
                    h2 {
                        "Your Vehicle"
                        @if let Some(vehicle) = &user.vehicle_number {
                            ": " span class="uppercase" { (vehicle) }
                        }
                    }
                    @if user.vehicle_number.is_none() {
                        p style="color: #64748b;" { "No vehicle registered on this account." }
                    } @else {
                        (tests_table(records, "No tests recorded for your vehicle yet."))
                    }
                }
            }
        },
    )
}

fn tests_table(records: &[&TestRecord], empty_message: &str) -> Markup {
    html! {
        div style="overflow-x: auto;" {
            table class="data-table" {
                thead {
                    tr {
                        th { "Date" }
                        th { "Vehicle No" }
                        th { "Owner" }
                        th { "Type" }
                        th { "Result" }
                        th { "Action" }
                    }
                }
                tbody {
                    @if records.is_empty() {
                        tr { td colspan="6" style="text-align: center; padding: 2rem; color: #64748b;" { (empty_message) } }
                    }
                    @for test in records {
                        tr {
                            td { (test.day_string()) }
                            td class="uppercase" { (test.field_str("vehicleNumber").unwrap_or("N/A")) }
                            td { (test.field_str("ownerName").unwrap_or("N/A")) }
                            td class="capitalize" { (test.field_str("vehicleType").unwrap_or("-")) }
                            td { (status_badge(test.field_str("testResult"))) }
                            td { a href=(format!("/certificate/{}", test.id)) { "View" } }
                        }
                    }
                }
            }
        }
    }
}
