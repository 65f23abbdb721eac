// templates/pages/reports.rs

use crate::auth::sessions::CurrentUser;
use crate::domain::filter::{FilterState, Period};
use crate::domain::record::{TestRecord, FUEL_TYPES, TEST_RESULTS, VEHICLE_TYPES};
use crate::templates::components::{period_tabs, status_badge};
use crate::templates::dashboard_layout;
use maud::{html, Markup};

pub fn reports_page(
    user: &CurrentUser,
    filter: &FilterState,
    view: &[&TestRecord],
    exports_this_month: i64,
) -> Markup {
    dashboard_layout(
        "Test Reports",
        user,
        html! {
            main class="container" style="padding: 1.5rem 1rem;" {
                div style="display: flex; justify-content: space-between; align-items: center;" {
                    h1 { "Test Reports" }
                    div style="text-align: right;" {
                        a class="btn btn-primary" href=(format!("/reports/export?{}", filter_query(filter, filter.period))) {
                            "⬇ Download CSV"
                        }
                        div style="font-size: 0.8em; color: #64748b; margin-top: 0.3rem;" {
                            (exports_this_month) " exports this month"
                        }
                    }
                }

                (period_tabs(filter.period.as_str(), |p| {
                    format!("/reports?{}", filter_query(filter, Period::parse(p).unwrap_or_default()))
                }))

                (filters_card(filter))

                section class="card" {
                    p style="color: #64748b;" { "Found " strong { (view.len()) } " records." }
                    (reports_table(view))
                }
            }
        },
    )
}

/// Query string for the current filter, with `period` swapped for the
/// given preset. Preset links drop the custom dates on purpose: picking
/// a preset overwrites them.
fn filter_query(filter: &FilterState, period: Period) -> String {
    let mut parts = vec![
        format!("period={}", period.as_str()),
        format!("status={}", filter.status),
        format!("vehicle_type={}", filter.vehicle_type),
        format!("fuel_type={}", filter.fuel_type),
    ];
    if period == Period::Custom {
        parts.push(format!("start_date={}", filter.start_date));
        parts.push(format!("end_date={}", filter.end_date));
    }
    parts.join("&")
}

fn filters_card(filter: &FilterState) -> Markup {
    html! {
        section class="card" {
            // Submitting this form always lands on period=custom: any
            // manually edited date input deactivates the preset tabs.
            form method="get" action="/reports" class="form-grid" {
                input type="hidden" name="period" value="custom";
                div {
                    label for="status" { "Status" }
                    select name="status" id="status" {
                        option value="all" selected[filter.status == "all"] { "All Status" }
                        @for result in TEST_RESULTS {
                            option value=(result) selected[filter.status == *result] { (result) }
                        }
                    }
                }
                div {
                    label for="vehicle_type" { "Vehicle Type" }
                    select name="vehicle_type" id="vehicle_type" {
                        option value="all" selected[filter.vehicle_type == "all"] { "All Vehicles" }
                        @for vt in VEHICLE_TYPES {
                            option value=(vt) selected[filter.vehicle_type == *vt] class="capitalize" { (vt) }
                        }
                    }
                }
                div {
                    label for="fuel_type" { "Fuel Type" }
                    select name="fuel_type" id="fuel_type" {
                        option value="all" selected[filter.fuel_type == "all"] { "All Fuels" }
                        @for ft in FUEL_TYPES {
                            option value=(ft) selected[filter.fuel_type == *ft] class="capitalize" { (ft) }
                        }
                    }
                }
                div {
                    label for="start_date" { "Start Date" }
                    input type="date" name="start_date" id="start_date" value=(filter.start_date);
                }
                div {
                    label for="end_date" { "End Date" }
                    input type="date" name="end_date" id="end_date" value=(filter.end_date);
                }
                div style="display: flex; align-items: flex-end;" {
                    button type="submit" class="btn btn-primary" style="width: 100%;" { "Apply Filters" }
                }
            }
        }
    }
}

fn reports_table(view: &[&TestRecord]) -> Markup {
    html! {
        div style="overflow-x: auto;" {
            table class="data-table" {
                thead {
                    tr {
                        th { "Date" }
                        th { "Vehicle" }
                        th { "Type" }
                        th { "Owner" }
                        th { "Status" }
                        th { "Link" }
                    }
                }
                tbody {
                    @if view.is_empty() {
                        tr { td colspan="6" style="text-align: center; padding: 2rem; color: #64748b;" { "No matching records found." } }
                    }
                    @for test in view {
                        tr {
                            td { (test.day_string()) }
                            td class="uppercase" { (test.field_str("vehicleNumber").unwrap_or("N/A")) }
                            td class="capitalize" { (test.field_str("vehicleType").unwrap_or("-")) }
                            td { (test.field_str("ownerName").unwrap_or("N/A")) }
                            td { (status_badge(test.field_str("testResult"))) }
                            td { a href=(format!("/certificate/{}", test.id)) { "View Cert" } }
                        }
                    }
                }
            }
        }
    }
}
