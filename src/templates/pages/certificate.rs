// templates/pages/certificate.rs

use crate::domain::record::TestRecord;
use crate::templates::components::status_badge;
use crate::templates::public_layout;
use maud::{html, Markup};

/// Certificate detail page, reachable from verification results and
/// every test table.
pub fn certificate_page(record: &TestRecord, is_valid: bool) -> Markup {
    let field = |key: &str| record.field_str(key).unwrap_or("N/A").to_string();
    public_layout(
        "Certificate",
        "Verify",
        html! {
            main class="container" style="padding: 3rem 1rem; max-width: 640px;" {
                div class="card" {
                    div style="display: flex; justify-content: space-between; align-items: center;" {
                        h1 style="margin: 0;" { "Emission Test Certificate" }
                        @if is_valid {
                            span style="color: #059669; font-weight: 700;" { "VALID" }
                        } @else {
                            span style="color: #dc2626; font-weight: 700;" { "EXPIRED" }
                        }
                    }
                    p style="color: #94a3b8; font-size: 0.85em;" { "Certificate No: " (record.id) }

                    table class="data-table" {
                        tr { th { "Vehicle Number" } td class="uppercase" { (field("vehicleNumber")) } }
                        tr { th { "Owner" } td { (field("ownerName")) } }
                        tr { th { "Vehicle Type" } td class="capitalize" { (field("vehicleType")) } }
                        tr { th { "Fuel Type" } td class="capitalize" { (field("fuelType")) } }
                        tr { th { "Test Date" } td { (record.day_string()) } }
                        tr {
                            th { "Valid Until" }
                            td {
                                @match record.expiry_date() {
                                    Some(expiry) => (expiry.format("%Y-%m-%d")),
                                    None => "N/A",
                                }
                            }
                        }
                        tr { th { "Result" } td { (status_badge(record.field_str("testResult"))) } }
                    }
                }
            }
        },
    )
}
