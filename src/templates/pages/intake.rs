// templates/pages/intake.rs

use crate::auth::sessions::CurrentUser;
use crate::domain::record::{FUEL_TYPES, TEST_RESULTS, VEHICLE_TYPES};
use crate::templates::dashboard_layout;
use maud::{html, Markup};

/// Staff form for recording a completed emission test.
pub fn new_test_page(user: &CurrentUser, error: Option<&str>) -> Markup {
    dashboard_layout(
        "Record Test",
        user,
        html! {
            main class="container" style="padding: 1.5rem 1rem; max-width: 720px;" {
                h1 { "Record New Test" }
                p style="color: #64748b;" { "Certificate validity runs 6 months from the test date." }

                @if let Some(msg) = error {
                    div class="error-message" { (msg) }
                }

                div class="card" {
                    form method="post" action="/tests" class="form-grid" {
                        div {
                            label for="vehicle_number" { "Vehicle Number" }
                            input type="text" id="vehicle_number" name="vehicle_number" placeholder="TN-01-AB-1234" class="uppercase" required;
                        }
                        div {
                            label for="owner_name" { "Owner Name" }
                            input type="text" id="owner_name" name="owner_name" placeholder="John Doe" required;
                        }
                        div {
                            label for="mobile_number" { "Mobile Number" }
                            input type="tel" id="mobile_number" name="mobile_number" placeholder="9876543210";
                        }
                        div {
                            label for="vehicle_type" { "Vehicle Type" }
                            select name="vehicle_type" id="vehicle_type" {
                                @for vt in VEHICLE_TYPES {
                                    option value=(vt) class="capitalize" { (vt) }
                                }
                            }
                        }
                        div {
                            label for="fuel_type" { "Fuel Type" }
                            select name="fuel_type" id="fuel_type" {
                                @for ft in FUEL_TYPES {
                                    option value=(ft) class="capitalize" { (ft) }
                                }
                            }
                        }
                        div {
                            label for="test_result" { "Result" }
                            select name="test_result" id="test_result" {
                                @for result in TEST_RESULTS {
                                    option value=(result) { (result) }
                                }
                            }
                        }
                        div style="display: flex; align-items: flex-end;" {
                            button type="submit" class="btn btn-primary" style="width: 100%;" { "Save Test" }
                        }
                    }
                }
            }
        },
    )
}
