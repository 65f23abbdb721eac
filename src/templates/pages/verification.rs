// templates/pages/verification.rs

use crate::domain::verification::VerificationOutcome;
use crate::templates::components::status_badge;
use crate::templates::public_layout;
use maud::{html, Markup};

/// Public certificate lookup. `searched` is the submitted registration
/// number (if any); `outcome` the latest test found for it.
pub fn verification_page(searched: Option<&str>, outcome: Option<&VerificationOutcome>) -> Markup {
    public_layout(
        "Verify Certificate",
        "Verify",
        html! {
            main class="container" style="padding: 3rem 1rem; max-width: 640px;" {
                div class="card" {
                    h1 { "Verify Certificate" }
                    p style="color: #64748b;" { "Enter vehicle number to check pollution test status." }

                    form method="get" action="/verification" style="display: flex; gap: 10px; margin: 1.25rem 0;" {
                        input
                            type="text"
                            name="vehicle"
                            placeholder="e.g. TN-01-AB-1234"
                            value=(searched.unwrap_or(""))
                            class="uppercase"
                            style="flex: 1; padding: 10px; border: 1px solid #cbd5e1; border-radius: 8px;"
                            required;
                        button type="submit" class="btn btn-primary" { "Verify" }
                    }

                    @if let Some(vehicle) = searched {
                        @match outcome {
                            Some(found) => (result_card(vehicle, found)),
                            None => div class="error-message" {
                                "No records found for this vehicle number."
                            },
                        }
                    }
                }
            }
        },
    )
}

fn result_card(vehicle: &str, outcome: &VerificationOutcome) -> Markup {
    let (border, heading) = if outcome.is_valid {
        ("#10b981", "VALID")
    } else {
        ("#f59e0b", "EXPIRED")
    };
    html! {
        div style=(format!("border: 2px solid {border}; border-radius: 12px; padding: 1.25rem;")) {
            h3 class="uppercase" style="margin-top: 0;" { (vehicle) }
            p {
                "Status: " strong { (heading) }
                " " (status_badge(outcome.record.field_str("testResult")))
            }
            @match outcome.expiry {
                Some(expiry) => p { "Expires on: " (expiry.format("%Y-%m-%d")) },
                None => p style="color: #94a3b8;" { "No expiry date on file." },
            }
            a href=(format!("/certificate/{}", outcome.record.id)) {
                "View Certificate →"
            }
        }
    }
}
