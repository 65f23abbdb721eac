// templates/pages/home.rs

use crate::templates::public_layout;
use maud::{html, Markup};

pub fn home_page() -> Markup {
    public_layout(
        "Home",
        "Home",
        html! {
            section class="container" style="padding: 4rem 1rem; text-align: center;" {
                h1 style="font-size: 2.4rem; margin-bottom: 0.5rem;" {
                    "Clean Air, " span style="color: #059669;" { "Greener Future" }
                }
                p style="color: #64748b; max-width: 560px; margin: 0 auto 2rem auto;" {
                    "Leading the way in vehicle emission compliance. We ensure your vehicle "
                    "meets environmental standards with precision and speed."
                }
                div style="display: flex; gap: 1rem; justify-content: center;" {
                    a href="/login" class="btn btn-primary" { "User Login" }
                    a href="/verification" class="btn" style="background: #e2e8f0;" { "Verify a Certificate" }
                }
            }

            section class="container" style="display: grid; grid-template-columns: repeat(auto-fit, minmax(240px, 1fr)); gap: 1.25rem; padding-bottom: 3rem;" {
                div class="card" {
                    h3 { "Fast Track Service" }
                    p style="color: #64748b;" { "Our 10-minute accelerated testing process is designed for busy professionals." }
                }
                div class="card" {
                    h3 { "Secure & Valid" }
                    p style="color: #64748b;" { "Tamper-proof digital certificates directly linked to the national transport database." }
                }
                div class="card" {
                    h3 { "Eco-Compliant" }
                    p style="color: #64748b;" { "Join thousands of responsible citizens contributing to a cleaner, healthier environment." }
                }
            }
        },
    )
}

pub fn about_page() -> Markup {
    public_layout(
        "About",
        "About",
        html! {
            main class="container" style="padding: 3rem 1rem; max-width: 800px;" {
                div class="card" {
                    h1 { "About ANBU Emission Test" }
                    p style="color: #64748b;" {
                        "ANBU Emission Test Centre is a government-authorized facility dedicated to "
                        "ensuring cleaner air for our community. Established with the vision of reducing "
                        "vehicular pollution, we use state-of-the-art equipment to provide accurate and "
                        "reliable emission testing services for all types of vehicles."
                    }

                    h2 style="margin-top: 2rem;" { "Our Mission" }
                    p style="color: #64748b;" {
                        "To contribute to a healthier environment by ensuring every vehicle on the road "
                        "complies with emission standards set by the Government of India."
                    }

                    h2 style="margin-top: 2rem;" { "Why Choose Us?" }
                    ul style="color: #64748b; line-height: 1.9;" {
                        li { "Government Authorized & RTO Compliant" }
                        li { "Advanced Gas Analysers & Smoke Meters" }
                        li { "Quick Service (Under 10 Minutes)" }
                        li { "Instant Digital Certificates" }
                        li { "SMS Reminders for Expiry" }
                    }
                }
            }
        },
    )
}

pub fn contact_page() -> Markup {
    public_layout(
        "Contact",
        "Contact",
        html! {
            main class="container" style="padding: 3rem 1rem;" {
                h1 style="text-align: center;" { "Contact Us" }
                div style="display: grid; gap: 1.25rem; grid-template-columns: repeat(auto-fit, minmax(300px, 1fr));" {
                    div class="card" {
                        h2 { "Visit Us" }
                        p style="font-weight: bold; margin-bottom: 0.2rem;" { "ANBU Emission Test Centre" }
                        p style="color: #64748b;" {
                            "157/1 Chavadikattu Thottom, Sakthy Main Road," br;
                            "Erode, Tamil Nadu - 638004"
                        }
                        h3 style="margin-top: 1.5rem;" { "Opening Hours" }
                        p style="color: #64748b;" { "Mon - Sat: 9:00 AM - 8:00 PM" }
                        p style="color: #64748b;" { "Sun: 10:00 AM - 2:00 PM" }
                    }
                    div class="card" {
                        h2 { "Get in Touch" }
                        p style="color: #64748b;" {
                            "Have questions about your certificate or need to book a fleet test?"
                        }
                        p {
                            strong { "Phone: " }
                            a href="tel:+919876543210" { "+91 98765 43210" }
                        }
                        p {
                            strong { "Email: " }
                            a href="mailto:support@anbu-emission.com" { "support@anbu-emission.com" }
                        }
                    }
                }
            }
        },
    )
}
