use crate::templates::public_layout;
use maud::{html, Markup};

pub fn login_page(error: Option<&str>) -> Markup {
    public_layout(
        "Sign in",
        "",
        html! {
            main class="container" style="padding: 3rem 1rem; max-width: 440px;" {
                div class="card" {
                    h1 { "Sign in" }
                    p style="color: #64748b;" { "Welcome back! Please enter your details." }

                    @if let Some(msg) = error {
                        div class="error-message" { (msg) }
                    }

                    form method="post" action="/login" {
                        div style="margin-bottom: 1rem;" {
                            label for="email" style="display: block; font-weight: 600; margin-bottom: 0.4rem;" { "Email Address" }
                            input type="email" id="email" name="email" placeholder="user@example.com" required
                                style="width: 100%; padding: 10px; border: 1px solid #cbd5e1; border-radius: 8px; box-sizing: border-box;";
                        }
                        div style="margin-bottom: 1.5rem;" {
                            label for="password" style="display: block; font-weight: 600; margin-bottom: 0.4rem;" { "Password" }
                            input type="password" id="password" name="password" placeholder="••••••••" required
                                style="width: 100%; padding: 10px; border: 1px solid #cbd5e1; border-radius: 8px; box-sizing: border-box;";
                        }
                        button type="submit" class="btn btn-primary" style="width: 100%;" { "Sign In" }
                    }

                    p style="margin-top: 1.25rem; color: #64748b; text-align: center;" {
                        "Don't have an account? " a href="/register" { "Create free account" }
                    }
                }
            }
        },
    )
}

pub fn register_page(error: Option<&str>) -> Markup {
    public_layout(
        "Create Account",
        "",
        html! {
            main class="container" style="padding: 3rem 1rem; max-width: 520px;" {
                div class="card" {
                    h1 { "Create Account" }
                    p style="color: #64748b;" { "Get started with your free account today." }

                    @if let Some(msg) = error {
                        div class="error-message" { (msg) }
                    }

                    form method="post" action="/register" {
                        div class="form-grid" style="margin-bottom: 1rem;" {
                            div {
                                label for="name" { "Full Name" }
                                input type="text" id="name" name="name" placeholder="John Doe" required;
                            }
                            div {
                                label for="email" { "Email Address" }
                                input type="email" id="email" name="email" placeholder="user@example.com" required;
                            }
                            div {
                                label for="vehicle_number" { "Vehicle No." }
                                input type="text" id="vehicle_number" name="vehicle_number" placeholder="TN-01-AB-1234" class="uppercase" required;
                            }
                            div {
                                label for="mobile_number" { "Mobile No." }
                                input type="tel" id="mobile_number" name="mobile_number" placeholder="9876543210" required;
                            }
                            div {
                                label for="password" { "Password" }
                                input type="password" id="password" name="password" placeholder="••••••••" required;
                            }
                            div {
                                label for="confirm_password" { "Confirm Password" }
                                input type="password" id="confirm_password" name="confirm_password" placeholder="••••••••" required;
                            }
                        }
                        button type="submit" class="btn btn-primary" style="width: 100%;" { "Sign Up" }
                    }

                    p style="margin-top: 1.25rem; color: #64748b; text-align: center;" {
                        "Already have an account? " a href="/login" { "Log In" }
                    }
                }
            }
        },
    )
}
