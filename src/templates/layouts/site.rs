use maud::{html, Markup, DOCTYPE};

use crate::auth::sessions::CurrentUser;

// Minimal shared stylesheet, inlined so no static file route is needed.
const BASE_CSS: &str = r#"
body { font-family: system-ui, sans-serif; margin: 0; color: #1e293b; background: #f8fafc; }
a { color: #2563eb; }
.container { max-width: 1080px; margin: 0 auto; padding: 0 1rem; }
.card { background: white; border: 1px solid #e2e8f0; border-radius: 12px; padding: 1.25rem; margin-bottom: 1.25rem; }
.data-table { width: 100%; border-collapse: collapse; }
.data-table th { text-align: left; padding: 10px 8px; border-bottom: 2px solid #e2e8f0; color: #475569; font-size: 0.9em; }
.data-table td { padding: 10px 8px; border-bottom: 1px solid #f1f5f9; }
.btn { display: inline-block; padding: 8px 16px; border-radius: 8px; border: none; cursor: pointer; text-decoration: none; font-size: 1em; }
.btn-primary { background: #2563eb; color: white; }
.btn-danger { background: #fef2f2; color: #dc2626; border: 1px solid #fecaca; }
.form-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(200px, 1fr)); gap: 1rem; }
.form-grid label { display: block; margin-bottom: 0.4rem; font-weight: 600; font-size: 0.9em; }
.form-grid input, .form-grid select { width: 100%; padding: 8px; border: 1px solid #cbd5e1; border-radius: 6px; box-sizing: border-box; }
.error-message { background: #fef2f2; color: #dc2626; border: 1px solid #fecaca; border-radius: 8px; padding: 0.75rem 1rem; margin-bottom: 1rem; }
.uppercase { text-transform: uppercase; }
.capitalize { text-transform: capitalize; }
"#;

fn page_shell(title: &str, header: Markup, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " | ANBU Emission" }
                style { (maud::PreEscaped(BASE_CSS)) }
            }
            body {
                (header)
                (content)
                footer style="text-align: center; color: #94a3b8; padding: 2rem 1rem; font-size: 0.85em;" {
                    p { "© ANBU Emission Test Centre. All rights reserved." }
                    p { "157/1 Chavadikattu Thottom, Sakthy Main Road, Erode - 638004" }
                }
            }
        }
    }
}

/// Layout for the marketing / public pages. `active` marks the current
/// nav link.
pub fn public_layout(title: &str, active: &str, content: Markup) -> Markup {
    let links = [
        ("/", "Home"),
        ("/about", "About"),
        ("/contact", "Contact"),
        ("/verification", "Verify"),
    ];
    page_shell(
        title,
        html! {
            header style="background: white; border-bottom: 1px solid #e2e8f0;" {
                div class="container" style="display: flex; align-items: center; justify-content: space-between; padding: 0.75rem 1rem;" {
                    a href="/" style="font-weight: 700; font-size: 1.1rem; text-decoration: none; color: #1e293b;" {
                        "ANBU " span style="color: #059669;" { "Emission" }
                    }
                    nav style="display: flex; gap: 1.25rem; align-items: center;" {
                        @for (href, label) in links {
                            @if active == label {
                                a href=(href) style="font-weight: 700; text-decoration: none;" { (label) }
                            } @else {
                                a href=(href) style="text-decoration: none; color: #475569;" { (label) }
                            }
                        }
                        a href="/login" class="btn btn-primary" { "Login" }
                    }
                }
            }
        },
        content,
    )
}

/// Layout for the signed-in area. Nav adapts to the account's role.
pub fn dashboard_layout(title: &str, user: &CurrentUser, content: Markup) -> Markup {
    page_shell(
        title,
        html! {
            header style="background: white; border-bottom: 1px solid #e2e8f0;" {
                div class="container" style="display: flex; align-items: center; justify-content: space-between; padding: 0.75rem 1rem;" {
                    a href="/dashboard" style="font-weight: 700; text-decoration: none; color: #1e293b;" {
                        "ANBU " span style="color: #059669;" { "Emission" }
                    }
                    nav style="display: flex; gap: 1.25rem; align-items: center;" {
                        a href="/dashboard" style="text-decoration: none; color: #475569;" { "Dashboard" }
                        @if user.is_staff() {
                            a href="/reports" style="text-decoration: none; color: #475569;" { "Reports" }
                            a href="/tests/new" style="text-decoration: none; color: #475569;" { "New Test" }
                        }
                        @if user.is_admin() {
                            a href="/users" style="text-decoration: none; color: #475569;" { "Users" }
                        }
                        a href="/profile" style="text-decoration: none; color: #475569;" { "Profile" }
                        form action="/logout" method="post" style="margin: 0;" {
                            button type="submit" class="btn" style="background: #e2e8f0;" { "Logout" }
                        }
                    }
                }
            }
        },
        content,
    )
}
