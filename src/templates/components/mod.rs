use maud::{html, Markup};

pub fn card(title: &str, body: Markup) -> Markup {
    html! {
        section class="card" {
            h3 { (title) }
            div class="card-body" {
                (body)
            }
        }
    }
}

/// Pass/Fail pill used in every test table.
pub fn status_badge(result: Option<&str>) -> Markup {
    let (label, color, bg) = match result {
        Some("Pass") => ("Pass", "#059669", "#ecfdf5"),
        Some("Fail") => ("Fail", "#dc2626", "#fef2f2"),
        Some(other) => (other, "#475569", "#f1f5f9"),
        None => ("—", "#475569", "#f1f5f9"),
    };
    html! {
        span style=(format!("color: {color}; background: {bg}; padding: 2px 10px; border-radius: 999px; font-size: 0.85em; font-weight: 600;")) {
            (label)
        }
    }
}

pub fn stat_card(title: &str, value: usize, sub: &str) -> Markup {
    html! {
        div class="card" style="text-align: center;" {
            h3 style="margin: 0; font-size: 0.9rem; color: #64748b;" { (title) }
            div style="font-size: 2rem; font-weight: 700; margin: 0.3rem 0;" { (value) }
            div style="font-size: 0.8rem; color: #94a3b8;" { (sub) }
        }
    }
}

/// Horizontal proportion bar for the dashboard breakdowns.
pub fn breakdown_bars(title: &str, buckets: &[(String, usize)]) -> Markup {
    let max = buckets.iter().map(|(_, n)| *n).max().unwrap_or(1).max(1);
    html! {
        section class="card" {
            h3 { (title) }
            @if buckets.is_empty() {
                p style="color: #94a3b8;" { "No data available" }
            }
            @for (name, count) in buckets {
                div style="display: flex; align-items: center; gap: 10px; margin: 6px 0;" {
                    span style="width: 90px; text-transform: capitalize; font-size: 0.9em;" { (name) }
                    div style=(format!("background: #60a5fa; height: 14px; border-radius: 4px; width: {}%;", count * 100 / max)) {}
                    span style="font-size: 0.9em; color: #64748b;" { (count) }
                }
            }
        }
    }
}

/// Period quick-filter tabs. `link` builds the href for each preset so
/// pages can keep their other query parameters in the URL.
pub fn period_tabs(active: &str, link: impl Fn(&str) -> String) -> Markup {
    let tabs = [
        ("all", "All Time"),
        ("today", "Today"),
        ("month", "This Month"),
        ("year", "This Year"),
    ];
    html! {
        div class="period-tabs" style="display: flex; gap: 8px; margin: 1rem 0;" {
            @for (value, label) in tabs {
                @let style = if active == value {
                    "background: #2563eb; color: white; padding: 6px 14px; border-radius: 6px; text-decoration: none;"
                } else {
                    "background: #e2e8f0; color: #1e293b; padding: 6px 14px; border-radius: 6px; text-decoration: none;"
                };
                a href=(link(value)) style=(style) { (label) }
            }
            @if active == "custom" {
                span style="background: #fef9c3; color: #854d0e; padding: 6px 14px; border-radius: 6px;" { "Custom" }
            }
        }
    }
}
