pub mod site;

pub use site::{dashboard_layout, public_layout};
