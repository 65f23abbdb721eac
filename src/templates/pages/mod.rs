pub mod certificate;
pub mod dashboard;
pub mod home;
pub mod intake;
pub mod login;
pub mod profile;
pub mod reports;
pub mod users;
pub mod verification;

pub use certificate::certificate_page;
pub use dashboard::{dashboard_page, vehicle_dashboard_page};
pub use home::{about_page, contact_page, home_page};
pub use intake::new_test_page;
pub use login::{login_page, register_page};
pub use profile::profile_page;
pub use reports::reports_page;
pub use users::users_page;
pub use verification::verification_page;
