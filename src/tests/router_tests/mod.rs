mod auth_tests;
mod dashboard_tests;
mod reports_tests;
mod users_tests;
mod verification_tests;
