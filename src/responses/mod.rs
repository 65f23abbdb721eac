pub mod csv;
pub mod errors;
pub mod html;

pub use csv::csv_response;
pub use errors::{error_to_response, ResultResp};
pub use html::{html_response, redirect_response, redirect_with_cookie};
