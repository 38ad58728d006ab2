pub mod dates;
pub mod models;

pub use dates::parse_api_datetime;
pub use models::*;
