pub mod datetime;
pub mod period;

pub use datetime::{DateParseError, add_days, is_valid_date_string, parse_date};
pub use period::{Period, period_containing};
