mod number_format;
mod perf;
mod time_utils;

pub use number_format::format_thousands;
pub use time_utils::{TimeUtils, date_string, today_string};
