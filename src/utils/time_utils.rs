use chrono::{Local, NaiveDate};

pub struct TimeUtils;

impl TimeUtils {
    pub const STANDARD_TIME_FORMAT: &str = "%Y-%m-%d";
}

/// Local calendar date, used to stamp report directories.
pub fn today_string() -> String {
    date_string(Local::now().date_naive())
}

pub fn date_string(date: NaiveDate) -> String {
    date.format(TimeUtils::STANDARD_TIME_FORMAT).to_string()
}
