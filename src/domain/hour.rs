use chrono::{DateTime, NaiveDate, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

/// Formats accepted for the report's "Date & Hour" column, tried in order.
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
    "%m/%d/%Y %I:%M:%S %p",
    "%m/%d/%Y %I:%M %p",
];

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%m/%d/%Y"];

/// An hour of the day, guaranteed to be in 0..=23.
/// Every raw hour value goes through [`HourOfDay::parse`] exactly once, at ingestion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HourOfDay(u8);

impl HourOfDay {
    pub const fn new(hour: u8) -> Option<Self> {
        if hour < 24 { Some(Self(hour)) } else { None }
    }

    #[inline]
    pub fn value(self) -> u8 {
        self.0
    }

    /// Accepts datetimes, bare numbers ("14", "14.0") and 12-hour labels ("6am", "12 PM").
    pub fn parse(raw: &str) -> Option<Self> {
        let s = raw.trim();
        if s.is_empty() {
            return None;
        }
        Self::parse_numeric(s)
            .or_else(|| Self::parse_label(s))
            .or_else(|| Self::parse_datetime(s))
    }

    fn parse_numeric(s: &str) -> Option<Self> {
        let v: f64 = s.parse().ok()?;
        if !v.is_finite() || !(0.0..24.0).contains(&v) {
            return None;
        }
        Self::new(v.trunc() as u8)
    }

    fn parse_label(s: &str) -> Option<Self> {
        let lower = s.to_ascii_lowercase();
        let (digits, is_pm) = if let Some(d) = lower.strip_suffix("am") {
            (d, false)
        } else if let Some(d) = lower.strip_suffix("pm") {
            (d, true)
        } else {
            return None;
        };
        let h: u8 = digits.trim().parse().ok()?;
        if !(1..=12).contains(&h) {
            return None;
        }
        let hour = match (h, is_pm) {
            (12, false) => 0,
            (12, true) => 12,
            (h, false) => h,
            (h, true) => h + 12,
        };
        Self::new(hour)
    }

    fn parse_datetime(s: &str) -> Option<Self> {
        if let Some(dt) = DATETIME_FORMATS
            .iter()
            .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        {
            return Self::new(dt.hour() as u8);
        }
        if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
            return Self::new(dt.hour() as u8);
        }
        // A bare date carries no time component: midnight.
        if DATE_FORMATS
            .iter()
            .any(|fmt| NaiveDate::parse_from_str(s, fmt).is_ok())
        {
            return Self::new(0);
        }
        None
    }
}

impl std::fmt::Display for HourOfDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&format_hour(self.0))
    }
}

/// 12-hour label used on every card, table and chart: 0 -> "12am", 13 -> "1pm".
pub fn format_hour(hour: u8) -> String {
    match hour {
        0 | 24 => "12am".to_string(),
        12 => "12pm".to_string(),
        h if h < 12 => format!("{}am", h),
        h => format!("{}pm", h - 12),
    }
}
