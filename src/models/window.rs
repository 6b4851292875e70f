use serde::{Deserialize, Serialize};

use crate::domain::format_hour;
use crate::utils::format_thousands;

/// Anything occupying an inclusive run of hours.
pub trait HourSpan {
    fn start_hour(&self) -> u8;
    fn end_hour(&self) -> u8;

    fn duration(&self) -> usize {
        (self.end_hour() as usize + 1).saturating_sub(self.start_hour() as usize)
    }

    /// True when the two spans share no hour.
    fn is_disjoint_from(&self, other: &impl HourSpan) -> bool {
        self.end_hour() < other.start_hour() || self.start_hour() > other.end_hour()
    }

    /// "2pm – 4pm"
    fn range_label(&self) -> String {
        format!(
            "{} – {}",
            format_hour(self.start_hour()),
            format_hour(self.end_hour())
        )
    }
}

/// One scored run of contiguous hours produced by the candidate scan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowCandidate {
    pub start_hour: u8,
    pub end_hour: u8,
    pub duration: usize,
    pub total_plays: u64,
    /// Average plays per hour, rounded to cents.
    pub density: f64,
    pub weak_count: usize,
    /// Density after the weak-hour penalty, rounded to cents. Primary sort key.
    pub rank_score: f64,
}

/// A window after edge trimming, with its plays recounted from the source series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrimmedWindow {
    pub start_hour: u8,
    pub end_hour: u8,
    pub duration: usize,
    pub total_plays: u64,
}

/// A finalized prime play window, ready for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrimeWindow {
    pub start_hour: u8,
    pub end_hour: u8,
    pub total_plays: u64,
}

impl PrimeWindow {
    pub fn plays_label(&self) -> String {
        format!("{} Total Plays", format_thousands(self.total_plays))
    }
}

impl From<TrimmedWindow> for PrimeWindow {
    fn from(w: TrimmedWindow) -> Self {
        Self {
            start_hour: w.start_hour,
            end_hour: w.end_hour,
            total_plays: w.total_plays,
        }
    }
}

impl std::fmt::Display for PrimeWindow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.range_label(), self.plays_label())
    }
}

macro_rules! impl_hour_span {
    ($($ty:ty),*) => {
        $(impl HourSpan for $ty {
            fn start_hour(&self) -> u8 {
                self.start_hour
            }
            fn end_hour(&self) -> u8 {
                self.end_hour
            }
        })*
    };
}

impl_hour_span!(WindowCandidate, TrimmedWindow, PrimeWindow);

#[cfg(test)]
mod tests {
    use super::*;

    fn window(start: u8, end: u8) -> PrimeWindow {
        PrimeWindow {
            start_hour: start,
            end_hour: end,
            total_plays: 1234,
        }
    }

    #[test]
    fn disjointness_is_symmetric() {
        let a = window(8, 9);
        assert!(a.is_disjoint_from(&window(10, 12)));
        assert!(window(10, 12).is_disjoint_from(&a));
        assert!(!a.is_disjoint_from(&window(9, 10)));
        assert!(!a.is_disjoint_from(&window(7, 11)));
    }

    #[test]
    fn labels() {
        let w = window(11, 13);
        assert_eq!(w.duration(), 3);
        assert_eq!(w.range_label(), "11am – 1pm");
        assert_eq!(w.to_string(), "11am – 1pm (1,234 Total Plays)");
    }
}
