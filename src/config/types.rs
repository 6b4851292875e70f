//! Small value types shared by the configuration blueprints.

use serde::{Deserialize, Serialize};

/// A share in 0..=1. Deserializing rejects anything outside that range.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize, Default)]
#[serde(try_from = "f64", into = "f64")]
pub struct Pct(f64);

impl Pct {
    // A 'general' % clamped between 0 and 1
    pub const fn new(val: f64) -> Self {
        let v = if val < 0.0 {
            0.0
        } else if val > 1.0 {
            1.0
        } else {
            val
        };
        Self(v)
    }

    #[inline]
    pub fn value(self) -> f64 {
        self.0
    }

    /// `self` share of `base`, e.g. 0.70 of a window's density.
    #[inline]
    pub fn of(self, base: f64) -> f64 {
        self.0 * base
    }
}

impl TryFrom<f64> for Pct {
    type Error = String;

    fn try_from(val: f64) -> Result<Self, Self::Error> {
        if (0.0..=1.0).contains(&val) {
            Ok(Self(val))
        } else {
            Err(format!("percentage {} is outside 0.0..=1.0", val))
        }
    }
}

impl From<Pct> for f64 {
    fn from(pct: Pct) -> Self {
        pct.0
    }
}

impl std::fmt::Display for Pct {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.0}%", self.0 * 100.)
    }
}

/// Inclusive range of hours (0..=23) eligible for prime-window consideration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HourBand {
    pub first: u8,
    pub last: u8,
}

impl HourBand {
    pub const fn new(first: u8, last: u8) -> Self {
        Self { first, last }
    }

    #[inline]
    pub fn contains(&self, hour: u8) -> bool {
        hour >= self.first && hour <= self.last
    }

    /// Number of hours in the band (0 when inverted).
    pub fn len(&self) -> usize {
        if self.last < self.first {
            0
        } else {
            (self.last - self.first) as usize + 1
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl std::fmt::Display for HourBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}..={}", self.first, self.last)
    }
}
