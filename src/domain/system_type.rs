use serde::{Deserialize, Serialize};
use strum_macros::Display;

/// Ad-serving systems that book airport screens.
const AIRPORT_SYSTEMS: &[&str] = &["ADPORTAL", "RTB ADSERVER", "VISTAR SCHEDULING SERVICE"];
const ROADSIDE_SYSTEM: &str = "SPOTCHART";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, Default)]
pub enum SystemType {
    Roadside,
    Airport,
    #[default]
    Unknown,
}

impl SystemType {
    /// Classifies the report's "System" column.
    pub fn from_system(raw: &str) -> Self {
        let val = raw.trim().to_uppercase();
        if val.contains(ROADSIDE_SYSTEM) {
            Self::Roadside
        } else if AIRPORT_SYSTEMS.iter().any(|s| val.contains(s)) {
            Self::Airport
        } else {
            Self::Unknown
        }
    }
}

/// Roadside market code embedded in a display name, e.g. "12ATL-I85-N" -> "ATL".
///
/// Leading digits are ignored; the code is the last run of three capital letters
/// that sits entirely before the next digit.
pub fn roadside_market_code(display: &str) -> String {
    let upper = display.to_uppercase();
    let body = upper.trim_start_matches(|c: char| c.is_ascii_digit());
    let bytes = body.as_bytes();
    let prefix_len = bytes
        .iter()
        .position(|b| b.is_ascii_digit())
        .unwrap_or(bytes.len());

    (0..prefix_len.saturating_sub(2))
        .rev()
        .find(|&i| bytes[i..i + 3].iter().all(u8::is_ascii_uppercase))
        .map(|i| body[i..i + 3].to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_systems() {
        assert_eq!(SystemType::from_system("SpotChart v2"), SystemType::Roadside);
        assert_eq!(SystemType::from_system(" adportal "), SystemType::Airport);
        assert_eq!(SystemType::from_system("RTB AdServer"), SystemType::Airport);
        assert_eq!(
            SystemType::from_system("Vistar Scheduling Service"),
            SystemType::Airport
        );
        assert_eq!(SystemType::from_system("Other"), SystemType::Unknown);
        assert_eq!(SystemType::Airport.to_string(), "Airport");
    }

    #[test]
    fn market_code_skips_leading_digits() {
        assert_eq!(roadside_market_code("12ATL-I85-N"), "ATL");
        assert_eq!(roadside_market_code("den 4"), "DEN");
    }

    #[test]
    fn market_code_takes_last_run_before_digit() {
        // The code search stops at the first digit after the prefix.
        assert_eq!(roadside_market_code("ATL_ROADSIDE_01"), "IDE");
        assert_eq!(roadside_market_code("AB-12"), "");
        assert_eq!(roadside_market_code(""), "");
    }
}
