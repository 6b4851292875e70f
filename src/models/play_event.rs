use serde::{Deserialize, Serialize};

use crate::domain::{HourOfDay, SystemType};

/// One normalized row of the hourly plays export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayEvent {
    pub system_type: SystemType,
    /// None when the date/hour cell could not be read. Such rows are kept for the raw
    /// sheet but never reach an hourly aggregate.
    pub hour: Option<HourOfDay>,
    pub plays: u64,
    pub display: String,
    pub network_code: String,
    /// Roadside only.
    pub market_code: String,
    /// Airport only.
    pub airport_group: String,
    /// Airport only.
    pub network_name: String,
    pub airport: Option<String>,
    pub market: String,
}

impl PlayEvent {
    pub fn is_airport(&self) -> bool {
        self.system_type == SystemType::Airport
    }

    pub fn is_roadside(&self) -> bool {
        self.system_type == SystemType::Roadside
    }
}
