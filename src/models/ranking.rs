use serde::{Deserialize, Serialize};
use strum_macros::Display;

/// How equal play counts share a rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
pub enum RankMethod {
    /// 1, 2, 3, 4: ties broken by the earlier hour.
    Ordinal,
    /// 1, 2, 2, 4
    Min,
    /// 1, 2, 2, 3
    Dense,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedHour {
    pub hour: u8,
    pub total_plays: u64,
    pub rank: usize,
}

/// An hourly total within one dimension value (market code, airport group, network).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DimensionHour {
    pub key: String,
    pub hour: u8,
    pub plays: u64,
    pub rank_within_key: usize,
}
