use serde::{Deserialize, Serialize};

use crate::models::{DimensionHour, HourlySeries, PlayEvent, PrimeWindow, RankedHour};

/// Every table built from one uploaded report.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlaysReport {
    pub overall_hourly: Vec<RankedHour>,
    pub roadside_hourly: Vec<RankedHour>,
    pub roadside_by_market: Vec<DimensionHour>,
    pub airport_hourly: Vec<RankedHour>,
    pub airport_by_group: Vec<DimensionHour>,
    pub airport_by_network: Vec<DimensionHour>,
    /// Hour-ordered airport totals, the overview's window input.
    pub airport_series: HourlySeries,
    #[serde(skip)]
    pub raw: Vec<PlayEvent>,
}

/// One "Top Hour" / "2nd Best" / "3rd Best" card. Empty slots carry no hour.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KpiCard {
    pub title: String,
    pub hour: Option<u8>,
    pub total_plays: Option<u64>,
}

/// The airport overview tab.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Overview {
    pub prime_windows: Vec<PrimeWindow>,
    pub kpis: Vec<KpiCard>,
    pub top_hours: Vec<RankedHour>,
    /// Bar chart input, ordered by hour.
    pub chart: HourlySeries,
}

/// One airport section of the market drill-down.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AirportDrilldown {
    pub airport: String,
    pub market: String,
    pub long_name: Option<String>,
    pub networks: Vec<String>,
    pub prime_windows: Vec<PrimeWindow>,
    pub kpis: Vec<KpiCard>,
    pub top_hours: Vec<RankedHour>,
}

impl AirportDrilldown {
    /// "Chicago (ORD) – Chicago O’Hare International Airport"
    pub fn heading(&self) -> String {
        let mut label = format!("{} ({})", self.market, self.airport);
        if let Some(name) = &self.long_name {
            label.push_str(" – ");
            label.push_str(name);
        }
        label
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketGroup {
    pub market: String,
    pub airports: Vec<AirportDrilldown>,
}
