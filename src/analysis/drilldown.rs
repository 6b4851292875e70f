use std::collections::{BTreeMap, BTreeSet};

use itertools::Itertools;
use rayon::prelude::*;

use crate::analysis::{build_kpis, find_prime_windows, hourly_totals_by, rank_hours, top_n};
use crate::config::ReportConfig;
use crate::domain::long_name;
use crate::models::{AirportDrilldown, HourlySeries, MarketGroup, PlayEvent, RankMethod};

/// Per-market, per-airport sections for every row in `events` whose network code
/// names an airport, whatever system booked it.
///
/// Markets come back sorted by label and airports by code within each market.
/// Each airport gets its own window search over its own hourly totals.
pub fn build_drilldown(events: &[PlayEvent], config: &ReportConfig) -> Vec<MarketGroup> {
    let airport_rows = || events.iter().filter(|e| e.airport.is_some());

    let hourly = hourly_totals_by(airport_rows(), |e| e.airport.clone());

    let mut networks: BTreeMap<&str, BTreeSet<&str>> = BTreeMap::new();
    let mut markets: BTreeMap<&str, &str> = BTreeMap::new();
    for event in airport_rows() {
        let Some(code) = event.airport.as_deref() else {
            continue;
        };
        markets.entry(code).or_insert(event.market.as_str());
        let network = event.network_code.trim();
        if !network.is_empty() {
            networks.entry(code).or_default().insert(network);
        }
    }

    let sections: Vec<AirportDrilldown> = hourly
        .par_iter()
        .map(|(code, series)| {
            let market = markets.get(code.as_str()).copied().unwrap_or_default();
            let used = networks
                .get(code.as_str())
                .map(|set| set.iter().map(|n| n.to_string()).collect())
                .unwrap_or_default();
            airport_section(code, market, used, series, config)
        })
        .collect();

    let by_market = sections
        .into_iter()
        .sorted_by(|a, b| a.market.cmp(&b.market).then_with(|| a.airport.cmp(&b.airport)))
        .chunk_by(|s| s.market.clone());

    let groups: Vec<MarketGroup> = by_market
        .into_iter()
        .map(|(market, airports)| MarketGroup {
            market,
            airports: airports.collect(),
        })
        .collect();
    groups
}

fn airport_section(
    code: &str,
    market: &str,
    networks: Vec<String>,
    series: &HourlySeries,
    config: &ReportConfig,
) -> AirportDrilldown {
    let ranked = rank_hours(series, RankMethod::Dense);
    AirportDrilldown {
        airport: code.to_string(),
        market: market.to_string(),
        long_name: long_name(code).map(str::to_string),
        networks,
        prime_windows: find_prime_windows(series, &config.window),
        kpis: build_kpis(&ranked, config.ranking.kpi_cards),
        top_hours: top_n(&ranked, config.ranking.top_table_rows),
    }
}
