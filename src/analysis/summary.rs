use crate::analysis::{hourly_totals, hourly_totals_by, rank_by_dimension, rank_hours};
use crate::models::{PlayEvent, PlaysReport, RankMethod};

fn non_empty(s: &str) -> Option<String> {
    (!s.is_empty()).then(|| s.to_string())
}

/// Builds every summary table of a report from its normalized rows.
pub fn summarize(events: Vec<PlayEvent>) -> PlaysReport {
    let roadside = || events.iter().filter(|e| e.is_roadside());
    let airport = || events.iter().filter(|e| e.is_airport());

    let airport_series = hourly_totals(airport());

    let report = PlaysReport {
        overall_hourly: rank_hours(&hourly_totals(&events), RankMethod::Ordinal),
        roadside_hourly: rank_hours(&hourly_totals(roadside()), RankMethod::Ordinal),
        roadside_by_market: rank_by_dimension(&hourly_totals_by(roadside(), |e| {
            non_empty(&e.market_code)
        })),
        airport_hourly: rank_hours(&airport_series, RankMethod::Ordinal),
        airport_by_group: rank_by_dimension(&hourly_totals_by(airport(), |e| {
            non_empty(&e.airport_group)
        })),
        airport_by_network: rank_by_dimension(&hourly_totals_by(airport(), |e| {
            non_empty(&e.network_name)
        })),
        airport_series,
        raw: Vec::new(),
    };

    log::info!(
        "Summarized {} rows: {} overall hours, {} airport hours, {} roadside hours",
        events.len(),
        report.overall_hourly.len(),
        report.airport_hourly.len(),
        report.roadside_hourly.len()
    );

    PlaysReport { raw: events, ..report }
}
