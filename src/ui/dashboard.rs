use std::fmt::Write;

use crate::models::{AirportDrilldown, MarketGroup, Overview};
use crate::ui::UI_TEXT;
use crate::ui::chart::hourly_bars;
use crate::ui::tables::{hours_table, kpi_table, windows_table};

fn section(out: &mut String, heading: &str, body: &str) {
    let _ = writeln!(out, "{}\n{}\n{}\n", heading, "-".repeat(heading.chars().count()), body);
}

/// The airport overview tab as terminal text.
pub fn render_overview(overview: &Overview) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "== {} ==\n", UI_TEXT.overview_title);
    section(&mut out, &UI_TEXT.windows_heading, &windows_table(&overview.prime_windows));
    section(&mut out, &UI_TEXT.kpi_heading, &kpi_table(&overview.kpis));
    section(&mut out, &UI_TEXT.top_hours_heading, &hours_table(&overview.top_hours));
    section(&mut out, &UI_TEXT.chart_heading, &hourly_bars(&overview.chart));
    out
}

fn render_airport(out: &mut String, airport: &AirportDrilldown) {
    let heading = airport.heading();
    let _ = writeln!(out, "### {}\n", heading);
    let _ = writeln!(out, "{}: {}\n", UI_TEXT.networks_used, airport.networks.join(", "));
    section(out, &UI_TEXT.windows_heading, &windows_table(&airport.prime_windows));
    section(out, &UI_TEXT.kpi_heading, &kpi_table(&airport.kpis));
    section(out, &UI_TEXT.top_hours_heading, &hours_table(&airport.top_hours));
}

/// Market by market, airport by airport.
pub fn render_drilldown(markets: &[MarketGroup]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "== {} ==\n", UI_TEXT.drilldown_title);
    if markets.is_empty() {
        let _ = writeln!(out, "{}", UI_TEXT.no_airport_rows);
        return out;
    }
    for market in markets {
        let _ = writeln!(out, "## {}\n", market.market);
        for airport in &market.airports {
            render_airport(&mut out, airport);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{KpiCard, PrimeWindow};

    #[test]
    fn drilldown_shows_heading_and_networks() {
        let markets = vec![MarketGroup {
            market: "Chicago".to_string(),
            airports: vec![AirportDrilldown {
                airport: "ORD".to_string(),
                market: "Chicago".to_string(),
                long_name: Some("O'Hare".to_string()),
                networks: vec!["ORD_T1".to_string(), "ORD_T3".to_string()],
                prime_windows: vec![PrimeWindow {
                    start_hour: 9,
                    end_hour: 10,
                    total_plays: 200,
                }],
                kpis: vec![KpiCard {
                    title: "Top Hour".to_string(),
                    hour: Some(9),
                    total_plays: Some(100),
                }],
                top_hours: Vec::new(),
            }],
        }];
        let out = render_drilldown(&markets);
        assert!(out.contains("## Chicago"));
        assert!(out.contains("Chicago (ORD) – O'Hare"));
        assert!(out.contains("Networks used: ORD_T1, ORD_T3"));
        assert!(out.contains("9am – 10am"));
    }

    #[test]
    fn empty_overview_shows_notice() {
        let out = render_overview(&Overview::default());
        assert!(out.contains("No qualifying hours"));
    }
}
