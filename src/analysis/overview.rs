use crate::analysis::{find_prime_windows, top_n};
use crate::config::ReportConfig;
use crate::models::{KpiCard, Overview, PlaysReport, RankedHour};

const KPI_TITLES: [&str; 3] = ["Top Hour", "2nd Best", "3rd Best"];

fn kpi_title(slot: usize) -> String {
    KPI_TITLES
        .get(slot)
        .map(|t| t.to_string())
        .unwrap_or_else(|| format!("#{} Best", slot + 1))
}

/// One card per slot. Slots past the end of `ranked` stay empty.
pub fn build_kpis(ranked: &[RankedHour], cards: usize) -> Vec<KpiCard> {
    (0..cards)
        .map(|slot| {
            let hit = ranked.get(slot);
            KpiCard {
                title: kpi_title(slot),
                hour: hit.map(|r| r.hour),
                total_plays: hit.map(|r| r.total_plays),
            }
        })
        .collect()
}

/// The airport overview: prime windows over all airport plays, top hours and the
/// hourly chart.
pub fn build_overview(report: &PlaysReport, config: &ReportConfig) -> Overview {
    let ranking = &config.ranking;
    Overview {
        prime_windows: find_prime_windows(&report.airport_series, &config.window),
        kpis: build_kpis(&report.airport_hourly, ranking.kpi_cards),
        top_hours: top_n(&report.airport_hourly, ranking.top_table_rows),
        chart: report.airport_series.clone(),
    }
}
