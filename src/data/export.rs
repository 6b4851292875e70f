use std::collections::BTreeMap;
use std::fs::{self, File};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use polars::prelude::*;
use serde::{Deserialize, Serialize};

use crate::analysis::top_n;
use crate::config::{PERSISTENCE, ReportConfig, report_dir_name, sheet_filename};
use crate::domain::format_hour;
use crate::models::{
    DimensionHour, MarketGroup, Overview, PlayEvent, PlaysReport, PrimeWindow, RankedHour,
};

/// Sheet names, in workbook order.
pub const SHEETS: [&str; 7] = [
    "Raw_Data",
    "Top_Hours_Overall",
    "Roadside_Summary",
    "Roadside_By_Market",
    "Airport_Summary",
    "Airport_By_Group",
    "Airport_By_Network",
];

/// Contents of `prime_windows.json`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WindowsFile {
    pub overview: Vec<PrimeWindow>,
    /// Airport code -> windows
    pub airports: BTreeMap<String, Vec<PrimeWindow>>,
}

impl WindowsFile {
    pub fn new(overview: &Overview, markets: &[MarketGroup]) -> Self {
        let airports = markets
            .iter()
            .flat_map(|m| m.airports.iter())
            .map(|a| (a.airport.clone(), a.prime_windows.clone()))
            .collect();
        Self {
            overview: overview.prime_windows.clone(),
            airports,
        }
    }
}

/// Writes every sheet plus the windows file into `<out_root>/PlayRate_Report_<date>`.
/// Returns the directory written.
pub fn export_report(
    report: &PlaysReport,
    windows: &WindowsFile,
    config: &ReportConfig,
    out_root: &Path,
    date: &str,
) -> Result<PathBuf> {
    let dir = out_root.join(report_dir_name(date));
    fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create report directory {}", dir.display()))?;

    let ranking = &config.ranking;
    let frames = [
        raw_frame(&report.raw)?,
        ranked_frame(&top_n(&report.overall_hourly, ranking.top_table_rows))?,
        ranked_frame(&top_n(&report.roadside_hourly, ranking.summary_rows))?,
        dimension_frame("Market Code", &report.roadside_by_market)?,
        ranked_frame(&top_n(&report.airport_hourly, ranking.summary_rows))?,
        dimension_frame("Airport Group", &report.airport_by_group)?,
        dimension_frame("Network Name", &report.airport_by_network)?,
    ];

    for (sheet, mut df) in SHEETS.iter().zip(frames) {
        write_sheet(&dir.join(sheet_filename(sheet)), &mut df)?;
    }

    let windows_path = dir.join(PERSISTENCE.report.windows_filename);
    let json = serde_json::to_string_pretty(windows).context("Failed to serialize windows")?;
    fs::write(&windows_path, json)
        .with_context(|| format!("Failed to write {}", windows_path.display()))?;

    log::info!("Report written to {}", dir.display());
    Ok(dir)
}

fn write_sheet(path: &Path, df: &mut DataFrame) -> Result<()> {
    let mut file =
        File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;
    CsvWriter::new(&mut file)
        .include_header(true)
        .finish(df)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}

fn raw_frame(events: &[PlayEvent]) -> Result<DataFrame> {
    let df = df!(
        "System Type" => events.iter().map(|e| e.system_type.to_string()).collect::<Vec<_>>(),
        "Display" => events.iter().map(|e| e.display.clone()).collect::<Vec<_>>(),
        "Network Code" => events.iter().map(|e| e.network_code.clone()).collect::<Vec<_>>(),
        "Hour" => events.iter().map(|e| e.hour.map(|h| h.value() as u32)).collect::<Vec<_>>(),
        "# Plays" => events.iter().map(|e| e.plays).collect::<Vec<_>>(),
        "Market Code" => events.iter().map(|e| e.market_code.clone()).collect::<Vec<_>>(),
        "Airport Group" => events.iter().map(|e| e.airport_group.clone()).collect::<Vec<_>>(),
        "Network Name" => events.iter().map(|e| e.network_name.clone()).collect::<Vec<_>>(),
        "Airport" => events.iter().map(|e| e.airport.clone()).collect::<Vec<_>>(),
        "Market" => events.iter().map(|e| e.market.clone()).collect::<Vec<_>>(),
    )?;
    Ok(df)
}

fn ranked_frame(rows: &[RankedHour]) -> Result<DataFrame> {
    let df = df!(
        "Hour" => rows.iter().map(|r| r.hour as u32).collect::<Vec<_>>(),
        "Hour Label" => rows.iter().map(|r| format_hour(r.hour)).collect::<Vec<_>>(),
        "Total Plays" => rows.iter().map(|r| r.total_plays).collect::<Vec<_>>(),
        "Rank" => rows.iter().map(|r| r.rank as u64).collect::<Vec<_>>(),
    )?;
    Ok(df)
}

fn dimension_frame(key_header: &str, rows: &[DimensionHour]) -> Result<DataFrame> {
    let df = df!(
        key_header => rows.iter().map(|r| r.key.clone()).collect::<Vec<_>>(),
        "Hour" => rows.iter().map(|r| r.hour as u32).collect::<Vec<_>>(),
        "Plays" => rows.iter().map(|r| r.plays).collect::<Vec<_>>(),
        "Rank Within" => rows.iter().map(|r| r.rank_within_key as u64).collect::<Vec<_>>(),
    )?;
    Ok(df)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::summarize;
    use crate::data::normalize_row;

    #[test]
    fn writes_every_sheet() {
        let events = vec![
            normalize_row("AdPortal", "Gate 1", "ATL_A", "9", "100"),
            normalize_row("AdPortal", "Gate 1", "ATL_A", "10", "120"),
            normalize_row("SpotChart", "DEN-I25", "", "9", "5"),
        ];
        let report = summarize(events);
        let tmp = tempfile::tempdir().unwrap();

        let dir = export_report(
            &report,
            &WindowsFile::default(),
            &ReportConfig::default(),
            tmp.path(),
            "2024-05-01",
        )
        .unwrap();

        assert!(dir.ends_with("PlayRate_Report_2024-05-01"));
        for sheet in SHEETS {
            assert!(dir.join(sheet_filename(sheet)).is_file(), "{} missing", sheet);
        }
        let overall = fs::read_to_string(dir.join("Top_Hours_Overall.csv")).unwrap();
        assert!(overall.starts_with("Hour,Hour Label,Total Plays,Rank"));
        assert!(overall.contains("10,10am,120,1"));
        assert!(dir.join("prime_windows.json").is_file());
    }
}
