use std::path::Path;

use anyhow::{Context, Result, bail};
use calamine::{Data, DataType, Reader, open_workbook_auto};
use polars::prelude::*;

use crate::config::{DEBUG_FLAGS, constants::columns};
use crate::domain::{HourOfDay, SystemType, extract_airport, market_label, roadside_market_code};
use crate::models::PlayEvent;

/// Reads an hourly plays export into one [`PlayEvent`] per row.
///
/// CSV goes through polars; `.xlsx`, `.xlsm` and `.xls` workbooks are read from
/// their first sheet.
pub fn read_report(path: &Path) -> Result<Vec<PlayEvent>> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();
    let df = match ext.as_str() {
        "csv" => load_frame(path)?,
        "xlsx" | "xlsm" | "xls" => load_workbook(path)?,
        _ => bail!(
            "Unsupported report format for {}: expected .csv, .xlsx or .xls",
            path.display()
        ),
    };
    let events = frame_to_events(&df)?;
    log::info!("Loaded {} rows from {}", events.len(), path.display());
    Ok(events)
}

/// First worksheet of a workbook, every cell rendered as text.
pub fn load_workbook(path: &Path) -> Result<DataFrame> {
    let mut workbook = open_workbook_auto(path)
        .with_context(|| format!("Failed to open workbook {}", path.display()))?;
    let range = workbook
        .worksheet_range_at(0)
        .with_context(|| format!("{} has no worksheets", path.display()))?
        .with_context(|| format!("Failed to read first sheet of {}", path.display()))?;

    let mut rows = range
        .rows()
        .map(|row| row.iter().map(cell_text).collect::<Vec<_>>());
    let header = rows
        .next()
        .with_context(|| format!("{} has an empty first sheet", path.display()))?;
    rows_to_frame(&header, rows.collect())
}

fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty | Data::Error(_) => String::new(),
        Data::String(s) | Data::DateTimeIso(s) | Data::DurationIso(s) => s.clone(),
        Data::Float(f) => f.to_string(),
        Data::Int(i) => i.to_string(),
        Data::Bool(b) => b.to_string(),
        Data::DateTime(_) => cell
            .as_datetime()
            .map(|dt| dt.format("%Y-%m-%d %H:%M:%S").to_string())
            .unwrap_or_default(),
    }
}

/// Builds an all-text frame from a header row and data rows. Short rows are
/// padded with empty cells.
pub fn rows_to_frame(header: &[String], rows: Vec<Vec<String>>) -> Result<DataFrame> {
    let columns: Vec<Column> = header
        .iter()
        .enumerate()
        .map(|(i, name)| {
            let cells: Vec<String> = rows
                .iter()
                .map(|row| row.get(i).cloned().unwrap_or_default())
                .collect();
            Column::new(name.trim().into(), cells)
        })
        .collect();
    DataFrame::new(columns).context("Failed to build frame from sheet rows")
}

/// Every column comes back as a string; coercion happens per row.
pub fn load_frame(path: &Path) -> Result<DataFrame> {
    CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(0))
        .try_into_reader_with_file_path(Some(path.into()))
        .with_context(|| format!("Failed to open {}", path.display()))?
        .finish()
        .with_context(|| format!("Failed to parse {} as CSV", path.display()))
}

fn string_column<'a>(df: &'a DataFrame, name: &str) -> Result<&'a StringChunked> {
    df.column(name)
        .with_context(|| format!("Missing required column '{}'", name))?
        .str()
        .with_context(|| format!("Column '{}' is not text", name))
}

/// Converts a raw frame into normalized rows.
pub fn frame_to_events(df: &DataFrame) -> Result<Vec<PlayEvent>> {
    let names: Vec<String> = df
        .get_column_names()
        .iter()
        .map(|s| s.to_string())
        .collect();
    let network_col = if names.iter().any(|n| n == columns::NETWORK_CODE) {
        columns::NETWORK_CODE
    } else if names.iter().any(|n| n == columns::NETWORK_CODE_ALT) {
        columns::NETWORK_CODE_ALT
    } else {
        bail!("Missing required column '{}'", columns::NETWORK_CODE);
    };

    let systems = string_column(df, columns::SYSTEM)?;
    let displays = string_column(df, columns::DISPLAY)?;
    let networks = string_column(df, network_col)?;
    let date_hours = string_column(df, columns::DATE_HOUR)?;
    let plays = string_column(df, columns::PLAYS)?;

    let mut unreadable_hours = 0usize;
    let events: Vec<PlayEvent> = (0..df.height())
        .map(|i| {
            let event = normalize_row(
                systems.get(i).unwrap_or_default(),
                displays.get(i).unwrap_or_default(),
                networks.get(i).unwrap_or_default(),
                date_hours.get(i).unwrap_or_default(),
                plays.get(i).unwrap_or_default(),
            );
            if event.hour.is_none() {
                unreadable_hours += 1;
            }
            event
        })
        .collect();

    if DEBUG_FLAGS.log_ingest && unreadable_hours > 0 {
        log::warn!(
            "{} of {} rows have an unreadable '{}' and are left out of hourly totals",
            unreadable_hours,
            events.len(),
            columns::DATE_HOUR
        );
    }
    Ok(events)
}

/// Normalizes one report row. Never fails: bad cells degrade to empty values.
pub fn normalize_row(
    system: &str,
    display: &str,
    network_code: &str,
    date_hour: &str,
    plays: &str,
) -> PlayEvent {
    let system_type = SystemType::from_system(system);
    let airport = extract_airport(network_code);
    let display = display.trim().to_string();

    let (market_code, airport_group, network_name) = match system_type {
        SystemType::Roadside => (roadside_market_code(&display), String::new(), String::new()),
        SystemType::Airport => (
            String::new(),
            airport.clone().unwrap_or_default(),
            display.to_uppercase(),
        ),
        SystemType::Unknown => (String::new(), String::new(), String::new()),
    };

    PlayEvent {
        system_type,
        hour: HourOfDay::parse(date_hour),
        plays: parse_plays(plays),
        network_code: network_code.trim().to_string(),
        display,
        market_code,
        airport_group,
        network_name,
        market: market_label(airport.as_deref()),
        airport,
    }
}

/// "1,234" -> 1234, "12.9" -> 12. Negative or unreadable counts are 0.
pub fn parse_plays(raw: &str) -> u64 {
    let cleaned: String = raw.trim().chars().filter(|c| *c != ',').collect();
    match cleaned.parse::<f64>() {
        Ok(v) if v.is_finite() && v > 0.0 => v.trunc() as u64,
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plays_are_coerced() {
        assert_eq!(parse_plays("42"), 42);
        assert_eq!(parse_plays(" 1,234 "), 1234);
        assert_eq!(parse_plays("12.9"), 12);
        assert_eq!(parse_plays("-5"), 0);
        assert_eq!(parse_plays("n/a"), 0);
        assert_eq!(parse_plays(""), 0);
    }

    #[test]
    fn airport_row_is_tagged() {
        let e = normalize_row("AdPortal", "Gate b12", "ord_t1_gates", "2024-05-01 14:00:00", "30");
        assert_eq!(e.system_type, SystemType::Airport);
        assert_eq!(e.hour.map(|h| h.value()), Some(14));
        assert_eq!(e.plays, 30);
        assert_eq!(e.airport.as_deref(), Some("ORD"));
        assert_eq!(e.airport_group, "ORD");
        assert_eq!(e.network_name, "GATE B12");
        assert_eq!(e.market, "Chicago");
        assert!(e.market_code.is_empty());
    }

    #[test]
    fn roadside_row_gets_market_code() {
        let e = normalize_row("SpotChart", "12ATL-I85-N", "", "9am", "7");
        assert_eq!(e.system_type, SystemType::Roadside);
        assert_eq!(e.market_code, "ATL");
        assert_eq!(e.hour.map(|h| h.value()), Some(9));
        assert!(e.airport_group.is_empty());
        assert_eq!(e.airport, None);
    }

    #[test]
    fn unreadable_hour_is_kept_without_hour() {
        let e = normalize_row("AdPortal", "X", "ATL_1", "soon", "3");
        assert_eq!(e.hour, None);
        assert_eq!(e.plays, 3);
    }

    #[test]
    fn other_formats_are_rejected() {
        let err = read_report(Path::new("report.txt")).unwrap_err();
        assert!(err.to_string().contains(".xlsx"));
    }

    #[test]
    fn sheet_rows_become_events() {
        let header: Vec<String> = [
            columns::SYSTEM,
            columns::DISPLAY,
            columns::NETWORK_CODE_ALT,
            columns::DATE_HOUR,
            columns::PLAYS,
        ]
        .iter()
        .map(|s| s.to_string())
        .collect();
        let rows = vec![
            vec!["AdPortal", "Gate 1", "ATL_A", "2024-05-01 09:00:00", "100"],
            vec!["SpotChart", "DEN-I25"],
        ]
        .into_iter()
        .map(|r| r.into_iter().map(str::to_string).collect())
        .collect();

        let df = rows_to_frame(&header, rows).unwrap();
        let events = frame_to_events(&df).unwrap();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].airport.as_deref(), Some("ATL"));
        assert_eq!(events[0].plays, 100);
        assert_eq!(events[1].system_type, SystemType::Roadside);
        assert_eq!(events[1].hour, None);
        assert_eq!(events[1].plays, 0);
    }

    #[test]
    fn workbook_cells_render_as_text() {
        assert_eq!(cell_text(&Data::Float(30.0)), "30");
        assert_eq!(cell_text(&Data::Int(7)), "7");
        assert_eq!(cell_text(&Data::Empty), "");
        assert_eq!(cell_text(&Data::String("ORD_T1".into())), "ORD_T1");
    }
}
