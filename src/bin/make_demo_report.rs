use std::fs::File;
use std::path::PathBuf;

use anyhow::{Context, Result};
use plays_finder::config::{DEMO, constants::columns};
use polars::prelude::*;

// Relative traffic per hour of day (0..=23). Airports peak late morning and early
// evening; roadside follows the commute.
const AIRPORT_CURVE: [u64; 24] = [
    2, 1, 1, 1, 3, 8, 14, 22, 30, 34, 36, 33, 28, 26, 25, 27, 31, 35, 33, 26, 18, 12, 7, 4,
];
const ROADSIDE_CURVE: [u64; 24] = [
    3, 2, 2, 2, 4, 9, 18, 30, 32, 24, 18, 17, 19, 18, 19, 24, 31, 33, 26, 17, 12, 9, 6, 4,
];

fn main() -> Result<()> {
    // 1. Setup Logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // 2. Output path: first argument or the demo default
    let path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEMO.filename));

    // 3. Build rows
    let mut systems = Vec::new();
    let mut displays = Vec::new();
    let mut networks = Vec::new();
    let mut date_hours = Vec::new();
    let mut plays = Vec::new();

    for (screen, &(system, network, display)) in DEMO.resources.airport_screens.iter().enumerate() {
        let scale = 10 + 3 * screen as u64;
        for (hour, weight) in AIRPORT_CURVE.iter().enumerate() {
            systems.push(system.to_string());
            displays.push(display.to_string());
            networks.push(network.to_string());
            date_hours.push(format!("{} {:02}:00:00", DEMO.date, hour));
            plays.push((weight * scale).to_string());
        }
    }
    for (board, &(system, display)) in DEMO.resources.roadside_boards.iter().enumerate() {
        let scale = 4 + board as u64;
        for (hour, weight) in ROADSIDE_CURVE.iter().enumerate() {
            systems.push(system.to_string());
            displays.push(display.to_string());
            networks.push(String::new());
            date_hours.push(format!("{} {:02}:00:00", DEMO.date, hour));
            plays.push((weight * scale).to_string());
        }
    }
    log::info!("Generated {} demo rows", systems.len());

    // 4. Write CSV
    let mut df = df!(
        columns::SYSTEM => systems,
        columns::DISPLAY => displays,
        columns::NETWORK_CODE => networks,
        columns::DATE_HOUR => date_hours,
        columns::PLAYS => plays,
    )?;
    let mut file =
        File::create(&path).with_context(|| format!("Failed to create {}", path.display()))?;
    CsvWriter::new(&mut file)
        .include_header(true)
        .finish(&mut df)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    log::info!("Demo report written to {}", path.display());
    Ok(())
}
