//! Analysis and reporting configuration

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::config::constants;
use crate::config::{HourBand, Pct};

/// Parameters for the prime play window search.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowSettings {
    /// Hours eligible for a window. Everything outside is dropped before the scan.
    pub band: HourBand,
    /// Shortest window we will report. Trimming never goes below this.
    pub min_len: usize,
    /// Longest window the candidate scan generates.
    pub max_len: usize,
    /// An hour is "weak" when its plays fall below this share of the window density.
    pub low_hour_relative_threshold: Pct,
    /// Score penalty applied per weak-hour fraction of the window.
    pub weak_hour_penalty_per_fraction: Pct,
    /// A second window must carry at least this share of window #1's plays.
    pub min_plays_pct_of_window1: Pct,
}

impl Default for WindowSettings {
    fn default() -> Self {
        constants::window::DEFAULT
    }
}

/// Sizes of the ranked views shown on the dashboard and in the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RankingSettings {
    pub kpi_cards: usize,
    pub top_table_rows: usize,
    pub summary_rows: usize,
}

impl Default for RankingSettings {
    fn default() -> Self {
        constants::ranking::DEFAULT
    }
}

/// The Master Report Configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ReportConfig {
    pub window: WindowSettings,
    pub ranking: RankingSettings,
}

impl ReportConfig {
    /// Loads a JSON override. Fields left out keep their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: Self = serde_json::from_str(&raw)
            .with_context(|| format!("Invalid config JSON in {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects settings the window search cannot honour.
    pub fn validate(&self) -> Result<()> {
        let w = &self.window;
        if w.min_len < 1 || w.min_len > w.max_len {
            anyhow::bail!(
                "window lengths must satisfy 1 <= min_len <= max_len (got {}..={})",
                w.min_len,
                w.max_len
            );
        }
        if w.band.is_empty() || w.band.last > 23 {
            anyhow::bail!("hour band {} must lie within 0..=23", w.band);
        }
        Ok(())
    }
}
