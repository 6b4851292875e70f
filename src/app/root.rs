use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::analysis::{build_drilldown, build_overview, summarize};
use crate::config::ReportConfig;
use crate::data::{WindowsFile, export_report, read_report};
use crate::models::{MarketGroup, PlaysReport};
use crate::trace_time;
use crate::ui::{render_drilldown, render_overview};
use crate::utils::today_string;
use crate::{Cli, Command};

/// One CLI invocation: the resolved configuration plus output mode.
pub struct App {
    config: ReportConfig,
    json: bool,
}

impl App {
    pub fn new(args: &Cli) -> Result<Self> {
        let config = match &args.config {
            Some(path) => ReportConfig::load(path)?,
            None => ReportConfig::default(),
        };
        config.validate()?;
        Ok(Self {
            config,
            json: args.json,
        })
    }

    pub fn run(&self, command: &Command) -> Result<()> {
        match command {
            Command::Overview { file } => self.overview(file),
            Command::Drilldown {
                file,
                market,
                airport,
            } => self.drilldown(file, market.as_deref(), airport.as_deref()),
            Command::Export { file, out } => {
                let dir = self.export(file, out.as_deref())?;
                println!("{}", dir.display());
                Ok(())
            }
        }
    }

    fn load(&self, file: &Path) -> Result<PlaysReport> {
        let events = trace_time!("read_report", 50_000, { read_report(file)? });
        Ok(summarize(events))
    }

    fn overview(&self, file: &Path) -> Result<()> {
        let report = self.load(file)?;
        let overview = build_overview(&report, &self.config);
        if self.json {
            println!("{}", serde_json::to_string_pretty(&overview)?);
        } else {
            println!("{}", render_overview(&overview));
        }
        Ok(())
    }

    fn drilldown(&self, file: &Path, market: Option<&str>, airport: Option<&str>) -> Result<()> {
        let report = self.load(file)?;
        let markets = trace_time!("build_drilldown", 10_000, {
            build_drilldown(&report.raw, &self.config)
        });
        let markets = filter_markets(markets, market, airport);
        if self.json {
            println!("{}", serde_json::to_string_pretty(&markets)?);
        } else {
            println!("{}", render_drilldown(&markets));
        }
        Ok(())
    }

    /// Writes the report next to `out` (current directory by default).
    pub fn export(&self, file: &Path, out: Option<&Path>) -> Result<PathBuf> {
        let report = self.load(file)?;
        let overview = build_overview(&report, &self.config);
        let markets = build_drilldown(&report.raw, &self.config);
        let windows = WindowsFile::new(&overview, &markets);

        let out_root = match out {
            Some(dir) => dir.to_path_buf(),
            None => std::env::current_dir().context("Failed to resolve current directory")?,
        };
        export_report(&report, &windows, &self.config, &out_root, &today_string())
    }
}

/// Keeps the markets (by label) and airports (by code) the user asked for.
/// Both filters are case-insensitive; markets left without airports are dropped.
pub fn filter_markets(
    markets: Vec<MarketGroup>,
    market: Option<&str>,
    airport: Option<&str>,
) -> Vec<MarketGroup> {
    markets
        .into_iter()
        .filter(|m| market.is_none_or(|want| m.market.eq_ignore_ascii_case(want.trim())))
        .filter_map(|mut m| {
            if let Some(want) = airport {
                m.airports
                    .retain(|a| a.airport.eq_ignore_ascii_case(want.trim()));
            }
            (!m.airports.is_empty()).then_some(m)
        })
        .collect()
}
