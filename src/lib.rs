// Core modules
pub mod analysis;
pub mod app;
pub mod config;
pub mod data;
pub mod domain;
pub mod models;
pub mod ui;
pub mod utils;

use std::path::PathBuf;

// Re-export commonly used types outside of crate (for make_demo_report.rs)
pub use analysis::{PrimeWindowFinder, find_prime_windows};
pub use app::App;
pub use config::{PERSISTENCE, ReportConfig, WindowSettings};
pub use models::{HourlySeries, PrimeWindow};

// CLI argument parsing
use clap::{Parser, Subcommand};

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// JSON file overriding the default window and ranking settings
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Print machine-readable JSON instead of the dashboard
    #[arg(long, global = true, default_value_t = false)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Airport overview: prime windows, top hours and the hourly chart
    Overview { file: PathBuf },
    /// Per market, per airport sections
    Drilldown {
        file: PathBuf,
        /// Only this market label (e.g. "Chicago")
        #[arg(long)]
        market: Option<String>,
        /// Only this airport code (e.g. "ORD")
        #[arg(long)]
        airport: Option<String>,
    },
    /// Write the report sheets and prime_windows.json
    Export {
        file: PathBuf,
        /// Parent directory for the dated report folder
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

/// Main application entry point
/// This is the public API for the binary to call
pub fn run_app(args: Cli) -> anyhow::Result<()> {
    let app = App::new(&args)?;
    app.run(&args.command)
}
