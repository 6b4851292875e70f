//! Configuration module for the plays finder.

// Can all be private now because we have a public re-export.
mod analysis;
mod debug;
mod demo;
mod persistence;
mod types;

// Public
pub mod constants;

// Re-export commonly used items
pub use analysis::{RankingSettings, ReportConfig, WindowSettings};
pub use debug::DEBUG_FLAGS;
pub use demo::DEMO;
pub use persistence::{PERSISTENCE, report_dir_name, sheet_filename};
pub use types::{HourBand, Pct};
