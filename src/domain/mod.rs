pub mod airport;
pub mod hour;
pub mod system_type;

pub use airport::{extract_airport, long_name, market_label};
pub use hour::{HourOfDay, format_hour};
pub use system_type::{SystemType, roadside_market_code};
