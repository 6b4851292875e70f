mod chart;
mod dashboard;
mod tables;
mod ui_text;

pub use dashboard::{render_drilldown, render_overview};
pub(crate) use ui_text::UI_TEXT;
