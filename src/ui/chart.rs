use crate::domain::format_hour;
use crate::models::HourlySeries;
use crate::ui::UI_TEXT;
use crate::utils::format_thousands;

const BAR_WIDTH: usize = 40;

/// Horizontal bar per hour, scaled to the busiest hour.
pub fn hourly_bars(series: &HourlySeries) -> String {
    let peak = series.iter().map(|r| r.total_plays).max().unwrap_or(0);
    series
        .iter()
        .map(|r| {
            let len = if peak == 0 {
                0
            } else {
                ((r.total_plays as f64 / peak as f64) * BAR_WIDTH as f64).round() as usize
            };
            format!(
                "{:>5} {:<width$} {}",
                format_hour(r.hour),
                UI_TEXT.icon_bar.repeat(len),
                format_thousands(r.total_plays),
                width = BAR_WIDTH
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
