use tabled::{Table, Tabled, builder::Builder, settings::Style};

use crate::domain::format_hour;
use crate::models::{HourSpan, KpiCard, PrimeWindow, RankedHour};
use crate::ui::UI_TEXT;
use crate::utils::format_thousands;

/// Hour / Total Plays / Rank
pub fn hours_table(rows: &[RankedHour]) -> String {
    let mut builder = Builder::default();
    builder.push_record([UI_TEXT.col_hour, UI_TEXT.col_total_plays, UI_TEXT.col_rank]);
    for row in rows {
        builder.push_record([
            format_hour(row.hour),
            format_thousands(row.total_plays),
            row.rank.to_string(),
        ]);
    }
    builder.build().with(Style::rounded()).to_string()
}

#[derive(Tabled)]
struct CardRow {
    #[tabled(rename = "")]
    title: String,
    #[tabled(rename = "Hour")]
    hour: String,
    #[tabled(rename = "Plays")]
    plays: String,
}

pub fn kpi_table(cards: &[KpiCard]) -> String {
    let rows = cards.iter().map(|card| CardRow {
        title: card.title.clone(),
        hour: card
            .hour
            .map(format_hour)
            .unwrap_or_else(|| UI_TEXT.kpi_no_hour.clone()),
        plays: card
            .total_plays
            .map(format_thousands)
            .unwrap_or_else(|| UI_TEXT.kpi_no_data.clone()),
    });
    Table::new(rows).with(Style::rounded()).to_string()
}

/// "Prime Window" for a lone window, "Window 1" / "Window 2" otherwise.
pub fn window_label(index: usize, count: usize) -> String {
    if count == 1 {
        UI_TEXT.label_prime_window.clone()
    } else {
        format!("{} {}", UI_TEXT.label_window_prefix, index + 1)
    }
}

#[derive(Tabled)]
struct WindowRow {
    #[tabled(rename = "")]
    label: String,
    #[tabled(rename = "Hours")]
    range: String,
    #[tabled(rename = "Plays")]
    plays: String,
}

/// The window cards, or the empty-result notice.
pub fn windows_table(windows: &[PrimeWindow]) -> String {
    if windows.is_empty() {
        return format!("{} {}", UI_TEXT.icon_warning, UI_TEXT.no_windows_notice);
    }
    let rows = windows.iter().enumerate().map(|(i, w)| WindowRow {
        label: format!("{} {}", UI_TEXT.icon_window, window_label(i, windows.len())),
        range: w.range_label(),
        plays: w.plays_label(),
    });
    Table::new(rows).with(Style::rounded()).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_depend_on_count() {
        assert_eq!(window_label(0, 1), "Prime Window");
        assert_eq!(window_label(0, 2), "Window 1");
        assert_eq!(window_label(1, 2), "Window 2");
    }

    #[test]
    fn empty_windows_show_notice() {
        let out = windows_table(&[]);
        assert!(out.contains("No qualifying hours (7 am – 9 pm) or valid windows found"));
    }

    #[test]
    fn window_cards_show_range_and_plays() {
        let out = windows_table(&[PrimeWindow {
            start_hour: 14,
            end_hour: 15,
            total_plays: 1600,
        }]);
        assert!(out.contains("Prime Window"));
        assert!(out.contains("2pm – 3pm"));
        assert!(out.contains("1,600 Total Plays"));
    }

    #[test]
    fn empty_kpi_slots_render_placeholders() {
        let out = kpi_table(&[KpiCard {
            title: "3rd Best".to_string(),
            hour: None,
            total_plays: None,
        }]);
        assert!(out.contains("3rd Best"));
        assert!(out.contains("No Data"));
    }

    #[test]
    fn hours_table_has_headers() {
        let out = hours_table(&[RankedHour {
            hour: 9,
            total_plays: 12000,
            rank: 1,
        }]);
        assert!(out.contains("Total Plays"));
        assert!(out.contains("9am"));
        assert!(out.contains("12,000"));
    }
}
