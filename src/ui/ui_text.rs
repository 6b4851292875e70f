use std::sync::LazyLock;

pub const ICON_TARGET: &str = "\u{25ce}";
pub const ICON_CLOCK: &str = "\u{25f7}";
pub const ICON_BAR: &str = "\u{2588}";
pub const ICON_WARNING: &str = "\u{26a0}";

pub struct UiText {
    // --- Overview ---
    pub overview_title: String,
    pub windows_heading: String,
    pub label_prime_window: String,
    pub label_window_prefix: String,
    pub no_windows_notice: String,
    pub kpi_heading: String,
    pub kpi_no_hour: String,
    pub kpi_no_data: String,
    pub top_hours_heading: String,
    pub chart_heading: String,

    // --- Drill-down ---
    pub drilldown_title: String,
    pub networks_used: String,
    pub no_airport_rows: String,

    // --- Table headers ---
    pub col_hour: &'static str,
    pub col_total_plays: &'static str,
    pub col_rank: &'static str,

    pub icon_window: String,
    pub icon_hour: String,
    pub icon_bar: String,
    pub icon_warning: String,
}

pub static UI_TEXT: LazyLock<UiText> = LazyLock::new(|| UiText {
    overview_title: "Airport Overview".to_string(),
    windows_heading: "Prime Play Windows".to_string(),
    label_prime_window: "Prime Window".to_string(),
    label_window_prefix: "Window".to_string(),
    no_windows_notice: "No qualifying hours (7 am – 9 pm) or valid windows found".to_string(),
    kpi_heading: "Top Hours".to_string(),
    kpi_no_hour: "-".to_string(),
    kpi_no_data: "No Data".to_string(),
    top_hours_heading: "Top 10 Hours".to_string(),
    chart_heading: "Plays by Hour".to_string(),

    drilldown_title: "Market Drill-down".to_string(),
    networks_used: "Networks used".to_string(),
    no_airport_rows: "No airport rows in this report".to_string(),

    col_hour: "Hour",
    col_total_plays: "Total Plays",
    col_rank: "Rank",

    icon_window: ICON_TARGET.to_string(),
    icon_hour: ICON_CLOCK.to_string(),
    icon_bar: ICON_BAR.to_string(),
    icon_warning: ICON_WARNING.to_string(),
});
