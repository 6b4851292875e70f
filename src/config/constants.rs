// Top Level Constants

pub mod window {
    use crate::config::{HourBand, Pct, WindowSettings};

    pub const QUALIFYING_BAND: HourBand = HourBand::new(7, 21); // 7am - 9pm inclusive
    pub const MIN_PRIME_WINDOW_LEN: usize = 2;
    pub const MAX_PRIME_WINDOW_LEN: usize = 4;
    pub const LOW_HOUR_RELATIVE_THRESHOLD: Pct = Pct::new(0.70);
    pub const WEAK_HOUR_PENALTY_PER_FRACTION: Pct = Pct::new(0.20);
    pub const MIN_PLAYS_PCT_OF_WINDOW1: Pct = Pct::new(0.70);

    pub const DEFAULT: WindowSettings = WindowSettings {
        band: QUALIFYING_BAND,
        min_len: MIN_PRIME_WINDOW_LEN,
        max_len: MAX_PRIME_WINDOW_LEN,
        low_hour_relative_threshold: LOW_HOUR_RELATIVE_THRESHOLD,
        weak_hour_penalty_per_fraction: WEAK_HOUR_PENALTY_PER_FRACTION,
        min_plays_pct_of_window1: MIN_PLAYS_PCT_OF_WINDOW1,
    };
}

pub mod ranking {
    use crate::config::RankingSettings;

    pub const KPI_CARDS: usize = 3;
    pub const TOP_TABLE_ROWS: usize = 10;
    pub const SUMMARY_ROWS: usize = 5;

    pub const DEFAULT: RankingSettings = RankingSettings {
        kpi_cards: KPI_CARDS,
        top_table_rows: TOP_TABLE_ROWS,
        summary_rows: SUMMARY_ROWS,
    };
}

/// Column headers of the hourly plays export.
pub mod columns {
    pub const SYSTEM: &str = "System";
    pub const DISPLAY: &str = "Display";
    pub const NETWORK_CODE: &str = "Network Code";
    pub const NETWORK_CODE_ALT: &str = "Network_Code";
    pub const DATE_HOUR: &str = "Date & Hour - EST";
    pub const PLAYS: &str = "# Plays";
}
