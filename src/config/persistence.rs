//! Report output naming

/// Configuration for the exported report
pub struct ReportPersistenceConfig {
    /// Prefix of the per-run output directory
    pub directory_prefix: &'static str,
    /// File holding the prime windows of the overview and every airport
    pub windows_filename: &'static str,
    /// Extension used for each exported sheet
    pub sheet_extension: &'static str,
}

/// The Master Persistence Configuration
pub struct PersistenceConfig {
    pub report: ReportPersistenceConfig,
}

pub const PERSISTENCE: PersistenceConfig = PersistenceConfig {
    report: ReportPersistenceConfig {
        directory_prefix: "PlayRate_Report",
        windows_filename: "prime_windows.json",
        sheet_extension: "csv",
    },
};

/// Generate the dated report directory name
/// Example: "PlayRate_Report_2024-05-01"
pub fn report_dir_name(date: &str) -> String {
    format!("{}_{}", PERSISTENCE.report.directory_prefix, date)
}

/// Example: "Top_Hours_Overall.csv"
pub fn sheet_filename(sheet: &str) -> String {
    format!("{}.{}", sheet, PERSISTENCE.report.sheet_extension)
}
