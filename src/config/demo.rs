//! Sample report generated by `make_demo_report`.

pub struct DemoResources {
    /// (System, Network Code, Display)
    pub airport_screens: &'static [(&'static str, &'static str, &'static str)],
    /// (System, Display)
    pub roadside_boards: &'static [(&'static str, &'static str)],
}

pub struct DemoConfig {
    pub filename: &'static str,
    pub date: &'static str,
    pub resources: DemoResources,
}

pub const DEMO: DemoConfig = DemoConfig {
    filename: "demo_plays.csv",
    date: "2024-05-01",
    resources: DemoResources {
        airport_screens: &[
            ("AdPortal", "ATL_CONCOURSE_B", "Concourse B Wall"),
            ("AdPortal", "ORD_T1", "Terminal 1 Baggage"),
            ("RTB AdServer", "ORD_T3", "Terminal 3 Gates"),
            ("Vistar Scheduling Service", "MDW_MAIN", "Midway Checkpoint"),
            ("AdPortal", "LGA_B", "Terminal B Arrivals"),
        ],
        roadside_boards: &[
            ("SpotChart", "12ATL-I85-N"),
            ("SpotChart", "DEN-I25-S 4"),
            ("SpotChart", "7CHI-I90-E"),
        ],
    },
};
