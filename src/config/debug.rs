//! Debugging feature flags.

pub struct LogFlags {
    /// Activate trace_time macro (scope-level timing)
    pub log_performance: bool,

    /// Log every candidate the window scan produces
    pub log_candidates: bool,

    /// Log each edge hour the trimmer drops
    pub log_trimming: bool,

    /// Log why each secondary candidate was skipped
    pub log_secondary: bool,

    /// Log rows dropped during normalization
    pub log_ingest: bool,
}

pub const DEBUG_FLAGS: LogFlags = LogFlags {
    log_performance: false,
    log_candidates: false,
    log_trimming: false,
    log_secondary: false,
    log_ingest: true,
};
