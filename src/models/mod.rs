mod hourly;
mod play_event;
mod ranking;
mod report;
mod window;

pub use {
    hourly::{HourlyRecord, HourlySeries},
    play_event::PlayEvent,
    ranking::{DimensionHour, RankMethod, RankedHour},
    report::{AirportDrilldown, KpiCard, MarketGroup, Overview, PlaysReport},
    window::{HourSpan, PrimeWindow, TrimmedWindow, WindowCandidate},
};
