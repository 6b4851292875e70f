// Window search and report aggregation
mod aggregation;
mod drilldown;
mod hour_ranking;
mod overview;
mod prime_window;
mod secondary_window;
mod summary;
mod window_candidates;
mod window_ranker;
mod window_trimmer;

pub use aggregation::{hourly_totals, hourly_totals_by};
pub use drilldown::build_drilldown;
pub use hour_ranking::{rank_by_dimension, rank_hours, top_n};
pub use overview::{build_kpis, build_overview};
pub use prime_window::{PrimeWindowFinder, find_prime_windows};
pub use secondary_window::select_secondary;
pub use summary::summarize;
pub use window_candidates::generate_candidates;
pub use window_ranker::{compare_candidates, rank_candidates};
pub use window_trimmer::trim_window;
