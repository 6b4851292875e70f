use crate::analysis::{generate_candidates, rank_candidates, select_secondary, trim_window};
use crate::config::WindowSettings;
use crate::models::{HourlySeries, PrimeWindow};

pub struct PrimeWindowFinder;

impl PrimeWindowFinder {
    /// Finds the prime play window(s) of one entity's hourly totals.
    ///
    /// Returns nothing when the qualifying band holds fewer than `min_len` hours,
    /// no plays at all, or no contiguous run of hours. Otherwise returns the best
    /// window, followed by a second one when a strong enough, non-overlapping
    /// candidate exists. `hourly` is only read; callers may reuse it for other
    /// entities.
    pub fn find(hourly: &HourlySeries, settings: &WindowSettings) -> Vec<PrimeWindow> {
        let filtered = hourly.within(settings.band);
        if filtered.len() < settings.min_len || filtered.total_plays() == 0 {
            return Vec::new();
        }

        let ranked = rank_candidates(generate_candidates(&filtered, settings));
        let Some((best, remaining)) = ranked.split_first() else {
            return Vec::new();
        };

        let first = trim_window(best, &filtered, settings);
        if first.duration < settings.min_len {
            return Vec::new();
        }

        let mut windows = vec![PrimeWindow::from(first)];
        if let Some(second) = select_secondary(remaining, &first, &filtered, settings) {
            windows.push(PrimeWindow::from(second));
        }

        log::debug!(
            "prime windows over {} qualifying hours: {:?}",
            filtered.len(),
            windows
        );
        windows
    }
}

/// Shorthand for [`PrimeWindowFinder::find`].
pub fn find_prime_windows(hourly: &HourlySeries, settings: &WindowSettings) -> Vec<PrimeWindow> {
    PrimeWindowFinder::find(hourly, settings)
}
