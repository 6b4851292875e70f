use crate::analysis::window_trimmer::trim_window;
use crate::config::{DEBUG_FLAGS, WindowSettings};
use crate::models::{HourSpan, HourlySeries, TrimmedWindow, WindowCandidate};

/// Why a ranked candidate did not become window #2.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Rejection {
    OverlapsFirst,
    TooFewPlays,
    TrimmedTooShort,
    TooFewPlaysAfterTrim,
    OverlapsFirstAfterTrim,
}

/// Picks the first remaining candidate that is worth reporting next to `first`.
///
/// `remaining` is the ranked list without window #1. A candidate must stay clear of
/// `first` (before and after its own trim) and keep at least
/// `min_plays_pct_of_window1` of `first`'s plays (before and after trim). The first
/// candidate that passes wins; the scan does not look for a better one.
pub fn select_secondary(
    remaining: &[WindowCandidate],
    first: &TrimmedWindow,
    series: &HourlySeries,
    settings: &WindowSettings,
) -> Option<TrimmedWindow> {
    let min_plays = settings
        .min_plays_pct_of_window1
        .of(first.total_plays as f64);

    remaining.iter().find_map(|candidate| {
        match evaluate(candidate, first, min_plays, series, settings) {
            Ok(trimmed) => Some(trimmed),
            Err(reason) => {
                if DEBUG_FLAGS.log_secondary {
                    log::debug!(
                        "secondary {}-{} skipped: {:?}",
                        candidate.start_hour,
                        candidate.end_hour,
                        reason
                    );
                }
                None
            }
        }
    })
}

fn evaluate(
    candidate: &WindowCandidate,
    first: &TrimmedWindow,
    min_plays: f64,
    series: &HourlySeries,
    settings: &WindowSettings,
) -> Result<TrimmedWindow, Rejection> {
    if !candidate.is_disjoint_from(first) {
        return Err(Rejection::OverlapsFirst);
    }
    // Cheap pre-filter before paying for a trim.
    if (candidate.total_plays as f64) < min_plays {
        return Err(Rejection::TooFewPlays);
    }

    let trimmed = trim_window(candidate, series, settings);
    if trimmed.duration < settings.min_len {
        return Err(Rejection::TrimmedTooShort);
    }
    if (trimmed.total_plays as f64) < min_plays {
        return Err(Rejection::TooFewPlaysAfterTrim);
    }
    if !trimmed.is_disjoint_from(first) {
        return Err(Rejection::OverlapsFirstAfterTrim);
    }
    Ok(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{generate_candidates, rank_candidates};

    fn first(start: u8, end: u8, plays: u64) -> TrimmedWindow {
        TrimmedWindow {
            start_hour: start,
            end_hour: end,
            duration: (end - start + 1) as usize,
            total_plays: plays,
        }
    }

    fn second_of(
        remaining: &[WindowCandidate],
        first: &TrimmedWindow,
        series: &HourlySeries,
    ) -> Option<TrimmedWindow> {
        select_secondary(remaining, first, series, &WindowSettings::default())
    }

    fn remaining_after_best(series: &HourlySeries) -> Vec<WindowCandidate> {
        let settings = WindowSettings::default();
        rank_candidates(generate_candidates(series, &settings))
            .into_iter()
            .skip(1)
            .collect()
    }

    #[test]
    fn overlapping_candidates_are_skipped() {
        let series =
            HourlySeries::from_pairs(&[(10, 400), (11, 400), (12, 380), (17, 300), (18, 300)]);
        let remaining = remaining_after_best(&series);
        // (10,12) and (11,12) rank next but touch window #1.
        assert!(!remaining[0].is_disjoint_from(&first(10, 11, 800)));

        let second = second_of(&remaining, &first(10, 11, 800), &series);
        assert_eq!(
            second.map(|w| (w.start_hour, w.end_hour, w.total_plays)),
            Some((17, 18, 600))
        );
    }

    #[test]
    fn weak_candidates_are_skipped() {
        let series = HourlySeries::from_pairs(&[(8, 250), (9, 250), (18, 100), (19, 100)]);
        let remaining = remaining_after_best(&series);
        let second = second_of(&remaining, &first(8, 9, 500), &series);
        assert_eq!(second, None);
    }

    #[test]
    fn plays_are_rechecked_after_trim() {
        // (16,18) = 700 passes the 70% pre-filter (>= 630) but trims to (16,17) = 600.
        let series =
            HourlySeries::from_pairs(&[(10, 450), (11, 450), (16, 300), (17, 300), (18, 100)]);
        let candidate = WindowCandidate {
            start_hour: 16,
            end_hour: 18,
            duration: 3,
            total_plays: 700,
            density: 233.33,
            weak_count: 1,
            rank_score: 217.78,
        };
        let second = second_of(&[candidate], &first(10, 11, 900), &series);
        assert_eq!(second, None);
    }

    #[test]
    fn first_acceptable_candidate_wins() {
        let series = HourlySeries::from_pairs(&[
            (8, 100),
            (9, 100),
            (12, 100),
            (13, 100),
            (17, 100),
            (18, 100),
        ]);
        let remaining = remaining_after_best(&series);
        let second = second_of(&remaining, &first(8, 9, 200), &series);
        assert_eq!(second.map(|w| w.start_hour), Some(12));
    }
}
