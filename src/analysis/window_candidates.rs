use crate::config::{DEBUG_FLAGS, WindowSettings};
use crate::models::{HourlyRecord, HourlySeries, WindowCandidate};

/// Rounds to two decimals, the precision scores are compared at.
///
/// Formatting rounds the exact binary value, so 2.675 (stored just below) gives 2.67.
/// Scaling by 100 first would round the product up to 267.5 and give 2.68.
pub(crate) fn round_cents(v: f64) -> f64 {
    format!("{:.2}", v).parse().unwrap_or(v)
}

/// Enumerates every contiguous window of `min_len..=max_len` hours in `series`
/// and scores it.
///
/// `series` must already be restricted to the qualifying band. A window is only
/// produced when its hours are literally consecutive: a missing hour breaks it.
/// Output order is (start index, duration) ascending, which the ranker relies on
/// for a stable tie order.
pub fn generate_candidates(
    series: &HourlySeries,
    settings: &WindowSettings,
) -> Vec<WindowCandidate> {
    let records = series.records();
    let n = records.len();
    let mut candidates = Vec::new();

    for i in 0..n {
        let start_hour = records[i].hour;
        for dur in settings.min_len..=settings.max_len {
            if i + dur > n {
                break;
            }
            let slice = &records[i..i + dur];
            // Gap inside the slice: longer windows from this start can't close it.
            if slice[dur - 1].hour as usize != start_hour as usize + dur - 1 {
                break;
            }
            candidates.push(score_window(slice, settings));
        }
    }

    if DEBUG_FLAGS.log_candidates {
        for c in &candidates {
            log::debug!(
                "candidate {}-{} dur={} plays={} density={} weak={} score={}",
                c.start_hour,
                c.end_hour,
                c.duration,
                c.total_plays,
                c.density,
                c.weak_count,
                c.rank_score
            );
        }
    }

    candidates
}

/// Density, weak-hour count and penalised score of one contiguous slice.
fn score_window(slice: &[HourlyRecord], settings: &WindowSettings) -> WindowCandidate {
    let dur = slice.len();
    let total_plays: u64 = slice.iter().map(|r| r.total_plays).sum();
    let density = total_plays as f64 / dur as f64;

    let weak_cutoff = settings.low_hour_relative_threshold.of(density);
    let weak_count = slice
        .iter()
        .filter(|r| (r.total_plays as f64) < weak_cutoff)
        .count();

    let weak_fraction = weak_count as f64 / dur as f64;
    let penalty_multiplier = 1.0 - settings.weak_hour_penalty_per_fraction.of(weak_fraction);
    let rank_score = density * penalty_multiplier;

    WindowCandidate {
        start_hour: slice[0].hour,
        end_hour: slice[dur - 1].hour,
        duration: dur,
        total_plays,
        density: round_cents(density),
        weak_count,
        rank_score: round_cents(rank_score),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings() -> WindowSettings {
        WindowSettings::default()
    }

    #[test]
    fn enumerates_all_contiguous_lengths() {
        let series = HourlySeries::from_pairs(&[(8, 10), (9, 10), (10, 10), (11, 10), (12, 10)]);
        let candidates = generate_candidates(&series, &settings());
        // starts 8,9 -> 3 each; 10 -> 2; 11 -> 1; 12 -> 0
        assert_eq!(candidates.len(), 9);
        assert!(candidates.iter().all(|c| (2..=4).contains(&c.duration)));
        assert!(
            candidates
                .iter()
                .all(|c| c.end_hour as usize == c.start_hour as usize + c.duration - 1)
        );
    }

    #[test]
    fn gaps_break_windows() {
        let series = HourlySeries::from_pairs(&[(8, 10), (9, 10), (11, 10), (12, 10)]);
        let spans: Vec<(u8, u8)> = generate_candidates(&series, &settings())
            .iter()
            .map(|c| (c.start_hour, c.end_hour))
            .collect();
        assert_eq!(spans, vec![(8, 9), (11, 12)]);
    }

    #[test]
    fn weak_hours_are_penalised() {
        // density 200, cutoff 140: hour 9 (100) is weak.
        let series = HourlySeries::from_pairs(&[(8, 300), (9, 100)]);
        let c = &generate_candidates(&series, &settings())[0];
        assert_eq!(c.total_plays, 400);
        assert_eq!(c.density, 200.0);
        assert_eq!(c.weak_count, 1);
        // 200 * (1 - 0.2 * 0.5)
        assert_eq!(c.rank_score, 180.0);
    }

    #[test]
    fn scores_are_rounded_to_cents() {
        let series = HourlySeries::from_pairs(&[(8, 100), (9, 100), (10, 101)]);
        let c = generate_candidates(&series, &settings())
            .into_iter()
            .find(|c| c.duration == 3)
            .unwrap();
        assert_eq!(c.density, 100.33);
        assert_eq!(c.rank_score, 100.33);
    }

    #[test]
    fn rounding_follows_the_stored_value() {
        assert_eq!(round_cents(2.675), 2.67);
        assert_eq!(round_cents(100.0 / 3.0), 33.33);
        assert_eq!(round_cents(0.0), 0.0);
    }

    #[test]
    fn near_tie_score_rounds_down() {
        // density 1.5, one weak hour of four: 1.5 * 0.95 sits just below 1.425.
        let series = HourlySeries::from_pairs(&[(8, 2), (9, 2), (10, 2), (11, 0)]);
        let c = generate_candidates(&series, &settings())
            .into_iter()
            .find(|c| c.duration == 4)
            .unwrap();
        assert_eq!(c.weak_count, 1);
        assert_eq!(c.density, 1.5);
        assert_eq!(c.rank_score, 1.42);
    }

    #[test]
    fn too_few_hours_yield_nothing() {
        let series = HourlySeries::from_pairs(&[(10, 500)]);
        assert!(generate_candidates(&series, &settings()).is_empty());
        assert!(generate_candidates(&HourlySeries::default(), &settings()).is_empty());
    }
}
