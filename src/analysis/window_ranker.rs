use std::cmp::Ordering;

use crate::models::WindowCandidate;

/// Best first: highest score, then the shortest window, then the earliest start.
pub fn compare_candidates(a: &WindowCandidate, b: &WindowCandidate) -> Ordering {
    b.rank_score
        .total_cmp(&a.rank_score)
        .then(a.duration.cmp(&b.duration))
        .then(a.start_hour.cmp(&b.start_hour))
}

/// Orders candidates best first. The sort is stable, so candidates with an
/// identical key keep their generation order.
pub fn rank_candidates(mut candidates: Vec<WindowCandidate>) -> Vec<WindowCandidate> {
    candidates.sort_by(compare_candidates);
    candidates
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(start: u8, duration: usize, score: f64) -> WindowCandidate {
        WindowCandidate {
            start_hour: start,
            end_hour: start + duration as u8 - 1,
            duration,
            total_plays: 0,
            density: score,
            weak_count: 0,
            rank_score: score,
        }
    }

    fn spans(ranked: &[WindowCandidate]) -> Vec<(u8, usize)> {
        ranked.iter().map(|c| (c.start_hour, c.duration)).collect()
    }

    #[test]
    fn score_then_shorter_then_earlier() {
        let ranked = rank_candidates(vec![
            candidate(9, 3, 300.0),
            candidate(15, 2, 300.0),
            candidate(7, 2, 120.0),
            candidate(14, 2, 300.0),
            candidate(8, 4, 310.5),
        ]);
        assert_eq!(spans(&ranked), vec![(8, 4), (14, 2), (15, 2), (9, 3), (7, 2)]);
    }

    #[test]
    fn ranking_is_deterministic() {
        let input = vec![
            candidate(10, 2, 50.0),
            candidate(12, 3, 50.0),
            candidate(8, 2, 50.0),
        ];
        let a = rank_candidates(input.clone());
        let b = rank_candidates(input);
        assert_eq!(a, b);
        assert_eq!(spans(&a), vec![(8, 2), (10, 2), (12, 3)]);
    }
}
