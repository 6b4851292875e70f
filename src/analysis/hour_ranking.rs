use std::collections::BTreeMap;

use itertools::Itertools;

use crate::models::{DimensionHour, HourlySeries, RankMethod, RankedHour};

/// Ranks hours by plays (busiest first, earlier hour on ties) and returns them in
/// rank order.
pub fn rank_hours(series: &HourlySeries, method: RankMethod) -> Vec<RankedHour> {
    let ordered = series
        .iter()
        .sorted_by(|a, b| b.total_plays.cmp(&a.total_plays).then(a.hour.cmp(&b.hour)))
        .collect_vec();

    let mut ranked = Vec::with_capacity(ordered.len());
    let mut dense = 0;
    for (_, group) in &ordered.iter().enumerate().chunk_by(|(_, r)| r.total_plays) {
        dense += 1;
        let mut min_rank = None;
        for (pos, rec) in group {
            let rank = match method {
                RankMethod::Ordinal => pos + 1,
                RankMethod::Min => *min_rank.get_or_insert(pos + 1),
                RankMethod::Dense => dense,
            };
            ranked.push(RankedHour {
                hour: rec.hour,
                total_plays: rec.total_plays,
                rank,
            });
        }
    }
    ranked
}

/// Per-key hourly tables ranked within each key ("min" method), ordered by key,
/// then plays descending, then hour.
pub fn rank_by_dimension(by_key: &BTreeMap<String, HourlySeries>) -> Vec<DimensionHour> {
    by_key
        .iter()
        .flat_map(|(key, series)| {
            rank_hours(series, RankMethod::Min)
                .into_iter()
                .map(move |r| DimensionHour {
                    key: key.clone(),
                    hour: r.hour,
                    plays: r.total_plays,
                    rank_within_key: r.rank,
                })
        })
        .collect()
}

/// The first `n` rows of a ranked table.
pub fn top_n(ranked: &[RankedHour], n: usize) -> Vec<RankedHour> {
    ranked.iter().take(n).copied().collect()
}
