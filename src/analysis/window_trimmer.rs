use crate::config::{DEBUG_FLAGS, WindowSettings};
use crate::models::{HourSpan, HourlySeries, TrimmedWindow};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Edge {
    Start,
    End,
}

/// Tightens a selected window by dropping weak edge hours.
///
/// Left edge first, then right edge. An edge hour is dropped while the window is
/// longer than `min_len` and the hour's plays fall below the low-hour threshold of
/// the current segment's density (recomputed after every drop). The right edge is
/// judged against the already left-trimmed segment. Plays are recounted from
/// `series` over the final bounds.
pub fn trim_window(
    window: &impl HourSpan,
    series: &HourlySeries,
    settings: &WindowSettings,
) -> TrimmedWindow {
    let mut start = window.start_hour();
    let mut end = window.end_hour();
    let mut duration = window.duration();

    for edge in [Edge::Start, Edge::End] {
        while duration > settings.min_len {
            let edge_hour = match edge {
                Edge::Start => start,
                Edge::End => end,
            };
            let Some(edge_plays) = series.plays_at(edge_hour) else {
                break;
            };

            let segment = series.segment(start, end);
            if segment.is_empty() || duration == 0 {
                break;
            }
            let segment_plays: u64 = segment.iter().map(|r| r.total_plays).sum();
            let density = segment_plays as f64 / duration as f64;

            if (edge_plays as f64) >= settings.low_hour_relative_threshold.of(density) {
                break;
            }

            if DEBUG_FLAGS.log_trimming {
                log::debug!(
                    "trim {:?} hour {} ({} plays < {} x {:.2}) from {}-{}",
                    edge,
                    edge_hour,
                    edge_plays,
                    settings.low_hour_relative_threshold,
                    density,
                    start,
                    end
                );
            }

            match edge {
                Edge::Start => start += 1,
                Edge::End => end -= 1,
            }
            duration -= 1;
        }
    }

    TrimmedWindow {
        start_hour: start,
        end_hour: end,
        duration,
        total_plays: series.plays_between(start, end),
    }
}
