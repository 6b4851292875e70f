use serde::{Deserialize, Serialize};

use crate::config::HourBand;

/// Total plays recorded in one hour for one entity (overall, market, airport...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HourlyRecord {
    pub hour: u8,
    pub total_plays: u64,
}

impl HourlyRecord {
    pub const fn new(hour: u8, total_plays: u64) -> Self {
        Self { hour, total_plays }
    }
}

/// Hourly totals for one entity: sorted by hour, at most one record per hour.
/// An hour with no record is a gap; a record with zero plays is not.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<HourlyRecord>", into = "Vec<HourlyRecord>")]
pub struct HourlySeries {
    records: Vec<HourlyRecord>,
}

impl HourlySeries {
    /// Sorts by hour; repeated hours are summed into one record.
    pub fn from_records(records: impl IntoIterator<Item = HourlyRecord>) -> Self {
        let mut sorted: Vec<HourlyRecord> = records.into_iter().collect();
        sorted.sort_by_key(|r| r.hour);

        let mut merged: Vec<HourlyRecord> = Vec::with_capacity(sorted.len());
        for rec in sorted {
            match merged.last_mut() {
                Some(last) if last.hour == rec.hour => last.total_plays += rec.total_plays,
                _ => merged.push(rec),
            }
        }
        Self { records: merged }
    }

    /// Convenience for `(hour, plays)` pairs.
    pub fn from_pairs(pairs: &[(u8, u64)]) -> Self {
        Self::from_records(pairs.iter().map(|&(h, p)| HourlyRecord::new(h, p)))
    }

    #[inline]
    pub fn records(&self) -> &[HourlyRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &HourlyRecord> {
        self.records.iter()
    }

    /// Owned copy restricted to `band`. The source series is left untouched.
    pub fn within(&self, band: HourBand) -> Self {
        Self {
            records: self
                .records
                .iter()
                .copied()
                .filter(|r| band.contains(r.hour))
                .collect(),
        }
    }

    pub fn plays_at(&self, hour: u8) -> Option<u64> {
        self.records
            .binary_search_by_key(&hour, |r| r.hour)
            .ok()
            .map(|idx| self.records[idx].total_plays)
    }

    /// Sum of the records present in `start..=end`. Gaps contribute nothing.
    pub fn plays_between(&self, start: u8, end: u8) -> u64 {
        self.segment(start, end).iter().map(|r| r.total_plays).sum()
    }

    /// Records present in `start..=end`.
    pub fn segment(&self, start: u8, end: u8) -> &[HourlyRecord] {
        if start > end {
            return &[];
        }
        let lo = self.records.partition_point(|r| r.hour < start);
        let hi = self.records.partition_point(|r| r.hour <= end);
        &self.records[lo..hi]
    }

    pub fn total_plays(&self) -> u64 {
        self.records.iter().map(|r| r.total_plays).sum()
    }
}

impl From<Vec<HourlyRecord>> for HourlySeries {
    fn from(records: Vec<HourlyRecord>) -> Self {
        Self::from_records(records)
    }
}

impl From<HourlySeries> for Vec<HourlyRecord> {
    fn from(series: HourlySeries) -> Self {
        series.records
    }
}

impl FromIterator<HourlyRecord> for HourlySeries {
    fn from_iter<T: IntoIterator<Item = HourlyRecord>>(iter: T) -> Self {
        Self::from_records(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_are_sorted_and_merged() {
        let series = HourlySeries::from_pairs(&[(10, 5), (8, 1), (10, 7)]);
        assert_eq!(
            series.records(),
            &[HourlyRecord::new(8, 1), HourlyRecord::new(10, 12)]
        );
    }

    #[test]
    fn deserialized_records_are_sorted_and_merged() {
        let json = r#"[
            {"hour": 10, "total_plays": 5},
            {"hour": 8, "total_plays": 1},
            {"hour": 10, "total_plays": 7}
        ]"#;
        let series: HourlySeries = serde_json::from_str(json).unwrap();
        assert_eq!(series.plays_at(10), Some(12));
        assert_eq!(series.plays_at(8), Some(1));
        assert_eq!(
            serde_json::to_string(&series).unwrap(),
            r#"[{"hour":8,"total_plays":1},{"hour":10,"total_plays":12}]"#
        );
    }

    #[test]
    fn gaps_are_absent_not_zero() {
        let series = HourlySeries::from_pairs(&[(8, 10), (10, 30)]);
        assert_eq!(series.plays_at(9), None);
        assert_eq!(series.plays_at(10), Some(30));
        assert_eq!(series.plays_between(8, 10), 40);
        assert_eq!(series.segment(9, 9).len(), 0);
        assert_eq!(series.segment(10, 8).len(), 0);
    }

    #[test]
    fn within_band_leaves_source_intact() {
        let series = HourlySeries::from_pairs(&[(3, 1), (7, 2), (21, 3), (22, 4)]);
        let band = series.within(HourBand::new(7, 21));
        assert_eq!(band.len(), 2);
        assert_eq!(series.len(), 4);
        assert_eq!(band.total_plays(), 5);
    }
}
