use std::collections::BTreeMap;

use crate::models::{HourlyRecord, HourlySeries, PlayEvent};

/// Sums plays per hour. Events without a readable hour are skipped.
pub fn hourly_totals<'a>(events: impl IntoIterator<Item = &'a PlayEvent>) -> HourlySeries {
    events
        .into_iter()
        .filter_map(|e| e.hour.map(|h| HourlyRecord::new(h.value(), e.plays)))
        .collect()
}

/// Sums plays per `(key, hour)`. Keys come back sorted; `key_of` returning None
/// leaves the event out.
pub fn hourly_totals_by<'a, F>(
    events: impl IntoIterator<Item = &'a PlayEvent>,
    key_of: F,
) -> BTreeMap<String, HourlySeries>
where
    F: Fn(&PlayEvent) -> Option<String>,
{
    let mut buckets: BTreeMap<String, Vec<HourlyRecord>> = BTreeMap::new();
    for event in events {
        let Some(hour) = event.hour else {
            continue;
        };
        let Some(key) = key_of(event) else {
            continue;
        };
        buckets
            .entry(key)
            .or_default()
            .push(HourlyRecord::new(hour.value(), event.plays));
    }

    buckets
        .into_iter()
        .map(|(key, records)| (key, HourlySeries::from_records(records)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{HourOfDay, SystemType};

    fn event(airport: &str, hour: Option<u8>, plays: u64) -> PlayEvent {
        PlayEvent {
            system_type: SystemType::Airport,
            hour: hour.and_then(HourOfDay::new),
            plays,
            display: String::new(),
            network_code: format!("{}_NET", airport),
            market_code: String::new(),
            airport_group: airport.to_string(),
            network_name: String::new(),
            airport: Some(airport.to_string()),
            market: String::new(),
        }
    }

    #[test]
    fn totals_sum_per_hour() {
        let events = vec![
            event("ATL", Some(9), 10),
            event("ORD", Some(9), 5),
            event("ATL", Some(8), 1),
            event("ATL", None, 1000),
        ];
        let series = hourly_totals(&events);
        assert_eq!(series.records(), &[HourlyRecord::new(8, 1), HourlyRecord::new(9, 15)]);
    }

    #[test]
    fn totals_by_key_are_independent() {
        let events = vec![
            event("ORD", Some(9), 5),
            event("ATL", Some(9), 10),
            event("ATL", Some(9), 2),
        ];
        let by_airport = hourly_totals_by(&events, |e| e.airport.clone());
        let keys: Vec<&String> = by_airport.keys().collect();
        assert_eq!(keys, vec!["ATL", "ORD"]);
        assert_eq!(by_airport["ATL"].plays_at(9), Some(12));
        assert_eq!(by_airport["ORD"].plays_at(9), Some(5));
    }
}
