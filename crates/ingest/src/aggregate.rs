//! Daily aggregation of snapshot history.
//!
//! The API returns many snapshots per day at irregular times. Charts want
//! one point per day, so:
//!
//! 1. each record is assigned the calendar day of its `update_time`
//! 2. records are grouped by day in an ordered map
//! 3. the record with the greatest `update_time` wins its day
//! 4. the winners are sorted by `update_time`
//! 5. the winners are pivoted into one series per [`Metric`](types::Metric)
//!
//! Day boundaries are UTC in [`aggregate`]. [`aggregate_in`] takes any
//! chrono timezone for callers that want another calendar.

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

use chrono::{DateTime, Datelike, NaiveDate, TimeZone, Utc};
use tracing::warn;
use types::{DailySeriesSet, EpochMillis, SnapshotRecord};

/// Aggregate records into per-day series, bucketing days in UTC.
pub fn aggregate(records: &[SnapshotRecord]) -> DailySeriesSet {
    aggregate_in(records, &Utc)
}

/// Aggregate records into per-day series, bucketing days in `tz`.
pub fn aggregate_in<Tz: TimeZone>(records: &[SnapshotRecord], tz: &Tz) -> DailySeriesSet {
    let mut latest: BTreeMap<NaiveDate, &SnapshotRecord> = BTreeMap::new();
    for record in records {
        let Some(day) = calendar_day(record.update_time, tz) else {
            warn!(
                update_time = record.update_time,
                "skipping snapshot with out-of-range timestamp"
            );
            continue;
        };
        match latest.entry(day) {
            Entry::Vacant(slot) => {
                slot.insert(record);
            }
            // Strictly greater: on a tie the first record seen stays.
            Entry::Occupied(mut slot) => {
                if record.update_time > slot.get().update_time {
                    slot.insert(record);
                }
            }
        }
    }

    let mut daily: Vec<(NaiveDate, &SnapshotRecord)> = latest.into_iter().collect();
    daily.sort_by_key(|(_, record)| record.update_time);

    let mut set = DailySeriesSet::new();
    for (day, record) in daily {
        set.push_day(&day_label(day), record);
    }
    set
}

/// Calendar day of an epoch-millis timestamp in `tz`.
///
/// `None` when the timestamp is outside chrono's representable range.
pub fn calendar_day<Tz: TimeZone>(update_time: EpochMillis, tz: &Tz) -> Option<NaiveDate> {
    DateTime::from_timestamp_millis(update_time).map(|utc| utc.with_timezone(tz).date_naive())
}

/// Chart label for a day: `M-d`, no zero padding.
pub fn day_label(day: NaiveDate) -> String {
    format!("{}-{}", day.month(), day.day())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;
    use types::Metric;

    /// 2020-01-31T00:00:00Z
    const JAN_31: EpochMillis = 1_580_428_800_000;
    const HOUR: EpochMillis = 3_600_000;
    const DAY: EpochMillis = 24 * HOUR;

    fn record(update_time: EpochMillis, confirmed: u64) -> SnapshotRecord {
        SnapshotRecord {
            dead_count: confirmed / 10,
            cured_count: confirmed / 5,
            confirmed_count: confirmed,
            suspected_count: confirmed * 2,
            serious_count: Some(confirmed / 2),
            update_time,
            region_name: None,
        }
    }

    #[test]
    fn test_one_point_per_distinct_day() {
        let records = vec![
            record(JAN_31 + HOUR, 10),
            record(JAN_31 + 5 * HOUR, 12),
            record(JAN_31 + DAY + HOUR, 20),
            record(JAN_31 + 2 * DAY + HOUR, 30),
            record(JAN_31 + 2 * DAY + 3 * HOUR, 31),
        ];
        let set = aggregate(&records);
        assert_eq!(set.len(), 3);
        for (_, series) in set.iter() {
            assert_eq!(series.len(), 3);
            assert_eq!(series.labels, vec!["1-31", "2-1", "2-2"]);
        }
        assert_eq!(set.get(Metric::Confirmed).values, vec![12, 20, 31]);
    }

    #[test]
    fn test_last_write_wins_within_day() {
        let base = JAN_31 + HOUR;
        let records = vec![record(base + 100, 5), record(base + 200, 9)];
        let set = aggregate(&records);
        assert_eq!(set.get(Metric::Confirmed).values, vec![9]);

        // Input order must not matter.
        let reversed = vec![record(base + 200, 9), record(base + 100, 5)];
        assert_eq!(aggregate(&reversed).get(Metric::Confirmed).values, vec![9]);
    }

    #[test]
    fn test_output_sorted_regardless_of_input_order() {
        let records = vec![
            record(JAN_31 + 2 * DAY, 30),
            record(JAN_31, 10),
            record(JAN_31 + DAY, 20),
        ];
        let set = aggregate(&records);
        assert_eq!(set.get(Metric::Confirmed).values, vec![10, 20, 30]);
        assert_eq!(set.get(Metric::Dead).labels, vec!["1-31", "2-1", "2-2"]);
    }

    #[test]
    fn test_missing_serious_maps_to_zero() {
        let mut early = record(JAN_31, 10);
        early.serious_count = None;
        let late = record(JAN_31 + DAY, 40);
        let set = aggregate(&[early, late]);
        assert_eq!(set.get(Metric::Serious).values, vec![0, 20]);
    }

    #[test]
    fn test_empty_input() {
        let set = aggregate(&[]);
        assert!(set.is_empty());
        for metric in Metric::ALL {
            assert!(set.get(metric).labels.is_empty());
            assert!(set.get(metric).values.is_empty());
        }
    }

    #[test]
    fn test_single_record() {
        let set = aggregate(&[record(JAN_31, 7)]);
        assert_eq!(set.len(), 1);
        assert_eq!(set.get(Metric::Confirmed).values, vec![7]);
    }

    #[test]
    fn test_same_label_in_different_years_stays_separate() {
        let next_year = JAN_31 + 366 * DAY; // 2020 is a leap year
        let set = aggregate(&[record(JAN_31, 1), record(next_year, 2)]);
        assert_eq!(set.get(Metric::Confirmed).labels, vec!["1-31", "1-31"]);
        assert_eq!(set.get(Metric::Confirmed).values, vec![1, 2]);
    }

    #[test]
    fn test_update_time_tie_keeps_one_record() {
        let set = aggregate(&[record(JAN_31, 5), record(JAN_31, 9)]);
        let values = &set.get(Metric::Confirmed).values;
        assert_eq!(values.len(), 1);
        assert!(values[0] == 5 || values[0] == 9);
    }

    #[test]
    fn test_timezone_moves_day_boundary() {
        let late_evening_utc = JAN_31 + 23 * HOUR + 30 * 60_000;
        let records = vec![record(late_evening_utc, 3)];
        assert_eq!(aggregate(&records).get(Metric::Dead).labels, vec!["1-31"]);

        let beijing = FixedOffset::east_opt(8 * 3600).unwrap();
        let shifted = aggregate_in(&records, &beijing);
        assert_eq!(shifted.get(Metric::Dead).labels, vec!["2-1"]);
    }

    #[test]
    fn test_out_of_range_timestamp_skipped() {
        let set = aggregate(&[record(i64::MAX, 1), record(JAN_31, 2)]);
        assert_eq!(set.get(Metric::Confirmed).values, vec![2]);
    }

    #[test]
    fn test_day_label_format() {
        let day = NaiveDate::from_ymd_opt(2020, 2, 7).unwrap();
        assert_eq!(day_label(day), "2-7");
    }
}
