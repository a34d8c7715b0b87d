//! Day bucketing for forecasts.
//!
//! The provider returns a flat list of samples at a fixed cadence (3 hours
//! for OpenWeatherMap). For display they are grouped by calendar day and
//! thinned out: the first [`MAX_DAYS`] days, the first
//! [`MAX_SAMPLES_PER_DAY`] samples of each.

use crate::models::ForecastSample;
use chrono::{Local, NaiveDate, TimeZone};

/// Number of calendar days kept.
pub const MAX_DAYS: usize = 5;

/// Number of samples kept per day.
pub const MAX_SAMPLES_PER_DAY: usize = 3;

/// Samples falling on one calendar day, in input order.
#[derive(Debug, Clone, PartialEq)]
pub struct DailyBucket {
    /// The calendar day.
    pub day: NaiveDate,
    /// Samples on that day.
    pub samples: Vec<ForecastSample>,
}

/// Bucket samples by day of the server's local calendar.
pub fn bucket_by_day(samples: &[ForecastSample]) -> Vec<DailyBucket> {
    bucket_by_day_in(samples, &Local)
}

/// Bucket samples by day of the calendar of `tz`.
///
/// Buckets come out in the order their day is first seen. Input order is
/// trusted, not re-sorted.
pub fn bucket_by_day_in<Tz: TimeZone>(samples: &[ForecastSample], tz: &Tz) -> Vec<DailyBucket> {
    let mut buckets: Vec<DailyBucket> = Vec::new();

    for sample in samples {
        let day = sample.timestamp.with_timezone(tz).date_naive();

        match buckets.iter_mut().find(|b| b.day == day) {
            Some(bucket) => bucket.samples.push(sample.clone()),
            None => buckets.push(DailyBucket {
                day,
                samples: vec![sample.clone()],
            }),
        }
    }

    buckets.truncate(MAX_DAYS);
    for bucket in &mut buckets {
        bucket.samples.truncate(MAX_SAMPLES_PER_DAY);
    }
    buckets
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Duration, FixedOffset, Utc};

    fn at(day: u32, hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, day, hour, 0, 0).unwrap()
    }

    fn sample(ts: DateTime<Utc>, temp: f64) -> ForecastSample {
        ForecastSample::new(ts, temp, "clear sky")
    }

    /// Eight 3-hourly samples per day for `days` days starting Oct 1.
    fn three_hourly(days: u32) -> Vec<ForecastSample> {
        (0..days * 8)
            .map(|i| sample(at(1, 0) + Duration::hours(3 * i as i64), i as f64))
            .collect()
    }

    #[test]
    fn test_empty_input() {
        assert!(bucket_by_day_in(&[], &Utc).is_empty());
        assert!(bucket_by_day(&[]).is_empty());
    }

    #[test]
    fn test_single_day() {
        let samples = vec![sample(at(3, 9), 1.0), sample(at(3, 12), 2.0)];
        let buckets = bucket_by_day_in(&samples, &Utc);

        assert_eq!(buckets.len(), 1);
        assert_eq!(buckets[0].day, NaiveDate::from_ymd_opt(2026, 10, 3).unwrap());
        assert_eq!(buckets[0].samples, samples);
    }

    #[test]
    fn test_two_days_keep_order_and_cap() {
        let samples = vec![
            sample(at(4, 0), 1.0),
            sample(at(4, 3), 2.0),
            sample(at(4, 6), 3.0),
            sample(at(4, 9), 4.0),
            sample(at(5, 0), 5.0),
            sample(at(5, 3), 6.0),
        ];
        let buckets = bucket_by_day_in(&samples, &Utc);

        assert_eq!(buckets.len(), 2);
        assert_eq!(buckets[0].day, NaiveDate::from_ymd_opt(2026, 10, 4).unwrap());
        assert_eq!(buckets[1].day, NaiveDate::from_ymd_opt(2026, 10, 5).unwrap());
        assert_eq!(buckets[0].samples.len(), 3);
        assert_eq!(buckets[1].samples.len(), 2);

        let temps: Vec<f64> = buckets[0].samples.iter().map(|s| s.temperature).collect();
        assert_eq!(temps, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_seven_days_keep_first_five() {
        let buckets = bucket_by_day_in(&three_hourly(7), &Utc);

        assert_eq!(buckets.len(), MAX_DAYS);
        let days: Vec<u32> = buckets
            .iter()
            .map(|b| chrono::Datelike::day(&b.day))
            .collect();
        assert_eq!(days, vec![1, 2, 3, 4, 5]);
        assert!(buckets.iter().all(|b| b.samples.len() == MAX_SAMPLES_PER_DAY));
    }

    #[test]
    fn test_day_boundary_follows_timezone() {
        // 22:00 UTC on Oct 1 is already Oct 2 at UTC+3.
        let samples = vec![sample(at(1, 18), 1.0), sample(at(1, 22), 2.0)];
        let plus_three = FixedOffset::east_opt(3 * 3600).unwrap();

        assert_eq!(bucket_by_day_in(&samples, &Utc).len(), 1);

        let shifted = bucket_by_day_in(&samples, &plus_three);
        assert_eq!(shifted.len(), 2);
        assert_eq!(shifted[1].day, NaiveDate::from_ymd_opt(2026, 10, 2).unwrap());
    }

    #[test]
    fn test_input_order_is_trusted() {
        let samples = vec![
            sample(at(6, 9), 1.0),
            sample(at(5, 9), 2.0),
            sample(at(6, 12), 3.0),
        ];
        let buckets = bucket_by_day_in(&samples, &Utc);

        assert_eq!(buckets.len(), 2);
        assert_eq!(buckets[0].day, NaiveDate::from_ymd_opt(2026, 10, 6).unwrap());
        assert_eq!(buckets[0].samples.len(), 2);
    }
}
