use serde::Serialize;

use crate::dataset::Trip;

/// Total and mean trip duration over the filtered table.
///
/// Durations pass through as recorded; negative or zero values in the
/// source are preserved, not corrected.
#[derive(Debug, Serialize, PartialEq)]
pub struct DurationStats {
    /// Sum of all durations, converted from seconds to hours.
    pub total_hours: f64,
    /// Mean duration converted from seconds to minutes; `None` for an
    /// empty table.
    pub mean_minutes: Option<f64>,
}

impl DurationStats {
    pub fn from_trips(trips: &[Trip]) -> Self {
        let total_secs: f64 = trips.iter().map(|t| t.duration_secs).sum();
        let mean_minutes = if trips.is_empty() {
            None
        } else {
            Some(total_secs / trips.len() as f64 / 60.0)
        };

        Self {
            total_hours: total_secs / 3600.0,
            mean_minutes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use crate::dataset::{RawTrip, Trip};

    fn trip(duration_secs: f64) -> Trip {
        let raw = RawTrip {
            start_time: String::new(),
            end_time: None,
            duration_secs,
            start_station: "A".to_string(),
            end_station: "B".to_string(),
            user_type: None,
            gender: None,
            birth_year: None,
        };
        let start = NaiveDate::from_ymd_opt(2017, 1, 2)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap();
        Trip::from_raw(raw, start)
    }

    #[test]
    fn test_hour_long_trips() {
        let trips: Vec<Trip> = (0..4).map(|_| trip(3600.0)).collect();
        let stats = DurationStats::from_trips(&trips);

        assert_eq!(stats.total_hours, 4.0);
        assert_eq!(stats.mean_minutes, Some(60.0));
    }

    #[test]
    fn test_mixed_durations() {
        let trips = vec![trip(60.0), trip(120.0)];
        let stats = DurationStats::from_trips(&trips);

        assert_eq!(stats.total_hours, 180.0 / 3600.0);
        assert_eq!(stats.mean_minutes, Some(1.5));
    }

    #[test]
    fn test_negative_durations_pass_through() {
        let trips = vec![trip(-60.0), trip(60.0)];
        let stats = DurationStats::from_trips(&trips);

        assert_eq!(stats.total_hours, 0.0);
        assert_eq!(stats.mean_minutes, Some(0.0));
    }

    #[test]
    fn test_empty_table() {
        let stats = DurationStats::from_trips(&[]);

        assert_eq!(stats.total_hours, 0.0);
        assert_eq!(stats.mean_minutes, None);
    }
}
