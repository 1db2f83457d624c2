//! Descriptive statistics over the filtered trip table.
//!
//! Each group is computed independently from the same read-only slice of
//! trips and returned as a plain struct; rendering lives in
//! [`crate::report`].

pub mod duration;
pub mod station;
pub mod time;
pub mod users;
pub mod utility;

pub use duration::DurationStats;
pub use station::StationStats;
pub use time::TimeStats;
pub use users::{BirthYearStats, UserStats};

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Complete result set for one session iteration, written as JSON when
/// `--export` is given.
#[derive(Debug, Serialize)]
pub struct SessionSummary {
    pub generated_at: DateTime<Utc>,
    pub city: String,
    pub month: String,
    pub day: String,
    pub trip_count: usize,
    pub times: TimeStats,
    pub stations: StationStats,
    pub durations: DurationStats,
    pub users: UserStats,
}
