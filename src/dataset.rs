//! City dataset registry and trip records.

use chrono::{Datelike, NaiveDateTime, Timelike};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Known city datasets: lowercase city name to CSV file name.
pub static CITY_DATA: &[(&str, &str)] = &[
    ("chicago", "chicago.csv"),
    ("new york city", "new_york_city.csv"),
    ("washington", "washington.csv"),
];

/// Lowercase names of all known cities, in registry order.
pub fn city_names() -> Vec<&'static str> {
    CITY_DATA.iter().map(|(name, _)| *name).collect()
}

/// Returns the CSV path for `city` under `data_dir`, if the city is known.
pub fn csv_path(data_dir: &Path, city: &str) -> Option<PathBuf> {
    CITY_DATA
        .iter()
        .find(|(name, _)| *name == city)
        .map(|(_, file)| data_dir.join(file))
}

/// A single row deserialized from a city CSV file.
///
/// The Washington dataset has no `Gender` or `Birth Year` columns, so both
/// fall back to `None` when the column is missing entirely. `User Type` can
/// be blank in any dataset.
#[derive(Debug, Deserialize)]
pub struct RawTrip {
    #[serde(rename = "Start Time")]
    pub start_time: String,
    #[serde(rename = "End Time", default)]
    pub end_time: Option<String>,
    #[serde(rename = "Trip Duration")]
    pub duration_secs: f64,
    #[serde(rename = "Start Station")]
    pub start_station: String,
    #[serde(rename = "End Station")]
    pub end_station: String,
    #[serde(rename = "User Type", default)]
    pub user_type: Option<String>,
    #[serde(rename = "Gender", default)]
    pub gender: Option<String>,
    #[serde(rename = "Birth Year", default)]
    pub birth_year: Option<f64>,
}

/// A trip record plus calendar fields derived from its parsed start time.
///
/// Derived fields are computed once at load time and never mutated after.
#[derive(Debug, Clone)]
pub struct Trip {
    pub start_time: NaiveDateTime,
    pub end_time: Option<String>,
    pub duration_secs: f64,
    pub start_station: String,
    pub end_station: String,
    pub user_type: Option<String>,
    pub gender: Option<String>,
    pub birth_year: Option<f64>,

    /// Calendar month of the start time, 1-12.
    pub month: u32,
    /// Full weekday name of the start time, e.g. "Monday".
    pub weekday: String,
    /// Day of month of the start time, 1-31.
    pub day_of_month: u32,
    /// Hour of the start time, 0-23.
    pub hour: u32,
}

impl Trip {
    /// Builds a trip from a raw row and its already-parsed start time.
    pub fn from_raw(raw: RawTrip, start_time: NaiveDateTime) -> Self {
        Self {
            month: start_time.month(),
            weekday: start_time.format("%A").to_string(),
            day_of_month: start_time.day(),
            hour: start_time.hour(),
            start_time,
            end_time: raw.end_time,
            duration_secs: raw.duration_secs,
            start_station: raw.start_station,
            end_station: raw.end_station,
            user_type: raw.user_type,
            gender: raw.gender,
            birth_year: raw.birth_year,
        }
    }
}
