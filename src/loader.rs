//! Loads a city dataset and applies the month/day filters.

use anyhow::{Context, Result, bail};
use chrono::NaiveDateTime;
use std::fs::File;
use std::path::Path;
use tracing::info;

use crate::dataset::{self, RawTrip, Trip};
use crate::filters::FilterSelection;

const START_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Loads the selected city's trips and retains rows matching the filters.
///
/// Calendar fields are derived from each row's start time before filtering,
/// so the result carries all original and derived columns. Filtering only
/// selects rows; values are never rewritten.
///
/// # Errors
///
/// Fails if the city has no registered dataset, the file cannot be opened,
/// or a row cannot be deserialized or its start time parsed. There is no
/// retry or recovery for a bad dataset.
pub fn load_trips(data_dir: &Path, selection: &FilterSelection) -> Result<Vec<Trip>> {
    let Some(path) = dataset::csv_path(data_dir, &selection.city) else {
        bail!("no dataset registered for city {:?}", selection.city);
    };

    let file =
        File::open(&path).with_context(|| format!("opening dataset {}", path.display()))?;
    let mut rdr = csv::Reader::from_reader(file);

    let mut trips = Vec::new();
    let mut total = 0usize;

    for result in rdr.deserialize() {
        let raw: RawTrip = result.with_context(|| format!("reading {}", path.display()))?;
        total += 1;

        let start_time = NaiveDateTime::parse_from_str(&raw.start_time, START_TIME_FORMAT)
            .with_context(|| format!("parsing start time {:?}", raw.start_time))?;
        let trip = Trip::from_raw(raw, start_time);

        if selection.month.matches(trip.month) && selection.day.matches(&trip.weekday) {
            trips.push(trip);
        }
    }

    info!(
        city = %selection.city,
        total,
        retained = trips.len(),
        "Dataset loaded"
    );

    Ok(trips)
}
