use serde::Serialize;

use crate::dataset::Trip;
use crate::stats::utility::mode;

/// Most popular start station, end station, and ordered trip pair.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct StationStats {
    pub popular_start: Option<String>,
    pub popular_end: Option<String>,
    /// Mode of the per-row `"{start} to {end}"` pair, not the independent
    /// start/end modes combined.
    pub popular_trip: Option<String>,
}

impl StationStats {
    pub fn from_trips(trips: &[Trip]) -> Self {
        Self {
            popular_start: mode(trips.iter().map(|t| t.start_station.as_str()))
                .map(str::to_string),
            popular_end: mode(trips.iter().map(|t| t.end_station.as_str()))
                .map(str::to_string),
            popular_trip: mode(
                trips
                    .iter()
                    .map(|t| format!("{} to {}", t.start_station, t.end_station)),
            ),
        }
    }
}
