use chrono::Month;
use serde::Serialize;

use crate::dataset::Trip;
use crate::stats::utility::mode;

/// Most frequent travel times over the filtered table.
///
/// Fields are `None` when the table is empty.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct TimeStats {
    pub popular_month: Option<String>,
    pub popular_weekday: Option<String>,
    pub popular_hour: Option<u32>,
}

impl TimeStats {
    pub fn from_trips(trips: &[Trip]) -> Self {
        Self {
            popular_month: mode(trips.iter().map(|t| t.month)).and_then(month_name),
            popular_weekday: mode(trips.iter().map(|t| t.weekday.as_str()))
                .map(str::to_string),
            popular_hour: mode(trips.iter().map(|t| t.hour)),
        }
    }
}

/// Calendar name for a 1-based month number.
fn month_name(month: u32) -> Option<String> {
    let month = u8::try_from(month).ok()?;
    Month::try_from(month).ok().map(|m| m.name().to_string())
}
