use serde::Serialize;

use crate::dataset::Trip;
use crate::stats::utility::{mode, value_counts};

/// User demographics over the filtered table.
///
/// Gender and birth-year statistics are `None` when the dataset carries no
/// such column (Washington). Availability is detected from the loaded rows
/// rather than the city name, so an absent column is a first-class
/// "unavailable" result, distinct from an empty one.
#[derive(Debug, Serialize, PartialEq)]
pub struct UserStats {
    /// Distinct user types with counts, ordered by descending frequency.
    pub user_types: Vec<(String, usize)>,
    pub genders: Option<Vec<(String, usize)>>,
    pub birth_years: Option<BirthYearStats>,
}

/// Mode, minimum, and maximum over the integral birth years.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct BirthYearStats {
    pub most_common: i32,
    pub earliest: i32,
    pub latest: i32,
}

impl UserStats {
    pub fn from_trips(trips: &[Trip]) -> Self {
        let user_types = value_counts(trips.iter().filter_map(|t| t.user_type.clone()));

        let genders = if trips.iter().any(|t| t.gender.is_some()) {
            Some(value_counts(trips.iter().filter_map(|t| t.gender.clone())))
        } else {
            None
        };

        // Missing and non-integral values are excluded, mirroring the
        // tolerant numeric coercion of the source data.
        let years: Vec<i32> = trips
            .iter()
            .filter_map(|t| t.birth_year)
            .filter(|y| y.fract() == 0.0)
            .map(|y| y as i32)
            .collect();

        let birth_years = match (
            mode(years.iter().copied()),
            years.iter().min(),
            years.iter().max(),
        ) {
            (Some(most_common), Some(&earliest), Some(&latest)) => Some(BirthYearStats {
                most_common,
                earliest,
                latest,
            }),
            _ => None,
        };

        Self {
            user_types,
            genders,
            birth_years,
        }
    }
}
