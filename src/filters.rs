//! Month and day filter selection.

/// Month names accepted by the month filter, in calendar order.
///
/// The city datasets cover January through June only; the allow-list is
/// deliberately not extended to the full year.
pub static MONTHS: &[&str] = &["january", "february", "march", "april", "may", "june"];

/// Weekday names accepted by the day filter.
pub static DAYS: &[&str] = &[
    "sunday",
    "monday",
    "tuesday",
    "wednesday",
    "thursday",
    "friday",
    "saturday",
];

/// Month filter: everything, or a single month by 1-based calendar number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonthFilter {
    All,
    Month(u32),
}

impl MonthFilter {
    /// Parses a validated answer ("all" or a month name) into a filter.
    pub fn parse(answer: &str) -> Option<Self> {
        if answer == "all" {
            return Some(Self::All);
        }
        MONTHS
            .iter()
            .position(|m| *m == answer)
            .map(|index| Self::Month(index as u32 + 1))
    }

    /// Whether a trip with the given derived month number passes the filter.
    pub fn matches(&self, month: u32) -> bool {
        match self {
            Self::All => true,
            Self::Month(m) => *m == month,
        }
    }

    /// The answer this filter was parsed from.
    pub fn label(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Month(m) => (*m as usize)
                .checked_sub(1)
                .and_then(|i| MONTHS.get(i))
                .copied()
                .unwrap_or("unknown"),
        }
    }
}

/// Day filter: everything, or a single weekday by title-case name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DayFilter {
    All,
    Day(String),
}

impl DayFilter {
    /// Parses a validated answer ("all" or a weekday name) into a filter.
    pub fn parse(answer: &str) -> Option<Self> {
        if answer == "all" {
            return Some(Self::All);
        }
        DAYS.iter()
            .find(|d| **d == answer)
            .map(|d| Self::Day(title_case(d)))
    }

    /// Whether a trip with the given derived weekday name passes the filter.
    pub fn matches(&self, weekday: &str) -> bool {
        match self {
            Self::All => true,
            Self::Day(d) => d == weekday,
        }
    }

    /// The answer this filter was parsed from, title-cased for weekdays.
    pub fn label(&self) -> &str {
        match self {
            Self::All => "all",
            Self::Day(d) => d,
        }
    }
}

/// The validated (city, month, day) triple governing which rows are retained.
///
/// Produced once per session iteration; invalid values are rejected at the
/// prompt boundary and never reach the loader.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterSelection {
    pub city: String,
    pub month: MonthFilter,
    pub day: DayFilter,
}

fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
