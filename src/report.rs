//! Rendering of statistics and raw rows, plus the optional JSON export.
//!
//! All user-facing output goes through this module; the stats structs stay
//! print-free so computation is testable without capturing a console.

use anyhow::{Context, Result};
use std::io::Write;
use std::time::Duration;
use tracing::info;

use crate::dataset::Trip;
use crate::stats::{DurationStats, SessionSummary, StationStats, TimeStats, UserStats};

const DIVIDER_WIDTH: usize = 40;

/// Writes the 40-dash section divider.
pub fn print_divider<W: Write>(output: &mut W) -> Result<()> {
    writeln!(output, "{}", "-".repeat(DIVIDER_WIDTH))?;
    Ok(())
}

/// Writes the elapsed-seconds line and a divider, closing a section.
pub fn print_elapsed<W: Write>(output: &mut W, elapsed: Duration) -> Result<()> {
    writeln!(output, "\nThis took {} seconds.", elapsed.as_secs_f64())?;
    print_divider(output)
}

pub fn print_time_stats<W: Write>(output: &mut W, city: &str, stats: &TimeStats) -> Result<()> {
    writeln!(output, "\nCalculating The Most Frequent Times of Travel...\n")?;

    if let Some(month) = &stats.popular_month {
        writeln!(
            output,
            "The most popular month for bike rental in {city} is {month}"
        )?;
    }
    if let Some(day) = &stats.popular_weekday {
        writeln!(
            output,
            "The most popular day for bike rental in {city} is {day}"
        )?;
    }
    if let Some(hour) = stats.popular_hour {
        writeln!(
            output,
            "The most popular hour for bike rental in {city} is {hour}:00 hrs"
        )?;
    }
    if stats.popular_month.is_none() {
        writeln!(output, "No trips match the current selection")?;
    }

    Ok(())
}

pub fn print_station_stats<W: Write>(
    output: &mut W,
    city: &str,
    stats: &StationStats,
) -> Result<()> {
    writeln!(output, "\nCalculating The Most Popular Stations and Trip...\n")?;

    if let Some(start) = &stats.popular_start {
        writeln!(output, "The most popular starting point in {city} is {start}")?;
    }
    if let Some(end) = &stats.popular_end {
        writeln!(output, "The most popular destination in {city} is {end}")?;
    }
    if let Some(trip) = &stats.popular_trip {
        writeln!(output, "The most popular trip in {city} is {trip}")?;
    }
    if stats.popular_trip.is_none() {
        writeln!(output, "No trips match the current selection")?;
    }

    Ok(())
}

pub fn print_duration_stats<W: Write>(output: &mut W, stats: &DurationStats) -> Result<()> {
    writeln!(output, "\nCalculating Trip Duration...\n")?;

    writeln!(
        output,
        "The total time of trips taken for the current selection is {} hours",
        stats.total_hours
    )?;
    match stats.mean_minutes {
        Some(mean) => writeln!(
            output,
            "The mean time of trips taken for the current selection is {mean} minutes"
        )?,
        None => writeln!(output, "No trips match the current selection")?,
    }

    Ok(())
}

pub fn print_user_stats<W: Write>(output: &mut W, stats: &UserStats) -> Result<()> {
    writeln!(output, "\nCalculating User Stats...\n")?;

    writeln!(output, "User Type Count\n")?;
    for (user_type, count) in &stats.user_types {
        writeln!(output, "{user_type}    {count}")?;
    }
    print_divider(output)?;

    writeln!(output, "User Gender Count\n")?;
    match &stats.genders {
        Some(genders) => {
            for (gender, count) in genders {
                writeln!(output, "{gender}    {count}")?;
            }
        }
        None => writeln!(output, "No gender data available")?,
    }
    print_divider(output)?;

    writeln!(output, "Birth Year Stats\n")?;
    match &stats.birth_years {
        Some(years) => {
            writeln!(
                output,
                "The most common birth year for the current selection is {}",
                years.most_common
            )?;
            writeln!(output, "Earliest birth year: {}", years.earliest)?;
            writeln!(output, "Latest birth year: {}", years.latest)?;
        }
        None => writeln!(output, "No birth year data available")?,
    }

    Ok(())
}

/// Pretty-prints a page of raw rows using Rust's debug format.
pub fn print_raw_rows<W: Write>(output: &mut W, trips: &[Trip]) -> Result<()> {
    for trip in trips {
        writeln!(output, "{trip:#?}")?;
    }
    print_divider(output)
}

/// Writes the session summary as pretty-printed JSON.
pub fn export_json(path: &str, summary: &SessionSummary) -> Result<()> {
    let json = serde_json::to_string_pretty(summary)?;
    std::fs::write(path, json).with_context(|| format!("writing summary to {path}"))?;
    info!(path, "Session summary exported");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::BirthYearStats;
    use chrono::Utc;
    use std::env;
    use std::fs;

    fn render<F>(f: F) -> String
    where
        F: FnOnce(&mut Vec<u8>) -> Result<()>,
    {
        let mut output = Vec::new();
        f(&mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_time_stats_sentences() {
        let stats = TimeStats {
            popular_month: Some("January".to_string()),
            popular_weekday: Some("Monday".to_string()),
            popular_hour: Some(9),
        };
        let text = render(|out| print_time_stats(out, "chicago", &stats));

        assert!(text.contains("The most popular month for bike rental in chicago is January"));
        assert!(text.contains("The most popular day for bike rental in chicago is Monday"));
        assert!(text.contains("is 9:00 hrs"));
    }

    #[test]
    fn test_empty_selection_renders_placeholder() {
        let stats = TimeStats {
            popular_month: None,
            popular_weekday: None,
            popular_hour: None,
        };
        let text = render(|out| print_time_stats(out, "chicago", &stats));

        assert!(text.contains("No trips match the current selection"));
    }

    #[test]
    fn test_user_stats_unavailable_sections() {
        let stats = UserStats {
            user_types: vec![("Subscriber".to_string(), 3)],
            genders: None,
            birth_years: None,
        };
        let text = render(|out| print_user_stats(out, &stats));

        assert!(text.contains("Subscriber    3"));
        assert!(text.contains("No gender data available"));
        assert!(text.contains("No birth year data available"));
    }

    #[test]
    fn test_user_stats_with_demographics() {
        let stats = UserStats {
            user_types: vec![("Subscriber".to_string(), 2), ("Customer".to_string(), 1)],
            genders: Some(vec![("Female".to_string(), 2), ("Male".to_string(), 1)]),
            birth_years: Some(BirthYearStats {
                most_common: 1992,
                earliest: 1961,
                latest: 1999,
            }),
        };
        let text = render(|out| print_user_stats(out, &stats));

        assert!(text.contains("Female    2"));
        assert!(text.contains("The most common birth year for the current selection is 1992"));
        assert!(text.contains("Earliest birth year: 1961"));
        assert!(text.contains("Latest birth year: 1999"));
    }

    #[test]
    fn test_export_json_writes_file() {
        let path = format!("{}/bikeshare_export_test.json", env::temp_dir().display());
        let _ = fs::remove_file(&path);

        let summary = SessionSummary {
            generated_at: Utc::now(),
            city: "chicago".to_string(),
            month: "january".to_string(),
            day: "all".to_string(),
            trip_count: 2,
            times: TimeStats {
                popular_month: Some("January".to_string()),
                popular_weekday: Some("Monday".to_string()),
                popular_hour: Some(9),
            },
            stations: StationStats {
                popular_start: Some("Canal St".to_string()),
                popular_end: Some("Clark St".to_string()),
                popular_trip: Some("Canal St to Clark St".to_string()),
            },
            durations: DurationStats {
                total_hours: 0.05,
                mean_minutes: Some(1.5),
            },
            users: UserStats {
                user_types: vec![("Subscriber".to_string(), 2)],
                genders: None,
                birth_years: None,
            },
        };

        export_json(&path, &summary).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("\"city\": \"chicago\""));
        assert!(content.contains("\"trip_count\": 2"));

        fs::remove_file(&path).unwrap();
    }
}
