//! CLI entry point for the bikeshare explorer.
//!
//! Gathers the interactive city/month/day selection, loads and filters the
//! chosen dataset, renders each statistics group, and offers paginated
//! raw-data viewing until the user declines to restart.

use anyhow::Result;
use bikeshare_explorer::dataset::Trip;
use bikeshare_explorer::filters::FilterSelection;
use bikeshare_explorer::loader::load_trips;
use bikeshare_explorer::stats::{
    DurationStats, SessionSummary, StationStats, TimeStats, UserStats,
};
use bikeshare_explorer::{pager, prompt, report};
use chrono::Utc;
use clap::Parser;
use std::ffi::OsStr;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::debug;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "bikeshare_explorer")]
#[command(about = "Explore US bikeshare trip data", long_about = None)]
struct Cli {
    /// Directory containing the city CSV files
    #[arg(short, long, default_value = "data")]
    data_dir: PathBuf,

    /// Write each session's statistics as pretty-printed JSON to this path
    #[arg(long)]
    export: Option<String>,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    // Logging setup: colored stderr + JSON rolling log file
    let log_file_path = std::env::var("LOG_FILE_PATH")
        .unwrap_or_else(|_| "logs/bikeshare_explorer.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("bikeshare_explorer.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("warn".parse().unwrap()));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse().unwrap()));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();

    loop {
        writeln!(output, "Hello! Let's explore some US bikeshare data!")?;

        let selection = prompt::get_filters(&mut input, &mut output)?;
        report::print_divider(&mut output)?;

        let trips = load_trips(&cli.data_dir, &selection)?;

        let summary = run_session(&mut output, &trips, &selection)?;

        if let Some(path) = &cli.export {
            report::export_json(path, &summary)?;
        }

        browse_raw_data(&mut input, &mut output, &trips)?;

        let restart = prompt::prompt_yes_no(
            &mut input,
            &mut output,
            "\nWould you like to restart? Enter yes or no.",
        )?;
        if !restart {
            break;
        }
    }

    Ok(())
}

/// Computes and renders the four statistics groups, returning the summary.
fn run_session<W: Write>(
    output: &mut W,
    trips: &[Trip],
    selection: &FilterSelection,
) -> Result<SessionSummary> {
    let started = Instant::now();
    let times = TimeStats::from_trips(trips);
    report::print_time_stats(output, &selection.city, &times)?;
    report::print_elapsed(output, started.elapsed())?;

    let started = Instant::now();
    let stations = StationStats::from_trips(trips);
    report::print_station_stats(output, &selection.city, &stations)?;
    report::print_elapsed(output, started.elapsed())?;

    let started = Instant::now();
    let durations = DurationStats::from_trips(trips);
    report::print_duration_stats(output, &durations)?;
    report::print_elapsed(output, started.elapsed())?;

    let started = Instant::now();
    let users = UserStats::from_trips(trips);
    report::print_user_stats(output, &users)?;
    report::print_elapsed(output, started.elapsed())?;

    Ok(SessionSummary {
        generated_at: Utc::now(),
        city: selection.city.clone(),
        month: selection.month.label().to_string(),
        day: selection.day.label().to_string(),
        trip_count: trips.len(),
        times,
        stations,
        durations,
        users,
    })
}

/// Pages through raw rows five at a time while the user keeps answering yes.
fn browse_raw_data<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    trips: &[Trip],
) -> Result<()> {
    let mut wants_more = prompt::prompt_yes_no(
        input,
        output,
        "Would you like to see the raw data? Yes or No:",
    )?;

    let mut offset = 0;
    while wants_more && offset < trips.len() {
        let (page, next_offset) = pager::next_page(trips, offset);
        report::print_raw_rows(output, page)?;
        debug!(offset, rows = page.len(), "Raw data page shown");
        offset = next_offset;

        if offset >= trips.len() {
            writeln!(output, "End of data reached")?;
            break;
        }

        wants_more = prompt::prompt_yes_no(
            input,
            output,
            "Would you like to see 5 more lines of raw data? Yes or No:",
        )?;
    }

    Ok(())
}
