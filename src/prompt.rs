//! Validated interactive prompts.
//!
//! Each prompt is a function over an injected reader/writer pair, so the
//! loops can be exercised in tests without a terminal. Invalid answers are
//! recovered by re-prompting; they never escalate past this module.

use anyhow::{Context, Result, bail};
use std::io::{BufRead, Write};

use crate::dataset;
use crate::filters::{DAYS, DayFilter, FilterSelection, MONTHS, MonthFilter};

/// Repeats `question` until the trimmed, lowercased answer appears in
/// `allowed`, then echoes and returns it.
///
/// # Errors
///
/// Fails on I/O errors or end of input.
pub fn prompt_until_valid<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    question: &str,
    allowed: &[&str],
) -> Result<String> {
    loop {
        let answer = read_answer(input, output, question)?;
        if allowed.contains(&answer.as_str()) {
            writeln!(output, "You have selected, {answer}")?;
            return Ok(answer);
        }
        writeln!(output, "The answer {answer:?} is not valid. Please try again")?;
    }
}

/// Asks a yes/no question until answered; `y` counts as yes, `n` as no.
pub fn prompt_yes_no<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    question: &str,
) -> Result<bool> {
    loop {
        match read_answer(input, output, question)?.as_str() {
            "yes" | "y" => return Ok(true),
            "no" | "n" => return Ok(false),
            _ => writeln!(output, "Please answer yes or no")?,
        }
    }
}

/// Gathers the validated (city, month, day) triple for one session.
pub fn get_filters<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> Result<FilterSelection> {
    let cities = dataset::city_names();
    let city = prompt_until_valid(
        input,
        output,
        "Please enter your city of choice. Select from Chicago, New York City or Washington:",
        &cities,
    )?;

    let mut month_choices = vec!["all"];
    month_choices.extend_from_slice(MONTHS);
    let month_answer = prompt_until_valid(
        input,
        output,
        "Please select month (all, january, february, ... , june):",
        &month_choices,
    )?;
    let month = MonthFilter::parse(&month_answer).context("month answer not in allow-list")?;

    let mut day_choices = vec!["all"];
    day_choices.extend_from_slice(DAYS);
    let day_answer = prompt_until_valid(
        input,
        output,
        "Please select day (all, monday, tuesday, ... , sunday):",
        &day_choices,
    )?;
    let day = DayFilter::parse(&day_answer).context("day answer not in allow-list")?;

    Ok(FilterSelection { city, month, day })
}

fn read_answer<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    question: &str,
) -> Result<String> {
    write!(output, "{question} ")?;
    output.flush()?;

    let mut line = String::new();
    let read = input.read_line(&mut line).context("reading answer")?;
    if read == 0 {
        bail!("input closed before a valid answer was given");
    }

    Ok(line.trim().to_lowercase())
}
