//! Interval line parser.
//!
//! A line is two fixed-width clock times with no separator, e.g.
//! `10:0011:15` for a break from 10:00 to 11:15.

use crate::config::Config;
use crate::time_range::{Marker, TimeRange};
use chrono::{NaiveTime, Timelike};
use thiserror::Error;

/// Why a single interval line was rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Invalid format '{input}': {reason}")]
    InvalidFormat { input: String, reason: String },

    #[error(
        "Invalid ordering: start ({}) {} end ({})",
        clock(.start),
        ordering_symbol(.strict),
        clock(.end)
    )]
    InvalidOrdering {
        start: NaiveTime,
        end: NaiveTime,
        strict: bool,
    },
}

pub type Result<T> = std::result::Result<T, ParseError>;

/// `HH:MM`, with seconds only when they are set.
fn clock(time: &NaiveTime) -> String {
    if time.second() == 0 {
        time.format("%H:%M").to_string()
    } else {
        time.format("%H:%M:%S").to_string()
    }
}

fn ordering_symbol(strict: &bool) -> &'static str {
    if *strict {
        ">="
    } else {
        ">"
    }
}

/// Parse one interval line into its start and end markers.
///
/// Pure function of the text and the config: checks the length, parses
/// both halves with the configured time pattern, then checks the order.
pub fn parse_interval(text: &str, config: &Config) -> Result<(Marker, Marker)> {
    parse_range(text, config).map(|range| range.markers())
}

/// Parse one interval line into a [`TimeRange`].
pub fn parse_range(text: &str, config: &Config) -> Result<TimeRange> {
    let expected = config.expected_len();
    let len = text.chars().count();
    if len != expected {
        return Err(invalid_format(
            text,
            format!("expected {} characters, got {}", expected, len),
        ));
    }

    // Char-indexed split so a stray multi-byte character cannot land the
    // midpoint inside a code point.
    let mid = text
        .char_indices()
        .nth(expected / 2)
        .map(|(idx, _)| idx)
        .unwrap_or(text.len());
    let (start_text, end_text) = text.split_at(mid);

    let start = parse_time(text, start_text, config, "start")?;
    let end = parse_time(text, end_text, config, "end")?;

    let strict = !config.allows_equal_endpoints();
    let ordered = if strict { start < end } else { start <= end };
    if !ordered {
        return Err(ParseError::InvalidOrdering { start, end, strict });
    }

    Ok(TimeRange::new(start, end))
}

fn parse_time(
    line: &str,
    half: &str,
    config: &Config,
    field_name: &str,
) -> Result<NaiveTime> {
    NaiveTime::parse_from_str(half, config.time_format()).map_err(|e| {
        invalid_format(
            line,
            format!(
                "invalid {} time '{}' for pattern '{}' ({})",
                field_name,
                half,
                config.time_format(),
                e
            ),
        )
    })
}

fn invalid_format(input: &str, reason: String) -> ParseError {
    ParseError::InvalidFormat {
        input: input.to_string(),
        reason,
    }
}
