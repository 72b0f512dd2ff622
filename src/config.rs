//! Runtime configuration for interval parsing and loading.
//!
//! A [`Config`] is built once at startup and handed to the parser and the
//! engine by reference. Nothing here is global, so tests can run side by
//! side with different settings.

use crate::error::{BreakError, Result};
use chrono::NaiveTime;
use std::fmt::Write as _;

/// Default time pattern: 24-hour clock, `HH:mm`.
pub const DEFAULT_TIME_FORMAT: &str = "%H:%M";

/// Default combined length of the start and end text, e.g. `10:0011:15`.
pub const DEFAULT_EXPECTED_LEN: usize = 10;

/// Parsing and loading policy.
///
/// # Example
///
/// ```
/// use breaktime::config::Config;
///
/// let config = Config::default()
///     .with_time_format("%I:%M%p")
///     .unwrap()
///     .with_all_or_nothing(true);
///
/// // "09:00AM10:30AM" is 14 characters: two 7-character halves.
/// assert_eq!(config.expected_len(), 14);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    time_format: String,
    expected_len: usize,
    allow_equal_endpoints: bool,
    all_or_nothing: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            time_format: DEFAULT_TIME_FORMAT.to_string(),
            expected_len: DEFAULT_EXPECTED_LEN,
            allow_equal_endpoints: true,
            all_or_nothing: false,
        }
    }
}

impl Config {
    /// Use a different strftime pattern for both halves of a line.
    ///
    /// The expected line length is re-derived as twice the rendered width of
    /// a time in this pattern; call [`Config::with_expected_len`] afterwards
    /// to override it.
    pub fn with_time_format(mut self, format: &str) -> Result<Self> {
        let width = rendered_width(format)?;
        self.time_format = format.to_string();
        self.expected_len = width * 2;
        Ok(self)
    }

    /// Override the required length of a whole interval line.
    pub fn with_expected_len(mut self, len: usize) -> Result<Self> {
        if len == 0 || len % 2 != 0 {
            return Err(BreakError::InvalidConfig(format!(
                "line length must be a positive even number, got {}",
                len
            )));
        }
        self.expected_len = len;
        Ok(self)
    }

    /// Whether a zero-length break (start == end) is accepted.
    pub fn with_equal_endpoints(mut self, allow: bool) -> Self {
        self.allow_equal_endpoints = allow;
        self
    }

    /// Whether one bad line rejects a whole bulk load.
    pub fn with_all_or_nothing(mut self, enabled: bool) -> Self {
        self.all_or_nothing = enabled;
        self
    }

    #[inline]
    pub fn time_format(&self) -> &str {
        &self.time_format
    }

    #[inline]
    pub fn expected_len(&self) -> usize {
        self.expected_len
    }

    #[inline]
    pub fn allows_equal_endpoints(&self) -> bool {
        self.allow_equal_endpoints
    }

    #[inline]
    pub fn is_all_or_nothing(&self) -> bool {
        self.all_or_nothing
    }

    /// Render a time with the configured pattern.
    ///
    /// The pattern was validated when the config was built, so rendering a
    /// time-of-day cannot fail.
    pub fn format_time(&self, time: NaiveTime) -> String {
        time.format(&self.time_format).to_string()
    }
}

/// Times rendered when validating a pattern. Together they cover one- and
/// two-digit fields, both halves of the day and a non-zero second.
const SAMPLE_TIMES: [(u32, u32, u32); 4] = [(0, 0, 0), (9, 9, 0), (12, 0, 0), (23, 59, 59)];

/// Width in characters of a time rendered with `format`.
///
/// Rejects a pattern unless it renders a bare time of day, parses each
/// rendering back to a time, and renders every sample at the same width.
fn rendered_width(format: &str) -> Result<usize> {
    let mut width = None;

    for (h, m, s) in SAMPLE_TIMES {
        let sample = NaiveTime::from_hms_opt(h, m, s).unwrap_or(NaiveTime::MIN);
        let mut rendered = String::new();
        write!(rendered, "{}", sample.format(format)).map_err(|_| {
            BreakError::InvalidConfig(format!("'{}' cannot render a time of day", format))
        })?;

        if rendered.is_empty() {
            return Err(BreakError::InvalidConfig(format!(
                "'{}' renders an empty string",
                format
            )));
        }

        if NaiveTime::parse_from_str(&rendered, format).is_err() {
            return Err(BreakError::InvalidConfig(format!(
                "'{}' cannot parse back the times it renders",
                format
            )));
        }

        let len = rendered.chars().count();
        match width {
            None => width = Some(len),
            Some(w) if w != len => {
                return Err(BreakError::InvalidConfig(format!(
                    "'{}' is not fixed-width ({} and {} characters)",
                    format, w, len
                )));
            }
            Some(_) => {}
        }
    }

    width.ok_or_else(|| BreakError::InvalidConfig(format!("'{}' renders nothing", format)))
}
