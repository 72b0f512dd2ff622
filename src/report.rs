//! Human-readable rendering of sweep results.

use crate::config::Config;
use crate::engine::Overlap;
use crate::time_range::TimeRange;
use std::fmt;

/// Render a range as `<start> - <end>` using the configured time pattern.
pub fn format_range(range: &TimeRange, config: &Config) -> String {
    format!(
        "{} - {}",
        config.format_time(range.start),
        config.format_time(range.end)
    )
}

/// The one-line answer printed after a load or an interactive add.
pub struct Summary<'a> {
    overlap: &'a Overlap,
    config: &'a Config,
}

impl<'a> Summary<'a> {
    pub fn new(overlap: &'a Overlap, config: &'a Config) -> Self {
        Self { overlap, config }
    }
}

impl fmt::Display for Summary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.overlap.count == 0 {
            return write!(f, "No breaks recorded yet.");
        }
        write!(
            f,
            "Most common break time is {} with {} people on break.",
            format_range(&self.overlap.range, self.config),
            self.overlap.count
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::parse_range;
    use chrono::NaiveTime;

    fn t(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn test_format_range() {
        let config = Config::default();
        let range = TimeRange::new(t(10, 45), t(11, 0));
        assert_eq!(format_range(&range, &config), "10:45 - 11:00");
    }

    #[test]
    fn test_summary_message() {
        let config = Config::default();
        let overlap = Overlap {
            range: TimeRange::new(t(10, 45), t(11, 0)),
            count: 3,
        };
        assert_eq!(
            Summary::new(&overlap, &config).to_string(),
            "Most common break time is 10:45 - 11:00 with 3 people on break."
        );
    }

    #[test]
    fn test_summary_without_breaks() {
        let config = Config::default();
        let overlap = Overlap::default();
        assert_eq!(
            Summary::new(&overlap, &config).to_string(),
            "No breaks recorded yet."
        );
    }

    #[test]
    fn test_formatted_range_parses_back() {
        for format in ["%H:%M", "%I:%M%p", "%H:%M:%S"] {
            let config = Config::default().with_time_format(format).unwrap();
            let range = TimeRange::new(t(7, 5), t(19, 40));

            let start = config.format_time(range.start);
            let end = config.format_time(range.end);
            let line = format!("{}{}", start, end);

            assert_eq!(parse_range(&line, &config).unwrap(), range, "{}", format);
        }
    }
}
