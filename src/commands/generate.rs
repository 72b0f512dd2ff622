//! Generate synthetic break files for demos and benchmarking.
//!
//! Features:
//! - Uniform breaks across a working day, or a lunch-rush distribution
//!   with most breaks clustered around midday
//! - Optional malformed lines to exercise partial and all-or-nothing loads
//! - Deterministic reproducibility via seed

use crate::config::Config;
use crate::error::{BreakError, Result};
use crate::time_range::TimeRange;
use chrono::{Duration, NaiveTime};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::fmt;
use std::io::Write;
use std::time::Instant;
use tracing::info;

/// Last representable minute of the day (23:59).
const LAST_MINUTE: u32 = 24 * 60 - 1;

/// Distribution of generated breaks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerateMode {
    /// Breaks spread evenly over the day window
    Uniform,
    /// Most breaks clustered around the lunch hotspot
    Lunch,
}

impl GenerateMode {
    /// Parse mode from string.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "uniform" => Some(Self::Uniform),
            "lunch" | "clustered" => Some(Self::Lunch),
            _ => None,
        }
    }
}

/// Parse a count with an optional K/M suffix ("500", "10K", "2M").
pub fn parse_count(s: &str) -> Option<u64> {
    let s = s.trim().to_uppercase();
    if s.is_empty() {
        return None;
    }

    let (num_part, multiplier) = if let Some(n) = s.strip_suffix('K') {
        (n, 1_000u64)
    } else if let Some(n) = s.strip_suffix('M') {
        (n, 1_000_000u64)
    } else {
        (s.as_str(), 1u64)
    };

    num_part.parse::<u64>().ok()?.checked_mul(multiplier)
}

/// Configuration for the generate command. Times are minutes after midnight.
#[derive(Debug, Clone)]
pub struct GenerateConfig {
    pub count: u64,
    pub seed: u64,
    pub mode: GenerateMode,
    pub len_min: u32,
    pub len_max: u32,
    pub day_start: u32,
    pub day_end: u32,
    pub hotspot_center: u32,
    pub hotspot_radius: u32,
    pub hotspot_weight: f64,
    pub invalid_frac: f64,
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            count: 100,
            seed: 42,
            mode: GenerateMode::Uniform,
            len_min: 5,
            len_max: 60,
            day_start: 8 * 60,
            day_end: 18 * 60,
            hotspot_center: 12 * 60 + 30,
            hotspot_radius: 45,
            hotspot_weight: 0.80,
            invalid_frac: 0.0,
        }
    }
}

impl GenerateConfig {
    /// Reject windows and lengths that cannot produce a same-day break.
    pub fn validate(&self) -> Result<()> {
        let invalid = |msg: String| Err(BreakError::InvalidConfig(msg));

        if self.len_min > self.len_max {
            return invalid(format!(
                "min length ({}) exceeds max length ({})",
                self.len_min, self.len_max
            ));
        }
        if self.day_start >= self.day_end || self.day_end > LAST_MINUTE {
            return invalid(format!(
                "day window {}..{} must be increasing and end by 23:59",
                self.day_start, self.day_end
            ));
        }
        if self.len_max > self.day_end - self.day_start {
            return invalid(format!(
                "max length ({} min) does not fit in the day window",
                self.len_max
            ));
        }
        if !(0.0..=1.0).contains(&self.invalid_frac) || !(0.0..=1.0).contains(&self.hotspot_weight)
        {
            return invalid("fractions must be between 0 and 1".to_string());
        }
        Ok(())
    }
}

/// Statistics from generate operation.
#[derive(Debug, Default, Clone)]
pub struct GenerateStats {
    pub valid: u64,
    pub invalid: u64,
    pub elapsed_secs: f64,
}

impl fmt::Display for GenerateStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} breaks ({} malformed) in {:.3}s",
            self.valid + self.invalid,
            self.invalid,
            self.elapsed_secs
        )
    }
}

/// Generate command.
pub struct GenerateCommand {
    config: GenerateConfig,
    format: Config,
}

impl GenerateCommand {
    /// Create a generator writing lines in the pattern of `format`.
    pub fn new(config: GenerateConfig, format: Config) -> Result<Self> {
        config.validate()?;
        Ok(Self { config, format })
    }

    /// Write `count` lines to `output`.
    pub fn run<W: Write>(&self, output: &mut W) -> Result<GenerateStats> {
        let start = Instant::now();
        let mut stats = GenerateStats::default();
        let mut rng = SmallRng::seed_from_u64(self.config.seed);

        for _ in 0..self.config.count {
            let range = self.generate_range(&mut rng);
            if self.config.invalid_frac > 0.0 && rng.gen_bool(self.config.invalid_frac) {
                writeln!(output, "{}", self.corrupt_line(&range, &mut rng))?;
                stats.invalid += 1;
            } else {
                writeln!(output, "{}", self.format_line(&range))?;
                stats.valid += 1;
            }
        }
        output.flush()?;

        stats.elapsed_secs = start.elapsed().as_secs_f64();
        info!(
            valid = stats.valid,
            invalid = stats.invalid,
            seed = self.config.seed,
            "generated breaks"
        );
        Ok(stats)
    }

    /// Generate a single break inside the day window.
    fn generate_range(&self, rng: &mut SmallRng) -> TimeRange {
        let cfg = &self.config;
        let len = rng.gen_range(cfg.len_min..=cfg.len_max);
        let latest_start = cfg.day_end - len;

        let start = if cfg.mode == GenerateMode::Lunch && rng.gen_bool(cfg.hotspot_weight) {
            let low = cfg.hotspot_center.saturating_sub(cfg.hotspot_radius + len / 2);
            let high = cfg.hotspot_center + cfg.hotspot_radius;
            rng.gen_range(low..=high).clamp(cfg.day_start, latest_start)
        } else {
            rng.gen_range(cfg.day_start..=latest_start)
        };

        TimeRange::new(minute_to_time(start), minute_to_time(start + len))
    }

    fn format_line(&self, range: &TimeRange) -> String {
        format!(
            "{}{}",
            self.format.format_time(range.start),
            self.format.format_time(range.end)
        )
    }

    /// A line that fails to parse: truncated, reversed, or unreadable.
    fn corrupt_line(&self, range: &TimeRange, rng: &mut SmallRng) -> String {
        match rng.gen_range(0..3) {
            1 if !range.is_empty() => format!(
                "{}{}",
                self.format.format_time(range.end),
                self.format.format_time(range.start)
            ),
            2 => "x".repeat(self.format.expected_len()),
            _ => self.format.format_time(range.start),
        }
    }
}

fn minute_to_time(minute: u32) -> NaiveTime {
    NaiveTime::MIN + Duration::minutes(i64::from(minute))
}
