// Clippy allows for the whole crate
#![allow(clippy::should_implement_trait)]

//! breaktime: find the most common break time.
//!
//! Given a set of breaks (time-of-day intervals), finds the span during
//! which the most breaks overlap and how many breaks share it.
//!
//! # Features
//!
//! - **Sweep-line engine**: O(n log n) bulk load, O(n) query
//! - **Incremental adds**: single breaks are inserted in place, no re-sort
//! - **Configurable input**: any fixed-width chrono time pattern
//! - **Load policies**: skip bad lines, or reject the whole file
//!
//! # Example
//!
//! ```rust
//! use breaktime::{Config, OverlapEngine};
//!
//! let mut engine = OverlapEngine::new(Config::default());
//! engine
//!     .load_all(["10:0011:00", "10:3012:00", "10:4511:15"])
//!     .unwrap();
//!
//! let busiest = engine.most_overlapped();
//! assert_eq!(busiest.count, 3);
//! ```

pub mod commands;
pub mod config;
pub mod engine;
pub mod error;
pub mod parse;
pub mod report;
pub mod source;
pub mod time_range;
pub mod timeline;

// Re-export commonly used types
pub use config::Config;
pub use engine::{LoadReport, Overlap, OverlapEngine, SkippedLine};
pub use error::BreakError;
pub use parse::{parse_interval, ParseError};
pub use time_range::{Marker, MarkerKind, TimeRange};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::commands::{GenerateCommand, LoadCommand, Session};
    pub use crate::config::Config;
    pub use crate::engine::{Overlap, OverlapEngine};
    pub use crate::parse::{parse_interval, ParseError};
    pub use crate::report::{format_range, Summary};
    pub use crate::time_range::{Marker, MarkerKind, TimeRange};
}
