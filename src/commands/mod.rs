//! Command implementations for breaktime.

pub mod generate;
pub mod interactive;
pub mod load;

pub use generate::{parse_count, GenerateCommand, GenerateConfig, GenerateMode, GenerateStats};
pub use interactive::{classify, Command, Session, SessionStats};
pub use load::{LoadCommand, LoadStats};
