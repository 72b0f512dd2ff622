//! Interactive session: add breaks one at a time and watch the answer move.
//!
//! Input lines are classified by [`classify`] into a [`Command`]; the
//! [`Session`] driver applies them to an engine and reports after every
//! successful add. Quitting only ends [`Session::run`]; the caller decides
//! what happens to the process.

use crate::engine::OverlapEngine;
use crate::report::Summary;
use std::fmt;
use std::io::{self, BufRead, Write};
use tracing::debug;

const PROMPT: &str = "> ";

/// One classified line of interactive input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Quit,
    Help,
    AddInterval(String),
}

/// Classify one line of input. Keywords are trimmed and case-insensitive.
pub fn classify(text: &str) -> Command {
    let trimmed = text.trim();
    match trimmed.to_ascii_lowercase().as_str() {
        "exit" | "quit" | "q" => Command::Quit,
        "help" | "h" | "?" => Command::Help,
        _ => Command::AddInterval(trimmed.to_string()),
    }
}

/// Counters for one session.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SessionStats {
    pub added: usize,
    pub rejected: usize,
}

impl fmt::Display for SessionStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} added, {} rejected", self.added, self.rejected)
    }
}

/// Read-eval loop over an engine.
pub struct Session<'a> {
    engine: &'a mut OverlapEngine,
    prompt: bool,
}

impl<'a> Session<'a> {
    pub fn new(engine: &'a mut OverlapEngine) -> Self {
        Self {
            engine,
            prompt: true,
        }
    }

    /// Disable the `> ` prompt (useful when input is piped).
    pub fn with_prompt(mut self, prompt: bool) -> Self {
        self.prompt = prompt;
        self
    }

    /// Run until a quit command or end of input.
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        mut input: R,
        output: &mut W,
    ) -> io::Result<SessionStats> {
        let mut stats = SessionStats::default();
        let mut line = String::new();

        loop {
            if self.prompt {
                write!(output, "{}", PROMPT)?;
                output.flush()?;
            }

            line.clear();
            if input.read_line(&mut line)? == 0 {
                break;
            }

            match classify(&line) {
                Command::Quit => break,
                Command::Help => self.write_help(output)?,
                Command::AddInterval(text) if text.is_empty() => continue,
                Command::AddInterval(text) => match self.engine.add_interval(&text) {
                    Ok(()) => {
                        stats.added += 1;
                        let overlap = self.engine.most_overlapped();
                        writeln!(output, "{}", Summary::new(&overlap, self.engine.config()))?;
                    }
                    Err(e) => {
                        stats.rejected += 1;
                        writeln!(output, "Could not add '{}': {}", text, e)?;
                    }
                },
            }
        }

        debug!(added = stats.added, rejected = stats.rejected, "session ended");
        Ok(stats)
    }

    fn write_help<W: Write>(&self, output: &mut W) -> io::Result<()> {
        let config = self.engine.config();
        writeln!(output, "Enter a break as two times with no separator, e.g. 10:0011:15")?;
        writeln!(
            output,
            "  time pattern: {}   line length: {}",
            config.time_format(),
            config.expected_len()
        )?;
        writeln!(output, "Commands:")?;
        writeln!(output, "  help, h, ?      show this message")?;
        writeln!(output, "  exit, quit, q   leave the session")
    }
}
