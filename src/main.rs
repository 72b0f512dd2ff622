//! breaktime: find the most common break time
//!
//! Usage: breaktime [OPTIONS] <COMMAND>

use chrono::{NaiveTime, Timelike};
use clap::{Parser, Subcommand};
use std::fs::File;
use std::io::{self, BufWriter, IsTerminal, Write};
use std::path::{Path, PathBuf};
use std::process;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use breaktime::commands::{
    parse_count, GenerateCommand, GenerateConfig, GenerateMode, LoadCommand, Session,
};
use breaktime::config::{Config, DEFAULT_TIME_FORMAT};
use breaktime::engine::OverlapEngine;
use breaktime::error::{BreakError, Result};

#[derive(Parser)]
#[command(name = "breaktime")]
#[command(version)]
#[command(about = "Find the most common break time: the span where the most breaks overlap", long_about = None)]
struct Cli {
    /// chrono pattern for each half of an interval line (e.g. %H:%M, %I:%M%p)
    #[arg(long, global = true, default_value = DEFAULT_TIME_FORMAT)]
    time_format: String,

    /// Required length of a whole interval line (default: twice the
    /// rendered width of the time pattern)
    #[arg(long, global = true)]
    line_length: Option<usize>,

    /// Reject zero-length breaks (start must be strictly before end)
    #[arg(long, global = true)]
    strict_endpoints: bool,

    /// Reject the whole file if any line is invalid
    #[arg(long, global = true)]
    all_or_nothing: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load breaks from a file and report the most common break time
    Load {
        /// Input file, one break per line (use - for stdin)
        #[arg(short, long)]
        input: PathBuf,

        /// Keep adding breaks interactively after the load
        #[arg(long)]
        interactive: bool,

        /// Print load statistics to stderr
        #[arg(long)]
        stats: bool,
    },

    /// Add breaks one at a time from the keyboard
    Interactive,

    /// Generate a synthetic break file
    Generate {
        /// Output file (use - for stdout)
        #[arg(short, long, default_value = "-")]
        output: PathBuf,

        /// Number of breaks (supports K/M suffix)
        #[arg(short = 'n', long, default_value = "100", value_parser = parse_count_arg)]
        count: u64,

        /// Random seed for reproducibility
        #[arg(long, default_value = "42")]
        seed: u64,

        /// Distribution: uniform, lunch
        #[arg(long, default_value = "uniform")]
        mode: String,

        /// Minimum break length in minutes
        #[arg(long, default_value = "5")]
        min_len: u32,

        /// Maximum break length in minutes
        #[arg(long, default_value = "60")]
        max_len: u32,

        /// Earliest break start (HH:MM)
        #[arg(long, default_value = "08:00", value_parser = parse_clock_arg)]
        day_start: u32,

        /// Latest break end (HH:MM)
        #[arg(long, default_value = "18:00", value_parser = parse_clock_arg)]
        day_end: u32,

        /// Fraction of lines to write malformed (0.0 - 1.0)
        #[arg(long, default_value = "0.0")]
        invalid_frac: f64,

        /// Overwrite an existing output file
        #[arg(long)]
        force: bool,

        /// Print generation statistics to stderr
        #[arg(long)]
        stats: bool,
    },
}

fn parse_count_arg(s: &str) -> std::result::Result<u64, String> {
    parse_count(s).ok_or_else(|| format!("invalid count '{}' (expected e.g. 500, 10K, 2M)", s))
}

/// Parse `HH:MM` into minutes after midnight.
fn parse_clock_arg(s: &str) -> std::result::Result<u32, String> {
    let time = NaiveTime::parse_from_str(s, "%H:%M")
        .map_err(|e| format!("invalid time '{}' (expected HH:MM): {}", s, e))?;
    Ok(time.num_seconds_from_midnight() / 60)
}

fn init_logging(level: &str) {
    let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(io::stderr),
        )
        .init();
}

/// Build the parsing policy from the global flags.
fn build_config(cli: &Cli) -> Result<Config> {
    let mut config = Config::default()
        .with_time_format(&cli.time_format)?
        .with_equal_endpoints(!cli.strict_endpoints)
        .with_all_or_nothing(cli.all_or_nothing);

    if let Some(len) = cli.line_length {
        config = config.with_expected_len(len)?;
    }

    Ok(config)
}

fn main() {
    let cli = Cli::parse();

    init_logging(&cli.log_level);

    let result = build_config(&cli).and_then(|config| match cli.command {
        Commands::Load {
            input,
            interactive,
            stats,
        } => run_load(config, input, interactive, stats),
        Commands::Interactive => run_interactive(&mut OverlapEngine::new(config)),
        Commands::Generate {
            output,
            count,
            seed,
            mode,
            min_len,
            max_len,
            day_start,
            day_end,
            invalid_frac,
            force,
            stats,
        } => {
            let mode = GenerateMode::from_str(&mode).ok_or_else(|| {
                BreakError::InvalidConfig(format!(
                    "unknown mode '{}' (expected uniform or lunch)",
                    mode
                ))
            });
            mode.and_then(|mode| {
                let gen_config = GenerateConfig {
                    count,
                    seed,
                    mode,
                    len_min: min_len,
                    len_max: max_len,
                    day_start,
                    day_end,
                    invalid_frac,
                    ..Default::default()
                };
                run_generate(config, gen_config, &output, force, stats)
            })
        }
    });

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run_load(config: Config, input: PathBuf, interactive: bool, stats: bool) -> Result<()> {
    let mut engine = OverlapEngine::new(config);

    {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        let stderr = io::stderr();
        let mut errors = stderr.lock();

        let result = LoadCommand::new().run(&mut engine, &input, &mut handle, &mut errors)?;
        if stats {
            writeln!(errors, "Load stats: {}", result)?;
        }
    }

    if interactive {
        run_interactive(&mut engine)?;
    }

    Ok(())
}

fn run_interactive(engine: &mut OverlapEngine) -> Result<()> {
    let stdin = io::stdin();
    let on_terminal = stdin.is_terminal();
    let stdout = io::stdout();
    let mut handle = stdout.lock();

    if on_terminal {
        writeln!(handle, "Enter breaks like 10:0011:15. Type 'help' for usage, 'exit' to quit.")?;
    }

    Session::new(engine)
        .with_prompt(on_terminal)
        .run(stdin.lock(), &mut handle)?;

    Ok(())
}

fn run_generate(
    config: Config,
    gen_config: GenerateConfig,
    output: &Path,
    force: bool,
    stats: bool,
) -> Result<()> {
    let cmd = GenerateCommand::new(gen_config, config)?;

    let result = if output.as_os_str() == "-" {
        let stdout = io::stdout();
        let mut handle = BufWriter::new(stdout.lock());
        cmd.run(&mut handle)?
    } else {
        if output.exists() && !force {
            return Err(BreakError::InvalidConfig(format!(
                "{} already exists (use --force to overwrite)",
                output.display()
            )));
        }
        let mut writer = BufWriter::new(File::create(output)?);
        cmd.run(&mut writer)?
    };

    if stats {
        eprintln!("Generate stats: {}", result);
    }

    Ok(())
}
