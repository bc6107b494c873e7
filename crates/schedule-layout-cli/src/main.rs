//! `schedule-layout` CLI: inspect day layouts from the command line.
//!
//! ## Usage
//!
//! ```sh
//! # Lay out a day of events (stdin → stdout), default label-row grid
//! cat day.json | schedule-layout layout
//!
//! # 24-hour grid from 06:00, 48 px per hour, file to file
//! schedule-layout layout --use-24-hour --start-hour 6 --pixels-per-hour 48 \
//!     -i day.json -o blocks.json
//!
//! # Use a saved display configuration
//! schedule-layout layout --config display.json -i day.json
//!
//! # Same configuration, but with period caption rows
//! schedule-layout rows --config display.json --label-rows
//!
//! # Project a single time
//! schedule-layout position 08:00
//!
//! # List the grid rows
//! schedule-layout rows --start-hour 9
//! ```

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use schedule_layout::{Event, ScheduleConfig};
use std::io::{self, Read};
use std::process;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "schedule-layout",
    version,
    about = "Lay out schedule events onto a day grid"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log layout decisions to stderr (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Lay out a JSON array of events and print the blocks as JSON
    Layout {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        #[command(flatten)]
        display: DisplayArgs,
    },
    /// Print the vertical pixel offset of an HH:MM time
    Position {
        /// Clock time, e.g. 08:30
        time: String,
        #[command(flatten)]
        display: DisplayArgs,
    },
    /// Print the grid rows as JSON
    Rows {
        #[command(flatten)]
        display: DisplayArgs,
    },
}

/// Display configuration, from a JSON file and/or individual flags.
#[derive(Args)]
struct DisplayArgs {
    /// JSON display configuration file (flags below override its fields)
    #[arg(long)]
    config: Option<String>,
    /// First visible hour
    #[arg(long)]
    start_hour: Option<u32>,
    /// Exclusive last hour (24 = midnight)
    #[arg(long)]
    end_hour: Option<u32>,
    /// Plain 24-hour grid instead of period caption rows
    #[arg(long = "use-24-hour", conflicts_with = "label_rows")]
    use_24_hour: bool,
    /// Label-row grid with period captions (overrides a 24-hour config file)
    #[arg(long)]
    label_rows: bool,
    /// Pixels per grid hour
    #[arg(long)]
    pixels_per_hour: Option<f64>,
}

impl DisplayArgs {
    fn resolve(&self) -> Result<ScheduleConfig> {
        let mut config = match self.config.as_deref() {
            Some(path) => {
                let json = std::fs::read_to_string(path)
                    .with_context(|| format!("Failed to read config file: {}", path))?;
                serde_json::from_str(&json)
                    .with_context(|| format!("Invalid config JSON in {}", path))?
            }
            None => ScheduleConfig::default(),
        };

        if let Some(start) = self.start_hour {
            config.start_hour = start;
        }
        if let Some(end) = self.end_hour {
            config.end_hour = end;
        }
        if self.use_24_hour {
            config.use_24_hour_mode = true;
        }
        if self.label_rows {
            config.use_24_hour_mode = false;
        }
        if let Some(pph) = self.pixels_per_hour {
            config.pixels_per_hour = pph;
        }

        config.validate().context("Invalid display configuration")?;
        Ok(config)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        enable_tracing();
    }

    match cli.command {
        Commands::Layout {
            input,
            output,
            display,
        } => {
            let config = display.resolve()?;
            let json = read_input(input.as_deref())?;
            let events: Vec<Event> =
                serde_json::from_str(&json).context("Failed to parse events JSON")?;

            let layout = schedule_layout::layout_day(&events, &config);
            for rejected in &layout.rejected {
                tracing::warn!(
                    event_id = %rejected.event_id,
                    reason = %rejected.reason,
                    "event not laid out"
                );
            }

            let pretty = serde_json::to_string_pretty(&layout)?;
            write_output(output.as_deref(), &pretty)?;
        }
        Commands::Position { time, display } => {
            let config = display.resolve()?;
            match schedule_layout::time_to_position(&time, &config) {
                Some(top) => println!("{}", top),
                None => {
                    eprintln!(
                        "Error: '{}' is not a valid time inside {:02}:00-{:02}:00",
                        time, config.start_hour, config.end_hour
                    );
                    process::exit(1);
                }
            }
        }
        Commands::Rows { display } => {
            let config = display.resolve()?;
            let pretty = serde_json::to_string_pretty(&config.visual_rows())?;
            println!("{}", pretty);
        }
    }

    Ok(())
}

fn enable_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
        )
        .with_writer(io::stderr)
        .init();
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            println!("{}", content);
        }
    }
    Ok(())
}
