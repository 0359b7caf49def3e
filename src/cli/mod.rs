use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use isa_descriptors::table::SparseRow;
use isa_descriptors::tsv;

mod config;
mod decode;
mod encode;
mod inspect;

pub use config::{BlockSettings, Config};

/// isa-descriptors - ISA-Tab design descriptor codec
#[derive(Parser)]
#[command(name = "isa-descriptors")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Verbosity level (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Decode a design descriptor block from TSV into JSON
    Decode {
        /// Input TSV file path
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        /// Row label prefix (e.g. "Study Design")
        #[arg(short = 'p', long)]
        prefix: Option<String>,

        /// Number of rows to skip before the block starts
        #[arg(short = 's', long)]
        start_line: Option<usize>,

        /// Load settings from a TOML config file
        #[arg(long, value_name = "FILE")]
        config: Option<PathBuf>,
    },

    /// Encode JSON design descriptors into a TSV block
    Encode {
        /// Input JSON file path
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        /// Output TSV file path (stdout when omitted)
        #[arg(value_name = "OUTPUT")]
        output: Option<PathBuf>,

        /// Row label prefix (e.g. "Study Design")
        #[arg(short = 'p', long)]
        prefix: Option<String>,

        /// Load settings from a TOML config file
        #[arg(long, value_name = "FILE")]
        config: Option<PathBuf>,
    },

    /// Display the shape of a design descriptor block
    Inspect {
        /// Input TSV file path
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        /// Row label prefix (e.g. "Study Design")
        #[arg(short = 'p', long)]
        prefix: Option<String>,

        /// Number of rows to skip before the block starts
        #[arg(short = 's', long)]
        start_line: Option<usize>,
    },
}

impl Cli {
    pub fn verbosity(&self) -> u8 {
        self.verbose
    }
}

pub fn init_logging(verbosity: u8) {
    let log_level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();
}

pub fn dispatch(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Decode {
            input,
            prefix,
            start_line,
            config,
        } => {
            let config = Config::load(config.as_deref())?;
            decode::run(input, config.resolve(prefix, start_line), config.output.pretty)
        }
        Commands::Encode {
            input,
            output,
            prefix,
            config,
        } => {
            let config = Config::load(config.as_deref())?;
            encode::run(input, output, config.resolve(prefix, None))
        }
        Commands::Inspect {
            input,
            prefix,
            start_line,
        } => inspect::run(input, Config::default().resolve(prefix, start_line)),
    }
}

/// Read a TSV file and position the row cursor after the first `start_line` rows
fn open_rows(
    input: &Path,
    start_line: usize,
) -> Result<std::iter::Skip<std::vec::IntoIter<SparseRow>>> {
    if !input.exists() {
        anyhow::bail!("Input file does not exist: {}", input.display());
    }

    let rows = tsv::read_rows_from_path(input)
        .with_context(|| format!("Failed to read rows from {}", input.display()))?;

    Ok(rows.into_iter().skip(start_line))
}
