//! # isa-descriptors
//!
//! Command-line tool for moving ISA-Tab design descriptor blocks between TSV
//! and JSON.
//!
//! ## Usage
//!
//! ```bash
//! # Decode the block to JSON
//! isa-descriptors decode i_investigation.txt --prefix "Study Design"
//!
//! # Encode JSON descriptors back to a TSV block
//! isa-descriptors encode designs.json block.tsv --prefix "Study Design"
//!
//! # Show the shape of the located block
//! isa-descriptors inspect i_investigation.txt --prefix "Study Design"
//! ```

use anyhow::Result;
use clap::Parser;

mod cli;

use cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli::init_logging(cli.verbosity());
    cli::dispatch(cli)
}
