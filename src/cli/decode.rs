use anyhow::{Context, Result};
use log::info;
use std::path::PathBuf;

use isa_descriptors::descriptors;
use isa_descriptors::ontology;

use super::{open_rows, BlockSettings};

/// Decode a design descriptor block and print it as JSON
pub fn run(input: PathBuf, settings: BlockSettings, pretty: bool) -> Result<()> {
    info!("Decoding design descriptors from {}", input.display());
    if let Some(prefix) = &settings.prefix {
        info!("Prefix: {}", prefix);
    }
    info!("Start line: {}", settings.start_line);

    let mut rows = open_rows(&input, settings.start_line)?;
    let block = descriptors::from_rows(settings.prefix.as_deref(), settings.start_line, &mut rows)
        .context("Failed to decode design descriptor block")?;

    for remark in &block.remarks {
        info!("Remark at line {}: {}", remark.line, remark.value);
    }
    match &block.next_label {
        Some(label) => info!("Block ended at line {} by {:?}", block.line_number, label),
        None => info!("Block ended at line {}", block.line_number),
    }
    info!("Decoded {} design descriptor(s)", block.designs.len());

    let json = if pretty {
        ontology::to_json(&block.designs)?
    } else {
        serde_json::to_string(&block.designs)?
    };
    println!("{}", json);

    Ok(())
}
