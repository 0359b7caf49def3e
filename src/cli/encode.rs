use anyhow::{Context, Result};
use log::info;
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use isa_descriptors::{descriptors, ontology, tsv};

use super::BlockSettings;

/// Encode JSON design descriptors as a TSV block
pub fn run(input: PathBuf, output: Option<PathBuf>, settings: BlockSettings) -> Result<()> {
    if !input.exists() {
        anyhow::bail!("Input file does not exist: {}", input.display());
    }

    let json = std::fs::read_to_string(&input)
        .with_context(|| format!("Failed to read {}", input.display()))?;
    let designs = ontology::from_json(&json).context("Failed to parse design descriptors")?;

    info!("Encoding {} design descriptor(s)", designs.len());

    let rows = descriptors::to_rows(settings.prefix.as_deref(), &designs);

    match output {
        Some(path) => {
            let file = File::create(&path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            tsv::write_rows(BufWriter::new(file), rows).context("Failed to write TSV")?;
            info!("Wrote {}", path.display());
        }
        None => {
            tsv::write_rows(std::io::stdout().lock(), rows).context("Failed to write TSV")?;
        }
    }

    Ok(())
}
