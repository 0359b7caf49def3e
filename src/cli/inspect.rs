use anyhow::{Context, Result};
use std::path::PathBuf;

use isa_descriptors::descriptors::LABELS;
use isa_descriptors::table::SparseTable;

use super::{open_rows, BlockSettings};

/// Display the shape of a design descriptor block
pub fn run(input: PathBuf, settings: BlockSettings) -> Result<()> {
    let mut rows = open_rows(&input, settings.start_line)?;
    let group = SparseTable::from_rows(
        &mut rows,
        &LABELS,
        settings.start_line,
        settings.prefix.as_deref(),
    )
    .context("Failed to locate design descriptor block")?;

    let table = &group.table;

    #[cfg(feature = "colorized_output")]
    {
        use console::style;

        println!("{}", style("Design Descriptor Block").bold().cyan());
        println!("{}", style("=======================").cyan());
        println!("{}: {}", style("File").bold(), input.display());
        println!("{}: {}", style("Descriptors").bold(), table.data_count());
        println!("{}: {}", style("Cells").bold(), table.len());
        println!("{}:", style("Keys").bold());
        for key in &table.keys {
            println!("  {}", style(key).green());
        }
        println!("{}:", style("Comment keys").bold());
        for key in &table.comment_keys {
            println!("  {}", style(key).yellow());
        }
    }

    #[cfg(not(feature = "colorized_output"))]
    {
        println!("Design Descriptor Block");
        println!("=======================");
        println!("File: {}", input.display());
        println!("Descriptors: {}", table.data_count());
        println!("Cells: {}", table.len());
        println!("Keys:");
        for key in &table.keys {
            println!("  {}", key);
        }
        println!("Comment keys:");
        for key in &table.comment_keys {
            println!("  {}", key);
        }
    }

    println!("Remarks: {}", group.remarks.len());
    match &group.next_label {
        Some(label) => println!("Ended at line {} by {:?}", group.line_number, label),
        None => println!("Ended at line {}", group.line_number),
    }

    Ok(())
}
