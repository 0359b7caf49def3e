//! # Design Descriptors
//!
//! Codec between the design-descriptor block of an ISA-Tab investigation
//! file and a list of [`OntologyAnnotation`]s.
//!
//! ## Block Layout
//!
//! The block is transposed: every field is a row and every descriptor a
//! column. With the `Study Design` prefix a block looks like:
//!
//! ```text
//! Study Design Type                          X-ray    mutagenesis
//! Study Design Type Term Accession Number             OBI:0001
//! Study Design Type Term Source REF                   OBI
//! Comment[Unit]                                       days
//! ```
//!
//! The three canonical rows are always written, in that order, before any
//! comment rows. Descriptor `i` occupies cell `i + 1`; cell `0` holds the
//! row label.
//!
//! ## Example
//!
//! ```rust
//! use isa_descriptors::descriptors::{from_sparse_table, to_sparse_table};
//! use isa_descriptors::ontology::{Comment, OntologyAnnotation};
//!
//! let designs = vec![
//!     OntologyAnnotation::new("X-ray"),
//!     OntologyAnnotation::new("mutagenesis")
//!         .with_term_source_ref("OBI")
//!         .with_term_accession_number("OBI:0001")
//!         .with_comment(Comment::new("Unit", "days")),
//! ];
//!
//! let table = to_sparse_table(&designs);
//! assert_eq!(table.column_count, 3);
//! assert_eq!(table.get("Type", 2), Some("mutagenesis"));
//!
//! let decoded = from_sparse_table(&table);
//! assert_eq!(decoded[1].name.as_deref(), Some("mutagenesis"));
//! ```

use indexmap::IndexSet;
use log::{debug, warn};

use crate::ontology::{Comment, OntologyAnnotation, Remark};
use crate::table::{Rows, SparseRow, SparseTable, TableError};


/// Row label of the term name
pub const DESIGN_TYPE_LABEL: &str = "Type";

/// Row label of the term accession number
pub const DESIGN_TYPE_TERM_ACCESSION_NUMBER_LABEL: &str = "Type Term Accession Number";

/// Row label of the term source reference
pub const DESIGN_TYPE_TERM_SOURCE_REF_LABEL: &str = "Type Term Source REF";

/// Canonical row labels, in output order
pub const LABELS: [&str; 3] = [
    DESIGN_TYPE_LABEL,
    DESIGN_TYPE_TERM_ACCESSION_NUMBER_LABEL,
    DESIGN_TYPE_TERM_SOURCE_REF_LABEL,
];

/// A decoded design-descriptor block together with the scanner state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DescriptorBlock {
    /// Label of the row that ended the block, if any
    pub next_label: Option<String>,

    /// Line number of the last consumed row
    pub line_number: usize,

    /// `#` lines found inside the block
    pub remarks: Vec<Remark>,

    /// Decoded descriptors
    pub designs: Vec<OntologyAnnotation>,
}

/// Decode a table into descriptors.
///
/// A table without data slots but with comment keys decodes to a single
/// descriptor carrying only (empty) comments. Missing cells read as empty.
pub fn from_sparse_table(table: &SparseTable) -> Vec<OntologyAnnotation> {
    if table.data_count() == 0 && !table.comment_keys.is_empty() {
        let comments = table
            .comment_keys
            .iter()
            .map(|k| Comment::from_string(k, table.get_comment_or(k, 0, "")))
            .collect();
        return vec![OntologyAnnotation::from_string("", "", "", comments)];
    }

    (1..=table.data_count())
        .map(|i| {
            let comments = table
                .comment_keys
                .iter()
                .map(|k| Comment::from_string(k, table.get_comment_or(k, i, "")))
                .collect();

            OntologyAnnotation::from_string(
                table.get_or(DESIGN_TYPE_LABEL, i, ""),
                table.get_or(DESIGN_TYPE_TERM_SOURCE_REF_LABEL, i, ""),
                table.get_or(DESIGN_TYPE_TERM_ACCESSION_NUMBER_LABEL, i, ""),
                comments,
            )
        })
        .collect()
}

/// Encode descriptors into a table.
///
/// Descriptor `i` is written at index `i + 1`. Comment keys are collected
/// in first-seen order; a key repeated on one descriptor keeps its last
/// value.
pub fn to_sparse_table(designs: &[OntologyAnnotation]) -> SparseTable {
    let mut table = SparseTable::new(
        LABELS.iter().map(|l| l.to_string()).collect(),
        designs.len() + 1,
    );
    let mut comment_keys: IndexSet<String> = IndexSet::new();

    for (i, design) in designs.iter().enumerate() {
        let index = i + 1;
        let strings = design.to_string_triple();

        table.insert(DESIGN_TYPE_LABEL, index, strings.term_name);
        table.insert(
            DESIGN_TYPE_TERM_ACCESSION_NUMBER_LABEL,
            index,
            strings.term_accession_number,
        );
        table.insert(DESIGN_TYPE_TERM_SOURCE_REF_LABEL, index, strings.term_source_ref);

        for comment in design.comments() {
            let (name, value) = comment.to_string_pair();
            if name.is_empty() {
                warn!("Skipping comment without a key on design descriptor {}", index);
                continue;
            }
            table.insert_comment(&name, index, value);
            comment_keys.insert(name);
        }
    }

    table.comment_keys = comment_keys.into_iter().collect();
    table
}

/// Read a design-descriptor block from a row stream.
///
/// Advances `rows` past the row that ends the block; see
/// [`SparseTable::from_rows`] for the scanning rules. Scanner errors are
/// returned unchanged.
pub fn from_rows<I>(
    prefix: Option<&str>,
    line_number: usize,
    rows: &mut I,
) -> Result<DescriptorBlock, TableError>
where
    I: Iterator<Item = SparseRow>,
{
    let group = SparseTable::from_rows(rows, &LABELS, line_number, prefix)?;
    let designs = from_sparse_table(&group.table);

    debug!(
        "Decoded {} design descriptor(s) ending at line {}",
        designs.len(),
        group.line_number
    );

    Ok(DescriptorBlock {
        next_label: group.next_label,
        line_number: group.line_number,
        remarks: group.remarks,
        designs,
    })
}

/// Encode descriptors as a lazy stream of rows
pub fn to_rows(prefix: Option<&str>, designs: &[OntologyAnnotation]) -> Rows {
    to_sparse_table(designs).into_rows(prefix)
}
