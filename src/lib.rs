//! # isa-descriptors - ISA-Tab Design Descriptor Codec
//!
//! `isa-descriptors` converts the design-descriptor block of an ISA-Tab
//! investigation file to and from a typed list of ontology annotations.
//!
//! ## Key Features
//!
//! - **Fixed Schema**: The canonical rows `Type`, `Type Term Accession Number`
//!   and `Type Term Source REF` are always emitted, in that order.
//!
//! - **Dynamic Comments**: Any `Comment[<key>]` row becomes a comment on every
//!   descriptor; comment keys seen while encoding become comment rows.
//!
//! - **Total Decoding**: Missing cells read as empty strings, so decoding a
//!   table never fails.
//!
//! - **Stream Friendly**: Blocks are cut out of a forward-only row stream and
//!   the scanner hands back the label that ended the block, so a caller can
//!   dispatch to the next section.
//!
//! ## Quick Start
//!
//! ```rust
//! use isa_descriptors::descriptors;
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
//! // Encode to rows
//! let mut rows = descriptors::to_rows(Some("Study Design"), &designs);
//!
//! // Decode them back
//! let block = descriptors::from_rows(Some("Study Design"), 0, &mut rows)?;
//! assert_eq!(block.designs.len(), 2);
//! assert_eq!(block.designs[1], designs[1]);
//! # Ok::<(), isa_descriptors::table::TableError>(())
//! ```
//!
//! ## Architecture
//!
//! - [`ontology`]: annotation, comment and remark value types
//! - [`table`]: sparse table storage, block scanner and row emitter
//! - [`descriptors`]: the design-descriptor codec
//! - [`tsv`]: TSV text to sparse rows and back

// Documentation lints - enforce complete documentation for publication
#![deny(missing_docs)]
#![deny(rustdoc::missing_crate_level_docs)]

pub mod descriptors;
pub mod ontology;
pub mod table;
pub mod tsv;

/// Re-export commonly used types for convenience
pub mod prelude {
    pub use crate::descriptors::{
        from_rows, from_sparse_table, to_rows, to_sparse_table, DescriptorBlock, LABELS,
    };
    pub use crate::ontology::{Comment, OntologyAnnotation, Remark};
    pub use crate::table::{CellKey, RowGroup, SparseRow, SparseTable, TableError};
    pub use crate::tsv::{read_rows, write_rows, TsvError};
}
