//! # Sparse Table
//!
//! Positional storage for one labelled block of a spreadsheet, plus the
//! scanner that cuts such a block out of a forward-only row stream and the
//! emitter that turns it back into rows.

mod error;
mod rows;
mod sparse;


pub use error::TableError;
pub use rows::{RowGroup, Rows, SparseRow};
pub use sparse::{CellKey, SparseTable};
