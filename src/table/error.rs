/// Errors that can occur while locating a row group in a row stream
#[derive(Debug, thiserror::Error)]
pub enum TableError {
    /// Label cell starts with `Comment` but is not `Comment[<key>]`
    #[error("Malformed comment label at line {line}: {label:?}")]
    MalformedCommentKey {
        /// Line number of the offending row
        line: usize,
        /// Raw label cell
        label: String,
    },

    /// The same (label, index) cell was written twice within one block
    #[error("Duplicate cell ({label:?}, {index}) at line {line}")]
    DuplicateCell {
        /// Line number of the offending row
        line: usize,
        /// Column label of the cell
        label: String,
        /// Index of the cell
        index: usize,
    },

    /// Any of the above, tagged with the line the block started at
    #[error("Error parsing block starting from line {line}: {source}")]
    Block {
        /// Line number passed in by the caller
        line: usize,
        /// Underlying failure
        source: Box<TableError>,
    },
}
