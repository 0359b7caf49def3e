use std::collections::HashMap;
use std::fmt;

use crate::ontology::Comment;

/// Column a cell belongs to.
///
/// Comment columns live in their own namespace, so a comment keyed `Type`
/// never shares cells with the canonical `Type` column.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CellKey {
    /// Canonical column, by label
    Column(String),
    /// Comment column, by bare key
    Comment(String),
}

impl fmt::Display for CellKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellKey::Column(label) => write!(f, "{}", label),
            CellKey::Comment(key) => write!(f, "{}", Comment::wrap_key(key)),
        }
    }
}

/// Sparse matrix of string cells keyed by `(column, index)`.
///
/// Index `0` is the header slot holding the row label when the table is
/// written out as rows; data lives at `1..column_count`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SparseTable {
    /// Cell values
    pub cells: HashMap<(CellKey, usize), String>,

    /// Canonical column labels, in output order
    pub keys: Vec<String>,

    /// Comment column keys (bare, without the `Comment[...]` wrapper)
    pub comment_keys: Vec<String>,

    /// Number of index slots, header slot included
    pub column_count: usize,
}

impl SparseTable {
    /// Create an empty table with the given canonical labels and shape
    pub fn new(keys: Vec<String>, column_count: usize) -> Self {
        Self {
            cells: HashMap::new(),
            keys,
            comment_keys: Vec::new(),
            column_count,
        }
    }

    /// Set a cell, returning the previous value if any
    pub fn insert_cell(&mut self, key: CellKey, index: usize, value: impl Into<String>) -> Option<String> {
        self.cells.insert((key, index), value.into())
    }

    /// Set a canonical column cell, returning the previous value if any
    pub fn insert(&mut self, label: &str, index: usize, value: impl Into<String>) -> Option<String> {
        self.insert_cell(CellKey::Column(label.to_string()), index, value)
    }

    /// Set a comment column cell, returning the previous value if any
    pub fn insert_comment(&mut self, key: &str, index: usize, value: impl Into<String>) -> Option<String> {
        self.insert_cell(CellKey::Comment(key.to_string()), index, value)
    }

    /// Look up a cell
    pub fn get_cell(&self, key: &CellKey, index: usize) -> Option<&str> {
        self.cells
            .get(&(key.clone(), index))
            .map(String::as_str)
    }

    /// Look up a canonical column cell
    pub fn get(&self, label: &str, index: usize) -> Option<&str> {
        self.get_cell(&CellKey::Column(label.to_string()), index)
    }

    /// Look up a canonical column cell, falling back to `default` when it is absent
    pub fn get_or<'a>(&'a self, label: &str, index: usize, default: &'a str) -> &'a str {
        self.get(label, index).unwrap_or(default)
    }

    /// Look up a comment column cell
    pub fn get_comment(&self, key: &str, index: usize) -> Option<&str> {
        self.get_cell(&CellKey::Comment(key.to_string()), index)
    }

    /// Look up a comment column cell, falling back to `default` when it is absent
    pub fn get_comment_or<'a>(&'a self, key: &str, index: usize, default: &'a str) -> &'a str {
        self.get_comment(key, index).unwrap_or(default)
    }

    /// Number of populated cells
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// True when no cell is populated
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Number of data slots, i.e. `column_count` minus the header slot
    pub fn data_count(&self) -> usize {
        self.column_count.saturating_sub(1)
    }
}
