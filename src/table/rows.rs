use indexmap::IndexSet;
use log::{debug, warn};

use super::{CellKey, SparseTable, TableError};
use crate::ontology::{Comment, CommentKey, Remark};

/// One spreadsheet row as `(cell index, value)` pairs; cell `0` is the label
pub type SparseRow = Vec<(usize, String)>;

/// Result of scanning one labelled block out of a row stream
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RowGroup {
    /// Label of the row that ended the block (`None` at end of stream or
    /// on a row without a label cell)
    pub next_label: Option<String>,

    /// Line number of the last consumed row
    pub line_number: usize,

    /// `#` lines found inside the block
    pub remarks: Vec<Remark>,

    /// Block contents
    pub table: SparseTable,
}

fn label_cell(row: &SparseRow) -> Option<String> {
    row.iter()
        .find(|(index, _)| *index == 0)
        .map(|(_, value)| value.clone())
}

impl SparseTable {
    /// Read one labelled block from `rows`.
    ///
    /// Rows whose label is `"<prefix> <label>"` (or just `<label>` without a
    /// prefix) for one of `labels`, `Comment[<key>]` rows and `#` remarks
    /// belong to the block. The first other row ends it and its label is
    /// returned as [`RowGroup::next_label`].
    ///
    /// `line_number` is the number of rows already consumed from the stream.
    /// The cursor is advanced past the terminating row and is not rewound;
    /// the returned line number continues from the one passed in.
    pub fn from_rows<I>(
        rows: &mut I,
        labels: &[&str],
        line_number: usize,
        prefix: Option<&str>,
    ) -> Result<RowGroup, TableError>
    where
        I: Iterator<Item = SparseRow>,
    {
        scan_block(rows, labels, line_number, prefix).map_err(|e| TableError::Block {
            line: line_number,
            source: Box::new(e),
        })
    }

    /// Emit the table as rows, lazily.
    ///
    /// One row per canonical key (label cell prefixed with `"<prefix> "`
    /// when given), then one `Comment[<key>]` row per comment key. Each row
    /// carries cells `1..column_count`, empty where the table has no value.
    pub fn into_rows(self, prefix: Option<&str>) -> Rows {
        Rows {
            prefix: prefix.map(|p| format!("{} ", p)).unwrap_or_default(),
            table: self,
            position: 0,
        }
    }
}

fn scan_block<I>(
    rows: &mut I,
    labels: &[&str],
    mut line_number: usize,
    prefix: Option<&str>,
) -> Result<RowGroup, TableError>
where
    I: Iterator<Item = SparseRow>,
{
    let prefix = prefix.map(|p| format!("{} ", p)).unwrap_or_default();
    let mut table = SparseTable::new(labels.iter().map(|l| l.to_string()).collect(), 0);
    let mut comment_keys: IndexSet<String> = IndexSet::new();
    let mut remarks = Vec::new();
    let mut seen_row = false;
    let mut next_label = None;

    for row in rows.by_ref() {
        line_number += 1;

        let Some(label) = label_cell(&row) else {
            debug!("Row without label cell at line {} ends block", line_number);
            break;
        };

        if let Some(remark) = Remark::parse(line_number, &label) {
            debug!("Remark at line {}: {}", line_number, remark.value);
            remarks.push(remark);
            continue;
        }

        let column = match CommentKey::parse(&label) {
            CommentKey::Key(key) => {
                comment_keys.insert(key.clone());
                CellKey::Comment(key)
            }
            CommentKey::Malformed => {
                return Err(TableError::MalformedCommentKey {
                    line: line_number,
                    label,
                });
            }
            CommentKey::NotAComment => {
                match labels.iter().find(|l| label == format!("{}{}", prefix, l)) {
                    Some(l) => CellKey::Column(l.to_string()),
                    None => {
                        debug!("Label {:?} at line {} ends block", label, line_number);
                        next_label = Some(label);
                        break;
                    }
                }
            }
        };

        seen_row = true;
        for (index, value) in row.into_iter().filter(|(index, _)| *index > 0) {
            table.column_count = table.column_count.max(index + 1);
            if table.insert_cell(column.clone(), index, value).is_some() {
                return Err(TableError::DuplicateCell {
                    line: line_number,
                    label: column.to_string(),
                    index,
                });
            }
        }
    }

    if seen_row {
        table.column_count = table.column_count.max(1);
    } else if !remarks.is_empty() {
        warn!("Block ending at line {} holds only remarks", line_number);
    }
    table.comment_keys = comment_keys.into_iter().collect();

    Ok(RowGroup {
        next_label,
        line_number,
        remarks,
        table,
    })
}

/// Lazy row emitter returned by [`SparseTable::into_rows`]
#[derive(Debug, Clone)]
pub struct Rows {
    table: SparseTable,
    prefix: String,
    position: usize,
}

impl Iterator for Rows {
    type Item = SparseRow;

    fn next(&mut self) -> Option<SparseRow> {
        let key_count = self.table.keys.len();
        let (label, column) = if self.position < key_count {
            let key = &self.table.keys[self.position];
            (format!("{}{}", self.prefix, key), CellKey::Column(key.clone()))
        } else {
            let key = self.table.comment_keys.get(self.position - key_count)?;
            (Comment::wrap_key(key), CellKey::Comment(key.clone()))
        };

        let row = std::iter::once((0, label))
            .chain((1..self.table.column_count).map(|i| {
                let value = self.table.get_cell(&column, i).unwrap_or("");
                (i, value.to_string())
            }))
            .collect();

        self.position += 1;
        Some(row)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let total = self.table.keys.len() + self.table.comment_keys.len();
        let remaining = total.saturating_sub(self.position);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Rows {}
