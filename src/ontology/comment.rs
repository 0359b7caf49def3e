use serde::{Deserialize, Serialize};

/// A free-form key/value annotation outside the fixed schema
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Comment {
    /// Comment key (the `<key>` of a `Comment[<key>]` column)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Comment value
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl Comment {
    /// Create a comment with both key and value set
    pub fn new(name: &str, value: &str) -> Self {
        Self {
            name: Some(name.to_string()),
            value: Some(value.to_string()),
        }
    }

    /// Build a comment from a column key and a raw cell value.
    ///
    /// An empty cell yields a comment without a value.
    pub fn from_string(name: &str, value: &str) -> Self {
        Self {
            name: Some(name.to_string()),
            value: if value.is_empty() {
                None
            } else {
                Some(value.to_string())
            },
        }
    }

    /// Split into `(key, value)` cell strings, `None` becoming `""`
    pub fn to_string_pair(&self) -> (String, String) {
        (
            self.name.clone().unwrap_or_default(),
            self.value.clone().unwrap_or_default(),
        )
    }

    /// Wrap a bare key into its row label form: `Comment[<key>]`
    pub fn wrap_key(key: &str) -> String {
        format!("Comment[{}]", key)
    }
}

/// Classification of a label cell against the `Comment[<key>]` form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommentKey {
    /// A well-formed comment label with its key, verbatim
    Key(String),
    /// Starts with `Comment` but has no usable bracketed key
    Malformed,
    /// Not a comment label
    NotAComment,
}

impl CommentKey {
    /// Classify a label cell.
    ///
    /// Accepts `Comment[key]` and `Comment [key]`. The key is everything
    /// between the first `[` and the last `]`, kept verbatim so that
    /// [`Comment::wrap_key`] and this function are inverses.
    pub fn parse(label: &str) -> Self {
        let Some(rest) = label.trim().strip_prefix("Comment") else {
            return CommentKey::NotAComment;
        };

        let inner = rest
            .trim_start()
            .strip_prefix('[')
            .and_then(|r| r.strip_suffix(']'));

        match inner {
            Some(inner) if !inner.is_empty() => CommentKey::Key(inner.to_string()),
            _ => CommentKey::Malformed,
        }
    }
}

/// An out-of-band `#` line found inside a spreadsheet block
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Remark {
    /// Line number the remark was found at
    pub line: usize,

    /// Remark text without the leading `#`
    pub value: String,
}

impl Remark {
    /// Create a remark
    pub fn new(line: usize, value: &str) -> Self {
        Self {
            line,
            value: value.to_string(),
        }
    }

    /// Parse a label cell as a remark if it starts with `#`
    pub fn parse(line: usize, label: &str) -> Option<Self> {
        label
            .trim_start()
            .strip_prefix('#')
            .map(|value| Self::new(line, value.trim()))
    }
}
