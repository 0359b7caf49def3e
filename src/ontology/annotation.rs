use serde::{Deserialize, Serialize};
use std::fmt;

use super::Comment;

/// An ontology term reference with optional free-form comments
///
/// Reference: <https://isa-specs.readthedocs.io/en/latest/isatab.html>
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OntologyAnnotation {
    /// Display name of the term (e.g., "X-ray diffraction")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Source ontology reference (e.g., "OBI")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub term_source_ref: Option<String>,

    /// Accession of the term in its source (e.g., "OBI:0000070")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub term_accession_number: Option<String>,

    /// Free-form comments attached to the annotation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comments: Option<Vec<Comment>>,
}

/// The three cell strings an annotation occupies in a spreadsheet block
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnnotationStrings {
    /// Term name cell
    pub term_name: String,
    /// Term accession number cell
    pub term_accession_number: String,
    /// Term source REF cell
    pub term_source_ref: String,
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

impl OntologyAnnotation {
    /// Create a new annotation with the given term name
    pub fn new(name: &str) -> Self {
        Self {
            name: Some(name.to_string()),
            ..Default::default()
        }
    }

    /// Set the term source reference
    pub fn with_term_source_ref(mut self, source: &str) -> Self {
        self.term_source_ref = Some(source.to_string());
        self
    }

    /// Set the term accession number
    pub fn with_term_accession_number(mut self, accession: &str) -> Self {
        self.term_accession_number = Some(accession.to_string());
        self
    }

    /// Append a comment
    pub fn with_comment(mut self, comment: Comment) -> Self {
        self.comments.get_or_insert_with(Vec::new).push(comment);
        self
    }

    /// Build an annotation from raw cell strings.
    ///
    /// Empty strings become `None`, and so does an empty comment list.
    pub fn from_string(
        name: &str,
        term_source_ref: &str,
        term_accession_number: &str,
        comments: Vec<Comment>,
    ) -> Self {
        Self {
            name: non_empty(name),
            term_source_ref: non_empty(term_source_ref),
            term_accession_number: non_empty(term_accession_number),
            comments: if comments.is_empty() {
                None
            } else {
                Some(comments)
            },
        }
    }

    /// Flatten the schema fields to cell strings, `None` becoming `""`
    pub fn to_string_triple(&self) -> AnnotationStrings {
        AnnotationStrings {
            term_name: self.name.clone().unwrap_or_default(),
            term_accession_number: self.term_accession_number.clone().unwrap_or_default(),
            term_source_ref: self.term_source_ref.clone().unwrap_or_default(),
        }
    }

    /// Comments attached to this annotation, empty when there are none
    pub fn comments(&self) -> &[Comment] {
        self.comments.as_deref().unwrap_or(&[])
    }

    /// True when no schema field and no comment is set
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.term_source_ref.is_none()
            && self.term_accession_number.is_none()
            && self.comments().is_empty()
    }
}

impl fmt::Display for OntologyAnnotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = self.name.as_deref().unwrap_or("");
        match (&self.term_source_ref, &self.term_accession_number) {
            (Some(source), Some(accession)) => write!(f, "{} [{}:{}]", name, source, accession),
            (None, Some(accession)) => write!(f, "{} [{}]", name, accession),
            (Some(source), None) => write!(f, "{} [{}]", name, source),
            (None, None) => write!(f, "{}", name),
        }
    }
}
