//! # Ontology Annotations
//!
//! Value types for the ontology-annotated records carried by ISA-Tab
//! investigation blocks, and the string conventions used to move them in and
//! out of spreadsheet cells.
//!
//! ## Cell Conventions
//!
//! - Empty cells decode to `None`; `None` encodes back to an empty cell.
//! - Comment rows are labelled `Comment[<key>]`.
//! - Remark rows start with `#` and are kept out of band with their line number.

mod annotation;
mod comment;


pub use annotation::{AnnotationStrings, OntologyAnnotation};
pub use comment::{Comment, CommentKey, Remark};

/// Errors that can occur while (de)serializing annotations as JSON
#[derive(Debug, thiserror::Error)]
pub enum JsonError {
    /// JSON serialization/deserialization error
    #[error("JSON serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Serialize a list of annotations to pretty-printed JSON
pub fn to_json(annotations: &[OntologyAnnotation]) -> Result<String, JsonError> {
    Ok(serde_json::to_string_pretty(annotations)?)
}

/// Deserialize a list of annotations from JSON
pub fn from_json(json: &str) -> Result<Vec<OntologyAnnotation>, JsonError> {
    Ok(serde_json::from_str(json)?)
}
