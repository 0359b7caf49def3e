//! Integration tests for isa-descriptors
//!
//! These tests run design descriptor blocks through the full pipeline from
//! TSV text to annotations and back.

use isa_descriptors::descriptors::{self, LABELS};
use isa_descriptors::ontology::{Comment, OntologyAnnotation, Remark};
use isa_descriptors::table::TableError;
use isa_descriptors::tsv;
use std::fs::{self, File};
use tempfile::tempdir;

const INVESTIGATION: &str = "STUDY DESIGN DESCRIPTORS
Study Design Type\tX-ray diffraction\tmutagenesis
Study Design Type Term Accession Number\thttp://purl.obolibrary.org/obo/OBI_0000070\tOBI:0001
Study Design Type Term Source REF\tOBI\tOBI
# checked against OBI release
Comment[Unit]\t\tdays
STUDY PUBLICATIONS
Study PubMed ID\t12345
";

/// Decode a block embedded in a larger investigation file
#[test]
fn test_decode_block_from_investigation() {
    let rows = tsv::read_rows(INVESTIGATION.as_bytes()).unwrap();
    let mut cursor = rows.into_iter();

    // The section header is consumed by the caller before the block
    let header = cursor.next().unwrap();
    assert_eq!(header[0].1, "STUDY DESIGN DESCRIPTORS");

    let block = descriptors::from_rows(Some("Study Design"), 1, &mut cursor).unwrap();

    assert_eq!(block.next_label.as_deref(), Some("STUDY PUBLICATIONS"));
    assert_eq!(block.line_number, 7);
    assert_eq!(block.remarks, vec![Remark::new(5, "checked against OBI release")]);
    assert_eq!(block.designs.len(), 2);

    let xray = &block.designs[0];
    assert_eq!(xray.name.as_deref(), Some("X-ray diffraction"));
    assert_eq!(xray.term_source_ref.as_deref(), Some("OBI"));
    assert_eq!(
        xray.term_accession_number.as_deref(),
        Some("http://purl.obolibrary.org/obo/OBI_0000070")
    );
    assert_eq!(xray.comments(), &[Comment::from_string("Unit", "")]);

    let mutagenesis = &block.designs[1];
    assert_eq!(mutagenesis.term_accession_number.as_deref(), Some("OBI:0001"));
    assert_eq!(mutagenesis.comments(), &[Comment::new("Unit", "days")]);

    // The next section is still in the stream
    let next = cursor.next().unwrap();
    assert_eq!(next[0].1, "Study PubMed ID");
}

/// Encode to a TSV file and read it back
#[test]
fn test_file_roundtrip() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("designs.tsv");

    let designs = vec![
        OntologyAnnotation::new("X-ray"),
        OntologyAnnotation::new("mutagenesis")
            .with_term_source_ref("OBI")
            .with_term_accession_number("OBI:0001")
            .with_comment(Comment::new("Unit", "days"))
            .with_comment(Comment::new("Performer", "lab 2")),
    ];

    let file = File::create(&path).unwrap();
    tsv::write_rows(file, descriptors::to_rows(Some("Study Design"), &designs)).unwrap();

    let text = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 5);
    assert_eq!(lines[0], "Study Design Type\tX-ray\tmutagenesis");
    assert!(lines[1].starts_with("Study Design Type Term Accession Number"));
    assert!(lines[2].starts_with("Study Design Type Term Source REF"));
    assert_eq!(lines[3], "Comment[Unit]\t\tdays");
    assert_eq!(lines[4], "Comment[Performer]\t\tlab 2");

    let rows = tsv::read_rows_from_path(&path).unwrap();
    let mut cursor = rows.into_iter();
    let block = descriptors::from_rows(Some("Study Design"), 0, &mut cursor).unwrap();

    assert_eq!(block.next_label, None);
    assert_eq!(block.line_number, 5);
    assert_eq!(block.designs[1], designs[1]);
    assert_eq!(block.designs[0].name.as_deref(), Some("X-ray"));
}

/// A block with only label rows still yields one comment-only descriptor
#[test]
fn test_label_only_block() {
    let text = "Type\nType Term Accession Number\nType Term Source REF\nComment[Unit]\n";
    let rows = tsv::read_rows(text.as_bytes()).unwrap();
    let mut cursor = rows.into_iter();

    let block = descriptors::from_rows(None, 0, &mut cursor).unwrap();

    assert_eq!(block.designs.len(), 1);
    assert_eq!(block.designs[0].name, None);
    assert_eq!(block.designs[0].comments(), &[Comment::from_string("Unit", "")]);
}

/// Canonical rows are emitted even when nothing fills them
#[test]
fn test_empty_encode_emits_labels() {
    let rows: Vec<_> = descriptors::to_rows(None, &[]).collect();
    let labels: Vec<&str> = rows.iter().map(|r| r[0].1.as_str()).collect();

    assert_eq!(labels, LABELS.to_vec());
    assert!(rows.iter().all(|r| r.len() == 1));
}

/// Scanner failures reach the caller unchanged
#[test]
fn test_malformed_comment_propagates() {
    let text = "Type\tX-ray\nComment[Unit\tdays\n";
    let rows = tsv::read_rows(text.as_bytes()).unwrap();
    let mut cursor = rows.into_iter();

    let err = descriptors::from_rows(None, 0, &mut cursor).unwrap_err();
    match err {
        TableError::Block { line, source } => {
            assert_eq!(line, 0);
            assert!(matches!(*source, TableError::MalformedCommentKey { line: 2, .. }));
        }
        other => panic!("unexpected error: {other}"),
    }
}
