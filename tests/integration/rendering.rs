use chrono::NaiveDate;
use filestitch::render::{download_file_name, render_document, render_structure, DocumentStats};
use filestitch::FileRecord;

use crate::integration::support::session_with;

#[test]
fn document_matches_reference_layout() {
    let records = vec![FileRecord::new("x.txt", "1"), FileRecord::new("y.txt", "2")];
    assert_eq!(
        render_document(&records, "FILE: {name}", "{name}"),
        "FILE: x.txt\n1\n\nFILE: y.txt\n2"
    );
}

#[test]
fn every_token_occurrence_is_replaced() {
    let records = vec![FileRecord::new("a/b.rs", "body")];
    assert_eq!(
        render_document(&records, "<<{name}>> {name}\n---", "{name}"),
        "<<a/b.rs>> a/b.rs\n---\nbody"
    );
}

#[test]
fn structure_matches_reference_layout() {
    assert_eq!(
        render_structure(["a/b.txt", "a/c.txt", "z.txt"]),
        ".\n├── a\n│   ├── b.txt\n│   └── c.txt\n└── z.txt"
    );
}

#[test]
fn structure_uses_blank_prefix_under_last_sibling() {
    assert_eq!(
        render_structure(["top.txt", "z/y/x.txt", "z/w.txt"]),
        ".\n├── z\n│   ├── y\n│   │   └── x.txt\n│   └── w.txt\n└── top.txt"
    );
    assert_eq!(
        render_structure(["only/deep/file"]),
        ".\n└── only\n    └── deep\n        └── file"
    );
}

#[test]
fn session_document_follows_template_and_order() {
    let mut session = session_with(&["one", "two"]);
    session.set_template("## {name}");
    session.move_down(0).unwrap();
    assert_eq!(session.document(), "## two\ntwo\n\n## one\none");
    assert_eq!(
        session.stats(),
        DocumentStats {
            files: 2,
            characters: 22,
            lines: 5,
        }
    );
}

#[test]
fn download_name_is_dated() {
    let date = NaiveDate::from_ymd_opt(2024, 12, 31).unwrap();
    assert_eq!(download_file_name(date), "merged-2024-12-31.txt");
}
