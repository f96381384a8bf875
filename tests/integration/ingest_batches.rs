use std::fs;

use async_trait::async_trait;
use filestitch::config::{IngestConfig, StitchConfig};
use filestitch::ingest::{IngestPipeline, PathUploadSource, UploadBlob, UploadSource};
use filestitch::{IngestError, Session};
use tempfile::TempDir;

use crate::integration::support::{names, session_with, zip_bytes};

#[tokio::test]
async fn mixed_batch_keeps_input_order() {
    let mut session = Session::default();
    let archive = zip_bytes(&[
        ("project/", b""),
        ("project/src/", b""),
        ("project/src/main.rs", b"fn main() {}"),
        ("__MACOSX/project/src/._main.rs", b"\x00\x05"),
        ("project/Thumbs.db", b"\x00"),
        ("project/README.md", b"# Project"),
    ]);
    let mut batch = vec![
        UploadBlob::text("notes.txt", "first"),
        UploadBlob::bytes("project.ZIP", "", archive),
        UploadBlob::text("todo.txt", "last"),
    ];

    let added = session.ingest(&mut batch).await.unwrap();
    assert_eq!(added, 4);
    assert_eq!(
        names(&session),
        vec!["notes.txt", "project/src/main.rs", "project/README.md", "todo.txt"]
    );
    assert_eq!(
        session.structure(),
        ".\n├── project\n│   ├── src\n│   │   └── main.rs\n│   └── README.md\n├── notes.txt\n└── todo.txt"
    );
}

#[tokio::test]
async fn failures_become_placeholders_without_dropping_siblings() {
    let config = StitchConfig::default();
    let placeholders = config.ingest.placeholders.clone();
    let mut session = Session::new(&config);
    let archive = zip_bytes(&[("ok.txt", b"ok"), ("bad.txt", &[0xC0, 0xC1])]);
    let mut batch = vec![
        UploadBlob::bytes("good.zip", "application/zip", archive),
        UploadBlob::bytes("corrupt.zip", "application/zip", b"not a zip".to_vec()),
        UploadBlob::bytes("image.png", "image/png", vec![0x89, b'P', b'N', b'G', 0xFF]),
    ];

    session.ingest(&mut batch).await.unwrap();
    let contents: Vec<&str> = session.records().iter().map(|r| r.content.as_str()).collect();
    assert_eq!(
        contents,
        vec![
            "ok",
            placeholders.unreadable_entry.as_str(),
            placeholders.archive_open_failed.as_str(),
            placeholders.unreadable_file.as_str(),
        ]
    );
    assert_eq!(names(&session), vec!["ok.txt", "bad.txt", "corrupt.zip", "image.png"]);
}

#[tokio::test]
async fn entry_with_damaged_header_still_yields_a_record() {
    let mut archive = zip_bytes(&[("keep.txt", b"kept"), ("lost.txt", b"gone")]);
    let headers: Vec<usize> = archive
        .windows(4)
        .enumerate()
        .filter(|(_, w)| *w == b"PK\x03\x04")
        .map(|(i, _)| i)
        .collect();
    let second = headers[1];
    archive[second..second + 4].copy_from_slice(&[0, 0, 0, 0]);

    let placeholders = IngestConfig::default().placeholders;
    let pipeline = IngestPipeline::new(IngestConfig::default());
    let records = pipeline
        .ingest(&mut vec![UploadBlob::bytes("pair.zip", "", archive)])
        .await
        .unwrap();
    let names: Vec<&str> = records.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["keep.txt", "lost.txt"]);
    assert_eq!(records[0].content, "kept");
    assert_eq!(records[1].content, placeholders.unreadable_entry);
}

struct BrokenSource;

#[async_trait]
impl UploadSource for BrokenSource {
    async fn blobs(&mut self) -> Result<Vec<UploadBlob>, IngestError> {
        Err(IngestError::Source("enumeration failed".to_string()))
    }
}

#[tokio::test]
async fn catastrophic_failure_leaves_store_unchanged() {
    let mut session = session_with(&["a.txt", "b.txt"]);
    session.select_all();
    let before = session.document().to_string();

    let result = session.ingest(&mut BrokenSource).await;
    assert!(matches!(result, Err(IngestError::Source(_))));
    assert_eq!(names(&session), vec!["a.txt", "b.txt"]);
    assert_eq!(session.document(), before);
    assert_eq!(session.selection().len(), 2);
    assert!(!session.is_ingesting());
}

#[tokio::test]
async fn directory_upload_uses_relative_names() {
    let temp = TempDir::new().unwrap();
    let docs = temp.path().join("docs");
    fs::create_dir_all(docs.join("api")).unwrap();
    fs::write(docs.join("guide.md"), "guide").unwrap();
    fs::write(docs.join("api").join("index.md"), "index").unwrap();
    fs::write(temp.path().join("bundle.zip"), zip_bytes(&[("inner/x.txt", b"x")])).unwrap();

    let pipeline = IngestPipeline::new(IngestConfig::default());
    let mut source = PathUploadSource::new([docs, temp.path().join("bundle.zip")]);
    let records = pipeline.ingest(&mut source).await.unwrap();
    let names: Vec<&str> = records.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["docs/api/index.md", "docs/guide.md", "inner/x.txt"]);
}

#[tokio::test]
async fn pasted_text_is_appended_as_one_file() {
    let mut session = session_with(&["a.txt"]);
    let now = chrono::NaiveDate::from_ymd_opt(2025, 1, 2)
        .unwrap()
        .and_hms_opt(3, 4, 5)
        .unwrap();
    assert_eq!(session.paste("clipboard body", now).await.unwrap(), 1);
    assert_eq!(names(&session), vec!["a.txt", "pasted-20250102-030405.txt"]);
    assert_eq!(session.records()[1].content, "clipboard body");
}
