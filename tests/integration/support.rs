use std::io::{Cursor, Write};

use filestitch::{FileRecord, Session};

/// Build an in-memory zip archive with the given entries, in order.
pub fn zip_bytes(entries: &[(&str, &[u8])]) -> Vec<u8> {
    let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
    let options = zip::write::SimpleFileOptions::default();
    for (name, content) in entries {
        if name.ends_with('/') {
            writer.add_directory(name.to_string(), options).unwrap();
        } else {
            writer.start_file(name.to_string(), options).unwrap();
            writer.write_all(content).unwrap();
        }
    }
    writer.finish().unwrap().into_inner()
}

/// Records whose content equals their name.
pub fn records(names: &[&str]) -> Vec<FileRecord> {
    names.iter().map(|n| FileRecord::new(*n, *n)).collect()
}

pub fn session_with(names: &[&str]) -> Session {
    let mut session = Session::default();
    session.append(records(names));
    session
}

pub fn names(session: &Session) -> Vec<String> {
    session.store().names().map(str::to_string).collect()
}
