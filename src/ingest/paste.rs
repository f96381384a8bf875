//! Clipboard text turned into an upload.

use super::source::UploadBlob;
use chrono::NaiveDateTime;

/// Synthesize a text blob for pasted clipboard content.
///
/// The name is derived from `now` as `pasted-YYYYMMDD-HHMMSS.txt`. Blank pastes yield `None`.
pub fn paste_blob(text: &str, now: NaiveDateTime) -> Option<UploadBlob> {
    if text.trim().is_empty() {
        return None;
    }
    Some(UploadBlob::text(paste_file_name(now), text))
}

pub fn paste_file_name(now: NaiveDateTime) -> String {
    format!("pasted-{}.txt", now.format("%Y%m%d-%H%M%S"))
}
