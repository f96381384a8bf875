//! Zip container decoding with the `zip` crate.

use super::{ArchiveDecoder, ArchiveEntry};
use crate::error::ArchiveError;
use std::io::{Cursor, Read};

/// `ArchiveDecoder` for zip containers
#[derive(Debug, Clone, Copy, Default)]
pub struct ZipDecoder;

impl ArchiveDecoder for ZipDecoder {
    fn open(&self, bytes: &[u8]) -> Result<Vec<ArchiveEntry>, ArchiveError> {
        let mut archive = zip::ZipArchive::new(Cursor::new(bytes))
            .map_err(|e| ArchiveError::Open(format!("Invalid or corrupt ZIP: {e}")))?;

        let mut entries = Vec::with_capacity(archive.len());
        for i in 0..archive.len() {
            // Raw access reads only the header, so the name survives a failing decompressor.
            let header = archive
                .by_index_raw(i)
                .map(|raw| (raw.name().to_string(), raw.is_dir()));
            let (path, is_directory) = match header {
                Ok(header) => header,
                Err(e) => {
                    // The central directory still names the entry; keep it as a failed read.
                    let path = archive
                        .name_for_index(i)
                        .map(str::to_string)
                        .unwrap_or_else(|| format!("entry-{i}"));
                    tracing::warn!(index = i, entry = %path, error = %e, "Unreadable zip header");
                    entries.push(ArchiveEntry {
                        is_directory: path.ends_with('/'),
                        path,
                        data: Err(ArchiveError::Entry {
                            index: i,
                            reason: e.to_string(),
                        }),
                    });
                    continue;
                }
            };

            let data = if is_directory {
                Ok(Vec::new())
            } else {
                read_entry(&mut archive, i, &path)
            };
            entries.push(ArchiveEntry {
                path,
                is_directory,
                data,
            });
        }
        Ok(entries)
    }
}

/// Upper bound on the buffer reserved up front from an entry's declared size
const MAX_PREALLOC: u64 = 1 << 20;

fn initial_capacity(declared: u64) -> usize {
    declared.min(MAX_PREALLOC) as usize
}

fn read_entry(
    archive: &mut zip::ZipArchive<Cursor<&[u8]>>,
    index: usize,
    path: &str,
) -> Result<Vec<u8>, ArchiveError> {
    let mut entry = archive.by_index(index).map_err(|e| ArchiveError::Entry {
        index,
        reason: e.to_string(),
    })?;
    let mut buf = Vec::with_capacity(initial_capacity(entry.size()));
    entry.read_to_end(&mut buf).map_err(|e| ArchiveError::Read {
        path: path.to_string(),
        reason: e.to_string(),
    })?;
    Ok(buf)
}
