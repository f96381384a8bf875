//! Structure Renderer
//!
//! ASCII directory listing built straight from record names. A segment is a file when it
//! is the last one of some name and a folder when further segments follow it.

use crate::tree::builder::sibling_cmp;
use crate::types::path_segments;
use std::collections::{BTreeSet, HashMap};

const BRANCH: &str = "├── ";
const CORNER: &str = "└── ";
const BAR: &str = "│   ";
const BLANK: &str = "    ";

#[derive(Debug, Default)]
struct PathTrie {
    folders: HashMap<String, PathTrie>,
    files: BTreeSet<String>,
}

impl PathTrie {
    fn insert(&mut self, name: &str) {
        let segments: Vec<&str> = path_segments(name).collect();
        let Some((file, folders)) = segments.split_last() else {
            self.files.insert(name.to_string());
            return;
        };
        let mut node = self;
        for folder in folders {
            node = node.folders.entry(folder.to_string()).or_default();
        }
        node.files.insert(file.to_string());
    }

    fn sorted_entries(&self) -> Vec<(&str, Option<&PathTrie>)> {
        let mut entries: Vec<(&str, Option<&PathTrie>)> = self
            .folders
            .iter()
            .map(|(name, child)| (name.as_str(), Some(child)))
            .chain(self.files.iter().map(|name| (name.as_str(), None)))
            .collect();
        entries.sort_by(|a, b| sibling_cmp((a.0, a.1.is_some()), (b.0, b.1.is_some())));
        entries
    }

    fn write_lines(&self, prefix: &str, lines: &mut Vec<String>) {
        let entries = self.sorted_entries();
        let last = entries.len().saturating_sub(1);
        for (position, (name, folder)) in entries.into_iter().enumerate() {
            let is_last = position == last;
            let glyph = if is_last { CORNER } else { BRANCH };
            lines.push(format!("{prefix}{glyph}{name}"));
            if let Some(folder) = folder {
                let continuation = if is_last { BLANK } else { BAR };
                folder.write_lines(&format!("{prefix}{continuation}"), lines);
            }
        }
    }
}

/// Render the ASCII tree for a set of record names.
///
/// The first line is `.`; lines are joined with `\n` and carry no trailing newline. No
/// names renders as an empty string.
pub fn render_structure<'a, I>(names: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let mut root = PathTrie::default();
    let mut any = false;
    for name in names {
        root.insert(name);
        any = true;
    }
    if !any {
        return String::new();
    }
    let mut lines = vec![".".to_string()];
    root.write_lines("", &mut lines);
    lines.join("\n")
}
