use std::path::{Component, Path, PathBuf};

use walkdir::{DirEntry, WalkDir};

use crate::config::LocalizeOptions;
use crate::core::log::Log;

/// A source file found under the project root.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct SourceFile {
    /// Path relative to the project root, `/`-separated.
    pub relative_path: String,
    pub absolute_path: PathBuf,
}

/// Result of scanning files.
#[derive(Debug, Default)]
pub struct ScanResult {
    pub files: Vec<SourceFile>,
    pub skipped_count: usize,
}

pub fn scan_sources(root: &Path, options: &LocalizeOptions, log: &Log) -> ScanResult {
    log.info("Reading file list");

    let mut files = Vec::new();
    let mut skipped_count = 0;

    let walker = WalkDir::new(root)
        .into_iter()
        .filter_entry(|entry| entry.depth() == 0 || !is_pruned_dir(entry, &options.reserved_dirs));

    for entry in walker {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                skipped_count += 1;
                if log.is_verbose() {
                    log.warn(format!("Cannot access path: {}", e));
                }
                continue;
            }
        };

        // `Path::is_file` follows symlinks, so linked sources are scanned too.
        if !entry.path().is_file() || !has_extension(entry.path(), &options.extension) {
            continue;
        }

        let Ok(relative) = entry.path().strip_prefix(root) else {
            continue;
        };
        files.push(SourceFile {
            relative_path: to_slash_path(relative),
            absolute_path: entry.path().to_path_buf(),
        });
    }

    ScanResult {
        files,
        skipped_count,
    }
}

/// Hidden directories and administrative directories are never visited.
fn is_pruned_dir(entry: &DirEntry, reserved_dirs: &[String]) -> bool {
    if !entry.file_type().is_dir() {
        return false;
    }
    let name = entry.file_name().to_string_lossy();
    name.starts_with('.') || reserved_dirs.iter().any(|reserved| reserved.as_str() == name.as_ref())
}

fn has_extension(path: &Path, extension: &str) -> bool {
    path.extension().and_then(|e| e.to_str()) == Some(extension)
}

fn to_slash_path(path: &Path) -> String {
    path.components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}
