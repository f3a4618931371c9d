use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};

use crate::config::{LEXICON_FILE_NAME, STRINGS_FILE_NAME};
use crate::core::{GroupedLexicon, StringsTable};

const STAGING_SUFFIX: &str = ".tmp";

/// Rewrite `lexicon.json` and `strings.json` in `language_dir`, creating it if needed.
///
/// The lexicon is indented for translators; the strings table is compact.
/// Both are sorted by key and end with a newline. Both files are staged next
/// to their targets first, so a failed write leaves the previous pair intact.
pub fn save_language(
    language_dir: &Path,
    lexicon: &GroupedLexicon,
    strings: &StringsTable,
) -> Result<()> {
    fs::create_dir_all(language_dir)
        .with_context(|| format!("Failed to create directory: {}", language_dir.display()))?;

    let lexicon_json =
        serde_json::to_string_pretty(lexicon).context("Failed to serialize lexicon")?;
    let strings_json = serde_json::to_string(strings).context("Failed to serialize strings")?;

    let staged = [
        (language_dir.join(LEXICON_FILE_NAME), lexicon_json),
        (language_dir.join(STRINGS_FILE_NAME), strings_json),
    ];
    let mut written = Vec::new();
    for (target, content) in &staged {
        let staging = staging_path(target);
        if let Err(e) = write_file(&staging, content) {
            for path in written.iter().chain([&staging]) {
                let _ = fs::remove_file(path);
            }
            return Err(e);
        }
        written.push(staging);
    }

    for ((target, _), staging) in staged.iter().zip(&written) {
        fs::rename(staging, target)
            .with_context(|| format!("Failed to write file: {}", target.display()))?;
    }

    Ok(())
}

fn staging_path(target: &Path) -> PathBuf {
    let mut name = target.file_name().unwrap_or_default().to_os_string();
    name.push(STAGING_SUFFIX);
    target.with_file_name(name)
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, format!("{}\n", content))
        .with_context(|| format!("Failed to write file: {}", path.display()))
}
