//! Translator-facing lexicon: `{"a.js, b.js": {"key": "translation"}}`.
//!
//! On disk, keys are grouped under a label listing the files they occur in.
//! In memory, the lexicon is normalized to one entry per key.

use std::{collections::HashMap, fs, path::Path, sync::LazyLock};

use anyhow::{Context, Result, bail};
use regex::Regex;
use serde_json::Value;

use crate::core::{FileSet, GroupedLexicon, LexiconEntry, NormalizedLexicon};

pub const GROUP_SEPARATOR: &str = ", ";

static GROUP_SPLIT_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r",\s*").unwrap());

/// A key listed under more than one file group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateKey {
    pub key: String,
    /// Group whose translation was kept.
    pub first_group: String,
    /// Group whose translation was ignored.
    pub duplicate_group: String,
}

#[derive(Debug, Default)]
pub struct LexiconReadResult {
    pub entries: NormalizedLexicon,
    pub conflicts: Vec<DuplicateKey>,
}

/// Read a lexicon file into its normalized form.
///
/// A missing file is an empty lexicon. Untranslated (blank) values are dropped.
/// A key found under several groups is reported in `conflicts`; the first
/// group in document order keeps it.
pub fn read_lexicon(path: &Path) -> Result<LexiconReadResult> {
    if !path.exists() {
        return Ok(LexiconReadResult::default());
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read JSON file: {}", path.display()))?;
    let json: Value = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse JSON file: {}", path.display()))?;

    normalize(&json).with_context(|| format!("Malformed lexicon: {}", path.display()))
}

fn normalize(json: &Value) -> Result<LexiconReadResult> {
    let Value::Object(groups) = json else {
        bail!("root must be an object");
    };

    let mut result = LexiconReadResult::default();
    // Label of the group each retained key came from.
    let mut origins: HashMap<String, String> = HashMap::new();

    for (label, translations) in groups {
        let Value::Object(translations) = translations else {
            bail!("group \"{}\" must be an object", label);
        };
        let files = split_group_label(label);

        for (key, value) in translations {
            let Value::String(value) = value else {
                bail!("value of \"{}\" in group \"{}\" must be a string", key, label);
            };
            if value.trim().is_empty() {
                continue;
            }

            if let Some(first_group) = origins.get(key) {
                result.conflicts.push(DuplicateKey {
                    key: key.clone(),
                    first_group: first_group.clone(),
                    duplicate_group: label.clone(),
                });
                continue;
            }

            origins.insert(key.clone(), label.clone());
            result.entries.insert(
                key.clone(),
                LexiconEntry {
                    value: value.clone(),
                    files: files.clone(),
                },
            );
        }
    }

    Ok(result)
}

pub fn split_group_label(label: &str) -> FileSet {
    GROUP_SPLIT_REGEX
        .split(label)
        .map(str::trim)
        .filter(|file| !file.is_empty())
        .map(String::from)
        .collect()
}

pub fn group_label(files: &FileSet) -> String {
    files
        .iter()
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(GROUP_SEPARATOR)
}

/// Group keys sharing an identical file set under one label.
pub fn denormalize(entries: &NormalizedLexicon) -> GroupedLexicon {
    let mut grouped = GroupedLexicon::new();
    for (key, entry) in entries {
        grouped
            .entry(group_label(&entry.files))
            .or_default()
            .insert(key.clone(), entry.value.clone());
    }
    grouped
}
