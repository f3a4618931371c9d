//! Localization key harvesting.
//!
//! Two call shapes are recognized, both anchored on the configured marker
//! (`$L` by default):
//!
//! - `$L("key text")`: the single string argument is the key.
//! - `$L({ value: "...", key: "key text" })`: only the `key:` field is taken,
//!   wherever it appears among the other fields. Fields are split on commas
//!   outside quoted strings, and the match never runs past the call's `})`.
//!
//! Strings may be single- or double-quoted, may span lines and may contain
//! backslash-escaped quotes. This is a lexical scan, not a parser: keys built
//! from expressions (`$L(prefix + name)`), nested calls and object arguments
//! holding nested objects are not extracted,
//! and text that merely resembles a marker is skipped without complaint.

use std::{fs, sync::LazyLock};

use anyhow::{Context, Result};
use regex::Regex;

use crate::core::ExtractedKeys;
use crate::core::log::Log;
use crate::core::scan::SourceFile;

// Group 1: double-quoted body, group 2: single-quoted body.
// A quote preceded by a backslash never closes the string.
const QUOTED_STRING: &str = r#"(?:"((?:[^"\\]|\\.)*)"|'((?:[^'\\]|\\.)*)')"#;

// Whole quoted strings, field separators, and runs of anything else.
static FIELD_TOKEN_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?s)"(?:[^"\\]|\\.)*"|'(?:[^'\\]|\\.)*'|,|[^"',]+"#).unwrap()
});

static KEY_FIELD_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r#"(?s)^\s*(?:key|"key"|'key')\s*:\s*{QUOTED_STRING}\s*$"#
    ))
    .unwrap()
});

pub struct KeyExtractor {
    string_call: Regex,
    object_call: Regex,
}

impl KeyExtractor {
    pub fn new(marker: &str) -> Result<Self> {
        let marker = regex::escape(marker);
        let string_call = Regex::new(&format!(r"(?s){marker}\(\s*{QUOTED_STRING}\s*\)"))
            .with_context(|| format!("Invalid marker pattern: {}", marker))?;
        // The body holds quoted strings or any character but an unquoted `}`.
        let object_call = Regex::new(&format!(
            r#"(?s){marker}\(\s*\{{(?P<body>(?:"(?:[^"\\]|\\.)*"|'(?:[^'\\]|\\.)*'|[^"'}}])*)\}}\s*\)"#
        ))
        .with_context(|| format!("Invalid marker pattern: {}", marker))?;

        Ok(Self {
            string_call,
            object_call,
        })
    }

    /// Keys found in `source`, trimmed, in match order (object calls first).
    pub fn extract_keys(&self, source: &str) -> Vec<String> {
        let object_keys = self
            .object_call
            .captures_iter(source)
            .filter_map(|caps| caps.name("body"))
            .filter_map(|body| bound_key(body.as_str()));
        let string_keys = self
            .string_call
            .captures_iter(source)
            .filter_map(|caps| caps.get(1).or_else(|| caps.get(2)))
            .map(|m| m.as_str());

        object_keys
            .chain(string_keys)
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .map(String::from)
            .collect()
    }

    /// Record every key in `source` as occurring in `relative_path`.
    pub fn collect(&self, source: &str, relative_path: &str, keys: &mut ExtractedKeys) {
        for key in self.extract_keys(source) {
            keys.entry(key)
                .or_default()
                .insert(relative_path.to_string());
        }
    }
}

/// Value of the first top-level `key:` field of an object literal body.
fn bound_key(body: &str) -> Option<&str> {
    let separators = FIELD_TOKEN_REGEX
        .find_iter(body)
        .filter(|token| token.as_str() == ",")
        .map(|token| (token.start(), token.end()))
        .chain([(body.len(), body.len())]);

    let mut start = 0;
    for (end, next) in separators {
        let field = KEY_FIELD_REGEX.captures(&body[start..end]);
        if let Some(key) = field.and_then(|caps| caps.get(1).or_else(|| caps.get(2))) {
            return Some(key.as_str());
        }
        start = next;
    }
    None
}

/// Result of harvesting keys from a set of files.
#[derive(Debug, Default)]
pub struct ExtractionResult {
    pub keys: ExtractedKeys,
    /// Files that could not be read as UTF-8 text.
    pub skipped_count: usize,
}

pub fn extract_from_files(
    files: &[SourceFile],
    extractor: &KeyExtractor,
    log: &Log,
) -> ExtractionResult {
    let mut result = ExtractionResult::default();

    for file in files {
        log.info(format!("Processing {}", file.relative_path));
        match fs::read_to_string(&file.absolute_path) {
            Ok(source) => extractor.collect(&source, &file.relative_path, &mut result.keys),
            Err(e) => {
                result.skipped_count += 1;
                log.warn(format!("Cannot read {}: {}", file.relative_path, e));
            }
        }
    }

    result
}
