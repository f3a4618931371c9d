//! Core localization pipeline.
//!
//! Data flows leaf-first through the submodules:
//!
//! 1. `scan`: find source files under the project root
//! 2. `extract`: harvest localization keys and the files they occur in
//! 3. `lexicon` / `strings`: load the prior per-language artifacts
//! 4. `merge`: reconcile prior translations with the live key set
//! 5. `writer`: rewrite both artifacts
//!
//! `localize` drives the whole sequence for every supported language.

use std::collections::{BTreeMap, BTreeSet};

pub mod extract;
pub mod lexicon;
pub mod localize;
pub mod log;
pub mod merge;
pub mod scan;
pub mod strings;
pub mod writer;

pub use extract::KeyExtractor;
pub use lexicon::{DuplicateKey, read_lexicon};
pub use localize::{LanguageFailure, LocalizeSummary, localize, localize_with};
pub use log::{Log, Verbosity};
pub use merge::{MergeResult, merge};
pub use scan::{SourceFile, scan_sources};
pub use strings::read_strings;
pub use writer::save_language;

/// Relative paths of the files a key occurs in. Sorted, so group labels are stable.
pub type FileSet = BTreeSet<String>;

/// Live key set: key -> files it was extracted from.
pub type ExtractedKeys = BTreeMap<String, FileSet>;

/// A translation together with the files its key occurs in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexiconEntry {
    pub value: String,
    pub files: FileSet,
}

/// In-memory lexicon: key -> entry.
pub type NormalizedLexicon = BTreeMap<String, LexiconEntry>;

/// On-disk lexicon: file-group label -> key -> translation.
pub type GroupedLexicon = BTreeMap<String, BTreeMap<String, String>>;

/// Runtime strings table: key -> non-empty translation.
pub type StringsTable = BTreeMap<String, String>;
