//! Reconciles prior translations with the live key set.
//!
//! For every extracted key the translation comes from, in order of preference:
//! the prior lexicon, the prior strings table (for projects that only kept a
//! strings file so far), or an empty placeholder. The file association always
//! comes from the live extraction. Keys no longer present in any source file
//! are dropped from both outputs.

use std::collections::BTreeSet;

use crate::core::{
    ExtractedKeys, GroupedLexicon, LexiconEntry, NormalizedLexicon, StringsTable,
    lexicon::denormalize,
};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MergeStats {
    pub translated: usize,
    pub untranslated: usize,
    /// Prior keys no longer found in the sources.
    pub pruned: usize,
}

#[derive(Debug, Default)]
pub struct MergeResult {
    pub lexicon: GroupedLexicon,
    pub strings: StringsTable,
    pub stats: MergeStats,
}

pub fn merge(
    prior_lexicon: &NormalizedLexicon,
    prior_strings: &StringsTable,
    extracted: &ExtractedKeys,
) -> MergeResult {
    let mut entries = NormalizedLexicon::new();

    for (key, files) in extracted {
        let value = prior_lexicon
            .get(key)
            .filter(|entry| !entry.value.trim().is_empty())
            .map(|entry| entry.value.as_str())
            .or_else(|| {
                prior_strings
                    .get(key)
                    .map(String::as_str)
                    .filter(|v| !v.is_empty())
            })
            .unwrap_or_default();

        entries.insert(
            key.clone(),
            LexiconEntry {
                value: value.to_string(),
                files: files.clone(),
            },
        );
    }

    let strings: StringsTable = entries
        .iter()
        .filter(|(_, entry)| !entry.value.is_empty())
        .map(|(key, entry)| (key.clone(), entry.value.clone()))
        .collect();

    let pruned = prior_lexicon
        .keys()
        .chain(prior_strings.keys())
        .filter(|key| !extracted.contains_key(*key))
        .collect::<BTreeSet<_>>()
        .len();

    let stats = MergeStats {
        translated: strings.len(),
        untranslated: entries.len() - strings.len(),
        pruned,
    };

    MergeResult {
        lexicon: denormalize(&entries),
        strings,
        stats,
    }
}
