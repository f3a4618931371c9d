use std::path::Path;

use anyhow::Result;

use crate::config::{APP_CONFIG_FILE_NAME, LocalizeOptions, load_app_config};
use crate::core::{
    DuplicateKey, ExtractedKeys, KeyExtractor,
    extract::extract_from_files,
    lexicon::read_lexicon,
    log::{Log, Verbosity},
    merge::merge,
    scan::scan_sources,
    strings::read_strings,
    writer::save_language,
};

/// A language whose artifacts could not be updated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageFailure {
    pub language: String,
    pub error: String,
}

#[derive(Debug, Default)]
pub struct LocalizeSummary {
    pub source_files: usize,
    pub keys: usize,
    /// Paths that could not be walked or read.
    pub skipped_paths: usize,
    /// Languages whose artifacts were rewritten, in configuration order.
    pub updated: Vec<String>,
    pub failures: Vec<LanguageFailure>,
    pub conflicts: Vec<DuplicateKey>,
}

impl LocalizeSummary {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Harvest keys under `project_root` and update every supported language
/// with the default options.
pub fn localize(project_root: &Path, verbose: bool) -> Result<LocalizeSummary> {
    let log = Log::new(Verbosity::from_flags(verbose, false));
    localize_with(project_root, &LocalizeOptions::default(), &log)
}

/// Harvest keys under `project_root` and update every supported language.
///
/// Only a malformed configuration file aborts the run. A language whose prior
/// artifacts are malformed, or whose artifacts cannot be written, is recorded
/// in `failures` and the remaining languages are still processed.
pub fn localize_with(
    project_root: &Path,
    options: &LocalizeOptions,
    log: &Log,
) -> Result<LocalizeSummary> {
    log.info("Starting localization");

    let config_result = load_app_config(project_root)?;
    if !config_result.from_file {
        log.info(format!(
            "Note: No {} found, no languages to update",
            APP_CONFIG_FILE_NAME
        ));
    }
    let languages = config_result.config.supported_languages();

    let scan_result = scan_sources(project_root, options, log);
    let extractor = KeyExtractor::new(&options.marker)?;
    let extraction = extract_from_files(&scan_result.files, &extractor, log);

    let skipped_paths = scan_result.skipped_count + extraction.skipped_count;
    if skipped_paths > 0 {
        log.warn(format!(
            "{} path(s) skipped due to access errors{}",
            skipped_paths,
            if log.is_verbose() {
                ""
            } else {
                " (use -v for details)"
            }
        ));
    }

    let mut summary = LocalizeSummary {
        source_files: scan_result.files.len(),
        keys: extraction.keys.len(),
        skipped_paths,
        ..Default::default()
    };

    for language in languages {
        match update_language(
            project_root,
            &language,
            options,
            &extraction.keys,
            log,
            &mut summary.conflicts,
        ) {
            Ok(()) => {
                log.status(format!("Updated {}", language));
                summary.updated.push(language);
            }
            Err(e) => {
                log.error(format!("Failed to update language '{}': {:#}", language, e));
                summary.failures.push(LanguageFailure {
                    language,
                    error: format!("{:#}", e),
                });
            }
        }
    }

    Ok(summary)
}

fn update_language(
    project_root: &Path,
    language: &str,
    options: &LocalizeOptions,
    keys: &ExtractedKeys,
    log: &Log,
    conflicts: &mut Vec<DuplicateKey>,
) -> Result<()> {
    let lexicon_path = options.lexicon_path(project_root, language);
    let strings_path = options.strings_path(project_root, language);

    log.info(format!("Reading existing file '{}'", lexicon_path.display()));
    let prior_lexicon = read_lexicon(&lexicon_path)?;
    for conflict in &prior_lexicon.conflicts {
        log.warn(format!(
            "Multiple translations for key \"{}\" in {} (groups \"{}\" and \"{}\"), keeping the first; please fix",
            conflict.key,
            lexicon_path.display(),
            conflict.first_group,
            conflict.duplicate_group
        ));
    }
    conflicts.extend(prior_lexicon.conflicts.iter().cloned());

    log.info(format!("Reading existing file '{}'", strings_path.display()));
    let prior_strings = read_strings(&strings_path)?;

    log.info("Merging...");
    let merged = merge(&prior_lexicon.entries, &prior_strings, keys);
    log.info(format!(
        "{} translated, {} untranslated, {} removed",
        merged.stats.translated, merged.stats.untranslated, merged.stats.pruned
    ));

    log.info(format!("Saving data for language '{}'", language));
    save_language(
        &options.language_dir(project_root, language),
        &merged.lexicon,
        &merged.strings,
    )
}
