use std::{
    collections::HashSet,
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Project configuration listing the supported languages.
pub const APP_CONFIG_FILE_NAME: &str = "framework_config.json";

/// Application manifest; its presence marks an application directory.
pub const APP_MANIFEST_FILE_NAME: &str = "appinfo.json";

pub const DEFAULT_MARKER: &str = "$L";
pub const DEFAULT_EXTENSION: &str = "js";
pub const DEFAULT_RESOURCES_DIR: &str = "resources";
pub const LEXICON_FILE_NAME: &str = "lexicon.json";
pub const STRINGS_FILE_NAME: &str = "strings.json";

/// Administrative directories that are never descended into.
pub const RESERVED_DIR_NAMES: &[&str] = &["CVS"];

#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppConfig {
    #[serde(default)]
    pub languages: Vec<String>,
}

impl AppConfig {
    /// Supported languages in declaration order, each listed once.
    pub fn supported_languages(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        self.languages
            .iter()
            .filter(|lang| seen.insert(lang.as_str()))
            .cloned()
            .collect()
    }
}

/// Result of loading configuration.
#[derive(Debug)]
pub struct ConfigLoadResult {
    pub config: AppConfig,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_app_config(project_root: &Path) -> Result<ConfigLoadResult> {
    let path = project_root.join(APP_CONFIG_FILE_NAME);
    if !path.exists() {
        return Ok(ConfigLoadResult {
            config: AppConfig::default(),
            from_file: false,
        });
    }

    let content = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    let config: AppConfig = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
    Ok(ConfigLoadResult {
        config,
        from_file: true,
    })
}

pub fn is_app_dir(dir: &Path) -> bool {
    dir.join(APP_MANIFEST_FILE_NAME).is_file()
}

/// Parameters of a harvest run.
#[derive(Debug, Clone)]
pub struct LocalizeOptions {
    /// Name of the localization call, e.g. `$L`.
    pub marker: String,
    /// Extension (without dot) of the source files to scan.
    pub extension: String,
    pub reserved_dirs: Vec<String>,
    pub resources_dir: String,
}

impl Default for LocalizeOptions {
    fn default() -> Self {
        Self {
            marker: DEFAULT_MARKER.to_string(),
            extension: DEFAULT_EXTENSION.to_string(),
            reserved_dirs: RESERVED_DIR_NAMES.iter().map(|d| d.to_string()).collect(),
            resources_dir: DEFAULT_RESOURCES_DIR.to_string(),
        }
    }
}

impl LocalizeOptions {
    pub fn language_dir(&self, project_root: &Path, language: &str) -> PathBuf {
        project_root.join(&self.resources_dir).join(language)
    }

    pub fn lexicon_path(&self, project_root: &Path, language: &str) -> PathBuf {
        self.language_dir(project_root, language)
            .join(LEXICON_FILE_NAME)
    }

    pub fn strings_path(&self, project_root: &Path, language: &str) -> PathBuf {
        self.language_dir(project_root, language)
            .join(STRINGS_FILE_NAME)
    }
}
