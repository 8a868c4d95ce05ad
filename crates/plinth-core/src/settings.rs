use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{PlinthError, Result};
use crate::{lenient, Emphasis, Language, Quality, Style};

/// Resolve the Plinth home directory (`$PLINTH_HOME`, else `~/.plinth/`).
pub fn plinth_dir() -> PathBuf {
    if let Some(home) = std::env::var_os("PLINTH_HOME") {
        return PathBuf::from(home);
    }
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".plinth")
}

pub fn settings_path() -> PathBuf {
    plinth_dir().join("settings.json")
}

/// Defaults applied to compiler configs when a caller leaves a selector out.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ConfigDefaults {
    #[serde(default, deserialize_with = "lenient")]
    pub style: Style,
    #[serde(default, deserialize_with = "lenient")]
    pub emphasis: Emphasis,
    #[serde(default, deserialize_with = "lenient")]
    pub quality: Quality,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    #[serde(default, deserialize_with = "lenient")]
    pub language: Language,
    /// Verdict score below which callers should refuse to generate.
    #[serde(default = "default_min_score")]
    pub min_score: u8,
    /// Images requested for a single-intent generation.
    #[serde(default = "default_variations")]
    pub variations: u32,
    /// Sub-intents used in multi-intent mode (one image each).
    #[serde(default = "default_intent_count")]
    pub intent_count: usize,
    #[serde(default)]
    pub defaults: ConfigDefaults,
}

fn default_min_score() -> u8 {
    40
}

fn default_variations() -> u32 {
    2
}

fn default_intent_count() -> usize {
    4
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            language: Language::default(),
            min_score: default_min_score(),
            variations: default_variations(),
            intent_count: default_intent_count(),
            defaults: ConfigDefaults::default(),
        }
    }
}

impl Settings {
    pub fn validate(&self) -> Result<()> {
        if self.min_score > 100 {
            return Err(PlinthError::invalid("minScore", "must be between 0 and 100"));
        }
        if self.variations == 0 {
            return Err(PlinthError::invalid("variations", "must be at least 1"));
        }
        if !(1..=4).contains(&self.intent_count) {
            return Err(PlinthError::invalid("intentCount", "must be between 1 and 4"));
        }
        Ok(())
    }
}

/// Read and validate settings from an explicit path.
pub fn load_settings_from(path: &Path) -> Result<Settings> {
    let raw = fs::read_to_string(path)?;
    let settings: Settings = serde_json::from_str(&raw)?;
    settings.validate()?;
    Ok(settings)
}

/// Read settings from the default location. Missing or invalid files yield
/// the defaults.
pub fn read_settings() -> Settings {
    let path = settings_path();
    if !path.exists() {
        return Settings::default();
    }
    load_settings_from(&path).unwrap_or_else(|e| {
        log::warn!("ignoring settings at {}: {}", path.display(), e);
        Settings::default()
    })
}

/// Validate and write settings to an explicit path.
///
/// Uses a temp file + rename so a concurrent reader never sees a truncated file.
pub fn write_settings_to(path: &Path, settings: &Settings) -> Result<()> {
    settings.validate()?;
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    let json = serde_json::to_string_pretty(settings)?;
    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, json)?;
    if let Err(e) = fs::rename(&tmp, path) {
        let _ = fs::remove_file(&tmp);
        return Err(e.into());
    }
    Ok(())
}

pub fn write_settings(settings: &Settings) -> Result<()> {
    write_settings_to(&settings_path(), settings)
}
