//! Editor settings loaded from `settings.json`.
//!
//! Every field is optional; whatever a caller passes explicitly in
//! [`EditorProps`] wins over the file.

use super::shell::EditorProps;
use serde::{Deserialize, Serialize};
use std::io;
use std::path::{Path, PathBuf};

const SETTINGS_DIR: &str = ".codepane";
const SETTINGS_FILE: &str = "settings.json";
const LOG_DIR: &str = "logs";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditorSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    #[serde(
        default,
        alias = "codeDebounceInterval",
        skip_serializing_if = "Option::is_none"
    )]
    pub code_debounce_interval: Option<u64>,
    #[serde(default, alias = "className", skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,
}

impl EditorSettings {
    pub fn apply(&self, props: &mut EditorProps) {
        fill(&mut props.language, &self.language);
        fill(&mut props.theme, &self.theme);
        fill(&mut props.placeholder, &self.placeholder);
        fill(&mut props.class_name, &self.class_name);
        if props.code_debounce_interval.is_none() {
            props.code_debounce_interval = self.code_debounce_interval;
        }
    }
}

fn fill(slot: &mut Option<String>, value: &Option<String>) {
    if slot.is_none() {
        slot.clone_from(value);
    }
}

#[derive(Debug)]
pub enum SettingsError {
    Io(io::Error),
    Parse(serde_json::Error),
    NoSettingsDir,
}

impl std::fmt::Display for SettingsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SettingsError::Io(e) => write!(f, "IO error: {}", e),
            SettingsError::Parse(e) => write!(f, "Invalid settings: {}", e),
            SettingsError::NoSettingsDir => write!(f, "Cannot determine settings directory"),
        }
    }
}

impl std::error::Error for SettingsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SettingsError::Io(e) => Some(e),
            SettingsError::Parse(e) => Some(e),
            SettingsError::NoSettingsDir => None,
        }
    }
}

impl From<io::Error> for SettingsError {
    fn from(e: io::Error) -> Self {
        SettingsError::Io(e)
    }
}

impl From<serde_json::Error> for SettingsError {
    fn from(e: serde_json::Error) -> Self {
        SettingsError::Parse(e)
    }
}

pub fn settings_path() -> Option<PathBuf> {
    get_cache_dir().map(|dir| dir.join(SETTINGS_DIR).join(SETTINGS_FILE))
}

pub fn log_dir() -> Option<PathBuf> {
    get_cache_dir().map(|dir| dir.join(SETTINGS_DIR).join(LOG_DIR))
}

pub fn load_settings(path: &Path) -> Result<EditorSettings, SettingsError> {
    let data = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&data)?)
}

/// Settings from the default location. A missing file is not an error.
pub fn load_default_settings() -> Result<EditorSettings, SettingsError> {
    let path = settings_path().ok_or(SettingsError::NoSettingsDir)?;
    match load_settings(&path) {
        Err(SettingsError::Io(e)) if e.kind() == io::ErrorKind::NotFound => {
            Ok(EditorSettings::default())
        }
        other => other,
    }
}

/// Writes default settings to `path` unless the file exists.
pub fn ensure_settings_file_at(path: &Path) -> Result<(), SettingsError> {
    if let Some(parent) = path.parent() {
        if !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }
    if !path.exists() {
        let content = serde_json::to_string_pretty(&EditorSettings::default())?;
        std::fs::write(path, content)?;
    }
    Ok(())
}

pub fn ensure_settings_file() -> Result<PathBuf, SettingsError> {
    let path = settings_path().ok_or(SettingsError::NoSettingsDir)?;
    ensure_settings_file_at(&path)?;
    Ok(path)
}

fn get_cache_dir() -> Option<PathBuf> {
    #[cfg(target_os = "macos")]
    {
        return std::env::var("HOME")
            .ok()
            .map(|home| PathBuf::from(home).join("Library/Caches"));
    }

    #[cfg(target_os = "linux")]
    {
        if let Ok(xdg) = std::env::var("XDG_CACHE_HOME") {
            return Some(PathBuf::from(xdg));
        }
        return std::env::var("HOME")
            .ok()
            .map(|home| PathBuf::from(home).join(".cache"));
    }

    #[cfg(target_os = "windows")]
    {
        if let Ok(local) = std::env::var("LOCALAPPDATA") {
            return Some(PathBuf::from(local));
        }
        return std::env::var("APPDATA").ok().map(PathBuf::from);
    }

    #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
    {
        None
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/config.rs"]
mod tests;
