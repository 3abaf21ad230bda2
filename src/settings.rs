//! Settings for Logbook CLI
//!
//! The resolved settings record consumed by the rendering engine, plus the
//! TOML loader. Settings live in an explicit `--settings` file or in
//! `~/.config/logbook/settings.toml`; a missing file means defaults.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_SECTION_HEADING: &str = "## Logbook";
pub const DEFAULT_TAG_PREFIX: &str = "logbook/";
pub const DEFAULT_CANCELLED_MARK: &str = "c";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Failed to parse settings: {0}")]
    Parse(String),
}

/// Resolved rendering settings
///
/// A flat record with no hidden defaults inside the engine: every knob is
/// listed here and the engine consumes it as-is.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Markdown heading opening the rendered section
    pub section_heading: String,

    /// Prefix inserted between `#` and each slugged tag
    pub tag_prefix: String,

    /// Checkbox mark for cancelled tasks
    pub cancelled_mark: String,

    /// Include task note bodies in the output
    pub include_notes: bool,

    /// Group by project name when a task has no area
    pub group_by_project: bool,

    /// Merge consecutive empty lines in the final output
    pub collapse_empty_lines: bool,

    /// Insert an empty line after the section heading
    pub newline_after_section_heading: bool,

    /// Insert an empty line before each group heading
    pub newline_before_headings: bool,

    /// Insert an empty line after each group heading
    pub newline_after_headings: bool,

    /// Indentation unit for notes and subtasks
    pub tab: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            section_heading: DEFAULT_SECTION_HEADING.to_string(),
            tag_prefix: DEFAULT_TAG_PREFIX.to_string(),
            cancelled_mark: DEFAULT_CANCELLED_MARK.to_string(),
            include_notes: true,
            group_by_project: false,
            collapse_empty_lines: false,
            newline_after_section_heading: false,
            newline_before_headings: false,
            newline_after_headings: false,
            tab: "\t".to_string(),
        }
    }
}

impl Settings {
    /// Returns the global settings directory
    pub fn global_dir() -> Option<PathBuf> {
        ProjectDirs::from("dev", "logbook", "logbook-cli")
            .map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Loads settings from an explicit path, or the global location
    ///
    /// A missing file yields defaults; a file that exists but fails to parse
    /// is an error.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load_file(path),
            None => match Self::global_dir() {
                Some(dir) => {
                    let path = dir.join("settings.toml");
                    if path.exists() {
                        Self::load_file(&path)
                    } else {
                        Ok(Self::default())
                    }
                }
                None => Ok(Self::default()),
            },
        }
    }

    /// Loads settings from a specific file
    pub fn load_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings: {}", path.display()))?;

        toml::from_str(&content)
            .map_err(|e| SettingsError::Parse(e.to_string()))
            .with_context(|| format!("Failed to parse settings: {}", path.display()))
    }

    /// Saves settings to a specific file
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize settings")?;

        fs::write(path, content)
            .with_context(|| format!("Failed to write settings: {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn defaults_match_plugin_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.section_heading, "## Logbook");
        assert_eq!(settings.tag_prefix, "logbook/");
        assert_eq!(settings.cancelled_mark, "c");
        assert!(settings.include_notes);
        assert!(!settings.collapse_empty_lines);
        assert_eq!(settings.tab, "\t");
    }

    #[test]
    fn parse_partial_toml_fills_defaults() {
        let toml = r##"
section_heading = "# Done"
group_by_project = true
"##;

        let settings: Settings = toml::from_str(toml).unwrap();
        assert_eq!(settings.section_heading, "# Done");
        assert!(settings.group_by_project);
        assert_eq!(settings.tag_prefix, "logbook/");
    }

    #[test]
    fn save_and_load_roundtrip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.toml");

        let mut settings = Settings::default();
        settings.cancelled_mark = "~".to_string();
        settings.collapse_empty_lines = true;
        settings.save(&path).unwrap();

        let loaded = Settings::load_file(&path).unwrap();
        assert_eq!(loaded.cancelled_mark, "~");
        assert!(loaded.collapse_empty_lines);
    }

    #[test]
    fn load_missing_explicit_path_is_error() {
        let dir = TempDir::new().unwrap();
        let result = Settings::load(Some(&dir.path().join("nope.toml")));
        assert!(result.is_err());
    }

    #[test]
    fn parse_error_is_surfaced() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.toml");
        fs::write(&path, "section_heading = [broken").unwrap();

        assert!(Settings::load_file(&path).is_err());
    }
}
