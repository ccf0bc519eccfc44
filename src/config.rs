// src/config.rs
use anyhow::{Context as _, Result};
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const CONFIG_FILE_NAME: &str = "pagegen.toml";

/// Resolved settings for one page generation run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub inputs: Inputs,
    pub line_counter: LineCounterConfig,
    pub render: RenderConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Inputs {
    pub template: PathBuf,
    pub source_listing: PathBuf,
    pub minified_bundle: PathBuf,
    pub gzip_bundle: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LineCounterConfig {
    pub program: String,
    pub args: Vec<String>,
    /// File handed to the counter; the JSX source rather than the listing.
    pub target: PathBuf,
    /// Zero disables the limit.
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderConfig {
    pub strict: bool,
}

impl Default for Inputs {
    fn default() -> Self {
        Self {
            template: PathBuf::from("Sample.html.in"),
            source_listing: PathBuf::from("Editor.jsx.bin"),
            minified_bundle: PathBuf::from("Editor.js"),
            gzip_bundle: PathBuf::from("Editor.js.gz"),
        }
    }
}

impl Default for LineCounterConfig {
    fn default() -> Self {
        Self {
            program: String::from("cloc"),
            args: vec![
                String::from("--quiet"),
                String::from("--csv"),
                String::from("--force-lang=JavaScript,jsx"),
            ],
            target: PathBuf::from("../src/Editor.jsx"),
            timeout_secs: 60,
        }
    }
}

impl LineCounterConfig {
    #[inline]
    #[must_use]
    pub const fn timeout(&self) -> Option<Duration> {
        if self.timeout_secs == 0 {
            None
        } else {
            Some(Duration::from_secs(self.timeout_secs))
        }
    }
}

impl Config {
    /// Parses a config file and anchors its relative paths at the file's
    /// directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid TOML for
    /// this schema.
    #[inline]
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let mut config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        if let Some(base) = path.parent() {
            config.rebase(base);
        }
        Ok(config)
    }

    fn rebase(&mut self, base: &Path) {
        for path in [
            &mut self.inputs.template,
            &mut self.inputs.source_listing,
            &mut self.inputs.minified_bundle,
            &mut self.inputs.gzip_bundle,
            &mut self.line_counter.target,
        ] {
            if path.is_relative() {
                *path = base.join(&*path);
            }
        }
    }
}

/// Looks for `pagegen.toml` in `dir` and then in each parent directory,
/// stopping at the first one found. Falls back to the built-in defaults,
/// which are relative to the working directory.
///
/// # Errors
///
/// This function may return an error if:
/// * A `pagegen.toml` exists but cannot be read
/// * The file is not valid TOML or contains unknown keys
#[inline]
pub fn load_config(dir: &Path) -> Result<Config> {
    let mut current_dir = dir.to_path_buf();
    let mut visited = HashSet::new();

    while visited.insert(current_dir.clone()) {
        let config_file = current_dir.join(CONFIG_FILE_NAME);

        if config_file.is_file() {
            return Config::from_file(&config_file);
        }

        if let Some(parent) = current_dir.parent() {
            current_dir = parent.to_path_buf();
        } else {
            break;
        }
    }

    Ok(Config::default())
}
