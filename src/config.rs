//! Configuration loading for tidy-report

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILENAME: &str = ".tidyreportrc.json";

/// Root config structure for .tidyreportrc.json. All fields optional;
/// CLI flags take precedence over the file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    /// Report JSON to read when `generate` gets no path
    pub input: Option<PathBuf>,

    /// Directory the report artifact is written to
    pub output: Option<PathBuf>,

    /// Template root overriding the assets bundled into the binary
    pub template_dir: Option<PathBuf>,
}

impl Config {
    /// Merge CLI overrides into config. CLI values take precedence.
    pub fn merge_with_cli(
        mut self,
        input: Option<PathBuf>,
        output: Option<PathBuf>,
        template_dir: Option<PathBuf>,
    ) -> Self {
        if input.is_some() {
            self.input = input;
        }
        if output.is_some() {
            self.output = output;
        }
        if template_dir.is_some() {
            self.template_dir = template_dir;
        }
        self
    }
}

/// Find and load the config file. Searches `work_dir` then its parents;
/// a missing config is not an error, a named-but-absent one is.
pub fn load_config(work_dir: &Path, custom_path: Option<&Path>) -> Result<Config> {
    let path = if let Some(p) = custom_path {
        let path = if p.is_absolute() {
            p.to_path_buf()
        } else {
            work_dir.join(p)
        };
        if !path.exists() {
            anyhow::bail!("Config file not found: {}", path.display());
        }
        Some(path)
    } else {
        find_config_in_parents(work_dir)
    };

    match path {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config: {}", path.display()))?;
            serde_json::from_str(&content)
                .with_context(|| format!("Invalid JSON in config: {}", path.display()))
        }
        None => Ok(Config::default()),
    }
}

/// Search for .tidyreportrc.json in directory and its parents
fn find_config_in_parents(mut dir: &Path) -> Option<PathBuf> {
    loop {
        let candidate = dir.join(CONFIG_FILENAME);
        if candidate.exists() {
            return Some(candidate);
        }
        dir = dir.parent()?;
    }
}
