//! Configuration file support.
//!
//! A config file can preset section markers and conversion defaults so that
//! repeated invocations do not need the full flag set. Values given on the
//! command line always win over the file.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

use crate::cli::{Cli, OutputFormat};
use crate::error::{Result, ScopeError};
use crate::scope::Markers;

/// Main configuration structure for scopeconv.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Section marker configuration.
    pub markers: MarkersConfig,
    /// Conversion defaults (corresponds to CLI options).
    pub convert: ConvertConfig,
}

/// Section marker lines recognized in tagged scope text.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkersConfig {
    /// Line opening the include section.
    pub include: String,
    /// Line opening the exclude section.
    pub exclude: String,
}

impl Default for MarkersConfig {
    fn default() -> Self {
        let defaults = Markers::default();
        Self {
            include: defaults.include,
            exclude: defaults.exclude,
        }
    }
}

impl MarkersConfig {
    pub fn to_markers(&self) -> Markers {
        Markers::new(self.include.clone(), self.exclude.clone())
    }
}

/// Conversion defaults (corresponds to CLI options).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ConvertConfig {
    /// Output format: "raw", "burp", "zap".
    pub format: Option<String>,
    /// Default context name for zap output.
    pub name: Option<String>,
    /// Output file path.
    pub output: Option<String>,
    /// Do not echo identified targets.
    pub silent: bool,
}

impl Config {
    /// Load configuration from a file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|e| ScopeError::read_error(path.display(), e))?;

        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();

        let parse_error = |message: String| ScopeError::ConfigParse {
            path: path.display().to_string(),
            message,
        };

        match ext.as_str() {
            "yaml" | "yml" => {
                serde_yaml::from_str(&content).map_err(|e| parse_error(e.to_string()))
            }
            "json" => serde_json::from_str(&content).map_err(|e| parse_error(e.to_string())),
            "toml" => toml::from_str(&content).map_err(|e| parse_error(e.to_string())),
            _ => Err(ScopeError::Config(format!(
                "unsupported config format '{ext}' for {}",
                path.display()
            ))),
        }
    }

    /// Load configuration from the working directory or global config.
    ///
    /// Search order:
    /// 1. `.scopeconv.yaml` / `.scopeconv.yml` in the working directory
    /// 2. `.scopeconv.json` in the working directory
    /// 3. `.scopeconv.toml` in the working directory
    /// 4. `~/.config/scopeconv/config.yaml`
    /// 5. Default configuration
    pub fn load(working_dir: Option<&Path>) -> Self {
        if let Some(root) = working_dir {
            for filename in &[
                ".scopeconv.yaml",
                ".scopeconv.yml",
                ".scopeconv.json",
                ".scopeconv.toml",
            ] {
                let path = root.join(filename);
                if path.exists() {
                    match Self::from_file(&path) {
                        Ok(config) => return config,
                        Err(e) => {
                            warn!(path = %path.display(), error = %e, "Ignoring unreadable config file");
                        }
                    }
                }
            }
        }

        if let Some(config_dir) = dirs::config_dir() {
            let global_config = config_dir.join("scopeconv").join("config.yaml");
            if global_config.exists()
                && let Ok(config) = Self::from_file(&global_config)
            {
                return config;
            }
        }

        Self::default()
    }
}

/// Effective settings for one conversion run, after CLI flags and the config
/// file have been reconciled.
#[derive(Debug, Clone)]
pub struct Settings {
    pub format: OutputFormat,
    pub markers: Markers,
    pub name: Option<String>,
    pub output: Option<PathBuf>,
    pub silent: bool,
}

impl Settings {
    /// Resolve settings from CLI arguments and a loaded config. CLI values
    /// take precedence over the file for every field.
    pub fn resolve(cli: &Cli, config: &Config) -> Self {
        let format = cli
            .format
            .or_else(|| {
                let name = config.convert.format.as_deref()?;
                let format = OutputFormat::from_name(name);
                if format.is_none() {
                    warn!(value = %name, "Ignoring unknown output format in config file");
                }
                format
            })
            .unwrap_or_default();

        let file_markers = config.markers.to_markers();
        let markers = Markers::new(
            cli.include_tag
                .clone()
                .unwrap_or(file_markers.include),
            cli.exclude_tag
                .clone()
                .unwrap_or(file_markers.exclude),
        );

        let name = cli.name.clone().or_else(|| config.convert.name.clone());

        let output = cli
            .output
            .clone()
            .or_else(|| config.convert.output.as_ref().map(PathBuf::from));

        Self {
            format,
            markers,
            name,
            output,
            silent: cli.silent || config.convert.silent,
        }
    }
}
