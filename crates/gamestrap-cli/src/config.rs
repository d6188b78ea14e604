//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate only ever sees the
//! [`SolutionLayout`](gamestrap_core::domain::SolutionLayout) built from it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables, `GAMESTRAP__<SECTION>__<KEY>`
//! 3. Config file (`--config`, else the platform config dir)
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// External toolchain settings.
    pub toolchain: ToolchainConfig,
    /// Directory names used to build the layout.
    pub layout: LayoutConfig,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolchainConfig {
    /// Program invoked for every tool command.
    pub program: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutConfig {
    pub source_dir: PathBuf,
    pub test_dir: PathBuf,
    /// Name of the wiki checkout next to the root directory.
    pub wiki_dir: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    pub no_color: bool,
    pub format: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            toolchain: ToolchainConfig {
                program: "dotnet".into(),
            },
            layout: LayoutConfig {
                source_dir: PathBuf::from("src"),
                test_dir: PathBuf::from("tests"),
                wiki_dir: "wiki".into(),
            },
            output: OutputConfig {
                no_color: false,
                format: "auto".into(),
            },
        }
    }
}

impl AppConfig {
    /// Load configuration: defaults, then file, then environment.
    ///
    /// With `require_explicit`, a `config_file` the user named must exist;
    /// the default location is always optional.
    pub fn load(config_file: Option<&PathBuf>, require_explicit: bool) -> anyhow::Result<Self> {
        let (path, required) = match config_file {
            Some(path) => (path.clone(), require_explicit),
            None => (Self::config_path(), false),
        };
        Self::load_from(&path, required, Environment::with_prefix("GAMESTRAP").separator("__"))
    }

    fn load_from(path: &Path, required: bool, env: Environment) -> anyhow::Result<Self> {
        let defaults =
            Config::try_from(&Self::default()).context("Failed to encode built-in defaults")?;

        let settings = Config::builder()
            .add_source(defaults)
            .add_source(File::from(path).required(required))
            .add_source(env.try_parsing(true))
            .build()
            .with_context(|| format!("Failed to read configuration from {}", path.display()))?;

        settings
            .try_deserialize()
            .context("Configuration has an unexpected shape")
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.gamestrap.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "gamestrap", "gamestrap")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".gamestrap.toml"))
    }
}
