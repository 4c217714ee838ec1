//! Dump settings and `migrator.toml` loading.
//!
//! Settings only control how artifacts are named. They never change what a
//! migration state contains.

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use fs_err as fs;
use serde::Deserialize;
use tracing::debug;

/// The config file name to search for.
pub const CONFIG_FILE_NAME: &str = "migrator.toml";

pub const DEFAULT_SOURCE_EXTENSION: &str = "swift";
pub const DEFAULT_REMAP_EXTENSION: &str = "remap";

/// File extensions used when printing migration states.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DumpSettings {
    /// Extension of the input and output snapshot files.
    pub source_extension: String,

    /// Extension of the replacements file.
    pub remap_extension: String,
}

impl Default for DumpSettings {
    fn default() -> Self {
        Self {
            source_extension: DEFAULT_SOURCE_EXTENSION.to_string(),
            remap_extension: DEFAULT_REMAP_EXTENSION.to_string(),
        }
    }
}

impl DumpSettings {
    pub fn source_extension(&self) -> &str {
        self.source_extension.trim_start_matches('.')
    }

    pub fn remap_extension(&self) -> &str {
        self.remap_extension.trim_start_matches('.')
    }

    /// Reject extensions that cannot name a file inside the output directory.
    pub fn validate(&self) -> anyhow::Result<()> {
        check_extension("source_extension", self.source_extension())?;
        check_extension("remap_extension", self.remap_extension())?;
        Ok(())
    }
}

/// An extension must not contain a path separator on any platform.
pub(crate) fn check_extension(field: &str, extension: &str) -> anyhow::Result<()> {
    if extension.contains(['/', '\\']) {
        anyhow::bail!("{field} `{extension}` must not contain a path separator");
    }
    Ok(())
}

/// Top-level configuration from migrator.toml.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct MigratorConfig {
    pub dump: DumpSettings,
}

/// Look for `migrator.toml` directly inside `dir`.
pub fn discover_config(dir: &Utf8Path) -> Option<Utf8PathBuf> {
    let config_path = dir.join(CONFIG_FILE_NAME);
    if config_path.exists() {
        debug!("found config file at {}", config_path);
        Some(config_path)
    } else {
        debug!("no config file found at {}", config_path);
        None
    }
}

pub fn load_config(path: &Utf8Path) -> anyhow::Result<MigratorConfig> {
    let contents =
        fs::read_to_string(path).with_context(|| format!("read config file {}", path))?;
    parse_config(&contents).with_context(|| format!("parse config file {}", path))
}

pub fn parse_config(contents: &str) -> anyhow::Result<MigratorConfig> {
    let config: MigratorConfig = toml::from_str(contents).context("invalid TOML")?;
    config.dump.validate().context("invalid [dump] settings")?;
    Ok(config)
}

/// Load config from `dir`, or return the default if there is none.
pub fn load_or_default(dir: &Utf8Path) -> anyhow::Result<MigratorConfig> {
    match discover_config(dir) {
        Some(path) => load_config(&path),
        None => Ok(MigratorConfig::default()),
    }
}
