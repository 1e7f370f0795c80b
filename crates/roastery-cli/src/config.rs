//! Startup settings: CLI flags layered over an optional TOML file.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use roastery_core::coffee::{FilterQuery, RoastFilter};
use serde::Deserialize;

/// Shape of the optional TOML config file.
///
/// ```toml
/// log_file = "/tmp/roastery.log"
///
/// [filter]
/// name  = "city"
/// roast = "light"
/// ```
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
  #[serde(default)]
  pub log_file: Option<PathBuf>,
  #[serde(default)]
  pub filter:   FilterSection,
}

#[derive(Debug, Deserialize, Default)]
pub struct FilterSection {
  #[serde(default)]
  pub name:  String,
  #[serde(default)]
  pub roast: Option<String>,
}

impl ConfigFile {
  pub fn load(path: &Path) -> Result<Self> {
    let raw = std::fs::read_to_string(path)
      .with_context(|| format!("reading config file {}", path.display()))?;
    Self::parse(&raw)
  }

  pub fn parse(raw: &str) -> Result<Self> { toml::from_str(raw).context("parsing config file") }
}

/// Fully-resolved settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
  pub query:    FilterQuery,
  pub log_file: Option<PathBuf>,
}

impl Settings {
  /// CLI flags override the config file, which overrides defaults.
  pub fn resolve(
    file: ConfigFile,
    name: Option<String>,
    roast: Option<RoastFilter>,
    log_file: Option<PathBuf>,
  ) -> Result<Self> {
    let file_roast = file
      .filter
      .roast
      .as_deref()
      .map(str::parse::<RoastFilter>)
      .transpose()
      .context("invalid roast in config file")?;

    Ok(Self {
      query:    FilterQuery {
        name:  name.unwrap_or(file.filter.name),
        roast: roast.or(file_roast).unwrap_or_default(),
      },
      log_file: log_file.or(file.log_file),
    })
  }
}
