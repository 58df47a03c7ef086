use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use serde::Deserialize;

/// Config file read when `TTYGLOW_CONFIG` is unset.
pub const DEFAULT_CONFIG_PATH: &str = "/etc/ttyglow/config.toml";

/// Login unit restarted when the dashboard exits.
pub const DEFAULT_LOGIN_UNIT: &str = "getty@tty1.service";

/// Deployment settings loaded from `config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    /// Directory holding `logo.txt` and `mascot.txt`.
    #[serde(default)]
    pub asset_dir: Option<PathBuf>,
    #[serde(default)]
    pub log_dir: Option<PathBuf>,
    #[serde(default = "default_login_unit")]
    pub login_unit: String,
    /// When false the login unit is left alone on exit.
    #[serde(default = "default_restart_login")]
    pub restart_login: bool,
}

fn default_login_unit() -> String {
    DEFAULT_LOGIN_UNIT.to_string()
}

fn default_restart_login() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            asset_dir: None,
            log_dir: None,
            login_unit: default_login_unit(),
            restart_login: default_restart_login(),
        }
    }
}

impl Settings {
    /// Parse and validate settings TOML.
    pub fn from_toml_str(input: &str) -> Result<Self> {
        let settings: Self = toml::from_str(input).context("failed to parse settings TOML")?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load and validate settings from disk.
    pub fn from_path(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read settings at {}", path.display()))?;

        Self::from_toml_str(&raw)
            .with_context(|| format!("invalid settings at {}", path.display()))
    }

    /// Resolve the config path and load it, then apply env overrides.
    ///
    /// Path: `TTYGLOW_CONFIG` or [`DEFAULT_CONFIG_PATH`]. A missing file means
    /// defaults. `TTYGLOW_ASSET_DIR` overrides `asset_dir`.
    pub fn load() -> Result<Self> {
        let path = std::env::var_os("TTYGLOW_CONFIG")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH));

        let mut settings = if path.exists() {
            Self::from_path(&path)?
        } else {
            Self::default()
        };

        if let Some(dir) = std::env::var_os("TTYGLOW_ASSET_DIR") {
            settings.asset_dir = Some(PathBuf::from(dir));
        }

        Ok(settings)
    }

    /// Validate required fields and semantic constraints.
    pub fn validate(&self) -> Result<()> {
        let unit = self.login_unit.as_str();
        if unit.trim().is_empty() {
            bail!("login_unit must not be empty");
        }
        if unit.trim() != unit {
            bail!("login_unit {:?} has leading/trailing whitespace", unit);
        }

        validate_dir("asset_dir", self.asset_dir.as_deref())?;
        validate_dir("log_dir", self.log_dir.as_deref())?;

        Ok(())
    }

    /// Directory assets are read from.
    ///
    /// Falls back to `assets/` beside the running executable, then to
    /// `./assets`.
    pub fn asset_dir(&self) -> PathBuf {
        if let Some(dir) = &self.asset_dir {
            return dir.clone();
        }
        std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(|dir| dir.join("assets")))
            .unwrap_or_else(|| PathBuf::from("assets"))
    }
}

fn validate_dir(field: &str, value: Option<&Path>) -> Result<()> {
    if value.is_some_and(|dir| dir.as_os_str().is_empty()) {
        bail!("{field} must not be empty");
    }
    Ok(())
}
