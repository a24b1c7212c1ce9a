use serde::{Deserialize, Serialize};
use std::{env, fs, path::Path};

use crate::errors::ConfigError;

pub const CONFIG_PATH_VAR: &str = "AZEX_CONFIG";
pub const SCRIPT_MODE_VAR: &str = "AZEX_CLI_SCRIPT";
pub const PLAIN_MODE_VAR: &str = "AZEX_PLAIN";
pub const NO_COLOR_VAR: &str = "NO_COLOR";

/// Runtime preferences. Read once at start-up and never written back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub currency_symbol: String,
    pub plain_mode: bool,
    pub high_contrast_mode: bool,
    pub color: bool,
    pub script_mode: bool,
    pub show_banner: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            currency_symbol: "$".into(),
            plain_mode: false,
            high_contrast_mode: false,
            color: true,
            script_mode: false,
            show_banner: true,
        }
    }
}

impl Config {
    /// Defaults, then the JSON file named by `AZEX_CONFIG`, then environment flags.
    pub fn load() -> Result<Self, ConfigError> {
        Self::resolve(|key| env::var(key).ok())
    }

    /// Same as [`Config::load`] with an injectable variable lookup.
    pub fn resolve<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = match lookup(CONFIG_PATH_VAR).filter(|path| !path.trim().is_empty()) {
            Some(path) => Self::from_file(path.trim())?,
            None => Self::default(),
        };
        config.apply_overrides(&lookup)?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let data = fs::read_to_string(path.as_ref())?;
        let config: Config = serde_json::from_str(&data)?;
        config.validate()?;
        Ok(config)
    }

    fn apply_overrides<F>(&mut self, lookup: &F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(raw) = lookup(SCRIPT_MODE_VAR) {
            self.script_mode = parse_flag(SCRIPT_MODE_VAR, &raw)?;
        }
        if let Some(raw) = lookup(PLAIN_MODE_VAR) {
            self.plain_mode = parse_flag(PLAIN_MODE_VAR, &raw)?;
        }
        // https://no-color.org: any non-empty value disables colour.
        if lookup(NO_COLOR_VAR).is_some_and(|value| !value.is_empty()) {
            self.color = false;
        }
        Ok(())
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.currency_symbol.chars().count() > 3 {
            return Err(ConfigError::InvalidValue {
                key: "currency_symbol",
                value: self.currency_symbol.clone(),
            });
        }
        Ok(())
    }
}

/// An empty value or `1`/`true`/`yes`/`on` enables a flag; `0`/`false`/`no`/`off` disables it.
fn parse_flag(key: &'static str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "" | "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            key,
            value: raw.to_string(),
        }),
    }
}
