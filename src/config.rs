//! Workspace configuration.
//!
//! Loads `cardforge.toml` from the workspace root. Everything has stock
//! defaults; a config file only needs the values it overrides, and unknown
//! keys are rejected to catch typos early.
//!
//! ```toml
//! # All options are optional — defaults shown
//!
//! fonts_dir = "fonts"       # .ttf/.otf files, looked up by family name
//!
//! [frame]
//! font = "Arial"            # stock font for new frame rows
//! text_size = 16            # name text size, px
//! num_size = 16             # number text size, px
//! color = "white"           # stock text color (name or #RRGGBB)
//! number_marker = true      # prefix card numbers with №
//! ```

use crate::catalog::FrameDefaults;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

pub const CONFIG_FILE: &str = "cardforge.toml";

/// Workspace configuration loaded from `cardforge.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ForgeConfig {
    /// Directory scanned for font files, relative to the workspace root.
    pub fonts_dir: String,
    /// Stock style values for lazily-created frame rows.
    pub frame: FrameDefaults,
}

impl Default for ForgeConfig {
    fn default() -> Self {
        Self {
            fonts_dir: "fonts".to_string(),
            frame: FrameDefaults::default(),
        }
    }
}

impl ForgeConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.frame.text_size == 0 || self.frame.num_size == 0 {
            return Err(ConfigError::Validation(
                "frame text/num sizes must be non-zero".into(),
            ));
        }
        if self.fonts_dir.is_empty() {
            return Err(ConfigError::Validation("fonts_dir must not be empty".into()));
        }
        Ok(())
    }
}

/// Load config from `<root>/cardforge.toml`, or stock defaults if absent.
pub fn load_config(root: &Path) -> Result<ForgeConfig, ConfigError> {
    let path = root.join(CONFIG_FILE);
    let config = if path.is_file() {
        let content = fs::read_to_string(&path)?;
        toml::from_str(&content)?
    } else {
        ForgeConfig::default()
    };
    config.validate()?;
    Ok(config)
}

/// A documented stock `cardforge.toml`, printed by `cardforge gen-config`.
pub fn stock_config_toml() -> String {
    let defaults = ForgeConfig::default();
    format!(
        "\
# cardforge workspace configuration
# All options are optional — the values below are the stock defaults.

# Directory scanned for .ttf/.otf fonts, resolved by family name.
fonts_dir = \"{fonts}\"

[frame]
# Stock style applied to newly created frame rows.
font = \"{font}\"
text_size = {text_size}
num_size = {num_size}
color = \"{color}\"
number_marker = {marker}
",
        fonts = defaults.fonts_dir,
        font = defaults.frame.font,
        text_size = defaults.frame.text_size,
        num_size = defaults.frame.num_size,
        color = defaults.frame.color,
        marker = defaults.frame.number_marker,
    )
}
