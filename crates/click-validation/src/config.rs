// File: src/config.rs
// Purpose: Validation display settings from click-validation.toml

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Validation configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ValidationConfig {
    #[serde(default)]
    pub display: DisplayConfig,

    #[serde(default)]
    pub styles: StyleConfig,
}

/// How the aggregated error block is laid out
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DisplayConfig {
    /// `align` attribute of each error cell
    #[serde(default = "default_align")]
    pub align: String,

    /// Optional inline `style` of each error cell
    #[serde(default)]
    pub style: Option<String>,

    #[serde(default = "default_errors_div_suffix")]
    pub errors_div_suffix: String,

    #[serde(default = "default_errors_row_suffix")]
    pub errors_row_suffix: String,

    /// CSS display value used to reveal the error row
    #[serde(default = "default_row_display")]
    pub row_display: String,
}

/// Field backgrounds for the error and valid states
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StyleConfig {
    #[serde(default = "default_error_background")]
    pub error_background: String,

    #[serde(default = "default_valid_background")]
    pub valid_background: String,
}

// Default values
fn default_align() -> String {
    "left".to_string()
}

fn default_errors_div_suffix() -> String {
    "-errorsDiv".to_string()
}

fn default_errors_row_suffix() -> String {
    "-errorsTr".to_string()
}

fn default_row_display() -> String {
    "inline".to_string()
}

fn default_error_background() -> String {
    "#FFFF80".to_string()
}

fn default_valid_background() -> String {
    "white".to_string()
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            align: default_align(),
            style: None,
            errors_div_suffix: default_errors_div_suffix(),
            errors_row_suffix: default_errors_row_suffix(),
            row_display: default_row_display(),
        }
    }
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            error_background: default_error_background(),
            valid_background: default_valid_background(),
        }
    }
}

impl DisplayConfig {
    /// Id of the element receiving the error table for `form_id`
    pub fn errors_div_id(&self, form_id: &str) -> String {
        format!("{}{}", form_id, self.errors_div_suffix)
    }

    /// Id of the row revealed when `form_id` has errors
    pub fn errors_row_id(&self, form_id: &str) -> String {
        format!("{}{}", form_id, self.errors_row_suffix)
    }
}

impl ValidationConfig {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        // If file doesn't exist or is empty, return default config
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: ValidationConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;

        tracing::debug!(?path, "loaded validation config");
        Ok(config)
    }

    /// Load configuration from default path (./click-validation.toml)
    pub fn load_default() -> Result<Self> {
        Self::load("click-validation.toml")
    }
}
