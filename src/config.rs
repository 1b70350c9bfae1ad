use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::math::{Color, WHITE};

/// Engine settings, loadable from JSON
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Display width the default buffer is allocated at
    pub width: u32,
    /// Display height the default buffer is allocated at
    pub height: u32,
    /// Blend partially transparent pixels against the buffer contents
    pub alpha_blending: bool,
    /// RGBA color used to clear each frame
    pub clear_color: [u8; 4],
    /// Default `env_logger` filter
    pub log_level: String,
    /// Silence all logging
    pub quiet: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 1024,
            height: 768,
            alpha_blending: true,
            clear_color: [WHITE.r, WHITE.g, WHITE.b, WHITE.a],
            log_level: "info".to_string(),
            quiet: false,
        }
    }
}

impl RenderConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Invalid render config")
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        Self::from_json_str(&json).with_context(|| format!("Failed to parse config file: {:?}", path))
    }

    pub fn clear_color(&self) -> Color {
        Color::from(self.clear_color)
    }

    /// Filter string handed to `env_logger`
    pub fn log_filter(&self) -> &str {
        if self.quiet {
            "off"
        } else {
            &self.log_level
        }
    }
}
