use crate::utils::error::{AtlasError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_range, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

const DEFAULT_ANIMATION_MS: u64 = 300;
const DEFAULT_BAR_WIDTH: usize = 40;

/// Presentation settings for the text report.
/// Everything here is display-only; the core never reads it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DisplayConfig {
    pub display: Option<DisplaySection>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DisplaySection {
    /// Delay between bar lines while rendering, in milliseconds.
    pub animation_ms: Option<u64>,
    pub color: Option<bool>,
    pub bar_width: Option<usize>,
    pub chart_glyph: Option<String>,
}

impl DisplayConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(AtlasError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| AtlasError::InvalidConfigValueError {
            field: "display".to_string(),
            value: content.to_string(),
            reason: format!("TOML parsing error: {}", e),
        })
    }

    pub fn animation_ms(&self) -> u64 {
        self.display
            .as_ref()
            .and_then(|d| d.animation_ms)
            .unwrap_or(DEFAULT_ANIMATION_MS)
    }

    pub fn color(&self) -> bool {
        self.display.as_ref().and_then(|d| d.color).unwrap_or(true)
    }

    pub fn bar_width(&self) -> usize {
        self.display
            .as_ref()
            .and_then(|d| d.bar_width)
            .unwrap_or(DEFAULT_BAR_WIDTH)
    }

    pub fn chart_glyph(&self) -> String {
        self.display
            .as_ref()
            .and_then(|d| d.chart_glyph.clone())
            .unwrap_or_else(|| "█".to_string())
    }
}

impl Validate for DisplayConfig {
    fn validate(&self) -> Result<()> {
        validate_range("display.animation_ms", self.animation_ms(), 100, 1000)?;
        validate_range("display.bar_width", self.bar_width(), 10, 120)?;
        validate_non_empty_string("display.chart_glyph", &self.chart_glyph())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = DisplayConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.animation_ms(), 300);
        assert!(config.color());
    }

    #[test]
    fn test_parse_and_validate() {
        let config = DisplayConfig::from_toml_str(
            r#"
            [display]
            animation_ms = 500
            color = false
            bar_width = 60
            "#,
        )
        .unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.animation_ms(), 500);
        assert!(!config.color());
        assert_eq!(config.bar_width(), 60);
    }

    #[test]
    fn test_animation_speed_out_of_range() {
        let config = DisplayConfig::from_toml_str("[display]\nanimation_ms = 50\n").unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_toml_rejected() {
        assert!(DisplayConfig::from_toml_str("not valid toml [").is_err());
    }
}
