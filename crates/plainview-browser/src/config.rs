//! Browser configuration.
//!
//! Every field has a default, so an empty or partial TOML file is valid.

use std::path::Path;

use serde::Deserialize;

use plainview_types::error::{PlainviewError, Result};

use crate::layout::{GridMetrics, HEIGHT, HSTEP, VSTEP, WIDTH};
use crate::scroll::{SCROLL_STEP, ScrollState};

/// `User-Agent` sent with every HTTP request.
pub const DEFAULT_USER_AGENT: &str = "CustomSimpleClient/1.0";

/// Locator loaded when none is given on the command line.
pub const DEFAULT_HOME_URL: &str = "file:///temp/test.html";

/// Viewport, grid and transport settings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct BrowserConfig {
    /// Viewport width in pixels; text wraps one cell before it.
    pub width: i32,
    /// Viewport height in pixels.
    pub height: i32,
    /// Horizontal advance per glyph.
    pub hstep: i32,
    /// Vertical advance per line.
    pub vstep: i32,
    /// Pixels moved per scroll input.
    pub scroll_step: u32,
    pub user_agent: String,
    pub home_url: String,
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            hstep: HSTEP,
            vstep: VSTEP,
            scroll_step: SCROLL_STEP,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            home_url: DEFAULT_HOME_URL.to_string(),
        }
    }
}

impl BrowserConfig {
    /// Parse a TOML document.
    pub fn from_toml_str(toml_str: &str) -> Result<Self> {
        let config: Self = toml::from_str(toml_str)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            PlainviewError::Config(format!("cannot read {}: {e}", path.display()))
        })?;
        Self::from_toml_str(&text)
    }

    fn validate(&self) -> Result<()> {
        if self.hstep <= 0 || self.vstep <= 0 {
            return Err(PlainviewError::Config(format!(
                "cell size must be positive, got {}x{}",
                self.hstep, self.vstep
            )));
        }
        if self.width <= 0 || self.height <= 0 {
            return Err(PlainviewError::Config(format!(
                "viewport must be positive, got {}x{}",
                self.width, self.height
            )));
        }
        if self.user_agent.contains(['\r', '\n']) {
            return Err(PlainviewError::Config(
                "user_agent must be a single line".to_string(),
            ));
        }
        Ok(())
    }

    pub fn grid_metrics(&self) -> GridMetrics {
        GridMetrics {
            width: self.width,
            hstep: self.hstep,
            vstep: self.vstep,
        }
    }

    /// A fresh scroll state for this viewport.
    pub fn scroll_state(&self) -> ScrollState {
        // `height` is validated positive.
        ScrollState::new(self.height.unsigned_abs(), self.scroll_step)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_values() {
        let cfg = BrowserConfig::default();
        assert_eq!(cfg.width, 800);
        assert_eq!(cfg.height, 600);
        assert_eq!(cfg.hstep, 13);
        assert_eq!(cfg.vstep, 18);
        assert_eq!(cfg.scroll_step, 100);
        assert_eq!(cfg.user_agent, "CustomSimpleClient/1.0");
        assert_eq!(cfg.home_url, "file:///temp/test.html");
    }

    #[test]
    fn empty_toml_is_default() {
        assert_eq!(
            BrowserConfig::from_toml_str("").unwrap(),
            BrowserConfig::default()
        );
    }

    #[test]
    fn partial_toml_overrides_fields() {
        let cfg = BrowserConfig::from_toml_str(
            r#"
width = 400
user_agent = "plainview-test"
"#,
        )
        .unwrap();
        assert_eq!(cfg.width, 400);
        assert_eq!(cfg.user_agent, "plainview-test");
        assert_eq!(cfg.hstep, 13);
        assert_eq!(cfg.grid_metrics().width, 400);
    }

    #[test]
    fn invalid_toml_is_parse_error() {
        let err = BrowserConfig::from_toml_str("width = [[[").unwrap_err();
        assert!(matches!(err, PlainviewError::TomlParse(_)));
    }

    #[test]
    fn zero_cell_rejected() {
        let err = BrowserConfig::from_toml_str("hstep = 0").unwrap_err();
        assert!(matches!(err, PlainviewError::Config(_)));
    }

    #[test]
    fn negative_scroll_step_rejected() {
        let err = BrowserConfig::from_toml_str("scroll_step = -5").unwrap_err();
        assert!(matches!(err, PlainviewError::TomlParse(_)));
    }

    #[test]
    fn multiline_user_agent_rejected() {
        let err = BrowserConfig::from_toml_str("user_agent = \"a\\r\\nX-Evil: 1\"").unwrap_err();
        assert!(err.to_string().contains("single line"));
    }

    #[test]
    fn load_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        std::io::Write::write_all(&mut file, b"scroll_step = 40\n").unwrap();
        let cfg = BrowserConfig::load(file.path()).unwrap();
        assert_eq!(cfg.scroll_step, 40);
        assert_eq!(cfg.scroll_state().step, 40);
    }

    #[test]
    fn load_missing_file_is_config_error() {
        let err = BrowserConfig::load(Path::new("/nonexistent/plainview.toml")).unwrap_err();
        assert!(matches!(err, PlainviewError::Config(_)));
    }
}
