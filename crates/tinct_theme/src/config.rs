//! Theme configuration
//!
//! The host application persists the user's theme choice however it likes and
//! hands it back at startup as a [`ThemeConfig`], usually loaded from TOML:
//!
//! ```toml
//! style = "green"
//! menu_style = "white"
//! dpi_scale = true
//!
//! [fonts]
//! primary = 12.0
//! secondary = 9.0
//!
//! [colorful]
//! accent = "#2d8cf0"
//! fore = "#ffffff"
//! ```

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::error::ThemeError;
use crate::palette::FontSizes;
use crate::style::{MenuStyleId, StyleId};

/// Accent and fore color for the `Colorful` style
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ColorfulConfig {
    pub accent: Color,
    pub fore: Color,
}

/// Startup theme settings
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Style activated at startup
    pub style: StyleId,
    pub menu_style: MenuStyleId,
    /// Rescale registered roots whose DPI scale is not 1
    pub dpi_scale: bool,
    pub fonts: FontSizes,
    /// When set, the `Colorful` palette is built from these colors
    pub colorful: Option<ColorfulConfig>,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            style: StyleId::DEFAULT,
            menu_style: MenuStyleId::default(),
            dpi_scale: false,
            fonts: FontSizes::default(),
            colorful: None,
        }
    }
}

impl ThemeConfig {
    pub fn from_toml_str(src: &str) -> Result<Self, ThemeError> {
        Ok(toml::from_str(src)?)
    }
}
