use thiserror::Error;

use crate::style::{MenuStyleId, StyleId};

#[derive(Debug, Error)]
pub enum ThemeError {
    #[error("palette for style {0} is already registered")]
    DuplicatePalette(StyleId),

    #[error("menu palette for menu style {0:?} is already registered")]
    DuplicateMenuPalette(MenuStyleId),

    #[error("invalid color {0:?}, expected #RRGGBB or #RRGGBBAA")]
    InvalidColor(String),

    #[error("unknown style {0:?}")]
    UnknownStyle(String),

    #[error("invalid theme config: {0}")]
    Config(#[from] toml::de::Error),
}
