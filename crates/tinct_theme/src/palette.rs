//! Palette value types
//!
//! A [`Palette`] is the complete set of colors and font sizes a widget needs
//! to paint itself in one theme. Palettes are immutable once built; the
//! catalog swaps whole values when a palette has to change.

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::style::{MenuStyleId, StyleId};

/// Visual role of a color inside a [`RoleColors`] set
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum ColorRole {
    Primary,
    Secondary,
    Regular,
    Plain,
}

/// One color per visual role
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RoleColors {
    pub primary: Color,
    pub secondary: Color,
    pub regular: Color,
    pub plain: Color,
}

impl RoleColors {
    pub fn get(&self, role: ColorRole) -> Color {
        match role {
            ColorRole::Primary => self.primary,
            ColorRole::Secondary => self.secondary,
            ColorRole::Regular => self.regular,
            ColorRole::Plain => self.plain,
        }
    }
}

/// Colors used while a widget is disabled
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct DisabledColors {
    pub fill: Color,
    pub fore: Color,
}

/// Primary and secondary font sizes, in points
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FontSizes {
    pub primary: f32,
    pub secondary: f32,
}

impl Default for FontSizes {
    fn default() -> Self {
        Self {
            primary: 12.0,
            secondary: 9.0,
        }
    }
}

/// Complete color and font set for one [`StyleId`]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Palette {
    pub id: StyleId,
    pub name: String,
    /// Accent color of the theme
    pub primary_color: Color,
    /// Text drawn on top of `primary_color`
    pub fore_color: Color,
    pub fill: RoleColors,
    pub border: RoleColors,
    pub font: RoleColors,
    pub disabled: DisabledColors,
    pub fonts: FontSizes,
}

impl Palette {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_custom(&self) -> bool {
        self.id.is_custom()
    }

    pub fn is_valid(&self) -> bool {
        !self.is_custom()
    }
}

/// Color set for menu chrome, keyed by [`MenuStyleId`]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MenuPalette {
    pub id: MenuStyleId,
    pub back_color: Color,
    pub fore_color: Color,
    pub selected_color: Color,
    pub selected_fore_color: Color,
    pub hover_color: Color,
    /// Background of nested (child) menu levels
    pub child_back_color: Color,
}
