//! Tinct Theme Catalog
//!
//! Named visual themes for the Tinct widget toolkit and the catalog that
//! serves them.
//!
//! # Overview
//!
//! - [`StyleId`]: identifier of a theme. `Custom` marks widgets that manage
//!   their own colors, `Colorful` is the one user-configurable theme.
//! - [`Palette`]: immutable colors and font sizes of one theme
//! - [`ThemeCatalog`]: style id to palette mapping with an active style,
//!   first-registration-wins semantics, and a lookup that never fails
//! - [`MenuCatalog`]: menu chrome colors keyed by [`MenuStyleId`]
//! - [`ThemeConfig`]: startup settings, loadable from TOML
//!
//! # Quick Start
//!
//! ```rust
//! use tinct_theme::{StyleId, ThemeCatalog};
//!
//! let catalog = ThemeCatalog::new();
//! catalog.set_active_style(StyleId::Green);
//!
//! let palette = catalog.active_palette();
//! assert_eq!(palette.id, StyleId::Green);
//! ```
//!
//! Broadcasting a style change to live windows lives in `tinct_widgets`,
//! which owns the root registry.

pub mod catalog;
pub mod color;
pub mod config;
pub mod error;
pub mod palette;
pub mod presets;
pub mod style;

pub use catalog::{popular_styles, DiagnosticCallback, MenuCatalog, ThemeCatalog, ThemeDiagnostic};
pub use color::Color;
pub use config::{ColorfulConfig, ThemeConfig};
pub use error::ThemeError;
pub use palette::{ColorRole, DisabledColors, FontSizes, MenuPalette, Palette, RoleColors};
pub use style::{MenuStyleId, StyleId};
