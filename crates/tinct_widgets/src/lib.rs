//! Tinct Widget Styling
//!
//! Registry of live windows and pages, and the propagation of theme changes
//! through their control trees.
//!
//! # Overview
//!
//! - [`Control`], [`Themeable`], [`Translatable`], [`Root`]: capability
//!   traits the host's controls implement
//! - [`cascade`](cascade::cascade): walks a subtree assigning a style,
//!   skipping controls in custom style mode and leaving toolkit containers to
//!   cascade themselves
//! - [`WidgetRegistry`]: live roots keyed by [`RootId`], the fan-out list for
//!   style, DPI, and translation broadcasts
//! - [`ThemeContext`]: catalog plus registry; `set_active_style` is the one
//!   call that restyles every open window
//!
//! # Propagation
//!
//! ```text
//! ThemeContext::set_active_style(Green)
//!   -> catalog active style = Green
//!   -> registry.push_style(Green)
//!        -> root.set_style(Green)          (each registered window/page)
//!             -> cascade(root, Green)      (every themeable descendant)
//! ```

pub mod cascade;
pub mod context;
pub mod control;
pub mod error;
pub mod registry;
pub mod widgets;

pub use cascade::{
    adopt, apply_to_raw_container, cascade, find_themeable, find_translatable, translate_tree,
};
pub use context::ThemeContext;
pub use control::{Control, ControlKind, Root, RootId, Themeable, Translatable};
pub use error::WidgetError;
pub use registry::WidgetRegistry;
pub use widgets::{
    Frame, FrameKind, Panel, PanelKind, RawContainer, RawKind, StyleState, Widget, WidgetColors,
};

// Re-export the theme crate for hosts that only depend on this one
pub use tinct_theme;
