//! Reference controls
//!
//! Minimal implementations of the capability traits: a leaf [`Widget`],
//! toolkit [`Panel`]s, framework [`RawContainer`]s, and [`Frame`] roots. Host
//! toolkits build their own controls the same way, usually on top of
//! [`StyleState`].

mod frame;
mod panel;
mod widget;

pub use frame::{Frame, FrameKind};
pub use panel::{Panel, PanelKind, RawContainer, RawKind};
pub use widget::Widget;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, PoisonError, RwLock};

use tinct_theme::{Color, Palette, StyleId, ThemeCatalog};

/// Style bookkeeping shared by every themeable control
#[derive(Debug)]
pub struct StyleState {
    style: RwLock<StyleId>,
    custom: AtomicBool,
}

impl StyleState {
    pub fn new(style: StyleId) -> Self {
        Self {
            style: RwLock::new(style),
            custom: AtomicBool::new(false),
        }
    }

    pub fn style(&self) -> StyleId {
        *self.style.read().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn custom_mode(&self) -> bool {
        self.custom.load(Ordering::SeqCst)
    }

    pub fn set_custom_mode(&self, custom: bool) {
        self.custom.store(custom, Ordering::SeqCst);
    }

    /// Record `style` and return the palette to apply for it.
    ///
    /// `Custom` is recorded but yields no palette: the control keeps whatever
    /// colors it has.
    pub fn assign(&self, style: StyleId, catalog: &ThemeCatalog) -> Option<Arc<Palette>> {
        *self.style.write().unwrap_or_else(PoisonError::into_inner) = style;
        if style.is_custom() {
            None
        } else {
            Some(catalog.palette(style))
        }
    }
}

impl Default for StyleState {
    fn default() -> Self {
        Self::new(StyleId::DEFAULT)
    }
}

/// Colors a control paints with, picked from its palette
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct WidgetColors {
    pub fill: Color,
    pub fore: Color,
    pub border: Color,
}
