use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, PoisonError, RwLock};

use tinct_theme::{Palette, StyleId, ThemeCatalog};

use super::{StyleState, WidgetColors};
use crate::control::{Control, ControlKind, Themeable, Translatable};

/// Themeable, translatable control.
///
/// A widget may still hold children (a group box, a tab header); those are
/// reached by the enclosing container's cascade, not by the widget itself.
pub struct Widget {
    name: String,
    kind: ControlKind,
    style: StyleState,
    colors: RwLock<WidgetColors>,
    children: RwLock<Vec<Arc<dyn Control>>>,
    translations: AtomicUsize,
}

impl Widget {
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_kind(name, ControlKind::Widget)
    }

    /// A context menu, to be attached to a container at construction
    pub fn context_menu(name: impl Into<String>) -> Self {
        Self::with_kind(name, ControlKind::ContextMenu)
    }

    fn with_kind(name: impl Into<String>, kind: ControlKind) -> Self {
        Self {
            name: name.into(),
            kind,
            style: StyleState::default(),
            colors: RwLock::new(WidgetColors::default()),
            children: RwLock::new(Vec::new()),
            translations: AtomicUsize::new(0),
        }
    }

    /// Start in custom style mode
    pub fn custom(self) -> Self {
        self.style.set_custom_mode(true);
        self
    }

    /// Start with `style` recorded, without applying any palette
    pub fn with_style(self, style: StyleId) -> Self {
        *self.style.style.write().unwrap_or_else(PoisonError::into_inner) = style;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn current_style(&self) -> StyleId {
        self.style.style()
    }

    pub fn colors(&self) -> WidgetColors {
        *self.colors.read().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn add_child(&self, child: Arc<dyn Control>) {
        self.children
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(child);
    }

    /// How many times the widget has been retranslated
    pub fn translation_count(&self) -> usize {
        self.translations.load(Ordering::SeqCst)
    }
}

impl Control for Widget {
    fn kind(&self) -> ControlKind {
        self.kind
    }

    fn children(&self) -> Vec<Arc<dyn Control>> {
        self.children
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn as_themeable(&self) -> Option<&dyn Themeable> {
        Some(self)
    }

    fn as_translatable(&self) -> Option<&dyn Translatable> {
        Some(self)
    }
}

impl Themeable for Widget {
    fn style(&self) -> StyleId {
        self.style.style()
    }

    fn set_style(&self, style: StyleId, catalog: &ThemeCatalog) {
        if let Some(palette) = self.style.assign(style, catalog) {
            self.apply_palette(&palette);
        }
    }

    fn custom_style_mode(&self) -> bool {
        self.style.custom_mode()
    }

    fn set_custom_style_mode(&self, custom: bool) {
        self.style.set_custom_mode(custom);
    }

    fn apply_palette(&self, palette: &Palette) {
        *self.colors.write().unwrap_or_else(PoisonError::into_inner) = WidgetColors {
            fill: palette.fill.primary,
            fore: palette.fore_color,
            border: palette.border.primary,
        };
    }
}

impl Translatable for Widget {
    fn translate(&self) {
        self.translations.fetch_add(1, Ordering::SeqCst);
    }
}
