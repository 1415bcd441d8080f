use std::sync::{Arc, PoisonError, RwLock};

use tinct_theme::{Palette, StyleId, ThemeCatalog};

use super::{StyleState, WidgetColors};
use crate::cascade::cascade;
use crate::control::{Control, ControlKind, Themeable};

/// Layout flavor of a toolkit [`Panel`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PanelKind {
    Panel,
    TableLayout,
    FlowLayout,
}

impl PanelKind {
    fn control_kind(self) -> ControlKind {
        match self {
            PanelKind::Panel => ControlKind::Panel,
            PanelKind::TableLayout => ControlKind::TableLayoutPanel,
            PanelKind::FlowLayout => ControlKind::FlowLayoutPanel,
        }
    }
}

/// Toolkit container. Assigning it a style recolors it and cascades the style
/// to its own subtree.
pub struct Panel {
    name: String,
    kind: PanelKind,
    style: StyleState,
    colors: RwLock<WidgetColors>,
    children: RwLock<Vec<Arc<dyn Control>>>,
    context_menu: Option<Arc<dyn Control>>,
}

impl Panel {
    pub fn new(kind: PanelKind, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind,
            style: StyleState::default(),
            colors: RwLock::new(WidgetColors::default()),
            children: RwLock::new(Vec::new()),
            context_menu: None,
        }
    }

    pub fn with_context_menu(mut self, menu: Arc<dyn Control>) -> Self {
        self.context_menu = Some(menu);
        self
    }

    /// Start in custom style mode
    pub fn custom(self) -> Self {
        self.style.set_custom_mode(true);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn panel_kind(&self) -> PanelKind {
        self.kind
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
}

impl Control for Panel {
    fn kind(&self) -> ControlKind {
        self.kind.control_kind()
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

    fn context_menu(&self) -> Option<Arc<dyn Control>> {
        self.context_menu.clone()
    }
}

impl Themeable for Panel {
    fn style(&self) -> StyleId {
        self.style.style()
    }

    fn set_style(&self, style: StyleId, catalog: &ThemeCatalog) {
        let Some(palette) = self.style.assign(style, catalog) else {
            return;
        };
        self.apply_palette(&palette);
        cascade(self, style, catalog);
    }

    fn custom_style_mode(&self) -> bool {
        self.style.custom_mode()
    }

    fn set_custom_style_mode(&self, custom: bool) {
        self.style.set_custom_mode(custom);
    }

    fn apply_palette(&self, palette: &Palette) {
        *self.colors.write().unwrap_or_else(PoisonError::into_inner) = WidgetColors {
            fill: palette.fill.regular,
            fore: palette.font.primary,
            border: palette.border.primary,
        };
    }
}

/// Layout flavor of a framework [`RawContainer`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RawKind {
    Panel,
    TableLayout,
    FlowLayout,
}

/// Container from the underlying framework. Not themeable and never cascades
/// on its own; cascades walk straight through it.
pub struct RawContainer {
    kind: RawKind,
    children: RwLock<Vec<Arc<dyn Control>>>,
}

impl RawContainer {
    pub fn new(kind: RawKind) -> Self {
        Self {
            kind,
            children: RwLock::new(Vec::new()),
        }
    }

    pub fn raw_kind(&self) -> RawKind {
        self.kind
    }

    pub fn add_child(&self, child: Arc<dyn Control>) {
        self.children
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(child);
    }
}

impl Control for RawContainer {
    fn kind(&self) -> ControlKind {
        match self.kind {
            RawKind::Panel => ControlKind::RawPanel,
            RawKind::TableLayout => ControlKind::RawTableLayoutPanel,
            RawKind::FlowLayout => ControlKind::RawFlowLayoutPanel,
        }
    }

    fn children(&self) -> Vec<Arc<dyn Control>> {
        self.children
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}
