//! Capability traits implemented by controls
//!
//! The host framework's control tree is seen through [`Control`]: a node with
//! a kind and a snapshot of its children. Everything else is opt-in through
//! capability accessors, so the propagation code never inspects concrete
//! types.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tinct_theme::{Palette, StyleId, ThemeCatalog};

/// What kind of node a control is, as far as style propagation cares
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ControlKind {
    /// Ordinary widget
    Widget,
    /// Top-level window
    Window,
    /// Toolkit page
    Page,
    /// Toolkit panel
    Panel,
    /// Toolkit table-layout panel
    TableLayoutPanel,
    /// Toolkit flow-layout panel
    FlowLayoutPanel,
    /// Plain panel from the underlying framework
    RawPanel,
    /// Table-layout panel from the underlying framework
    RawTableLayoutPanel,
    /// Flow-layout panel from the underlying framework
    RawFlowLayoutPanel,
    /// Context menu attached to a container
    ContextMenu,
}

impl ControlKind {
    /// Toolkit containers that cascade to their own children whenever their
    /// style is assigned.
    pub fn cascades_itself(self) -> bool {
        matches!(
            self,
            ControlKind::Page
                | ControlKind::Panel
                | ControlKind::TableLayoutPanel
                | ControlKind::FlowLayoutPanel
        )
    }

    /// Framework containers that have no propagation of their own.
    pub fn is_raw_container(self) -> bool {
        matches!(
            self,
            ControlKind::RawPanel | ControlKind::RawTableLayoutPanel | ControlKind::RawFlowLayoutPanel
        )
    }
}

/// A node of the host framework's control tree
pub trait Control: Send + Sync {
    fn kind(&self) -> ControlKind;

    /// Snapshot of the current children, in z-order
    fn children(&self) -> Vec<Arc<dyn Control>>;

    /// Themeable capability, if the control has one
    fn as_themeable(&self) -> Option<&dyn Themeable> {
        None
    }

    /// Translatable capability, if the control has one
    fn as_translatable(&self) -> Option<&dyn Translatable> {
        None
    }

    /// Context menu associated with this control, set at construction
    fn context_menu(&self) -> Option<Arc<dyn Control>> {
        None
    }
}

/// A control that follows the active theme.
///
/// Assigning a style through [`Themeable::set_style`] is what recolors the
/// control: implementations resolve the palette from the catalog and pass it
/// to [`Themeable::apply_palette`]. Containers additionally cascade the
/// style to their children.
pub trait Themeable: Send + Sync {
    fn style(&self) -> StyleId;

    fn set_style(&self, style: StyleId, catalog: &ThemeCatalog);

    /// When true the control is skipped by cascades. Sticky until cleared.
    fn custom_style_mode(&self) -> bool;

    fn set_custom_style_mode(&self, custom: bool);

    fn apply_palette(&self, palette: &Palette);
}

/// A control whose text can be re-read from the active locale
pub trait Translatable: Send + Sync {
    fn translate(&self);
}

/// Identity of a registered root
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RootId(u64);

static NEXT_ROOT_ID: AtomicU64 = AtomicU64::new(1);

impl RootId {
    /// A fresh id, unique within this process
    pub fn generate() -> Self {
        Self(NEXT_ROOT_ID.fetch_add(1, Ordering::Relaxed))
    }

    pub fn as_u64(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for RootId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "root#{}", self.0)
    }
}

/// A top-level window or page taking part in global broadcasts
pub trait Root: Control + Themeable {
    fn root_id(&self) -> RootId;

    /// Current DPI scale factor, 1.0 meaning unscaled
    fn dpi_scale(&self) -> f32;

    fn rescale_dpi(&self);

    /// Re-read every translatable text under this root
    fn translate(&self);
}
