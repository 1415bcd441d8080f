//! Process-wide theme context
//!
//! [`ThemeContext`] bundles the theme catalog with the root registry and is the
//! entry point for global theme operations: switching the active style pushes
//! it to every registered root, which cascades it to its widgets.
//!
//! Windows and pages take the context they belong to at construction. Apps
//! normally share the lazily created global; tests build isolated contexts.
//!
//! ```rust
//! use std::sync::Arc;
//! use tinct_theme::StyleId;
//! use tinct_widgets::{Frame, ThemeContext, Widget};
//!
//! let ctx = Arc::new(ThemeContext::new());
//! let window = Frame::window(&ctx, "Main");
//! let button = Arc::new(Widget::new("ok"));
//! window.add_child(button.clone());
//!
//! ctx.set_active_style(StyleId::Green);
//! assert_eq!(button.current_style(), StyleId::Green);
//! ```

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, OnceLock, PoisonError, RwLock};

use tinct_theme::{Color, MenuPalette, MenuStyleId, StyleId, ThemeCatalog, ThemeConfig};
use tracing::debug;

use crate::control::{Root, RootId};
use crate::error::WidgetError;
use crate::registry::WidgetRegistry;

/// Global context, created on first use
static THEME_CONTEXT: OnceLock<Arc<ThemeContext>> = OnceLock::new();

/// Theme catalog plus the registry of live roots
pub struct ThemeContext {
    catalog: ThemeCatalog,
    registry: WidgetRegistry,
    menu_style: RwLock<MenuStyleId>,
    dpi_scale: AtomicBool,
}

impl ThemeContext {
    /// Context with the stock catalog, `Blue` active, DPI scaling off
    pub fn new() -> Self {
        Self::with_catalog(ThemeCatalog::new())
    }

    pub fn with_catalog(catalog: ThemeCatalog) -> Self {
        Self {
            catalog,
            registry: WidgetRegistry::new(),
            menu_style: RwLock::new(MenuStyleId::default()),
            dpi_scale: AtomicBool::new(false),
        }
    }

    /// Context set up from persisted settings. No roots exist yet, so nothing
    /// is pushed.
    pub fn from_config(config: &ThemeConfig) -> Self {
        let ctx = Self::with_catalog(ThemeCatalog::with_font_sizes(config.fonts));
        if let Some(colorful) = config.colorful {
            ctx.catalog.init_colorful_palette(colorful.accent, colorful.fore);
        }
        ctx.catalog.set_active_style(config.style);
        ctx.set_menu_style(config.menu_style);
        ctx.set_dpi_scale_enabled(config.dpi_scale);
        ctx
    }

    pub fn from_toml_str(src: &str) -> Result<Self, WidgetError> {
        let config = ThemeConfig::from_toml_str(src)?;
        Ok(Self::from_config(&config))
    }

    // ========== Global instance ==========

    /// Install the global context from `config`.
    ///
    /// Fails if the global context already exists, including one created
    /// implicitly by [`ThemeContext::global`].
    pub fn init(config: &ThemeConfig) -> Result<&'static Arc<ThemeContext>, WidgetError> {
        THEME_CONTEXT
            .set(Arc::new(Self::from_config(config)))
            .map_err(|_| WidgetError::AlreadyInitialized)?;
        Ok(Self::global())
    }

    /// The global context, created with defaults on first use
    pub fn global() -> &'static Arc<ThemeContext> {
        THEME_CONTEXT.get_or_init(|| Arc::new(ThemeContext::new()))
    }

    /// The global context, if it exists yet
    pub fn try_global() -> Option<&'static Arc<ThemeContext>> {
        THEME_CONTEXT.get()
    }

    // ========== Accessors ==========

    pub fn catalog(&self) -> &ThemeCatalog {
        &self.catalog
    }

    pub fn registry(&self) -> &WidgetRegistry {
        &self.registry
    }

    pub fn active_style(&self) -> StyleId {
        self.catalog.active_style()
    }

    // ========== Style switching ==========

    /// Make `style` active and push it to every registered root
    pub fn set_active_style(&self, style: StyleId) {
        debug!("ThemeContext::set_active_style - {}", style);
        self.catalog.set_active_style(style);
        self.registry.push_style(style, &self.catalog);
    }

    /// Rebuild the `Colorful` palette, activate it, and push it to every root
    pub fn init_colorful_palette(&self, accent: Color, fore: Color) {
        self.catalog.init_colorful_palette(accent, fore);
        self.registry.push_style(StyleId::Colorful, &self.catalog);
    }

    // ========== Menus ==========

    pub fn menu_style(&self) -> MenuStyleId {
        *self.menu_style.read().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn set_menu_style(&self, style: MenuStyleId) {
        *self.menu_style.write().unwrap_or_else(PoisonError::into_inner) = style;
    }

    /// Colors of the current menu style
    pub fn menu_palette(&self) -> Arc<MenuPalette> {
        self.catalog.menus().get(self.menu_style())
    }

    // ========== DPI and translation ==========

    pub fn dpi_scale_enabled(&self) -> bool {
        self.dpi_scale.load(Ordering::SeqCst)
    }

    pub fn set_dpi_scale_enabled(&self, enabled: bool) {
        self.dpi_scale.store(enabled, Ordering::SeqCst);
    }

    /// Rescale roots whose DPI scale is not 1. Does nothing while DPI scaling
    /// is disabled.
    pub fn push_dpi_rescale(&self) -> usize {
        if !self.dpi_scale_enabled() {
            debug!("ThemeContext::push_dpi_rescale - DPI scaling disabled");
            return 0;
        }
        self.registry.push_dpi_rescale()
    }

    pub fn push_translate(&self) -> usize {
        self.registry.push_translate()
    }

    // ========== Roots ==========

    pub fn register_root(&self, id: RootId, root: &Arc<dyn Root>) -> bool {
        self.registry.register_root(id, root)
    }

    pub fn unregister_root(&self, id: RootId) {
        self.registry.unregister_root(id);
    }
}

impl Default for ThemeContext {
    fn default() -> Self {
        Self::new()
    }
}
