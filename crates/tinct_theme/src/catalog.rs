//! Theme catalog
//!
//! [`ThemeCatalog`] maps every [`StyleId`] to its [`Palette`] and tracks which
//! style is active. Lookups never fail: an unknown id resolves to the default
//! style. The catalog also owns the [`MenuCatalog`] of menu color sets.
//!
//! The catalog only records the active style. Pushing a style change out to
//! live windows is the job of the widget layer, which owns the root registry.

use std::sync::{Arc, Mutex, PoisonError, RwLock};

use rustc_hash::FxHashMap;
use tracing::{debug, warn};

use crate::color::Color;
use crate::error::ThemeError;
use crate::palette::{FontSizes, MenuPalette, Palette};
use crate::presets::{
    accent, builtin_menu_palettes, builtin_palettes, colorful_palette, menu_palette,
};
use crate::style::{MenuStyleId, StyleId};

/// Non-fatal conditions reported to the host application
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ThemeDiagnostic {
    /// A palette was registered for an id that already had one; the first
    /// registration was kept.
    DuplicatePalette(StyleId),
    /// Same as `DuplicatePalette`, for the menu catalog.
    DuplicateMenuPalette(MenuStyleId),
    /// A lookup for an unregistered id was redirected to the default style,
    /// and the active style was reset to it.
    FallbackToDefault { requested: StyleId },
}

/// Host hook receiving [`ThemeDiagnostic`]s. Must not block.
pub type DiagnosticCallback = Arc<dyn Fn(&ThemeDiagnostic) + Send + Sync>;

#[derive(Default)]
struct Diagnostics {
    callback: Mutex<Option<DiagnosticCallback>>,
}

impl Diagnostics {
    fn set(&self, callback: Option<DiagnosticCallback>) {
        *self.callback.lock().unwrap_or_else(PoisonError::into_inner) = callback;
    }

    fn report(&self, diagnostic: ThemeDiagnostic) {
        let callback = self
            .callback
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();
        if let Some(callback) = callback {
            callback(&diagnostic);
        }
    }
}

/// Style id to palette mapping plus the active style pointer
pub struct ThemeCatalog {
    palettes: RwLock<FxHashMap<StyleId, Arc<Palette>>>,
    active: RwLock<StyleId>,
    fonts: FontSizes,
    menus: MenuCatalog,
    diagnostics: Arc<Diagnostics>,
}

impl ThemeCatalog {
    /// Catalog holding every stock palette, with `Blue` active
    pub fn new() -> Self {
        Self::with_font_sizes(FontSizes::default())
    }

    /// Stock catalog whose palettes use the given font sizes
    pub fn with_font_sizes(fonts: FontSizes) -> Self {
        let catalog = Self::empty_with_font_sizes(fonts);
        for palette in builtin_palettes(fonts) {
            let _ = catalog.register_palette(palette);
        }
        let _ = catalog.register_palette(colorful_palette(
            accent::BLUE,
            Color::WHITE,
            fonts,
        ));
        catalog
    }

    /// Catalog with no palettes registered.
    ///
    /// Menu palettes are still seeded.
    pub fn empty() -> Self {
        Self::empty_with_font_sizes(FontSizes::default())
    }

    fn empty_with_font_sizes(fonts: FontSizes) -> Self {
        let diagnostics = Arc::new(Diagnostics::default());
        Self {
            palettes: RwLock::new(FxHashMap::default()),
            active: RwLock::new(StyleId::DEFAULT),
            fonts,
            menus: MenuCatalog::with_diagnostics(diagnostics.clone()),
            diagnostics,
        }
    }

    /// Install (or clear) the diagnostic hook for this catalog and its menus
    pub fn set_diagnostic_callback(&self, callback: Option<DiagnosticCallback>) {
        self.diagnostics.set(callback);
    }

    /// Font sizes the stock palettes were built with
    pub fn font_sizes(&self) -> FontSizes {
        self.fonts
    }

    pub fn menus(&self) -> &MenuCatalog {
        &self.menus
    }

    // ========== Registration ==========

    /// Register a palette under its own id.
    ///
    /// The first registration for an id wins; a later one is dropped, logged,
    /// and reported as [`ThemeDiagnostic::DuplicatePalette`].
    pub fn register_palette(&self, palette: Palette) -> Result<(), ThemeError> {
        let id = palette.id;
        {
            let mut palettes = self.palettes.write().unwrap_or_else(PoisonError::into_inner);
            if !palettes.contains_key(&id) {
                palettes.insert(id, Arc::new(palette));
                return Ok(());
            }
        }

        warn!("palette for style {} is already registered, keeping the first", id);
        self.diagnostics.report(ThemeDiagnostic::DuplicatePalette(id));
        Err(ThemeError::DuplicatePalette(id))
    }

    pub fn contains(&self, id: StyleId) -> bool {
        self.palettes
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(&id)
    }

    /// All registered style ids, ascending
    pub fn styles(&self) -> Vec<StyleId> {
        let mut ids: Vec<StyleId> = self
            .palettes
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .keys()
            .copied()
            .collect();
        ids.sort_unstable();
        ids
    }

    // ========== Lookup ==========

    /// Pure lookup, no fallback and no side effects
    pub fn resolve(&self, id: StyleId) -> Option<Arc<Palette>> {
        self.palettes
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&id)
            .cloned()
    }

    /// Palette for `id`, never failing.
    ///
    /// When `id` has no palette the active style is reset to
    /// [`StyleId::DEFAULT`] and the default palette is returned instead.
    pub fn palette(&self, id: StyleId) -> Arc<Palette> {
        if let Some(palette) = self.resolve(id) {
            return palette;
        }

        debug!("no palette for style {}, falling back to {}", id, StyleId::DEFAULT);
        *self.active.write().unwrap_or_else(PoisonError::into_inner) = StyleId::DEFAULT;
        self.diagnostics
            .report(ThemeDiagnostic::FallbackToDefault { requested: id });

        self.resolve(StyleId::DEFAULT)
            .unwrap_or_else(|| Arc::new(default_palette(self.fonts)))
    }

    /// Palette of the active style
    pub fn active_palette(&self) -> Arc<Palette> {
        self.palette(self.active_style())
    }

    // ========== Active style ==========

    pub fn active_style(&self) -> StyleId {
        *self.active.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Record `style` as active. Last writer wins.
    pub fn set_active_style(&self, style: StyleId) {
        let mut active = self.active.write().unwrap_or_else(PoisonError::into_inner);
        if *active != style {
            debug!("ThemeCatalog::set_active_style - {} -> {}", *active, style);
        }
        *active = style;
    }

    /// Rebuild the `Colorful` palette around a new accent and fore color and
    /// make it the active style.
    pub fn init_colorful_palette(&self, accent: Color, fore: Color) {
        let palette = colorful_palette(accent, fore, self.fonts);
        self.palettes
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(StyleId::Colorful, Arc::new(palette));
        debug!("colorful palette set to accent {} / fore {}", accent, fore);
        self.set_active_style(StyleId::Colorful);
    }

    /// Ids offered by theme pickers: everything from `Blue` up to, but not
    /// including, `Colorful`.
    pub fn popular_styles(&self) -> Vec<StyleId> {
        popular_styles()
    }
}

impl Default for ThemeCatalog {
    fn default() -> Self {
        Self::new()
    }
}

/// Stock ids with `Blue <= id < Colorful`, ascending
pub fn popular_styles() -> Vec<StyleId> {
    StyleId::ALL
        .into_iter()
        .filter(|s| s.value() >= StyleId::Blue.value() && s.value() < StyleId::Colorful.value())
        .collect()
}

/// Stand-in used only if the default style was never registered
fn default_palette(fonts: FontSizes) -> Palette {
    builtin_palettes(fonts)
        .into_iter()
        .find(|p| p.id == StyleId::DEFAULT)
        .unwrap_or_else(|| colorful_palette(accent::BLUE, Color::WHITE, fonts))
}

/// Menu style id to menu palette mapping
pub struct MenuCatalog {
    palettes: RwLock<FxHashMap<MenuStyleId, Arc<MenuPalette>>>,
    diagnostics: Arc<Diagnostics>,
}

impl MenuCatalog {
    /// Menu catalog seeded with the Custom, Black and White sets
    pub fn new() -> Self {
        Self::with_diagnostics(Arc::new(Diagnostics::default()))
    }

    fn with_diagnostics(diagnostics: Arc<Diagnostics>) -> Self {
        let catalog = Self {
            palettes: RwLock::new(FxHashMap::default()),
            diagnostics,
        };
        for palette in builtin_menu_palettes() {
            let _ = catalog.register(palette);
        }
        catalog
    }

    /// First registration wins, like [`ThemeCatalog::register_palette`]
    pub fn register(&self, palette: MenuPalette) -> Result<(), ThemeError> {
        let id = palette.id;
        {
            let mut palettes = self.palettes.write().unwrap_or_else(PoisonError::into_inner);
            if !palettes.contains_key(&id) {
                palettes.insert(id, Arc::new(palette));
                return Ok(());
            }
        }

        warn!("menu palette {:?} is already registered, keeping the first", id);
        self.diagnostics
            .report(ThemeDiagnostic::DuplicateMenuPalette(id));
        Err(ThemeError::DuplicateMenuPalette(id))
    }

    pub fn resolve(&self, id: MenuStyleId) -> Option<Arc<MenuPalette>> {
        self.palettes
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&id)
            .cloned()
    }

    /// Menu palette for `id`, falling back to the default menu style
    pub fn get(&self, id: MenuStyleId) -> Arc<MenuPalette> {
        if let Some(palette) = self.resolve(id) {
            return palette;
        }
        debug!("no menu palette for {:?}, using {:?}", id, MenuStyleId::default());
        self.resolve(MenuStyleId::default())
            .unwrap_or_else(|| Arc::new(menu_palette(MenuStyleId::default())))
    }

    pub fn len(&self) -> usize {
        self.palettes.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for MenuCatalog {
    fn default() -> Self {
        Self::new()
    }
}
