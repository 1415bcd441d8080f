use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, PoisonError, RwLock};

use tinct_theme::{Palette, StyleId, ThemeCatalog};
use tracing::debug;

use super::{StyleState, WidgetColors};
use crate::cascade::{adopt, cascade, translate_tree};
use crate::context::ThemeContext;
use crate::control::{Control, ControlKind, Root, RootId, Themeable};

/// Whether a [`Frame`] is a top-level window or a page
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameKind {
    Window,
    Page,
}

/// Top-level window or page.
///
/// A frame registers itself with its context when built and unregisters on
/// [`Frame::close`] or when the last reference is dropped. It starts in the
/// context's active style and cascades every style it is assigned.
pub struct Frame {
    id: RootId,
    kind: FrameKind,
    title: String,
    ctx: Arc<ThemeContext>,
    style: StyleState,
    colors: RwLock<WidgetColors>,
    children: RwLock<Vec<Arc<dyn Control>>>,
    dpi_scale: RwLock<f32>,
    rescales: AtomicUsize,
    translations: AtomicUsize,
    closed: AtomicBool,
}

impl Frame {
    pub fn window(ctx: &Arc<ThemeContext>, title: impl Into<String>) -> Arc<Self> {
        Self::build(ctx, FrameKind::Window, title.into())
    }

    pub fn page(ctx: &Arc<ThemeContext>, title: impl Into<String>) -> Arc<Self> {
        Self::build(ctx, FrameKind::Page, title.into())
    }

    fn build(ctx: &Arc<ThemeContext>, kind: FrameKind, title: String) -> Arc<Self> {
        let style = ctx.active_style();
        let frame = Arc::new(Self {
            id: RootId::generate(),
            kind,
            title,
            ctx: ctx.clone(),
            style: StyleState::new(style),
            colors: RwLock::new(WidgetColors::default()),
            children: RwLock::new(Vec::new()),
            dpi_scale: RwLock::new(1.0),
            rescales: AtomicUsize::new(0),
            translations: AtomicUsize::new(0),
            closed: AtomicBool::new(false),
        });

        if let Some(palette) = frame.style.assign(style, ctx.catalog()) {
            frame.apply_palette(&palette);
        }

        let root: Arc<dyn Root> = frame.clone();
        ctx.register_root(frame.id, &root);
        debug!("Frame: opened {:?} {:?} as {}", kind, frame.title, frame.id);
        frame
    }

    pub fn id(&self) -> RootId {
        self.id
    }

    pub fn frame_kind(&self) -> FrameKind {
        self.kind
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn context(&self) -> &Arc<ThemeContext> {
        &self.ctx
    }

    pub fn current_style(&self) -> StyleId {
        self.style.style()
    }

    pub fn colors(&self) -> WidgetColors {
        *self.colors.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Attach `child` and bring it to this frame's style
    pub fn add_child(&self, child: Arc<dyn Control>) {
        self.children
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(child.clone());
        adopt(child.as_ref(), self.current_style(), self.ctx.catalog());
    }

    pub fn set_dpi_scale(&self, scale: f32) {
        *self.dpi_scale.write().unwrap_or_else(PoisonError::into_inner) = scale;
    }

    pub fn rescale_count(&self) -> usize {
        self.rescales.load(Ordering::SeqCst)
    }

    pub fn translation_count(&self) -> usize {
        self.translations.load(Ordering::SeqCst)
    }

    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::SeqCst)
    }

    /// Unregister from the context. Further calls do nothing.
    pub fn close(&self) {
        if !self.closed.swap(true, Ordering::SeqCst) {
            self.ctx.unregister_root(self.id);
            debug!("Frame: closed {}", self.id);
        }
    }
}

impl Drop for Frame {
    fn drop(&mut self) {
        self.close();
    }
}

impl Control for Frame {
    fn kind(&self) -> ControlKind {
        match self.kind {
            FrameKind::Window => ControlKind::Window,
            FrameKind::Page => ControlKind::Page,
        }
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
}

impl Themeable for Frame {
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
            fill: palette.fill.plain,
            fore: palette.font.primary,
            border: palette.primary_color,
        };
    }
}

impl Root for Frame {
    fn root_id(&self) -> RootId {
        self.id
    }

    fn dpi_scale(&self) -> f32 {
        *self.dpi_scale.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn rescale_dpi(&self) {
        self.rescales.fetch_add(1, Ordering::SeqCst);
        debug!("Frame: {} rescaled for DPI {}", self.id, self.dpi_scale());
    }

    fn translate(&self) {
        self.translations.fetch_add(1, Ordering::SeqCst);
        translate_tree(self);
    }
}
