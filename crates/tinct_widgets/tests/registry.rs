use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;

use pretty_assertions::assert_eq;
use tinct_theme::{Palette, StyleId, ThemeCatalog};
use tinct_widgets::{
    Control, ControlKind, Frame, RawContainer, RawKind, Root, RootId, StyleState, ThemeContext,
    Themeable, Widget, WidgetRegistry,
};

/// Root that is never registered on its own
struct StubRoot {
    id: RootId,
    name: &'static str,
    style: StyleState,
    scale: f32,
    rescales: AtomicUsize,
    translations: AtomicUsize,
}

impl StubRoot {
    fn new(id: RootId, name: &'static str, scale: f32) -> Arc<Self> {
        Arc::new(Self {
            id,
            name,
            style: StyleState::default(),
            scale,
            rescales: AtomicUsize::new(0),
            translations: AtomicUsize::new(0),
        })
    }
}

impl Control for StubRoot {
    fn kind(&self) -> ControlKind {
        ControlKind::Window
    }

    fn children(&self) -> Vec<Arc<dyn Control>> {
        Vec::new()
    }

    fn as_themeable(&self) -> Option<&dyn Themeable> {
        Some(self)
    }
}

impl Themeable for StubRoot {
    fn style(&self) -> StyleId {
        self.style.style()
    }

    fn set_style(&self, style: StyleId, catalog: &ThemeCatalog) {
        self.style.assign(style, catalog);
    }

    fn custom_style_mode(&self) -> bool {
        self.style.custom_mode()
    }

    fn set_custom_style_mode(&self, custom: bool) {
        self.style.set_custom_mode(custom);
    }

    fn apply_palette(&self, _palette: &Palette) {}
}

impl Root for StubRoot {
    fn root_id(&self) -> RootId {
        self.id
    }

    fn dpi_scale(&self) -> f32 {
        self.scale
    }

    fn rescale_dpi(&self) {
        self.rescales.fetch_add(1, Ordering::SeqCst);
    }

    fn translate(&self) {
        self.translations.fetch_add(1, Ordering::SeqCst);
    }
}

fn as_root(stub: &Arc<StubRoot>) -> Arc<dyn Root> {
    stub.clone()
}

fn registered_name(
    registry: &WidgetRegistry,
    id: RootId,
    candidates: &[&Arc<StubRoot>],
) -> &'static str {
    let root = registry.get(id).expect("root should be live");
    let ptr = Arc::as_ptr(&root) as *const ();
    for &stub in candidates {
        if Arc::as_ptr(stub) as *const () == ptr {
            return stub.name;
        }
    }
    panic!("{id} is not one of the candidates");
}

#[test]
fn second_registration_under_same_id_is_rejected() {
    let registry = WidgetRegistry::new();
    let id = RootId::generate();
    let first = StubRoot::new(id, "first", 1.0);
    let second = StubRoot::new(id, "second", 1.0);

    assert!(registry.register_root(id, &as_root(&first)));
    assert!(!registry.register_root(id, &as_root(&second)));

    assert_eq!(registry.len(), 1);
    assert_eq!(registered_name(&registry, id, &[&first, &second]), "first");
}

#[test]
fn unregister_then_register_replaces_entry() {
    let registry = WidgetRegistry::new();
    let id = RootId::generate();
    let first = StubRoot::new(id, "first", 1.0);
    let second = StubRoot::new(id, "second", 1.0);

    assert!(registry.register_root(id, &as_root(&first)));
    registry.unregister_root(id);
    assert!(!registry.contains(id));
    assert!(registry.register_root(id, &as_root(&second)));

    assert_eq!(registered_name(&registry, id, &[&first, &second]), "second");
}

#[test]
fn unregistering_unknown_id_is_a_no_op() {
    let registry = WidgetRegistry::new();
    registry.unregister_root(RootId::generate());
    assert!(registry.is_empty());
}

#[test]
fn registry_does_not_keep_roots_alive() {
    let registry = WidgetRegistry::new();
    let id = RootId::generate();
    let stub = StubRoot::new(id, "short-lived", 1.0);
    registry.register_root(id, &as_root(&stub));
    drop(stub);

    // The entry stays until unregistered, but sweeps skip it.
    assert!(registry.contains(id));
    assert!(registry.get(id).is_none());
    assert!(registry.snapshot().is_empty());
    assert_eq!(registry.push_translate(), 0);
}

#[test]
fn ids_and_snapshot_are_in_id_order() {
    let registry = WidgetRegistry::new();
    let ids: Vec<RootId> = (0..4).map(|_| RootId::generate()).collect();
    let stubs: Vec<Arc<StubRoot>> = ids
        .iter()
        .rev()
        .map(|id| StubRoot::new(*id, "stub", 1.0))
        .collect();
    for stub in &stubs {
        registry.register_root(stub.id, &as_root(stub));
    }

    assert_eq!(registry.ids(), ids);
    let snapshot: Vec<RootId> = registry.snapshot().iter().map(|r| r.root_id()).collect();
    assert_eq!(snapshot, ids);
}

#[test]
fn push_style_reaches_every_root_and_descendant() {
    let ctx = Arc::new(ThemeContext::new());
    let r1 = Frame::window(&ctx, "R1");
    let r2 = Frame::page(&ctx, "R2");

    let a = Arc::new(Widget::new("a"));
    let raw = Arc::new(RawContainer::new(RawKind::TableLayout));
    let b = Arc::new(Widget::new("b"));
    raw.add_child(b.clone());
    r1.add_child(a.clone());
    r1.add_child(raw);

    let c = Arc::new(Widget::new("c"));
    r2.add_child(c.clone());

    let pushed = ctx.registry().push_style(StyleId::Purple, ctx.catalog());

    assert_eq!(pushed, 2);
    for style in [
        r1.current_style(),
        r2.current_style(),
        a.current_style(),
        b.current_style(),
        c.current_style(),
    ] {
        assert_eq!(style, StyleId::Purple);
    }
}

#[test]
fn dpi_rescale_skips_unscaled_roots() {
    let registry = WidgetRegistry::new();
    let unscaled = StubRoot::new(RootId::generate(), "unscaled", 1.0);
    let scaled = StubRoot::new(RootId::generate(), "scaled", 1.5);
    registry.register_root(unscaled.id, &as_root(&unscaled));
    registry.register_root(scaled.id, &as_root(&scaled));

    assert_eq!(registry.push_dpi_rescale(), 1);
    assert_eq!(unscaled.rescales.load(Ordering::SeqCst), 0);
    assert_eq!(scaled.rescales.load(Ordering::SeqCst), 1);
}

#[test]
fn translate_reaches_every_root() {
    let registry = WidgetRegistry::new();
    let stubs: Vec<Arc<StubRoot>> = (0..3)
        .map(|_| StubRoot::new(RootId::generate(), "stub", 1.0))
        .collect();
    for stub in &stubs {
        registry.register_root(stub.id, &as_root(stub));
    }

    assert_eq!(registry.push_translate(), 3);
    for stub in &stubs {
        assert_eq!(stub.translations.load(Ordering::SeqCst), 1);
    }
}

#[test]
fn concurrent_registration_and_broadcasts() {
    let ctx = Arc::new(ThemeContext::new());
    let keep = Frame::window(&ctx, "kept");

    thread::scope(|scope| {
        for _ in 0..4 {
            let ctx = &ctx;
            scope.spawn(move || {
                for _ in 0..50 {
                    let frame = Frame::page(ctx, "transient");
                    frame.add_child(Arc::new(Widget::new("child")));
                    frame.close();
                }
            });
        }
        scope.spawn(|| {
            for i in 0..50 {
                let style = if i % 2 == 0 { StyleId::Green } else { StyleId::Red };
                ctx.set_active_style(style);
            }
        });
    });

    assert_eq!(ctx.registry().ids(), vec![keep.id()]);
    assert_eq!(keep.current_style(), StyleId::Red);
}
