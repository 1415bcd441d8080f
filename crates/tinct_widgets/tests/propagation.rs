use std::sync::Arc;

use tinct_theme::{StyleId, ThemeCatalog};
use tinct_widgets::{
    apply_to_raw_container, cascade, find_themeable, find_translatable, translate_tree, Control,
    ControlKind, Frame, Panel, PanelKind, RawContainer, RawKind, ThemeContext, Themeable, Widget,
};

fn names(controls: &[Arc<dyn Control>]) -> Vec<ControlKind> {
    controls.iter().map(|c| c.kind()).collect()
}

fn includes(controls: &[Arc<dyn Control>], widget: &Arc<Widget>) -> bool {
    let target = Arc::as_ptr(widget) as *const ();
    controls.iter().any(|c| Arc::as_ptr(c) as *const () == target)
}

#[test]
fn example_end_to_end_cascade_reaches_raw_table_layout_children() {
    let catalog = ThemeCatalog::new();
    let root = RawContainer::new(RawKind::Panel);
    let a = Arc::new(Widget::new("A"));
    let p = Arc::new(RawContainer::new(RawKind::TableLayout));
    let b = Arc::new(Widget::new("B"));
    p.add_child(b.clone());
    root.add_child(a.clone());
    root.add_child(p.clone());

    cascade(&root, StyleId::Green, &catalog);

    assert_eq!(a.current_style(), StyleId::Green);
    assert_eq!(b.current_style(), StyleId::Green);
}

#[test]
fn custom_mode_skips_widget_but_not_its_descendants() {
    let catalog = ThemeCatalog::new();
    let root = RawContainer::new(RawKind::Panel);
    let panel = Arc::new(RawContainer::new(RawKind::Panel));
    let widget_a = Arc::new(Widget::new("A").custom().with_style(StyleId::Red));
    let widget_b = Arc::new(Widget::new("B"));
    widget_a.add_child(widget_b.clone());
    panel.add_child(widget_a.clone());
    root.add_child(panel.clone());

    cascade(&root, StyleId::Green, &catalog);

    assert_eq!(widget_a.current_style(), StyleId::Red);
    assert_eq!(widget_b.current_style(), StyleId::Green);
}

#[test]
fn custom_mode_through_a_toolkit_panel() {
    let catalog = ThemeCatalog::new();
    let root = RawContainer::new(RawKind::Panel);
    let panel = Arc::new(Panel::new(PanelKind::Panel, "panel"));
    let widget_a = Arc::new(Widget::new("A").custom().with_style(StyleId::Red));
    let widget_b = Arc::new(Widget::new("B"));
    widget_a.add_child(widget_b.clone());
    panel.add_child(widget_a.clone());
    root.add_child(panel.clone());

    cascade(&root, StyleId::Orange, &catalog);

    assert_eq!(panel.current_style(), StyleId::Orange);
    assert_eq!(widget_a.current_style(), StyleId::Red);
    assert_eq!(widget_b.current_style(), StyleId::Orange);
}

#[test]
fn custom_mode_is_sticky_until_cleared() {
    let catalog = ThemeCatalog::new();
    let root = RawContainer::new(RawKind::FlowLayout);
    let widget = Arc::new(Widget::new("sticky").custom().with_style(StyleId::Gray));
    root.add_child(widget.clone());

    cascade(&root, StyleId::Green, &catalog);
    cascade(&root, StyleId::Red, &catalog);
    assert_eq!(widget.current_style(), StyleId::Gray);

    widget.set_custom_style_mode(false);
    cascade(&root, StyleId::Red, &catalog);
    assert_eq!(widget.current_style(), StyleId::Red);
}

#[test]
fn cascade_is_idempotent() {
    let catalog = ThemeCatalog::new();
    let root = RawContainer::new(RawKind::Panel);
    let plain = Arc::new(Widget::new("plain"));
    let custom = Arc::new(Widget::new("custom").custom().with_style(StyleId::Purple));
    let panel = Arc::new(Panel::new(PanelKind::TableLayout, "grid"));
    let nested = Arc::new(Widget::new("nested"));
    panel.add_child(nested.clone());
    root.add_child(plain.clone());
    root.add_child(custom.clone());
    root.add_child(panel.clone());

    let snapshot = || {
        [
            plain.current_style(),
            custom.current_style(),
            panel.current_style(),
            nested.current_style(),
        ]
    };

    cascade(&root, StyleId::DarkBlue, &catalog);
    let once = snapshot();
    cascade(&root, StyleId::DarkBlue, &catalog);
    let twice = snapshot();

    assert_eq!(once, twice);
    assert_eq!(
        once,
        [StyleId::DarkBlue, StyleId::Purple, StyleId::DarkBlue, StyleId::DarkBlue]
    );
}

#[test]
fn toolkit_page_is_pruned_but_raw_table_layout_is_walked() {
    let ctx = Arc::new(ThemeContext::new());
    let root = RawContainer::new(RawKind::Panel);

    let page = Frame::page(&ctx, "nested page");
    let inside_page = Arc::new(Widget::new("inside page"));
    page.add_child(inside_page.clone());

    let table = Arc::new(RawContainer::new(RawKind::TableLayout));
    let inside_table = Arc::new(Widget::new("inside table"));
    table.add_child(inside_table.clone());

    root.add_child(page.clone());
    root.add_child(table.clone());

    let found = find_themeable(&root);
    assert_eq!(names(&found), vec![ControlKind::Page, ControlKind::Widget]);
    assert!(includes(&found, &inside_table));
    assert!(!includes(&found, &inside_page));

    // The page still styles its own children when it is assigned.
    cascade(&root, StyleId::Green, ctx.catalog());
    assert_eq!(page.current_style(), StyleId::Green);
    assert_eq!(inside_page.current_style(), StyleId::Green);
    assert_eq!(inside_table.current_style(), StyleId::Green);
}

#[test]
fn every_toolkit_container_kind_is_pruned() {
    for kind in [PanelKind::Panel, PanelKind::TableLayout, PanelKind::FlowLayout] {
        let root = RawContainer::new(RawKind::Panel);
        let panel = Arc::new(Panel::new(kind, "panel"));
        panel.add_child(Arc::new(Widget::new("child")));
        root.add_child(panel);

        assert_eq!(find_themeable(&root).len(), 1, "{kind:?}");
    }
}

#[test]
fn every_raw_container_kind_is_walked() {
    for kind in [RawKind::Panel, RawKind::TableLayout, RawKind::FlowLayout] {
        let root = RawContainer::new(RawKind::Panel);
        let raw = Arc::new(RawContainer::new(kind));
        raw.add_child(Arc::new(Widget::new("child")));
        root.add_child(raw);

        assert_eq!(find_themeable(&root).len(), 1, "{kind:?}");
    }
}

#[test]
fn translation_walk_is_not_pruned() {
    let root = RawContainer::new(RawKind::Panel);
    let panel = Arc::new(Panel::new(PanelKind::FlowLayout, "flow"));
    let deep = Arc::new(Widget::new("deep"));
    panel.add_child(deep.clone());
    let top = Arc::new(Widget::new("top"));
    root.add_child(top.clone());
    root.add_child(panel);

    assert_eq!(find_translatable(&root).len(), 2);
    assert_eq!(translate_tree(&root), 2);
    assert_eq!(deep.translation_count(), 1);
    assert_eq!(top.translation_count(), 1);
}

#[test]
fn raw_container_application_only_handles_raw_kinds() {
    let catalog = ThemeCatalog::new();

    let raw = RawContainer::new(RawKind::FlowLayout);
    let child = Arc::new(Widget::new("child"));
    raw.add_child(child.clone());
    assert!(apply_to_raw_container(&raw, StyleId::Red, &catalog));
    assert_eq!(child.current_style(), StyleId::Red);

    let panel = Panel::new(PanelKind::Panel, "toolkit");
    let other = Arc::new(Widget::new("other"));
    panel.add_child(other.clone());
    assert!(!apply_to_raw_container(&panel, StyleId::Red, &catalog));
    assert_eq!(other.current_style(), StyleId::Blue);
}

#[test]
fn context_menu_follows_its_container_unless_custom() {
    let catalog = ThemeCatalog::new();
    let menu = Arc::new(Widget::context_menu("menu"));
    let panel = Panel::new(PanelKind::Panel, "with menu").with_context_menu(menu.clone());

    panel.set_style(StyleId::LayuiRed, &catalog);
    assert_eq!(menu.current_style(), StyleId::LayuiRed);

    menu.set_custom_style_mode(true);
    panel.set_style(StyleId::Gray, &catalog);
    assert_eq!(menu.current_style(), StyleId::LayuiRed);
}

#[test]
fn assigned_style_recolors_from_the_palette() {
    let catalog = ThemeCatalog::new();
    let root = RawContainer::new(RawKind::Panel);
    let widget = Arc::new(Widget::new("button"));
    root.add_child(widget.clone());

    cascade(&root, StyleId::Red, &catalog);

    let palette = catalog.palette(StyleId::Red);
    assert_eq!(widget.colors().fill, palette.fill.primary);
    assert_eq!(widget.colors().fore, palette.fore_color);
}

#[test]
fn assigning_custom_keeps_existing_colors() {
    let catalog = ThemeCatalog::new();
    let widget = Widget::new("button");
    widget.set_style(StyleId::Green, &catalog);
    let green = widget.colors();

    widget.set_style(StyleId::Custom, &catalog);

    assert_eq!(widget.current_style(), StyleId::Custom);
    assert_eq!(widget.colors(), green);
}
