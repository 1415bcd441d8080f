//! Style propagation through a control subtree
//!
//! [`cascade`] assigns a style to every themeable descendant of a container.
//! Toolkit containers ([`ControlKind::cascades_itself`]) are assigned but not
//! walked into: their own style assignment cascades to their children, so
//! walking them here would repeat that work at every nesting level. A toolkit
//! container in custom style mode will not cascade, so the walk does go
//! through it. Framework containers are always walked into.
//!
//! Children are snapshotted while walking. Controls attached during a cascade
//! may or may not be visited.

use std::sync::Arc;

use tinct_theme::{StyleId, ThemeCatalog};
use tracing::{debug, trace};

use crate::control::Control;

/// Themeable descendants of `container` reached by a cascade, depth-first
pub fn find_themeable(container: &dyn Control) -> Vec<Arc<dyn Control>> {
    let mut found = Vec::new();
    collect_themeable(container, &mut found);
    found
}

fn collect_themeable(container: &dyn Control, found: &mut Vec<Arc<dyn Control>>) {
    for child in container.children() {
        let themeable = child.as_themeable();
        if themeable.is_some() {
            found.push(child.clone());
        }

        let self_cascading =
            child.kind().cascades_itself() && themeable.is_some_and(|t| !t.custom_style_mode());
        if self_cascading {
            continue;
        }

        collect_themeable(child.as_ref(), found);
    }
}

/// Translatable descendants of `container`, depth-first, without pruning
pub fn find_translatable(container: &dyn Control) -> Vec<Arc<dyn Control>> {
    let mut found = Vec::new();
    collect_translatable(container, &mut found);
    found
}

fn collect_translatable(container: &dyn Control, found: &mut Vec<Arc<dyn Control>>) {
    for child in container.children() {
        if child.as_translatable().is_some() {
            found.push(child.clone());
        }
        collect_translatable(child.as_ref(), found);
    }
}

/// Assign `style` to the themeable descendants of `container` and to its
/// context menu, skipping anything in custom style mode.
///
/// Returns how many controls were assigned.
pub fn cascade(container: &dyn Control, style: StyleId, catalog: &ThemeCatalog) -> usize {
    let mut applied = 0;

    for control in find_themeable(container) {
        let Some(themeable) = control.as_themeable() else {
            continue;
        };
        if themeable.custom_style_mode() {
            trace!("cascade: skipping {:?} in custom style mode", control.kind());
            continue;
        }
        trace!("cascade: {:?} {} -> {}", control.kind(), themeable.style(), style);
        themeable.set_style(style, catalog);
        applied += 1;
    }

    if let Some(menu) = container.context_menu() {
        if let Some(themeable) = menu.as_themeable() {
            if !themeable.custom_style_mode() {
                themeable.set_style(style, catalog);
                applied += 1;
            }
        }
    }

    debug!(
        "cascade: {} control(s) under {:?} set to {}",
        applied,
        container.kind(),
        style
    );
    applied
}

/// Cascade into `control` if it is a framework container.
///
/// Framework containers never cascade on their own, so a toolkit container
/// that receives one as a child calls this to style its contents. Returns
/// false, doing nothing, for any other kind of control.
pub fn apply_to_raw_container(
    control: &dyn Control,
    style: StyleId,
    catalog: &ThemeCatalog,
) -> bool {
    if !control.kind().is_raw_container() {
        return false;
    }
    cascade(control, style, catalog);
    true
}

/// Bring a control newly attached to a container in line with the
/// container's style.
///
/// The child is assigned unless it is in custom style mode. Its subtree is
/// then walked the same way [`cascade`] would walk it: a non-custom toolkit
/// container already cascaded on assignment, anything else is cascaded into.
/// Does nothing when the container's style is `Custom`.
pub fn adopt(child: &dyn Control, style: StyleId, catalog: &ThemeCatalog) {
    if style.is_custom() {
        return;
    }
    match child.as_themeable() {
        Some(themeable) if !themeable.custom_style_mode() => {
            themeable.set_style(style, catalog);
            if !child.kind().cascades_itself() {
                cascade(child, style, catalog);
            }
        }
        Some(_) => {
            cascade(child, style, catalog);
        }
        None => {
            if !apply_to_raw_container(child, style, catalog) {
                cascade(child, style, catalog);
            }
        }
    }
}

/// Translate every translatable descendant of `container`.
///
/// Returns how many controls were translated.
pub fn translate_tree(container: &dyn Control) -> usize {
    let controls = find_translatable(container);
    for control in &controls {
        if let Some(translatable) = control.as_translatable() {
            translatable.translate();
        }
    }
    controls.len()
}
