//! Registry of live top-level windows and pages
//!
//! Roots register themselves on construction and unregister on teardown. The
//! registry only holds weak references: it never keeps a root alive and never
//! prunes entries on its own. Sweeps take a snapshot of the live roots and
//! release the lock before calling into them, so roots may register or
//! unregister from inside a sweep.

use std::sync::{Arc, PoisonError, RwLock, Weak};

use rustc_hash::FxHashMap;
use tinct_theme::{StyleId, ThemeCatalog};
use tracing::{debug, trace};

use crate::control::{Root, RootId};

/// Scale factors closer to 1.0 than this are treated as unscaled
pub const DPI_EPSILON: f32 = 1e-6;

/// RootId to live root mapping
#[derive(Default)]
pub struct WidgetRegistry {
    roots: RwLock<FxHashMap<RootId, Weak<dyn Root>>>,
}

impl WidgetRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `root` under `id`.
    ///
    /// Returns false, leaving the registry untouched, if `id` is already
    /// registered.
    pub fn register_root(&self, id: RootId, root: &Arc<dyn Root>) -> bool {
        let mut roots = self.roots.write().unwrap_or_else(PoisonError::into_inner);
        if roots.contains_key(&id) {
            debug!("WidgetRegistry: {} is already registered", id);
            return false;
        }
        roots.insert(id, Arc::downgrade(root));
        trace!("WidgetRegistry: registered {}", id);
        true
    }

    /// Remove `id` if present
    pub fn unregister_root(&self, id: RootId) {
        if self
            .roots
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&id)
            .is_some()
        {
            trace!("WidgetRegistry: unregistered {}", id);
        }
    }

    pub fn contains(&self, id: RootId) -> bool {
        self.roots
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(&id)
    }

    /// The root registered under `id`, if it is still alive
    pub fn get(&self, id: RootId) -> Option<Arc<dyn Root>> {
        self.roots
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&id)
            .and_then(Weak::upgrade)
    }

    /// Registered ids, ascending
    pub fn ids(&self) -> Vec<RootId> {
        let mut ids: Vec<RootId> = self
            .roots
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .keys()
            .copied()
            .collect();
        ids.sort_unstable();
        ids
    }

    pub fn len(&self) -> usize {
        self.roots.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Live roots at this moment, in id order
    pub fn snapshot(&self) -> Vec<Arc<dyn Root>> {
        let roots = self.roots.read().unwrap_or_else(PoisonError::into_inner);
        let mut live: Vec<(RootId, Arc<dyn Root>)> = roots
            .iter()
            .filter_map(|(id, weak)| weak.upgrade().map(|root| (*id, root)))
            .collect();
        drop(roots);

        live.sort_unstable_by_key(|(id, _)| *id);
        live.into_iter().map(|(_, root)| root).collect()
    }

    // ========== Broadcasts ==========

    /// Assign `style` to every registered root. Each root cascades its own
    /// subtree before the next root is touched.
    pub fn push_style(&self, style: StyleId, catalog: &ThemeCatalog) -> usize {
        let roots = self.snapshot();
        debug!("WidgetRegistry::push_style - {} to {} root(s)", style, roots.len());
        for root in &roots {
            root.set_style(style, catalog);
        }
        roots.len()
    }

    /// Rescale every root whose DPI scale is not 1. Returns how many were
    /// rescaled.
    pub fn push_dpi_rescale(&self) -> usize {
        let mut rescaled = 0;
        for root in self.snapshot() {
            if (root.dpi_scale() - 1.0).abs() > DPI_EPSILON {
                root.rescale_dpi();
                rescaled += 1;
            }
        }
        debug!("WidgetRegistry::push_dpi_rescale - {} root(s) rescaled", rescaled);
        rescaled
    }

    /// Retranslate every root
    pub fn push_translate(&self) -> usize {
        let roots = self.snapshot();
        debug!("WidgetRegistry::push_translate - {} root(s)", roots.len());
        for root in &roots {
            root.translate();
        }
        roots.len()
    }
}
