//! Document-level event listeners.
//!
//! A [`Document`] stands in for the page's root element. Components that
//! need to hear about pointer-downs anywhere on the page register a
//! [`PointerListener`] and keep the returned [`ListenerGuard`]; dropping the
//! guard deregisters the listener.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};

use crate::geometry::Point;

pub trait PointerListener: Send + Sync {
    fn on_pointer_down(&self, at: Point);
}

#[derive(Default)]
struct Registry {
    next_id: u64,
    listeners: Vec<(u64, Arc<dyn PointerListener>)>,
}

fn lock(registry: &Mutex<Registry>) -> MutexGuard<'_, Registry> {
    registry.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Shared handle to the page's listener registry. Clones refer to the same
/// registry.
#[derive(Clone, Default)]
pub struct Document {
    registry: Arc<Mutex<Registry>>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `listener` until the returned guard is dropped.
    #[must_use = "the listener is removed as soon as the guard is dropped"]
    pub fn add_pointer_listener(&self, listener: Arc<dyn PointerListener>) -> ListenerGuard {
        let mut registry = lock(&self.registry);
        let id = registry.next_id;
        registry.next_id += 1;
        registry.listeners.push((id, listener));
        tracing::trace!(id, "Document listener added");

        ListenerGuard {
            registry: Arc::downgrade(&self.registry),
            id,
        }
    }

    /// Deliver a pointer-down to every listener registered at call time.
    ///
    /// The registry is not locked while listeners run, so a listener may drop
    /// its own guard.
    pub fn pointer_down(&self, at: Point) {
        let listeners: Vec<_> = lock(&self.registry)
            .listeners
            .iter()
            .map(|(_, listener)| Arc::clone(listener))
            .collect();
        for listener in listeners {
            listener.on_pointer_down(at);
        }
    }

    pub fn listener_count(&self) -> usize {
        lock(&self.registry).listeners.len()
    }
}

/// Keeps a listener registered. Dropping it removes the listener.
pub struct ListenerGuard {
    registry: Weak<Mutex<Registry>>,
    id: u64,
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            lock(&registry).listeners.retain(|(id, _)| *id != self.id);
            tracing::trace!(id = self.id, "Document listener removed");
        }
    }
}

impl std::fmt::Debug for ListenerGuard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ListenerGuard").field("id", &self.id).finish()
    }
}
