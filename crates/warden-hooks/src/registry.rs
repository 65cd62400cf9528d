//! Hook registry.
//!
//! Maintains a priority-sorted collection of [`HookHandler`] instances per
//! [`EventKind`]. The registry is the source of truth for which hooks are
//! active and what order they run in.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;
use warden_core::events::EventKind;

use crate::handler::HookHandler;
use crate::types::HookInfo;

/// Registry of lifecycle hook handlers.
///
/// Handlers are organized by [`EventKind`] and sorted by priority
/// (descending) within each kind. A handler subscribing to several kinds
/// appears in each corresponding bucket.
#[derive(Default)]
pub struct HookRegistry {
    /// Handlers keyed by event kind, sorted by priority descending.
    hooks: HashMap<EventKind, Vec<Arc<dyn HookHandler>>>,
}

impl HookRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            hooks: HashMap::new(),
        }
    }

    /// Register a hook handler under every event kind it subscribes to.
    ///
    /// If a handler with the same name already exists, it is replaced
    /// everywhere before insertion, and each touched bucket is re-sorted by
    /// priority (descending).
    pub fn register(&mut self, handler: Arc<dyn HookHandler>) {
        let name = handler.name().to_string();
        let _ = self.unregister(&name);

        for kind in handler.events() {
            debug!(name = %name, event = %kind, priority = handler.priority(), "Registering hook");
            let bucket = self.hooks.entry(*kind).or_default();
            bucket.push(Arc::clone(&handler));
            bucket.sort_by_key(|h| std::cmp::Reverse(h.priority()));
        }
    }

    /// Unregister a handler by name from every bucket.
    ///
    /// Returns `true` if a handler was found and removed, `false` otherwise.
    pub fn unregister(&mut self, name: &str) -> bool {
        let mut found = false;
        for handlers in self.hooks.values_mut() {
            let before_len = handlers.len();
            handlers.retain(|h| h.name() != name);
            if handlers.len() < before_len {
                found = true;
            }
        }
        if found {
            debug!(name = %name, "Unregistered hook");
        }
        found
    }

    /// Get handlers for an event kind, sorted by priority (descending).
    #[must_use]
    pub fn handlers_for(&self, kind: EventKind) -> Vec<Arc<dyn HookHandler>> {
        self.hooks.get(&kind).cloned().unwrap_or_default()
    }

    /// List information about all registered hooks, one entry per handler.
    #[must_use]
    pub fn list_all(&self) -> Vec<HookInfo> {
        let mut infos: Vec<HookInfo> = Vec::new();
        for handlers in self.hooks.values() {
            for handler in handlers {
                if infos.iter().any(|i| i.name == handler.name()) {
                    continue;
                }
                infos.push(HookInfo {
                    name: handler.name().to_string(),
                    events: handler.events().to_vec(),
                    priority: handler.priority(),
                    description: handler.description().map(ToString::to_string),
                });
            }
        }
        infos.sort_by(|a, b| a.name.cmp(&b.name));
        infos
    }

    /// Get a handler by name.
    #[must_use]
    pub fn get_by_name(&self, name: &str) -> Option<Arc<dyn HookHandler>> {
        for handlers in self.hooks.values() {
            for handler in handlers {
                if handler.name() == name {
                    return Some(Arc::clone(handler));
                }
            }
        }
        None
    }

    /// Number of distinct registered handlers.
    #[must_use]
    pub fn count(&self) -> usize {
        self.list_all().len()
    }

    /// Clear all registered handlers.
    pub fn clear(&mut self) {
        self.hooks.clear();
    }
}

impl std::fmt::Debug for HookRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HookRegistry")
            .field("hook_count", &self.count())
            .finish()
    }
}
