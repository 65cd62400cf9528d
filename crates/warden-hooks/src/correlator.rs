//! Call correlator — bridges the two phases of a tool invocation.
//!
//! Data captured at dispatch time (`tool.execute.before` arguments) is made
//! available to a decision taken at completion time (`tool.execute.after`).
//! Each plugin owns its own correlator instance; tables are never shared
//! across plugins or process restarts.

use std::collections::{HashMap, VecDeque};

use parking_lot::Mutex;
use tracing::debug;

/// Default bound on pending entries per correlator instance.
///
/// A tool invocation whose `after` event never arrives would otherwise pin
/// its snapshot for the process lifetime. The bound comfortably exceeds any
/// realistic in-flight tool count.
pub const DEFAULT_CAPACITY: usize = 1024;

struct Inner<T> {
    entries: HashMap<String, T>,
    /// Call identifiers in insertion order, oldest first. Used for eviction.
    order: VecDeque<String>,
}

/// Tracks in-flight tool invocations by call identifier between their
/// `before` and `after` phases.
///
/// Interior-mutable so handler instances can stay `Send + Sync` and take
/// `&self`. Pairs for different call identifiers are independent; no
/// ordering is enforced between them.
pub struct CallCorrelator<T> {
    inner: Mutex<Inner<T>>,
    capacity: usize,
}

impl<T> CallCorrelator<T> {
    /// Create a correlator with [`DEFAULT_CAPACITY`].
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Create a correlator bounded to `capacity` pending entries.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            inner: Mutex::new(Inner {
                entries: HashMap::new(),
                order: VecDeque::new(),
            }),
            capacity: capacity.max(1),
        }
    }

    /// Store `snapshot` under `call_id`.
    ///
    /// A duplicate `begin` for the same identifier silently overwrites (last
    /// write wins). When the table is full, the oldest pending entry is
    /// evicted.
    pub fn begin(&self, call_id: &str, snapshot: T) {
        let mut inner = self.inner.lock();
        if inner.entries.insert(call_id.to_string(), snapshot).is_some() {
            inner.order.retain(|id| id != call_id);
        }
        inner.order.push_back(call_id.to_string());

        while inner.entries.len() > self.capacity {
            let Some(oldest) = inner.order.pop_front() else {
                break;
            };
            if inner.entries.remove(&oldest).is_some() {
                debug!(call_id = %oldest, "Evicted stale pending call");
            }
        }
    }

    /// Atomically retrieve and remove the entry for `call_id`.
    ///
    /// Returns `None` if no matching `begin` occurred, if the pair already
    /// completed, or if the entry was evicted — callers must treat `None` as
    /// "nothing to do", never as a fault.
    #[must_use]
    pub fn end(&self, call_id: &str) -> Option<T> {
        let mut inner = self.inner.lock();
        let snapshot = inner.entries.remove(call_id)?;
        inner.order.retain(|id| id != call_id);
        Some(snapshot)
    }

    /// Number of pending entries.
    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.inner.lock().entries.len()
    }

    /// Maximum number of pending entries.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl<T> Default for CallCorrelator<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> std::fmt::Debug for CallCorrelator<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CallCorrelator")
            .field("pending", &self.pending_count())
            .field("capacity", &self.capacity)
            .finish()
    }
}
