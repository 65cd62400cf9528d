//! Hook handler trait.
//!
//! Defines the [`HookHandler`] trait that all hook implementations satisfy.
//! Handlers are registered with the [`HookRegistry`](crate::registry::HookRegistry)
//! and executed by the [`HookEngine`](crate::engine::HookEngine).

use async_trait::async_trait;
use warden_core::events::{EventKind, HookEvent};

use crate::errors::HookError;
use crate::types::HookResult;

/// A lifecycle hook handler.
///
/// One handler may subscribe to several event kinds — a single plugin often
/// wants both phases of the tool lifecycle plus session boundaries. Handlers
/// take `&self`: they are stateless logic closing over interior-mutable state
/// (a pending-call table, a log-file path), so concurrent invocations for
/// different calls are safe.
///
/// # Priority
///
/// Higher priority handlers run first within an event kind. Default is 0.
///
/// # Filtering
///
/// Override [`should_handle`](HookHandler::should_handle) to skip the handler
/// for specific events without paying for an async call.
#[async_trait]
pub trait HookHandler: Send + Sync {
    /// Unique name for this handler.
    fn name(&self) -> &str;

    /// Event kinds this handler subscribes to.
    fn events(&self) -> &'static [EventKind];

    /// Execution priority. Higher runs first. Default: 0.
    fn priority(&self) -> i32 {
        0
    }

    /// Optional human-readable description.
    fn description(&self) -> Option<&str> {
        None
    }

    /// Optional filter. Return `false` to skip this handler for the event.
    fn should_handle(&self, _event: &HookEvent) -> bool {
        true
    }

    /// Execute the handler for the given event.
    ///
    /// Errors are caught by the engine, logged, and treated as `Continue`.
    async fn handle(&self, event: &HookEvent) -> Result<HookResult, HookError>;
}
