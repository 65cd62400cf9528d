//! Hook dispatch engine.
//!
//! Entry point the host calls at each lifecycle point. Runs the registered
//! handlers for the event's kind sequentially in priority order, applies
//! their decisions, and reports whether the invocation may proceed.

use tracing::{debug, warn};
use warden_core::events::{EventKind, HookEvent};

use crate::errors::HookDenied;
use crate::registry::HookRegistry;
use crate::types::{DispatchSummary, HookAction, HookResult};

/// Dispatches lifecycle events to registered hook handlers.
///
/// # Decision semantics
///
/// - `Block` from a `tool.execute.before` handler short-circuits dispatch
///   with [`HookDenied`] — the host must abort the tool before any side
///   effect of it occurs. `Block` from any other event kind is ignored:
///   pre-execution is the only point where an abort exists.
/// - `Annotate` on a `tool.execute.after` event appends the advisory text to
///   the tool output in place. Annotations elsewhere are dropped; there is no
///   output to annotate yet.
/// - Handler errors are logged and treated as `Continue` (fail-open).
pub struct HookEngine {
    registry: HookRegistry,
}

impl HookEngine {
    /// Create an engine over a populated registry.
    #[must_use]
    pub fn new(registry: HookRegistry) -> Self {
        Self { registry }
    }

    /// Access the underlying registry.
    #[must_use]
    pub fn registry(&self) -> &HookRegistry {
        &self.registry
    }

    /// Dispatch one lifecycle event to all subscribed handlers.
    ///
    /// Returns the summary of a completed dispatch, or [`HookDenied`] when a
    /// `tool.execute.before` handler blocked the invocation.
    pub async fn dispatch(&self, event: &mut HookEvent) -> Result<DispatchSummary, HookDenied> {
        let kind = event.kind();
        let handlers = self.registry.handlers_for(kind);
        let mut summary = DispatchSummary::default();

        for handler in handlers {
            if !handler.should_handle(event) {
                continue;
            }

            let result = match handler.handle(event).await {
                Ok(result) => result,
                Err(err) => {
                    // Fail-open: telemetry must not break the workflow it observes.
                    warn!(hook = handler.name(), error = %err, "Hook handler failed");
                    HookResult::continue_()
                }
            };
            summary.handlers_run += 1;

            match result.action {
                HookAction::Continue => {}
                HookAction::Block => {
                    if kind == EventKind::ToolBefore {
                        let reason = result
                            .reason
                            .unwrap_or_else(|| format!("Blocked by hook: {}", handler.name()));
                        warn!(hook = handler.name(), %reason, "Tool invocation blocked");
                        return Err(HookDenied {
                            handler: handler.name().to_string(),
                            reason,
                        });
                    }
                    warn!(hook = handler.name(), event = %kind, "Block ignored outside tool.execute.before");
                }
                HookAction::Annotate => {
                    let Some(text) = result.annotation else {
                        continue;
                    };
                    if let HookEvent::ToolAfter { output, .. } = event {
                        output.push_str("\n\n");
                        output.push_str(&text);
                        summary.annotations.push(text);
                    } else {
                        debug!(hook = handler.name(), event = %kind, "Annotation dropped outside tool.execute.after");
                    }
                }
            }
        }

        debug!(event = %kind, handlers = summary.handlers_run, "Dispatch complete");
        Ok(summary)
    }
}

impl std::fmt::Debug for HookEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HookEngine")
            .field("registry", &self.registry)
            .finish()
    }
}
