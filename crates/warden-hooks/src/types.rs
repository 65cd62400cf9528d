//! Core types for the hook framework.

use serde::{Deserialize, Serialize};
use warden_core::events::EventKind;

/// Action a hook handler can take.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HookAction {
    /// Continue execution normally.
    Continue,
    /// Block the tool invocation before it runs.
    Block,
    /// Append advisory text to the tool's output.
    Annotate,
}

/// Result returned by a hook handler.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HookResult {
    /// Action to take.
    pub action: HookAction,
    /// Reason for the action (set for `Block`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    /// Advisory text (set for `Annotate`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub annotation: Option<String>,
}

impl HookResult {
    /// Create a `Continue` result (no action needed).
    #[must_use]
    pub fn continue_() -> Self {
        Self {
            action: HookAction::Continue,
            reason: None,
            annotation: None,
        }
    }

    /// Create a `Block` result with a reason.
    #[must_use]
    pub fn block(reason: impl Into<String>) -> Self {
        Self {
            action: HookAction::Block,
            reason: Some(reason.into()),
            annotation: None,
        }
    }

    /// Create an `Annotate` result with advisory text.
    #[must_use]
    pub fn annotate(text: impl Into<String>) -> Self {
        Self {
            action: HookAction::Annotate,
            reason: None,
            annotation: Some(text.into()),
        }
    }

    /// Whether this result blocks the invocation.
    #[must_use]
    pub fn is_blocked(&self) -> bool {
        self.action == HookAction::Block
    }
}

/// Information about a registered hook (for listing/inspection).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HookInfo {
    /// Hook name.
    pub name: String,
    /// Event kinds the hook subscribes to.
    pub events: Vec<EventKind>,
    /// Execution priority (higher runs first).
    pub priority: i32,
    /// Optional description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Summary of a dispatch that was not blocked.
#[derive(Debug, Clone, Default)]
pub struct DispatchSummary {
    /// Number of handlers that ran.
    pub handlers_run: usize,
    /// Annotations appended to the tool output, in handler order.
    pub annotations: Vec<String>,
}
