//! Lifecycle events delivered by the host runtime.
//!
//! The host invokes registered hooks with one of five event kinds. Tool
//! execution is observed as a two-phase pair: a `tool.execute.before` event
//! fired before the tool runs (and able to abort it) and a
//! `tool.execute.after` event fired once the tool has produced its output.
//! Wire names follow the host's dotted convention.

use serde::{Deserialize, Serialize};

use crate::tools::{ToolArgs, ToolName};

/// Lifecycle event kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventKind {
    /// A session has started.
    #[serde(rename = "session.start")]
    SessionStart,
    /// A session has ended.
    #[serde(rename = "session.end")]
    SessionEnd,
    /// A tool is about to execute. Hooks may abort it.
    #[serde(rename = "tool.execute.before")]
    ToolBefore,
    /// A tool has executed; its output is available and annotatable.
    #[serde(rename = "tool.execute.after")]
    ToolAfter,
    /// A generic runtime event carrying a nested discriminator.
    #[serde(rename = "event")]
    Runtime,
}

impl EventKind {
    /// Returns all event kind variants.
    #[must_use]
    pub fn all() -> &'static [EventKind] {
        &[
            Self::SessionStart,
            Self::SessionEnd,
            Self::ToolBefore,
            Self::ToolAfter,
            Self::Runtime,
        ]
    }
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SessionStart => write!(f, "session.start"),
            Self::SessionEnd => write!(f, "session.end"),
            Self::ToolBefore => write!(f, "tool.execute.before"),
            Self::ToolAfter => write!(f, "tool.execute.after"),
            Self::Runtime => write!(f, "event"),
        }
    }
}

/// Discriminator carried by generic `event` deliveries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RuntimeSignal {
    /// The session has gone idle and is awaiting user input.
    #[serde(rename = "session.idle")]
    SessionIdle,
    /// A tool call is waiting on a permission decision.
    #[serde(rename = "permission.updated")]
    PermissionUpdated,
}

impl std::fmt::Display for RuntimeSignal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SessionIdle => write!(f, "session.idle"),
            Self::PermissionUpdated => write!(f, "permission.updated"),
        }
    }
}

/// A lifecycle event — one variant per [`EventKind`].
///
/// `ToolAfter::output` is mutable in place: annotating hooks append advisory
/// text to it, and the host surfaces the mutated output to the user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event")]
pub enum HookEvent {
    /// A session has started in `working_directory`.
    #[serde(rename = "session.start", rename_all = "camelCase")]
    SessionStart {
        /// Working directory of the new session.
        working_directory: String,
    },
    /// The session has ended.
    #[serde(rename = "session.end")]
    SessionEnd,
    /// A tool is about to execute.
    #[serde(rename = "tool.execute.before")]
    ToolBefore {
        /// Opaque correlation key, unique per invocation, host-supplied.
        #[serde(rename = "callID")]
        call_id: String,
        /// Tool being invoked.
        tool: ToolName,
        /// Tool-specific argument record.
        args: ToolArgs,
    },
    /// A tool has executed.
    #[serde(rename = "tool.execute.after")]
    ToolAfter {
        /// Same correlation key as the matching `ToolBefore`.
        #[serde(rename = "callID")]
        call_id: String,
        /// Tool that was invoked.
        tool: ToolName,
        /// The tool's textual result. Annotations append here.
        output: String,
    },
    /// A generic runtime event.
    #[serde(rename = "event")]
    Runtime {
        /// Nested `{type}` discriminator.
        #[serde(rename = "type")]
        signal: RuntimeSignal,
    },
}

impl HookEvent {
    /// Get the [`EventKind`] for this event.
    #[must_use]
    pub fn kind(&self) -> EventKind {
        match self {
            Self::SessionStart { .. } => EventKind::SessionStart,
            Self::SessionEnd => EventKind::SessionEnd,
            Self::ToolBefore { .. } => EventKind::ToolBefore,
            Self::ToolAfter { .. } => EventKind::ToolAfter,
            Self::Runtime { .. } => EventKind::Runtime,
        }
    }

    /// Get the call identifier, if this is a tool-phase event.
    #[must_use]
    pub fn call_id(&self) -> Option<&str> {
        match self {
            Self::ToolBefore { call_id, .. } | Self::ToolAfter { call_id, .. } => Some(call_id),
            _ => None,
        }
    }
}
