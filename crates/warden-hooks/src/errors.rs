//! Hook error types.

use thiserror::Error;

/// Errors a hook handler can surface to the engine.
///
/// These are fail-open: the engine logs them and continues dispatch.
#[derive(Debug, Error)]
pub enum HookError {
    /// Handler failed internally.
    #[error("Hook handler error in '{name}': {message}")]
    HandlerFailed {
        /// Hook name.
        name: String,
        /// Error message from the handler.
        message: String,
    },

    /// Underlying I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic internal error.
    #[error("{0}")]
    Internal(String),
}

/// A tool invocation was blocked by a `tool.execute.before` handler.
///
/// This is the hard abort signal: the host must treat it as a failed
/// invocation, not a warning. `Display` is the reason text surfaced to the
/// end user.
#[derive(Debug, Clone, Error)]
#[error("{reason}")]
pub struct HookDenied {
    /// Name of the handler that blocked.
    pub handler: String,
    /// Human-readable denial reason.
    pub reason: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn denied_display_is_the_reason() {
        let denied = HookDenied {
            handler: "env-protection".to_string(),
            reason: "Blocked read of sensitive file: /repo/.env".to_string(),
        };
        assert_eq!(
            denied.to_string(),
            "Blocked read of sensitive file: /repo/.env"
        );
    }

    #[test]
    fn handler_failed_names_the_hook() {
        let err = HookError::HandlerFailed {
            name: "audit-log".to_string(),
            message: "disk full".to_string(),
        };
        assert!(err.to_string().contains("audit-log"));
        assert!(err.to_string().contains("disk full"));
    }
}
