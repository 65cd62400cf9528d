//! # warden-plugins
//!
//! Built-in plugins for the warden hook framework:
//!
//! - [`audit::AuditLog`] — date-partitioned JSONL record of session and tool
//!   activity
//! - [`env_protection::EnvProtection`] — blocks reads of sensitive paths
//!   before the tool runs
//! - [`comment_check::CommentChecker`] — flags freshly written code whose
//!   comment density crosses a threshold
//! - [`notify::Notifier`] — surfaces idle/permission runtime events as
//!   desktop notifications
//!
//! Each plugin is an independent [`HookHandler`](warden_hooks::handler::HookHandler)
//! owning its own state; [`install_defaults`] wires all four into a registry.

#![deny(unsafe_code)]

use std::path::Path;
use std::sync::Arc;

use warden_hooks::registry::HookRegistry;

pub mod audit;
pub mod comment_check;
pub mod env_protection;
pub mod notify;

/// Register the four built-in plugins with their default configuration.
///
/// `project_root` anchors the audit log partition directory.
pub fn install_defaults(registry: &mut HookRegistry, project_root: &Path) {
    registry.register(Arc::new(audit::AuditLog::new(project_root)));
    registry.register(Arc::new(env_protection::EnvProtection::new()));
    registry.register(Arc::new(comment_check::CommentChecker::new()));
    registry.register(Arc::new(notify::Notifier::new(
        notify::NotifierConfig::default(),
    )));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn install_defaults_registers_four_plugins() {
        let mut registry = HookRegistry::new();
        install_defaults(&mut registry, Path::new("/tmp/project"));
        assert_eq!(registry.count(), 4);
        assert!(registry.get_by_name("audit-log").is_some());
        assert!(registry.get_by_name("env-protection").is_some());
        assert!(registry.get_by_name("comment-checker").is_some());
        assert!(registry.get_by_name("notifier").is_some());
    }
}
