//! Env protection plugin — blocks reads of sensitive files before the tool
//! runs.
//!
//! Matching is case-insensitive substring containment over the full path, so
//! a file merely residing under a denylisted directory name (`SECRETS/a.txt`)
//! is blocked too. The decision is total and synchronous: there is no
//! logging/bypass path, and a match is a hard abort of the invocation.

use async_trait::async_trait;
use warden_core::events::{EventKind, HookEvent};
use warden_core::tools::ToolName;
use warden_hooks::errors::HookError;
use warden_hooks::handler::HookHandler;
use warden_hooks::types::HookResult;

/// Default markers for sensitive paths.
pub const SENSITIVE_MARKERS: &[&str] = &[
    ".env",
    ".env.local",
    ".env.production",
    ".env.development",
    "credentials",
    "secrets",
    ".npmrc",
    ".pypirc",
    ".bash_history",
];

/// Find the first marker contained in `path`, case-insensitively.
#[must_use]
pub fn sensitive_marker<'a>(path: &str, markers: &'a [String]) -> Option<&'a str> {
    let lowered = path.to_lowercase();
    markers
        .iter()
        .find(|marker| lowered.contains(marker.as_str()))
        .map(String::as_str)
}

/// The env protection plugin.
pub struct EnvProtection {
    markers: Vec<String>,
}

impl EnvProtection {
    /// Create the plugin with [`SENSITIVE_MARKERS`].
    #[must_use]
    pub fn new() -> Self {
        Self::with_markers(SENSITIVE_MARKERS.iter().map(ToString::to_string).collect())
    }

    /// Create the plugin with a custom denylist.
    ///
    /// Markers are lowered once here; matching stays case-insensitive.
    #[must_use]
    pub fn with_markers(markers: Vec<String>) -> Self {
        Self {
            markers: markers.into_iter().map(|m| m.to_lowercase()).collect(),
        }
    }
}

impl Default for EnvProtection {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HookHandler for EnvProtection {
    fn name(&self) -> &str {
        "env-protection"
    }

    fn events(&self) -> &'static [EventKind] {
        &[EventKind::ToolBefore]
    }

    // Must outrank advisory hooks: a blocked read may never reach them.
    fn priority(&self) -> i32 {
        100
    }

    fn description(&self) -> Option<&str> {
        Some("Blocks reads of credential/secret/env files")
    }

    fn should_handle(&self, event: &HookEvent) -> bool {
        matches!(
            event,
            HookEvent::ToolBefore {
                tool: ToolName::Read,
                ..
            }
        )
    }

    async fn handle(&self, event: &HookEvent) -> Result<HookResult, HookError> {
        let HookEvent::ToolBefore { args, .. } = event else {
            return Ok(HookResult::continue_());
        };
        let Some(path) = args.file_path() else {
            return Ok(HookResult::continue_());
        };

        if sensitive_marker(path, &self.markers).is_some() {
            return Ok(HookResult::block(format!(
                "[EnvProtection] Blocked read of sensitive file: {path}. Use environment variables instead."
            )));
        }
        Ok(HookResult::continue_())
    }
}
