//! Notifier plugin — surfaces idle/permission runtime events as desktop
//! notifications.
//!
//! The message pools and severity mapping are configuration data, not code:
//! swap [`NotifierConfig`] to change wording or the delivery program. Delivery
//! spawns the program with an argument vector (no shell interpretation) and
//! is fire-and-forget: a failure is logged at `debug` and never surfaces.

use async_trait::async_trait;
use tracing::debug;
use warden_core::events::{EventKind, HookEvent, RuntimeSignal};
use warden_hooks::errors::HookError;
use warden_hooks::handler::HookHandler;
use warden_hooks::types::HookResult;

/// Notification severity handed to the delivery program.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Urgency {
    /// Routine attention request.
    Normal,
    /// Blocking on a permission decision.
    Critical,
}

impl Urgency {
    /// The value passed to the delivery program's `-u` flag.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Critical => "critical",
        }
    }
}

/// Notifier configuration: delivery program, title, and message pools.
#[derive(Debug, Clone)]
pub struct NotifierConfig {
    /// Notification title.
    pub title: String,
    /// Delivery program, invoked as `{program} -u {urgency} {title} {body}`.
    pub program: String,
    /// Pool drawn from on `session.idle`.
    pub idle_messages: Vec<String>,
    /// Pool drawn from on `permission.updated`.
    pub permission_messages: Vec<String>,
}

impl Default for NotifierConfig {
    fn default() -> Self {
        let to_strings = |msgs: &[&str]| msgs.iter().map(ToString::to_string).collect();
        Self {
            title: "warden".to_string(),
            program: "notify-send".to_string(),
            idle_messages: to_strings(&[
                "Your input is needed",
                "Task complete. Awaiting your response",
                "Waiting for input",
                "Session idle. Ready for next instruction",
                "Finished. Awaiting your command",
                "Ready for your next task",
                "Task complete. Your turn",
                "Awaiting further instructions",
                "Work completed. Standing by",
                "Ready when you are",
            ]),
            permission_messages: to_strings(&[
                "Permission required",
                "Awaiting your approval",
                "Permission needed to proceed",
                "Approval required",
                "Waiting for authorization",
            ]),
        }
    }
}

/// Strip embedded double quotes.
///
/// The argument-vector spawn already prevents shell interpretation; this is
/// a minimal guard for delivery backends that re-quote their arguments, not
/// a general escaping scheme.
#[must_use]
pub fn sanitize(text: &str) -> String {
    text.replace('"', "")
}

fn pick(pool: &[String]) -> Option<&str> {
    if pool.is_empty() {
        return None;
    }
    use rand::Rng;
    let index = rand::rng().random_range(0..pool.len());
    Some(&pool[index])
}

/// The notifier plugin.
pub struct Notifier {
    config: NotifierConfig,
}

impl Notifier {
    /// Create the plugin with the given configuration.
    #[must_use]
    pub fn new(config: NotifierConfig) -> Self {
        Self { config }
    }

    /// The pool and urgency for a runtime signal.
    #[must_use]
    pub fn selection(&self, signal: RuntimeSignal) -> (&[String], Urgency) {
        match signal {
            RuntimeSignal::SessionIdle => (&self.config.idle_messages, Urgency::Normal),
            RuntimeSignal::PermissionUpdated => {
                (&self.config.permission_messages, Urgency::Critical)
            }
        }
    }

    async fn deliver(&self, body: &str, urgency: Urgency) {
        let title = sanitize(&self.config.title);
        let body = sanitize(body);
        let spawned = tokio::process::Command::new(&self.config.program)
            .arg("-u")
            .arg(urgency.as_str())
            .arg(&title)
            .arg(&body)
            .output()
            .await;
        match spawned {
            Ok(output) if !output.status.success() => {
                debug!(program = %self.config.program, status = %output.status, "Notification delivery failed");
            }
            Ok(_) => {}
            Err(err) => {
                debug!(program = %self.config.program, error = %err, "Notification delivery failed");
            }
        }
    }
}

#[async_trait]
impl HookHandler for Notifier {
    fn name(&self) -> &str {
        "notifier"
    }

    fn events(&self) -> &'static [EventKind] {
        &[EventKind::Runtime]
    }

    fn description(&self) -> Option<&str> {
        Some("Sends a desktop notification on idle and permission events")
    }

    async fn handle(&self, event: &HookEvent) -> Result<HookResult, HookError> {
        let HookEvent::Runtime { signal } = event else {
            return Ok(HookResult::continue_());
        };

        let (pool, urgency) = self.selection(*signal);
        let Some(message) = pick(pool).map(ToString::to_string) else {
            return Ok(HookResult::continue_());
        };
        self.deliver(&message, urgency).await;
        Ok(HookResult::continue_())
    }
}
