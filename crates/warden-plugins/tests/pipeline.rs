//! End-to-end dispatch scenarios: registry + engine + all built-in plugins.

use std::sync::Arc;

use serde_json::{Value, json};
use warden_core::events::{HookEvent, RuntimeSignal};
use warden_core::tools::{ToolArgs, ToolName};
use warden_hooks::engine::HookEngine;
use warden_hooks::registry::HookRegistry;
use warden_plugins::audit::AuditLog;
use warden_plugins::comment_check::CommentChecker;
use warden_plugins::env_protection::EnvProtection;
use warden_plugins::notify::{Notifier, NotifierConfig};

fn tool_before(call_id: &str, tool: ToolName, raw: Value) -> HookEvent {
    let args = ToolArgs::parse(&tool, &raw);
    HookEvent::ToolBefore {
        call_id: call_id.to_string(),
        tool,
        args,
    }
}

fn tool_after(call_id: &str, tool: ToolName, output: &str) -> HookEvent {
    HookEvent::ToolAfter {
        call_id: call_id.to_string(),
        tool,
        output: output.to_string(),
    }
}

fn engine_with_defaults(project_root: &std::path::Path) -> (HookEngine, std::path::PathBuf) {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter("warden=debug")
        .try_init();

    let audit = AuditLog::new(project_root);
    let log_file = audit.log_file().to_path_buf();

    let mut registry = HookRegistry::new();
    registry.register(Arc::new(audit));
    registry.register(Arc::new(EnvProtection::new()));
    registry.register(Arc::new(CommentChecker::new()));
    registry.register(Arc::new(Notifier::new(NotifierConfig {
        // Keep tests hermetic: "true" exits 0 without displaying anything.
        program: "true".to_string(),
        ..NotifierConfig::default()
    })));

    (HookEngine::new(registry), log_file)
}

/// A 12-line Python snippet with 3 `#`-prefixed lines (25% comments).
fn python_snippet() -> String {
    [
        "# setup",
        "import os",
        "# config",
        "x = 1",
        "y = 2",
        "# compute",
        "z = x + y",
        "print(z)",
        "a = 3",
        "b = 4",
        "c = 5",
        "print(a + b + c)",
    ]
    .join("\n")
}

#[tokio::test]
async fn write_over_threshold_gets_the_exact_annotation() {
    let dir = tempfile::tempdir().unwrap();
    let (engine, _) = engine_with_defaults(dir.path());

    let mut before = tool_before(
        "call_1",
        ToolName::Write,
        json!({"filePath": "x.py", "content": python_snippet()}),
    );
    let summary = engine.dispatch(&mut before).await.unwrap();
    assert!(summary.annotations.is_empty());

    let mut after = tool_after("call_1", ToolName::Write, "ok");
    let _ = engine.dispatch(&mut after).await.unwrap();

    let HookEvent::ToolAfter { output, .. } = &after else {
        panic!("event variant changed");
    };
    assert_eq!(
        output,
        "ok\n\n[commentcheck] x.py has 25% comments (3/12). Remove unnecessary comments before proceeding!"
    );
}

#[tokio::test]
async fn sensitive_read_is_denied_before_execution() {
    let dir = tempfile::tempdir().unwrap();
    let (engine, log_file) = engine_with_defaults(dir.path());

    let mut event = tool_before("call_2", ToolName::Read, json!({"filePath": "/repo/.env"}));
    let denied = engine.dispatch(&mut event).await.unwrap_err();
    assert_eq!(denied.handler, "env-protection");
    assert_eq!(
        denied.to_string(),
        "[EnvProtection] Blocked read of sensitive file: /repo/.env. Use environment variables instead."
    );

    // The read never ran and was not an audited kind; no log partition exists.
    assert!(!log_file.exists());
}

#[tokio::test]
async fn session_and_tool_activity_land_in_the_audit_partition() {
    let dir = tempfile::tempdir().unwrap();
    let (engine, log_file) = engine_with_defaults(dir.path());

    let mut start = HookEvent::SessionStart {
        working_directory: "/repo".to_string(),
    };
    let _ = engine.dispatch(&mut start).await.unwrap();

    let mut bash = tool_before(
        "call_3",
        ToolName::Bash,
        json!({"command": "cargo test", "workdir": "/repo"}),
    );
    let _ = engine.dispatch(&mut bash).await.unwrap();

    let mut end = HookEvent::SessionEnd;
    let _ = engine.dispatch(&mut end).await.unwrap();

    let text = std::fs::read_to_string(&log_file).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 3);

    let events: Vec<String> = lines
        .iter()
        .map(|line| {
            let parsed: Value = serde_json::from_str(line).unwrap();
            parsed["event"].as_str().unwrap().to_string()
        })
        .collect();
    assert_eq!(events, ["session_start", "bash", "session_end"]);
}

#[tokio::test]
async fn interleaved_tool_calls_correlate_independently() {
    let dir = tempfile::tempdir().unwrap();
    let (engine, _) = engine_with_defaults(dir.path());

    let chatty = python_snippet(); // 25% comments
    let quiet = (0..10)
        .map(|i| format!("x{i} = {i}"))
        .collect::<Vec<_>>()
        .join("\n");

    let mut before_a = tool_before("a", ToolName::Write, json!({"filePath": "a.py", "content": chatty}));
    let mut before_b = tool_before("b", ToolName::Write, json!({"filePath": "b.py", "content": quiet}));
    let _ = engine.dispatch(&mut before_a).await.unwrap();
    let _ = engine.dispatch(&mut before_b).await.unwrap();

    // Completion order reversed relative to dispatch order.
    let mut after_b = tool_after("b", ToolName::Write, "done b");
    let summary_b = engine.dispatch(&mut after_b).await.unwrap();
    assert!(summary_b.annotations.is_empty());

    let mut after_a = tool_after("a", ToolName::Write, "done a");
    let summary_a = engine.dispatch(&mut after_a).await.unwrap();
    assert_eq!(summary_a.annotations.len(), 1);
    assert!(summary_a.annotations[0].starts_with("[commentcheck] a.py has 25%"));
}

#[tokio::test]
async fn after_without_before_is_silent() {
    let dir = tempfile::tempdir().unwrap();
    let (engine, _) = engine_with_defaults(dir.path());

    let mut event = tool_after("never-began", ToolName::Write, "ok");
    let summary = engine.dispatch(&mut event).await.unwrap();
    assert!(summary.annotations.is_empty());
    let HookEvent::ToolAfter { output, .. } = &event else {
        panic!("event variant changed");
    };
    assert_eq!(output, "ok");
}

#[tokio::test]
async fn runtime_signals_are_fire_and_forget() {
    let dir = tempfile::tempdir().unwrap();
    let (engine, _) = engine_with_defaults(dir.path());

    for signal in [RuntimeSignal::SessionIdle, RuntimeSignal::PermissionUpdated] {
        let mut event = HookEvent::Runtime { signal };
        let summary = engine.dispatch(&mut event).await.unwrap();
        assert_eq!(summary.handlers_run, 1);
    }
}

#[tokio::test]
async fn allowed_read_passes_the_full_stack() {
    let dir = tempfile::tempdir().unwrap();
    let (engine, _) = engine_with_defaults(dir.path());

    let mut event = tool_before(
        "call_4",
        ToolName::Read,
        json!({"filePath": "/repo/src/main.rs"}),
    );
    let summary = engine.dispatch(&mut event).await.unwrap();
    assert!(summary.handlers_run >= 1);
}
