//! Audit log plugin — best-effort, human-diffable record of session and
//! tool activity.
//!
//! One append-only JSONL partition per calendar day, identified by the UTC
//! date at plugin construction time: a session spanning midnight keeps
//! writing to the partition it opened with. Every failure on the write path
//! is swallowed — observability must never abort the workflow it observes.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tokio::io::AsyncWriteExt;
use tracing::debug;
use warden_core::events::{EventKind, HookEvent};
use warden_core::tools::{ToolArgs, ToolName};
use warden_hooks::errors::HookError;
use warden_hooks::handler::HookHandler;
use warden_hooks::types::HookResult;

/// One audit record, tagged by event kind.
///
/// Field names match the wire convention of the log's consumers; fields the
/// invocation did not carry serialize as absent, never as a sentinel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum AuditRecord {
    /// A session started in `cwd`.
    SessionStart {
        /// Session working directory.
        cwd: String,
    },
    /// A `bash` invocation was dispatched.
    Bash {
        /// Command line, if supplied.
        #[serde(skip_serializing_if = "Option::is_none")]
        command: Option<String>,
        /// Working directory override, if supplied.
        #[serde(skip_serializing_if = "Option::is_none")]
        workdir: Option<String>,
    },
    /// A `write` invocation was dispatched.
    Write {
        /// Target file path, if supplied.
        #[serde(skip_serializing_if = "Option::is_none")]
        file: Option<String>,
        /// Byte length of the proposed content, if supplied.
        #[serde(skip_serializing_if = "Option::is_none")]
        bytes: Option<usize>,
    },
    /// An `edit` invocation was dispatched.
    Edit {
        /// Target file path, if supplied.
        #[serde(skip_serializing_if = "Option::is_none")]
        file: Option<String>,
        /// Byte length of the replaced text, if supplied.
        #[serde(rename = "oldLength", skip_serializing_if = "Option::is_none")]
        old_length: Option<usize>,
        /// Byte length of the replacement text, if supplied.
        #[serde(rename = "newLength", skip_serializing_if = "Option::is_none")]
        new_length: Option<usize>,
    },
    /// The session ended.
    SessionEnd,
}

/// One serialized log line: a timestamp plus the record fields, flattened.
#[derive(Debug, Serialize, Deserialize)]
struct LogLine {
    timestamp: String,
    #[serde(flatten)]
    record: AuditRecord,
}

/// The audit log plugin.
pub struct AuditLog {
    log_dir: PathBuf,
    log_file: PathBuf,
}

impl AuditLog {
    /// Create an audit log rooted at `project_root`.
    ///
    /// The partition path is `{project_root}/.opencode/logs/audit-<YYYY-MM-DD>.jsonl`,
    /// dated at construction time.
    #[must_use]
    pub fn new(project_root: impl AsRef<Path>) -> Self {
        let log_dir = project_root.as_ref().join(".opencode").join("logs");
        let date = Utc::now().format("%Y-%m-%d");
        let log_file = log_dir.join(format!("audit-{date}.jsonl"));
        Self { log_dir, log_file }
    }

    /// Path of the partition this instance appends to.
    #[must_use]
    pub fn log_file(&self) -> &Path {
        &self.log_file
    }

    /// Append one record as a single newline-terminated line.
    ///
    /// Best-effort: directory creation and the append itself may fail, and
    /// any failure is logged at `debug` and otherwise ignored.
    pub async fn append(&self, record: AuditRecord) {
        if let Err(err) = self.try_append(record).await {
            debug!(file = %self.log_file.display(), error = %err, "Audit append failed");
        }
    }

    async fn try_append(&self, record: AuditRecord) -> Result<(), HookError> {
        // Idempotent; a failure here just surfaces on the open below.
        let _ = tokio::fs::create_dir_all(&self.log_dir).await;

        let line = LogLine {
            timestamp: Utc::now().to_rfc3339(),
            record,
        };
        let mut serialized = serde_json::to_string(&line)
            .map_err(|e| HookError::Internal(e.to_string()))?;
        serialized.push('\n');

        let mut file = tokio::fs::OpenOptions::new()
            .append(true)
            .create(true)
            .open(&self.log_file)
            .await?;
        // One write call per record keeps lines whole under concurrent appends.
        file.write_all(serialized.as_bytes()).await?;
        // tokio buffers writes; flush so the line is on disk before we return.
        file.flush().await?;
        Ok(())
    }

    fn record_for(event: &HookEvent) -> Option<AuditRecord> {
        match event {
            HookEvent::SessionStart { working_directory } => Some(AuditRecord::SessionStart {
                cwd: working_directory.clone(),
            }),
            HookEvent::SessionEnd => Some(AuditRecord::SessionEnd),
            HookEvent::ToolBefore { tool, args, .. } => match (tool, args) {
                (ToolName::Bash, ToolArgs::Bash { command, workdir }) => Some(AuditRecord::Bash {
                    command: command.clone(),
                    workdir: workdir.clone(),
                }),
                (ToolName::Write, ToolArgs::Write { file_path, content }) => {
                    Some(AuditRecord::Write {
                        file: file_path.clone(),
                        bytes: content.as_ref().map(String::len),
                    })
                }
                (
                    ToolName::Edit,
                    ToolArgs::Edit {
                        file_path,
                        old_string,
                        new_string,
                    },
                ) => Some(AuditRecord::Edit {
                    file: file_path.clone(),
                    old_length: old_string.as_ref().map(String::len),
                    new_length: new_string.as_ref().map(String::len),
                }),
                _ => None,
            },
            _ => None,
        }
    }
}

#[async_trait]
impl HookHandler for AuditLog {
    fn name(&self) -> &str {
        "audit-log"
    }

    fn events(&self) -> &'static [EventKind] {
        &[
            EventKind::SessionStart,
            EventKind::ToolBefore,
            EventKind::SessionEnd,
        ]
    }

    fn description(&self) -> Option<&str> {
        Some("Appends session and tool activity to a daily JSONL audit file")
    }

    async fn handle(&self, event: &HookEvent) -> Result<HookResult, HookError> {
        if let Some(record) = Self::record_for(event) {
            self.append(record).await;
        }
        Ok(HookResult::continue_())
    }
}
