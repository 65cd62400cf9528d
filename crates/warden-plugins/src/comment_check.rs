//! Comment checker plugin — flags freshly written code whose comment density
//! crosses a threshold.
//!
//! A two-phase hook: the proposed content is snapshotted at
//! `tool.execute.before` (for `edit` that is the replacement text, not the
//! diff) and the ratio is evaluated at `tool.execute.after`, once the tool
//! has actually produced its output. Advisory only — the warning is appended
//! to the tool's output and never blocks.
//!
//! The line classifier is a heuristic, not a language-aware parse: it
//! over-counts block-comment continuation lines and under-counts inline
//! trailing comments.

use async_trait::async_trait;
use warden_core::events::{EventKind, HookEvent};
use warden_core::tools::ToolName;
use warden_hooks::correlator::CallCorrelator;
use warden_hooks::errors::HookError;
use warden_hooks::handler::HookHandler;
use warden_hooks::types::HookResult;

/// File extensions the checker recognizes as source code.
pub const CODE_EXTENSIONS: &[&str] = &[
    ".js", ".ts", ".jsx", ".tsx", ".py", ".go", ".rs", ".java", ".cpp", ".c", ".zig", ".sh",
    ".bash", ".css",
];

/// Density above which the warning fires (strictly greater).
pub const COMMENT_THRESHOLD: f64 = 0.10;

/// Content shorter than this many lines is never evaluated.
const MIN_LINES: usize = 5;

/// Comment-line counts for one piece of content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommentStats {
    /// Lines whose trimmed form starts with a comment marker.
    pub comment_lines: usize,
    /// Total lines in the content.
    pub total_lines: usize,
}

impl CommentStats {
    /// Comment lines over total lines.
    #[must_use]
    pub fn ratio(&self) -> f64 {
        #[allow(clippy::cast_precision_loss)]
        {
            self.comment_lines as f64 / self.total_lines as f64
        }
    }
}

/// Whether `path` has a recognized source extension.
#[must_use]
pub fn is_code_file(path: &str) -> bool {
    CODE_EXTENSIONS.iter().any(|ext| path.ends_with(ext))
}

fn is_comment_line(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.starts_with("//")
        || trimmed.starts_with('#')
        || trimmed.starts_with("/*")
        || trimmed.starts_with("*/")
        || (trimmed.starts_with('*') && !trimmed.starts_with("*/"))
}

/// Count comment lines in `content`.
///
/// Returns `None` for content under five lines — tiny snippets produce too
/// many false positives to be worth flagging.
#[must_use]
pub fn comment_stats(content: &str) -> Option<CommentStats> {
    let lines: Vec<&str> = content.split('\n').collect();
    if lines.len() < MIN_LINES {
        return None;
    }
    let comment_lines = lines.iter().filter(|line| is_comment_line(line)).count();
    Some(CommentStats {
        comment_lines,
        total_lines: lines.len(),
    })
}

/// Snapshot captured at the `before` phase.
#[derive(Debug, Clone)]
struct Snapshot {
    file_path: String,
    content: String,
}

/// The comment checker plugin.
pub struct CommentChecker {
    pending: CallCorrelator<Snapshot>,
}

impl CommentChecker {
    /// Create the plugin with its own pending-call table.
    #[must_use]
    pub fn new() -> Self {
        Self {
            pending: CallCorrelator::new(),
        }
    }

    /// Number of snapshots awaiting their `after` event.
    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.pending.pending_count()
    }

    fn warning(snapshot: &Snapshot, stats: CommentStats) -> String {
        let pct = (stats.ratio() * 100.0).round();
        format!(
            "[commentcheck] {} has {pct:.0}% comments ({}/{}). Remove unnecessary comments before proceeding!",
            snapshot.file_path, stats.comment_lines, stats.total_lines
        )
    }
}

impl Default for CommentChecker {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HookHandler for CommentChecker {
    fn name(&self) -> &str {
        "comment-checker"
    }

    fn events(&self) -> &'static [EventKind] {
        &[EventKind::ToolBefore, EventKind::ToolAfter]
    }

    fn description(&self) -> Option<&str> {
        Some("Appends a warning when written code exceeds the comment-density threshold")
    }

    async fn handle(&self, event: &HookEvent) -> Result<HookResult, HookError> {
        match event {
            HookEvent::ToolBefore {
                call_id,
                tool,
                args,
            } => {
                if !matches!(tool, ToolName::Write | ToolName::Edit) {
                    return Ok(HookResult::continue_());
                }
                let (Some(file_path), Some(content)) = (args.file_path(), args.proposed_content())
                else {
                    return Ok(HookResult::continue_());
                };
                if content.is_empty() || !is_code_file(file_path) {
                    return Ok(HookResult::continue_());
                }
                self.pending.begin(
                    call_id,
                    Snapshot {
                        file_path: file_path.to_string(),
                        content: content.to_string(),
                    },
                );
                Ok(HookResult::continue_())
            }
            HookEvent::ToolAfter { call_id, .. } => {
                // Absent means: untracked tool, non-code file, or already handled.
                let Some(snapshot) = self.pending.end(call_id) else {
                    return Ok(HookResult::continue_());
                };
                let Some(stats) = comment_stats(&snapshot.content) else {
                    return Ok(HookResult::continue_());
                };
                if stats.ratio() > COMMENT_THRESHOLD {
                    return Ok(HookResult::annotate(Self::warning(&snapshot, stats)));
                }
                Ok(HookResult::continue_())
            }
            _ => Ok(HookResult::continue_()),
        }
    }
}
