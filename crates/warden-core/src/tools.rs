//! Tool names and strongly-typed argument records.
//!
//! The host hands hooks a tool name plus an untyped argument mapping. Which
//! keys exist for which tool is a wire convention (`filePath`, `oldString`,
//! `newString`, ...); [`ToolArgs::parse`] turns that convention into a tagged
//! variant so downstream code gets a compile-time-checked contract. Fields the
//! host omitted stay `None` — they are never defaulted to a sentinel.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Name of a tool the host may execute. Open set — unrecognized names are
/// preserved in [`ToolName::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ToolName {
    /// Shell command execution.
    Bash,
    /// File read.
    Read,
    /// File creation/overwrite.
    Write,
    /// In-place file edit.
    Edit,
    /// Any other tool, by its wire name.
    Other(String),
}

impl ToolName {
    /// The wire name for this tool.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Bash => "bash",
            Self::Read => "read",
            Self::Write => "write",
            Self::Edit => "edit",
            Self::Other(name) => name,
        }
    }
}

impl From<String> for ToolName {
    fn from(name: String) -> Self {
        match name.as_str() {
            "bash" => Self::Bash,
            "read" => Self::Read,
            "write" => Self::Write,
            "edit" => Self::Edit,
            _ => Self::Other(name),
        }
    }
}

impl From<ToolName> for String {
    fn from(name: ToolName) -> Self {
        name.as_str().to_string()
    }
}

impl std::fmt::Display for ToolName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Tool-specific argument record, keyed by tool name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ToolArgs {
    /// Arguments for `bash`.
    #[serde(rename_all = "camelCase")]
    Bash {
        /// Command line to run.
        command: Option<String>,
        /// Working directory override.
        workdir: Option<String>,
    },
    /// Arguments for `read`.
    #[serde(rename_all = "camelCase")]
    Read {
        /// Path of the file to read.
        file_path: Option<String>,
    },
    /// Arguments for `write`.
    #[serde(rename_all = "camelCase")]
    Write {
        /// Path of the file to write.
        file_path: Option<String>,
        /// Full proposed file content.
        content: Option<String>,
    },
    /// Arguments for `edit`.
    #[serde(rename_all = "camelCase")]
    Edit {
        /// Path of the file to edit.
        file_path: Option<String>,
        /// Text being replaced.
        old_string: Option<String>,
        /// Replacement text.
        new_string: Option<String>,
    },
    /// Raw argument mapping for tools without a typed record.
    Raw(Value),
}

fn str_field(raw: &Value, key: &str) -> Option<String> {
    raw.get(key).and_then(Value::as_str).map(ToString::to_string)
}

impl ToolArgs {
    /// Parse the host's argument mapping for the given tool.
    ///
    /// Unrecognized tools keep their mapping verbatim in [`ToolArgs::Raw`].
    #[must_use]
    pub fn parse(tool: &ToolName, raw: &Value) -> Self {
        match tool {
            ToolName::Bash => Self::Bash {
                command: str_field(raw, "command"),
                workdir: str_field(raw, "workdir"),
            },
            ToolName::Read => Self::Read {
                file_path: str_field(raw, "filePath"),
            },
            ToolName::Write => Self::Write {
                file_path: str_field(raw, "filePath"),
                content: str_field(raw, "content"),
            },
            ToolName::Edit => Self::Edit {
                file_path: str_field(raw, "filePath"),
                old_string: str_field(raw, "oldString"),
                new_string: str_field(raw, "newString"),
            },
            ToolName::Other(_) => Self::Raw(raw.clone()),
        }
    }

    /// The target file path, for tools that have one.
    #[must_use]
    pub fn file_path(&self) -> Option<&str> {
        match self {
            Self::Read { file_path }
            | Self::Write { file_path, .. }
            | Self::Edit { file_path, .. } => file_path.as_deref(),
            _ => None,
        }
    }

    /// The proposed file content after the tool runs.
    ///
    /// For `write` this is the full content; for `edit` it is the replacement
    /// text (the proposed new text, not the diff).
    #[must_use]
    pub fn proposed_content(&self) -> Option<&str> {
        match self {
            Self::Write { content, .. } => content.as_deref(),
            Self::Edit { new_string, .. } => new_string.as_deref(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn tool_name_from_wire_string() {
        assert_eq!(ToolName::from("bash".to_string()), ToolName::Bash);
        assert_eq!(ToolName::from("read".to_string()), ToolName::Read);
        assert_eq!(ToolName::from("write".to_string()), ToolName::Write);
        assert_eq!(ToolName::from("edit".to_string()), ToolName::Edit);
        assert_eq!(
            ToolName::from("glob".to_string()),
            ToolName::Other("glob".to_string())
        );
    }

    #[test]
    fn tool_name_roundtrips_through_string() {
        for name in ["bash", "read", "write", "edit", "webfetch"] {
            let tool = ToolName::from(name.to_string());
            assert_eq!(tool.as_str(), name);
        }
    }

    #[test]
    fn parse_bash_args() {
        let raw = json!({"command": "ls -la", "workdir": "/repo"});
        let args = ToolArgs::parse(&ToolName::Bash, &raw);
        assert_eq!(
            args,
            ToolArgs::Bash {
                command: Some("ls -la".to_string()),
                workdir: Some("/repo".to_string()),
            }
        );
    }

    #[test]
    fn parse_bash_args_missing_workdir_stays_absent() {
        let raw = json!({"command": "pwd"});
        let args = ToolArgs::parse(&ToolName::Bash, &raw);
        let ToolArgs::Bash { command, workdir } = args else {
            panic!("expected bash args");
        };
        assert_eq!(command.as_deref(), Some("pwd"));
        assert!(workdir.is_none());
    }

    #[test]
    fn parse_read_args() {
        let raw = json!({"filePath": "/repo/src/main.rs"});
        let args = ToolArgs::parse(&ToolName::Read, &raw);
        assert_eq!(args.file_path(), Some("/repo/src/main.rs"));
    }

    #[test]
    fn parse_write_args() {
        let raw = json!({"filePath": "x.py", "content": "print(1)\n"});
        let args = ToolArgs::parse(&ToolName::Write, &raw);
        assert_eq!(args.file_path(), Some("x.py"));
        assert_eq!(args.proposed_content(), Some("print(1)\n"));
    }

    #[test]
    fn parse_edit_args_content_is_new_string() {
        let raw = json!({"filePath": "a.rs", "oldString": "foo", "newString": "bar"});
        let args = ToolArgs::parse(&ToolName::Edit, &raw);
        assert_eq!(args.file_path(), Some("a.rs"));
        assert_eq!(args.proposed_content(), Some("bar"));
    }

    #[test]
    fn parse_unknown_tool_keeps_raw_mapping() {
        let raw = json!({"pattern": "**/*.rs"});
        let tool = ToolName::Other("glob".to_string());
        let args = ToolArgs::parse(&tool, &raw);
        assert_eq!(args, ToolArgs::Raw(raw));
        assert!(args.file_path().is_none());
        assert!(args.proposed_content().is_none());
    }

    #[test]
    fn non_string_fields_are_absent() {
        let raw = json!({"filePath": 42, "content": null});
        let args = ToolArgs::parse(&ToolName::Write, &raw);
        assert!(args.file_path().is_none());
        assert!(args.proposed_content().is_none());
    }
}
