//! Servicing index parsing.
//!
//! The index is `servicing.inf` at the top of a servicing root. It is a
//! line-oriented `key=value` file:
//!
//! ```text
//! # comment
//! ; also a comment
//! runtime|rthost-linux-x64.1.2.0=runtimes/rthost-linux-x64.1.2.1
//! ```
//!
//! Runtime keys compare ASCII case-insensitively. Runtime values are relative
//! paths that must stay inside the servicing root; `/` and `\` both separate
//! segments.

use std::path::{Component, Path, PathBuf};

use thiserror::Error;

use super::runtime::RuntimeIdentity;

/// File name of the index inside a servicing root.
pub const SERVICING_INDEX_FILE: &str = "servicing.inf";

/// Key prefix of runtime entries.
pub const RUNTIME_KEY_PREFIX: &str = "runtime|";

/// Errors raised while parsing an index. Line numbers are 1-based.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IndexError {
    #[error("line {line}: expected 'key=value'")]
    MissingSeparator { line: usize },

    #[error("line {line}: empty key")]
    EmptyKey { line: usize },

    #[error("line {line}: empty value for '{key}'")]
    EmptyValue { line: usize, key: String },

    #[error("line {line}: duplicate entry '{key}'")]
    DuplicateKey { line: usize, key: String },

    #[error("line {line}: '{value}' is not a relative path inside the servicing root")]
    PathEscapesRoot { line: usize, value: String },
}

impl IndexError {
    pub const fn line(&self) -> usize {
        match self {
            Self::MissingSeparator { line }
            | Self::EmptyKey { line }
            | Self::EmptyValue { line, .. }
            | Self::DuplicateKey { line, .. }
            | Self::PathEscapesRoot { line, .. } => *line,
        }
    }
}

/// One `key=value` line of the index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexEntry {
    pub line: usize,
    pub key: String,
    pub value: String,
    /// Parsed relative path, present for runtime entries only.
    relative_path: Option<PathBuf>,
}

impl IndexEntry {
    pub fn relative_path(&self) -> Option<&Path> {
        self.relative_path.as_deref()
    }

    /// Runtime full name if this is a `runtime|...` entry.
    pub fn runtime_name(&self) -> Option<&str> {
        strip_prefix_ignore_case(&self.key, RUNTIME_KEY_PREFIX)
    }
}

/// Parsed servicing index.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServicingIndex {
    entries: Vec<IndexEntry>,
}

impl ServicingIndex {
    pub fn parse(contents: &str) -> Result<Self, IndexError> {
        let mut entries: Vec<IndexEntry> = Vec::new();

        // Tolerate a UTF-8 BOM written by Windows editors.
        let contents = contents.strip_prefix('\u{feff}').unwrap_or(contents);

        for (idx, raw) in contents.lines().enumerate() {
            let line = idx + 1;
            let trimmed = raw.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with(';') {
                continue;
            }

            let (key, value) = trimmed
                .split_once('=')
                .ok_or(IndexError::MissingSeparator { line })?;
            let key = key.trim();
            let value = value.trim();

            if key.is_empty() {
                return Err(IndexError::EmptyKey { line });
            }
            if value.is_empty() {
                return Err(IndexError::EmptyValue {
                    line,
                    key: key.to_string(),
                });
            }
            if entries.iter().any(|e| e.key.eq_ignore_ascii_case(key)) {
                return Err(IndexError::DuplicateKey {
                    line,
                    key: key.to_string(),
                });
            }

            let relative_path = if strip_prefix_ignore_case(key, RUNTIME_KEY_PREFIX).is_some() {
                Some(
                    parse_relative_path(value).ok_or_else(|| IndexError::PathEscapesRoot {
                        line,
                        value: value.to_string(),
                    })?,
                )
            } else {
                None
            };

            entries.push(IndexEntry {
                line,
                key: key.to_string(),
                value: value.to_string(),
                relative_path,
            });
        }

        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[IndexEntry] {
        &self.entries
    }

    /// Entry servicing `runtime`, if any.
    pub fn runtime_entry(&self, runtime: &RuntimeIdentity) -> Option<&IndexEntry> {
        let full_name = runtime.full_name();
        self.entries.iter().find(|entry| {
            entry
                .runtime_name()
                .is_some_and(|name| name.eq_ignore_ascii_case(&full_name))
        })
    }
}

fn strip_prefix_ignore_case<'a>(value: &'a str, prefix: &str) -> Option<&'a str> {
    if value.len() >= prefix.len()
        && value.is_char_boundary(prefix.len())
        && value[..prefix.len()].eq_ignore_ascii_case(prefix)
    {
        Some(&value[prefix.len()..])
    } else {
        None
    }
}

/// Split on both separators and rebuild a relative path, rejecting anything
/// rooted, drive-qualified or climbing out with `..`. Segments are kept
/// verbatim; only the value as a whole is trimmed.
fn parse_relative_path(value: &str) -> Option<PathBuf> {
    if value.starts_with('/') || value.starts_with('\\') {
        return None;
    }

    let mut path = PathBuf::new();
    for segment in value.split(['/', '\\']) {
        match segment {
            "" | "." => {}
            ".." => return None,
            // A drive prefix in any segment would make `push` replace the path.
            part if part.contains(':') => return None,
            part => {
                let normal = Path::new(part)
                    .components()
                    .all(|component| matches!(component, Component::Normal(_)));
                if !normal {
                    return None;
                }
                path.push(part);
            }
        }
    }

    if path.as_os_str().is_empty() || path.is_absolute() {
        None
    } else {
        Some(path)
    }
}
