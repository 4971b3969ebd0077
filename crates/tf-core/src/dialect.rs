//! Host shell dialects for the driver script.

use serde::Serialize;

/// Shell syntax the driver script is rendered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScriptDialect {
    /// Windows `cmd.exe` batch file (`type`, backslash separators)
    #[default]
    Batch,
    /// POSIX `sh` script (`cat`, forward-slash separators)
    Shell,
}

impl ScriptDialect {
    /// File extension of the driver script, without the dot.
    pub fn extension(&self) -> &'static str {
        match self {
            ScriptDialect::Batch => "bat",
            ScriptDialect::Shell => "sh",
        }
    }

    /// Command that writes a file's contents to stdout.
    pub fn cat_command(&self) -> &'static str {
        match self {
            ScriptDialect::Batch => "type",
            ScriptDialect::Shell => "cat",
        }
    }

    pub fn path_separator(&self) -> char {
        match self {
            ScriptDialect::Batch => '\\',
            ScriptDialect::Shell => '/',
        }
    }

    /// Lines emitted before the first step.
    pub fn prologue(&self) -> &'static [&'static str] {
        match self {
            ScriptDialect::Batch => &[],
            ScriptDialect::Shell => &["#!/bin/sh"],
        }
    }

    /// Render a `/`-separated layout path in this dialect, quoting it when it
    /// contains whitespace.
    pub fn render_path(&self, path: &str) -> String {
        let native: String = path
            .chars()
            .map(|c| if c == '/' || c == '\\' { self.path_separator() } else { c })
            .collect();

        if native.chars().any(char::is_whitespace) {
            format!("\"{}\"", native)
        } else {
            native
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_batch_render_path() {
        let batch = ScriptDialect::Batch;
        assert_eq!(batch.render_path("../../wintools/ssr/ssr"), "..\\..\\wintools\\ssr\\ssr");
        assert_eq!(batch.render_path("Header.txt"), "Header.txt");
    }

    #[test]
    fn test_shell_render_path_normalizes_backslashes() {
        assert_eq!(ScriptDialect::Shell.render_path("..\\Foo.hpp"), "../Foo.hpp");
    }

    #[test]
    fn test_whitespace_paths_are_quoted() {
        assert_eq!(
            ScriptDialect::Shell.render_path("my dir/Header.txt"),
            "\"my dir/Header.txt\""
        );
    }

    #[test]
    fn test_dialect_commands() {
        assert_eq!(ScriptDialect::Batch.cat_command(), "type");
        assert_eq!(ScriptDialect::Shell.cat_command(), "cat");
        assert_eq!(ScriptDialect::default(), ScriptDialect::Batch);
        assert!(ScriptDialect::Batch.prologue().is_empty());
    }
}
