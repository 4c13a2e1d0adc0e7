//! Fluent wrapper around assert_cmd::Command.

// Allow dead code since this is a test utility with methods for future tests
#![allow(dead_code)]

use assert_cmd::Command;
use serde::de::DeserializeOwned;
use std::path::Path;

/// Fluent wrapper around `assert_cmd::Command` for the `quill` binary.
///
/// Provides a builder-style API for constructing and executing CLI commands.
/// The process gets an isolated home directory so a developer's real config
/// file never leaks into a test run.
pub struct QuillCommand {
    args: Vec<String>,
    home: Option<String>,
}

impl QuillCommand {
    /// Creates a new command for the `quill` binary.
    pub fn new() -> Self {
        Self {
            args: Vec::new(),
            home: None,
        }
    }

    /// Points HOME and XDG_CONFIG_HOME at the given directory.
    pub fn home(mut self, path: &Path) -> Self {
        self.home = Some(path.to_string_lossy().to_string());
        self
    }

    /// Sets the `--notes` option to specify the snapshot file.
    pub fn notes(mut self, path: &Path) -> Self {
        self.args.push("--notes".to_string());
        self.args.push(path.to_string_lossy().to_string());
        self
    }

    /// Adds arguments to the command.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.args
            .extend(args.into_iter().map(|s| s.as_ref().to_string()));
        self
    }

    /// Returns the current arguments (for testing).
    pub fn get_args(&self) -> &[String] {
        &self.args
    }

    /// Runs the command and returns an Assert for making assertions.
    pub fn assert(self) -> assert_cmd::assert::Assert {
        let mut cmd = Command::cargo_bin("quill").expect("Failed to find quill binary");
        if let Some(home) = &self.home {
            cmd.env("HOME", home);
            cmd.env("XDG_CONFIG_HOME", home);
        }
        cmd.args(&self.args);
        cmd.assert()
    }

    /// Runs the command, expects success, and returns stdout as a string.
    pub fn output_success(self) -> String {
        let output = self.assert().success().get_output().stdout.clone();
        String::from_utf8(output).expect("Output was not valid UTF-8")
    }

    /// Runs the command, expects success, and parses stdout as JSON.
    pub fn output_json<T: DeserializeOwned>(self) -> T {
        let output = self.output_success();
        serde_json::from_str(&output).expect("Failed to parse output as JSON")
    }

    // ===========================================
    // Command Shortcuts
    // ===========================================

    /// Configures for the `ls` command.
    pub fn ls(self) -> Self {
        self.args(["ls"])
    }

    /// Configures for the `show` command with a selector.
    pub fn show(self, selector: &str) -> Self {
        self.args(["show", selector])
    }

    /// Configures for the `render` command with a selector.
    pub fn render(self, selector: &str) -> Self {
        self.args(["render", selector])
    }

    /// Configures for the `backlinks` command with a selector.
    pub fn backlinks(self, selector: &str) -> Self {
        self.args(["backlinks", selector])
    }

    /// Configures for the `related` command with a selector.
    pub fn related(self, selector: &str) -> Self {
        self.args(["related", selector])
    }

    /// Configures for the `search` command with a query.
    pub fn search(self, query: &str) -> Self {
        self.args(["search", query])
    }

    /// Configures for the `tags` command.
    pub fn tags(self) -> Self {
        self.args(["tags"])
    }

    /// Configures for the `themes` command.
    pub fn themes(self) -> Self {
        self.args(["themes"])
    }

    // ===========================================
    // Option Shortcuts
    // ===========================================

    /// Adds a `--tag` filter.
    pub fn with_tag(self, tag: &str) -> Self {
        self.args(["--tag", tag])
    }

    /// Adds `--counts` to the command.
    pub fn with_counts(self) -> Self {
        self.args(["--counts"])
    }

    /// Adds `--format json` to the command.
    pub fn format_json(self) -> Self {
        self.args(["--format", "json"])
    }
}

impl Default for QuillCommand {
    fn default() -> Self {
        Self::new()
    }
}
