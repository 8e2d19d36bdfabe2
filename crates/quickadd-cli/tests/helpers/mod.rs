use assert_cmd::Command;
use std::path::Path;
use tempfile::TempDir;

/// Fixed clock passed as `--now` (a Tuesday morning)
pub const NOW: &str = "2025-06-10T09:30:00";

/// Test harness running the CLI in an empty working directory with no
/// `QUICKADD_*` variables inherited from the caller
pub struct CliTestHarness {
    temp_dir: TempDir,
    env: Vec<(String, String)>,
}

impl CliTestHarness {
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp directory");
        Self {
            temp_dir,
            env: Vec::new(),
        }
    }

    /// Set a `QUICKADD_*` variable for every command run by this harness
    pub fn with_env(mut self, key: &str, value: &str) -> Self {
        self.env.push((key.to_string(), value.to_string()));
        self
    }

    /// Write a `quickadd.toml` into the working directory
    pub fn with_config_file(self, contents: &str) -> Self {
        std::fs::write(self.dir().join("quickadd.toml"), contents)
            .expect("Failed to write config file");
        self
    }

    pub fn dir(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Get a Command instance configured for testing
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("quickadd").expect("Failed to find quickadd binary");
        cmd.current_dir(self.dir());
        for key in ["QUICKADD_API_TOKEN", "QUICKADD_AREA_ID", "QUICKADD_API_URL", "QUICKADD_CONFIG", "RUST_LOG"] {
            cmd.env_remove(key);
        }
        for (key, value) in &self.env {
            cmd.env(key, value);
        }
        cmd
    }

    /// Helper to run a command and assert success
    pub fn run_success(&self, args: &[&str]) -> assert_cmd::assert::Assert {
        self.command().args(args).assert().success()
    }

    /// Helper to run a command and assert failure
    pub fn run_failure(&self, args: &[&str]) -> assert_cmd::assert::Assert {
        self.command().args(args).assert().failure()
    }
}

/// Utility functions for test assertions
pub mod assertions {
    use predicates::prelude::*;

    /// Predicate to check for error messages
    pub fn has_error() -> impl Predicate<str> {
        predicate::str::contains("Error")
    }

    /// Predicate to check the parse table headers
    pub fn has_parse_table_headers() -> impl Predicate<str> {
        predicate::str::contains("Input")
            .and(predicate::str::contains("Title"))
            .and(predicate::str::contains("Date"))
            .and(predicate::str::contains("Rule"))
    }
}
