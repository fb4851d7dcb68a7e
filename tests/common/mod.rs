//! Shared testing utilities for prompteng CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Testing harness providing an isolated `$HOME` for CLI exercises.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    api_url: String,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment pointing at an unreachable backend.
    pub fn new() -> Self {
        Self::with_api_url("http://127.0.0.1:9")
    }

    /// Create a new isolated environment pointing at the given backend.
    pub fn with_api_url(api_url: impl Into<String>) -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        Self { root, api_url: api_url.into() }
    }

    /// Absolute path to the emulated `$HOME` directory.
    pub fn home(&self) -> &Path {
        self.root.path()
    }

    /// Directory holding persisted state files.
    pub fn state_dir(&self) -> PathBuf {
        self.home().join(".config/prompteng/state")
    }

    /// Build a command for invoking the compiled `prompteng` binary.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("prompteng").expect("Failed to locate prompteng binary");
        cmd.env("HOME", self.home())
            .env("PROMPTENG_API_URL", &self.api_url)
            .env_remove("PROMPTENG_LOG")
            .write_stdin("");
        cmd
    }

    /// Write `config.toml` in the configuration directory.
    pub fn write_config(&self, content: &str) {
        let dir = self.home().join(".config/prompteng");
        fs::create_dir_all(&dir).expect("Failed to create config directory");
        fs::write(dir.join("config.toml"), content).expect("Failed to write config file");
    }

    /// Read a persisted state file, if present.
    pub fn read_state(&self, key: &str) -> Option<String> {
        fs::read_to_string(self.state_dir().join(format!("{}.json", key))).ok()
    }

    /// Write a persisted state file directly.
    pub fn write_state(&self, key: &str, content: &str) {
        fs::create_dir_all(self.state_dir()).expect("Failed to create state directory");
        fs::write(self.state_dir().join(format!("{}.json", key)), content)
            .expect("Failed to write state file");
    }
}
