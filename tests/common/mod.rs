//! Test environment for isolated carbon-ledger CLI runs.
//!
//! Every run gets its own working directory, config directory and ledger
//! file so tests never touch the real user data directory.

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::process::Command;

use serde_json::Value;
use tempfile::TempDir;

/// Result of running a carbon-ledger CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Parse stdout as one JSON document
    pub fn json(&self) -> Value {
        serde_json::from_str(&self.stdout).unwrap_or_else(|e| {
            panic!(
                "stdout is not JSON ({e}):\n{}\nstderr:\n{}",
                self.stdout, self.stderr
            )
        })
    }
}

pub struct TestEnv {
    pub root: TempDir,
    bin: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let root = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(root.path().join("config")).unwrap();
        Self {
            root,
            bin: PathBuf::from(env!("CARGO_BIN_EXE_carbon-ledger")),
        }
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.root.path().join(relative)
    }

    pub fn ledger_path(&self) -> PathBuf {
        self.path("ledger.json")
    }

    pub fn write(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.path(relative);
        std::fs::write(&path, content).unwrap();
        path
    }

    /// Run with `--data-file` pointing at this environment's ledger
    pub fn run(&self, args: &[&str]) -> TestResult {
        let ledger = self.ledger_path();
        let mut full: Vec<&str> = args.to_vec();
        full.push("--data-file");
        full.push(ledger.to_str().unwrap());
        self.run_raw(&full, &[])
    }

    pub fn run_raw(&self, args: &[&str], env: &[(&str, &str)]) -> TestResult {
        let mut cmd = Command::new(&self.bin);
        cmd.current_dir(self.root.path())
            .args(args)
            .env("XDG_CONFIG_HOME", self.path("config"))
            .env("NO_COLOR", "1")
            .env_remove("CARBON_LOG")
            .env_remove("CARBON_LEDGER_PATH")
            .env_remove("CARBON_VERBOSITY")
            .env_remove("CARBON_CREDIT_VALUE");
        for (key, value) in env {
            cmd.env(key, value);
        }

        let output = cmd.output().unwrap();
        TestResult {
            success: output.status.success(),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }

    pub fn root_path(&self) -> &Path {
        self.root.path()
    }
}
