//! Common test utilities for shipkit CLI tests.
//!
//! Provides `TestEnv`, an isolated pair of temp directories (template
//! source and install destination) plus helpers to run the shipkit
//! binary with or without piped stdin.

#![allow(dead_code)]

pub mod fixtures;

use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};

use tempfile::TempDir;

/// Result of running a shipkit CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }
}

/// Isolated test environment with temp source and destination trees
pub struct TestEnv {
    pub source: TempDir,
    pub dest: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            source: TempDir::new().expect("Failed to create source temp dir"),
            dest: TempDir::new().expect("Failed to create dest temp dir"),
        }
    }

    /// Environment pre-seeded with the standard docker script fixtures
    pub fn with_docker_fixtures() -> Self {
        let env = Self::new();
        env.write_source("docker/logs.sh", fixtures::LOGS_SH);
        env.write_source("docker/rebuild.sh", fixtures::REBUILD_SH);
        env.write_source("docker/start.sh", fixtures::START_SH);
        env.write_source("docker/status.sh", fixtures::STATUS_SH);
        env.write_source("docker/stop.sh", fixtures::STOP_SH);
        env
    }

    pub fn source_arg(&self) -> String {
        self.source.path().display().to_string()
    }

    pub fn dest_arg(&self) -> String {
        self.dest.path().display().to_string()
    }

    pub fn dest_path(&self, relative: &str) -> PathBuf {
        self.dest.path().join(relative)
    }

    pub fn write_source(&self, relative: &str, content: &str) {
        let path = self.source.path().join(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create source directories");
        }
        std::fs::write(&path, content).expect("Failed to write source file");
    }

    pub fn write_dest(&self, relative: &str, content: &str) {
        let path = self.dest_path(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create dest directories");
        }
        std::fs::write(&path, content).expect("Failed to write dest file");
    }

    pub fn read_dest(&self, relative: &str) -> String {
        std::fs::read_to_string(self.dest_path(relative))
            .unwrap_or_else(|e| panic!("Failed to read deployed file {}: {}", relative, e))
    }

    /// Run shipkit with stdin closed
    pub fn run(&self, args: &[&str]) -> TestResult {
        let output = self
            .command(args)
            .stdin(Stdio::null())
            .output()
            .expect("Failed to execute shipkit");
        to_result(output)
    }

    /// Run shipkit with the given text piped to stdin
    pub fn run_with_stdin(&self, args: &[&str], input: &str) -> TestResult {
        let mut child = self
            .command(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .expect("Failed to spawn shipkit");

        child
            .stdin
            .take()
            .expect("stdin not piped")
            .write_all(input.as_bytes())
            .expect("Failed to write stdin");

        let output = child.wait_with_output().expect("Failed to wait for shipkit");
        to_result(output)
    }

    /// Run an install with the standard bindings plus extra arguments
    pub fn install(&self, extra: &[&str]) -> TestResult {
        let source = self.source_arg();
        let dest = self.dest_arg();
        let mut args = vec![
            "install",
            "--source",
            source.as_str(),
            "--dest",
            dest.as_str(),
            "--container-name",
            "webapp",
        ];
        args.extend_from_slice(extra);
        self.run(&args)
    }

    fn command(&self, args: &[&str]) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_shipkit"));
        cmd.args(args).env("SHIPKIT_NO_COLOR", "1");
        cmd
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

fn to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}
