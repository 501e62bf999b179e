//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing, including:
//! - Test environment setup with temporary directories
//! - Command builder helpers for common patterns
//! - Seeded inventory fixtures

use assert_cmd::Command;
use std::path::PathBuf;
use tempfile::TempDir;

/// Test environment with isolated data directory.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the lodge data directory
    pub data_dir: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    ///
    /// The data directory path is not created yet - lodge will create it.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let data_dir = temp_dir.path().join("lodge-data");

        Self { temp_dir, data_dir }
    }

    /// Get a bare command builder without pre-configured flags.
    ///
    /// Use this when you need to override the data directory or test
    /// global flag behavior.
    pub fn command_bare(&self) -> Command {
        Command::cargo_bin("lodge").expect("Failed to find lodge binary")
    }

    /// Get a command builder with the data directory pre-configured.
    pub fn command(&self) -> Command {
        let mut cmd = self.command_bare();
        cmd.arg("--data-dir").arg(&self.data_dir);
        cmd
    }

    /// Run a command and return its stdout, asserting success.
    pub fn run(&self, args: &[&str]) -> String {
        let output = self
            .command()
            .args(args)
            .output()
            .expect("Failed to run lodge command");

        assert!(
            output.status.success(),
            "Command {args:?} failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );

        String::from_utf8(output.stdout).expect("Invalid UTF-8 in output")
    }

    /// Add a customer and return its id.
    pub fn add_customer(&self, name: &str, email: &str) -> String {
        let stdout = self.run(&["add", "customer", "--name", name, "--email", email]);
        last_token(&stdout)
    }

    /// Add a property and return its id.
    pub fn add_property(&self, name: &str, address: &str) -> String {
        let stdout = self.run(&["add", "property", "--name", name, "--address", address]);
        last_token(&stdout)
    }

    /// Add a unit and return its id.
    pub fn add_unit(&self, property_id: &str, name: &str, price: &str) -> String {
        let stdout = self.run(&[
            "add",
            "unit",
            "--property",
            property_id,
            "--name",
            name,
            "--capacity",
            "2",
            "--price",
            price,
        ]);
        last_token(&stdout)
    }

    /// Book a unit and return the reservation id.
    pub fn book(&self, customer_id: &str, unit_id: &str, check_in: &str, check_out: &str) -> String {
        let stdout = self.run(&[
            "book",
            "--customer",
            customer_id,
            "--unit",
            unit_id,
            "--check-in",
            check_in,
            "--check-out",
            check_out,
        ]);
        last_token(&stdout)
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

/// Extract the trailing identifier from a command's output line.
pub fn last_token(output: &str) -> String {
    output
        .split_whitespace()
        .last()
        .expect("Output has no identifier")
        .to_string()
}
