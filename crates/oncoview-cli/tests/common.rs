//! Shared fixtures for the CLI integration tests.
//!
//! Clippy cannot track usage across integration test files, hence the
//! `allow(dead_code)` annotation.
#![cfg(test)]
#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const THREE_MODEL_RESPONSE: &str = r#"{
  "predictions": [
    {
      "model_name": "SVM",
      "cancer_type_detailed": "Breast Invasive Ductal Carcinoma",
      "cancer_type_code": 1,
      "confidence": 0.87,
      "probabilities": {"A": 0.1, "B": 0.6, "C": 0.3}
    },
    {
      "model_name": "Random Forest",
      "cancer_type_detailed": "Breast Invasive Lobular Carcinoma",
      "cancer_type_code": 2,
      "confidence": 0.64
    },
    {
      "model_name": "Decision Tree",
      "cancer_type_detailed": "Breast Invasive Ductal Carcinoma",
      "cancer_type_code": 1,
      "confidence": 0.71,
      "probabilities": {
        "Breast Invasive Lobular Carcinoma": 0.29,
        "Breast Invasive Ductal Carcinoma": 0.71
      }
    }
  ]
}"#;

pub struct TestFixture {
    temp_dir: TempDir,
    data_dir: PathBuf,
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

impl TestFixture {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let data_dir = temp_dir.path().join(".oncoview");
        fs::create_dir_all(&data_dir).expect("Failed to create data dir");

        Self { temp_dir, data_dir }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn config_path(&self) -> PathBuf {
        self.data_dir.join("config.toml")
    }

    /// Write a payload file next to the data dir and return its path
    pub fn write_payload(&self, name: &str, json: &str) -> PathBuf {
        let path = self.temp_dir.path().join(name);
        fs::write(&path, json).expect("Failed to write payload");
        path
    }

    /// `oncoview` pointed at this fixture's data dir, without color or env logging
    #[allow(deprecated)]
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("oncoview").expect("Failed to find binary");
        cmd.arg("--data-dir")
            .arg(&self.data_dir)
            .env_remove("RUST_LOG")
            .env_remove("ONCOVIEW_PATH")
            .env("NO_COLOR", "1");
        cmd
    }

    pub fn stdout(&self, args: &[&str]) -> String {
        let output = self.command().args(args).output().expect("Failed to run");
        assert!(
            output.status.success(),
            "command failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );
        String::from_utf8(output.stdout).expect("stdout is not UTF-8")
    }

    pub fn stdout_with_stdin(&self, args: &[&str], stdin: &str) -> String {
        let output = self
            .command()
            .args(args)
            .write_stdin(stdin)
            .output()
            .expect("Failed to run");
        assert!(
            output.status.success(),
            "command failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );
        String::from_utf8(output.stdout).expect("stdout is not UTF-8")
    }
}
