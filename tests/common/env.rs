//! Test environment builder for isolated assetree runs.
//!
//! Provides `TestEnv`: a temp project directory (the working directory of
//! every run), a temp home directory, and a `data/` payload directory inside
//! the project, which is where assetree looks by default.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

use super::fixtures::*;

/// Result of running an assetree command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }

    /// Parse stdout as NDJSON
    pub fn json_events(&self) -> Vec<serde_json::Value> {
        self.stdout
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(|line| {
                serde_json::from_str(line)
                    .unwrap_or_else(|e| panic!("stdout line is not JSON ({}): {}", e, line))
            })
            .collect()
    }

    /// The last event with the given `event` field
    pub fn last_event(&self, name: &str) -> serde_json::Value {
        self.json_events()
            .into_iter()
            .filter(|e| e["event"] == name)
            .last()
            .unwrap_or_else(|| panic!("no '{}' event in:\n{}", name, self.stdout))
    }
}

/// Isolated test environment with temp directories
pub struct TestEnv {
    pub project_root: TempDir,
    pub home_dir: TempDir,
    bin: PathBuf,
}

impl TestEnv {
    pub fn builder() -> TestEnvBuilder {
        TestEnvBuilder::new()
    }

    /// Environment holding the standard fixture payloads
    pub fn with_fixtures() -> TestEnv {
        TestEnv::builder().with_fixture_payloads().build()
    }

    /// Path relative to the project root
    pub fn project_path(&self, relative: &str) -> PathBuf {
        self.project_root.path().join(relative)
    }

    /// Run assetree from the project root
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    /// Run assetree from the project root with extra env vars
    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let mut cmd = Command::new(&self.bin);
        cmd.current_dir(self.project_root.path())
            .args(args)
            .env("HOME", self.home_dir.path())
            .env("USERPROFILE", self.home_dir.path())
            .env("XDG_CONFIG_HOME", self.home_dir.path().join(".config"))
            .env("TERM", "dumb")
            .env_remove("RUST_LOG")
            .env_remove("ASSETREE_DATA_DIR")
            .env_remove("ASSETREE_DEBOUNCE_MS")
            .env_remove("ASSETREE_COLOR");

        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("Failed to execute assetree");
        Self::output_to_result(output)
    }

    fn output_to_result(output: Output) -> TestResult {
        TestResult {
            success: output.status.success(),
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }

    /// Write a file under the project root
    pub fn write_project_file(&self, relative_path: &str, content: &str) {
        write_file(&self.project_path(relative_path), content);
    }
}

/// Builder for `TestEnv` with fluent API
pub struct TestEnvBuilder {
    files: Vec<(String, String)>,
    data_dir: String,
}

impl TestEnvBuilder {
    pub fn new() -> Self {
        Self {
            files: Vec::new(),
            data_dir: "data".to_string(),
        }
    }

    /// Put payloads under `relative` instead of `data/`
    pub fn with_data_dir(mut self, relative: &str) -> Self {
        self.data_dir = relative.to_string();
        self
    }

    /// Add a payload file relative to the data directory
    pub fn with_payload(mut self, relative: &str, content: &str) -> Self {
        self.files.push((
            format!("{}/{}", self.data_dir, relative),
            content.to_string(),
        ));
        self
    }

    /// Add the fixture companies and payloads
    pub fn with_fixture_payloads(self) -> Self {
        self.with_payload("companies.json", COMPANIES)
            .with_payload("companies/c1/locations.json", APEX_LOCATIONS)
            .with_payload("companies/c1/assets.json", APEX_ASSETS)
            .with_payload("companies/c3/assets.json", CORRUPT_ASSETS)
    }

    /// Write `assetree.toml` in the project root
    pub fn with_project_config(mut self, toml: &str) -> Self {
        self.files
            .push(("assetree.toml".to_string(), toml.to_string()));
        self
    }

    pub fn build(self) -> TestEnv {
        let project_root = TempDir::new().expect("Failed to create project temp dir");
        let home_dir = TempDir::new().expect("Failed to create home temp dir");

        for (relative, content) in &self.files {
            write_file(&project_root.path().join(relative), content);
        }

        TestEnv {
            project_root,
            home_dir,
            bin: PathBuf::from(env!("CARGO_BIN_EXE_assetree")),
        }
    }
}

impl Default for TestEnvBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn write_file(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("Failed to create directories");
    }
    std::fs::write(path, content).expect("Failed to write file");
}
