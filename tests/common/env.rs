//! Test environment builder for isolated bbl testing.
//!
//! Provides `TestEnv` - an isolated state directory, home directory and
//! simulated cloud, plus helpers to run the CLI against them.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::TempDir;

/// Result of running a bbl CLI command
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

    /// Parse every non-empty stdout line as JSON
    pub fn json_lines(&self) -> Vec<serde_json::Value> {
        self.stdout
            .lines()
            .filter(|l| !l.trim().is_empty())
            .map(|l| {
                serde_json::from_str(l)
                    .unwrap_or_else(|e| panic!("not JSON ({e}): {l}\nstdout:\n{}", self.stdout))
            })
            .collect()
    }
}

/// Environment variables the binary reads; cleared for every run
const BBL_ENV: &[&str] = &[
    "BBL_STATE_DIR",
    "BBL_STACK_NAME",
    "BBL_DIRECTOR_USERNAME",
    "BBL_DIRECTOR_PASSWORD",
    "BBL_INSTALLER_COMMAND",
    "BBL_ENDPOINT_OVERRIDE",
    "BBL_AWS_ACCESS_KEY_ID",
    "BBL_AWS_SECRET_ACCESS_KEY",
    "BBL_AWS_REGION",
];

pub struct TestEnv {
    root: TempDir,
    env: Vec<(String, String)>,
}

impl TestEnv {
    pub fn new() -> Self {
        let root = tempfile::tempdir().unwrap();
        fs::create_dir_all(root.path().join("state")).unwrap();
        fs::create_dir_all(root.path().join("home/.config")).unwrap();
        Self {
            root,
            env: Vec::new(),
        }
    }

    pub fn state_dir(&self) -> PathBuf {
        self.root.path().join("state")
    }

    pub fn cloud_dir(&self) -> PathBuf {
        self.root.path().join("cloud")
    }

    pub fn home(&self) -> PathBuf {
        self.root.path().join("home")
    }

    /// Set an environment variable for every subsequent run
    pub fn with_env(mut self, key: &str, value: impl AsRef<str>) -> Self {
        self.env.push((key.to_string(), value.as_ref().to_string()));
        self
    }

    /// Credentials for the simulated cloud
    pub fn with_credentials(self) -> Self {
        self.with_env("BBL_AWS_ACCESS_KEY_ID", "AKIATEST")
            .with_env("BBL_AWS_SECRET_ACCESS_KEY", "secret")
            .with_env("BBL_AWS_REGION", "us-east-1")
    }

    pub fn write_config(&self, content: &str) {
        fs::write(self.state_dir().join("bbl.toml"), content).unwrap();
    }

    /// Install a shell script as the installer command
    #[cfg(unix)]
    pub fn with_installer_script(self, body: &str) -> Self {
        use std::os::unix::fs::PermissionsExt;

        let path = self.root.path().join("fake-bosh-init");
        fs::write(&path, format!("#!/bin/sh\n{body}\n")).unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
        let command = path.display().to_string();
        self.with_env("BBL_INSTALLER_COMMAND", command)
    }

    /// Installer that records a run counter in its state
    #[cfg(unix)]
    pub fn with_working_installer(self) -> Self {
        self.with_installer_script(
            r#"test "$1" = deploy || exit 2
runs=1
if [ -f bosh-state.json ]; then runs=2; fi
echo "{\"current_vm_cid\": \"i-123\", \"runs\": $runs}" > bosh-state.json"#,
        )
    }

    pub fn run(&self, args: &[&str]) -> TestResult {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_bbl"));
        for key in BBL_ENV {
            cmd.env_remove(key);
        }
        cmd.current_dir(self.root.path())
            .env("HOME", self.home())
            .env("XDG_CONFIG_HOME", self.home().join(".config"))
            .arg("--state-dir")
            .arg(self.state_dir())
            .arg("--endpoint-override")
            .arg(self.cloud_dir())
            .args(args);
        for (key, value) in &self.env {
            cmd.env(key, value);
        }

        let output = cmd.output().unwrap();
        TestResult {
            success: output.status.success(),
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        }
    }

    pub fn state_path(&self) -> PathBuf {
        self.state_dir().join("state.json")
    }

    /// Raw saved state
    pub fn state(&self) -> serde_json::Value {
        read_json(&self.state_path())
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

pub fn read_json(path: &Path) -> serde_json::Value {
    let content = fs::read_to_string(path)
        .unwrap_or_else(|e| panic!("cannot read {}: {e}", path.display()));
    serde_json::from_str(&content).unwrap()
}
