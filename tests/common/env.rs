//! Test environment for isolated assetrev runs.
//!
//! Each `TestEnv` owns a temp project directory containing a `.git` marker,
//! so project-root discovery never walks out of it.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

use super::fixtures::{APP_CSS, LOGO_PNG};

/// Environment variables that would leak host configuration into a run
const ISOLATED_VARS: &[&str] = &[
    "ASSETREV_ROOT",
    "ASSETREV_MANIFEST",
    "ASSETREV_HASH_LENGTH",
    "ASSETREV_MISSING_REFERENCES",
    "RUST_LOG",
];

/// Result of running an assetrev CLI command
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

    /// Parse stdout as the single JSON event printed under `--json`
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(self.stdout.trim())
            .unwrap_or_else(|e| panic!("stdout is not JSON ({}):\n{}", e, self.stdout))
    }
}

/// Isolated project directory
pub struct TestEnv {
    pub project_root: TempDir,
    bin: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let project_root = tempfile::tempdir().expect("Failed to create temp dir");
        std::fs::create_dir_all(project_root.path().join(".git"))
            .expect("Failed to create .git marker");
        Self {
            project_root,
            bin: PathBuf::from(env!("CARGO_BIN_EXE_assetrev")),
        }
    }

    /// Project seeded with the worked example under `public/`
    pub fn with_worked_example() -> Self {
        let env = Self::new();
        env.write_file("public/css/app.css", APP_CSS.as_bytes());
        env.write_file("public/img/logo.png", LOGO_PNG);
        env
    }

    /// Get path relative to project root
    pub fn path(&self, relative: &str) -> PathBuf {
        self.project_root.path().join(relative)
    }

    /// Run assetrev from the project root
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_from_with_env(self.project_root.path(), args, &[])
    }

    /// Run assetrev from the project root with extra env vars
    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        self.run_from_with_env(self.project_root.path(), args, env_vars)
    }

    /// Run assetrev from a specific directory with extra env vars
    pub fn run_from_with_env(
        &self,
        cwd: &Path,
        args: &[&str],
        env_vars: &[(&str, &str)],
    ) -> TestResult {
        let mut cmd = Command::new(&self.bin);
        cmd.current_dir(cwd).args(args);
        for key in ISOLATED_VARS {
            cmd.env_remove(key);
        }
        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("Failed to execute assetrev");
        output_to_result(output)
    }

    /// Write a file under the project root, creating directories
    pub fn write_file(&self, relative: &str, content: &[u8]) {
        let full_path = self.path(relative);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create directories");
        }
        std::fs::write(&full_path, content).expect("Failed to write file");
    }

    /// Read a project file as text
    pub fn read_file(&self, relative: &str) -> String {
        std::fs::read_to_string(self.path(relative))
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", relative, e))
    }

    /// Every file under `dir`, relative to it, with `/` separators, sorted
    pub fn list_files(&self, dir: &str) -> Vec<String> {
        let base = self.path(dir);
        let mut files = Vec::new();
        collect_files(&base, &base, &mut files);
        files.sort();
        files
    }

    /// Parsed manifest JSON at `relative`
    pub fn read_manifest(&self, relative: &str) -> serde_json::Value {
        serde_json::from_str(&self.read_file(relative)).expect("manifest is valid JSON")
    }
}

fn collect_files(base: &Path, dir: &Path, out: &mut Vec<String>) {
    let Ok(entries) = std::fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_files(base, &path, out);
        } else if let Ok(relative) = path.strip_prefix(base) {
            let segments: Vec<_> = relative
                .components()
                .map(|c| c.as_os_str().to_string_lossy().into_owned())
                .collect();
            out.push(segments.join("/"));
        }
    }
}

fn output_to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}
