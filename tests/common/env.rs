//! Test environment builder for isolated mudsync testing.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::process::{Child, Command, Output, Stdio};

use tempfile::TempDir;

/// Variables the binary reads that must not leak in from the host
const ISOLATED_VARS: [&str; 5] = [
    "MUD_PATH_LOCAL",
    "MUD_PATH_HACKMUD",
    "MUD_USERS",
    "MUD_DO_TRANSFORM",
    "RUST_LOG",
];

/// Result of running a mudsync command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

#[allow(dead_code)]
impl TestResult {
    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }
}

/// Isolated project with a `hackmud` directory inside a fake home
pub struct TestEnv {
    pub project_root: TempDir,
    pub home_dir: TempDir,
}

#[allow(dead_code)]
impl TestEnv {
    /// Project with identities `alice` and `bob`, remote root `~/hackmud`
    pub fn new() -> Self {
        Self::with_manifest(
            "users = [\"alice\", \"bob\"]\n\n[paths]\nlocal = \"src\"\nhackmud = \"~/hackmud\"\nbuild = \"build\"\n",
        )
    }

    pub fn with_manifest(manifest: &str) -> Self {
        let env = Self {
            project_root: TempDir::new().expect("Failed to create project temp dir"),
            home_dir: TempDir::new().expect("Failed to create home temp dir"),
        };
        env.write_project_file("mudsync.toml", manifest);
        env
    }

    pub fn project_path(&self, relative: &str) -> PathBuf {
        self.project_root.path().join(relative)
    }

    pub fn remote_path(&self, relative: &str) -> PathBuf {
        self.home_dir.path().join("hackmud").join(relative)
    }

    fn command(&self, args: &[&str], env_vars: &[(&str, &str)]) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_mudsync"));
        cmd.current_dir(self.project_root.path())
            .args(args)
            .env("MUDSYNC_TEST_HOME", self.home_dir.path())
            .env("HOME", self.home_dir.path());
        for var in ISOLATED_VARS {
            cmd.env_remove(var);
        }
        for (key, value) in env_vars {
            cmd.env(key, value);
        }
        cmd
    }

    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let output = self
            .command(args, env_vars)
            .output()
            .expect("Failed to execute mudsync");
        to_result(output)
    }

    /// Start a long-running task with piped output
    pub fn spawn(&self, args: &[&str]) -> Child {
        self.command(args, &[])
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .expect("Failed to spawn mudsync")
    }

    pub fn write_project_file(&self, relative: &str, content: &str) {
        write(&self.project_path(relative), content);
    }

    pub fn write_remote_file(&self, relative: &str, content: &str) {
        write(&self.remote_path(relative), content);
    }

    pub fn read_project_file(&self, relative: &str) -> String {
        read(&self.project_path(relative))
    }

    pub fn read_remote_file(&self, relative: &str) -> String {
        read(&self.remote_path(relative))
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

fn write(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("Failed to create directories");
    }
    std::fs::write(path, content).expect("Failed to write file");
}

fn read(path: &Path) -> String {
    std::fs::read_to_string(path)
        .unwrap_or_else(|e| panic!("Failed to read {}: {}", path.display(), e))
}

/// Relative path to content for every file below `root`
#[allow(dead_code)]
pub fn snapshot_tree(root: &Path) -> BTreeMap<String, String> {
    walkdir::WalkDir::new(root)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .map(|e| {
            let rel = e.path().strip_prefix(root).unwrap().display().to_string();
            (rel, read(e.path()))
        })
        .collect()
}
