use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Test harness running the `ems` binary inside a temporary working directory
pub struct CliTestHarness {
    temp_dir: TempDir,
}

impl CliTestHarness {
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp directory");
        Self { temp_dir }
    }

    /// Get a Command instance configured for testing
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("ems").expect("Failed to find ems binary");
        cmd.current_dir(self.temp_dir.path());
        cmd.env_remove("RUST_LOG");
        cmd
    }

    pub fn dir(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.temp_dir.path().join(name)
    }

    /// Write a fixture file and return its path as a string argument
    pub fn write(&self, name: &str, contents: &str) -> String {
        let path = self.path(name);
        fs::write(&path, contents).expect("Failed to write fixture");
        path.to_string_lossy().into_owned()
    }

    pub fn read(&self, name: &str) -> String {
        fs::read_to_string(self.path(name)).expect("Failed to read output file")
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

/// Common test fixtures
pub struct TestFixtures;

impl TestFixtures {
    pub fn events_json() -> &'static str {
        r#"[
            {"id": "standup", "title": "Standup", "date": "2024-03-04", "time": "09:30",
             "end_time": "09:45", "type": "meeting", "recurrence": "weekly"},
            {"id": "launch", "title": "Launch", "date": "2024-03-20", "type": "deadline",
             "location": "HQ, Floor 2"},
            {"id": "odd", "title": "Odd cadence", "date": "2024-03-10", "recurrence": "hourly"}
        ]"#
    }

    pub fn employees_json() -> &'static str {
        r#"[
            {"id": 1, "name": "Ada Lovelace", "email": "ada@example.com", "role": "Engineer",
             "department": "Engineering", "status": "Active", "join_date": "2019-03-12"},
            {"id": 2, "name": "Grace Hopper", "email": "grace@example.com", "role": "Admiral, Retd.",
             "department": "Navy", "status": "On Leave", "join_date": "2024-01-02"},
            {"id": 3, "name": "Alan Turing", "email": "alan@example.com", "role": "Researcher",
             "department": "Research", "status": "Offline"}
        ]"#
    }

    pub fn invalid_import_csv() -> &'static str {
        "name,email,role,department,status,join_date\n\
         ,ok@example.com,Dev,Eng,Retired,2024-01-01\n\
         Bob,bob-at-example,Dev,Eng,Active,2024-02-30\n"
    }
}
