//! Common test utilities for shoal CLI integration tests.

use std::path::PathBuf;
use std::process::{Command, Output};
use tempfile::TempDir;

/// A temporary directory holding instance files.
pub struct Fixture {
    /// Backing directory, removed on drop
    pub dir: TempDir,
}

impl Fixture {
    /// Creates an empty fixture directory.
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    /// Writes an instance file and returns its path.
    pub fn file(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        std::fs::write(&path, contents).unwrap();
        path
    }

    /// Runs the `shoal` binary with an isolated config location.
    pub fn shoal(&self, args: &[&str]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_shoal"))
            .args(args)
            .env("SHOAL_CONFIG", self.dir.path().join("no-config.toml"))
            .env_remove("RUST_LOG")
            .output()
            .unwrap()
    }
}

/// The worked example: a chain a-b-c plus an unrelated user d.
pub const CHAIN: &str = "\
i Chain
u a
u b
u c
u d
fr a b
fr b c
dq a c
dq a b
dq a a
dq a d
";

/// A triangle with a self-loop on one corner.
pub const TRIANGLE: &str = "\
u a
u b
u c
fr a b
fr b c
fr c a
fr a a
dq a c
dq c b
";

/// Returns stdout as a vector of lines.
pub fn stdout_lines(output: &Output) -> Vec<String> {
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(str::to_string)
        .collect()
}
