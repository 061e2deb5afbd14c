//! Common helpers for CLI tests.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

/// Isolated project directory with its own home and config dir
pub struct TestEnv {
    dir: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("home/.config")).unwrap();
        Self { dir }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn write(&self, name: &str, content: &str) -> PathBuf {
        let path = self.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    /// `shelfmark` run inside the project with a clean environment
    pub fn shelfmark(&self) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_shelfmark"));
        cmd.current_dir(self.path())
            .env("HOME", self.path().join("home"))
            .env("XDG_CONFIG_HOME", self.path().join("home/.config"))
            .env_remove("RUST_LOG")
            .env_remove("SHELFMARK_DELIMITER")
            .env_remove("SHELFMARK_DISPLAY_PARENTS")
            .env_remove("SHELFMARK_VERBOSITY");
        cmd
    }

    pub fn run(&self, args: &[&str]) -> Output {
        self.shelfmark().args(args).output().unwrap()
    }
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

pub const CATALOG: &str = r#"{
    "art": 4,
    "art.modern": 2,
    "history": 7,
    "history.asia": 1,
    "history.europe": 5,
    "history.europe.france": 3,
    "maps": 9
}"#;
