#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Fresh scratch directory inside the system temp dir, removed first if it
/// is left over from an earlier run.
pub fn setup_test_dir(name: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_timeactions", name));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create test dir");
    path
}

/// Binary under test, isolated from the real user configuration: HOME (and
/// APPDATA on Windows) point into `dir`.
pub fn ta(dir: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("timeactions");
    cmd.current_dir(dir).env("HOME", dir).env("APPDATA", dir);
    cmd
}

/// Log path inside `dir`, as a string for `--file`.
pub fn log_file(dir: &Path) -> String {
    dir.join("time.csv").to_string_lossy().to_string()
}

/// Non-empty lines of the log.
pub fn read_lines(path: &str) -> Vec<String> {
    fs::read_to_string(path)
        .expect("read log")
        .lines()
        .filter(|l| !l.is_empty())
        .map(str::to_string)
        .collect()
}
