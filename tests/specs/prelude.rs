//! Test helpers for behavioral specifications.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

pub use assert_cmd::prelude::*;
pub use predicates;
pub use predicates::prelude::PredicateBooleanExt;
use std::process::Command;

/// Returns a Command configured to run the todo-gate binary.
///
/// `INPUT_*` variables are cleared so a CI runner's own action inputs
/// never leak into the tests.
pub fn todo_gate_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("todo-gate"));
    cmd.env_remove("INPUT_PATH");
    cmd.env_remove("INPUT_EXTENSIONS");
    cmd.env_remove("INPUT_TODO_PATTERN");
    cmd
}

/// Get path to a test fixture directory.
pub fn fixture(name: &str) -> std::path::PathBuf {
    let manifest_dir =
        std::env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR should be set");
    std::path::PathBuf::from(manifest_dir)
        .parent()
        .expect("parent should exist")
        .parent()
        .expect("workspace root should exist")
        .join("tests/fixtures")
        .join(name)
}

/// Fixture path as a string argument.
pub fn fixture_arg(name: &str) -> String {
    fixture(name).to_string_lossy().into_owned()
}
