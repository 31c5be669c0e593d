//! Argument-surface tests for the renderer binary.  A bad thread
//! count has to be rejected up front, before any palette or render
//! work starts; none of these invocations may reach the renderer.

extern crate assert_cmd;
extern crate predicates;

use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

#[test]
fn help_documents_the_thread_knob() {
    Command::cargo_bin("cyclebrot")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--threads"));
}

#[test]
fn rejects_zero_threads() {
    Command::cargo_bin("cyclebrot")
        .unwrap()
        .args(&["--threads", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Thread count must be between 1 and"));
}

#[test]
fn rejects_absurd_thread_counts() {
    Command::cargo_bin("cyclebrot")
        .unwrap()
        .args(&["--threads", "65537"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Thread count must be between 1 and"));
}

#[test]
fn rejects_unparseable_thread_counts() {
    Command::cargo_bin("cyclebrot")
        .unwrap()
        .args(&["--threads", "many"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Could not parse thread count"));
}
