//! Smoke tests for the cmake-runner binary

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write_project(root: &Path) {
    fs::write(
        root.join("CMakeLists.txt"),
        "cmake_minimum_required(VERSION 3.20)\nproject(demo LANGUAGES CXX)\n",
    )
    .unwrap();
    let build = root.join("build");
    fs::create_dir_all(&build).unwrap();
    fs::write(
        build.join("CMakeCache.txt"),
        format!(
            "//Choose the type of build.\n\
             CMAKE_BUILD_TYPE:STRING=Release\n\
             CMAKE_HOME_DIRECTORY:INTERNAL={}\n",
            root.display()
        ),
    )
    .unwrap();
}

#[test]
fn info_prints_the_resolved_pair() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().canonicalize().unwrap();
    write_project(&root);

    Command::cargo_bin("cmake-runner")
        .unwrap()
        .arg("info")
        .arg(&root)
        .assert()
        .success()
        .stdout(predicate::str::contains("Source:"))
        .stdout(predicate::str::contains("build"));
}

#[test]
fn info_fails_outside_any_project() {
    let temp_dir = TempDir::new().unwrap();

    Command::cargo_bin("cmake-runner")
        .unwrap()
        .arg("info")
        .arg(temp_dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("No CMake project"));
}

#[test]
fn options_lists_cache_variables() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().canonicalize().unwrap();
    write_project(&root);

    Command::cargo_bin("cmake-runner")
        .unwrap()
        .arg("options")
        .arg(&root)
        .assert()
        .success()
        .stdout(predicate::str::contains("CMAKE_BUILD_TYPE:STRING=Release"))
        .stdout(predicate::str::contains("Choose the type of build."));
}

#[test]
fn configure_dry_run_shows_the_invocation() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().canonicalize().unwrap();
    fs::write(
        root.join("CMakeLists.txt"),
        "cmake_minimum_required(VERSION 3.20)\nproject(demo LANGUAGES CXX)\n",
    )
    .unwrap();

    // No cache file yet, so -D assignments from the config would apply;
    // here we pass one explicitly.
    Command::cargo_bin("cmake-runner")
        .unwrap()
        .args(["configure", "--dry-run", "-D", "CMAKE_BUILD_TYPE:STRING=Debug"])
        .arg(&root)
        .assert()
        .success()
        .stdout(predicate::str::contains("cmake"))
        .stdout(predicate::str::contains("-DCMAKE_BUILD_TYPE:STRING=Debug"))
        .stdout(predicate::str::contains("Working directory:"));
}

#[test]
fn test_dry_run_places_the_pattern_last() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().canonicalize().unwrap();
    write_project(&root);

    Command::cargo_bin("cmake-runner")
        .unwrap()
        .args(["test", "--dry-run", "-R", "^unit_"])
        .arg(&root)
        .assert()
        .success()
        .stdout(predicate::str::contains("ctest -R ^unit_"));
}
