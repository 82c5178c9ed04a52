//! End-to-end tests for the wo-cli binary.
#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const SMALL_WORLD: &str = r#"{
    "meta": { "name": "Outpost", "intro": "The wind never stops.", "start": "hut" },
    "rooms": [
        { "label": "hut", "name": "Hut", "description": "A tin hut." },
        { "label": "ice", "name": "Ice Field" },
        { "label": "cellar", "name": "Cellar" },
        { "label": "vault", "name": "Vault" }
    ],
    "items": [
        { "label": "lamp", "name": "lamp", "location": "hut", "type": "carryable",
          "keywords": "lamp lantern" }
    ],
    "exits": [
        { "label": "main_portal", "name": "hut door", "location": "hut",
          "destination": "ice", "direction": "north", "is_open": "no" },
        { "label": "hatch", "name": "hatch", "location": "hut",
          "destination": "cellar", "direction": "down", "is_open": "yes" },
        { "label": "reactor_door", "name": "vault door", "location": "cellar",
          "destination": "vault", "direction": "east", "is_open": "yes" }
    ]
}"#;

/// Write a world file into a temp directory.
fn world_file(json: &str) -> (TempDir, String) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("world.json");
    fs::write(&path, json).unwrap();
    let path = path.to_str().unwrap().to_string();
    (dir, path)
}

fn whiteout() -> Command {
    let mut cmd = Command::cargo_bin("whiteout").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

// ---------------------------------------------------------------------------
// check
// ---------------------------------------------------------------------------

#[test]
fn check_bundled_world() {
    whiteout()
        .arg("check")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("All checks passed for 'Whiteout'")
                .and(predicate::str::contains("8 rooms"))
                .and(predicate::str::contains("14 exits")),
        );
}

#[test]
fn check_world_file() {
    let (_dir, path) = world_file(SMALL_WORLD);
    whiteout()
        .args(["check", "-w", &path])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Outpost")
                .and(predicate::str::contains("4 rooms, 1 items, 6 exits")),
        );
}

#[test]
fn check_rejects_malformed_json() {
    let (_dir, path) = world_file("{ not json");
    whiteout()
        .args(["check", "--world", &path])
        .assert()
        .failure()
        .stderr(predicate::str::contains("error: invalid world data"));
}

#[test]
fn check_rejects_missing_guarded_exit() {
    let broken = SMALL_WORLD.replace("reactor_door", "vault_door");
    let (_dir, path) = world_file(&broken);
    whiteout()
        .args(["check", "--world", &path])
        .assert()
        .failure()
        .stderr(predicate::str::contains("reactor_door"));
}

#[test]
fn check_missing_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nope.json");
    whiteout()
        .args(["check", "--world", path.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot read world file"));
}

// ---------------------------------------------------------------------------
// rooms
// ---------------------------------------------------------------------------

#[test]
fn rooms_lists_bundled_world() {
    whiteout()
        .arg("rooms")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("lobby (start)")
                .and(predicate::str::contains("Reactor Room"))
                .and(predicate::str::contains("8 rooms")),
        );
}

#[test]
fn rooms_lists_reverse_exits() {
    let (_dir, path) = world_file(SMALL_WORLD);
    whiteout()
        .args(["rooms", "-w", &path])
        .assert()
        .success()
        .stdout(predicate::str::contains("u -> hut").and(predicate::str::contains("hut (start)")));
}

// ---------------------------------------------------------------------------
// play
// ---------------------------------------------------------------------------

#[test]
fn play_intro_and_quit() {
    whiteout()
        .args(["play", "--no-color"])
        .write_stdin("look\nquit\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Whiteout")
                .and(predicate::str::contains("Lobby"))
                .and(predicate::str::contains("Goodbye!")),
        );
}

#[test]
fn play_reports_unknown_commands() {
    whiteout()
        .args(["play", "--no-color"])
        .write_stdin("dance\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("unknown command: dance"));
}

#[test]
fn play_ends_at_eof() {
    whiteout()
        .args(["play", "--no-color"])
        .write_stdin("i\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("You are carrying nothing."));
}

#[test]
fn play_world_file() {
    let (_dir, path) = world_file(SMALL_WORLD);
    whiteout()
        .args(["play", "--no-color", "--no-exits", "-w", &path])
        .write_stdin("take lantern\nn\nd\nquit\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("The wind never stops.")
                .and(predicate::str::contains("You pick up the lamp."))
                .and(predicate::str::contains("You think you'll need a keycard"))
                .and(predicate::str::contains("Cellar"))
                .and(predicate::str::contains("Exits:").not()),
        );
}

#[test]
fn play_to_victory() {
    let script = [
        "w",
        "examine corpse",
        "take keycard",
        "take scalpel",
        "e",
        "s",
        "take parka",
        "n",
        "n",
        "e",
        "examine corpse",
        "cut key",
        "take key",
        "w",
        "s",
        "e",
        "look in fridge",
        "take syringe",
        "inject syringe",
        "w",
        "d",
        "e",
        "unlock core",
        "take rod",
        "w",
        "u",
        "n",
        "e",
        "fix snowmobile",
        "look",
    ]
    .join("\n");

    whiteout()
        .args(["play", "--no-color"])
        .write_stdin(script)
        .assert()
        .success()
        .stdout(
            predicate::str::contains("blink to life")
                .and(predicate::str::contains("You escaped."))
                .and(predicate::str::contains("[internal]").not()),
        );
}

#[test]
fn verbose_logs_to_stderr() {
    whiteout()
        .args(["-v", "play", "--no-color"])
        .write_stdin("e\nquit\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("mobile moved"));
}
