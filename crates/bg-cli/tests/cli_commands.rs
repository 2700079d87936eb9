//! Integration tests for the `benagram` CLI commands.
#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn benagram(saves: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("benagram").unwrap();
    cmd.arg("--save-dir").arg(saves.path());
    cmd
}

fn save_file(saves: &TempDir) -> std::path::PathBuf {
    saves.path().join("benagram-save.json")
}

// ---------------------------------------------------------------------------
// play
// ---------------------------------------------------------------------------

#[test]
fn play_opens_at_the_station() {
    let saves = TempDir::new().unwrap();
    benagram(&saves)
        .arg("play")
        .write_stdin("quit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("train parked at the platform"))
        .stdout(predicate::str::contains("Goodbye!"));
}

#[test]
fn play_moves_and_saves() {
    let saves = TempDir::new().unwrap();
    benagram(&saves)
        .arg("play")
        .write_stdin("go west\nlook\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("find yourself on the street"))
        .stdout(predicate::str::contains("bus parked at the bus stand"));

    let saved = fs::read_to_string(save_file(&saves)).unwrap();
    assert!(saved.contains("\"currentRoom\": \"Street\""));
}

#[test]
fn play_rejects_two_verbs() {
    let saves = TempDir::new().unwrap();
    benagram(&saves)
        .arg("play")
        .write_stdin("run jump\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "You can use sentences with only one verb",
        ));
}

#[test]
fn play_continues_saved_game() {
    let saves = TempDir::new().unwrap();
    benagram(&saves)
        .arg("play")
        .write_stdin("go west\ngo bus\nquit\n")
        .assert()
        .success();

    benagram(&saves)
        .arg("play")
        .write_stdin("quit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Continuing your saved game"))
        .stdout(predicate::str::contains("bus stand is nearly empty"));
}

#[test]
fn play_new_ignores_save() {
    let saves = TempDir::new().unwrap();
    benagram(&saves)
        .arg("play")
        .write_stdin("go west\n")
        .assert()
        .success();

    benagram(&saves)
        .args(["play", "--new"])
        .write_stdin("quit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Continuing").not())
        .stdout(predicate::str::contains("train parked at the platform"));
}

#[test]
fn play_death_and_reset() {
    let saves = TempDir::new().unwrap();
    benagram(&saves)
        .arg("play")
        .write_stdin("go west\npay driver\nwait\ngo\nleave\nhide\nreset\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("You have died."))
        .stdout(predicate::str::contains("You are dead."))
        .stdout(predicate::str::contains("The game has been reset."));

    assert!(!save_file(&saves).exists());
}

#[test]
fn play_inventory_shorthand() {
    let saves = TempDir::new().unwrap();
    benagram(&saves)
        .arg("play")
        .write_stdin("i\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("You are carrying:"))
        .stdout(predicate::str::contains("100 Rupee Note"));
}

// ---------------------------------------------------------------------------
// status
// ---------------------------------------------------------------------------

#[test]
fn status_without_save() {
    let saves = TempDir::new().unwrap();
    benagram(&saves)
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("No saved game."));
}

#[test]
fn status_shows_saved_game() {
    let saves = TempDir::new().unwrap();
    benagram(&saves)
        .arg("play")
        .write_stdin("go west\ngo bus\ntalk woman\n")
        .assert()
        .success();

    benagram(&saves)
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("Bus Stand"))
        .stdout(predicate::str::contains("charm"))
        .stdout(predicate::str::contains("Talked to old woman"));
}

#[test]
fn status_reads_legacy_save() {
    let saves = TempDir::new().unwrap();
    fs::write(
        save_file(&saves),
        r#"{"currentRoom":"Bus Stand","inventory":["letter","Talked to old woman"],"health":90}"#,
    )
    .unwrap();

    benagram(&saves)
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("Bus Stand"))
        .stdout(predicate::str::contains("90"))
        .stdout(predicate::str::contains("Talked to old woman"));
}

#[test]
fn status_ignores_corrupt_save() {
    let saves = TempDir::new().unwrap();
    fs::write(save_file(&saves), "{ not json").unwrap();

    benagram(&saves)
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("No saved game."));
}

#[test]
fn status_ignores_dead_save() {
    let saves = TempDir::new().unwrap();
    fs::write(
        save_file(&saves),
        r#"{"currentRoom":"Village Center","inventory":[],"health":0}"#,
    )
    .unwrap();

    benagram(&saves)
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("No saved game."));

    benagram(&saves)
        .arg("play")
        .write_stdin("quit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Continuing").not())
        .stdout(predicate::str::contains("train parked at the platform"));
}

#[test]
fn custom_slot_name() {
    let saves = TempDir::new().unwrap();
    benagram(&saves)
        .args(["--slot", "second", "play"])
        .write_stdin("go west\n")
        .assert()
        .success();

    assert!(saves.path().join("second.json").exists());
    assert!(!save_file(&saves).exists());
}

// ---------------------------------------------------------------------------
// reset
// ---------------------------------------------------------------------------

#[test]
fn reset_clears_save() {
    let saves = TempDir::new().unwrap();
    benagram(&saves)
        .arg("play")
        .write_stdin("go west\n")
        .assert()
        .success();
    assert!(save_file(&saves).exists());

    benagram(&saves)
        .arg("reset")
        .assert()
        .success()
        .stdout(predicate::str::contains("Cleared"));
    assert!(!save_file(&saves).exists());

    benagram(&saves)
        .arg("reset")
        .assert()
        .success()
        .stdout(predicate::str::contains("Cleared"));
}

#[test]
fn reset_removes_corrupt_save() {
    let saves = TempDir::new().unwrap();
    fs::write(save_file(&saves), "{ not json").unwrap();

    benagram(&saves)
        .arg("reset")
        .assert()
        .success()
        .stdout(predicate::str::contains("Cleared"));
    assert!(!save_file(&saves).exists());
}

// ---------------------------------------------------------------------------
// misc
// ---------------------------------------------------------------------------

#[test]
fn help_lists_commands() {
    let saves = TempDir::new().unwrap();
    benagram(&saves)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("play"))
        .stdout(predicate::str::contains("status"))
        .stdout(predicate::str::contains("reset"));
}

#[test]
fn unknown_subcommand_fails() {
    let saves = TempDir::new().unwrap();
    benagram(&saves).arg("fly").assert().failure();
}
