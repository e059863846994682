//! End-to-end checks of the `studyflow session` subcommands

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;

use super::common::fixtures::TempStudy;

fn studyflow(study: &TempStudy) -> Command {
    let mut cmd = Command::cargo_bin("studyflow").expect("binary should build");
    cmd.arg("--data-dir").arg(study.dir.path());
    cmd.env_remove("STUDYFLOW_DATA_DIR");
    cmd
}

fn show_json(study: &TempStudy) -> Value {
    let output = studyflow(study)
        .args(["session", "show", "--json"])
        .output()
        .expect("failed to run studyflow");
    assert!(output.status.success());
    serde_json::from_slice(&output.stdout).expect("stdout should be JSON")
}

#[test]
fn test_show_is_stable_across_runs() {
    let study = TempStudy::new();

    let first = show_json(&study);
    let second = show_json(&study);

    assert_eq!(first["origin"], "created");
    assert_eq!(second["origin"], "restored");
    assert_eq!(first["participantId"], second["participantId"]);
    assert_eq!(first["group"], second["group"]);
    assert!(matches!(
        first["group"].as_str(),
        Some("control") | Some("intervention")
    ));
}

#[test]
fn test_reset_assigns_new_participant() {
    let study = TempStudy::new();
    let before = show_json(&study);

    studyflow(&study)
        .args(["session", "reset"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Participant session cleared"));

    let after = show_json(&study);
    assert_eq!(after["origin"], "created");
    assert_ne!(before["participantId"], after["participantId"]);
}

#[test]
fn test_first_run_writes_example_config_and_log() {
    let study = TempStudy::new();

    studyflow(&study)
        .args(["session", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("participant id:"));

    assert!(study.dir.path().join("config.toml").exists());
    assert!(study.dir.path().join("logs").join("studyflow.log").exists());
    assert!(study.dir.path().join("studyflow.db").exists());
}

#[test]
fn test_memory_backend_does_not_persist() {
    let study = TempStudy::new();
    std::fs::write(
        study.dir.path().join("config.toml"),
        "[storage]\nbackend = \"memory\"\n",
    )
    .unwrap();

    let first = show_json(&study);
    let second = show_json(&study);
    assert_eq!(second["origin"], "created");
    assert_ne!(first["participantId"], second["participantId"]);
}

#[test]
fn test_unopenable_database_reports_ephemeral_session() {
    let study = TempStudy::new();
    std::fs::create_dir(study.dir.path().join("studyflow.db")).unwrap();

    let first = show_json(&study);
    let second = show_json(&study);
    assert_eq!(first["origin"], "ephemeral");
    assert_eq!(second["origin"], "ephemeral");
    assert_ne!(first["participantId"], second["participantId"]);
}
