//! Testes de integração para a CLI do EcoRound.

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn ecoround_bin(dir: &TempDir) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_ecoround"));
    cmd.current_dir(dir.path());
    cmd
}

const SNAPSHOT: &str = r#"{
    "match_id": "42",
    "team_a": {"name": "Sentinels", "tag": "SEN"},
    "team_b": {"name": "Fnatic", "tag": "FNC"},
    "sources": [
        {"source": "pandascore", "match_status": "ended", "winner": "TeamB", "timestamp": "2026-06-14T19:00:00Z", "confident": true},
        {"source": "vlr", "match_status": "ended", "winner": "TeamB", "timestamp": "2026-06-14T19:00:05Z", "confident": true},
        {"source": "liquipedia", "match_status": "started", "timestamp": "2026-06-14T19:00:09Z", "confident": false}
    ]
}"#;

#[test]
fn test_version_command() {
    let dir = TempDir::new().unwrap();
    ecoround_bin(&dir)
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains("ecoround"));
}

#[test]
fn test_help_command() {
    let dir = TempDir::new().unwrap();
    ecoround_bin(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("init")
                .and(predicate::str::contains("resolve"))
                .and(predicate::str::contains("simulate"))
                .and(predicate::str::contains("doctor")),
        );
}

#[test]
fn test_init_creates_config() {
    let dir = TempDir::new().unwrap();

    ecoround_bin(&dir)
        .args(["init", "--path"])
        .arg(dir.path())
        .assert()
        .success();

    let content = fs::read_to_string(dir.path().join("ecoround.toml")).unwrap();
    assert!(content.contains("[consensus]"));
    assert!(content.contains("consensus_min = 2"));

    // Segunda execução não sobrescreve
    ecoround_bin(&dir)
        .args(["init", "--path"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));
}

#[test]
fn test_doctor_reports_quorum() {
    let dir = TempDir::new().unwrap();
    ecoround_bin(&dir)
        .arg("doctor")
        .assert()
        .success()
        .stdout(predicate::str::contains("Diagnosticando").and(predicate::str::contains("Quórum de 2")));
}

#[test]
fn test_doctor_reports_invalid_quorum() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("ecoround.toml"), "[consensus]\nconsensus_min = 0\n").unwrap();

    ecoround_bin(&dir)
        .arg("doctor")
        .assert()
        .success()
        .stdout(predicate::str::contains("Problemas:").and(predicate::str::contains(
            "consensus_min must be at least 1",
        )));
}

#[test]
fn test_config_shows_invalid_file() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("ecoround.toml"), "[consensus]\nconsensus_min = 0\n").unwrap();

    ecoround_bin(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("consensus_min = 0"));
}

#[test]
fn test_resolve_rejects_invalid_quorum() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("snapshot.json");
    fs::write(&input, SNAPSHOT).unwrap();
    fs::write(dir.path().join("ecoround.toml"), "[consensus]\nconsensus_min = 0\n").unwrap();

    ecoround_bin(&dir)
        .args(["resolve", "--input"])
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("consensus_min must be at least 1"));
}

#[test]
fn test_resolve_snapshot_json() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("snapshot.json");
    fs::write(&input, SNAPSHOT).unwrap();

    let output = ecoround_bin(&dir)
        .args(["resolve", "--json", "--input"])
        .arg(&input)
        .output()
        .unwrap();

    assert!(output.status.success());
    let result: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(result["final_winner"], "TeamB");
    assert_eq!(result["status"], "resolved");
    assert_eq!(result["agreed_sources"], 2);
    assert_eq!(result["sources"].as_array().map(|s| s.len()), Some(3));
}

#[test]
fn test_resolve_respects_config_threshold() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("snapshot.json");
    fs::write(&input, SNAPSHOT).unwrap();
    fs::write(
        dir.path().join("ecoround.toml"),
        "[consensus]\nconsensus_min = 3\n",
    )
    .unwrap();

    ecoround_bin(&dir)
        .args(["resolve", "--input"])
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("Partida em Disputa"));
}

#[test]
fn test_resolve_missing_file_fails() {
    let dir = TempDir::new().unwrap();
    ecoround_bin(&dir)
        .args(["resolve", "--input", "nao-existe.json"])
        .assert()
        .failure();
}

#[test]
fn test_simulate_resolves_majority() {
    let dir = TempDir::new().unwrap();
    ecoround_bin(&dir)
        .args([
            "simulate",
            "--pandascore",
            "TeamA",
            "--vlr",
            "TeamA",
            "--liquipedia",
            "TeamB",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Partida Resolvida").and(predicate::str::contains("Sentinels")));
}

#[test]
fn test_simulate_single_source_is_disputed() {
    let dir = TempDir::new().unwrap();
    let output = ecoround_bin(&dir)
        .args(["simulate", "--json", "--vlr", "TeamB", "--pandascore", "started"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let result: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(result["final_winner"], "disputed");
    assert_eq!(result["consensus"], false);
}

#[test]
fn test_simulate_rejects_unknown_claim() {
    let dir = TempDir::new().unwrap();
    ecoround_bin(&dir)
        .args(["simulate", "--vlr", "Draw"])
        .assert()
        .failure();
}
