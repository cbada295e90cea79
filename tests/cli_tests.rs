//! Integration tests for the CLI interface

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Command isolated from any user or project configuration
fn territory_map(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("territory-map").unwrap();
    cmd.current_dir(dir.path())
        .env("XDG_CONFIG_HOME", dir.path().join("xdg"))
        .env("HOME", dir.path())
        .env_remove("TERRITORY_MAP_OUTPUT")
        .env_remove("TERRITORY_MAP_TILES");
    cmd
}

#[test]
fn test_cli_help_flag() {
    let dir = TempDir::new().unwrap();
    territory_map(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("Commands:"))
        .stdout(predicate::str::contains("render"));
}

#[test]
fn test_invalid_command() {
    let dir = TempDir::new().unwrap();
    territory_map(&dir)
        .arg("invalid-command")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:"));
}

#[test]
fn test_parse_command() {
    let dir = TempDir::new().unwrap();
    territory_map(&dir)
        .args(["parse", "OR-WA", "N. LA", "Indy", "Atlantis"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"OR-WA\" -> [OR, WA]"))
        .stdout(predicate::str::contains("\"N. LA\" -> [LA]"))
        .stdout(predicate::str::contains("\"Indy\" -> [IN]"))
        .stdout(predicate::str::contains("\"Atlantis\" -> []"));
}

#[test]
fn test_table_csv_from_builtin_roster() {
    let dir = TempDir::new().unwrap();
    territory_map(&dir)
        .args(["table", "--format", "csv"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("State,AE,AM,PM\n"))
        .stdout(predicate::str::contains("NV,Mike B,Dalton,\n"))
        .stdout(predicate::str::contains("LA,").not());
}

#[test]
fn test_table_from_roster_files_in_order() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("base.csv"),
        "State,Account Executive,Account Manager,Project Manager\nTX,A,-,Tammy Vaughn\n",
    )
    .unwrap();
    fs::write(
        dir.path().join("supplement.json"),
        r#"[{"State": "TX", "Account Executive": "B", "Project Manager": "Tammy Vaughn"}]"#,
    )
    .unwrap();

    territory_map(&dir)
        .args(["table", "-r", "base.csv", "-r", "supplement.json"])
        .assert()
        .success()
        .stdout("State: TX\nAE: A, B\nAM: \nPM: Tammy Vaughn\n");
}

#[test]
fn test_render_writes_map() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("out").join("map.html");

    territory_map(&dir)
        .args(["render", "-o"])
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("Leaflet map saved to:"));

    let html = fs::read_to_string(&output).unwrap();
    assert!(html.contains("leaflet.markercluster"));
    assert!(html.contains(r#""key":"TX""#));
    assert!(html.contains(r#""name":"States""#));
}

#[test]
fn test_default_command_renders_to_configured_output() {
    let dir = TempDir::new().unwrap();

    territory_map(&dir).assert().success();

    assert!(dir.path().join("maps_output").join("leaflet_map.html").is_file());
}

#[test]
fn test_project_config_adds_aliases_and_extra_points() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("territory-map.toml"),
        r#"
[aliases]
"Pac NW" = "OR/WA"

[map]
output = "custom/map.html"

[[extra_points]]
label = "Houston"
lat = 29.7604
lon = -95.3698
"#,
    )
    .unwrap();
    fs::write(
        dir.path().join("roster.yaml"),
        "- State: Pac NW\n  Account Manager: Izzy\n",
    )
    .unwrap();

    territory_map(&dir)
        .args(["render", "--roster", "roster.yaml"])
        .assert()
        .success();

    let html = fs::read_to_string(dir.path().join("custom").join("map.html")).unwrap();
    assert!(html.contains(r#""key":"OR""#));
    assert!(html.contains(r#""key":"WA""#));
    assert!(html.contains(r#""name":"Cities""#));
    assert!(html.contains("Houston"));
}

#[test]
fn test_output_env_override() {
    let dir = TempDir::new().unwrap();

    territory_map(&dir)
        .env("TERRITORY_MAP_OUTPUT", "from-env.html")
        .arg("render")
        .assert()
        .success();

    assert!(dir.path().join("from-env.html").is_file());
}

#[test]
fn test_tiles_env_override_is_validated() {
    let dir = TempDir::new().unwrap();

    territory_map(&dir)
        .env("TERRITORY_MAP_TILES", "Stamen Toner")
        .args(["render", "-o", "map.html"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Unknown tile layer 'Stamen Toner'"));

    assert!(!dir.path().join("map.html").exists());
}

#[test]
fn test_tiles_env_override_selects_preset() {
    let dir = TempDir::new().unwrap();

    territory_map(&dir)
        .env("TERRITORY_MAP_TILES", "CartoDB positron")
        .args(["render", "-o", "map.html"])
        .assert()
        .success();

    let html = fs::read_to_string(dir.path().join("map.html")).unwrap();
    assert!(html.contains("light_all"));
}

#[test]
fn test_missing_config_exits_with_argument_error() {
    let dir = TempDir::new().unwrap();
    territory_map(&dir)
        .args(["--config", "missing.toml", "table"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("does not exist"));
}

#[test]
fn test_unsupported_roster_extension_fails() {
    let dir = TempDir::new().unwrap();
    territory_map(&dir)
        .args(["table", "--roster", "roster.xlsx"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("roster.xlsx"));
}
