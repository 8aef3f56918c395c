use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use tempfile::TempDir;

fn ncraft(temp: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("ncraft").unwrap();
    cmd.current_dir(temp.path())
        .env_remove("RUST_LOG")
        .env("NCRAFT__STORAGE__DATA_DIR", temp.path().join("data"))
        .env("NCRAFT__STORAGE__EXPORT_DIR", temp.path().join("exports"))
        .env("NCRAFT__TRADEMARK__LATENCY_MS", "0")
        .env("NCRAFT__AVAILABILITY__DOMAIN_LATENCY_MS", "0")
        .env("NCRAFT__AVAILABILITY__LIVE", "false");
    cmd
}

fn names(output: &[u8]) -> Vec<String> {
    let batch: Value = serde_json::from_slice(output).unwrap();
    batch["records"]
        .as_array()
        .unwrap()
        .iter()
        .map(|record| record["name"].as_str().unwrap().to_owned())
        .collect()
}

#[test]
fn industries_are_listed() {
    let temp = TempDir::new().unwrap();
    ncraft(&temp)
        .arg("industries")
        .assert()
        .success()
        .stdout(predicate::str::contains("technology").and(predicate::str::contains("creative")));
}

#[test]
fn assess_reports_a_registered_mark() {
    let temp = TempDir::new().unwrap();
    ncraft(&temp)
        .args(["assess", "Google"])
        .assert()
        .success()
        .stdout(predicate::str::contains("high risk").and(predicate::str::contains("google")));
}

#[test]
fn generate_is_reproducible_with_a_seed() {
    let temp = TempDir::new().unwrap();
    let run = || {
        ncraft(&temp)
            .args(["generate", "cloud", "-i", "technology", "--seed", "42", "--offline", "--json"])
            .assert()
            .success()
            .get_output()
            .stdout
            .clone()
    };

    let first = names(&run());
    assert_eq!(first.len(), 8);
    assert_eq!(first, names(&run()));
}

#[test]
fn generate_checks_only_the_requested_suffixes() {
    let temp = TempDir::new().unwrap();
    let output = ncraft(&temp)
        .args(["generate", "nova", "-s", ".dev", "--seed", "1", "--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let batch: Value = serde_json::from_slice(&output).unwrap();
    for record in batch["records"].as_array().unwrap() {
        let domains = record["domains"].as_array().unwrap();
        assert_eq!(domains.len(), 1);
        assert!(domains[0]["domain"].as_str().unwrap().ends_with(".dev"));
    }
}

#[test]
fn blank_keywords_fail_with_a_message() {
    let temp = TempDir::new().unwrap();
    ncraft(&temp)
        .args(["generate", "   "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no keywords provided"));
}

#[test]
fn unknown_industry_is_rejected() {
    let temp = TempDir::new().unwrap();
    ncraft(&temp)
        .args(["generate", "cloud", "-i", "aerospace"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown industry"));
}

#[test]
fn logo_is_exported_as_svg() {
    let temp = TempDir::new().unwrap();
    let out = temp.path().join("logos");

    ncraft(&temp)
        .args(["logo", "Acme", "-i", "finance", "-o"])
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("Acme-logo.svg"));

    let svg = std::fs::read_to_string(out.join("Acme-logo.svg")).unwrap();
    assert!(svg.starts_with("<svg"));
    assert!(svg.contains("#004D40"));
}

#[test]
fn favorites_persist_between_runs() {
    let temp = TempDir::new().unwrap();

    ncraft(&temp).args(["favorites", "add", "NovaLabs"]).assert().success();
    ncraft(&temp)
        .args(["favorites", "toggle", "CloudHub"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added CloudHub"));

    ncraft(&temp)
        .args(["--json", "favorites", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#"["NovaLabs","CloudHub"]"#));

    ncraft(&temp)
        .args(["favorites", "remove", "NovaLabs"])
        .assert()
        .success()
        .stdout(predicate::str::contains("NovaLabs").not());
}

#[test]
fn malformed_config_file_is_reported() {
    let temp = TempDir::new().unwrap();
    let config = temp.path().join("ncraft.toml");
    std::fs::write(&config, "[generator]\nprimary_limit = \"many\"\n").unwrap();

    ncraft(&temp)
        .arg("--config")
        .arg(&config)
        .arg("industries")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration is malformed"));
}
