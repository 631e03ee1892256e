//! End-to-end tests for `hubop defaults` and `hubop info`.

use std::error::Error;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
        .join("crates")
        .join("config")
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn hubop(args: &[&str]) -> Result<Output, Box<dyn Error>> {
    Ok(Command::new(env!("CARGO_BIN_EXE_hubop")).args(args).output()?)
}

#[test]
fn defaults_fill_hub_secret_names() -> Result<(), Box<dyn Error>> {
    let path = fixture("hub.needs-defaults.json");
    let output = hubop(&["defaults", &path.to_string_lossy()])?;
    assert_eq!(output.status.code(), Some(0));

    let document: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(document["kind"], "HubDeployment");
    assert_eq!(document["spec"]["db"]["secret"], "tekton-hub-db");
    assert_eq!(document["spec"]["api"]["secret"], "tekton-hub-api");
    Ok(())
}

#[test]
fn defaults_fill_operator_profile() -> Result<(), Box<dyn Error>> {
    let path = fixture("config.bad-param.yaml");
    let output = hubop(&["--output", "json", "defaults", &path.to_string_lossy()])?;
    assert_eq!(output.status.code(), Some(0));

    let payload: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(payload["status"], "ok");
    assert_eq!(payload["resource"]["spec"]["profile"], "all");
    Ok(())
}

#[test]
fn info_reports_versions() -> Result<(), Box<dyn Error>> {
    let output = hubop(&["--output", "json", "info"])?;
    assert_eq!(output.status.code(), Some(0));

    let payload: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(payload["build"]["name"], "hubop-cli");
    assert!(payload["build"]["apiVersion"].is_string());
    Ok(())
}
