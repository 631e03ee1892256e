//! End-to-end tests for `hubop validate`.

use std::error::Error;
use std::fs;
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
    Ok(Command::new(env!("CARGO_BIN_EXE_hubop"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()?)
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn fixture_arg(name: &str) -> String {
    fixture(name).to_string_lossy().into_owned()
}

#[test]
fn valid_documents_exit_zero() -> Result<(), Box<dyn Error>> {
    for name in ["hub.valid.yaml", "config.valid.yaml"] {
        let output = hubop(&["validate", &fixture_arg(name)])?;
        assert_eq!(output.status.code(), Some(0), "fixture {name}");
        assert!(stdout(&output).starts_with("status: ok\n"));
    }
    Ok(())
}

#[test]
fn first_violation_is_printed_verbatim() -> Result<(), Box<dyn Error>> {
    let output = hubop(&["validate", &fixture_arg("hub.bad-url.yaml")])?;
    assert_eq!(output.status.code(), Some(2));
    assert_eq!(
        stdout(&output),
        "invalid value: hubconfigurl: spec.api.HubConfigUrl\n"
    );

    let output = hubop(&["validate", &fixture_arg("config.bad-param.yaml")])?;
    assert_eq!(output.status.code(), Some(2));
    assert_eq!(
        stdout(&output),
        "invalid key name \"invalid-param\": spec.hub.params\n"
    );
    Ok(())
}

#[test]
fn all_flag_prints_every_violation() -> Result<(), Box<dyn Error>> {
    let output = hubop(&["validate", "--all", &fixture_arg("config.many-errors.json")])?;
    assert_eq!(output.status.code(), Some(2));
    assert_eq!(
        stdout(&output),
        "invalid value: test: spec.hub.params.enable-devconsole-integration[0]\n\
         missing field(s): spec.targetNamespace\n\
         invalid value: cluster: metadata.name\n\
         invalid value: pro: spec.profile\n"
    );
    Ok(())
}

#[test]
fn json_output_lists_violation_codes() -> Result<(), Box<dyn Error>> {
    let output = hubop(&[
        "--output",
        "json",
        "validate",
        "--all",
        "--correlation-id",
        "req-42",
        &fixture_arg("hub.bad-url.yaml"),
    ])?;
    assert_eq!(output.status.code(), Some(2));

    let payload: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(payload["status"], "invalid");
    assert_eq!(payload["kind"], "HubDeployment");
    assert_eq!(payload["correlationId"], "req-42");
    assert_eq!(payload["violations"][0]["code"], "validation:invalid_value");
    assert_eq!(payload["violations"][0]["field"], "spec.api.HubConfigUrl");
    Ok(())
}

#[test]
fn delete_skips_validation() -> Result<(), Box<dyn Error>> {
    let output = hubop(&[
        "validate",
        "--operation",
        "delete",
        &fixture_arg("config.many-errors.json"),
    ])?;
    assert_eq!(output.status.code(), Some(0));
    Ok(())
}

#[test]
fn update_rejects_target_namespace_change() -> Result<(), Box<dyn Error>> {
    let args = |previous: &'static str| {
        vec![
            "validate".to_owned(),
            "--operation".to_owned(),
            "update".to_owned(),
            "--previous-namespace".to_owned(),
            previous.to_owned(),
            fixture_arg("config.valid.yaml"),
        ]
    };

    let moved = args("openshift-pipelines");
    let output = hubop(&moved.iter().map(String::as_str).collect::<Vec<_>>())?;
    assert_eq!(output.status.code(), Some(2));
    assert_eq!(
        stdout(&output),
        "invalid value: tekton-pipelines: spec.targetNamespace\n"
    );

    let unchanged = args("tekton-pipelines");
    let output = hubop(&unchanged.iter().map(String::as_str).collect::<Vec<_>>())?;
    assert_eq!(output.status.code(), Some(0));
    Ok(())
}

#[test]
fn load_failures_map_to_exit_codes() -> Result<(), Box<dyn Error>> {
    let missing = std::env::temp_dir().join("hubop-e2e-missing.yaml");
    let output = hubop(&["validate", &missing.to_string_lossy()])?;
    assert_eq!(output.status.code(), Some(3));
    assert!(stdout(&output).contains("code: core:not_found"));

    let output = hubop(&["validate", &fixture_arg("unknown-kind.yaml")])?;
    assert_eq!(output.status.code(), Some(2));
    assert!(stdout(&output).contains("code: config:unknown_kind"));
    Ok(())
}

#[test]
fn malformed_yaml_is_invalid_input() -> Result<(), Box<dyn Error>> {
    let path = std::env::temp_dir().join(format!("hubop-e2e-{}-broken.yaml", std::process::id()));
    fs::write(&path, "kind: [\n")?;
    let output = hubop(&["validate", &path.to_string_lossy()]);
    let _ = fs::remove_file(&path);

    let output = output?;
    assert_eq!(output.status.code(), Some(2));
    assert!(stdout(&output).contains("code: config:invalid_yaml"));
    Ok(())
}
