//! End-to-end tests for `hubop concurrency`.

use std::error::Error;
use std::process::{Command, Output};

const ENV_VAR: &str = "RBAC_PROVISIONING_MAX_CONCURRENT_CALLS";

fn concurrency(value: Option<&str>) -> Result<Output, Box<dyn Error>> {
    let mut command = Command::new(env!("CARGO_BIN_EXE_hubop"));
    command.args(["--output", "json", "concurrency"]);
    match value {
        Some(value) => command.env(ENV_VAR, value),
        None => command.env_remove(ENV_VAR),
    };
    Ok(command.output()?)
}

fn limit(output: &Output) -> Result<serde_json::Value, Box<dyn Error>> {
    Ok(serde_json::from_slice(&output.stdout)?)
}

#[test]
fn configured_value_is_used() -> Result<(), Box<dyn Error>> {
    let output = concurrency(Some("10"))?;
    assert_eq!(output.status.code(), Some(0));

    let payload = limit(&output)?;
    assert_eq!(payload["limit"], 10);
    assert_eq!(payload["defaulted"], false);
    Ok(())
}

#[test]
fn bad_values_fall_back_to_default() -> Result<(), Box<dyn Error>> {
    for (value, reason) in [
        (Some("xyz"), "not_an_integer"),
        (Some("-1"), "below_minimum"),
        (Some("60"), "above_maximum"),
        (None, "empty"),
    ] {
        let output = concurrency(value)?;
        assert_eq!(output.status.code(), Some(0));

        let payload = limit(&output)?;
        assert_eq!(payload["limit"], 25, "value {value:?}");
        assert_eq!(payload["reason"], reason);
    }
    Ok(())
}

#[test]
fn text_output_names_the_source() -> Result<(), Box<dyn Error>> {
    let output = Command::new(env!("CARGO_BIN_EXE_hubop"))
        .arg("concurrency")
        .env(ENV_VAR, "60")
        .output()?;
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("limit: 25 (default: above_maximum)"));
    Ok(())
}
