//! Integration tests for loading and validating resource document fixtures.

use hubop_config::{load_resource_from_path, to_pretty_json};
use hubop_shared::{AdmissionContext, ErrorCode, Validate};
use std::error::Error;
use std::path::{Path, PathBuf};

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn first_violation(name: &str) -> Result<Option<String>, Box<dyn Error>> {
    let resource = load_resource_from_path(&fixture(name))?;
    Ok(resource
        .validate(&AdmissionContext::create())
        .err()
        .map(|error| error.to_string()))
}

#[test]
fn valid_fixtures_pass() -> Result<(), Box<dyn Error>> {
    assert_eq!(first_violation("hub.valid.yaml")?, None);
    assert_eq!(first_violation("config.valid.yaml")?, None);
    Ok(())
}

#[test]
fn invalid_fixtures_report_first_violation() -> Result<(), Box<dyn Error>> {
    assert_eq!(
        first_violation("hub.bad-url.yaml")?.as_deref(),
        Some("invalid value: hubconfigurl: spec.api.HubConfigUrl")
    );
    assert_eq!(
        first_violation("config.bad-param.yaml")?.as_deref(),
        Some("invalid key name \"invalid-param\": spec.hub.params")
    );
    Ok(())
}

#[test]
fn every_violation_is_listed_in_category_order() -> Result<(), Box<dyn Error>> {
    let resource = load_resource_from_path(&fixture("config.many-errors.json"))?;
    let errors = resource.validate_all(&AdmissionContext::create());

    let messages: Vec<String> = errors.iter().map(ToString::to_string).collect();
    assert_eq!(
        messages,
        vec![
            "invalid value: test: spec.hub.params.enable-devconsole-integration[0]",
            "missing field(s): spec.targetNamespace",
            "invalid value: cluster: metadata.name",
            "invalid value: pro: spec.profile",
        ]
    );
    Ok(())
}

#[test]
fn defaulting_fills_secret_names() -> Result<(), Box<dyn Error>> {
    let mut resource = load_resource_from_path(&fixture("hub.needs-defaults.json"))?;
    resource.set_defaults();

    let rendered = to_pretty_json(&resource)?;
    let value: serde_json::Value = serde_json::from_str(&rendered)?;
    assert_eq!(value["kind"], "HubDeployment");
    assert_eq!(value["spec"]["db"]["secret"], "tekton-hub-db");
    assert_eq!(value["spec"]["api"]["secret"], "tekton-hub-api");
    assert!(rendered.ends_with('\n'));
    Ok(())
}

#[test]
fn unknown_kind_fixture_is_rejected() -> Result<(), Box<dyn Error>> {
    let error = load_resource_from_path(&fixture("unknown-kind.yaml"))
        .err()
        .ok_or_else(|| std::io::Error::other("expected unknown kind error"))?;
    assert_eq!(error.code, ErrorCode::new("config", "unknown_kind"));
    assert_eq!(
        error.metadata.get("kind").map(String::as_str),
        Some("Pipeline")
    );
    assert!(error.metadata.contains_key("path"));
    Ok(())
}
