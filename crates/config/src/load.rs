//! Resource document loading (JSON or YAML).
//!
//! Documents are read into a generic value first so an unknown or missing
//! `kind` is reported as such instead of as a generic decode error.

use hubop_api::Resource;
use hubop_api::v1alpha1::KNOWN_KINDS;
use hubop_shared::{ErrorCode, ErrorEnvelope};
use serde_json::Value;
use std::path::Path;

/// Serialization of a resource document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    /// JSON (`.json`).
    Json,
    /// YAML (`.yaml`, `.yml`).
    Yaml,
}

impl DocumentFormat {
    /// Pick the format from a file extension.
    pub fn from_path(path: &Path) -> Result<Self, ErrorEnvelope> {
        let ext = path
            .extension()
            .and_then(|value| value.to_str())
            .map(str::to_ascii_lowercase);
        match ext.as_deref() {
            Some("json") => Ok(Self::Json),
            Some("yaml" | "yml") => Ok(Self::Yaml),
            other => Err(ErrorEnvelope::rejected(
                ErrorCode::new("config", "unknown_format"),
                "unsupported document format; use .json, .yaml, or .yml",
            )
            .with_metadata("extension", other.unwrap_or_default().to_owned())
            .with_metadata("path", path.to_string_lossy().to_string())),
        }
    }
}

/// Parse a resource document from text.
pub fn parse_resource(input: &str, format: DocumentFormat) -> Result<Resource, ErrorEnvelope> {
    let value = parse_value(input, format)?;
    check_kind(&value)?;
    serde_json::from_value(value).map_err(|error| {
        ErrorEnvelope::rejected(
            ErrorCode::new("config", "invalid_document"),
            format!("invalid resource document: {error}"),
        )
    })
}

/// Read and parse a resource document, picking the format from the extension.
pub fn load_resource_from_path(path: &Path) -> Result<Resource, ErrorEnvelope> {
    let format = DocumentFormat::from_path(path)?;
    let input = std::fs::read_to_string(path).map_err(|error| {
        ErrorEnvelope::from(error).with_metadata("path", path.to_string_lossy().to_string())
    })?;
    let resource = parse_resource(&input, format)
        .map_err(|error| error.with_metadata("path", path.to_string_lossy().to_string()))?;
    tracing::debug!(
        path = %path.display(),
        kind = resource.kind(),
        name = resource.name(),
        "loaded resource document"
    );
    Ok(resource)
}

/// Serialize a resource as pretty JSON (with trailing newline).
pub fn to_pretty_json(resource: &Resource) -> Result<String, ErrorEnvelope> {
    let mut output = serde_json::to_string_pretty(resource).map_err(|error| {
        ErrorEnvelope::failed(
            ErrorCode::INTERNAL,
            format!("failed to serialize resource: {error}"),
        )
    })?;
    output.push('\n');
    Ok(output)
}

fn parse_value(input: &str, format: DocumentFormat) -> Result<Value, ErrorEnvelope> {
    match format {
        DocumentFormat::Json => serde_json::from_str(input).map_err(|error| {
            ErrorEnvelope::rejected(
                ErrorCode::new("config", "invalid_json"),
                format!("invalid resource JSON: {error}"),
            )
        }),
        DocumentFormat::Yaml => serde_yaml_ng::from_str(input).map_err(|error| {
            ErrorEnvelope::rejected(
                ErrorCode::new("config", "invalid_yaml"),
                format!("invalid resource YAML: {error}"),
            )
        }),
    }
}

fn check_kind(value: &Value) -> Result<(), ErrorEnvelope> {
    let kind = value.get("kind").and_then(Value::as_str).unwrap_or_default();
    if KNOWN_KINDS.contains(&kind) {
        return Ok(());
    }
    Err(ErrorEnvelope::rejected(
        ErrorCode::new("config", "unknown_kind"),
        format!(
            "unknown resource kind {kind:?}; expected one of: {}",
            KNOWN_KINDS.join(", ")
        ),
    )
    .with_metadata("kind", kind.to_owned()))
}
