//! Defaults command handler.

use crate::error::{CliError, ExitCode};
use crate::format::{OutputMode, pretty_json};
use crate::{CliOutput, format_error_output};
use hubop_config::{load_resource_from_path, to_pretty_json};
use std::path::Path;

/// Load a document, apply defaults, and print the result as JSON.
pub fn run_defaults(mode: OutputMode, path: &Path) -> Result<CliOutput, CliError> {
    let mut resource = match load_resource_from_path(path) {
        Ok(resource) => resource,
        Err(error) => return format_error_output(mode, &error),
    };
    resource.set_defaults();

    let stdout = if mode.is_json() {
        pretty_json(&serde_json::json!({
            "status": "ok",
            "resource": resource,
        }))?
    } else {
        match to_pretty_json(&resource) {
            Ok(output) => output,
            Err(error) => return format_error_output(mode, &error),
        }
    };

    Ok(CliOutput {
        stdout,
        exit_code: ExitCode::Ok,
    })
}
