//! Validate command handler.

use crate::error::{CliError, ExitCode};
use crate::format::{OutputMode, pretty_json};
use crate::{CliOutput, format_error_output};
use hubop_api::{FieldError, FieldErrors, Resource, TARGET_NAMESPACE_PATH};
use hubop_config::load_resource_from_path;
use hubop_shared::{AdmissionContext, CorrelationId, ErrorEnvelope, Operation, Validate};
use std::path::Path;

/// Inputs for the validate command.
#[derive(Debug)]
pub struct ValidateInput<'a> {
    pub path: &'a Path,
    pub operation: Operation,
    pub previous_namespace: Option<&'a str>,
    pub correlation_id: Option<&'a str>,
    pub all: bool,
}

/// Validate one resource document as the admission path would.
pub fn run_validate(mode: OutputMode, input: &ValidateInput<'_>) -> Result<CliOutput, CliError> {
    let ctx = admission_context(input)?;
    let resource = match load_resource_from_path(input.path) {
        Ok(resource) => resource,
        Err(error) => return format_error_output(mode, &error),
    };

    let violations = if input.all {
        resource.validate_all(&ctx)
    } else {
        let mut first = FieldErrors::new();
        first.record(resource.validate(&ctx));
        first
    };

    let exit_code = if violations.is_empty() {
        ExitCode::Ok
    } else {
        ExitCode::InvalidInput
    };
    let stdout = if mode.is_json() {
        format_json(&resource, &ctx, &violations)?
    } else {
        format_text(&resource, &violations)
    };

    Ok(CliOutput { stdout, exit_code })
}

fn admission_context(input: &ValidateInput<'_>) -> Result<AdmissionContext, CliError> {
    let mut ctx = match input.correlation_id {
        Some(raw) => {
            let id = CorrelationId::parse(raw)
                .map_err(|error| CliError::InvalidInput(error.message))?;
            AdmissionContext::with_correlation_id(input.operation, id)
        },
        None => AdmissionContext::new(input.operation),
    };
    if let Some(previous) = input.previous_namespace {
        ctx = ctx.with_baseline_field(TARGET_NAMESPACE_PATH, previous);
    }
    Ok(ctx)
}

fn format_text(resource: &Resource, violations: &FieldErrors) -> String {
    if violations.is_empty() {
        return format!(
            "status: ok\nkind: {}\nname: {}\n",
            resource.kind(),
            resource.name()
        );
    }
    let mut out = String::new();
    for violation in violations {
        out.push_str(&violation.to_string());
        out.push('\n');
    }
    out
}

fn format_json(
    resource: &Resource,
    ctx: &AdmissionContext,
    violations: &FieldErrors,
) -> Result<String, CliError> {
    let details = violations
        .iter()
        .cloned()
        .map(violation_json)
        .collect::<Vec<_>>();
    let status = if violations.is_empty() { "ok" } else { "invalid" };
    Ok(pretty_json(&serde_json::json!({
        "status": status,
        "kind": resource.kind(),
        "name": resource.name(),
        "operation": ctx.operation().as_str(),
        "correlationId": ctx.correlation_id().as_str(),
        "violations": details,
    }))?)
}

fn violation_json(violation: FieldError) -> serde_json::Value {
    let field = violation.path().to_owned();
    let envelope = ErrorEnvelope::from(violation);
    serde_json::json!({
        "code": envelope.code.to_string(),
        "field": field,
        "message": envelope.message,
    })
}
