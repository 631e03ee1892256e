//! Concurrency command handler.

use crate::CliOutput;
use crate::error::{CliError, ExitCode};
use crate::format::{OutputMode, pretty_json};
use hubop_config::{
    ConcurrencyBounds, ConcurrencyLimit, ENV_RBAC_PROVISIONING_MAX_CONCURRENT_CALLS, LimitSource,
    OperatorEnv,
};

/// Resolve and print the RBAC provisioning concurrency limit.
pub fn run_concurrency(mode: OutputMode, env: &OperatorEnv) -> Result<CliOutput, CliError> {
    let limit = ConcurrencyLimit::rbac_from_env(env);
    let bounds = ConcurrencyBounds::RBAC_PROVISIONING;
    let reason = match limit.source() {
        LimitSource::Configured => None,
        LimitSource::Defaulted(reason) => Some(reason.as_str()),
    };

    let stdout = if mode.is_json() {
        pretty_json(&serde_json::json!({
            "status": "ok",
            "envVar": ENV_RBAC_PROVISIONING_MAX_CONCURRENT_CALLS,
            "raw": env.rbac_max_concurrent_calls.as_deref(),
            "limit": limit.value(),
            "defaulted": limit.is_defaulted(),
            "reason": reason,
            "bounds": {
                "min": bounds.min(),
                "max": bounds.max(),
                "default": bounds.default_value(),
            },
        }))?
    } else {
        format!(
            "status: ok\nenv: {ENV_RBAC_PROVISIONING_MAX_CONCURRENT_CALLS}\nlimit: {limit}\n"
        )
    };

    Ok(CliOutput {
        stdout,
        exit_code: ExitCode::Ok,
    })
}
