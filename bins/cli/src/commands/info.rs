//! Info command handler.

use crate::CliOutput;
use crate::error::{CliError, ExitCode};
use crate::format::{OutputMode, pretty_json};
use hubop_api::api_crate_version;
use hubop_config::config_crate_version;
use hubop_shared::shared_crate_version;

/// Run the info command.
pub fn run_info(mode: OutputMode) -> Result<CliOutput, CliError> {
    let cli_version = env!("CARGO_PKG_VERSION");
    let stdout = if mode.is_json() {
        pretty_json(&serde_json::json!({
            "status": "ok",
            "build": {
                "name": env!("CARGO_PKG_NAME"),
                "version": cli_version,
                "apiVersion": api_crate_version(),
                "configVersion": config_crate_version(),
                "sharedVersion": shared_crate_version(),
            }
        }))?
    } else {
        format!(
            "status: ok\nname: {}\nversion: {cli_version}\napi: {}\nconfig: {}\nshared: {}\n",
            env!("CARGO_PKG_NAME"),
            api_crate_version(),
            config_crate_version(),
            shared_crate_version(),
        )
    };

    Ok(CliOutput {
        stdout,
        exit_code: ExitCode::Ok,
    })
}
