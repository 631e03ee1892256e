//! CLI binary entrypoint.

mod commands;
mod error;
mod format;

use clap::{Parser, Subcommand, ValueEnum};
use commands::{ValidateInput, run_concurrency, run_defaults, run_info, run_validate};
use error::{CliError, ExitCode};
use format::{LogFormat, OutputArgs, OutputMode, pretty_json};
use hubop_config::OperatorEnv;
use hubop_shared::{ErrorEnvelope, Operation};
use std::io::{self, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Debug, Parser)]
#[command(
    name = "hubop",
    version,
    about = "Validate and default hub operator resources",
    long_about = None
)]
struct Cli {
    #[command(flatten)]
    output: OutputArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Show build and version details.
    Info,
    /// Validate a resource document as the admission path would.
    Validate {
        /// Resource document (`.json`, `.yaml`, or `.yml`).
        path: PathBuf,
        /// Operation being admitted.
        #[arg(long, value_enum, default_value_t = OperationArg::Create)]
        operation: OperationArg,
        /// Persisted `spec.targetNamespace` before this update.
        #[arg(long)]
        previous_namespace: Option<String>,
        /// Correlation id attached to log events.
        #[arg(long)]
        correlation_id: Option<String>,
        /// Report every violation instead of the first one.
        #[arg(long)]
        all: bool,
    },
    /// Print a resource document with defaults applied.
    Defaults {
        /// Resource document (`.json`, `.yaml`, or `.yml`).
        path: PathBuf,
    },
    /// Resolve the RBAC provisioning concurrency limit from the environment.
    Concurrency,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OperationArg {
    Create,
    Update,
    Delete,
}

impl From<OperationArg> for Operation {
    fn from(value: OperationArg) -> Self {
        match value {
            OperationArg::Create => Self::Create,
            OperationArg::Update => Self::Update,
            OperationArg::Delete => Self::Delete,
        }
    }
}

#[derive(Debug)]
pub(crate) struct CliOutput {
    stdout: String,
    exit_code: ExitCode,
}

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.output.log_format);
    let mode = OutputMode::from_args(&cli.output);

    match run(&cli.command, mode) {
        Ok(output) => match write_output(&output) {
            Ok(()) => std::process::ExitCode::from(output.exit_code.as_u8()),
            Err(error) => exit_with_error(&error),
        },
        Err(error) => exit_with_error(&error),
    }
}

fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let registry = tracing_subscriber::registry().with(filter);
    let result = match format {
        LogFormat::Text => registry
            .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
            .try_init(),
        LogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(io::stderr),
            )
            .try_init(),
    };
    if let Err(error) = result {
        let _ = writeln!(io::stderr(), "warning: logging disabled: {error}");
    }
}

fn exit_with_error(error: &CliError) -> std::process::ExitCode {
    let _ = writeln!(io::stderr(), "error: {error}");
    std::process::ExitCode::from(error.exit_code().as_u8())
}

fn run(command: &Commands, mode: OutputMode) -> Result<CliOutput, CliError> {
    match command {
        Commands::Info => run_info(mode),
        Commands::Validate {
            path,
            operation,
            previous_namespace,
            correlation_id,
            all,
        } => run_validate(
            mode,
            &ValidateInput {
                path,
                operation: (*operation).into(),
                previous_namespace: previous_namespace.as_deref(),
                correlation_id: correlation_id.as_deref(),
                all: *all,
            },
        ),
        Commands::Defaults { path } => run_defaults(mode, path),
        Commands::Concurrency => run_concurrency(mode, &OperatorEnv::from_std_env()),
    }
}

fn write_output(output: &CliOutput) -> Result<(), CliError> {
    let mut stdout = io::stdout();
    stdout.write_all(output.stdout.as_bytes())?;
    stdout.flush()?;
    Ok(())
}

/// Render a library error and pick the matching exit code.
pub(crate) fn format_error_output(
    mode: OutputMode,
    error: &ErrorEnvelope,
) -> Result<CliOutput, CliError> {
    tracing::debug!(code = %error.code, "command failed");
    let stdout = if mode.is_json() {
        pretty_json(&serde_json::json!({
            "status": "error",
            "error": error,
        }))?
    } else {
        format_error_text(error)
    };

    Ok(CliOutput {
        stdout,
        exit_code: ExitCode::for_envelope(error),
    })
}

fn format_error_text(error: &ErrorEnvelope) -> String {
    let mut out = String::new();
    out.push_str("status: error\n");
    out.push_str("code: ");
    out.push_str(&error.code.to_string());
    out.push('\n');
    out.push_str("message: ");
    out.push_str(&error.message);
    out.push('\n');
    out.push_str("kind: ");
    out.push_str(&error.kind.to_string());
    out.push('\n');

    if !error.metadata.is_empty() {
        out.push_str("meta:\n");
        for (key, value) in &error.metadata {
            out.push_str("  ");
            out.push_str(key);
            out.push_str(": ");
            out.push_str(value);
            out.push('\n');
        }
    }

    out
}
