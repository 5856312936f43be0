// crates/sitelang-cli/src/main.rs
// ============================================================================
// Module: Sitelang CLI Entry Point
// Description: Command dispatcher for serving and inspecting the locale site.
// Purpose: Run the server and answer offline negotiation questions.
// Dependencies: clap, sitelang-cli, sitelang-config, sitelang-server, tokio
// ============================================================================

//! ## Overview
//! The sitelang CLI serves the site, validates configuration, and runs the
//! negotiator and translation lookup offline for troubleshooting.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::io::Write;
use std::path::Path;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::ArgAction;
use clap::Args;
use clap::CommandFactory;
use clap::Parser;
use clap::Subcommand;
use sitelang_cli::report::resolve_report;
use sitelang_cli::report::translate_message;
use sitelang_config::SiteConfig;
use sitelang_server::SiteServer;
use thiserror::Error;

// ============================================================================
// SECTION: CLI Types
// ============================================================================

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(name = "sitelang", disable_help_subcommand = true, disable_version_flag = true)]
struct Cli {
    /// Print version information and exit.
    #[arg(long = "version", action = ArgAction::SetTrue, global = true)]
    show_version: bool,
    /// Selected subcommand to execute.
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Supported CLI subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Start the site HTTP server.
    Serve(ServeCommand),
    /// Configuration utilities.
    Config {
        /// Selected config subcommand.
        #[command(subcommand)]
        command: ConfigCommand,
    },
    /// Negotiate a locale offline and print the result as JSON.
    Resolve(ResolveCommand),
    /// Translate one message for a locale.
    Translate(TranslateCommand),
}

/// Configuration for the `serve` command.
#[derive(Args, Debug)]
struct ServeCommand {
    /// Optional config file path (defaults to sitelang.toml or env override).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

/// Config subcommands.
#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Validate a config file.
    Validate(ConfigValidateCommand),
}

/// Arguments for `config validate`.
#[derive(Args, Debug)]
struct ConfigValidateCommand {
    /// Optional config file path (defaults to sitelang.toml or env override).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

/// Arguments for `resolve`.
#[derive(Args, Debug)]
struct ResolveCommand {
    /// Optional config file path (built-in defaults when omitted).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
    /// Raw `Accept-Language` header value.
    #[arg(long, value_name = "VALUE")]
    accept_language: Option<String>,
    /// Override query parameter value.
    #[arg(long = "override", value_name = "TAG")]
    override_value: Option<String>,
}

/// Arguments for `translate`.
#[derive(Args, Debug)]
struct TranslateCommand {
    /// Optional config file path (built-in defaults when omitted).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
    /// Locale to translate for.
    #[arg(long, value_name = "TAG")]
    locale: String,
    /// Canonical source message.
    #[arg(value_name = "MESSAGE")]
    message: String,
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// CLI error wrapper for user-facing error messages.
#[derive(Debug, Error)]
#[error("{message}")]
struct CliError {
    /// Human-readable error message.
    message: String,
}

impl CliError {
    /// Constructs a new [`CliError`] from a message.
    const fn new(message: String) -> Self {
        Self {
            message,
        }
    }
}

/// CLI result alias for fallible operations.
type CliResult<T> = Result<T, CliError>;

// ============================================================================
// SECTION: Entry Point
// ============================================================================

/// CLI entry point returning an exit code.
#[tokio::main(flavor = "multi_thread")]
async fn main() -> ExitCode {
    match run().await {
        Ok(code) => code,
        Err(err) => emit_error(&err.to_string()),
    }
}

/// Executes the CLI command dispatcher.
async fn run() -> CliResult<ExitCode> {
    let cli = Cli::parse();

    if cli.show_version {
        let version = env!("CARGO_PKG_VERSION");
        write_stdout_line(&format!("sitelang {version}"))
            .map_err(|err| CliError::new(output_error("stdout", &err)))?;
        return Ok(ExitCode::SUCCESS);
    }

    let Some(command) = cli.command else {
        show_help()?;
        return Ok(ExitCode::SUCCESS);
    };

    match command {
        Commands::Serve(command) => command_serve(command).await,
        Commands::Config {
            command,
        } => command_config(command),
        Commands::Resolve(command) => command_resolve(&command),
        Commands::Translate(command) => command_translate(&command),
    }
}

/// Prints top-level help.
fn show_help() -> CliResult<()> {
    let help = Cli::command().render_help().to_string();
    write_stdout_line(help.trim_end()).map_err(|err| CliError::new(output_error("stdout", &err)))
}

// ============================================================================
// SECTION: Serve Command
// ============================================================================

/// Executes the `serve` command.
async fn command_serve(command: ServeCommand) -> CliResult<ExitCode> {
    let config = SiteConfig::load(command.config.as_deref())
        .map_err(|err| CliError::new(format!("failed to load config: {err}")))?;
    let bind = config.server.bind.clone();
    let server = SiteServer::from_config(config)
        .map_err(|err| CliError::new(format!("failed to build server: {err}")))?;
    write_stderr_line(&format!("sitelang listening on http://{bind}"))
        .map_err(|err| CliError::new(output_error("stderr", &err)))?;
    server.serve().await.map_err(|err| CliError::new(format!("server failed: {err}")))?;
    Ok(ExitCode::SUCCESS)
}

// ============================================================================
// SECTION: Config Commands
// ============================================================================

/// Dispatches config subcommands.
fn command_config(command: ConfigCommand) -> CliResult<ExitCode> {
    match command {
        ConfigCommand::Validate(command) => command_config_validate(&command),
    }
}

/// Executes the config validation command.
fn command_config_validate(command: &ConfigValidateCommand) -> CliResult<ExitCode> {
    let config = SiteConfig::load(command.config.as_deref())
        .map_err(|err| CliError::new(format!("failed to load config: {err}")))?;
    config
        .load_translations()
        .map_err(|err| CliError::new(format!("failed to load translations: {err}")))?;
    write_stdout_line("Config valid.").map_err(|err| CliError::new(output_error("stdout", &err)))?;
    Ok(ExitCode::SUCCESS)
}

// ============================================================================
// SECTION: Offline Commands
// ============================================================================

/// Executes the `resolve` command.
fn command_resolve(command: &ResolveCommand) -> CliResult<ExitCode> {
    let config = load_optional_config(command.config.as_deref())?;
    let report = resolve_report(
        &config,
        command.accept_language.as_deref(),
        command.override_value.as_deref(),
    )
    .map_err(|err| CliError::new(format!("failed to resolve: {err}")))?;
    let json = serde_json::to_string(&report)
        .map_err(|err| CliError::new(format!("failed to serialize report: {err}")))?;
    write_stdout_line(&json).map_err(|err| CliError::new(output_error("stdout", &err)))?;
    Ok(ExitCode::SUCCESS)
}

/// Executes the `translate` command.
fn command_translate(command: &TranslateCommand) -> CliResult<ExitCode> {
    let config = load_optional_config(command.config.as_deref())?;
    let text = translate_message(&config, &command.locale, &command.message)
        .map_err(|err| CliError::new(format!("failed to translate: {err}")))?;
    write_stdout_line(&text).map_err(|err| CliError::new(output_error("stdout", &err)))?;
    Ok(ExitCode::SUCCESS)
}

/// Loads the config when a path is given, otherwise uses built-in defaults.
fn load_optional_config(path: Option<&Path>) -> CliResult<SiteConfig> {
    match path {
        Some(path) => SiteConfig::load(Some(path))
            .map_err(|err| CliError::new(format!("failed to load config: {err}"))),
        None => Ok(SiteConfig::default()),
    }
}

// ============================================================================
// SECTION: Output Helpers
// ============================================================================

/// Writes a single line to stdout.
fn write_stdout_line(message: &str) -> std::io::Result<()> {
    let mut stdout = std::io::stdout();
    writeln!(&mut stdout, "{message}")
}

/// Writes a single line to stderr.
fn write_stderr_line(message: &str) -> std::io::Result<()> {
    let mut stderr = std::io::stderr();
    writeln!(&mut stderr, "{message}")
}

/// Formats an output error message.
fn output_error(stream: &str, error: &std::io::Error) -> String {
    format!("failed to write to {stream}: {error}")
}

/// Emits an error message to stderr and returns a failure exit code.
fn emit_error(message: &str) -> ExitCode {
    let _ = write_stderr_line(message);
    ExitCode::FAILURE
}
