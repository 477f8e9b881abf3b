use anyhow::{bail, Result};
use std::path::PathBuf;

/// What the binary was asked to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliCommand {
    Serve(CliArgs),
    Help,
    Version,
}

/// Parsed CLI arguments for the server.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliArgs {
    /// Path to a YAML configuration file
    pub config_path: Option<PathBuf>,
}

impl CliArgs {
    /// Parse arguments, excluding the program name.
    pub fn parse<I>(args: I) -> Result<CliCommand>
    where
        I: IntoIterator<Item = String>,
    {
        let mut cli = CliArgs::default();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--help" | "-h" => return Ok(CliCommand::Help),
                "--version" | "-V" => return Ok(CliCommand::Version),
                "--config" | "-c" => match args.next() {
                    Some(path) => cli.config_path = Some(PathBuf::from(path)),
                    None => bail!("--config requires a path"),
                },
                other => bail!("Unknown argument: {}", other),
            }
        }

        Ok(CliCommand::Serve(cli))
    }
}

pub const HELP: &str = r#"Paper Reader MCP Server

USAGE:
    paper-reader [OPTIONS]

Speaks newline-delimited JSON-RPC on stdin/stdout. Logs go to stderr.

OPTIONS:
    -c, --config <PATH>    YAML configuration file
    -h, --help             Print this help
    -V, --version          Print version

ENVIRONMENT:
    RUST_LOG               Log filter, overrides log_level from the config
"#;
