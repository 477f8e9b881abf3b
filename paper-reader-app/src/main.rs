use std::io;
use std::sync::Arc;

use anyhow::Result;
use paper_reader_app::cli::HELP;
use paper_reader_app::{CliArgs, CliCommand, Config, McpServer};
use paper_reader_tools::LopdfExtractor;
use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    let args = match CliArgs::parse(std::env::args().skip(1))? {
        CliCommand::Serve(args) => args,
        CliCommand::Help => {
            println!("{}", HELP);
            return Ok(());
        }
        CliCommand::Version => {
            println!("paper-reader {}", env!("CARGO_PKG_VERSION"));
            return Ok(());
        }
    };

    let config = Config::load_or_default(args.config_path.as_deref())?;
    init_tracing(&config.log_level);

    match &args.config_path {
        Some(path) => info!("Loaded configuration from {}", path.display()),
        None => info!("Using default configuration"),
    }

    let server = McpServer::new(&config, Arc::new(LopdfExtractor::new()))?;

    if let Err(e) = server.run().await {
        error!("Fatal error: {:#}", e);
        return Err(e);
    }

    info!("Server shut down");
    Ok(())
}

fn init_tracing(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // stdout carries protocol frames, so logs must stay on stderr
    fmt()
        .with_writer(io::stderr)
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
