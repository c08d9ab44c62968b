use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::{info_span, Instrument};

use climate_api::{routes, state};
use climate_api_configuration::environment::ProcessEnvironment;
use climate_api_configuration::{self as configuration, ParsedConfiguration};

/// Read-only HTTP API over the Hawaii climate store.
#[derive(Parser)]
#[command(version, about)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Serve the API.
    Serve {
        /// Directory holding `configuration.json`. Without it, the default store is used.
        #[arg(long, value_name = "DIRECTORY", env = "CLIMATE_API_CONFIGURATION")]
        configuration: Option<PathBuf>,
        #[arg(long, env = "HOST", default_value = "127.0.0.1")]
        host: IpAddr,
        #[arg(long, env = "PORT", default_value_t = 5000)]
        port: u16,
    },
    /// Write the initial configuration and its JSON schema into a directory.
    Initialize {
        #[arg(long, value_name = "DIRECTORY", env = "CLIMATE_API_CONFIGURATION")]
        configuration: PathBuf,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::init();

    match run(Args::parse().command).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("{error:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Serve {
            configuration,
            host,
            port,
        } => serve(configuration, SocketAddr::new(host, port)).await,
        Command::Initialize { configuration } => initialize(configuration).await,
    }
}

async fn serve(configuration_dir: Option<PathBuf>, address: SocketAddr) -> anyhow::Result<()> {
    let parsed_configuration = match configuration_dir {
        Some(dir) => configuration::parse_configuration(&dir)
            .instrument(info_span!("parse configuration"))
            .await
            .with_context(|| format!("unable to read the configuration in {}", dir.display()))?,
        None => ParsedConfiguration::initial(),
    };
    let runtime_configuration =
        configuration::make_runtime_configuration(parsed_configuration, ProcessEnvironment)?;

    let state = state::create_state(runtime_configuration, prometheus::Registry::new())
        .instrument(info_span!("Initialise state"))
        .await?;
    let router = routes::create_router(state);

    tracing::info!("Starting server on {address}");
    axum::Server::try_bind(&address)
        .with_context(|| format!("unable to listen on {address}"))?
        .serve(router.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    tracing::info!("Server stopped");

    Ok(())
}

async fn initialize(configuration_dir: PathBuf) -> anyhow::Result<()> {
    configuration::write_parsed_configuration(ParsedConfiguration::initial(), &configuration_dir)
        .await
        .with_context(|| {
            format!(
                "unable to write the configuration to {}",
                configuration_dir.display()
            )
        })?;
    tracing::info!("Wrote the initial configuration to {}", configuration_dir.display());
    Ok(())
}

/// Resolves on Ctrl-C, or SIGTERM on Unix.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!("unable to listen for Ctrl-C: {err}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!("unable to listen for SIGTERM: {err}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
    tracing::info!("Shutting down");
}
