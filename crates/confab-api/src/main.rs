//! Confab CLI and REST API entry point.
//!
//! Binary name: `confab`
//!
//! Parses CLI arguments, initializes database and services, then dispatches
//! to the appropriate command handler or starts the REST API server.

mod cli;
mod http;
mod state;

use clap::Parser;
use clap_complete::generate;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands, DeleteResource};
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Shell completions don't need app state
    if let Commands::Completions { shell } = &cli.command {
        let mut cmd = <Cli as clap::CommandFactory>::command();
        generate(*shell, &mut cmd, "confab", &mut std::io::stdout());
        return Ok(());
    }

    // Set up tracing based on verbosity. `serve --otel` swaps in the
    // OpenTelemetry pipeline, which takes its filter from RUST_LOG.
    if matches!(cli.command, Commands::Serve { otel: true, .. }) {
        confab_observe::tracing_setup::init_tracing(true)
            .map_err(|e| anyhow::anyhow!("failed to initialize tracing: {e}"))?;
    } else {
        let filter = match cli.verbose {
            0 if cli.quiet => "error",
            0 => "warn",
            1 => "info,confab=debug",
            _ => "trace",
        };

        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::new(filter))
            .with_target(false)
            .init();
    }

    // Initialize application state (DB, services)
    let state = AppState::init().await?;

    match cli.command {
        Commands::Sessions { external_id } => {
            cli::session::list_sessions(&state, &external_id, cli.json).await?;
        }

        Commands::Delete { resource } => match resource {
            DeleteResource::Session { id, force } => {
                cli::session::delete_session(&state, &id, force, cli.json).await?;
            }
        },

        Commands::Status => {
            cli::status::status(&state, cli.json).await?;
        }

        Commands::Serve { port, host, otel } => {
            if std::env::var(confab_infra::config::API_KEY_ENV_VAR).is_err() {
                println!();
                println!(
                    "  {} {} is not set; chat requests will fail until it is.",
                    console::style("!").yellow().bold(),
                    confab_infra::config::API_KEY_ENV_VAR
                );
            }

            let addr = format!("{host}:{port}");
            let listener = tokio::net::TcpListener::bind(&addr).await?;

            println!(
                "  {} Confab API listening on {}",
                console::style("⚡").bold(),
                console::style(format!("http://{addr}")).cyan()
            );
            println!(
                "  {}",
                console::style("Press Ctrl+C to stop").dim()
            );

            let router = http::router::build_router(state);

            axum::serve(listener, router)
                .with_graceful_shutdown(shutdown_signal())
                .await?;

            if otel {
                confab_observe::tracing_setup::shutdown_tracing();
            }

            println!("\n  Server stopped.");
        }

        Commands::Completions { .. } => unreachable!("handled above"),
    }

    Ok(())
}

/// Wait for Ctrl+C or SIGTERM for graceful shutdown.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
