//! CLI command definitions and dispatch for the `confab` binary.
//!
//! Uses clap derive macros for argument parsing. Operational commands
//! run against the same data directory the server uses.

pub mod session;
pub mod status;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// Run and inspect the Confab chat backend.
#[derive(Parser)]
#[command(name = "confab", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output machine-readable JSON instead of styled text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress all output except errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed output (-v for verbose, -vv for debug/trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the HTTP API server.
    Serve {
        /// Port to listen on.
        #[arg(short, long, default_value = "3000")]
        port: u16,

        /// Host address to bind.
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Export spans via OpenTelemetry (stdout exporter).
        #[arg(long)]
        otel: bool,
    },

    /// Show instance status and usage counts.
    Status,

    /// List chat sessions for a user.
    Sessions {
        /// External identity of the user (e.g. the proxy subject).
        external_id: String,
    },

    /// Delete a resource.
    #[command(alias = "rm")]
    Delete {
        #[command(subcommand)]
        resource: DeleteResource,
    },

    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        shell: Shell,
    },
}

#[derive(Subcommand)]
pub enum DeleteResource {
    /// Delete a chat session and its messages.
    Session {
        /// Session id to delete.
        id: String,

        /// Skip the confirmation prompt.
        #[arg(long)]
        force: bool,
    },
}
