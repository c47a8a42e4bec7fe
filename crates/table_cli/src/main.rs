//! table_cli
//!
//! Runs the seat and grid solvers on JSON requests from a file or stdin and
//! prints the JSON response. Set `RUST_LOG=debug` to see solver decisions.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "table_cli")]
#[command(about = "Seat placement and token grid tools for the tabletop shell", long_about = None)]
#[command(version = table_core::VERSION)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Pretty-print the response
    #[arg(long, global = true, default_value = "false")]
    pretty: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Nearest screen edge for a touch point
    Edge {
        /// Request JSON file path, or "-" for stdin
        #[arg(long)]
        r#in: PathBuf,
    },

    /// Seat zone and indicator for a touch point
    Zone {
        /// Request JSON file path, or "-" for stdin
        #[arg(long)]
        r#in: PathBuf,
    },

    /// Arrange competing seat requests along one edge
    Arrange {
        /// Request JSON file path, or "-" for stdin
        #[arg(long)]
        r#in: PathBuf,
    },

    /// Replay lobby claims and releases
    Lobby {
        /// Request JSON file path, or "-" for stdin
        #[arg(long)]
        r#in: PathBuf,
    },

    /// Grid offsets for tokens sharing one board location
    Grid {
        /// Request JSON file path, or "-" for stdin
        #[arg(long)]
        r#in: PathBuf,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let (handler, input): (fn(&str) -> table_core::Result<String>, PathBuf) = match cli.command {
        Commands::Edge { r#in } => (table_core::nearest_edge_json, r#in),
        Commands::Zone { r#in } => (table_core::seat_zone_json, r#in),
        Commands::Arrange { r#in } => (table_core::arrange_seats_json, r#in),
        Commands::Lobby { r#in } => (table_core::lobby_json, r#in),
        Commands::Grid { r#in } => (table_core::grid_offsets_json, r#in),
    };

    let request = read_request(&input)?;
    log::debug!("[cli] {} bytes of request JSON from {}", request.len(), input.display());

    let response = handler(&request).context("Request rejected")?;
    println!("{}", render(&response, cli.pretty)?);
    Ok(())
}

fn read_request(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf).context("Failed to read request from stdin")?;
        return Ok(buf);
    }
    std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read request file {}", path.display()))
}

fn render(response: &str, pretty: bool) -> Result<String> {
    if !pretty {
        return Ok(response.to_string());
    }
    let value: serde_json::Value = serde_json::from_str(response)?;
    Ok(serde_json::to_string_pretty(&value)?)
}
