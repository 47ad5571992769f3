use std::net::SocketAddr;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "dispatch",
    about = "Dispatch — events-discovery backend over flat-file collections",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Root directory of the flat-file collections.
    #[arg(long, global = true, default_value = dispatch_store::DEFAULT_DATA_DIR)]
    pub data_dir: PathBuf,
}

#[derive(Subcommand)]
pub enum Command {
    /// Start the HTTP API server
    Serve(ServeArgs),
    /// Show row counts for the collections in the data directory
    Inspect,
}

#[derive(Args)]
pub struct ServeArgs {
    /// Address to bind.
    #[arg(long, default_value = "127.0.0.1:8080")]
    pub bind: SocketAddr,

    /// TOML config file; when given, its values override the flags.
    #[arg(long)]
    pub config: Option<PathBuf>,
}
