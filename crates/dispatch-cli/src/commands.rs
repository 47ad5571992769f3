use anyhow::Context;

use dispatch_server::{ApiServer, ServerConfig};
use dispatch_store::{DataDir, EventFilter, RecordStore};

use crate::cli::{Cli, Command, ServeArgs};

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::Serve(args) => cmd_serve(cli.data_dir, args),
        Command::Inspect => cmd_inspect(cli.data_dir),
    }
}

fn cmd_serve(data_dir: std::path::PathBuf, args: ServeArgs) -> anyhow::Result<()> {
    let config = match &args.config {
        Some(path) => ServerConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => ServerConfig {
            bind_addr: args.bind,
            data_dir,
        },
    };

    tracing::info!(bind = %config.bind_addr, data_dir = %config.data_dir.display(), "starting dispatch server");
    let runtime = tokio::runtime::Runtime::new().context("starting tokio runtime")?;
    runtime
        .block_on(ApiServer::new(config).serve())
        .context("running server")?;
    Ok(())
}

fn cmd_inspect(data_dir: std::path::PathBuf) -> anyhow::Result<()> {
    let store = RecordStore::new(DataDir::new(&data_dir));

    let all = store.events(&EventFilter::all());
    let upcoming = store.events(&EventFilter::upcoming());

    println!("data directory: {}", data_dir.display());
    println!("  events:  {} ({} upcoming)", all.len(), upcoming.len());
    println!("  venues:  {}", store.venues(true).len());
    println!("  hosts:   {}", store.hosts().len());
    println!("  tags:    {}", store.tags().len());
    Ok(())
}
