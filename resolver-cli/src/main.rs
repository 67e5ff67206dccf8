mod cli;
mod commands;

use std::{process, time::Duration};

use clap::Parser;
use piped_resolver::{ResolverConfig, ResolverError};
use tracing::error;
use tracing_subscriber::filter::EnvFilter;

use crate::{
    cli::{Args, Commands},
    commands::CommandExecutor,
};

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        error!("Application error: {e:#}");
        eprintln!("Error: {e:#}");

        // Exit code 2 means "no mirror had a usable stream" so callers can
        // tell a busy service apart from misuse.
        let code = match e.downcast_ref::<ResolverError>() {
            Some(ResolverError::NoStreamFound) => 2,
            _ => 1,
        };
        process::exit(code);
    }
}

async fn run() -> anyhow::Result<()> {
    let args = Args::parse();

    init_logging(args.verbose, args.quiet);

    let mut builder =
        ResolverConfig::builder().with_request_timeout(Duration::from_secs(args.timeout));
    if let Some(instances_url) = &args.instances_url {
        builder = builder.with_instances_url(instances_url);
    }
    let executor = CommandExecutor::new(builder.build());

    match args.command {
        Commands::Resolve { video_id, output } => executor.resolve(&video_id, output).await,
        Commands::Mirrors { output } => executor.mirrors(output).await,
    }
}

fn init_logging(verbose: bool, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
