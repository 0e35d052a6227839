use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use twet::app::AppContext;
use twet::cli::{commands, Cli, Commands};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .init();

    let ctx = AppContext::new(cli.config.as_deref(), cli.verbose)?;

    match cli.command {
        Commands::Records { files } => {
            commands::list_records(&ctx, &files)?;
        }
        Commands::Thread { hash, files } => {
            commands::show_thread(&ctx, &hash, &files)?;
        }
        Commands::Tags { files } => {
            commands::list_tags(&ctx, &files)?;
        }
    }

    Ok(())
}
