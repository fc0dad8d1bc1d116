use anyhow::Result;
use clap::{CommandFactory, Parser};

use diskman::cli::{Cli, Command};
use diskman::commands;
use diskman::config::Config;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    init_logging(cli.verbose, cli.quiet);

    // Load configuration
    let config = Config::load(cli.config.as_deref())?;

    tracing::debug!(?config, "Loaded configuration");

    // Dispatch to subcommand
    match cli.command {
        Command::Browse(args) => {
            tracing::info!(?args, "Starting browser");
            commands::browse::run(args, &config, cli.quiet)?;
        }
        Command::List(args) => {
            tracing::info!(?args, "Starting list");
            commands::list::run(args, &config, cli.quiet)?;
        }
        Command::Size(args) => {
            tracing::info!(?args, "Starting size");
            commands::size::run(args)?;
        }
        Command::Delete(args) => {
            tracing::info!(?args, "Starting delete");
            commands::delete::run(args)?;
        }
        Command::Reveal(args) => {
            tracing::info!(?args, "Starting reveal");
            commands::reveal::run(args)?;
        }
        Command::Completions(args) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            clap_complete::generate(args.shell, &mut cmd, name, &mut std::io::stdout());
        }
    }

    Ok(())
}

fn init_logging(verbosity: u8, quiet: bool) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let level = if quiet {
        "warn"
    } else {
        match verbosity {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("diskman={}", level)));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}
