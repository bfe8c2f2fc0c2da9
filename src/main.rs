//! typecast command line entry point

mod commands;

use std::io;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use typecast::cli::{Cli, Commands, ConfigCommands};

/// Environment variable holding the log filter.
const LOG_ENV: &str = "TYPECAST_LOG";

fn init_logging() {
    let default_level = "warn";
    let _ = tracing_subscriber::fmt()
        // Fall back to `default_level` if the variable is unset or invalid
        .with_env_filter(
            EnvFilter::try_from_env(LOG_ENV)
                .or_else(|_| EnvFilter::try_new(default_level))
                .unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(io::stderr)
        .try_init();
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play {
            page,
            plain,
            exit_on_finish,
            speed,
            timing,
        } => commands::play::handle_play(&page, plain, exit_on_finish, speed, &timing),
        Commands::Render { page, at, timing } => {
            commands::render::handle_render(&page, at, &timing)
        }
        Commands::Timeline { page, timing } => commands::render::handle_timeline(&page, &timing),
        Commands::Config(cmd) => match cmd {
            ConfigCommands::Show => commands::config::handle_show(),
            ConfigCommands::Path => commands::config::handle_path(),
            ConfigCommands::Init => commands::config::handle_init(),
        },
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            clap_complete::generate(shell, &mut cmd, "typecast", &mut io::stdout());
            Ok(())
        }
    }
}
