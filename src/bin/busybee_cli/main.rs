//! busybee-cli: drives the panel controllers headlessly against a Busy Bees site.
#![deny(clippy::all, clippy::pedantic)]

mod args;
mod client;
mod handlers;
mod io;
mod print;

use busybee::{config, infra::telemetry};
use clap::Parser;

use args::{Cli, Commands};
use client::{CliError, build_ctx_from_cli, navigation_from_settings};
use handlers::{comments, navigation, posts, settings, time, users};

#[tokio::main]
async fn main() -> Result<(), CliError> {
    let cli = Cli::parse();
    let settings = config::load(&cli.settings)?;
    telemetry::init(&settings.logging)?;

    if !cli.command.needs_backend() {
        let memory = navigation_from_settings(&settings);
        return match cli.command {
            Commands::Nav(cmd) => navigation::handle(&memory, cmd.action),
            Commands::TimeAgo { then, now } => {
                time::handle(then, now);
                Ok(())
            }
            _ => Ok(()),
        };
    }

    let ctx = build_ctx_from_cli(&cli, &settings)?;

    match cli.command {
        Commands::Users(cmd) => users::handle(&ctx, cmd.action).await?,
        Commands::Settings(cmd) => settings::handle(&ctx, cmd.action).await?,
        Commands::Posts(cmd) => posts::handle(&ctx, cmd.action).await?,
        Commands::Comments(cmd) => comments::handle(&ctx, cmd.action).await?,
        Commands::Nav(_) | Commands::TimeAgo { .. } => {}
    }

    Ok(())
}

#[cfg(test)]
mod tests;
