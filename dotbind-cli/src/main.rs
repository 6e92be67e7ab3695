mod app;
mod commands;
mod output;

use clap::Parser;

use crate::app::{Cli, Command};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Show dotbind info+ on stderr unless --json; --verbose enables debug; RUST_LOG overrides
    if !cli.global.json {
        let level = if cli.global.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        };
        env_logger::Builder::new()
            .filter_module("dotbind", level)
            .parse_default_env()
            .target(env_logger::Target::Stderr)
            .format_timestamp(None)
            .format_module_path(false)
            .format_target(false)
            .init();
    }

    match &cli.command {
        Command::Compare {
            reference,
            definition,
            ignore_version,
            strict,
        } => commands::compare::run(
            reference,
            definition,
            &commands::compare::CompareOptions {
                ignore_version: *ignore_version,
                strict: *strict,
            },
            &cli.global,
        ),
        Command::Port { identity } => commands::port::run(identity, &cli.global),
        Command::Retarget { identity } => commands::retarget::run(identity, &cli.global),
        Command::Classify { identity } => commands::classify::run(identity, &cli.global),
        Command::Policy { path } => commands::policy::run(path, &cli.global),
    }
}
