// src/cli/mod.rs
use clap::Parser;
use std::process::ExitCode;

pub mod commands;
pub mod handlers;

pub use commands::{CliCommand, PolicyArgs};

use crate::core::Config;

#[derive(Parser, Debug)]
#[command(name = "securepass", author, version, about = "Generate cryptographically secure passwords", long_about = None)]
pub struct Args {
    /// Output machine-readable JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Command to execute (defaults to `generate`)
    #[command(subcommand)]
    pub command: Option<CliCommand>,
}

pub async fn run(args: Args, config: &Config) -> anyhow::Result<ExitCode> {
    let command = args.command.unwrap_or(CliCommand::Generate {
        policy: PolicyArgs::default(),
        count: 1,
        no_hashes: false,
    });

    match command {
        CliCommand::Generate { policy, count, no_hashes } => {
            handlers::handle_generate(config, &policy, count, !no_hashes && config.generate_hashes, args.json).await
        }
        CliCommand::Strength { policy } => handlers::handle_strength(config, &policy, args.json),
        CliCommand::Presets => handlers::handle_presets(args.json),
        CliCommand::Hash { password } => handlers::handle_hash(password, args.json).await,
        CliCommand::Verify { record, password } => handlers::handle_verify(&record, password, args.json).await,
    }
}
