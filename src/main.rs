//! solpkg - Solus packaging helper
//!
//! Maintains the local solbuild repository (copy built .eopkg archives in,
//! clean stale ones out, reindex with eopkg) and scaffolds new package
//! source repositories.

use clap::Parser;

mod cli;
mod commands;
mod error;
mod git;
mod privilege;
mod repo;
mod runner;
mod scaffold;

use cli::{Cli, Commands};
use privilege::Escalation;
use repo::LocalRepo;
use runner::SystemRunner;

fn main() {
    let cli = Cli::parse();

    // Commands that mutate the local repo need root. When the guard
    // escalates, the whole invocation re-ran in an elevated child and we
    // just mirror its exit status.
    let needs_root = matches!(cli.command, Commands::Clean(_) | Commands::Copy(_));

    if needs_root {
        match privilege::escalate_if_needed() {
            Ok(Escalation::AlreadyPrivileged) => {}
            Ok(Escalation::Escalated(code)) => std::process::exit(code),
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
    }

    let result = match cli.command {
        Commands::Clean(args) => {
            commands::clean::run(&LocalRepo::system(), &SystemRunner, &args)
        }
        Commands::Copy(_) => match std::env::current_dir() {
            Ok(cwd) => commands::copy::run(&LocalRepo::system(), &SystemRunner, &cwd),
            Err(e) => {
                eprintln!("Error: failed to get current directory: {}", e);
                std::process::exit(1);
            }
        },
        Commands::Init(args) => commands::init::run(args),
        Commands::Clone(args) => commands::clone::run(args),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
