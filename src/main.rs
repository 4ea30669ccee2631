//! glab-git-id - set git identity from your GitLab account

mod cli;

use anstream::eprintln;
use clap::Parser;
use cli::Cli;
use cli::style::{Stylize, cross};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn init_tracing(verbose: bool) {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("glab_git_id=debug")
        } else {
            EnvFilter::new("glab_git_id=warn")
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let verbose = cli.wants_verbose();
    init_tracing(verbose);

    match cli::run(&cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", cross(), format!("Error: {e}").failure());
            if verbose {
                eprintln!("{}", format!("{e:#?}").muted());
            }
            ExitCode::FAILURE
        }
    }
}
