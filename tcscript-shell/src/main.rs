use anyhow::Result;
use clap::Parser;
use std::process::ExitCode;

use tcscript_shell::{banner, run, Args};

fn main() -> Result<ExitCode> {
    let args = Args::parse();

    // Initialize logging
    let default_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .init();

    println!("{}", banner("Commands Generator Script"));
    let summary = run(&args)?;
    println!("{summary}");

    Ok(summary.exit_code())
}
