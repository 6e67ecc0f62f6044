//! svgstego command-line entry point.

use anyhow::Result;
use clap::{ColorChoice, Parser};
use svgstego::cli::{self, Cli, Commands};
use svgstego::config::StegoConfig;
use svgstego::{log, logger};

fn main() {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    logger::set_verbose(cli.verbose);

    if let Err(e) = run(&cli) {
        log!("error"; "{:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = StegoConfig::load(cli)?;

    match &cli.command {
        Commands::Hide { args } => cli::hide::run_hide(args, &config),
        Commands::Reveal { args } => cli::reveal::run_reveal(args, &config),
        Commands::Capacity { args } => cli::capacity::run_capacity(args),
    }
}
