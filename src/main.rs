mod app;
mod config;
mod error;
mod normalize;
mod report;
mod tools;

use std::path::PathBuf;
use anyhow::{Context, Result};
use app::{App, RunOptions};
use clap::Parser;
use config::Config;

#[derive(Parser, Debug)]
#[command(author, version, about = "Normalize Markdown filenames recursively", long_about = None)]
struct Cli {
    #[arg(required = true, value_name = "ROOT", help = "Root directories to process")]
    roots: Vec<PathBuf>,

    #[arg(short = 'n', long, help = "Show planned renames without applying them")]
    dry_run: bool,

    #[arg(short, long, help = "Print roots and collision details")]
    verbose: bool,

    #[arg(short, long, help = "Enable debug logging")]
    debug: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load();

    let debug_enabled = cli.debug || config.debug.unwrap_or(false);
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(if debug_enabled { "debug" } else { "warn" })
    ).init();

    log::debug!("CLI args: {:?}", cli);
    log::debug!("Loaded configuration: {:?}", config);

    let options = RunOptions {
        dry_run: cli.dry_run || config.dry_run.unwrap_or(false),
        verbose: cli.verbose || config.verbose.unwrap_or(false),
    };

    let report = App::new(options)
        .run(&cli.roots)
        .context("normalization aborted")?;

    println!("{}", report.summary_line());
    Ok(())
}
