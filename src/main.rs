use std::io::{self, BufWriter, Write};

use anyhow::{Context, Result};
use clap::Parser;
use looptour::{Demo, Demonstrator, TourConfig};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "looptour",
    about = "A tour of Rust's loop and iteration constructs"
)]
struct Cli {
    /// Increase log verbosity on stderr (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Append the supplementary blocks after the core seven.
    #[arg(long, conflicts_with = "only")]
    extended: bool,

    /// Run only the named blocks, in the order given.
    #[arg(long, value_name = "DEMO")]
    only: Vec<Demo>,

    /// Print the block catalogue and exit.
    #[arg(long)]
    list: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    debug!(?cli, "parsed arguments");

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    if cli.list {
        for demo in Demo::all() {
            writeln!(out, "{}\t{}", demo.name(), demo.header())?;
        }
        out.flush()?;
        return Ok(());
    }

    let config = if !cli.only.is_empty() {
        TourConfig::only(cli.only)
    } else if cli.extended {
        TourConfig::extended()
    } else {
        TourConfig::standard()
    };

    let demonstrator = Demonstrator::new(config);
    debug!(blocks = demonstrator.config().demos.len(), "running tour");
    demonstrator
        .run(&mut out)
        .context("tour did not complete")?;

    Ok(())
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(verbose >= 2)
        .init();
}
