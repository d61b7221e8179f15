//! Price list loader and search
//!
//! Usage:
//!   cargo run --bin price_machine -- path/to/prices
//!   PRICE_DIR=path/to/prices cargo run --bin price_machine -- --no-interactive

use anyhow::{Context, Result};
use clap::Parser;
use price_machine::{interactive_search, LoadOptions, PriceData};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Compare supplier price lists by price per kilogram
#[derive(Parser, Debug)]
#[command(name = "price_machine")]
#[command(version)]
struct Args {
    /// Folder with price list files (asked for on stdin when omitted)
    #[arg(env = "PRICE_DIR")]
    dir: Option<PathBuf>,

    /// Substring a file name must contain to be loaded
    #[arg(long, env = "PRICE_MARKER", default_value = "price")]
    marker: String,

    /// HTML export path
    #[arg(short, long, env = "PRICE_OUTPUT", default_value = "output.html")]
    output: PathBuf,

    /// Also export the records as JSON
    #[arg(long)]
    json: Option<PathBuf>,

    /// Skip the search loop
    #[arg(long, default_value_t = false)]
    no_interactive: bool,
}

fn main() {
    // Logs go to stderr so the search table on stdout stays readable
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "price_machine=info,warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let args = Args::parse();

    if let Err(err) = run(args) {
        tracing::error!("{:#}", err);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();

    let dir = match args.dir {
        Some(dir) => dir,
        None => ask_for_dir(&mut input)?,
    };

    let options = LoadOptions {
        marker: args.marker,
        ..LoadOptions::default()
    };

    let mut data = PriceData::new();
    data.load_prices(&dir, &options)
        .with_context(|| format!("Failed to load price lists from {}", dir.display()))?;

    data.export_to_html(&args.output)
        .with_context(|| format!("Failed to write {}", args.output.display()))?;

    if let Some(json_path) = &args.json {
        data.export_to_json(json_path)
            .with_context(|| format!("Failed to write {}", json_path.display()))?;
    }

    if !args.no_interactive {
        let stdout = io::stdout();
        interactive_search(&data, &mut input, stdout.lock())?;
    }

    Ok(())
}

fn ask_for_dir(input: &mut impl BufRead) -> Result<PathBuf> {
    print!("Enter path to the folder with price files: ");
    io::stdout().flush()?;

    let mut line = String::new();
    input.read_line(&mut line).context("Failed to read folder path")?;
    let path = line.trim();
    if path.is_empty() {
        anyhow::bail!("No folder given");
    }
    Ok(PathBuf::from(path))
}
