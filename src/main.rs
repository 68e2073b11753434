//! cidrpack: CLI for compacting CIDR route tables and ACL prefix lists.

use std::fs::File;
use std::io;
use std::path::PathBuf;

use clap::Parser;

use cidrpack::{optimize, parse_records, read_records, write_records};

#[derive(Parser)]
#[command(name = "cidrpack")]
#[command(version)]
#[command(about = "Compact a list of IP routes by merging and removing redundant entries", long_about = None)]
struct Cli {
    /// Input CSV file
    #[arg(short, long)]
    input: PathBuf,

    /// Output CSV file (defaults to stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> cidrpack::Result<()> {
    log::info!("reading input file: {}", cli.input.display());
    let file = File::open(&cli.input)?;
    let records = read_records(file)?;
    let prefixes = parse_records(&records)?;

    let prefixes = optimize(prefixes);

    match &cli.output {
        Some(path) => {
            log::info!("writing output to: {}", path.display());
            let file = File::create(path)?;
            write_records(file, &prefixes)
        }
        None => {
            log::info!("writing output to stdout");
            write_records(io::stdout().lock(), &prefixes)
        }
    }
}
