use airdesk::airport::{Airport, Scenario};
use airdesk::store::Store;
use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod menu;

#[derive(Parser)]
#[command(version, about = "Airport records desk: aircraft, passengers, flights and bookings")]
struct Args {
    /// Path to the SQLite database file
    #[arg(short, long, value_name = "FILE", env = "AIRDESK_DB", default_value = "airport.db")]
    database: PathBuf,

    /// JSON scenario file to import before the menu starts
    #[arg(short, long, value_name = "FILE")]
    seed: Option<PathBuf>,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, value_name = "FILTER", default_value = "warn")]
    log_level: String,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&args.log_level))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let mut airport = Airport::open(Store::new(args.database.clone()))
        .with_context(|| format!("cannot open records at {}", args.database.display()))?;
    println!("Airport desk online. Records loaded from {}", args.database.display());

    if let Some(path) = &args.seed {
        let scenario = Scenario::load_from_file(path)
            .with_context(|| format!("cannot read scenario {}", path.display()))?;
        let report = airport.apply_scenario(&scenario)?;
        println!(
            "Imported {} records from {} ({} already present).",
            report.added,
            path.display(),
            report.skipped
        );
    }

    menu::run(&mut airport)?;
    airport.close();
    Ok(())
}
