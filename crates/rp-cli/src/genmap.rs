//! railplan-genmap: write the synthetic chain-and-spoke stress map.
//!
//! Run with: `cargo run -p rp-cli --bin railplan-genmap -- --stations 10000 stress.map`

use std::fs::File;
use std::io::{self, BufWriter};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use rp_map::{MAX_STATIONS, write_stress_map};

#[derive(Debug, Parser)]
#[command(name = "railplan-genmap", version, about = "Generate a railplan stress map")]
struct Args {
    /// Number of stations.
    #[arg(long, default_value_t = MAX_STATIONS)]
    stations: usize,

    /// Output file; stdout when omitted.
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    match &args.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("cannot create {}", path.display()))?;
            write_stress_map(BufWriter::new(file), args.stations)?;
            eprintln!("Wrote {} ({} stations)", path.display(), args.stations);
        }
        None => write_stress_map(io::stdout().lock(), args.stations)?,
    }
    Ok(())
}
