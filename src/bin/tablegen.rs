//! Rank Table Generator
//!
//! Grows the five-card rank table, spot-checks it against the bitwise
//! evaluator, and writes it to disk so later runs load instead of grow.
//!
//! Options: --out, --samples

use clap::Parser;
use potshare::evaluation::table::RankTable;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// output path, defaults to ranks.bin in the working directory
    #[arg(long)]
    out: Option<PathBuf>,
    /// random matchups to cross-check against the evaluator
    #[arg(long, default_value_t = 200)]
    samples: usize,
}

fn main() -> anyhow::Result<()> {
    potshare::log();
    let args = Args::parse();
    let path = args.out.unwrap_or_else(RankTable::path);
    let table = RankTable::grow();
    table.verify(args.samples, &mut SmallRng::from_os_rng())?;
    table.save(&path)?;
    log::info!("{:<32}{:<32}", "rank table ready", path.display());
    Ok(())
}
