//! Report Binary
//!
//! Prints per-game centroid values of a k-means result and optionally
//! saves one line plot panel per game.
//!
//! Options: --labels, --plot <PATH>, --ylim <LO> <HI>, --auto-ylim, --random <K>

use clap::Parser;
use kmeans_report::*;

fn main() -> anyhow::Result<()> {
    log();
    let args = Args::parse();
    let options = args.options()?;
    let (clustering, grouping) = args.load()?;
    match (render(&clustering, &grouping, options)?, &args.plot) {
        (Some(figure), Some(path)) => figure.save(path),
        _ => Ok(()),
    }
}
