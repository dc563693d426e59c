use super::*;
use anyhow::Context;
use clap::Parser;
use serde::Deserialize;
use std::num::NonZeroUsize;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "Print k-means centroids game by game", long_about = None)]
pub struct Args {
    #[arg(
        required_unless_present = "random",
        help = "JSON document with centroids, labels and games"
    )]
    pub input: Option<PathBuf>,
    #[arg(long, help = "Print the raw per-point cluster labels first")]
    pub labels: bool,
    #[arg(
        long,
        value_name = "PATH",
        help = "Draw one panel per game and save the figure as SVG"
    )]
    pub plot: Option<PathBuf>,
    #[arg(
        long,
        num_args = 2,
        value_names = ["LO", "HI"],
        allow_negative_numbers = true,
        conflicts_with = "auto_ylim",
        help = "Vertical bounds for every panel [default: 1.5 4]"
    )]
    pub ylim: Option<Vec<Coordinate>>,
    #[arg(long, help = "Let every panel fit its own vertical range")]
    pub auto_ylim: bool,
    #[arg(
        long,
        value_name = "K",
        conflicts_with = "input",
        help = "Render a synthetic clustering with K clusters instead of INPUT"
    )]
    pub random: Option<NonZeroUsize>,
}

/// Input file layout: a clustering plus the games spanning its columns.
#[derive(Deserialize)]
struct Document {
    #[serde(flatten)]
    clustering: Clustering,
    games: Grouping,
}

impl Args {
    pub fn options(&self) -> anyhow::Result<Options> {
        let bounds = match (&self.ylim, self.auto_ylim) {
            (_, true) => None,
            (Some(ylim), false) => match ylim.as_slice() {
                &[lo, hi] => Some(Bounds::new(lo, hi)?),
                _ => anyhow::bail!("--ylim takes exactly two values"),
            },
            (None, false) => Some(Bounds::default()),
        };
        Ok(Options {
            bounds,
            raw_labels: self.labels,
            plot: self.plot.is_some(),
        })
    }

    pub fn load(&self) -> anyhow::Result<(Clustering, Grouping)> {
        match (&self.input, self.random) {
            (_, Some(k)) => {
                let grouping = Grouping::random();
                let clustering = Clustering::sample(k.get(), grouping.dims(), SAMPLE_POINTS)?;
                log::info!("{:<32}{:<32}", "sampled clustering", format!("k={}", clustering.k()));
                Ok((clustering, grouping))
            }
            (Some(path), None) => {
                let text = std::fs::read_to_string(path)
                    .with_context(|| format!("read {}", path.display()))?;
                let document = serde_json::from_str::<Document>(&text)
                    .with_context(|| format!("parse {}", path.display()))?;
                log::info!("{:<32}{:<32}", "loaded clustering", path.display().to_string());
                Ok((document.clustering, document.games))
            }
            (None, None) => anyhow::bail!("either INPUT or --random is required"),
        }
    }
}
