use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::FmtSubscriber;

use subfreq::engine::{ReportMode, RunConfig, SegmenterKind};
use subfreq::tokenizer::build_segmenter;

#[derive(Parser)]
#[command(name = "subfreq")]
#[command(about = "Rank the vocabulary of Japanese subtitle files by frequency")]
#[command(version)]
struct Cli {
    /// Subtitle file or root directory to parse
    #[arg(long = "in", value_name = "PATH")]
    input: PathBuf,

    /// Destination of the report (directory, or a file whose directory is used)
    #[arg(long = "out", value_name = "PATH")]
    out: Option<PathBuf>,

    /// Compiled vibrato system dictionary (plain or .zst)
    #[arg(long, env = "SUBFREQ_DICT", value_name = "PATH")]
    dict: Option<PathBuf>,

    /// Segment on Unicode word boundaries instead of using a dictionary
    #[arg(long)]
    boundary: bool,

    /// Only read the direct children of the input directory
    #[arg(long)]
    no_recurse: bool,

    /// Write a plain word list (words.txt) instead of a frequency table
    #[arg(short, long)]
    words: bool,

    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn into_config(self) -> RunConfig {
        let mut config = RunConfig::new(self.input);
        config.out = self.out;
        config.dictionary = self.dict;
        config.recurse = !self.no_recurse;
        config.verbose = self.verbose;
        if self.boundary {
            config.segmenter = SegmenterKind::Boundary;
        }
        if self.words {
            config.mode = ReportMode::WordList;
        }
        config
    }
}

fn main() -> Result<()> {
    let config = Cli::parse().into_config();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(config.log_level())
        .with_writer(std::io::stderr)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    // Without a tokenizer there is nothing meaningful to produce.
    let segmenter = build_segmenter(config.segmenter, config.dictionary.as_deref())
        .context("Failed to initialize tokenizer")?;

    let summary = subfreq::run(config, segmenter).context("Frequency run failed")?;

    if let Some(path) = &summary.report_path {
        info!(
            "{} distinct tokens from {} of {} files -> {}",
            summary.table.len(),
            summary.stats.files_processed,
            summary.stats.files_found,
            path.display()
        );
    }

    Ok(())
}
