use std::path::{Path, PathBuf};

use tracing::{debug, info, trace, warn};

use super::config::RunConfig;
use super::error::SubfreqError;
use super::output::{resolve_destination, write_report};
use crate::frequency::{render, FrequencyTable};
use crate::input::{self, LoadError};
use crate::text::{normalize, Normalized};
use crate::tokenizer::Segmenter;

/// Counters for one run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunStats {
    /// Files with a subtitle extension, parseable or not.
    pub files_found: usize,
    /// Files that parsed and were counted.
    pub files_processed: usize,
    pub files_skipped: usize,
    pub tokens_seen: usize,
    pub tokens_discarded: usize,
}

impl RunStats {
    pub fn tokens_kept(&self) -> usize {
        self.tokens_seen - self.tokens_discarded
    }
}

/// Run-scoped state: configuration, segmenter and the growing frequency table.
///
/// Raw tokens flow through [`normalize`] into the table; rendering borrows the
/// table once aggregation is done.
pub struct Pipeline<S> {
    config: RunConfig,
    segmenter: S,
    table: FrequencyTable,
    stats: RunStats,
}

impl<S: Segmenter> Pipeline<S> {
    pub fn new(config: RunConfig, segmenter: S) -> Self {
        Self {
            config,
            segmenter,
            table: FrequencyTable::new(),
            stats: RunStats::default(),
        }
    }

    pub fn table(&self) -> &FrequencyTable {
        &self.table
    }

    pub fn stats(&self) -> &RunStats {
        &self.stats
    }

    /// Normalize and count already segmented tokens.
    pub fn ingest_tokens<I, T>(&mut self, tokens: I)
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        for raw in tokens {
            let raw = raw.as_ref();
            self.stats.tokens_seen += 1;
            match normalize(raw) {
                Normalized::Clean(token) => self.table.record(&token),
                Normalized::Discard(reason) => {
                    self.stats.tokens_discarded += 1;
                    trace!(token = raw, ?reason, "discarded");
                }
            }
        }
    }

    /// Segment a block of text and count its tokens.
    pub fn ingest_text(&mut self, text: &str) {
        let tokens = self.segmenter.wakati(text);
        self.ingest_tokens(tokens);
    }

    /// Parse one subtitle file and count its tokens.
    ///
    /// A file that fails to parse leaves the table untouched.
    pub fn ingest_file(&mut self, path: &Path) -> Result<(), LoadError> {
        let document = match input::load(path) {
            Ok(document) => document,
            Err(e) => {
                self.stats.files_skipped += 1;
                return Err(e);
            }
        };

        debug!("Processing {}", document.source);
        self.ingest_text(&document.text());
        self.stats.files_processed += 1;
        Ok(())
    }

    /// Render the report for the configured mode.
    pub fn render(&self) -> String {
        render(&self.table, self.config.mode, &self.config.layout)
    }

    /// Discover, aggregate and write the report.
    ///
    /// The destination is resolved before any file is read so a bad output
    /// path fails fast. Only files that parse count as subtitle files; when
    /// none do, the run succeeds without writing anything.
    pub fn run(mut self) -> Result<RunSummary, SubfreqError> {
        let destination =
            resolve_destination(self.config.out_base(), self.config.report_file_name())?;

        let files = input::discover(&self.config.root, self.config.recurse)?;
        self.stats.files_found = files.len();

        for path in &files {
            if let Err(e) = self.ingest_file(path) {
                if self.config.verbose {
                    warn!("Skipping {}: {}", path.display(), e);
                } else {
                    debug!("Skipping {}: {}", path.display(), e);
                }
            }
        }

        if self.stats.files_processed == 0 {
            info!("No subtitle files found under {}", self.config.root.display());
            return Ok(self.into_summary(None));
        }

        let report = self.render();
        write_report(&destination, &report)?;
        info!(
            files = self.stats.files_processed,
            tokens = self.table.len(),
            "Wrote {}",
            destination.display()
        );

        Ok(self.into_summary(Some(destination)))
    }

    fn into_summary(self, report_path: Option<PathBuf>) -> RunSummary {
        RunSummary {
            report_path,
            stats: self.stats,
            table: self.table,
        }
    }
}

/// Outcome of a finished run.
#[derive(Debug)]
pub struct RunSummary {
    /// Where the report was written; `None` when there was nothing to report.
    pub report_path: Option<PathBuf>,
    pub stats: RunStats,
    pub table: FrequencyTable,
}

/// Build a pipeline for `config` and run it.
pub fn run<S: Segmenter>(config: RunConfig, segmenter: S) -> Result<RunSummary, SubfreqError> {
    Pipeline::new(config, segmenter).run()
}
