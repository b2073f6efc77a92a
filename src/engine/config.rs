// Configuration for a subfreq run
// Defaults give the classic freq.txt table layout

use std::path::{Path, PathBuf};

use tracing::Level;

/// Which report to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportMode {
    /// Frequency-ranked table with counts.
    #[default]
    Table,
    /// Bare vocabulary list in encounter order.
    WordList,
}

/// Which segmenter turns subtitle text into tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SegmenterKind {
    /// Morphological analysis with a vibrato dictionary (default)
    #[default]
    Vibrato,
    /// Unicode word boundaries, no dictionary needed
    Boundary,
}

/// Column sizing for table mode
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableLayout {
    /// Token column width per codepoint of the longest token (default 2, room for double-width glyphs)
    pub token_width_factor: usize,

    /// Extra columns after the widest count (default 4)
    pub freq_padding: usize,
}

impl Default for TableLayout {
    fn default() -> Self {
        Self {
            token_width_factor: 2,
            freq_padding: 4,
        }
    }
}

/// Report file names
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputConfig {
    /// Table mode file name (default "freq.txt")
    pub table_file_name: String,

    /// Word-list mode file name (default "words.txt")
    pub word_list_file_name: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            table_file_name: "freq.txt".to_string(),
            word_list_file_name: "words.txt".to_string(),
        }
    }
}

impl OutputConfig {
    pub fn file_name(&self, mode: ReportMode) -> &str {
        match mode {
            ReportMode::Table => &self.table_file_name,
            ReportMode::WordList => &self.word_list_file_name,
        }
    }
}

/// Master configuration for one run
#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    /// Input file or directory
    pub root: PathBuf,

    /// Report destination; a directory, or a file whose directory is used. Defaults to `root`.
    pub out: Option<PathBuf>,

    /// Compiled vibrato dictionary, plain or zstd-compressed
    pub dictionary: Option<PathBuf>,

    pub segmenter: SegmenterKind,

    /// Descend into subdirectories (default true)
    pub recurse: bool,

    /// Debug logging, and per-file skips reported as warnings
    pub verbose: bool,

    pub mode: ReportMode,
    pub layout: TableLayout,
    pub output: OutputConfig,
}

impl RunConfig {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            out: None,
            dictionary: None,
            segmenter: SegmenterKind::default(),
            recurse: true,
            verbose: false,
            mode: ReportMode::default(),
            layout: TableLayout::default(),
            output: OutputConfig::default(),
        }
    }

    /// Where the report should go before file-name resolution.
    pub fn out_base(&self) -> &Path {
        self.out.as_deref().unwrap_or(&self.root)
    }

    pub fn report_file_name(&self) -> &str {
        self.output.file_name(self.mode)
    }

    /// Most detailed log level worth showing for this run.
    pub fn log_level(&self) -> Level {
        if self.verbose {
            Level::DEBUG
        } else {
            Level::INFO
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = RunConfig::new("subs");
        assert!(config.recurse);
        assert!(!config.verbose);
        assert_eq!(config.mode, ReportMode::Table);
        assert_eq!(config.segmenter, SegmenterKind::Vibrato);
        assert_eq!(config.layout.token_width_factor, 2);
        assert_eq!(config.layout.freq_padding, 4);
    }

    #[test]
    fn test_report_file_name_follows_mode() {
        let mut config = RunConfig::new("subs");
        assert_eq!(config.report_file_name(), "freq.txt");
        config.mode = ReportMode::WordList;
        assert_eq!(config.report_file_name(), "words.txt");
    }

    #[test]
    fn test_log_level_follows_verbose() {
        let mut config = RunConfig::new("subs");
        assert_eq!(config.log_level(), Level::INFO);
        config.verbose = true;
        assert_eq!(config.log_level(), Level::DEBUG);
    }

    #[test]
    fn test_out_base_defaults_to_root() {
        let mut config = RunConfig::new("subs");
        assert_eq!(config.out_base(), Path::new("subs"));
        config.out = Some(PathBuf::from("reports"));
        assert_eq!(config.out_base(), Path::new("reports"));
    }
}
