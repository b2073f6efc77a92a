pub mod config;
pub mod error;
pub mod output;
pub mod pipeline;

pub use config::{OutputConfig, ReportMode, RunConfig, SegmenterKind, TableLayout};
pub use error::SubfreqError;
pub use pipeline::{run, Pipeline, RunStats, RunSummary};
