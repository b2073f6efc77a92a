use std::io;
use std::path::PathBuf;
use thiserror::Error;

use crate::input::LoadError;
use crate::tokenizer::TokenizerError;

/// Run-level failures. Any of these ends the run.
#[derive(Error, Debug)]
pub enum SubfreqError {
    #[error("Tokenizer unavailable: {0}")]
    Tokenizer(#[from] TokenizerError),

    #[error("Cannot scan input: {0}")]
    Input(#[from] LoadError),

    #[error("Cannot resolve output destination {path}: {source}")]
    OutputPath { path: PathBuf, source: io::Error },

    #[error("Failed to write report to {path}: {source}")]
    Write { path: PathBuf, source: io::Error },
}
