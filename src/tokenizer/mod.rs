//! Segmenter trait definition for pluggable wakati backends
//!
//! The pipeline only needs surface strings in order. `VibratoSegmenter` does
//! dictionary-based morphological segmentation; `BoundarySegmenter` falls back
//! to Unicode word boundaries and needs no dictionary.

use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::engine::config::SegmenterKind;

pub mod boundary;
pub mod dictionary;

pub use boundary::BoundarySegmenter;
pub use dictionary::VibratoSegmenter;

#[derive(Error, Debug)]
pub enum TokenizerError {
    #[error("No dictionary given; pass --dict or set SUBFREQ_DICT")]
    MissingDictionary,

    #[error("Dictionary not found: {0}")]
    DictionaryNotFound(PathBuf),

    #[error("Failed to read dictionary {path}: {source}")]
    DictionaryIo {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to load dictionary {path}: {reason}")]
    DictionaryLoad { path: PathBuf, reason: String },
}

/// Splits text into surface tokens without part-of-speech annotation.
pub trait Segmenter {
    /// Segment `text` into its tokens, in order.
    fn wakati(&mut self, text: &str) -> Vec<String>;
}

impl<S: Segmenter + ?Sized> Segmenter for Box<S> {
    fn wakati(&mut self, text: &str) -> Vec<String> {
        (**self).wakati(text)
    }
}

/// Build the segmenter a run asked for.
pub fn build_segmenter(
    kind: SegmenterKind,
    dictionary: Option<&Path>,
) -> Result<Box<dyn Segmenter>, TokenizerError> {
    match kind {
        SegmenterKind::Vibrato => {
            let path = dictionary.ok_or(TokenizerError::MissingDictionary)?;
            Ok(Box::new(VibratoSegmenter::from_path(path)?))
        }
        SegmenterKind::Boundary => Ok(Box::new(BoundarySegmenter::new())),
    }
}
