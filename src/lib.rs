//! subfreq: vocabulary frequency reports from Japanese subtitles
//!
//! Subtitle cues are segmented into tokens, punctuation and other noise is
//! stripped by a Unicode range classifier, and the surviving words are counted
//! and rendered as a fixed-width table or a plain word list.

pub mod engine;
pub mod frequency;
pub mod input;
pub mod text;
pub mod tokenizer;

pub use engine::{run, Pipeline, RunConfig, SubfreqError};
pub use frequency::FrequencyTable;
