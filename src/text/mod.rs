//! Character classification and token cleaning for Japanese vocabulary.

pub mod classify;
pub mod normalize;

pub use classify::{classify, is_standalone_invalid, is_word_constituent, CharClass, RangeTag};
pub use normalize::{normalize, DiscardReason, Normalized};
