use super::classify::{is_standalone_invalid, is_word_constituent};

/// Why a raw token was dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiscardReason {
    /// A single kana or mark that is empty on its own.
    Standalone,
    /// Nothing was left after stripping noise.
    Empty,
}

/// Result of normalizing one raw token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Normalized {
    Clean(String),
    Discard(DiscardReason),
}

/// Clean a raw tokenizer output.
///
/// Every character that is not a word constituent is removed wherever it
/// occurs. An empty leftover is discarded, and so is a one-character token made
/// of standalone-only kana, whether it arrived that way or was stripped down to
/// it.
pub fn normalize(token: &str) -> Normalized {
    // Dropping each noise character individually removes every occurrence of
    // every offending value, the same as stripping value by value.
    let cleaned: String = token.chars().filter(|&c| is_word_constituent(c)).collect();

    let mut chars = cleaned.chars();
    match (chars.next(), chars.next()) {
        (None, _) => Normalized::Discard(DiscardReason::Empty),
        (Some(only), None) if is_standalone_invalid(only) => {
            Normalized::Discard(DiscardReason::Standalone)
        }
        _ => Normalized::Clean(cleaned),
    }
}
