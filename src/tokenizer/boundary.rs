use unicode_segmentation::UnicodeSegmentation;

use super::Segmenter;

/// Dictionary-free segmentation.
///
/// Text is split on UAX #29 word boundaries, then neighbouring pieces of the
/// same Japanese script are glued back together, so a run of kanji or of kana
/// becomes one token. Much coarser than a morphological analyzer (okurigana
/// end up in their own token) but it needs no dictionary.
#[derive(Debug, Default, Clone, Copy)]
pub struct BoundarySegmenter;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Script {
    Kanji,
    Hiragana,
    Katakana,
}

fn script_of(c: char) -> Option<Script> {
    match c {
        '\u{3041}'..='\u{309F}' => Some(Script::Hiragana),
        '\u{30A0}'..='\u{30FF}' | '\u{31F0}'..='\u{31FF}' => Some(Script::Katakana),
        '\u{3005}' | '\u{3400}'..='\u{4DBF}' | '\u{4E00}'..='\u{9FFF}' | '\u{F900}'..='\u{FAFF}' => {
            Some(Script::Kanji)
        }
        '\u{20000}'..='\u{2EBEF}' => Some(Script::Kanji),
        _ => None,
    }
}

/// The single script shared by every char of `piece`, if any.
fn piece_script(piece: &str) -> Option<Script> {
    let mut chars = piece.chars();
    let first = script_of(chars.next()?)?;
    chars.all(|c| script_of(c) == Some(first)).then_some(first)
}

impl BoundarySegmenter {
    pub fn new() -> Self {
        Self
    }
}

impl Segmenter for BoundarySegmenter {
    fn wakati(&mut self, text: &str) -> Vec<String> {
        let mut tokens = Vec::new();
        let mut run = String::new();
        let mut run_script = None;

        for piece in text.split_word_bounds() {
            if piece.trim().is_empty() {
                if !run.is_empty() {
                    tokens.push(std::mem::take(&mut run));
                }
                run_script = None;
                continue;
            }

            let script = piece_script(piece);
            if script.is_some() && script == run_script {
                run.push_str(piece);
                continue;
            }

            if !run.is_empty() {
                tokens.push(std::mem::take(&mut run));
            }
            match script {
                Some(_) => run.push_str(piece),
                None => tokens.push(piece.to_string()),
            }
            run_script = script;
        }

        if !run.is_empty() {
            tokens.push(run);
        }
        tokens
    }
}
