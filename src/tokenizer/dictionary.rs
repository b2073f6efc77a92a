use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use tracing::debug;
use vibrato::{Dictionary, Tokenizer};

use super::{Segmenter, TokenizerError};

const ZSTD_MAGIC: [u8; 4] = [0x28, 0xB5, 0x2F, 0xFD];

/// Morphological segmentation backed by a vibrato system dictionary.
pub struct VibratoSegmenter {
    tokenizer: Tokenizer,
}

impl VibratoSegmenter {
    pub fn new(dictionary: Dictionary) -> Result<Self, String> {
        let tokenizer = Tokenizer::new(dictionary)
            .ignore_space(true)
            .map_err(|e| e.to_string())?;
        Ok(Self { tokenizer })
    }

    /// Load a compiled dictionary, zstd-compressed or plain.
    pub fn from_path(path: &Path) -> Result<Self, TokenizerError> {
        if !path.exists() {
            return Err(TokenizerError::DictionaryNotFound(path.to_path_buf()));
        }

        let io_error = |source| TokenizerError::DictionaryIo {
            path: path.to_path_buf(),
            source,
        };
        let load_error = |reason| TokenizerError::DictionaryLoad {
            path: path.to_path_buf(),
            reason,
        };

        let file = File::open(path).map_err(io_error)?;
        let mut reader = BufReader::new(file);
        let compressed = is_zstd(&mut reader).map_err(io_error)?;
        debug!(path = %path.display(), compressed, "loading dictionary");

        let loaded = if compressed {
            let decoder = zstd::stream::read::Decoder::with_buffer(reader).map_err(io_error)?;
            read_dictionary(decoder)
        } else {
            read_dictionary(reader)
        };
        let dictionary = loaded.map_err(load_error)?;

        Self::new(dictionary).map_err(load_error)
    }
}

fn read_dictionary<R: Read>(reader: R) -> Result<Dictionary, String> {
    Dictionary::read(reader).map_err(|e| e.to_string())
}

fn is_zstd<R: BufRead>(reader: &mut R) -> std::io::Result<bool> {
    let head = reader.fill_buf()?;
    Ok(head.starts_with(&ZSTD_MAGIC))
}

impl Segmenter for VibratoSegmenter {
    fn wakati(&mut self, text: &str) -> Vec<String> {
        let mut worker = self.tokenizer.new_worker();
        let mut tokens = Vec::new();

        // vibrato works sentence by sentence; feeding it line by line keeps the
        // lattice small for long subtitle files.
        for line in text.lines().filter(|line| !line.trim().is_empty()) {
            worker.reset_sentence(line);
            worker.tokenize();
            tokens.extend((0..worker.num_tokens()).map(|i| worker.token(i).surface().to_string()));
        }

        tokens
    }
}
