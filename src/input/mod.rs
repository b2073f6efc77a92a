use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("SRT parse error: {0}")]
    SrtParse(String),

    #[error("WebVTT parse error: {0}")]
    VttParse(String),

    #[error("SSA/ASS parse error: {0}")]
    AssParse(String),

    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid UTF-8 in {0}")]
    InvalidEncoding(PathBuf),

    #[error("No subtitle text found in {0}")]
    NoCues(PathBuf),
}

/// Subtitle containers we can pull cue text out of.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubtitleFormat {
    Srt,
    WebVtt,
    Ass,
}

impl SubtitleFormat {
    /// Guess the format from the file extension, case-insensitively.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "srt" => Some(SubtitleFormat::Srt),
            "vtt" => Some(SubtitleFormat::WebVtt),
            "ass" | "ssa" => Some(SubtitleFormat::Ass),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            SubtitleFormat::Srt => "srt",
            SubtitleFormat::WebVtt => "vtt",
            SubtitleFormat::Ass => "ass",
        }
    }

    pub fn parse(self, content: &str) -> Result<Vec<String>, LoadError> {
        match self {
            SubtitleFormat::Srt => srt::parse(content),
            SubtitleFormat::WebVtt => vtt::parse(content),
            SubtitleFormat::Ass => ass::parse(content),
        }
    }
}

/// Cue texts of one subtitle file, in file order.
pub struct SubtitleDocument {
    pub cues: Vec<String>,
    pub source: String,
}

impl SubtitleDocument {
    /// All cue text joined line by line, ready for segmentation.
    pub fn text(&self) -> String {
        self.cues.join("\n")
    }
}

/// Read and parse a subtitle file.
pub fn load(path: &Path) -> Result<SubtitleDocument, LoadError> {
    if !path.exists() {
        return Err(LoadError::FileNotFound(path.to_path_buf()));
    }

    let format = SubtitleFormat::from_path(path)
        .ok_or_else(|| LoadError::UnsupportedFormat(path.display().to_string()))?;

    let bytes = std::fs::read(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let content =
        String::from_utf8(bytes).map_err(|_| LoadError::InvalidEncoding(path.to_path_buf()))?;
    let content = content.strip_prefix('\u{FEFF}').unwrap_or(&content);

    let cues = format.parse(content)?;
    if cues.is_empty() {
        return Err(LoadError::NoCues(path.to_path_buf()));
    }

    Ok(SubtitleDocument {
        cues,
        source: format!("{}:{}", format.name(), path.display()),
    })
}

/// Remove `<...>` markup tags and decode the few entities subtitles use.
fn strip_tags(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut in_tag = false;

    for c in text.chars() {
        if c == '<' {
            in_tag = true;
        } else if c == '>' && in_tag {
            in_tag = false;
        } else if !in_tag {
            result.push(c);
        }
    }

    result
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&nbsp;", " ")
        .replace("&amp;", "&")
}

/// Split text into blank-line separated blocks of lines.
fn blocks(content: &str) -> Vec<Vec<&str>> {
    let mut blocks = Vec::new();
    let mut current = Vec::new();

    for line in content.lines() {
        if line.trim().is_empty() {
            if !current.is_empty() {
                blocks.push(std::mem::take(&mut current));
            }
        } else {
            current.push(line);
        }
    }
    if !current.is_empty() {
        blocks.push(current);
    }

    blocks
}

/// Join the text lines that follow a cue's timing line.
fn cue_text(block: &[&str]) -> Option<String> {
    let timing = block.iter().position(|line| line.contains("-->"))?;
    let text = block[timing + 1..]
        .iter()
        .map(|line| strip_tags(line).trim().to_string())
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n");

    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

pub mod ass;
pub mod discover;
pub mod srt;
pub mod vtt;

pub use discover::discover;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_extension() {
        assert_eq!(SubtitleFormat::from_path(Path::new("a.srt")), Some(SubtitleFormat::Srt));
        assert_eq!(SubtitleFormat::from_path(Path::new("a.SRT")), Some(SubtitleFormat::Srt));
        assert_eq!(SubtitleFormat::from_path(Path::new("a.vtt")), Some(SubtitleFormat::WebVtt));
        assert_eq!(SubtitleFormat::from_path(Path::new("a.ass")), Some(SubtitleFormat::Ass));
        assert_eq!(SubtitleFormat::from_path(Path::new("a.ssa")), Some(SubtitleFormat::Ass));
        assert_eq!(SubtitleFormat::from_path(Path::new("a.txt")), None);
        assert_eq!(SubtitleFormat::from_path(Path::new("noext")), None);
    }

    #[test]
    fn test_load_nonexistent_file() {
        let result = load(Path::new("/nonexistent/path/episode01.srt"));
        assert!(matches!(result, Err(LoadError::FileNotFound(_))));
    }

    #[test]
    fn test_load_unsupported_format() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.txt");
        std::fs::write(&path, "猫").unwrap();
        assert!(matches!(load(&path), Err(LoadError::UnsupportedFormat(_))));
    }

    #[test]
    fn test_load_invalid_utf8() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.srt");
        std::fs::write(&path, [0xFF, 0xFE, 0x00, 0x41]).unwrap();
        assert!(matches!(load(&path), Err(LoadError::InvalidEncoding(_))));
    }

    #[test]
    fn test_load_srt_with_bom() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ep1.srt");
        std::fs::write(&path, "\u{FEFF}1\n00:00:01,000 --> 00:00:02,000\n猫が好き\n").unwrap();

        let doc = load(&path).unwrap();
        assert_eq!(doc.cues, vec!["猫が好き"]);
        assert!(doc.source.starts_with("srt:"));
    }

    #[test]
    fn test_load_empty_file_has_no_cues() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.srt");
        std::fs::write(&path, "").unwrap();
        assert!(matches!(load(&path), Err(LoadError::NoCues(_))));
    }

    #[test]
    fn test_strip_tags() {
        assert_eq!(strip_tags("<i>猫</i>です"), "猫です");
        assert_eq!(strip_tags("<font color=\"#fff\">犬</font>"), "犬");
        assert_eq!(strip_tags("A &amp; B"), "A & B");
    }

    #[test]
    fn test_document_text_joins_cues() {
        let doc = SubtitleDocument {
            cues: vec!["猫".to_string(), "犬".to_string()],
            source: "srt:test.srt".to_string(),
        };
        assert_eq!(doc.text(), "猫\n犬");
    }
}
