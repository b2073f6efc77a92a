use super::{blocks, cue_text, LoadError};

const SKIPPED_BLOCKS: &[&str] = &["NOTE", "STYLE", "REGION"];

/// Extract cue text from WebVTT content.
pub fn parse(content: &str) -> Result<Vec<String>, LoadError> {
    let blocks = blocks(content);

    let header = blocks
        .first()
        .and_then(|block| block.first())
        .ok_or_else(|| LoadError::VttParse("empty file".to_string()))?;
    if !header.trim_start().starts_with("WEBVTT") {
        return Err(LoadError::VttParse("missing WEBVTT header".to_string()));
    }

    let cues = blocks[1..]
        .iter()
        .filter(|block| {
            let first = block[0].trim_start();
            !SKIPPED_BLOCKS.iter().any(|kind| first.starts_with(kind))
        })
        .filter_map(|block| cue_text(block))
        .collect();

    Ok(cues)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_cues() {
        let content = "WEBVTT\n\n\
NOTE 翻訳メモ\n\n\
STYLE\n::cue { color: white }\n\n\
intro\n00:01.000 --> 00:02.000 align:start\n<v 先生>おはよう</v>\n\n\
00:03.000 --> 00:04.000\n<c.yellow>元気</c>です\n";
        let cues = parse(content).unwrap();
        assert_eq!(cues, vec!["おはよう", "元気です"]);
    }

    #[test]
    fn test_parse_missing_header() {
        let result = parse("00:01.000 --> 00:02.000\n猫\n");
        assert!(matches!(result, Err(LoadError::VttParse(_))));
    }

    #[test]
    fn test_parse_header_only() {
        assert!(parse("WEBVTT - 第一話\n").unwrap().is_empty());
    }
}
