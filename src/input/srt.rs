use super::{blocks, cue_text, LoadError};

/// Extract cue text from SubRip content.
///
/// Each block is an index line, a `start --> end` timing line and one or more
/// text lines. Blocks without a timing line are skipped.
pub fn parse(content: &str) -> Result<Vec<String>, LoadError> {
    let blocks = blocks(content);
    let cues: Vec<String> = blocks.iter().filter_map(|block| cue_text(block)).collect();

    if cues.is_empty() && !blocks.is_empty() && !blocks.iter().any(|b| has_timing(b)) {
        return Err(LoadError::SrtParse(
            "no timing lines found".to_string(),
        ));
    }

    Ok(cues)
}

fn has_timing(block: &[&str]) -> bool {
    block.iter().any(|line| line.contains("-->"))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "1\r\n\
00:00:01,000 --> 00:00:03,000\r\n\
<i>猫が好きです。</i>\r\n\
\r\n\
2\r\n\
00:00:04,000 --> 00:00:06,500\r\n\
本当に？\r\n\
可愛いね！\r\n\
\r\n\
3\r\n\
00:00:07,000 --> 00:00:08,000\r\n\
\r\n";

    #[test]
    fn test_parse_cues_in_order() {
        let cues = parse(SAMPLE).unwrap();
        assert_eq!(cues, vec!["猫が好きです。", "本当に？\n可愛いね！"]);
    }

    #[test]
    fn test_parse_empty_content() {
        assert!(parse("").unwrap().is_empty());
    }

    #[test]
    fn test_parse_rejects_plain_text() {
        let result = parse("これは字幕ではない\nただのテキスト");
        assert!(matches!(result, Err(LoadError::SrtParse(_))));
    }
}
