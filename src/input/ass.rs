use super::LoadError;

/// Field count of a standard `[Events]` format line; Text is always last.
const DEFAULT_FIELD_COUNT: usize = 10;

/// Extract dialogue text from SubStation Alpha (SSA/ASS) content.
///
/// Only `Dialogue:` lines inside `[Events]` are read. The `Format:` line fixes
/// how many commas precede the Text field, so commas inside the text survive.
pub fn parse(content: &str) -> Result<Vec<String>, LoadError> {
    let mut in_events = false;
    let mut saw_events = false;
    let mut field_count = DEFAULT_FIELD_COUNT;
    let mut text_index = DEFAULT_FIELD_COUNT - 1;
    let mut cues = Vec::new();

    for line in content.lines() {
        let line = line.trim();

        if line.starts_with('[') && line.ends_with(']') {
            in_events = line.eq_ignore_ascii_case("[events]");
            saw_events |= in_events;
            continue;
        }
        if !in_events {
            continue;
        }

        if let Some(format) = line.strip_prefix("Format:") {
            let fields: Vec<&str> = format.split(',').map(str::trim).collect();
            text_index = fields
                .iter()
                .position(|f| f.eq_ignore_ascii_case("text"))
                .ok_or_else(|| LoadError::AssParse("Format line has no Text field".to_string()))?;
            field_count = fields.len();
        } else if let Some(dialogue) = line.strip_prefix("Dialogue:") {
            let fields: Vec<&str> = dialogue.splitn(field_count, ',').collect();
            let text = fields.get(text_index).map(|raw| clean_text(raw)).unwrap_or_default();
            if !text.is_empty() {
                cues.push(text);
            }
        }
    }

    if !saw_events {
        return Err(LoadError::AssParse("missing [Events] section".to_string()));
    }

    Ok(cues)
}

/// Drop `{...}` override blocks and expand ASS escapes.
fn clean_text(raw: &str) -> String {
    let mut text = String::with_capacity(raw.len());
    let mut in_override = false;

    for c in raw.chars() {
        match c {
            '{' => in_override = true,
            '}' if in_override => in_override = false,
            _ if !in_override => text.push(c),
            _ => {}
        }
    }

    text.replace("\\N", "\n")
        .replace("\\n", "\n")
        .replace("\\h", " ")
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}
