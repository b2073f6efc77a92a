use unicode_width::UnicodeWidthChar;

use super::table::FrequencyTable;
use crate::engine::config::{ReportMode, TableLayout};

const TOKEN_LABEL: &str = "Token";
const FREQ_LABEL: &str = "Freq";

/// Fixed column widths for one rendering of a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnWidths {
    pub token: usize,
    pub freq: usize,
}

impl ColumnWidths {
    pub fn for_table(table: &FrequencyTable, layout: &TableLayout) -> Self {
        Self {
            token: layout.token_width_factor * table.longest_len(),
            freq: digit_count(table.max_count()) + layout.freq_padding,
        }
    }
}

/// One ranked line of the report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderRow<'a> {
    pub token: &'a str,
    pub count: usize,
    /// Number of glyphs that occupy two terminal columns.
    pub deficit: usize,
}

impl<'a> RenderRow<'a> {
    pub fn new(token: &'a str, count: usize) -> Self {
        Self {
            token,
            count,
            deficit: display_deficit(token),
        }
    }

    /// Padding target, in codepoints, for this row's token cell.
    pub fn token_width(&self, widths: &ColumnWidths) -> usize {
        widths.token.saturating_sub(self.deficit)
    }
}

/// Count of East-Asian wide or fullwidth codepoints in `token`.
pub fn display_deficit(token: &str) -> usize {
    token
        .chars()
        .filter(|c| UnicodeWidthChar::width(*c) == Some(2))
        .count()
}

fn digit_count(n: usize) -> usize {
    n.to_string().len()
}

/// Ranked rows, highest count first.
pub fn rows(table: &FrequencyTable) -> Vec<RenderRow<'_>> {
    table
        .ranked()
        .into_iter()
        .map(|(token, count)| RenderRow::new(token, count))
        .collect()
}

pub fn render(table: &FrequencyTable, mode: ReportMode, layout: &TableLayout) -> String {
    match mode {
        ReportMode::Table => render_table(table, layout),
        ReportMode::WordList => render_word_list(table),
    }
}

/// Fixed-width frequency table with a three-line header.
pub fn render_table(table: &FrequencyTable, layout: &TableLayout) -> String {
    let widths = ColumnWidths::for_table(table, layout);
    let border = format!("|{}|{}|\n", "-".repeat(widths.token), "-".repeat(widths.freq));

    let mut out = String::new();
    out.push_str(&border);
    out.push_str(&format!(
        "|{:<tw$}|{:<fw$}|\n",
        TOKEN_LABEL,
        FREQ_LABEL,
        tw = widths.token,
        fw = widths.freq
    ));
    out.push_str(&border);

    for row in rows(table) {
        out.push_str(&format!(
            "|{:<tw$}|{:<fw$}|\n",
            row.token,
            row.count,
            tw = row.token_width(&widths),
            fw = widths.freq
        ));
    }

    out
}

/// One token per line in encounter order, without counts.
pub fn render_word_list(table: &FrequencyTable) -> String {
    let mut out = String::new();
    for token in table.tokens() {
        out.push_str(token);
        out.push('\n');
    }
    out
}
