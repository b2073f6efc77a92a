pub mod render;
pub mod table;

pub use render::{display_deficit, render, render_table, render_word_list, ColumnWidths, RenderRow};
pub use table::FrequencyTable;
