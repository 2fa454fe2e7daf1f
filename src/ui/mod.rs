//! Terminal presentation: summary tables, success messages, and progress.
//!
//! - **Display** (this module): formatted summaries printed after a
//!   successful encode or decode.
//! - **Progress** (`progress.rs`): an `indicatif`-backed progress bar for
//!   the per-block worker stage.
//! - **Prompt** (`prompt.rs`): interactive password entry via `dialoguer`.

use bytesize::ByteSize;
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, Color, ContentArrangement, Table};

use crate::types::Mode;

pub mod progress;
pub mod prompt;

/// Prints the summary table shown after a successful encode: output path,
/// block count, and grid dimensions.
pub fn show_encode_summary(output_path: &std::path::Path, block_count: usize, cols: usize, rows: usize) {
    println!();
    println!("{} {}", console::style("\u{2714}").green().bright(), console::style("File encoded successfully").white().bright());

    let mut table = Table::new();
    table.load_preset(UTF8_FULL).apply_modifier(UTF8_ROUND_CORNERS).set_content_arrangement(ContentArrangement::Dynamic);
    table.add_row(vec![Cell::new("Output").fg(Color::Green), Cell::new(output_path.display().to_string())]);
    table.add_row(vec![Cell::new("Blocks").fg(Color::Green), Cell::new(block_count.to_string())]);
    table.add_row(vec![Cell::new("Grid").fg(Color::Green), Cell::new(format!("{cols} x {rows}"))]);
    println!("{table}");
}

/// Prints the summary table shown after a successful decode: recovered
/// file name, size, and output path.
pub fn show_decode_summary(output_path: &std::path::Path, file_name: &str, size: u64) {
    println!();
    println!("{} {}", console::style("\u{2714}").green().bright(), console::style("File decoded successfully").white().bright());

    let mut table = Table::new();
    table.load_preset(UTF8_FULL).apply_modifier(UTF8_ROUND_CORNERS).set_content_arrangement(ContentArrangement::Dynamic);
    table.add_row(vec![Cell::new("Recovered file").fg(Color::Green), Cell::new(file_name)]);
    table.add_row(vec![Cell::new("Size").fg(Color::Green), Cell::new(ByteSize(size).to_string())]);
    table.add_row(vec![Cell::new("Written to").fg(Color::Green), Cell::new(output_path.display().to_string())]);
    println!("{table}");
}

/// Reports block indices whose decode failed (logged, not fatal by
/// themselves) — surfaced so the user sees which blocks the reassembler is
/// about to complain are missing.
pub fn show_mode_started(mode: Mode, path: &std::path::Path) {
    println!("{} {} {}", console::style("\u{25b6}").cyan().bright(), console::style(mode.label()).white().bright(), console::style(path.display().to_string()).dim());
}
