//! Plain-text table rendering for CLI output

use console::Style;
use loccountlib::{CountResult, LocStats};

const NAME_WIDTH: usize = 48;
const CELL_WIDTH: usize = 9;
const COLUMNS: [&str; 4] = ["Code", "Comment", "Blank", "Total"];

/// Truncate a name to fit within max_len, adding ".." prefix if needed
fn truncate_name(name: &str, max_len: usize) -> String {
    let chars: Vec<char> = name.chars().collect();
    if chars.len() > max_len {
        let tail: String = chars[chars.len() - (max_len - 2)..].iter().collect();
        format!("..{tail}")
    } else {
        name.to_string()
    }
}

fn format_row(name: &str, stats: &LocStats) -> String {
    let name = truncate_name(name, NAME_WIDTH - 2);
    format!(
        "{:<name_w$}{:>cell_w$}{:>cell_w$}{:>cell_w$}{:>cell_w$}",
        name,
        stats.code,
        stats.comment,
        stats.blank,
        stats.total(),
        name_w = NAME_WIDTH,
        cell_w = CELL_WIDTH,
    )
}

/// Render per-file rows followed by a total row.
pub fn render_stats_table(result: &CountResult) -> String {
    let bold = Style::new().bold();
    let width = NAME_WIDTH + CELL_WIDTH * COLUMNS.len();

    let mut header = format!("{:<width$}", "File", width = NAME_WIDTH);
    for column in COLUMNS {
        header.push_str(&format!("{:>width$}", column, width = CELL_WIDTH));
    }

    let mut out = String::new();
    out.push_str(&format!("{}\n", bold.apply_to(header)));
    out.push_str(&format!("{}\n", "-".repeat(width)));

    for file in &result.files {
        out.push_str(&format_row(&file.path.to_string_lossy(), &file.stats));
        out.push('\n');
    }

    out.push_str(&format!("{}\n", "-".repeat(width)));
    let total_name = format!("Total ({} files)", result.total.file_count);
    out.push_str(&format!(
        "{}\n",
        bold.apply_to(format_row(&total_name, &result.total))
    ));

    out
}
