//! Plain-text rendering of preview pages

use crate::core::preview::Page;
use std::fmt::Write;

/// Widest a rendered cell may be before it is truncated
const MAX_CELL_WIDTH: usize = 32;

/// Render a page as an aligned text grid followed by a page footer
pub fn render_page(page: &Page<'_>) -> String {
    let header: Vec<String> = page.column_names().into_iter().map(clip).collect();
    let rows: Vec<Vec<String>> = page
        .rows()
        .map(|row| row.into_iter().map(|cell| clip(&cell.to_string())).collect())
        .collect();

    let mut widths: Vec<usize> = header.iter().map(|h| h.chars().count()).collect();
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    push_line(&mut out, &header, &widths);
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    push_line(&mut out, &rule, &widths);
    for row in &rows {
        push_line(&mut out, row, &widths);
    }

    let _ = write!(
        out,
        "Page {} of {} (rows {}-{})",
        page.number(),
        page.total_pages(),
        page.row_range().start + 1,
        page.row_range().end
    );
    out
}

fn push_line(out: &mut String, cells: &[String], widths: &[usize]) {
    let line = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{cell:<width$}", width = *width))
        .collect::<Vec<_>>()
        .join(" | ");
    out.push_str(line.trim_end());
    out.push('\n');
}

fn clip(text: &str) -> String {
    if text.chars().count() <= MAX_CELL_WIDTH {
        return text.to_string();
    }
    let mut clipped: String = text.chars().take(MAX_CELL_WIDTH - 1).collect();
    clipped.push('…');
    clipped
}
