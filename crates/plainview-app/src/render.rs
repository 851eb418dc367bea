//! Draw visible glyphs onto a character buffer.
//!
//! Each grid cell becomes one terminal column, each row one line. Entries
//! are expected in viewport coordinates, as produced by
//! `Browser::visible_entries`.

use plainview_browser::{BrowserConfig, PositionEntry};

/// Render entries into lines of text, one per grid row.
pub fn render_frame(entries: impl IntoIterator<Item = PositionEntry>, config: &BrowserConfig) -> String {
    let columns = (config.width / config.hstep).max(1) as usize;
    let rows = (config.height / config.vstep + 1).max(1) as usize;
    let mut grid = vec![vec![' '; columns]; rows];

    for entry in entries {
        let col = entry.x.saturating_sub(config.hstep).div_euclid(config.hstep);
        let row = entry.y.saturating_sub(config.vstep).div_euclid(config.vstep);
        if col < 0 || row < 0 {
            continue;
        }
        let (col, row) = (col as usize, row as usize);
        if row >= rows || col >= columns {
            continue;
        }
        // Newlines, tabs and other controls would break the grid.
        grid[row][col] = if entry.glyph.is_control() {
            ' '
        } else {
            entry.glyph
        };
    }

    let mut lines: Vec<String> = grid
        .into_iter()
        .map(|row| row.into_iter().collect::<String>().trim_end().to_string())
        .collect();
    while lines.last().is_some_and(String::is_empty) {
        lines.pop();
    }
    lines.join("\n")
}
