//! Fixed-grid text layout.
//!
//! Every glyph occupies one `hstep` x `vstep` cell. Text flows left to
//! right and wraps when the cursor passes the right margin. Wrapping is
//! purely by column: words split wherever the margin falls, and a newline
//! character takes up a cell like any other glyph.

/// Viewport width in pixels.
pub const WIDTH: i32 = 800;

/// Viewport height in pixels.
pub const HEIGHT: i32 = 600;

/// Horizontal advance per glyph.
pub const HSTEP: i32 = 13;

/// Vertical advance per line.
pub const VSTEP: i32 = 18;

/// One glyph placed on the page, in page coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PositionEntry {
    pub x: i32,
    pub y: i32,
    pub glyph: char,
}

/// Cell and viewport dimensions used by [`layout_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridMetrics {
    pub width: i32,
    pub hstep: i32,
    pub vstep: i32,
}

impl Default for GridMetrics {
    fn default() -> Self {
        Self {
            width: WIDTH,
            hstep: HSTEP,
            vstep: VSTEP,
        }
    }
}

impl GridMetrics {
    /// Number of glyphs that fit on one row before the cursor wraps.
    ///
    /// The cursor wraps once it moves past `width - hstep`, so a row is
    /// one cell narrower than `width / hstep`. Always at least 1.
    pub fn columns(&self) -> usize {
        ((self.width - self.hstep) / self.hstep).max(1) as usize
    }
}

/// Lay out `text` with the default 800px grid of 13x18 cells.
pub fn layout(text: &str) -> Vec<PositionEntry> {
    layout_with(text, &GridMetrics::default())
}

/// Lay out `text` on the given grid.
///
/// The cursor starts at `(hstep, vstep)`. Entries come back in reading
/// order, one per `char` of the input.
pub fn layout_with(text: &str, metrics: &GridMetrics) -> Vec<PositionEntry> {
    let mut display_list = Vec::with_capacity(text.len());
    let mut cursor_x = metrics.hstep;
    let mut cursor_y = metrics.vstep;

    for glyph in text.chars() {
        display_list.push(PositionEntry {
            x: cursor_x,
            y: cursor_y,
            glyph,
        });
        cursor_x = cursor_x.saturating_add(metrics.hstep);
        if cursor_x > metrics.width - metrics.hstep {
            cursor_x = metrics.hstep;
            cursor_y = cursor_y.saturating_add(metrics.vstep);
        }
    }

    display_list
}

/// Page height covered by a display list: the bottom edge of its last row.
pub fn content_height(display_list: &[PositionEntry], vstep: i32) -> i32 {
    display_list
        .last()
        .map_or(0, |entry| entry.y.saturating_add(vstep))
}
