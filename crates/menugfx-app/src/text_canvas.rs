//! Character-grid canvas for terminals.
//!
//! Pixel coordinates are downsampled onto a grid of cells, each
//! [`CELL_WIDTH`] x [`CELL_HEIGHT`] pixels. A glyph is one cell wide and two
//! cells tall, so the spacing between menu rows survives as a blank line.
//! Light fills mark cells as inverted; those show up as reverse video on an
//! ANSI terminal, or as `.` in plain output.

use menugfx_core::{Canvas, Color, Result};

pub const CELL_WIDTH: u32 = 6;
pub const CELL_HEIGHT: u32 = 4;
const GLYPH_HEIGHT: u32 = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Cell {
    ch: char,
    inverted: bool,
}

const BLANK: Cell = Cell {
    ch: ' ',
    inverted: false,
};

pub struct TextCanvas {
    width: u32,
    height: u32,
    cols: usize,
    cells: Vec<Cell>,
    cursor: (i32, i32),
    text_color: (Color, Color),
}

impl TextCanvas {
    /// A canvas emulating a `width` x `height` pixel panel.
    pub fn new(width: u32, height: u32) -> Self {
        let cols = width.div_ceil(CELL_WIDTH) as usize;
        let rows = height.div_ceil(CELL_HEIGHT) as usize;
        Self {
            width,
            height,
            cols,
            cells: vec![BLANK; cols * rows],
            cursor: (0, 0),
            text_color: (Color::WHITE, Color::BLACK),
        }
    }

    fn rows(&self) -> usize {
        self.cells.len() / self.cols.max(1)
    }

    /// Cell holding pixel `(x, y)`, if on the panel.
    fn cell_mut(&mut self, x: i32, y: i32) -> Option<&mut Cell> {
        if x < 0 || y < 0 || x as u32 >= self.width || y as u32 >= self.height {
            return None;
        }
        let col = x as usize / CELL_WIDTH as usize;
        let row = y as usize / CELL_HEIGHT as usize;
        let cols = self.cols;
        self.cells.get_mut(row * cols + col)
    }

    /// Visit every cell touched by the pixel rectangle.
    fn for_cells(&mut self, x: i32, y: i32, w: u32, h: u32, mut f: impl FnMut(&mut Cell)) {
        if w == 0 || h == 0 {
            return;
        }
        let x1 = x.saturating_add(w as i32 - 1);
        let y1 = y.saturating_add(h as i32 - 1);
        let mut py = y;
        while py <= y1 {
            let mut px = x;
            while px <= x1 {
                if let Some(cell) = self.cell_mut(px, py) {
                    f(cell);
                }
                px += CELL_WIDTH as i32;
            }
            // The right edge may land in a cell the stride skipped.
            if let Some(cell) = self.cell_mut(x1, py) {
                f(cell);
            }
            py += CELL_HEIGHT as i32;
        }
        let mut px = x;
        while px <= x1 {
            if let Some(cell) = self.cell_mut(px, y1) {
                f(cell);
            }
            px += CELL_WIDTH as i32;
        }
        if let Some(cell) = self.cell_mut(x1, y1) {
            f(cell);
        }
    }

    fn plot(&mut self, x: i32, y: i32, ch: char) {
        if let Some(cell) = self.cell_mut(x, y) {
            cell.ch = ch;
        }
    }

    /// Render the grid, one line per cell row, trailing blanks trimmed.
    ///
    /// With `ansi`, inverted cells are wrapped in reverse-video escapes.
    pub fn render(&self, ansi: bool) -> String {
        let mut out = String::new();
        for row in 0..self.rows() {
            let cells = &self.cells[row * self.cols..(row + 1) * self.cols];
            let mut line = String::new();
            let mut reversed = false;
            for cell in cells {
                if ansi {
                    if cell.inverted != reversed {
                        line.push_str(if cell.inverted { "\x1b[7m" } else { "\x1b[0m" });
                        reversed = cell.inverted;
                    }
                    line.push(cell.ch);
                } else if cell.inverted && cell.ch == ' ' {
                    line.push('.');
                } else {
                    line.push(cell.ch);
                }
            }
            if reversed {
                line.push_str("\x1b[0m");
            }
            out.push_str(line.trim_end_matches(' '));
            out.push('\n');
        }
        out
    }
}

impl Canvas for TextCanvas {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn glyph_height(&self) -> u32 {
        GLYPH_HEIGHT
    }

    fn set_cursor(&mut self, x: i32, y: i32) {
        self.cursor = (x, y);
    }

    fn cursor(&self) -> (i32, i32) {
        self.cursor
    }

    fn set_text_color(&mut self, fg: Color, bg: Color) {
        self.text_color = (fg, bg);
    }

    fn print(&mut self, text: &str) -> Result<()> {
        let inverted = self.text_color.1.is_light();
        let (mut x, y) = self.cursor;
        for ch in text.chars() {
            if let Some(cell) = self.cell_mut(x, y) {
                *cell = Cell { ch, inverted };
            }
            x += CELL_WIDTH as i32;
        }
        self.cursor.0 = x;
        Ok(())
    }

    fn text_bounds(&self, text: &str) -> (u32, u32) {
        (text.chars().count() as u32 * CELL_WIDTH, GLYPH_HEIGHT)
    }

    fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, _color: Color) -> Result<()> {
        let (dx, dy) = ((x1 - x0).abs(), (y1 - y0).abs());
        let ch = match (dx, dy) {
            (_, 0) => '-',
            (0, _) => '|',
            _ => '*',
        };
        let steps = dx.max(dy).max(1);
        for i in 0..=steps {
            let x = x0 + (x1 - x0) * i / steps;
            let y = y0 + (y1 - y0) * i / steps;
            self.plot(x, y, ch);
        }
        Ok(())
    }

    fn draw_rect(&mut self, x: i32, y: i32, w: u32, h: u32, _color: Color) -> Result<()> {
        self.for_cells(x, y, w, h, |cell| cell.ch = '#');
        Ok(())
    }

    fn fill_rect(&mut self, x: i32, y: i32, w: u32, h: u32, color: Color) -> Result<()> {
        let inverted = color.is_light();
        self.for_cells(x, y, w, h, |cell| *cell = Cell { ch: ' ', inverted });
        Ok(())
    }

    fn draw_hline(&mut self, x: i32, y: i32, w: u32, color: Color) -> Result<()> {
        if w == 0 {
            return Ok(());
        }
        self.draw_line(x, y, x + w as i32 - 1, y, color)
    }

    fn draw_vline(&mut self, x: i32, y: i32, h: u32, color: Color) -> Result<()> {
        if h == 0 {
            return Ok(());
        }
        self.draw_line(x, y, x, y + h as i32 - 1, color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(canvas: &TextCanvas) -> Vec<String> {
        canvas.render(false).lines().map(str::to_string).collect()
    }

    #[test]
    fn grid_matches_panel_size() {
        let canvas = TextCanvas::new(128, 64);
        assert_eq!(canvas.cols, 22);
        assert_eq!(canvas.rows(), 16);
        assert_eq!(lines(&canvas).len(), 16);
    }

    #[test]
    fn print_places_text_by_pixel() {
        let mut canvas = TextCanvas::new(128, 64);
        canvas.set_cursor(12, 8);
        canvas.print("Hi").unwrap();
        assert_eq!(lines(&canvas)[2], "  Hi");
        assert_eq!(canvas.cursor(), (24, 8));
    }

    #[test]
    fn text_off_panel_is_clipped() {
        let mut canvas = TextCanvas::new(30, 16);
        canvas.set_cursor(18, 0);
        canvas.print("abcdef").unwrap();
        assert_eq!(lines(&canvas)[0], "   ab");
        canvas.set_cursor(0, 20);
        canvas.print("gone").unwrap();
        assert!(lines(&canvas).iter().all(|l| !l.contains("gone")));
    }

    #[test]
    fn light_fill_inverts_cells() {
        let mut canvas = TextCanvas::new(36, 16);
        canvas.fill_rect(0, 4, 18, 8, Color::WHITE).unwrap();
        canvas.set_text_color(Color::BLACK, Color::WHITE);
        canvas.set_cursor(0, 4);
        canvas.print("ok").unwrap();
        let out = lines(&canvas);
        assert_eq!(out[1], "ok.");
        assert_eq!(out[2], "...");
    }

    #[test]
    fn ansi_wraps_inverted_runs() {
        let mut canvas = TextCanvas::new(12, 4);
        canvas.set_text_color(Color::BLACK, Color::WHITE);
        canvas.print("ab").unwrap();
        assert_eq!(canvas.render(true), "\x1b[7mab\x1b[0m\n");
    }

    #[test]
    fn dark_fill_clears() {
        let mut canvas = TextCanvas::new(36, 8);
        canvas.print("xyz").unwrap();
        canvas.clear(Color::BLACK).unwrap();
        assert!(lines(&canvas).iter().all(String::is_empty));
    }

    #[test]
    fn lines_pick_glyphs_by_direction() {
        let mut canvas = TextCanvas::new(36, 24);
        canvas.draw_hline(0, 0, 36, Color::WHITE).unwrap();
        canvas.draw_vline(30, 4, 20, Color::WHITE).unwrap();
        let out = lines(&canvas);
        assert_eq!(out[0], "------");
        assert!(out[1..].iter().all(|l| l.ends_with('|')));
    }

    #[test]
    fn rect_marks_outline_cells() {
        let mut canvas = TextCanvas::new(36, 16);
        canvas.draw_rect(30, 4, 3, 8, Color::WHITE).unwrap();
        let out = lines(&canvas);
        assert_eq!(out[1], "     #");
        assert_eq!(out[2], "     #");
        assert_eq!(out[3], "");
    }
}
