//! The drawing surface the menu renderer targets.
//!
//! Modeled on the small-display graphics libraries found on
//! microcontrollers: a text cursor with a current color pair, plus a handful
//! of line and rectangle primitives. Implementations wrap a real panel
//! driver, an in-memory framebuffer, or a recording mock for tests.

use crate::color::Color;
use crate::error::Result;

/// Pixel-drawing capability consumed by the renderer.
///
/// Coordinates are in pixels with the origin at the top-left corner. Text is
/// drawn with its top-left corner at the cursor, and printing advances the
/// cursor horizontally by the width of the printed text.
pub trait Canvas {
    /// Panel width in pixels.
    fn width(&self) -> u32;

    /// Panel height in pixels.
    fn height(&self) -> u32;

    /// Height of one line of text in pixels.
    fn glyph_height(&self) -> u32;

    /// Move the text cursor.
    fn set_cursor(&mut self, x: i32, y: i32);

    /// Current text cursor position.
    fn cursor(&self) -> (i32, i32);

    /// Set the foreground and background used by subsequent text.
    fn set_text_color(&mut self, fg: Color, bg: Color);

    /// Print text at the cursor and advance it.
    fn print(&mut self, text: &str) -> Result<()>;

    /// Bounding box `(w, h)` the text would occupy if printed.
    fn text_bounds(&self, text: &str) -> (u32, u32);

    /// Draw a one-pixel line between two points (inclusive).
    fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: Color) -> Result<()>;

    /// Draw a one-pixel rectangle outline.
    fn draw_rect(&mut self, x: i32, y: i32, w: u32, h: u32, color: Color) -> Result<()>;

    /// Fill a rectangle.
    fn fill_rect(&mut self, x: i32, y: i32, w: u32, h: u32, color: Color) -> Result<()>;

    /// Print text, then move the cursor to the start of the next line.
    fn println(&mut self, text: &str) -> Result<()> {
        self.print(text)?;
        let (_, y) = self.cursor();
        self.set_cursor(0, y + self.glyph_height() as i32);
        Ok(())
    }

    /// Horizontal line of `w` pixels starting at `(x, y)`.
    fn draw_hline(&mut self, x: i32, y: i32, w: u32, color: Color) -> Result<()> {
        if w == 0 {
            return Ok(());
        }
        self.fill_rect(x, y, w, 1, color)
    }

    /// Vertical line of `h` pixels starting at `(x, y)`.
    fn draw_vline(&mut self, x: i32, y: i32, h: u32, color: Color) -> Result<()> {
        if h == 0 {
            return Ok(());
        }
        self.fill_rect(x, y, 1, h, color)
    }

    /// Fill the whole surface.
    fn clear(&mut self, color: Color) -> Result<()> {
        let (w, h) = (self.width(), self.height());
        self.fill_rect(0, 0, w, h, color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Minimal canvas that only tracks fills, for exercising the provided
    /// methods.
    struct FillLog {
        cursor: (i32, i32),
        fills: Vec<(i32, i32, u32, u32)>,
        printed: Vec<String>,
    }

    impl FillLog {
        fn new() -> Self {
            Self {
                cursor: (0, 0),
                fills: Vec::new(),
                printed: Vec::new(),
            }
        }
    }

    impl Canvas for FillLog {
        fn width(&self) -> u32 {
            128
        }
        fn height(&self) -> u32 {
            64
        }
        fn glyph_height(&self) -> u32 {
            8
        }
        fn set_cursor(&mut self, x: i32, y: i32) {
            self.cursor = (x, y);
        }
        fn cursor(&self) -> (i32, i32) {
            self.cursor
        }
        fn set_text_color(&mut self, _fg: Color, _bg: Color) {}
        fn print(&mut self, text: &str) -> Result<()> {
            self.printed.push(text.to_string());
            self.cursor.0 += self.text_bounds(text).0 as i32;
            Ok(())
        }
        fn text_bounds(&self, text: &str) -> (u32, u32) {
            (text.chars().count() as u32 * 6, 8)
        }
        fn draw_line(&mut self, _: i32, _: i32, _: i32, _: i32, _: Color) -> Result<()> {
            Ok(())
        }
        fn draw_rect(&mut self, _: i32, _: i32, _: u32, _: u32, _: Color) -> Result<()> {
            Ok(())
        }
        fn fill_rect(&mut self, x: i32, y: i32, w: u32, h: u32, _: Color) -> Result<()> {
            self.fills.push((x, y, w, h));
            Ok(())
        }
    }

    #[test]
    fn println_moves_to_next_line() {
        let mut c = FillLog::new();
        c.set_cursor(10, 4);
        c.println("Options").unwrap();
        assert_eq!(c.cursor(), (0, 12));
        assert_eq!(c.printed, vec!["Options".to_string()]);
    }

    #[test]
    fn fast_lines_are_one_pixel_fills() {
        let mut c = FillLog::new();
        c.draw_hline(1, 2, 30, Color::WHITE).unwrap();
        c.draw_vline(5, 6, 20, Color::WHITE).unwrap();
        assert_eq!(c.fills, vec![(1, 2, 30, 1), (5, 6, 1, 20)]);
    }

    #[test]
    fn zero_length_lines_draw_nothing() {
        let mut c = FillLog::new();
        c.draw_hline(0, 0, 0, Color::WHITE).unwrap();
        c.draw_vline(0, 0, 0, Color::WHITE).unwrap();
        assert!(c.fills.is_empty());
    }

    #[test]
    fn clear_fills_whole_surface() {
        let mut c = FillLog::new();
        c.clear(Color::BLACK).unwrap();
        assert_eq!(c.fills, vec![(0, 0, 128, 64)]);
    }
}
