//! Shared test utilities for menugfx-core.
//!
//! Provides a [`MockCanvas`] that records all draw calls for assertion.

use menugfx_types::{Canvas, Color, MenuError, Result};

/// Width of one glyph in the mock's fixed-pitch font.
pub const MOCK_GLYPH_WIDTH: u32 = 6;

/// A recorded draw call from the mock canvas.
#[derive(Debug, Clone, PartialEq)]
#[allow(dead_code)]
pub enum DrawCall {
    Text {
        text: String,
        x: i32,
        y: i32,
        fg: Color,
        bg: Color,
    },
    Line {
        x0: i32,
        y0: i32,
        x1: i32,
        y1: i32,
        color: Color,
    },
    Rect {
        x: i32,
        y: i32,
        w: u32,
        h: u32,
        color: Color,
    },
    FillRect {
        x: i32,
        y: i32,
        w: u32,
        h: u32,
        color: Color,
    },
}

/// A mock canvas that records all draw calls for test assertions.
pub struct MockCanvas {
    pub calls: Vec<DrawCall>,
    /// Make every `print` fail, as a disconnected panel would.
    pub fail_prints: bool,
    width: u32,
    height: u32,
    glyph_height: u32,
    cursor: (i32, i32),
    text_color: (Color, Color),
}

impl MockCanvas {
    /// A 128x64 monochrome OLED.
    pub fn new() -> Self {
        Self::with_size(128, 64)
    }

    pub fn with_size(width: u32, height: u32) -> Self {
        Self {
            calls: Vec::new(),
            fail_prints: false,
            width,
            height,
            glyph_height: 8,
            cursor: (0, 0),
            text_color: (Color::WHITE, Color::BLACK),
        }
    }

    pub fn with_glyph_height(mut self, glyph_height: u32) -> Self {
        self.glyph_height = glyph_height;
        self
    }

    /// Texts drawn, in call order.
    pub fn texts(&self) -> Vec<&str> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                DrawCall::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// The first text call exactly matching `needle`.
    pub fn find_text(&self, needle: &str) -> Option<&DrawCall> {
        self.calls
            .iter()
            .find(|c| matches!(c, DrawCall::Text { text, .. } if text == needle))
    }

    /// Check if any text call contains the given substring.
    pub fn has_text(&self, needle: &str) -> bool {
        self.texts().iter().any(|t| t.contains(needle))
    }

    /// Count of `FillRect` calls.
    pub fn fill_rect_count(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, DrawCall::FillRect { .. }))
            .count()
    }

    /// Count of `Rect` calls.
    pub fn rect_count(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, DrawCall::Rect { .. }))
            .count()
    }
}

impl Canvas for MockCanvas {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn glyph_height(&self) -> u32 {
        self.glyph_height
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
        if self.fail_prints {
            return Err(MenuError::Canvas("panel not responding".into()));
        }
        let (x, y) = self.cursor;
        let (fg, bg) = self.text_color;
        self.calls.push(DrawCall::Text {
            text: text.to_string(),
            x,
            y,
            fg,
            bg,
        });
        self.cursor.0 += self.text_bounds(text).0 as i32;
        Ok(())
    }

    fn text_bounds(&self, text: &str) -> (u32, u32) {
        (
            text.chars().count() as u32 * MOCK_GLYPH_WIDTH,
            self.glyph_height,
        )
    }

    fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: Color) -> Result<()> {
        self.calls.push(DrawCall::Line {
            x0,
            y0,
            x1,
            y1,
            color,
        });
        Ok(())
    }

    fn draw_rect(&mut self, x: i32, y: i32, w: u32, h: u32, color: Color) -> Result<()> {
        self.calls.push(DrawCall::Rect { x, y, w, h, color });
        Ok(())
    }

    fn fill_rect(&mut self, x: i32, y: i32, w: u32, h: u32, color: Color) -> Result<()> {
        self.calls.push(DrawCall::FillRect { x, y, w, h, color });
        Ok(())
    }
}
