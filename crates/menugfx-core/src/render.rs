//! Frame rendering: turns the current menu state into canvas calls.
//!
//! Every frame is drawn in the same order: title, underline, rows from the
//! top of the visible window down, then the scrollbar. Rows continue until
//! the next one would start below the panel, so a partially visible last
//! row is still drawn and left to the panel to clip.

use menugfx_types::{Canvas, Color, Result};

use crate::config::{LayoutConfig, Viewport};
use crate::layout::{self, RowColors, RowState, ScrollbarGeometry};
use crate::model::Menu;

/// Draw one frame of `menu`.
///
/// The caller clears and flushes the canvas; this only issues drawing
/// calls.
pub fn draw_menu<C: Canvas + ?Sized>(
    canvas: &mut C,
    menu: &Menu,
    config: &LayoutConfig,
) -> Result<()> {
    let viewport = Viewport::from_canvas(canvas, *config);
    let colors = &menu.colors;

    canvas.set_text_color(colors.foreground, colors.background);
    canvas.set_cursor(0, 0);
    canvas.println(menu.title())?;

    let (_, below_title) = canvas.cursor();
    let underline_y = below_title + 1;
    canvas.draw_line(
        0,
        underline_y,
        viewport.width as i32 - 1,
        underline_y,
        colors.foreground,
    )?;

    let capacity = viewport.visible_capacity();
    let bottom = viewport.height as i32;
    let mut y = below_title + viewport.layout.element_spacing as i32;
    for index in layout::visible_start(menu, capacity)..menu.len() {
        if y >= bottom {
            break;
        }
        draw_row(canvas, menu, index, y, &viewport)?;
        y += viewport.row_pitch() as i32;
    }

    if menu.show_scrollbar {
        if let Some(geometry) = ScrollbarGeometry::compute(menu, &viewport) {
            draw_scrollbar(canvas, &geometry, colors.foreground)?;
        }
    }
    Ok(())
}

fn draw_row<C: Canvas + ?Sized>(
    canvas: &mut C,
    menu: &Menu,
    index: usize,
    y: i32,
    viewport: &Viewport,
) -> Result<()> {
    let Some(item) = menu.item(index) else {
        return Ok(());
    };
    let colors = RowColors::for_state(RowState::of(menu, index), &menu.colors);

    if let Some(fill) = colors.fill {
        let w = viewport.width.saturating_sub(viewport.layout.value_margin);
        canvas.fill_rect(0, y, w, viewport.layout.glyph_height, fill)?;
    }

    canvas.set_cursor(0, y);
    canvas.set_text_color(colors.name.0, colors.name.1);
    canvas.print(item.name())?;

    let text = layout::format_value(item.value());
    if text.is_empty() {
        return Ok(());
    }
    let (w, _) = canvas.text_bounds(&text);
    canvas.set_cursor(layout::value_x(viewport, w), y);
    canvas.set_text_color(colors.value.0, colors.value.1);
    canvas.print(&text)
}

fn draw_scrollbar<C: Canvas + ?Sized>(
    canvas: &mut C,
    g: &ScrollbarGeometry,
    color: Color,
) -> Result<()> {
    let track_bottom = g.track_top + g.track_len as i32 - 1;
    canvas.draw_vline(g.track_x, g.track_top, g.track_len, color)?;
    canvas.draw_hline(g.thumb_x, g.track_top, g.width, color)?;
    canvas.draw_hline(g.thumb_x, track_bottom, g.width, color)?;
    canvas.draw_rect(g.thumb_x, g.thumb_top, g.width, g.thumb_len, color)
}
