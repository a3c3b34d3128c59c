//! Scroll offset and selection tracking.

use menugfx_types::Result;

use crate::config::Viewport;
use crate::editor::{self, Adjustment};
use crate::layout;
use crate::model::Menu;

/// Apply an encoder delta to `menu`.
///
/// While editing, the delta adjusts the selected value instead (see
/// [`editor::adjust_selected`]). Otherwise the scroll offset moves by
/// `delta` rows and is then normalized:
///
/// - looping menus wrap modulo the item count;
/// - other menus clamp to `[0, last]`, where `last` is the final item, or
///   the offset that pins the final item to the bottom of the viewport when
///   `clamp_scroll` is set.
///
/// Without `maintain_selection` the selection follows the offset. With it,
/// the selection stays put unless it would leave the visible window, in
/// which case it moves to the nearest visible row.
pub fn scroll(menu: &mut Menu, delta: i32, viewport: &Viewport) -> Result<()> {
    if menu.is_empty() {
        return Ok(());
    }
    if menu.editing {
        return editor::adjust_selected(menu, delta).map(|_: Adjustment| ());
    }

    let capacity = viewport.visible_capacity();
    let len = menu.len() as i64;
    let raw = menu.scroll_offset as i64 + delta as i64;
    let next = if menu.loop_scroll {
        raw.rem_euclid(len)
    } else {
        raw.clamp(0, layout::max_scroll_offset(menu, capacity) as i64)
    };
    menu.scroll_offset = next as usize;

    if menu.maintain_selection {
        keep_selection_visible(menu, capacity);
    } else {
        menu.selected = menu.scroll_offset;
    }
    log::trace!(
        "{:?}: scroll {delta:+} -> offset {} selected {}",
        menu.title(),
        menu.scroll_offset,
        menu.selected
    );
    Ok(())
}

fn keep_selection_visible(menu: &mut Menu, capacity: usize) {
    let first = layout::visible_start(menu, capacity);
    let last = (first + capacity.max(1) - 1).min(menu.len() - 1);
    menu.selected = menu.selected.clamp(first, last.max(first));
}
