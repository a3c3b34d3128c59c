//! Pure layout math: visible window, row states, value text and scrollbar
//! geometry.
//!
//! Nothing in here draws. [`render`](crate::render) feeds these results to a
//! canvas, and [`scroll`](crate::scroll) reuses the window math so the cursor
//! and the picture agree.

use menugfx_types::Color;

use crate::config::Viewport;
use crate::model::{Menu, MenuColors, Payload, Value};

// -- Visible window -----------------------------------------------------------

/// Whether the last row is pinned to the bottom of the viewport.
///
/// Looping wins over pinning: a looping menu scrolls over every item.
pub fn pins_last_row(menu: &Menu) -> bool {
    menu.clamp_scroll && !menu.loop_scroll
}

/// Index of the first row drawn.
pub fn visible_start(menu: &Menu, capacity: usize) -> usize {
    if !pins_last_row(menu) {
        return menu.scroll_offset;
    }
    let len = menu.len();
    if len <= capacity {
        0
    } else {
        menu.scroll_offset.min(len - capacity)
    }
}

/// Largest scroll offset reachable without looping.
pub fn max_scroll_offset(menu: &Menu, capacity: usize) -> usize {
    let last = menu.len().saturating_sub(1);
    if pins_last_row(menu) {
        menu.len().saturating_sub(capacity).min(last)
    } else {
        last
    }
}

/// Number of distinct scroll positions shown by the scrollbar; never zero.
pub fn scroll_segments(menu: &Menu, capacity: usize) -> usize {
    if pins_last_row(menu) {
        (menu.len() + 1).saturating_sub(capacity).max(1)
    } else {
        menu.len().max(1)
    }
}

// -- Rows ---------------------------------------------------------------------

/// Visual state of one row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowState {
    Normal,
    Selected,
    SelectedEditing,
}

impl RowState {
    pub fn of(menu: &Menu, index: usize) -> Self {
        if menu.selected_index() != index {
            return RowState::Normal;
        }
        let editable = menu.item(index).is_some_and(|i| i.is_editable());
        if menu.is_editing() && editable {
            RowState::SelectedEditing
        } else {
            RowState::Selected
        }
    }
}

/// Colors for the parts of one row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowColors {
    /// Background painted behind the whole row, if any.
    pub fill: Option<Color>,
    /// `(fg, bg)` of the item name.
    pub name: (Color, Color),
    /// `(fg, bg)` of the value text.
    pub value: (Color, Color),
}

impl RowColors {
    pub fn for_state(state: RowState, colors: &MenuColors) -> Self {
        let normal = (colors.foreground, colors.background);
        let inverted = (colors.selected_foreground, colors.selected_background);
        match state {
            RowState::Normal => Self {
                fill: None,
                name: normal,
                value: normal,
            },
            RowState::Selected => Self {
                fill: Some(colors.selected_background),
                name: inverted,
                value: inverted,
            },
            // The value under edit flips back so it stands out of the bar.
            RowState::SelectedEditing => Self {
                fill: Some(colors.selected_background),
                name: inverted,
                value: normal,
            },
        }
    }
}

/// Display text of a value.
pub fn format_value(value: &Value) -> String {
    match value.payload() {
        Payload::Int(v) => {
            let sign = if value.plus_sign && *v > 0 { "+" } else { "" };
            format!("{}{sign}{v}{}", value.prefix, value.suffix)
        },
        Payload::Float(v) => {
            let sign = if value.plus_sign && *v > 0.0 { "+" } else { "" };
            let number = match value.precision {
                Some(digits) => format!("{v:.digits$}"),
                None => v.to_string(),
            };
            format!("{}{sign}{number}{}", value.prefix, value.suffix)
        },
        Payload::Text(s) => s.clone(),
        Payload::Enum { options, current } => options
            .get(*current)
            .map(|o| o.label.clone())
            .unwrap_or_default(),
        Payload::Submenu(_) => format!("{}{}", value.prefix, value.suffix),
    }
}

/// X position that right-aligns text of `text_width` pixels.
pub fn value_x(viewport: &Viewport, text_width: u32) -> i32 {
    viewport.width as i32 - text_width as i32 - viewport.layout.value_margin as i32 - 1
}

// -- Scrollbar ----------------------------------------------------------------

/// Scrollbar placement in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollbarGeometry {
    /// X of the track's center line.
    pub track_x: i32,
    pub track_top: i32,
    pub track_len: u32,
    /// Width of the end caps and thumb.
    pub width: u32,
    pub thumb_x: i32,
    pub thumb_top: i32,
    pub thumb_len: u32,
}

impl ScrollbarGeometry {
    /// Compute the scrollbar for `menu`, or `None` if the panel has no room
    /// for a track.
    pub fn compute(menu: &Menu, viewport: &Viewport) -> Option<Self> {
        let layout = &viewport.layout;
        let width = layout.scrollbar_width.max(1);
        let half = (width / 2) as i32;
        let track_x = viewport.width as i32 - half - 2;
        let track_top = layout.title_height as i32 + 2;
        let mut track_len = viewport.height as i32 - 2 - track_top;
        // Even length keeps thumb spacing consistent for odd and even counts.
        track_len -= track_len % 2;
        if track_len <= 0 {
            return None;
        }
        let track_len = track_len as u32;

        let capacity = viewport.visible_capacity();
        let segments = scroll_segments(menu, capacity) as u64;
        let start = visible_start(menu, capacity) as u64;

        let thumb_len = ((track_len as u64 / segments) as u32).max(1);
        let offset = (start * track_len as u64 / segments) as u32;
        let offset = offset.min(track_len - thumb_len);

        Some(Self {
            track_x,
            track_top,
            track_len,
            width,
            thumb_x: track_x - half,
            thumb_top: track_top + 1 + offset as i32,
            thumb_len,
        })
    }
}
