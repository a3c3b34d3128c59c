//! In-place value editing.
//!
//! A menu is either browsing or editing. While editing, scroll ticks adjust
//! the selected value instead of moving the cursor. Numeric and enumerated
//! values clamp silently at their bounds; text and submenu values cannot be
//! edited, and trying to do so drops the menu back to browsing.

use menugfx_types::{MenuError, Result};

use crate::model::{Menu, MenuItem, Payload};

/// Result of a successful adjustment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Adjustment {
    /// The payload changed.
    Changed,
    /// The payload was already at the bound in the requested direction.
    Unchanged,
}

/// Enter or leave edit mode on the selected item.
///
/// Does nothing unless the selected item is editable. Returns the new
/// editing state.
pub fn toggle_edit(menu: &mut Menu) -> bool {
    let editable = menu.selected_item().is_some_and(MenuItem::is_editable);
    if editable {
        menu.editing = !menu.editing;
        log::debug!(
            "{:?}: {} editing {:?}",
            menu.title(),
            if menu.editing { "started" } else { "stopped" },
            menu.selected_item().map(MenuItem::name).unwrap_or_default()
        );
    }
    menu.editing
}

/// Step `item`'s value by `delta` units of its kind.
///
/// Int and Float move by `delta * step` and clamp to `[min, max]`; Enum moves
/// by `delta` options and clamps to the table. Text and Submenu values
/// return an error and are left untouched. The change hook fires only when
/// the payload actually changed.
pub fn adjust(item: &mut MenuItem, delta: i32) -> Result<Adjustment> {
    let name = item.name().to_string();
    let value = item.value_mut();
    let (min, max, step) = (value.min(), value.max(), value.step());

    let changed = match value.payload_mut() {
        Payload::Int(v) => {
            // Integral bounds, so truncation can never step outside them.
            let (lo, hi) = ((min as f64).ceil(), (max as f64).floor());
            let next = (*v as f64 + delta as f64 * step as f64)
                .trunc()
                .max(lo)
                .min(hi) as i32;
            std::mem::replace(v, next) != next
        },
        Payload::Float(v) => {
            let next = (*v + delta as f32 * step).max(min).min(max);
            std::mem::replace(v, next) != next
        },
        Payload::Enum { options, current } => {
            let last = options.len().saturating_sub(1) as i64;
            let next = (*current as i64 + delta as i64).clamp(0, last) as usize;
            std::mem::replace(current, next) != next
        },
        Payload::Text(_) => {
            return Err(MenuError::UnsupportedEdit(format!(
                "{name:?} holds text, which cannot be edited in place"
            )));
        },
        Payload::Submenu(_) => {
            return Err(MenuError::InvalidOperation(format!(
                "{name:?} opens a menu and has no value to edit"
            )));
        },
    };

    if !changed {
        return Ok(Adjustment::Unchanged);
    }
    if let Some(hook) = value.on_change {
        hook(value);
    }
    Ok(Adjustment::Changed)
}

/// Adjust the selected item of `menu`, leaving edit mode if its kind cannot
/// be edited.
pub fn adjust_selected(menu: &mut Menu, delta: i32) -> Result<Adjustment> {
    let Some(item) = menu.selected_item_mut() else {
        return Ok(Adjustment::Unchanged);
    };
    match adjust(item, delta) {
        Err(e) if e.is_recoverable_edit() => {
            menu.editing = false;
            log::warn!("{:?}: {e}; leaving edit mode", menu.title());
            Err(e)
        },
        other => other,
    }
}
