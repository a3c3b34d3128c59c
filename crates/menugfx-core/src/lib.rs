//! menugfx-core: a scrollable, value-editable menu for small pixel displays.
//!
//! The core is a state machine over a [`MenuTree`] plus a pure layout pass
//! that turns the active [`Menu`] into drawing calls on any
//! [`Canvas`](menugfx_types::Canvas). A single-axis input source drives it:
//! scroll ticks move the cursor (or adjust the value being edited) and an
//! activate press toggles editing or descends into a submenu.
//!
//! All rendering goes through the `Canvas` trait. Nothing here owns global
//! state; a [`MenuSession`] is the explicit context passed around by the
//! application's control loop.

pub mod config;
pub mod editor;
pub mod layout;
pub mod model;
pub mod render;
pub mod scroll;
pub mod session;
pub mod tree;

#[cfg(test)]
pub(crate) mod test_utils;

pub use config::{ItemSpec, LayoutConfig, MenuSpec, OptionSpec, ValueSpec, Viewport};
pub use editor::Adjustment;
pub use model::{
    EnumOption, Menu, MenuColors, MenuId, MenuItem, Payload, SubmenuLink, Value, ValueKind,
};
pub use session::{MenuSession, Response};
pub use tree::MenuTree;

pub use menugfx_types::{Canvas, Color, InputEvent, MenuError, Result};
