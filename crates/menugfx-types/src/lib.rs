//! Foundation types for menugfx.
//!
//! This crate contains the platform-agnostic types shared by every menugfx
//! crate: colors, input events, the `Canvas` drawing trait, and error types.

pub mod canvas;
pub mod color;
pub mod error;
pub mod input;

pub use canvas::Canvas;
pub use color::Color;
pub use error::{MenuError, Result};
pub use input::InputEvent;
