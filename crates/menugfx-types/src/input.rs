//! Platform-agnostic input event types.
//!
//! An input source (rotary encoder, buttons, a test script) maps its native
//! signals to these events. Debouncing and coalescing happen before this
//! point; the menu core only ever sees discrete events.

use serde::{Deserialize, Serialize};

/// A single-axis input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InputEvent {
    /// Encoder turned by a signed number of detents.
    Scroll(i32),
    /// Activate (encoder push) pressed.
    Activate,
    /// Back / cancel pressed.
    Back,
}

impl InputEvent {
    /// Parse a compact textual command, as used by scripted input sources.
    ///
    /// Accepts `+N`/`-N` (scroll), `+`/`-` (one detent), `ok`/`enter`
    /// (activate) and `back`/`esc`.
    pub fn parse(token: &str) -> Option<Self> {
        let token = token.trim();
        match token {
            "" => None,
            "+" => Some(InputEvent::Scroll(1)),
            "-" => Some(InputEvent::Scroll(-1)),
            "ok" | "enter" | "activate" => Some(InputEvent::Activate),
            "back" | "esc" => Some(InputEvent::Back),
            _ => token.parse::<i32>().ok().map(InputEvent::Scroll),
        }
    }
}
