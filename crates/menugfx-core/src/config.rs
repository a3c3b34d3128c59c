//! Setup-time configuration: layout constants and literal menu records.
//!
//! Menus are described by plain records ([`MenuSpec`], [`ItemSpec`],
//! [`ValueSpec`]) that can be written in code or deserialized from TOML, and
//! are turned into a live [`MenuTree`](crate::MenuTree) once at startup.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use menugfx_types::{Canvas, Result};

use crate::model::MenuColors;

// -- Layout -------------------------------------------------------------------

/// Pixel constants of the menu layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Vertical gap between rows (and between the title band and row 0).
    pub element_spacing: u32,
    /// Height of one text line.
    pub glyph_height: u32,
    /// Height of the title band including its underline.
    pub title_height: u32,
    /// Width of the scrollbar thumb and end caps.
    pub scrollbar_width: u32,
    /// Gap between right-aligned value text and the right edge.
    pub value_margin: u32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            element_spacing: 4,
            glyph_height: 8,
            title_height: 9,
            scrollbar_width: 3,
            value_margin: 5,
        }
    }
}

/// Panel dimensions plus layout constants: everything geometric the scroll
/// and layout passes need.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
    pub layout: LayoutConfig,
}

impl Viewport {
    pub fn new(width: u32, height: u32, layout: LayoutConfig) -> Self {
        Self {
            width,
            height,
            layout,
        }
    }

    /// Take dimensions and glyph height from a canvas.
    ///
    /// The title band is one glyph plus the underline row, so it follows the
    /// canvas font as well.
    pub fn from_canvas<C: Canvas + ?Sized>(canvas: &C, layout: LayoutConfig) -> Self {
        let glyph_height = canvas.glyph_height();
        Self {
            width: canvas.width(),
            height: canvas.height(),
            layout: LayoutConfig {
                glyph_height,
                title_height: glyph_height + 1,
                ..layout
            },
        }
    }

    /// Number of item rows that fit below the title band.
    pub fn visible_capacity(&self) -> usize {
        let l = &self.layout;
        let usable = self
            .height
            .saturating_sub(l.title_height)
            .saturating_sub(l.element_spacing);
        let row = (l.glyph_height + l.element_spacing).max(1);
        (usable / row) as usize
    }

    /// Height of one row including its trailing gap.
    pub fn row_pitch(&self) -> u32 {
        self.layout.glyph_height + self.layout.element_spacing
    }
}

// -- Menu records -------------------------------------------------------------

fn default_true() -> bool {
    true
}

fn default_step() -> f32 {
    1.0
}

/// A menu as written in configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuSpec {
    pub title: String,
    pub items: Vec<ItemSpec>,
    #[serde(default)]
    pub selected: usize,
    #[serde(default)]
    pub scroll_offset: usize,
    #[serde(default = "default_true")]
    pub show_scrollbar: bool,
    #[serde(default)]
    pub loop_scroll: bool,
    #[serde(default)]
    pub maintain_selection: bool,
    #[serde(default)]
    pub clamp_scroll: bool,
    #[serde(default)]
    pub colors: MenuColors,
    /// Named option lists that enum items of this menu and its submenus can
    /// share through `table`.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub option_tables: BTreeMap<String, Vec<OptionSpec>>,
}

impl MenuSpec {
    /// A menu with default flags.
    pub fn new(title: impl Into<String>, items: Vec<ItemSpec>) -> Self {
        Self {
            title: title.into(),
            items,
            selected: 0,
            scroll_offset: 0,
            show_scrollbar: true,
            loop_scroll: false,
            maintain_selection: false,
            clamp_scroll: false,
            colors: MenuColors::default(),
            option_tables: BTreeMap::new(),
        }
    }

    /// Parse a menu definition from a TOML document.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }
}

/// One row as written in configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemSpec {
    pub name: String,
    #[serde(default)]
    pub editable: bool,
    #[serde(default)]
    pub prefix: String,
    #[serde(default)]
    pub suffix: String,
    #[serde(default)]
    pub plus_sign: bool,
    #[serde(flatten)]
    pub value: ValueSpec,
}

impl ItemSpec {
    pub fn new(name: impl Into<String>, value: ValueSpec) -> Self {
        Self {
            name: name.into(),
            editable: false,
            prefix: String::new(),
            suffix: String::new(),
            plus_sign: false,
            value,
        }
    }

    pub fn editable(mut self) -> Self {
        self.editable = true;
        self
    }

    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn with_plus_sign(mut self) -> Self {
        self.plus_sign = true;
        self
    }
}

/// A value as written in configuration, tagged by `kind`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ValueSpec {
    Int {
        value: i32,
        min: f32,
        max: f32,
        #[serde(default = "default_step")]
        step: f32,
    },
    Float {
        value: f32,
        min: f32,
        max: f32,
        #[serde(default = "default_step")]
        step: f32,
        #[serde(default)]
        precision: Option<usize>,
    },
    String {
        value: String,
    },
    /// Either inline `options` or the name of a shared option `table`.
    Enum {
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        options: Vec<OptionSpec>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        table: Option<String>,
        #[serde(default)]
        current: usize,
    },
    Submenu {
        menu: Box<MenuSpec>,
    },
    Back,
}

/// An enum option as written in configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptionSpec {
    pub label: String,
    #[serde(default)]
    pub value: f32,
}

impl OptionSpec {
    pub fn new(label: impl Into<String>, value: f32) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}
