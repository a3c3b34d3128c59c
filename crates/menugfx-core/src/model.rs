//! Menu entities: values, items and menus.
//!
//! These types carry data and validate it at construction. Behavior lives in
//! [`scroll`](crate::scroll), [`editor`](crate::editor) and
//! [`render`](crate::render).

use std::fmt;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use menugfx_types::{Color, MenuError, Result};

// -- Identifiers --------------------------------------------------------------

/// Index of a menu inside its [`MenuTree`](crate::MenuTree).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MenuId(pub(crate) usize);

impl MenuId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for MenuId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "menu #{}", self.0)
    }
}

// -- Values -------------------------------------------------------------------

/// One entry of an enumerated value's option table.
#[derive(Debug, Clone, PartialEq)]
pub struct EnumOption {
    pub label: String,
    pub numeric_value: f32,
}

impl EnumOption {
    pub fn new(label: impl Into<String>, numeric_value: f32) -> Self {
        Self {
            label: label.into(),
            numeric_value,
        }
    }
}

/// Where a submenu item leads when activated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmenuLink {
    /// Descend into a child menu.
    Child(MenuId),
    /// Return to the parent of the menu holding the item.
    Parent,
}

/// The payload of a [`Value`]; its variant is the value's kind.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    Int(i32),
    Float(f32),
    Text(String),
    Enum {
        options: Rc<[EnumOption]>,
        current: usize,
    },
    Submenu(SubmenuLink),
}

/// Discriminant of a [`Payload`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueKind {
    Int,
    Float,
    String,
    Enum,
    Submenu,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueKind::Int => "int",
            ValueKind::Float => "float",
            ValueKind::String => "string",
            ValueKind::Enum => "enum",
            ValueKind::Submenu => "submenu",
        };
        f.write_str(name)
    }
}

/// Called after an edit changed a value's payload.
pub type ChangeHook = fn(&Value);

/// A typed, displayable, optionally editable value.
///
/// Numeric constraints (`min`, `max`, `step`) only apply to `Int` and
/// `Float` payloads. The payload is private so the kind can only change by
/// replacing the whole value.
#[derive(Debug, Clone)]
pub struct Value {
    payload: Payload,
    min: f32,
    max: f32,
    step: f32,
    /// Prefix positive numbers with `+`.
    pub plus_sign: bool,
    /// Fractional digits for floats; `None` prints the shortest exact form.
    pub precision: Option<usize>,
    pub prefix: String,
    pub suffix: String,
    pub on_change: Option<ChangeHook>,
}

impl Value {
    fn with_payload(payload: Payload, min: f32, max: f32, step: f32) -> Self {
        Self {
            payload,
            min,
            max,
            step,
            plus_sign: false,
            precision: None,
            prefix: String::new(),
            suffix: String::new(),
            on_change: None,
        }
    }

    pub fn int(value: i32, min: f32, max: f32, step: f32) -> Self {
        Self::with_payload(Payload::Int(value), min, max, step)
    }

    pub fn float(value: f32, min: f32, max: f32, step: f32) -> Self {
        Self::with_payload(Payload::Float(value), min, max, step)
    }

    pub fn text(value: impl Into<String>) -> Self {
        Self::with_payload(Payload::Text(value.into()), 0.0, 0.0, 0.0)
    }

    /// An enumerated value over a shared option table.
    pub fn enumeration(options: Rc<[EnumOption]>, current: usize) -> Self {
        Self::with_payload(Payload::Enum { options, current }, 0.0, 0.0, 0.0)
    }

    /// A navigation trigger into `child`.
    pub fn submenu(child: MenuId) -> Self {
        Self::with_payload(Payload::Submenu(SubmenuLink::Child(child)), 0.0, 0.0, 0.0)
    }

    /// A navigation trigger back to the parent menu.
    pub fn back() -> Self {
        Self::with_payload(Payload::Submenu(SubmenuLink::Parent), 0.0, 0.0, 0.0)
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    pub fn with_plus_sign(mut self) -> Self {
        self.plus_sign = true;
        self
    }

    pub fn with_precision(mut self, digits: usize) -> Self {
        self.precision = Some(digits);
        self
    }

    pub fn with_hook(mut self, hook: ChangeHook) -> Self {
        self.on_change = Some(hook);
        self
    }

    pub fn kind(&self) -> ValueKind {
        match self.payload {
            Payload::Int(_) => ValueKind::Int,
            Payload::Float(_) => ValueKind::Float,
            Payload::Text(_) => ValueKind::String,
            Payload::Enum { .. } => ValueKind::Enum,
            Payload::Submenu(_) => ValueKind::Submenu,
        }
    }

    pub fn payload(&self) -> &Payload {
        &self.payload
    }

    pub(crate) fn payload_mut(&mut self) -> &mut Payload {
        &mut self.payload
    }

    pub fn min(&self) -> f32 {
        self.min
    }

    pub fn max(&self) -> f32 {
        self.max
    }

    pub fn step(&self) -> f32 {
        self.step
    }

    pub fn as_int(&self) -> Option<i32> {
        match self.payload {
            Payload::Int(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f32> {
        match self.payload {
            Payload::Float(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match &self.payload {
            Payload::Text(s) => Some(s),
            _ => None,
        }
    }

    /// The currently chosen option of an enumerated value.
    pub fn current_option(&self) -> Option<&EnumOption> {
        match &self.payload {
            Payload::Enum { options, current } => options.get(*current),
            _ => None,
        }
    }

    pub fn submenu_link(&self) -> Option<SubmenuLink> {
        match self.payload {
            Payload::Submenu(link) => Some(link),
            _ => None,
        }
    }

    fn check_numeric(&self, v: f32) -> Result<()> {
        if !self.min.is_finite() || !self.max.is_finite() {
            return Err(MenuError::Config(format!(
                "numeric bounds must be finite (min {}, max {})",
                self.min, self.max
            )));
        }
        if self.min > self.max {
            return Err(MenuError::Config(format!(
                "min {} exceeds max {}",
                self.min, self.max
            )));
        }
        if !(self.step.is_finite() && self.step > 0.0) {
            return Err(MenuError::Config(format!(
                "step must be positive, got {}",
                self.step
            )));
        }
        if !(self.min..=self.max).contains(&v) {
            return Err(MenuError::Config(format!(
                "initial value {v} outside [{}, {}]",
                self.min, self.max
            )));
        }
        Ok(())
    }

    /// Check the payload against the value's constraints.
    pub fn validate(&self) -> Result<()> {
        match &self.payload {
            Payload::Int(i) => self.check_numeric(*i as f32)?,
            Payload::Float(f) => self.check_numeric(*f)?,
            Payload::Enum { options, current } => {
                if options.is_empty() {
                    return Err(MenuError::Config("enum has no options".into()));
                }
                if *current >= options.len() {
                    return Err(MenuError::Config(format!(
                        "enum option {current} out of range (0..{})",
                        options.len()
                    )));
                }
            },
            Payload::Text(_) | Payload::Submenu(_) => {},
        }
        Ok(())
    }
}

// -- Items and menus ------------------------------------------------------------

/// A named row of a menu.
#[derive(Debug, Clone)]
pub struct MenuItem {
    name: String,
    value: Value,
    editable: bool,
}

impl MenuItem {
    /// A read-only row.
    pub fn new(name: impl Into<String>, value: Value) -> Self {
        Self {
            name: name.into(),
            value,
            editable: false,
        }
    }

    /// A row whose value can be edited in place.
    pub fn editable(name: impl Into<String>, value: Value) -> Self {
        Self {
            editable: true,
            ..Self::new(name, value)
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    pub fn value_mut(&mut self) -> &mut Value {
        &mut self.value
    }

    pub fn is_editable(&self) -> bool {
        self.editable
    }
}

/// Text colors for normal and highlighted rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MenuColors {
    pub foreground: Color,
    pub background: Color,
    pub selected_foreground: Color,
    pub selected_background: Color,
}

impl Default for MenuColors {
    fn default() -> Self {
        Self {
            foreground: Color::WHITE,
            background: Color::BLACK,
            selected_foreground: Color::BLACK,
            selected_background: Color::WHITE,
        }
    }
}

/// A titled list of items with its own cursor, scroll position and policy
/// flags.
#[derive(Debug, Clone)]
pub struct Menu {
    title: String,
    items: Vec<MenuItem>,
    pub(crate) selected: usize,
    pub(crate) editing: bool,
    pub(crate) parent: Option<MenuId>,
    pub(crate) scroll_offset: usize,
    /// Draw the scrollbar along the right edge.
    pub show_scrollbar: bool,
    /// Wrap from the last item back to the first and vice versa.
    pub loop_scroll: bool,
    /// Keep the highlighted row independent of the scroll offset.
    pub maintain_selection: bool,
    /// Keep the last item pinned to the bottom of the viewport.
    pub clamp_scroll: bool,
    pub colors: MenuColors,
}

impl Menu {
    /// Build a menu with the cursor on the first item.
    ///
    /// Fails if `items` is empty or any value is inconsistent.
    pub fn new(title: impl Into<String>, items: Vec<MenuItem>) -> Result<Self> {
        let title = title.into();
        if items.is_empty() {
            return Err(MenuError::Config(format!("menu {title:?} has no items")));
        }
        for item in &items {
            item.value.validate().map_err(|e| match e {
                MenuError::Config(msg) => {
                    MenuError::Config(format!("{title:?} / {:?}: {msg}", item.name))
                },
                other => other,
            })?;
        }
        Ok(Self {
            title,
            items,
            selected: 0,
            editing: false,
            parent: None,
            scroll_offset: 0,
            show_scrollbar: true,
            loop_scroll: false,
            maintain_selection: false,
            clamp_scroll: false,
            colors: MenuColors::default(),
        })
    }

    /// Set the initial selection and scroll offset.
    pub fn with_position(mut self, selected: usize, scroll_offset: usize) -> Result<Self> {
        let len = self.items.len();
        if selected >= len {
            return Err(MenuError::Config(format!(
                "menu {:?}: selected index {selected} out of range (0..{len})",
                self.title
            )));
        }
        if scroll_offset >= len {
            return Err(MenuError::Config(format!(
                "menu {:?}: scroll offset {scroll_offset} out of range (0..{len})",
                self.title
            )));
        }
        self.selected = selected;
        self.scroll_offset = scroll_offset;
        Ok(self)
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn item(&self, index: usize) -> Option<&MenuItem> {
        self.items.get(index)
    }

    pub fn item_mut(&mut self, index: usize) -> Option<&mut MenuItem> {
        self.items.get_mut(index)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn selected_item(&self) -> Option<&MenuItem> {
        self.items.get(self.selected)
    }

    pub(crate) fn selected_item_mut(&mut self) -> Option<&mut MenuItem> {
        self.items.get_mut(self.selected)
    }

    pub fn is_editing(&self) -> bool {
        self.editing
    }

    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    pub fn parent(&self) -> Option<MenuId> {
        self.parent
    }

    /// Append an item during setup (before the menu is shown).
    pub fn push_item(&mut self, item: MenuItem) -> Result<()> {
        item.value.validate()?;
        self.items.push(item);
        Ok(())
    }
}
