//! Error types for menugfx.

/// Errors produced by the menu core and its collaborators.
#[derive(Debug, thiserror::Error)]
pub enum MenuError {
    /// A menu, item or value was built from inconsistent literals.
    #[error("config error: {0}")]
    Config(String),

    /// The selected value kind cannot be edited in place (text).
    #[error("unsupported edit: {0}")]
    UnsupportedEdit(String),

    /// The selected item is a navigation trigger, not a value.
    #[error("invalid operation: {0}")]
    InvalidOperation(String),

    /// The canvas rejected a drawing call.
    #[error("canvas error: {0}")]
    Canvas(String),

    /// A menu id did not resolve inside the tree.
    #[error("navigation error: {0}")]
    Navigation(String),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

impl MenuError {
    /// Whether the error is recovered locally by leaving edit mode.
    pub fn is_recoverable_edit(&self) -> bool {
        matches!(
            self,
            MenuError::UnsupportedEdit(_) | MenuError::InvalidOperation(_)
        )
    }
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, MenuError>;
