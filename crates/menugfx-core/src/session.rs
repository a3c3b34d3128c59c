//! The explicit context object tying a menu tree to a display.
//!
//! An application owns one [`MenuSession`] per display surface and feeds it
//! input events from its control loop, rendering after each one. Only one
//! menu is active at a time; submenu items move into a child menu and the
//! child's parent back-reference leads out again.

use menugfx_types::{Canvas, InputEvent, MenuError, Result};

use crate::config::{LayoutConfig, Viewport};
use crate::editor;
use crate::model::{Menu, MenuId, MenuItem, SubmenuLink};
use crate::render;
use crate::scroll;
use crate::tree::MenuTree;

/// What an input event did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Response {
    /// The cursor moved or the edited value changed.
    Scrolled,
    /// Edit mode changed; carries the new state.
    EditToggled(bool),
    /// A submenu became active.
    Entered(MenuId),
    /// The parent menu became active again.
    Returned(MenuId),
    /// An edit was refused and the menu went back to browsing.
    EditRejected,
    /// Nothing to do for this event.
    Ignored,
}

/// Menu tree, active menu and display geometry.
#[derive(Debug, Clone)]
pub struct MenuSession {
    tree: MenuTree,
    active: MenuId,
    viewport: Viewport,
}

impl MenuSession {
    /// Start at the root of `tree`.
    pub fn new(tree: MenuTree, viewport: Viewport) -> Self {
        let active = tree.root();
        Self {
            tree,
            active,
            viewport,
        }
    }

    /// Start at the root of `tree`, sized for `canvas`.
    pub fn for_canvas<C: Canvas + ?Sized>(
        tree: MenuTree,
        canvas: &C,
        layout: LayoutConfig,
    ) -> Self {
        Self::new(tree, Viewport::from_canvas(canvas, layout))
    }

    pub fn tree(&self) -> &MenuTree {
        &self.tree
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn active_id(&self) -> MenuId {
        self.active
    }

    pub fn active_menu(&self) -> Result<&Menu> {
        self.tree
            .get(self.active)
            .ok_or_else(|| MenuError::Navigation(format!("{} not found", self.active)))
    }

    fn active_menu_mut(&mut self) -> Result<&mut Menu> {
        let id = self.active;
        self.tree
            .get_mut(id)
            .ok_or_else(|| MenuError::Navigation(format!("{id} not found")))
    }

    /// Move the cursor, or adjust the value under edit.
    pub fn scroll(&mut self, delta: i32) -> Result<()> {
        let viewport = self.viewport;
        scroll::scroll(self.active_menu_mut()?, delta, &viewport)
    }

    /// Enter or leave edit mode on the selected item.
    pub fn toggle_edit(&mut self) -> Result<bool> {
        Ok(editor::toggle_edit(self.active_menu_mut()?))
    }

    /// Handle an activate press.
    ///
    /// Ends an edit in progress, follows a submenu link, or starts editing an
    /// editable item.
    pub fn activate(&mut self) -> Result<Response> {
        let menu = self.active_menu_mut()?;
        if menu.is_editing() {
            return Ok(Response::EditToggled(editor::toggle_edit(menu)));
        }
        let Some(item) = menu.selected_item() else {
            return Ok(Response::Ignored);
        };
        let (link, editable) = (item.value().submenu_link(), item.is_editable());
        match link {
            Some(SubmenuLink::Child(child)) => self.enter(child),
            Some(SubmenuLink::Parent) => self.leave(),
            None if editable => self.toggle_edit().map(Response::EditToggled),
            None => Ok(Response::Ignored),
        }
    }

    /// Handle a back press: end an edit in progress, else return to the
    /// parent menu.
    pub fn back(&mut self) -> Result<Response> {
        let menu = self.active_menu_mut()?;
        if menu.is_editing() {
            return Ok(Response::EditToggled(editor::toggle_edit(menu)));
        }
        self.leave()
    }

    /// Dispatch one input event.
    ///
    /// Refused edits are recovered here: the menu is already back to
    /// browsing, so the error is logged and reported as
    /// [`Response::EditRejected`].
    pub fn handle(&mut self, event: InputEvent) -> Result<Response> {
        let result = match event {
            InputEvent::Scroll(0) => Ok(Response::Ignored),
            InputEvent::Scroll(delta) => self.scroll(delta).map(|()| Response::Scrolled),
            InputEvent::Activate => self.activate(),
            InputEvent::Back => self.back(),
        };
        match result {
            Err(e) if e.is_recoverable_edit() => {
                log::warn!("Edit rejected: {e}");
                Ok(Response::EditRejected)
            },
            other => other,
        }
    }

    /// Draw the active menu, resizing the viewport to the canvas first.
    pub fn render<C: Canvas + ?Sized>(&mut self, canvas: &mut C) -> Result<()> {
        self.viewport = Viewport::from_canvas(canvas, self.viewport.layout);
        let menu = self
            .tree
            .get(self.active)
            .ok_or_else(|| MenuError::Navigation(format!("{} not found", self.active)))?;
        render::draw_menu(canvas, menu, &self.viewport.layout)
    }

    /// The selected item of the active menu.
    pub fn selected_item(&self) -> Option<&MenuItem> {
        self.active_menu().ok().and_then(Menu::selected_item)
    }

    fn enter(&mut self, child: MenuId) -> Result<Response> {
        let title = self
            .tree
            .get(child)
            .map(|m| m.title().to_string())
            .ok_or_else(|| MenuError::Navigation(format!("{child} not found")))?;
        log::debug!("Entering {child} ({title:?})");
        self.active = child;
        Ok(Response::Entered(child))
    }

    fn leave(&mut self) -> Result<Response> {
        match self.tree.parent_of(self.active) {
            Some(parent) => {
                log::debug!("Returning from {} to {parent}", self.active);
                self.active = parent;
                Ok(Response::Returned(parent))
            },
            None => Ok(Response::Ignored),
        }
    }
}
