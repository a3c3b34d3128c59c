//! Arena of menus linked by submenu items and parent back-references.
//!
//! The tree owns every menu. A submenu item refers to its child by
//! [`MenuId`], and the child refers back to its parent by id, so there are no
//! owning cycles. Parent links are fixed when a submenu is added.

use std::collections::HashMap;
use std::rc::Rc;

use menugfx_types::{MenuError, Result};

use crate::config::{ItemSpec, MenuSpec, OptionSpec, ValueSpec};
use crate::model::{EnumOption, Menu, MenuId, MenuItem, SubmenuLink, Value};

/// Every menu of an application, addressed by [`MenuId`].
#[derive(Debug, Clone)]
pub struct MenuTree {
    menus: Vec<Menu>,
}

impl MenuTree {
    /// A tree holding only `root`.
    pub fn new(mut root: Menu) -> Self {
        root.parent = None;
        Self { menus: vec![root] }
    }

    /// Build a tree from configuration records and validate it.
    pub fn from_spec(spec: &MenuSpec) -> Result<Self> {
        let mut slots: Vec<Option<Menu>> = Vec::new();
        build_menu(spec, None, &mut slots, &OptionTables::new())?;
        let menus = slots
            .into_iter()
            .enumerate()
            .map(|(i, slot)| {
                slot.ok_or_else(|| MenuError::Config(format!("menu #{i} was never built")))
            })
            .collect::<Result<Vec<_>>>()?;
        let tree = Self { menus };
        tree.validate()?;
        log::debug!("Built menu tree with {} menus", tree.len());
        Ok(tree)
    }

    pub fn root(&self) -> MenuId {
        MenuId(0)
    }

    /// The id the next added submenu will receive.
    pub fn next_id(&self) -> MenuId {
        MenuId(self.menus.len())
    }

    /// Add `child` under `parent`, fixing its back-reference.
    ///
    /// The caller links it from a parent item with [`Value::submenu`].
    pub fn add_submenu(&mut self, parent: MenuId, mut child: Menu) -> Result<MenuId> {
        if self.get(parent).is_none() {
            return Err(MenuError::Navigation(format!("{parent} not found")));
        }
        let id = self.next_id();
        child.parent = Some(parent);
        self.menus.push(child);
        Ok(id)
    }

    pub fn get(&self, id: MenuId) -> Option<&Menu> {
        self.menus.get(id.0)
    }

    pub fn get_mut(&mut self, id: MenuId) -> Option<&mut Menu> {
        self.menus.get_mut(id.0)
    }

    pub fn parent_of(&self, id: MenuId) -> Option<MenuId> {
        self.get(id).and_then(Menu::parent)
    }

    pub fn len(&self) -> usize {
        self.menus.len()
    }

    pub fn is_empty(&self) -> bool {
        self.menus.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = MenuId> + '_ {
        (0..self.menus.len()).map(MenuId)
    }

    /// Check that every submenu link resolves to a menu whose parent is the
    /// linking menu.
    pub fn validate(&self) -> Result<()> {
        for (index, menu) in self.menus.iter().enumerate() {
            let here = MenuId(index);
            if let Some(parent) = menu.parent() {
                if self.get(parent).is_none() {
                    return Err(MenuError::Config(format!(
                        "{here} ({:?}) has dangling parent {parent}",
                        menu.title()
                    )));
                }
            }
            for item in menu.items() {
                let Some(SubmenuLink::Child(child)) = item.value().submenu_link() else {
                    continue;
                };
                let Some(target) = self.get(child) else {
                    return Err(MenuError::Config(format!(
                        "item {:?} in {:?} links to missing {child}",
                        item.name(),
                        menu.title()
                    )));
                };
                if target.parent() != Some(here) {
                    return Err(MenuError::Config(format!(
                        "{child} ({:?}) is linked from {here} but its parent is {:?}",
                        target.title(),
                        target.parent()
                    )));
                }
            }
        }
        Ok(())
    }
}

/// Option tables in scope while building a menu, shared by name.
type OptionTables = HashMap<String, Rc<[EnumOption]>>;

fn option_table(options: &[OptionSpec]) -> Rc<[EnumOption]> {
    options
        .iter()
        .map(|o| EnumOption::new(o.label.clone(), o.value))
        .collect()
}

fn build_menu(
    spec: &MenuSpec,
    parent: Option<MenuId>,
    slots: &mut Vec<Option<Menu>>,
    inherited: &OptionTables,
) -> Result<MenuId> {
    let id = MenuId(slots.len());
    slots.push(None);

    // A submenu sees its ancestors' tables; its own shadow them.
    let mut tables = inherited.clone();
    for (name, options) in &spec.option_tables {
        tables.insert(name.clone(), option_table(options));
    }

    let mut items = Vec::with_capacity(spec.items.len());
    for item in &spec.items {
        items.push(build_item(item, id, slots, &tables)?);
    }

    let mut menu = Menu::new(spec.title.clone(), items)?
        .with_position(spec.selected, spec.scroll_offset)?;
    menu.parent = parent;
    menu.show_scrollbar = spec.show_scrollbar;
    menu.loop_scroll = spec.loop_scroll;
    menu.maintain_selection = spec.maintain_selection;
    menu.clamp_scroll = spec.clamp_scroll;
    menu.colors = spec.colors;
    slots[id.0] = Some(menu);
    Ok(id)
}

fn build_item(
    spec: &ItemSpec,
    owner: MenuId,
    slots: &mut Vec<Option<Menu>>,
    tables: &OptionTables,
) -> Result<MenuItem> {
    let mut value = match &spec.value {
        ValueSpec::Int {
            value,
            min,
            max,
            step,
        } => Value::int(*value, *min, *max, *step),
        ValueSpec::Float {
            value,
            min,
            max,
            step,
            precision,
        } => {
            let mut v = Value::float(*value, *min, *max, *step);
            v.precision = *precision;
            v
        },
        ValueSpec::String { value } => Value::text(value.clone()),
        ValueSpec::Enum {
            options,
            table: None,
            current,
        } => Value::enumeration(option_table(options), *current),
        ValueSpec::Enum {
            options,
            table: Some(name),
            current,
        } => {
            if !options.is_empty() {
                return Err(MenuError::Config(format!(
                    "item {:?} lists options and also names table {name:?}",
                    spec.name
                )));
            }
            let shared = tables.get(name).map(Rc::clone).ok_or_else(|| {
                MenuError::Config(format!(
                    "item {:?} names unknown option table {name:?}",
                    spec.name
                ))
            })?;
            Value::enumeration(shared, *current)
        },
        ValueSpec::Submenu { menu } => {
            Value::submenu(build_menu(menu, Some(owner), slots, tables)?)
        },
        ValueSpec::Back => Value::back(),
    };
    value.prefix = spec.prefix.clone();
    value.suffix = spec.suffix.clone();
    value.plus_sign = spec.plus_sign;

    Ok(if spec.editable {
        MenuItem::editable(spec.name.clone(), value)
    } else {
        MenuItem::new(spec.name.clone(), value)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Payload;

    fn leaf(title: &str) -> Menu {
        Menu::new(title, vec![MenuItem::new("Back", Value::back())]).unwrap()
    }

    #[test]
    fn new_tree_has_root_only() {
        let tree = MenuTree::new(leaf("Root"));
        assert_eq!(tree.len(), 1);
        assert_eq!(tree.root(), MenuId(0));
        assert!(tree.parent_of(tree.root()).is_none());
    }

    #[test]
    fn add_submenu_sets_parent() {
        let mut tree = MenuTree::new(leaf("Root"));
        let root = tree.root();
        let child = tree.add_submenu(root, leaf("Child")).unwrap();
        assert_eq!(child, MenuId(1));
        assert_eq!(tree.parent_of(child), Some(root));
        tree.get_mut(root)
            .unwrap()
            .push_item(MenuItem::new("Child", Value::submenu(child)))
            .unwrap();
        assert!(tree.validate().is_ok());
    }

    #[test]
    fn add_submenu_rejects_unknown_parent() {
        let mut tree = MenuTree::new(leaf("Root"));
        let err = tree.add_submenu(MenuId(7), leaf("Orphan")).unwrap_err();
        assert!(matches!(err, MenuError::Navigation(_)));
    }

    #[test]
    fn validate_rejects_dangling_link() {
        let items = vec![MenuItem::new("Nowhere", Value::submenu(MenuId(5)))];
        let tree = MenuTree::new(Menu::new("Root", items).unwrap());
        assert!(matches!(tree.validate(), Err(MenuError::Config(_))));
    }

    #[test]
    fn validate_rejects_link_to_foreign_child() {
        let mut tree = MenuTree::new(leaf("Root"));
        let root = tree.root();
        let a = tree.add_submenu(root, leaf("A")).unwrap();
        let b = tree.add_submenu(a, leaf("B")).unwrap();
        // Root links to B, but B belongs to A.
        tree.get_mut(root)
            .unwrap()
            .push_item(MenuItem::new("B", Value::submenu(b)))
            .unwrap();
        assert!(tree.validate().is_err());
    }

    #[test]
    fn from_spec_builds_nested_menus() {
        let spec = MenuSpec::new(
            "Options",
            vec![
                ItemSpec::new("Back", ValueSpec::Back).with_suffix("<-"),
                ItemSpec::new(
                    "Frequency",
                    ValueSpec::Enum {
                        options: vec![
                            OptionSpec::new("868MHz", 868.0),
                            OptionSpec::new("915MHz", 915.0),
                        ],
                        table: None,
                        current: 1,
                    },
                )
                .editable(),
                ItemSpec::new(
                    "More options",
                    ValueSpec::Submenu {
                        menu: Box::new(MenuSpec::new(
                            "More",
                            vec![ItemSpec::new("Back", ValueSpec::Back)],
                        )),
                    },
                )
                .with_suffix("->"),
            ],
        );
        let tree = MenuTree::from_spec(&spec).unwrap();
        assert_eq!(tree.len(), 2);

        let root = tree.get(tree.root()).unwrap();
        assert_eq!(root.title(), "Options");
        assert_eq!(root.items()[0].value().suffix, "<-");
        assert!(root.items()[1].is_editable());
        assert_eq!(
            root.items()[1].value().current_option().map(|o| o.label.as_str()),
            Some("915MHz")
        );

        let link = root.items()[2].value().submenu_link();
        assert_eq!(link, Some(SubmenuLink::Child(MenuId(1))));
        let more = tree.get(MenuId(1)).unwrap();
        assert_eq!(more.title(), "More");
        assert_eq!(more.parent(), Some(tree.root()));
    }

    #[test]
    fn from_spec_applies_flags_and_position() {
        let mut spec = MenuSpec::new(
            "Flags",
            (0..3)
                .map(|i| {
                    let value = ValueSpec::String {
                        value: i.to_string(),
                    };
                    ItemSpec::new(format!("Item {i}"), value)
                })
                .collect(),
        );
        spec.selected = 2;
        spec.scroll_offset = 1;
        spec.loop_scroll = true;
        spec.show_scrollbar = false;
        let tree = MenuTree::from_spec(&spec).unwrap();
        let m = tree.get(tree.root()).unwrap();
        assert_eq!(m.selected_index(), 2);
        assert_eq!(m.scroll_offset(), 1);
        assert!(m.loop_scroll);
        assert!(!m.show_scrollbar);
        assert!(matches!(m.items()[0].value().payload(), Payload::Text(s) if s == "0"));
    }

    #[test]
    fn from_spec_rejects_empty_submenu() {
        let spec = MenuSpec::new(
            "Root",
            vec![ItemSpec::new(
                "Empty",
                ValueSpec::Submenu {
                    menu: Box::new(MenuSpec::new("Nothing", vec![])),
                },
            )],
        );
        assert!(matches!(MenuTree::from_spec(&spec), Err(MenuError::Config(_))));
    }

    fn on_off_item(name: &str) -> ItemSpec {
        ItemSpec::new(
            name,
            ValueSpec::Enum {
                options: vec![],
                table: Some("on_off".into()),
                current: 0,
            },
        )
        .editable()
    }

    fn enum_options(menu: &Menu, index: usize) -> Rc<[EnumOption]> {
        match menu.items()[index].value().payload() {
            Payload::Enum { options, .. } => Rc::clone(options),
            other => panic!("expected enum, got {other:?}"),
        }
    }

    #[test]
    fn named_option_tables_are_shared() {
        let mut spec = MenuSpec::new(
            "Radio",
            vec![
                on_off_item("RF Status"),
                on_off_item("Beacon"),
                ItemSpec::new(
                    "More",
                    ValueSpec::Submenu {
                        menu: Box::new(MenuSpec::new("More", vec![on_off_item("GPS")])),
                    },
                ),
            ],
        );
        spec.option_tables.insert(
            "on_off".into(),
            vec![OptionSpec::new("On", 1.0), OptionSpec::new("Off", 0.0)],
        );
        let tree = MenuTree::from_spec(&spec).unwrap();
        let root = tree.get(tree.root()).unwrap();
        let more = tree.get(MenuId(1)).unwrap();
        let first = enum_options(root, 0);
        assert_eq!(first.len(), 2);
        assert!(Rc::ptr_eq(&first, &enum_options(root, 1)));
        assert!(Rc::ptr_eq(&first, &enum_options(more, 0)));
    }

    #[test]
    fn unknown_option_table_is_rejected() {
        let spec = MenuSpec::new("Radio", vec![on_off_item("RF Status")]);
        assert!(matches!(MenuTree::from_spec(&spec), Err(MenuError::Config(_))));
    }

    #[test]
    fn inline_options_with_table_are_rejected() {
        let mut spec = MenuSpec::new(
            "Radio",
            vec![ItemSpec::new(
                "RF Status",
                ValueSpec::Enum {
                    options: vec![OptionSpec::new("On", 1.0)],
                    table: Some("on_off".into()),
                    current: 0,
                },
            )],
        );
        spec.option_tables
            .insert("on_off".into(), vec![OptionSpec::new("On", 1.0)]);
        assert!(matches!(MenuTree::from_spec(&spec), Err(MenuError::Config(_))));
    }

    #[test]
    fn from_spec_rejects_out_of_range_selection() {
        let mut spec = MenuSpec::new("Root", vec![ItemSpec::new("Back", ValueSpec::Back)]);
        spec.selected = 3;
        assert!(MenuTree::from_spec(&spec).is_err());
    }
}
