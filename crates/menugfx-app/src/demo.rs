//! The built-in radio settings menu and menu file loading.

use std::path::Path;

use anyhow::{Context, Result};
use menugfx_core::layout::format_value;
use menugfx_core::{ItemSpec, MenuSpec, MenuTree, OptionSpec, Value, ValueSpec};

/// Settings menu of a LoRa radio on a 128x64 OLED.
pub fn radio_menu() -> MenuSpec {
    let more = MenuSpec::new(
        "More options",
        vec![
            ItemSpec::new("Back", ValueSpec::Back).with_suffix("<-"),
            ItemSpec::new(
                "Contrast",
                ValueSpec::Float {
                    value: 0.5,
                    min: 0.0,
                    max: 1.0,
                    step: 0.1,
                    precision: Some(1),
                },
            )
            .editable(),
            ItemSpec::new(
                "Callsign",
                ValueSpec::String {
                    value: "N0CALL".into(),
                },
            )
            .editable(),
            ItemSpec::new(
                "Firmware",
                ValueSpec::String {
                    value: env!("CARGO_PKG_VERSION").into(),
                },
            ),
        ],
    );

    let mut menu = MenuSpec::new(
        "Options",
        vec![
            ItemSpec::new("Back", ValueSpec::Back).with_suffix("<-"),
            ItemSpec::new(
                "RF ID",
                ValueSpec::Int {
                    value: 0,
                    min: 0.0,
                    max: f32::MAX,
                    step: 1.0,
                },
            )
            .editable(),
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
                "TX Power",
                ValueSpec::Int {
                    value: 13,
                    min: 2.0,
                    max: 20.0,
                    step: 1.0,
                },
            )
            .editable()
            .with_plus_sign()
            .with_suffix("dBm"),
            ItemSpec::new(
                "RF Status",
                ValueSpec::Enum {
                    options: vec![OptionSpec::new("On", 1.0), OptionSpec::new("Off", 0.0)],
                    table: None,
                    current: 0,
                },
            )
            .editable(),
            ItemSpec::new(
                "Brightness",
                ValueSpec::Int {
                    value: 100,
                    min: 5.0,
                    max: 100.0,
                    step: 5.0,
                },
            )
            .editable()
            .with_suffix("%"),
            ItemSpec::new(
                "More options",
                ValueSpec::Submenu {
                    menu: Box::new(more),
                },
            )
            .with_suffix("->"),
        ],
    );
    menu.selected = 1;
    menu.scroll_offset = 1;
    menu
}

/// Load a menu definition, as JSON when the extension says so and TOML
/// otherwise.
pub fn load_menu(path: &Path) -> Result<MenuSpec> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading menu file {}", path.display()))?;
    let spec = if path.extension().is_some_and(|ext| ext == "json") {
        serde_json::from_str(&text)?
    } else {
        MenuSpec::from_toml_str(&text)?
    };
    Ok(spec)
}

fn log_change(value: &Value) {
    log::info!("Value changed to {}", format_value(value));
}

/// Log every edit made through the menus.
pub fn attach_change_logging(tree: &mut MenuTree) {
    let ids: Vec<_> = tree.ids().collect();
    for id in ids {
        let Some(menu) = tree.get_mut(id) else {
            continue;
        };
        for index in 0..menu.len() {
            if let Some(item) = menu.item_mut(index) {
                if item.is_editable() {
                    item.value_mut().on_change = Some(log_change);
                }
            }
        }
    }
}
