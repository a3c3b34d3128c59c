//! menugfx terminal demo.
//!
//! Renders a menu for a 128x64 panel onto the terminal and drives it from
//! stdin, one command per line: `+`/`-` or a signed number scrolls, `ok`
//! activates, `back` returns, `state` prints the session as JSON and `quit`
//! exits.
//!
//! Usage: `menugfx-app [MENU_FILE]` loads a TOML or JSON menu definition;
//! `menugfx-app --print-menu` writes the built-in menu as JSON.

mod demo;
mod text_canvas;

use std::io::{BufRead, IsTerminal, Write};
use std::path::Path;

use anyhow::Result;
use menugfx_core::{Canvas, InputEvent, LayoutConfig, MenuSession, MenuTree, Response};

use text_canvas::TextCanvas;

const PANEL_WIDTH: u32 = 128;
const PANEL_HEIGHT: u32 = 64;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let arg = std::env::args().nth(1);
    if arg.as_deref() == Some("--print-menu") {
        println!("{}", serde_json::to_string_pretty(&demo::radio_menu())?);
        return Ok(());
    }

    let spec = match arg {
        Some(path) => demo::load_menu(Path::new(&path))?,
        None => demo::radio_menu(),
    };
    let mut tree = MenuTree::from_spec(&spec)?;
    demo::attach_change_logging(&mut tree);
    log::info!("Loaded {:?} ({} menus)", spec.title, tree.len());

    let mut canvas = TextCanvas::new(PANEL_WIDTH, PANEL_HEIGHT);
    let mut session = MenuSession::for_canvas(tree, &canvas, LayoutConfig::default());
    let ansi = std::io::stdout().is_terminal();

    draw(&mut session, &mut canvas, ansi)?;
    for line in std::io::stdin().lock().lines() {
        let line = line?;
        match line.trim() {
            "quit" | "q" => break,
            "state" => println!("{}", state_json(&session)?),
            cmd => {
                let Some(event) = InputEvent::parse(cmd) else {
                    log::warn!("Unknown command: {cmd:?}");
                    continue;
                };
                let response = session.handle(event)?;
                log::debug!("{event:?} -> {response:?}");
                if response != Response::Ignored {
                    draw(&mut session, &mut canvas, ansi)?;
                }
            },
        }
    }
    Ok(())
}

fn draw(session: &mut MenuSession, canvas: &mut TextCanvas, ansi: bool) -> Result<()> {
    let background = session.active_menu()?.colors.background;
    canvas.clear(background)?;
    session.render(canvas)?;
    let mut out = std::io::stdout().lock();
    writeln!(out, "{}", canvas.render(ansi))?;
    out.flush()?;
    Ok(())
}

fn state_json(session: &MenuSession) -> Result<String> {
    let menu = session.active_menu()?;
    let state = serde_json::json!({
        "menu": menu.title(),
        "selected": menu.selected_index(),
        "scroll_offset": menu.scroll_offset(),
        "editing": menu.is_editing(),
        "item": session.selected_item().map(|item| item.name()),
        "value": session
            .selected_item()
            .map(|item| menugfx_core::layout::format_value(item.value())),
    });
    Ok(state.to_string())
}
