mod activation;
mod effects;
mod render;

use std::io::{self, BufRead};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use anyhow::{bail, Context, Result};
use reader_bridge::{BridgeClient, BridgeHost, ExtensionResolver, FileStorage, SettingsStore};
use reader_core::{update, LineHeightEdit, Msg, ReaderState};

use effects::EffectRunner;

const SETTINGS_FILENAME: &str = ".reader_settings.json";

/// Base URL stood in for the extension origin when resolving asset paths.
const EXTENSION_BASE_URL: &str = "extension://reader";

fn main() -> Result<()> {
    reader_logging::initialize_for_app();

    let mut args = std::env::args().skip(1);
    let Some(page) = args.next() else {
        bail!("usage: reader_app <page.html> [settings.json]");
    };
    let settings_path = match args.next() {
        Some(path) => PathBuf::from(path),
        None => default_settings_path(),
    };

    // Privileged side: file-backed storage and the asset resolver, injected
    // into the bridge host. The isolated side only ever sees the channels.
    let storage = Arc::new(FileStorage::new(settings_path));
    let resolver = Arc::new(ExtensionResolver::new(EXTENSION_BASE_URL));
    let (request_tx, response_rx) = BridgeHost::spawn(storage, resolver);
    let client = Arc::new(Mutex::new(BridgeClient::new(request_tx, response_rx)));
    let mut runner = EffectRunner::new(SettingsStore::remote(client.clone()));

    let html = std::fs::read_to_string(&page).with_context(|| format!("reading {page}"))?;

    let mut state = ReaderState::new();
    for msg in activation::activate(&html, runner.settings_mut()) {
        state = dispatch(state, msg, &mut runner, &client);
    }

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line == "quit" {
            break;
        }
        match parse_command(line) {
            Some(msg) => state = dispatch(state, msg, &mut runner, &client),
            None => print_help(),
        }
    }

    Ok(())
}

fn default_settings_path() -> PathBuf {
    std::env::current_dir()
        .unwrap_or_else(|_| PathBuf::from("."))
        .join(SETTINGS_FILENAME)
}

/// One turn of the state machine: update, run effects, re-render when dirty.
fn dispatch(
    state: ReaderState,
    msg: Msg,
    runner: &mut EffectRunner,
    client: &Arc<Mutex<BridgeClient>>,
) -> ReaderState {
    let (mut state, effects) = update(state, msg);
    runner.run(effects);
    if state.consume_dirty() {
        render::print_view(&state.view(), client);
    }
    state
}

fn parse_command(line: &str) -> Option<Msg> {
    let mut parts = line.split_whitespace();
    match parts.next()? {
        "theme" => parts.next()?.parse().ok().map(Msg::SelectTheme),
        "font" => match parts.next()? {
            "+" => Some(Msg::IncreaseFontSize),
            "-" => Some(Msg::DecreaseFontSize),
            _ => None,
        },
        "line" => match parts.next()? {
            "+" => Some(Msg::EditLineHeight(LineHeightEdit::Increase)),
            "-" => Some(Msg::EditLineHeight(LineHeightEdit::Decrease)),
            _ => None,
        },
        "weight" => Some(Msg::ToggleFontWeight),
        "popup" => Some(Msg::TogglePopup),
        "speed" => Some(Msg::ToggleSpeedReading),
        "fade" => Some(Msg::ToggleStopWordFade),
        "close" => Some(Msg::CloseReader),
        _ => None,
    }
}

fn print_help() {
    println!(
        "commands: theme <0-2> | font +|- | line +|- | weight | popup | speed | fade | close | quit"
    );
}
