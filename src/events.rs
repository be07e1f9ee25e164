//! Event handling functions for user input and application state updates.

use std::time::Duration;

use color_eyre::eyre::Result;
use log::debug;
use ratatui::crossterm::event::{self, Event, KeyCode, KeyEventKind};

use crate::{
    maze::Direction,
    types::{ControlScheme, MainMenuItem, OptionsMenuItem, Screen},
    App,
};

/// Time to wait for an input event before redrawing, in milliseconds.
///
/// This also bounds how often the stopwatch and the hint animation refresh on screen.
const EVENT_POLL_MS: u64 = 40;

/// Handles input events and updates the application state accordingly.
///
/// This function polls for keyboard events and dispatches them to the appropriate handler
/// functions based on the key pressed. It uses a timeout to avoid blocking the UI.
pub(crate) fn handle_events(app: &mut App) -> Result<()> {
    if event::poll(Duration::from_millis(EVENT_POLL_MS))? {
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                handle_key(app, key.code);
            }
        }
    }

    if matches!(app.screen, Screen::InGame) {
        app.animation_manager.update();
    }

    Ok(())
}

/// Dispatches a single key press.
pub(crate) fn handle_key(app: &mut App, code: KeyCode) {
    if matches!(app.screen, Screen::InGame) {
        if let Some(direction) = key_direction(code, app.settings.controls) {
            let _ = app.apply_move(direction);
            return;
        }
    }

    match code {
        KeyCode::Char('q') => app.exit = true,
        KeyCode::Char('j') => handle_j_events(app),
        KeyCode::Char('k') => handle_k_events(app),
        KeyCode::Char('l') => handle_l_events(app),
        KeyCode::Char('h') => handle_h_events(app),
        KeyCode::Char('n') if matches!(app.screen, Screen::InGame) => app.start_game(),
        KeyCode::Char('p') if matches!(app.screen, Screen::InGame) => app.toggle_hint(),
        _ => {}
    }
}

/// Maps a key to the move intent it triggers in game.
///
/// Arrow keys go through the control scheme, while `w`, `a`, `s` and `d` always move literally. Any
/// other key is not a move intent.
pub(crate) const fn key_direction(code: KeyCode, controls: ControlScheme) -> Option<Direction> {
    match code {
        KeyCode::Up => Some(controls.apply(Direction::Up)),
        KeyCode::Right => Some(controls.apply(Direction::Right)),
        KeyCode::Down => Some(controls.apply(Direction::Down)),
        KeyCode::Left => Some(controls.apply(Direction::Left)),
        KeyCode::Char('w') => Some(Direction::Up),
        KeyCode::Char('d') => Some(Direction::Right),
        KeyCode::Char('s') => Some(Direction::Down),
        KeyCode::Char('a') => Some(Direction::Left),
        _ => None,
    }
}

/// Handles 'j' key press events for downward navigation.
///
/// This function processes the 'j' key press which is used for moving down in menus.
pub(crate) fn handle_j_events(app: &mut App) {
    match app.screen {
        Screen::MainMenu(MainMenuItem::StartGame) => {
            app.screen = Screen::MainMenu(MainMenuItem::Options);
        }
        Screen::MainMenu(MainMenuItem::Options) => {
            app.screen = Screen::MainMenu(MainMenuItem::Quit);
        }
        Screen::OptionsMenu(OptionsMenuItem::Size) => {
            app.screen = Screen::OptionsMenu(OptionsMenuItem::Controls);
        }
        Screen::OptionsMenu(OptionsMenuItem::Controls) => {
            app.screen = Screen::OptionsMenu(OptionsMenuItem::Back);
        }
        _ => {}
    }
}

/// Handles 'k' key press events for upward navigation.
///
/// This function processes the 'k' key press which is used for moving up in menus.
pub(crate) fn handle_k_events(app: &mut App) {
    match app.screen {
        Screen::MainMenu(MainMenuItem::Quit) => {
            app.screen = Screen::MainMenu(MainMenuItem::Options);
        }
        Screen::MainMenu(MainMenuItem::Options) => {
            app.screen = Screen::MainMenu(MainMenuItem::StartGame);
        }
        Screen::OptionsMenu(OptionsMenuItem::Back) => {
            app.screen = Screen::OptionsMenu(OptionsMenuItem::Controls);
        }
        Screen::OptionsMenu(OptionsMenuItem::Controls) => {
            app.screen = Screen::OptionsMenu(OptionsMenuItem::Size);
        }
        _ => {}
    }
}

/// Handles 'l' key press events for selection and forward navigation.
///
/// This function processes the 'l' key press which is used for selecting menu items. In the
/// options menu it changes the highlighted setting in place.
pub(crate) fn handle_l_events(app: &mut App) {
    match app.screen {
        Screen::MainMenu(MainMenuItem::StartGame) => {
            app.start_game();
            debug!("entered game screen");
        }
        Screen::MainMenu(MainMenuItem::Options) => {
            app.screen = Screen::OptionsMenu(OptionsMenuItem::Size);
        }
        Screen::MainMenu(MainMenuItem::Quit) => {
            app.exit = true;
        }
        Screen::OptionsMenu(OptionsMenuItem::Size) => {
            app.settings.cycle_size();
            debug!("maze size set to {}", app.settings.size);
        }
        Screen::OptionsMenu(OptionsMenuItem::Controls) => {
            app.settings.controls = app.settings.controls.toggled();
            debug!("controls set to {}", app.settings.controls.label());
        }
        Screen::OptionsMenu(OptionsMenuItem::Back) => {
            app.screen = Screen::MainMenu(MainMenuItem::Options);
        }
        Screen::InGame => {}
    }
}

/// Handles 'h' key press events for backward navigation.
///
/// This function processes the 'h' key press which is used for returning to previous screens. It
/// handles returning from the in-game screen and from the options menu to the main menu.
pub(crate) fn handle_h_events(app: &mut App) {
    match app.screen {
        Screen::InGame => {
            app.animation_manager.clear();
            app.screen = Screen::MainMenu(MainMenuItem::StartGame);
        }
        Screen::OptionsMenu(_) => {
            app.screen = Screen::MainMenu(MainMenuItem::Options);
        }
        Screen::MainMenu(_) => {}
    }
}
