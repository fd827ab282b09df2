use crossterm::event::KeyEvent;
use vignette_core::SceneKind;

use crate::app::{App, Mode};
use crate::keymap::KeyBinding;

/// Input action that can be performed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    ShowScene(SceneKind),
    NextScene,
    Faster,
    Slower,
    ToggleHelp,
    ExitMode,
    None,
}

/// Handle a key event and return the corresponding action
pub fn handle_key_event(key: KeyEvent, app: &App) -> Action {
    let binding = KeyBinding::new(key.code, key.modifiers);
    let action = app.keymap.get(&binding).copied();

    match app.mode {
        Mode::Help => match action {
            // Quit still works from the overlay
            Some(Action::Quit) => Action::Quit,
            // Any other key exits help
            _ => Action::ExitMode,
        },
        Mode::Normal => action.unwrap_or(Action::None),
    }
}
