use macroquad::prelude::*;
use crate::application::GameState;
use crate::ui::{Button, ButtonAction};

/// Apply a panel action to the state
pub fn apply_action(state: GameState, action: ButtonAction) -> GameState {
    match action {
        ButtonAction::Toggle => state.toggle_running(),
        ButtonAction::Step => state.step_once(),
        ButtonAction::Reseed => state.reseed(),
        ButtonAction::Clear => state.clear(),
        ButtonAction::Algorithm => state.toggle_algorithm(),
    }
}

/// Process keyboard input functionally
pub fn process_keyboard_input(state: GameState) -> GameState {
    type KeyAction = (KeyCode, fn(GameState) -> GameState);

    let actions: [KeyAction; 7] = [
        (KeyCode::Space, GameState::toggle_running),
        (KeyCode::S, GameState::step_once),
        (KeyCode::R, GameState::reseed),
        (KeyCode::C, GameState::clear),
        (KeyCode::P, GameState::toggle_algorithm),
        (KeyCode::Up, |s| s.adjust_speed(1.0)),
        (KeyCode::Down, |s| s.adjust_speed(-1.0)),
    ];

    actions.iter().fold(state, |s, (key, action)| {
        if is_key_pressed(*key) { action(s) } else { s }
    })
}

/// Process button clicks functionally
pub fn process_button_clicks(
    state: GameState,
    buttons: &[(ButtonAction, Button)],
    mouse_pos: (f32, f32)
) -> GameState {
    buttons
        .iter()
        .filter(|(_, btn)| btn.is_clicked(mouse_pos))
        .fold(state, |s, &(action, _)| apply_action(s, action))
}
