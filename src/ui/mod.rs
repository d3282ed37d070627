mod button;

pub use button::Button;

use macroquad::prelude::{screen_height, screen_width};

pub const PANEL_WIDTH: f32 = 180.0;
pub const BUTTON_HEIGHT: f32 = 40.0;
const BUTTON_GAP: f32 = 10.0;
const BUTTONS_TOP: f32 = 20.0;

/// Actions bound to the panel buttons, in display order
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ButtonAction {
    Toggle,
    Step,
    Reseed,
    Clear,
    Algorithm,
}

impl ButtonAction {
    pub const ALL: [ButtonAction; 5] = [
        ButtonAction::Toggle,
        ButtonAction::Step,
        ButtonAction::Reseed,
        ButtonAction::Clear,
        ButtonAction::Algorithm,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ButtonAction::Toggle => "Toggle",
            ButtonAction::Step => "Step",
            ButtonAction::Reseed => "Reseed",
            ButtonAction::Clear => "Clear",
            ButtonAction::Algorithm => "Serial/Parallel",
        }
    }
}

/// Get the X position where the panel starts (right side)
pub fn panel_x() -> f32 {
    screen_width() - PANEL_WIDTH
}

/// Get the width of the grid area
pub fn grid_area_width() -> f32 {
    screen_width() - PANEL_WIDTH
}

/// Get the height of the grid area
pub fn grid_area_height() -> f32 {
    screen_height()
}

/// Y coordinate of the bottom edge of the button stack
pub fn buttons_bottom() -> f32 {
    BUTTONS_TOP + ButtonAction::ALL.len() as f32 * (BUTTON_HEIGHT + BUTTON_GAP)
}

/// Create one button per action, stacked at the top of the panel
pub fn create_buttons() -> Vec<(ButtonAction, Button)> {
    let px = panel_x();
    ButtonAction::ALL
        .iter()
        .enumerate()
        .map(|(i, &action)| {
            let y = BUTTONS_TOP + i as f32 * (BUTTON_HEIGHT + BUTTON_GAP);
            (action, Button::new(px, y, PANEL_WIDTH, BUTTON_HEIGHT, action.label()))
        })
        .collect()
}
