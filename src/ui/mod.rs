mod button;
mod dropdown;
mod rule_editor;

pub use button::Button;
pub use dropdown::Dropdown;
pub use rule_editor::{RuleEditor, RuleField};

use macroquad::prelude::screen_width;

pub const PANEL_WIDTH: f32 = 200.0;
pub const BUTTON_HEIGHT: f32 = 34.0;
const BUTTON_GAP: f32 = 8.0;

/// Commands a demo screen accepts from buttons or keys
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Action {
    ToggleRunning,
    Step,
    Clear,
    Randomize,
    FillDown,
    FillUp,
    BackToMenu,
}

impl Action {
    pub fn label(self) -> &'static str {
        match self {
            Action::ToggleRunning => "Start/Stop",
            Action::Step => "Step",
            Action::Clear => "Clear",
            Action::Randomize => "Randomize",
            Action::FillDown => "Fill -5%",
            Action::FillUp => "Fill +5%",
            Action::BackToMenu => "Menu",
        }
    }
}

pub const CONWAY_ACTIONS: &[Action] = &[
    Action::ToggleRunning,
    Action::Step,
    Action::Clear,
    Action::Randomize,
    Action::FillDown,
    Action::FillUp,
    Action::BackToMenu,
];

pub const LANGTON_ACTIONS: &[Action] = &[
    Action::ToggleRunning,
    Action::Step,
    Action::Clear,
    Action::BackToMenu,
];

/// Get the X position where the panel starts (right side)
pub fn panel_x() -> f32 {
    screen_width() - PANEL_WIDTH
}

/// Get the width of the grid area
pub fn grid_area_width() -> f32 {
    panel_x()
}

/// Stack one button per action in the side panel, starting at `top`
pub fn create_buttons(actions: &[Action], top: f32) -> Vec<(Action, Button)> {
    let px = panel_x() + 10.0;
    let width = PANEL_WIDTH - 20.0;
    actions
        .iter()
        .enumerate()
        .map(|(i, &action)| {
            let y = top + i as f32 * (BUTTON_HEIGHT + BUTTON_GAP);
            (action, Button::new(px, y, width, BUTTON_HEIGHT, action.label()))
        })
        .collect()
}
