use macroquad::prelude::*;

use crate::application::Session;
use crate::config::step_fill_fraction;
use crate::domain::{ConwayEngine, LangtonEngine};
use crate::error::RuleError;
use crate::rendering::GridView;
use crate::ui::{Action, Button, RuleEditor, RuleField, grid_area_width};

/// Action of the button clicked this frame, if any
pub fn clicked_action(buttons: &[(Action, Button)], mouse_pos: (f32, f32)) -> Option<Action> {
    buttons
        .iter()
        .find(|(_, btn)| btn.is_clicked(mouse_pos))
        .map(|&(action, _)| action)
}

/// Keyboard shortcuts
pub fn keyboard_action() -> Option<Action> {
    const KEYS: [(KeyCode, Action); 7] = [
        (KeyCode::Space, Action::ToggleRunning),
        (KeyCode::S, Action::Step),
        (KeyCode::C, Action::Clear),
        (KeyCode::R, Action::Randomize),
        (KeyCode::Minus, Action::FillDown),
        (KeyCode::Equal, Action::FillUp),
        (KeyCode::M, Action::BackToMenu),
    ];

    KEYS.iter()
        .find(|(key, _)| is_key_pressed(*key))
        .map(|&(_, action)| action)
}

/// Speed changes with the arrow keys
pub fn speed_delta() -> f32 {
    if is_key_pressed(KeyCode::Up) {
        1.0
    } else if is_key_pressed(KeyCode::Down) {
        -1.0
    } else {
        0.0
    }
}

/// Grid cell under the pointer, or `None` over the side panel. The cell may
/// still be outside the grid; the engine ignores those.
pub fn pointer_cell(view: &GridView, mouse_pos: (f32, f32)) -> Option<(i32, i32)> {
    (mouse_pos.0 < grid_area_width()).then(|| view.screen_to_cell(mouse_pos.0, mouse_pos.1))
}

/// Left button paints, right button erases
pub fn handle_conway_paint(session: &mut Session<ConwayEngine>, view: &GridView, mouse_pos: (f32, f32)) {
    let Some((x, y)) = pointer_cell(view, mouse_pos) else {
        return;
    };
    if is_mouse_button_down(MouseButton::Left) {
        session.engine.place_cell(x, y);
    } else if is_mouse_button_down(MouseButton::Right) {
        session.engine.erase_cell(x, y);
    }
}

/// While paused, left click puts the ant under the pointer and right
/// button paints cells for it to walk into
pub fn handle_ant_placement(session: &mut Session<LangtonEngine>, view: &GridView, mouse_pos: (f32, f32)) {
    if session.is_running {
        return;
    }
    let Some((x, y)) = pointer_cell(view, mouse_pos) else {
        return;
    };
    if is_mouse_button_down(MouseButton::Left) {
        session.engine.place_agent(x, y);
    } else if is_mouse_button_down(MouseButton::Right) {
        session.engine.place_cell(x, y);
    }
}

/// Apply the editor's birth and survival text to the engine. A rejected
/// rule is kept in the editor as an error and the running rule is left as
/// it was.
pub fn submit_rule(session: &mut Session<ConwayEngine>, editor: &mut RuleEditor) -> Result<(), RuleError> {
    let result = session
        .engine
        .configure_text(editor.text(RuleField::Birth), editor.text(RuleField::Survive));
    match &result {
        Ok(()) => {
            editor.sync(&session.engine.rule());
            editor.blur();
        }
        Err(err) => editor.set_error(Some(err.to_string())),
    }
    result
}

/// Apply a panel action to the Conway session
pub fn apply_conway_action(
    session: Session<ConwayEngine>,
    action: Action,
    fill_fraction: &mut f64,
) -> Session<ConwayEngine> {
    match action {
        Action::ToggleRunning => session.toggle_running(),
        Action::Step => session.step(),
        Action::Clear => session.clear(),
        Action::Randomize => {
            let mut session = session;
            if let Err(err) = session.randomize(*fill_fraction) {
                log::warn!("Randomize skipped: {err}");
            }
            session
        }
        Action::FillDown => {
            *fill_fraction = step_fill_fraction(*fill_fraction, -1);
            session
        }
        Action::FillUp => {
            *fill_fraction = step_fill_fraction(*fill_fraction, 1);
            session
        }
        Action::BackToMenu => session.pause(),
    }
}

/// Apply a panel action to the Langton session. Seeding actions do not
/// apply to the ant.
pub fn apply_langton_action(session: Session<LangtonEngine>, action: Action) -> Session<LangtonEngine> {
    match action {
        Action::ToggleRunning => session.toggle_running(),
        Action::Step => session.step(),
        Action::Clear => session.clear(),
        Action::BackToMenu => session.pause(),
        Action::Randomize | Action::FillDown | Action::FillUp => session,
    }
}
