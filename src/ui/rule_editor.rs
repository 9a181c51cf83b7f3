use macroquad::prelude::*;

use super::button::contains;
use crate::domain::LifeRule;

const FIELD_HEIGHT: f32 = 26.0;
const FIELD_GAP: f32 = 44.0;
const FONT_SIZE: f32 = 16.0;
const MAX_LEN: usize = 24;

/// Which of the two rule lists has keyboard focus
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum RuleField {
    Birth,
    Survive,
}

/// Two text fields holding the birth and survival lists as typed,
/// e.g. `3` and `2,3`. Nothing is applied until the user presses Enter.
#[derive(Clone, Debug)]
pub struct RuleEditor {
    x: f32,
    y: f32,
    width: f32,
    birth: String,
    survive: String,
    focus: Option<RuleField>,
    error: Option<String>,
}

impl RuleEditor {
    pub fn new(x: f32, y: f32, width: f32, rule: &LifeRule) -> Self {
        Self {
            x,
            y,
            width,
            birth: rule.birth.to_string(),
            survive: rule.survive.to_string(),
            focus: None,
            error: None,
        }
    }

    pub fn set_position(&mut self, x: f32, y: f32) {
        self.x = x;
        self.y = y;
    }

    /// While a field has focus, typed keys belong to it and not to shortcuts
    pub fn is_editing(&self) -> bool {
        self.focus.is_some()
    }

    pub fn focus(&self) -> Option<RuleField> {
        self.focus
    }

    pub fn text(&self, field: RuleField) -> &str {
        match field {
            RuleField::Birth => &self.birth,
            RuleField::Survive => &self.survive,
        }
    }

    /// Last rejected input, shown until the next successful apply
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn set_error(&mut self, error: Option<String>) {
        self.error = error;
    }

    /// Show the rule the engine runs now, e.g. after a preset was picked
    pub fn sync(&mut self, rule: &LifeRule) {
        self.birth = rule.birth.to_string();
        self.survive = rule.survive.to_string();
        self.error = None;
    }

    fn field_y(&self, field: RuleField) -> f32 {
        match field {
            RuleField::Birth => self.y,
            RuleField::Survive => self.y + FIELD_GAP,
        }
    }

    /// Whether the pointer is over either field
    pub fn is_hovered_any(&self, mouse_pos: (f32, f32)) -> bool {
        [RuleField::Birth, RuleField::Survive]
            .into_iter()
            .any(|field| contains(self.x, self.field_y(field), self.width, FIELD_HEIGHT, mouse_pos))
    }

    /// Focus the field under a click; a click elsewhere drops focus
    pub fn click(&mut self, mouse_pos: (f32, f32)) {
        self.focus = [RuleField::Birth, RuleField::Survive]
            .into_iter()
            .find(|&field| contains(self.x, self.field_y(field), self.width, FIELD_HEIGHT, mouse_pos));
    }

    /// Append a typed character to the focused field. Only characters that
    /// can appear in a list or in `B3/S23` notation are kept.
    pub fn push_char(&mut self, ch: char) {
        let accepted = ch.is_ascii_digit() || matches!(ch, ',' | ' ' | '/' | 'B' | 'b' | 'S' | 's');
        let Some(field) = self.focus else {
            return;
        };
        let text = match field {
            RuleField::Birth => &mut self.birth,
            RuleField::Survive => &mut self.survive,
        };
        if accepted && text.len() < MAX_LEN {
            text.push(ch);
        }
    }

    pub fn backspace(&mut self) {
        match self.focus {
            Some(RuleField::Birth) => {
                self.birth.pop();
            }
            Some(RuleField::Survive) => {
                self.survive.pop();
            }
            None => {}
        }
    }

    /// Tab moves between fields
    pub fn next_field(&mut self) {
        self.focus = match self.focus {
            Some(RuleField::Birth) => Some(RuleField::Survive),
            Some(RuleField::Survive) | None => Some(RuleField::Birth),
        };
    }

    pub fn blur(&mut self) {
        self.focus = None;
    }

    /// Feed this frame's keys to the focused field. Clicks go through
    /// `click` so an open dropdown list can take them first. Returns true
    /// when Enter was pressed in a field, i.e. the lists should be applied.
    pub fn update(&mut self) -> bool {
        if !self.is_editing() {
            // Drain so keys typed elsewhere don't show up on the next focus
            while get_char_pressed().is_some() {}
            return false;
        }

        while let Some(ch) = get_char_pressed() {
            self.push_char(ch);
        }
        if is_key_pressed(KeyCode::Backspace) {
            self.backspace();
        }
        if is_key_pressed(KeyCode::Tab) {
            self.next_field();
        }
        if is_key_pressed(KeyCode::Escape) {
            self.blur();
        }
        is_key_pressed(KeyCode::Enter) || is_key_pressed(KeyCode::KpEnter)
    }

    pub fn draw(&self) {
        let labels = [
            (RuleField::Birth, "Born with (e.g. 3 or B3/S23)"),
            (RuleField::Survive, "Survives with (e.g. 2,3)"),
        ];
        for (field, label) in labels {
            let y = self.field_y(field);
            let focused = self.focus == Some(field);
            draw_text(label, self.x, y - 5.0, 14.0, GRAY);
            draw_rectangle(self.x, y, self.width, FIELD_HEIGHT, Color::from_rgba(45, 45, 45, 255));
            let border = if focused { YELLOW } else { WHITE };
            draw_rectangle_lines(self.x, y, self.width, FIELD_HEIGHT, 2.0, border);

            let mut text = self.text(field).to_owned();
            if focused {
                text.push('_');
            }
            draw_text(&text, self.x + 5.0, y + 19.0, FONT_SIZE, WHITE);
        }
    }
}
