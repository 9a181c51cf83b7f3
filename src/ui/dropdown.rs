use macroquad::prelude::*;

use super::button::contains;

const ITEM_HEIGHT: f32 = 28.0;
const FONT_SIZE: f32 = 16.0;

/// Dropdown selector UI component
#[derive(Clone)]
pub struct Dropdown {
    x: f32,
    y: f32,
    width: f32,
    items: Vec<String>,
    selected: usize,
    is_open: bool,
    label: String,
}

impl Dropdown {
    pub fn new(x: f32, y: f32, width: f32, label: impl Into<String>, items: Vec<String>) -> Self {
        Self {
            x,
            y,
            width,
            items,
            selected: 0,
            is_open: false,
            label: label.into(),
        }
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn close(&mut self) {
        self.is_open = false;
    }

    /// Update position for responsive layout
    pub fn set_position(&mut self, x: f32, y: f32) {
        self.x = x;
        self.y = y;
    }

    /// Whether the pointer is over the header or an open item list
    pub fn is_hovered_any(&self, mouse_pos: (f32, f32)) -> bool {
        let rows = if self.is_open { self.items.len() + 1 } else { 1 };
        contains(self.x, self.y, self.width, rows as f32 * ITEM_HEIGHT, mouse_pos)
    }

    fn is_hovered_main(&self, mouse_pos: (f32, f32)) -> bool {
        contains(self.x, self.y, self.width, ITEM_HEIGHT, mouse_pos)
    }

    fn item_y(&self, index: usize) -> f32 {
        self.y + ITEM_HEIGHT * (index + 1) as f32
    }

    fn is_hovered_item(&self, mouse_pos: (f32, f32), index: usize) -> bool {
        contains(self.x, self.item_y(index), self.width, ITEM_HEIGHT, mouse_pos)
    }

    /// Handle interaction and return the index picked this frame, if any.
    /// Re-picking the current item still counts, so a pattern can be placed
    /// twice in a row.
    pub fn update(&mut self, mouse_pos: (f32, f32)) -> Option<usize> {
        if !is_mouse_button_pressed(MouseButton::Left) {
            return None;
        }
        if self.is_hovered_main(mouse_pos) {
            self.is_open = !self.is_open;
            return None;
        }
        if !self.is_open {
            return None;
        }

        self.is_open = false;
        let picked = (0..self.items.len()).find(|&i| self.is_hovered_item(mouse_pos, i))?;
        self.selected = picked;
        Some(picked)
    }

    pub fn draw(&self, mouse_pos: (f32, f32)) {
        draw_text(&self.label, self.x, self.y - 5.0, 14.0, GRAY);

        let header_color = if self.is_hovered_main(mouse_pos) {
            Color::from_rgba(100, 149, 237, 255)
        } else {
            Color::from_rgba(70, 130, 180, 255)
        };
        draw_rectangle(self.x, self.y, self.width, ITEM_HEIGHT, header_color);
        draw_rectangle_lines(self.x, self.y, self.width, ITEM_HEIGHT, 2.0, WHITE);
        let header = truncate(&self.items[self.selected], self.width - 30.0);
        draw_text(&header, self.x + 5.0, self.y + 20.0, FONT_SIZE, WHITE);
        draw_text("v", self.x + self.width - 16.0, self.y + 20.0, FONT_SIZE, WHITE);

        if !self.is_open {
            return;
        }

        for (i, item) in self.items.iter().enumerate() {
            let item_y = self.item_y(i);
            let item_color = if self.is_hovered_item(mouse_pos, i) {
                Color::from_rgba(100, 149, 237, 255)
            } else if i == self.selected {
                Color::from_rgba(50, 100, 150, 255)
            } else {
                Color::from_rgba(45, 45, 45, 255)
            };
            draw_rectangle(self.x, item_y, self.width, ITEM_HEIGHT, item_color);
            draw_rectangle_lines(self.x, item_y, self.width, ITEM_HEIGHT, 1.0, Color::from_rgba(80, 80, 80, 255));
            draw_text(&truncate(item, self.width - 10.0), self.x + 5.0, item_y + 20.0, FONT_SIZE, WHITE);
        }
    }
}

/// Shorten text with an ellipsis until it fits `max_width`
fn truncate(text: &str, max_width: f32) -> String {
    let fits = |s: &str| measure_text(s, None, FONT_SIZE as u16, 1.0).width <= max_width;
    if fits(text) {
        return text.to_owned();
    }
    let mut truncated = text.to_owned();
    while !truncated.is_empty() && !fits(&format!("{truncated}...")) {
        truncated.pop();
    }
    format!("{truncated}...")
}
