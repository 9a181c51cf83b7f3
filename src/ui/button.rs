use macroquad::prelude::*;

/// Button UI component with hover and click detection
#[derive(Clone)]
pub struct Button {
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    text: String,
    color: Color,
    hover_color: Color,
}

impl Button {
    pub fn new(x: f32, y: f32, width: f32, height: f32, text: impl Into<String>) -> Self {
        Self {
            x,
            y,
            width,
            height,
            text: text.into(),
            color: Color::from_rgba(70, 130, 180, 255),
            hover_color: Color::from_rgba(100, 149, 237, 255),
        }
    }

    /// Highlight the button independently of hover, e.g. while running
    pub fn with_active(mut self, active: bool) -> Self {
        if active {
            self.color = Color::from_rgba(46, 139, 87, 255);
            self.hover_color = Color::from_rgba(60, 179, 113, 255);
        }
        self
    }

    pub fn is_hovered(&self, mouse_pos: (f32, f32)) -> bool {
        contains(self.x, self.y, self.width, self.height, mouse_pos)
    }

    pub fn draw(&self, mouse_pos: (f32, f32)) {
        let color = if self.is_hovered(mouse_pos) {
            self.hover_color
        } else {
            self.color
        };

        draw_rectangle(self.x, self.y, self.width, self.height, color);
        draw_rectangle_lines(self.x, self.y, self.width, self.height, 2.0, WHITE);

        let text_size = measure_text(&self.text, None, 18, 1.0);
        draw_text(
            &self.text,
            self.x + (self.width - text_size.width) / 2.0,
            self.y + (self.height + text_size.height) / 2.0,
            18.0,
            WHITE,
        );
    }

    /// Check if button was clicked this frame
    pub fn is_clicked(&self, mouse_pos: (f32, f32)) -> bool {
        self.is_hovered(mouse_pos) && is_mouse_button_pressed(MouseButton::Left)
    }
}

/// Point-in-rectangle test, edges inclusive
pub(crate) fn contains(x: f32, y: f32, width: f32, height: f32, point: (f32, f32)) -> bool {
    point.0 >= x && point.0 <= x + width && point.1 >= y && point.1 <= y + height
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_edges() {
        assert!(contains(10.0, 10.0, 20.0, 5.0, (10.0, 10.0)));
        assert!(contains(10.0, 10.0, 20.0, 5.0, (30.0, 15.0)));
        assert!(!contains(10.0, 10.0, 20.0, 5.0, (30.1, 12.0)));
        assert!(!contains(10.0, 10.0, 20.0, 5.0, (15.0, 9.9)));
    }
}
