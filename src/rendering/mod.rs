use macroquad::prelude::*;

use crate::domain::{Automaton, CellState, LifeRule, NeighborSet, Pattern};
use crate::ui::{Action, Button, Dropdown, PANEL_WIDTH, panel_x};

const ALIVE_COLOR: Color = Color::new(0.0, 0.0, 0.0, 1.0);
const DEAD_COLOR: Color = Color::new(1.0, 1.0, 1.0, 1.0);
const MARKER_COLOR: Color = Color::new(0.94, 0.0, 0.0, 1.0);
const CURSOR_COLOR: Color = Color::new(0.5, 0.5, 0.5, 0.8);

/// Maps between screen pixels and grid cells. The grid is drawn from the
/// top-left corner of the window.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridView {
    pub cell_size: f32,
}

impl GridView {
    pub fn new(cell_size: f32) -> Self {
        Self { cell_size }
    }

    /// Cell under a screen position. Positions left of or above the grid
    /// map to negative coordinates.
    pub fn screen_to_cell(&self, screen_x: f32, screen_y: f32) -> (i32, i32) {
        (
            (screen_x / self.cell_size).floor() as i32,
            (screen_y / self.cell_size).floor() as i32,
        )
    }

    pub fn cell_to_screen(&self, x: i32, y: i32) -> (f32, f32) {
        (x as f32 * self.cell_size, y as f32 * self.cell_size)
    }

    /// Pixel size of a grid
    pub fn extent(&self, dimensions: (usize, usize)) -> (f32, f32) {
        (
            dimensions.0 as f32 * self.cell_size,
            dimensions.1 as f32 * self.cell_size,
        )
    }
}

/// Paint every cell by asking the engine for its state, then the marker
pub fn draw_automaton(automaton: &dyn Automaton, view: &GridView) {
    let (width, height) = automaton.dimensions();
    let (px_width, px_height) = view.extent((width, height));
    draw_rectangle(0.0, 0.0, px_width, px_height, DEAD_COLOR);

    for y in 0..height as i32 {
        for x in 0..width as i32 {
            if automaton.cell_state(x, y) == Some(CellState::Alive) {
                let (sx, sy) = view.cell_to_screen(x, y);
                draw_rectangle(sx, sy, view.cell_size, view.cell_size, ALIVE_COLOR);
            }
        }
    }

    if let Some((x, y)) = automaton.marker()
        && automaton.cell_state(x, y).is_some()
    {
        let (sx, sy) = view.cell_to_screen(x, y);
        draw_rectangle(sx, sy, view.cell_size, view.cell_size, MARKER_COLOR);
    }
}

/// Outline the cell under the pointer
pub fn draw_cursor(view: &GridView, mouse_pos: (f32, f32), color: Option<Color>) {
    let (x, y) = view.screen_to_cell(mouse_pos.0, mouse_pos.1);
    let (sx, sy) = view.cell_to_screen(x, y);
    draw_rectangle_lines(sx, sy, view.cell_size, view.cell_size, 1.5, color.unwrap_or(CURSOR_COLOR));
}

/// Draw a semi-transparent preview of a pattern centered on the pointer
pub fn draw_pattern_preview(pattern: &Pattern, view: &GridView, mouse_pos: (f32, f32)) {
    let (cx, cy) = view.screen_to_cell(mouse_pos.0, mouse_pos.1);
    let left = cx - pattern.width / 2;
    let top = cy - pattern.height / 2;

    for &(dx, dy) in &pattern.cells {
        let (sx, sy) = view.cell_to_screen(left + dx, top + dy);
        draw_rectangle(sx, sy, view.cell_size, view.cell_size, Color::from_rgba(0, 160, 90, 120));
    }

    let (bx, by) = view.cell_to_screen(left, top);
    draw_rectangle_lines(
        bx,
        by,
        pattern.width as f32 * view.cell_size,
        pattern.height as f32 * view.cell_size,
        2.0,
        Color::from_rgba(255, 200, 0, 180),
    );
}

/// Status lines shown over the Conway grid
pub fn conway_status(
    rule: &LifeRule,
    fill_fraction: f64,
    generation: u64,
    population: usize,
    rule_error: Option<&str>,
) -> Vec<String> {
    let mut lines = vec![
        format!("Random fill: {:.0}%", fill_fraction * 100.0),
        format!("Born with {} neighbours", describe(rule.birth)),
        format!("Survives with {} neighbours", describe(rule.survive)),
        format!("Rule: {rule}"),
        format!("Generation: {generation}"),
        format!("Population: {population}"),
    ];
    if let Some(err) = rule_error {
        lines.push(format!("Rejected: {err}"));
    }
    lines
}

/// Status lines shown over the Langton grid
pub fn langton_status(turn: u64, ant: Option<(i32, i32)>, population: usize) -> Vec<String> {
    let ant = match ant {
        Some((x, y)) => format!("Ant: ({x}, {y})"),
        None => "Ant: click the grid to place".to_owned(),
    };
    vec![format!("Turn: {turn}"), ant, format!("Population: {population}")]
}

fn describe(counts: NeighborSet) -> String {
    if counts.is_empty() {
        "no".to_owned()
    } else {
        counts.to_string()
    }
}

/// Side panel: title, status text, buttons, then dropdowns on top
pub fn draw_panel(
    title: &str,
    status: &[String],
    buttons: &[(Action, Button)],
    dropdowns: &[&Dropdown],
    mouse_pos: (f32, f32),
) {
    let px = panel_x();
    draw_rectangle(px, 0.0, PANEL_WIDTH, screen_height(), Color::from_rgba(30, 30, 30, 255));
    draw_text(title, px + 10.0, 24.0, 20.0, WHITE);

    for (i, line) in status.iter().enumerate() {
        draw_text(line, px + 10.0, 48.0 + i as f32 * 16.0, 15.0, LIGHTGRAY);
    }

    buttons.iter().for_each(|(_, btn)| btn.draw(mouse_pos));

    // Closed dropdowns first so an open list is drawn over them
    dropdowns.iter().filter(|d| !d.is_open()).for_each(|d| d.draw(mouse_pos));
    dropdowns.iter().filter(|d| d.is_open()).for_each(|d| d.draw(mouse_pos));

    draw_text(&format!("FPS: {}", get_fps()), px + 10.0, screen_height() - 10.0, 14.0, GRAY);
}

/// Landing screen text
pub fn draw_menu(buttons: &[Button], mouse_pos: (f32, f32)) {
    let lines = [
        "Cellular automata demos",
        "",
        "A collection of simulations of cellular automaton algorithms.",
        "Pick a demo below. Space starts and stops, S steps, C clears.",
    ];
    for (i, line) in lines.iter().enumerate() {
        let size = if i == 0 { 36.0 } else { 20.0 };
        draw_text(line, 40.0, 70.0 + i as f32 * 30.0, size, WHITE);
    }
    buttons.iter().for_each(|btn| btn.draw(mouse_pos));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_screen_to_cell_floors() {
        let view = GridView::new(8.0);
        assert_eq!(view.screen_to_cell(0.0, 0.0), (0, 0));
        assert_eq!(view.screen_to_cell(15.9, 16.0), (1, 2));
        assert_eq!(view.screen_to_cell(-0.5, -8.5), (-1, -2));
    }

    #[test]
    fn test_cell_to_screen_and_extent() {
        let view = GridView::new(6.0);
        assert_eq!(view.cell_to_screen(3, 2), (18.0, 12.0));
        assert_eq!(view.extent((10, 5)), (60.0, 30.0));
    }

    #[test]
    fn test_conway_status_text() {
        let lines = conway_status(&LifeRule::seeds(), 0.05, 12, 40, None);
        assert_eq!(lines[0], "Random fill: 5%");
        assert_eq!(lines[1], "Born with 2 neighbours");
        assert_eq!(lines[2], "Survives with no neighbours");
        assert_eq!(lines[3], "Rule: B2/S");
        assert_eq!(lines[4], "Generation: 12");
        assert_eq!(lines.len(), 6);

        let lines = conway_status(&LifeRule::conway(), 0.05, 0, 0, Some("count 9 too big"));
        assert_eq!(lines.last().map(String::as_str), Some("Rejected: count 9 too big"));
    }

    #[test]
    fn test_langton_status_text() {
        assert_eq!(langton_status(3, Some((4, -1)), 3)[1], "Ant: (4, -1)");
        assert!(langton_status(0, None, 0)[1].contains("place"));
    }
}
