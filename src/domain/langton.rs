//! Langton's Ant: a single mobile agent that flips the cell under it,
//! turns based on the cell's prior state, and steps forward.

use super::{Automaton, BoundedGrid, CellState};
use crate::error::GridError;

/// Direction the ant faces, in clockwise order
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Hash)]
pub enum Heading {
    #[default]
    Up,
    Right,
    Down,
    Left,
}

impl Heading {
    pub const fn clockwise(self) -> Self {
        match self {
            Heading::Up => Heading::Right,
            Heading::Right => Heading::Down,
            Heading::Down => Heading::Left,
            Heading::Left => Heading::Up,
        }
    }

    pub const fn counter_clockwise(self) -> Self {
        match self {
            Heading::Up => Heading::Left,
            Heading::Left => Heading::Down,
            Heading::Down => Heading::Right,
            Heading::Right => Heading::Up,
        }
    }

    /// Unit step; y grows downward
    pub const fn offset(self) -> (i32, i32) {
        match self {
            Heading::Up => (0, -1),
            Heading::Right => (1, 0),
            Heading::Down => (0, 1),
            Heading::Left => (-1, 0),
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Ant {
    pub x: i32,
    pub y: i32,
    pub heading: Heading,
}

impl Ant {
    fn step_forward(&mut self) {
        let (dx, dy) = self.heading.offset();
        self.x = self.x.saturating_add(dx);
        self.y = self.y.saturating_add(dy);
    }
}

/// Grid plus at most one ant. Without an ant, `advance` does nothing.
pub struct LangtonEngine {
    grid: BoundedGrid,
    ant: Option<Ant>,
}

impl LangtonEngine {
    pub fn new(width: usize, height: usize) -> Result<Self, GridError> {
        Ok(Self {
            grid: BoundedGrid::new(width, height)?,
            ant: None,
        })
    }

    pub fn grid(&self) -> &BoundedGrid {
        &self.grid
    }

    pub fn ant(&self) -> Option<Ant> {
        self.ant
    }

    /// Put the ant at (x, y) facing up. Out-of-bounds placement is ignored.
    pub fn place_agent(&mut self, x: i32, y: i32) {
        if self.grid.get(x, y).is_none() {
            log::trace!("Ignoring ant placement outside the grid at ({x}, {y})");
            return;
        }
        log::debug!("Ant placed at ({x}, {y})");
        self.ant = Some(Ant {
            x,
            y,
            heading: Heading::Up,
        });
    }

    /// Pre-fill a cell before the ant starts walking
    pub fn place_cell(&mut self, x: i32, y: i32) {
        self.grid.set(x, y);
    }

    /// Kill every cell and remove the ant
    pub fn clear(&mut self) {
        self.grid.clear_all();
        self.ant = None;
    }

    /// Flip the cell under the ant, turn, then move one cell.
    ///
    /// Dead: becomes alive, turn clockwise. Anything else, including the
    /// undefined state off the grid: cleared (a no-op off the grid), turn
    /// counter-clockwise. The move uses the post-turn heading and may leave
    /// the grid.
    pub fn advance(&mut self) {
        let Some(ant) = self.ant.as_mut() else {
            return;
        };

        match self.grid.get(ant.x, ant.y) {
            Some(CellState::Dead) => {
                self.grid.set(ant.x, ant.y);
                ant.heading = ant.heading.clockwise();
            }
            Some(CellState::Alive) | None => {
                self.grid.clear_cell(ant.x, ant.y);
                ant.heading = ant.heading.counter_clockwise();
            }
        }
        ant.step_forward();
    }
}

impl Automaton for LangtonEngine {
    fn name(&self) -> &'static str {
        "Langton's Ant"
    }

    fn dimensions(&self) -> (usize, usize) {
        self.grid.dimensions()
    }

    fn cell_state(&self, x: i32, y: i32) -> Option<CellState> {
        self.grid.get(x, y)
    }

    fn population(&self) -> usize {
        self.grid.alive_count()
    }

    fn advance(&mut self) {
        LangtonEngine::advance(self);
    }

    fn clear(&mut self) {
        LangtonEngine::clear(self);
    }

    fn marker(&self) -> Option<(i32, i32)> {
        self.ant.map(|ant| (ant.x, ant.y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ant_at(x: i32, y: i32, heading: Heading) -> Option<Ant> {
        Some(Ant { x, y, heading })
    }

    #[test]
    fn test_heading_cycle() {
        let mut heading = Heading::Up;
        for expected in [Heading::Right, Heading::Down, Heading::Left, Heading::Up] {
            heading = heading.clockwise();
            assert_eq!(heading, expected);
        }
        for h in [Heading::Up, Heading::Right, Heading::Down, Heading::Left] {
            assert_eq!(h.clockwise().counter_clockwise(), h);
            assert_eq!(h.counter_clockwise(), h.clockwise().clockwise().clockwise());
        }
    }

    #[test]
    fn test_advance_without_ant_is_noop() {
        let mut engine = LangtonEngine::new(5, 5).unwrap();
        engine.place_cell(2, 2);
        let before = engine.grid().clone();
        engine.advance();
        assert_eq!(engine.grid(), &before);
        assert_eq!(engine.ant(), None);
    }

    #[test]
    fn test_place_agent_out_of_bounds_ignored() {
        let mut engine = LangtonEngine::new(5, 5).unwrap();
        engine.place_agent(5, 0);
        engine.place_agent(-1, 2);
        assert_eq!(engine.ant(), None);

        engine.place_agent(4, 4);
        assert_eq!(engine.ant(), ant_at(4, 4, Heading::Up));
        assert_eq!(engine.population(), 0);
    }

    #[test]
    fn test_first_two_steps() {
        let mut engine = LangtonEngine::new(11, 11).unwrap();
        engine.place_agent(5, 5);

        engine.advance();
        assert_eq!(engine.cell_state(5, 5), Some(CellState::Alive));
        assert_eq!(engine.ant(), ant_at(6, 5, Heading::Right));

        engine.advance();
        assert_eq!(engine.cell_state(6, 5), Some(CellState::Alive));
        assert_eq!(engine.ant(), ant_at(6, 6, Heading::Down));
    }

    #[test]
    fn test_revisit_alive_cell_turns_counter_clockwise() {
        let mut engine = LangtonEngine::new(11, 11).unwrap();
        engine.place_agent(5, 5);
        // Four clockwise steps bring the ant back to its starting cell.
        for _ in 0..4 {
            engine.advance();
        }
        assert_eq!(engine.ant(), ant_at(5, 5, Heading::Up));
        assert_eq!(engine.cell_state(5, 5), Some(CellState::Alive));

        engine.advance();
        assert_eq!(engine.cell_state(5, 5), Some(CellState::Dead));
        assert_eq!(engine.ant(), ant_at(4, 5, Heading::Left));
    }

    #[test]
    fn test_replacing_ant_resets_heading() {
        let mut engine = LangtonEngine::new(5, 5).unwrap();
        engine.place_agent(2, 2);
        engine.advance();
        engine.place_agent(1, 1);
        assert_eq!(engine.ant(), ant_at(1, 1, Heading::Up));
        assert_eq!(engine.cell_state(2, 2), Some(CellState::Alive));
    }

    #[test]
    fn test_off_grid_walk_and_reentry() {
        let mut engine = LangtonEngine::new(3, 3).unwrap();
        engine.place_cell(0, 0);
        engine.place_agent(0, 0);

        // Alive: cleared, turns left, walks off the west edge.
        engine.advance();
        assert_eq!(engine.cell_state(0, 0), Some(CellState::Dead));
        assert_eq!(engine.ant(), ant_at(-1, 0, Heading::Left));

        // Off the grid the ant keeps turning counter-clockwise.
        let before = engine.grid().clone();
        engine.advance();
        assert_eq!(engine.ant(), ant_at(-1, 1, Heading::Down));
        engine.advance();
        assert_eq!(engine.ant(), ant_at(0, 1, Heading::Right));
        assert_eq!(engine.grid(), &before);

        // Back in bounds, a dead cell flips and turns clockwise again.
        engine.advance();
        assert_eq!(engine.cell_state(0, 1), Some(CellState::Alive));
        assert_eq!(engine.ant(), ant_at(0, 2, Heading::Down));
    }

    #[test]
    fn test_long_run_never_panics() {
        let mut engine = LangtonEngine::new(8, 8).unwrap();
        engine.place_agent(4, 4);
        for _ in 0..10_000 {
            engine.advance();
        }
        assert!(engine.ant().is_some());
        assert!(engine.population() <= 64);
    }

    #[test]
    fn test_clear_removes_ant() {
        let mut engine = LangtonEngine::new(5, 5).unwrap();
        engine.place_agent(2, 2);
        engine.advance();
        engine.clear();
        assert_eq!(engine.ant(), None);
        assert_eq!(engine.marker(), None);
        assert_eq!(engine.population(), 0);
    }
}
