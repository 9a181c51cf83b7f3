use super::ConwayEngine;

/// A shape of live cells that can be stamped onto a Conway grid
#[derive(Clone, Debug)]
pub struct Pattern {
    pub name: &'static str,
    pub description: &'static str,
    pub width: i32,
    pub height: i32,
    /// Offsets of alive cells relative to the top-left corner
    pub cells: Vec<(i32, i32)>,
}

impl Pattern {
    pub fn new(name: &'static str, description: &'static str, cells: Vec<(i32, i32)>) -> Self {
        let width = cells.iter().map(|&(x, _)| x).max().map_or(0, |x| x + 1);
        let height = cells.iter().map(|&(_, y)| y).max().map_or(0, |y| y + 1);
        Self { name, description, width, height, cells }
    }

    /// Stamp the pattern centered on (x, y). Cells that land outside the
    /// grid are dropped.
    pub fn place_centered(&self, engine: &mut ConwayEngine, x: i32, y: i32) {
        let left = x - self.width / 2;
        let top = y - self.height / 2;
        for &(dx, dy) in &self.cells {
            engine.place_cell(left + dx, top + dy);
        }
    }
}

/// Classic Life patterns
pub mod presets {
    use super::Pattern;

    /// Smallest spaceship, travels diagonally
    pub fn glider() -> Pattern {
        Pattern::new(
            "Glider",
            "Spaceship (period 4)",
            vec![(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)],
        )
    }

    pub fn blinker() -> Pattern {
        Pattern::new("Blinker", "Oscillator (period 2)", vec![(0, 0), (1, 0), (2, 0)])
    }

    pub fn toad() -> Pattern {
        Pattern::new(
            "Toad",
            "Oscillator (period 2)",
            vec![(1, 0), (2, 0), (3, 0), (0, 1), (1, 1), (2, 1)],
        )
    }

    /// Lightweight spaceship, travels horizontally
    pub fn lwss() -> Pattern {
        Pattern::new(
            "LWSS",
            "Spaceship (period 4)",
            vec![(1, 0), (4, 0), (0, 1), (0, 2), (4, 2), (0, 3), (1, 3), (2, 3), (3, 3)],
        )
    }

    /// Methuselah, settles after 1103 generations on an unbounded plane
    pub fn r_pentomino() -> Pattern {
        Pattern::new(
            "R-pentomino",
            "Methuselah",
            vec![(1, 0), (2, 0), (0, 1), (1, 1), (1, 2)],
        )
    }

    pub fn all_patterns() -> Vec<Pattern> {
        vec![glider(), blinker(), toad(), lwss(), r_pentomino()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Automaton;

    #[test]
    fn test_pattern_bounds() {
        let glider = presets::glider();
        assert_eq!((glider.width, glider.height), (3, 3));
        let lwss = presets::lwss();
        assert_eq!((lwss.width, lwss.height), (5, 4));
    }

    fn alive_cells(engine: &ConwayEngine) -> Vec<(i32, i32)> {
        engine
            .grid()
            .iter_cells()
            .filter(|(_, _, cell)| cell.is_alive())
            .map(|(x, y, _)| (x, y))
            .collect()
    }

    #[test]
    fn test_place_centered_blinker() {
        let mut engine = ConwayEngine::new(5, 5).unwrap();
        presets::blinker().place_centered(&mut engine, 2, 2);
        assert_eq!(alive_cells(&engine), vec![(1, 2), (2, 2), (3, 2)]);
    }

    #[test]
    fn test_place_at_edge_clips() {
        let mut engine = ConwayEngine::new(4, 4).unwrap();
        presets::glider().place_centered(&mut engine, 0, 0);
        // Only the offsets landing at x >= 0 and y >= 0 survive.
        assert_eq!(engine.population(), 3);
    }

    #[test]
    fn test_glider_translates() {
        let mut engine = ConwayEngine::new(10, 10).unwrap();
        presets::glider().place_centered(&mut engine, 3, 3);
        let shifted: Vec<_> = alive_cells(&engine)
            .into_iter()
            .map(|(x, y)| (x + 1, y + 1))
            .collect();
        for _ in 0..4 {
            engine.advance();
        }
        assert_eq!(alive_cells(&engine), shifted);
    }
}
