use super::CellState;

/// Command/query surface shared by the rule engines.
///
/// The frontend only talks to an engine through this trait: the renderer
/// queries `cell_state` once per visible cell per frame and the session
/// calls `advance` once per tick.
pub trait Automaton {
    /// Name for the UI
    fn name(&self) -> &'static str;

    /// Grid dimensions as (width, height)
    fn dimensions(&self) -> (usize, usize);

    /// State at (x, y); `None` when outside the world
    fn cell_state(&self, x: i32, y: i32) -> Option<CellState>;

    /// Number of alive cells
    fn population(&self) -> usize;

    /// Run one generation
    fn advance(&mut self);

    /// Reset to an empty world
    fn clear(&mut self);

    /// Position the renderer should highlight, if any
    fn marker(&self) -> Option<(i32, i32)> {
        None
    }
}
