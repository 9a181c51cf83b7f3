use super::CellState;
use crate::error::GridError;

/// Fixed-size 2D substrate of binary cells.
///
/// Coordinates are `(x = column, y = row)` and signed, so positions left of
/// or above the world can be expressed. Reads outside the world return `None`
/// and writes outside the world are ignored.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoundedGrid {
    width: usize,
    height: usize,
    cells: Vec<CellState>,
}

impl BoundedGrid {
    /// Create a new grid with all cells dead
    pub fn new(width: usize, height: usize) -> Result<Self, GridError> {
        let invalid = GridError::InvalidDimensions { width, height };
        if width == 0 || height == 0 {
            return Err(invalid);
        }
        // Every in-bounds cell must be addressable with i32 coordinates.
        if i32::try_from(width).is_err() || i32::try_from(height).is_err() {
            return Err(invalid);
        }
        let area = width.checked_mul(height).ok_or(invalid)?;

        Ok(Self {
            width,
            height,
            cells: vec![CellState::Dead; area],
        })
    }

    /// Get grid dimensions
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Row-major index, or `None` when (x, y) is outside the world
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        bounded_index(self.width, self.height, x, y)
    }

    /// State at (x, y); `None` means outside the world, not dead
    pub fn get(&self, x: i32, y: i32) -> Option<CellState> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// Mark (x, y) alive. No-op when out of bounds.
    pub fn set(&mut self, x: i32, y: i32) {
        self.write(x, y, CellState::Alive);
    }

    /// Mark (x, y) dead. No-op when out of bounds.
    pub fn clear_cell(&mut self, x: i32, y: i32) {
        self.write(x, y, CellState::Dead);
    }

    pub(crate) fn write(&mut self, x: i32, y: i32, state: CellState) {
        if let Some(idx) = self.index(x, y) {
            self.cells[idx] = state;
        }
    }

    /// Kill every cell
    pub fn clear_all(&mut self) {
        self.cells.iter_mut().for_each(|cell| *cell = CellState::Dead);
    }

    /// Number of alive cells
    pub fn alive_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Frozen copy of the current state
    pub fn snapshot(&self) -> GridSnapshot {
        GridSnapshot {
            width: self.width,
            height: self.height,
            cells: self.cells.clone().into_boxed_slice(),
        }
    }

    /// Replace all cells at once with a buffer computed from a snapshot
    /// of this grid.
    pub(crate) fn replace_cells(&mut self, cells: Vec<CellState>) {
        debug_assert_eq!(cells.len(), self.cells.len());
        self.cells = cells;
    }

    /// Iterate over all cells with their positions, row by row
    pub fn iter_cells(&self) -> impl Iterator<Item = (i32, i32, CellState)> + '_ {
        let width = self.width;
        self.cells
            .iter()
            .enumerate()
            .map(move |(idx, &cell)| ((idx % width) as i32, (idx / width) as i32, cell))
    }
}

/// Immutable copy of a grid, used as the read side of a generation step.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GridSnapshot {
    width: usize,
    height: usize,
    cells: Box<[CellState]>,
}

impl GridSnapshot {
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub fn get(&self, x: i32, y: i32) -> Option<CellState> {
        bounded_index(self.width, self.height, x, y).map(|idx| self.cells[idx])
    }

    /// Cells in row-major order
    pub(crate) fn cells(&self) -> &[CellState] {
        &self.cells
    }
}

fn bounded_index(width: usize, height: usize, x: i32, y: i32) -> Option<usize> {
    let x = usize::try_from(x).ok()?;
    let y = usize::try_from(y).ok()?;
    (x < width && y < height).then(|| y * width + x)
}
