use rand::Rng;

use super::BoundedGrid;
use crate::error::SeedError;

/// Uniform random fill for a grid.
///
/// Draws `round(fraction * width * height)` coordinates uniformly with
/// replacement and marks each one alive. Repeated draws land on already
/// alive cells, so the filled share is approximately, not exactly,
/// `fraction`.
pub struct RandomSeeder<R> {
    rng: R,
}

impl<R: Rng> RandomSeeder<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Clear the grid and scatter live cells over it. Returns the number of
    /// draws made. An invalid fraction leaves the grid untouched.
    pub fn seed(&mut self, grid: &mut BoundedGrid, fraction: f64) -> Result<usize, SeedError> {
        let draws = draw_count(grid, fraction)?;
        let (width, height) = grid.dimensions();

        grid.clear_all();
        for _ in 0..draws {
            let x = self.rng.random_range(0..width);
            let y = self.rng.random_range(0..height);
            // Dimensions fit in i32, see BoundedGrid::new.
            grid.set(x as i32, y as i32);
        }
        Ok(draws)
    }
}

/// Number of random draws for a fill fraction
pub fn draw_count(grid: &BoundedGrid, fraction: f64) -> Result<usize, SeedError> {
    if !fraction.is_finite() || !(0.0..=1.0).contains(&fraction) {
        return Err(SeedError::InvalidFraction { fraction });
    }
    let (width, height) = grid.dimensions();
    Ok((fraction * (width * height) as f64).round() as usize)
}
