use rand::Rng;
use rayon::prelude::*;

use super::{Automaton, BoundedGrid, CellState, LifeRule, RandomSeeder, count_alive_neighbors};
use crate::error::{GridError, RuleError, SeedError};

/// Life-like engine over a bounded grid.
///
/// Each generation reads a frozen snapshot and decides every cell from it,
/// so cells updated earlier in the scan never influence later ones.
pub struct ConwayEngine {
    grid: BoundedGrid,
    rule: LifeRule,
    parallel: bool,
}

impl ConwayEngine {
    /// Create an empty engine running B3/S23
    pub fn new(width: usize, height: usize) -> Result<Self, GridError> {
        Ok(Self {
            grid: BoundedGrid::new(width, height)?,
            rule: LifeRule::default(),
            parallel: false,
        })
    }

    /// Set the starting rule (builder pattern)
    pub fn with_rule(mut self, rule: LifeRule) -> Self {
        self.rule = rule;
        self
    }

    /// Evaluate generations with rayon (builder pattern)
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn rule(&self) -> LifeRule {
        self.rule
    }

    pub fn grid(&self) -> &BoundedGrid {
        &self.grid
    }

    /// Replace the birth and survival sets. On error the previous rule
    /// stays in effect.
    pub fn configure(&mut self, birth: &[u8], survive: &[u8]) -> Result<(), RuleError> {
        self.apply_rule(LifeRule::from_counts(birth, survive), || {
            format!("birth={birth:?} survive={survive:?}")
        })
    }

    /// Same as `configure` for text input: comma separated lists (`"3"`,
    /// `"2,3"`), or full `B3/S23` notation in `birth` with `survive` ignored.
    pub fn configure_text(&mut self, birth: &str, survive: &str) -> Result<(), RuleError> {
        let parsed = if birth.contains('/') {
            birth.parse::<LifeRule>()
        } else {
            LifeRule::parse_lists(birth, survive)
        };
        self.apply_rule(parsed, || format!("birth={birth:?} survive={survive:?}"))
    }

    fn apply_rule(
        &mut self,
        parsed: Result<LifeRule, RuleError>,
        input: impl FnOnce() -> String,
    ) -> Result<(), RuleError> {
        match parsed {
            Ok(rule) => {
                self.set_rule(rule);
                Ok(())
            }
            Err(err) => {
                log::warn!("Rejected rule {}: {err}", input());
                Err(err)
            }
        }
    }

    /// Install an already validated rule; takes effect on the next advance
    pub fn set_rule(&mut self, rule: LifeRule) {
        log::debug!("Rule changed from {} to {}", self.rule, rule);
        self.rule = rule;
    }

    pub fn place_cell(&mut self, x: i32, y: i32) {
        self.grid.set(x, y);
    }

    pub fn erase_cell(&mut self, x: i32, y: i32) {
        self.grid.clear_cell(x, y);
    }

    pub fn clear(&mut self) {
        self.grid.clear_all();
    }

    /// Clear and scatter live cells over roughly `fraction` of the grid
    pub fn randomize(&mut self, fraction: f64) -> Result<usize, SeedError> {
        self.randomize_with(fraction, &mut rand::rng())
    }

    /// Same as `randomize` with a caller-provided generator
    pub fn randomize_with<R: Rng>(&mut self, fraction: f64, rng: &mut R) -> Result<usize, SeedError> {
        let draws = RandomSeeder::new(rng).seed(&mut self.grid, fraction)?;
        log::debug!(
            "Randomized at {:.0}%: {} draws, {} alive",
            fraction * 100.0,
            draws,
            self.grid.alive_count()
        );
        Ok(draws)
    }

    /// Compute the next generation
    pub fn advance(&mut self) {
        if self.parallel {
            self.advance_parallel();
        } else {
            self.advance_serial();
        }
    }

    fn advance_serial(&mut self) {
        let snapshot = self.grid.snapshot();
        let (width, height) = snapshot.dimensions();

        for y in 0..height as i32 {
            for x in 0..width as i32 {
                let Some(current) = snapshot.get(x, y) else {
                    continue;
                };
                let neighbors = count_alive_neighbors(&snapshot, x, y);
                let next = self.rule.evolve(current, neighbors);
                if next != current {
                    self.grid.write(x, y, next);
                }
            }
        }
    }

    /// Decision pass over the snapshot in parallel, then one bulk write
    fn advance_parallel(&mut self) {
        let snapshot = self.grid.snapshot();
        let (width, _) = snapshot.dimensions();
        let rule = self.rule;

        let next: Vec<CellState> = snapshot
            .cells()
            .par_iter()
            .enumerate()
            .map(|(idx, &current)| {
                let x = (idx % width) as i32;
                let y = (idx / width) as i32;
                rule.evolve(current, count_alive_neighbors(&snapshot, x, y))
            })
            .collect();

        self.grid.replace_cells(next);
    }
}

impl Automaton for ConwayEngine {
    fn name(&self) -> &'static str {
        "Conway's Game of Life"
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
        ConwayEngine::advance(self);
    }

    fn clear(&mut self) {
        ConwayEngine::clear(self);
    }
}
