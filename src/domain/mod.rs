mod automaton;
mod cell;
mod conway;
mod grid;
mod langton;
mod neighbors;
mod patterns;
mod rules;
mod seeder;

pub use automaton::Automaton;
pub use cell::CellState;
pub use conway::ConwayEngine;
pub use grid::{BoundedGrid, GridSnapshot};
pub use langton::{Ant, Heading, LangtonEngine};
pub use neighbors::count_alive_neighbors;
pub use patterns::{Pattern, presets};
pub use rules::{LifeRule, MAX_NEIGHBORS, NeighborSet, all_rules};
pub use seeder::{RandomSeeder, draw_count};
