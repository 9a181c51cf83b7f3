// Domain layer - grid, rules and the two engines
pub mod domain;
pub mod error;
pub mod config;

// Application layer - sessions driving an engine at a fixed tick rate
pub mod application;

// Infrastructure layer - UI, rendering, input
pub mod ui;
pub mod rendering;
pub mod input;

// Re-exports for convenience
pub use application::Session;
pub use config::SimulationConfig;
pub use domain::{Automaton, BoundedGrid, CellState, ConwayEngine, LangtonEngine, LifeRule, presets};
pub use error::{ConfigError, GridError, RuleError, SeedError};
