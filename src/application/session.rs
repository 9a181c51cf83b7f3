use crate::config::SimulationConfig;
use crate::domain::{Automaton, ConwayEngine, LangtonEngine};
use crate::error::{ConfigError, SeedError};

/// Session owns one engine and drives it at a fixed tick rate.
/// This is the application layer between the frontend and the domain.
pub struct Session<A: Automaton> {
    pub engine: A,
    pub is_running: bool,
    /// Generations (Conway) or turns (Langton) since the last reset
    pub ticks: u64,
    pub update_timer: f32,
    pub ticks_per_second: f32,
}

impl<A: Automaton> Session<A> {
    pub fn new(engine: A, ticks_per_second: f32) -> Self {
        Self {
            engine,
            is_running: false,
            ticks: 0,
            update_timer: 0.0,
            ticks_per_second,
        }
    }

    /// Toggle play/pause state
    pub fn toggle_running(mut self) -> Self {
        self.is_running = !self.is_running;
        log::info!(
            "{} {} at tick {}",
            self.engine.name(),
            if self.is_running { "started" } else { "stopped" },
            self.ticks
        );
        self
    }

    pub fn pause(mut self) -> Self {
        self.is_running = false;
        self
    }

    /// Clear the world and reset the tick counter
    pub fn clear(mut self) -> Self {
        self.engine.clear();
        self.ticks = 0;
        self.is_running = false;
        log::info!("{} cleared", self.engine.name());
        self
    }

    /// Adjust simulation speed
    pub fn adjust_speed(mut self, delta: f32) -> Self {
        self.ticks_per_second = (self.ticks_per_second + delta).clamp(1.0, 240.0);
        self
    }

    /// Advance exactly one tick, running or not
    pub fn step(mut self) -> Self {
        self.engine.advance();
        self.ticks += 1;
        self
    }

    /// Update simulation by one frame
    pub fn tick(mut self, delta_time: f32) -> Self {
        if !self.is_running {
            return self;
        }

        self.update_timer += delta_time;
        let update_interval = 1.0 / self.ticks_per_second;

        if self.update_timer >= update_interval {
            self.update_timer = 0.0;
            return self.step();
        }

        self
    }
}

impl Session<ConwayEngine> {
    /// Conway session with the configured size, rule and tick rate
    pub fn conway(config: &SimulationConfig) -> Result<Self, ConfigError> {
        let engine = ConwayEngine::new(config.width, config.height)?
            .with_rule(config.rule()?)
            .with_parallel(config.parallel);
        Ok(Self::new(engine, config.conway_ticks_per_second))
    }

    /// Randomize the grid and reset the generation counter
    pub fn randomize(&mut self, fraction: f64) -> Result<usize, SeedError> {
        let draws = self.engine.randomize(fraction)?;
        self.ticks = 0;
        self.is_running = false;
        Ok(draws)
    }
}

impl Session<LangtonEngine> {
    /// Langton session with the configured size and tick rate, no ant yet
    pub fn langton(config: &SimulationConfig) -> Result<Self, ConfigError> {
        let engine = LangtonEngine::new(config.width, config.height)?;
        Ok(Self::new(engine, config.langton_ticks_per_second))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CellState, LangtonEngine};

    fn langton_session() -> Session<LangtonEngine> {
        let mut engine = LangtonEngine::new(9, 9).unwrap();
        engine.place_agent(4, 4);
        Session::new(engine, 10.0)
    }

    #[test]
    fn test_paused_session_does_not_tick() {
        let session = langton_session().tick(1.0);
        assert_eq!(session.ticks, 0);
        assert_eq!(session.engine.cell_state(4, 4), Some(CellState::Dead));
    }

    #[test]
    fn test_tick_waits_for_interval() {
        let session = langton_session().toggle_running().tick(0.05);
        assert_eq!(session.ticks, 0);

        let session = session.tick(0.06);
        assert_eq!(session.ticks, 1);
        assert_eq!(session.update_timer, 0.0);
        assert_eq!(session.engine.cell_state(4, 4), Some(CellState::Alive));
    }

    #[test]
    fn test_step_while_paused() {
        let session = langton_session().step().step();
        assert_eq!(session.ticks, 2);
        assert!(!session.is_running);
        assert_eq!(session.engine.population(), 2);
    }

    #[test]
    fn test_clear_resets_counter() {
        let session = langton_session().toggle_running().step().clear();
        assert_eq!(session.ticks, 0);
        assert!(!session.is_running);
        assert_eq!(session.engine.marker(), None);
    }

    #[test]
    fn test_adjust_speed_clamps() {
        let session = langton_session().adjust_speed(-50.0);
        assert_eq!(session.ticks_per_second, 1.0);
        let session = session.adjust_speed(1000.0);
        assert_eq!(session.ticks_per_second, 240.0);
    }

    #[test]
    fn test_sessions_from_config() {
        let config = SimulationConfig::default()
            .with_size(30, 20)
            .with_rule(vec![3, 6], vec![2, 3]);
        let conway = Session::<ConwayEngine>::conway(&config).unwrap();
        assert_eq!(conway.engine.dimensions(), (30, 20));
        assert_eq!(conway.engine.rule().to_string(), "B36/S23");
        assert_eq!(conway.ticks_per_second, 10.0);

        let langton = Session::<LangtonEngine>::langton(&config).unwrap();
        assert_eq!(langton.engine.ant(), None);
        assert_eq!(langton.ticks_per_second, 60.0);

        let bad = config.with_rule(vec![9], vec![]);
        assert!(Session::<ConwayEngine>::conway(&bad).is_err());
    }

    #[test]
    fn test_randomize_resets_generation() {
        let mut session = Session::new(ConwayEngine::new(10, 10).unwrap(), 10.0).step();
        assert_eq!(session.ticks, 1);
        assert_eq!(session.randomize(0.5), Ok(50));
        assert_eq!(session.ticks, 0);
        assert!(session.randomize(-1.0).is_err());
    }
}
