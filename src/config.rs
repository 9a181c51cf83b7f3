use crate::domain::{BoundedGrid, LifeRule, NeighborSet};
use crate::error::{ConfigError, SeedError};

/// Step for the random-fill slider
pub const FILL_STEP: f64 = 0.05;

/// Settings for one demo run. Grid size is fixed once an engine is built.
#[derive(Clone, Debug, PartialEq)]
pub struct SimulationConfig {
    pub width: usize,
    pub height: usize,
    /// Pixel size of one cell on screen
    pub cell_size: f32,
    /// Share of the grid filled by "Random", in [0, 1]
    pub fill_fraction: f64,
    pub birth: Vec<u8>,
    pub survive: Vec<u8>,
    pub conway_ticks_per_second: f32,
    pub langton_ticks_per_second: f32,
    /// Evaluate Conway generations with rayon
    pub parallel: bool,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            width: 160,
            height: 100,
            cell_size: 6.0,
            fill_fraction: FILL_STEP,
            birth: vec![3],
            survive: vec![2, 3],
            conway_ticks_per_second: 10.0,
            langton_ticks_per_second: 60.0,
            parallel: true,
        }
    }
}

impl SimulationConfig {
    pub fn with_size(mut self, width: usize, height: usize) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_rule(mut self, birth: Vec<u8>, survive: Vec<u8>) -> Self {
        self.birth = birth;
        self.survive = survive;
        self
    }

    /// Starting Conway rule from the birth and survival lists
    pub fn rule(&self) -> Result<LifeRule, ConfigError> {
        Ok(LifeRule::new(
            NeighborSet::from_counts(&self.birth)?,
            NeighborSet::from_counts(&self.survive)?,
        ))
    }

    /// Check every setting, reporting the first problem found
    pub fn validate(&self) -> Result<(), ConfigError> {
        BoundedGrid::new(self.width, self.height)?;
        self.rule()?;
        if !self.fill_fraction.is_finite() || !(0.0..=1.0).contains(&self.fill_fraction) {
            return Err(SeedError::InvalidFraction {
                fraction: self.fill_fraction,
            }
            .into());
        }
        if self.cell_size.is_nan() || self.cell_size <= 0.0 {
            return Err(ConfigError::CellSize(self.cell_size));
        }
        for rate in [self.conway_ticks_per_second, self.langton_ticks_per_second] {
            if rate.is_nan() || rate <= 0.0 {
                return Err(ConfigError::TickRate(rate));
            }
        }
        Ok(())
    }
}

/// Move a fill fraction by whole slider steps, clamped to [0, 1]
pub fn step_fill_fraction(fraction: f64, steps: i32) -> f64 {
    let stepped = (fraction / FILL_STEP).round() + f64::from(steps);
    (stepped * FILL_STEP).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{GridError, RuleError};

    #[test]
    fn test_default_is_valid_conway() {
        let config = SimulationConfig::default();
        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.rule(), Ok(LifeRule::conway()));
        assert_eq!(config.fill_fraction, 0.05);
    }

    #[test]
    fn test_validate_reports_bad_settings() {
        let zero = SimulationConfig::default().with_size(0, 10);
        assert_eq!(
            zero.validate(),
            Err(ConfigError::Grid(GridError::InvalidDimensions { width: 0, height: 10 }))
        );

        let bad_rule = SimulationConfig::default().with_rule(vec![3], vec![2, 10]);
        assert_eq!(
            bad_rule.validate(),
            Err(ConfigError::Rule(RuleError::OutOfRange { value: 10 }))
        );

        let bad_fill = SimulationConfig {
            fill_fraction: 1.2,
            ..SimulationConfig::default()
        };
        assert!(matches!(bad_fill.validate(), Err(ConfigError::Seed(_))));

        let bad_rate = SimulationConfig {
            langton_ticks_per_second: 0.0,
            ..SimulationConfig::default()
        };
        assert_eq!(bad_rate.validate(), Err(ConfigError::TickRate(0.0)));

        let nan_cells = SimulationConfig {
            cell_size: f32::NAN,
            ..SimulationConfig::default()
        };
        assert!(matches!(nan_cells.validate(), Err(ConfigError::CellSize(_))));
    }

    #[test]
    fn test_step_fill_fraction() {
        assert!((step_fill_fraction(0.05, 1) - 0.10).abs() < 1e-9);
        assert!((step_fill_fraction(0.05, -1)).abs() < 1e-9);
        assert_eq!(step_fill_fraction(0.0, -3), 0.0);
        assert_eq!(step_fill_fraction(0.95, 4), 1.0);
    }
}
