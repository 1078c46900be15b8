use crate::{
    controllers::benchmark::errors::BenchmarkError,
    core::{
        data::grid_size::GridSize,
        fractals::mandelbrot::{errors::MandelbrotError, mandelbrot_config::MandelbrotConfig},
    },
};

pub const DEFAULT_GRID_WIDTH: usize = 1000;
pub const DEFAULT_GRID_HEIGHT: usize = 1000;
pub const DEFAULT_ITERATIONS: u32 = 20;
pub const DEFAULT_LABEL: &str = "Rust";

#[derive(Debug, Clone, PartialEq)]
pub struct BenchmarkConfig {
    pub size: GridSize,
    pub iterations: u32,
    /// Language name shown in the header and summary lines.
    pub label: String,
    pub fractal: MandelbrotConfig,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            size: GridSize::new(DEFAULT_GRID_WIDTH, DEFAULT_GRID_HEIGHT),
            iterations: DEFAULT_ITERATIONS,
            label: DEFAULT_LABEL.to_string(),
            fractal: MandelbrotConfig::default(),
        }
    }
}

impl BenchmarkConfig {
    pub fn validate(&self) -> Result<(), BenchmarkError> {
        if self.iterations == 0 {
            return Err(BenchmarkError::ZeroIterations);
        }

        if self.fractal.max_iterations == 0 {
            return Err(MandelbrotError::ZeroMaxIterationsError.into());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_the_fixed_benchmark() {
        let config = BenchmarkConfig::default();

        assert_eq!(config.size, GridSize::new(1000, 1000));
        assert_eq!(config.iterations, 20);
        assert_eq!(config.label, "Rust");
        assert_eq!(config.fractal, MandelbrotConfig::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_iterations_is_rejected() {
        let config = BenchmarkConfig {
            iterations: 0,
            ..BenchmarkConfig::default()
        };

        assert!(matches!(config.validate(), Err(BenchmarkError::ZeroIterations)));
    }

    #[test]
    fn test_zero_cap_is_rejected() {
        let config = BenchmarkConfig {
            fractal: MandelbrotConfig {
                max_iterations: 0,
                ..MandelbrotConfig::default()
            },
            ..BenchmarkConfig::default()
        };

        assert!(matches!(
            config.validate(),
            Err(BenchmarkError::Mandelbrot(MandelbrotError::ZeroMaxIterationsError))
        ));
    }
}
