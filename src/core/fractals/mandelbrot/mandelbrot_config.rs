use crate::core::{
    data::{complex::Complex, grid_size::GridSize, plane_window::PlaneWindow},
    fractals::mandelbrot::{
        algorithm::{MAX_ITERATIONS, MandelbrotAlgorithm},
        errors::MandelbrotError,
    },
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MandelbrotConfig {
    pub window: PlaneWindow,
    pub max_iterations: u32,
}

impl Default for MandelbrotConfig {
    fn default() -> Self {
        Self {
            window: PlaneWindow::CLASSIC,
            max_iterations: MAX_ITERATIONS,
        }
    }
}

impl MandelbrotConfig {
    pub fn new(min: Complex, max: Complex, max_iterations: u32) -> Result<Self, MandelbrotError> {
        if max_iterations == 0 {
            return Err(MandelbrotError::ZeroMaxIterationsError);
        }

        Ok(Self {
            window: PlaneWindow::new(min, max)?,
            max_iterations,
        })
    }

    pub fn build_algorithm(&self, size: GridSize) -> Result<MandelbrotAlgorithm, MandelbrotError> {
        MandelbrotAlgorithm::new(size, self.window, self.max_iterations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::plane_window::PlaneWindowError;

    #[test]
    fn test_default_builds_classic_algorithm() {
        let size = GridSize::new(4, 4);
        let algorithm = MandelbrotConfig::default().build_algorithm(size).unwrap();

        assert_eq!(algorithm, MandelbrotAlgorithm::classic(size));
    }

    #[test]
    fn test_new_validates_window() {
        let config = MandelbrotConfig::new(
            Complex {
                real: 1.0,
                imag: 0.0,
            },
            Complex {
                real: -1.0,
                imag: 1.0,
            },
            256,
        );

        assert_eq!(
            config,
            Err(MandelbrotError::Window(PlaneWindowError::InvalidSize {
                width: -2.0,
                height: 1.0
            }))
        );
    }

    #[test]
    fn test_new_rejects_zero_cap() {
        let config = MandelbrotConfig::new(
            Complex {
                real: -1.0,
                imag: -1.0,
            },
            Complex {
                real: 1.0,
                imag: 1.0,
            },
            0,
        );

        assert_eq!(config, Err(MandelbrotError::ZeroMaxIterationsError));
    }

    #[test]
    fn test_zero_cap_is_rejected() {
        let config = MandelbrotConfig {
            max_iterations: 0,
            ..MandelbrotConfig::default()
        };

        assert_eq!(
            config.build_algorithm(GridSize::new(4, 4)),
            Err(MandelbrotError::ZeroMaxIterationsError)
        );
    }
}
