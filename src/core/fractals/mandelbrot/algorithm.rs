use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::complex::Complex;
use crate::core::data::grid_size::{Cell, GridSize};
use crate::core::data::plane_window::PlaneWindow;
use crate::core::fractals::mandelbrot::errors::MandelbrotError;
use crate::core::util::plane_mapping::PlaneMapping;

pub const MAX_ITERATIONS: u32 = 256;

const ESCAPE_RADIUS_SQUARED: f64 = 4.0;

/// Number of `z <- z^2 + c` steps taken from `z = 0` before `|z|` exceeds 2,
/// capped at `max_iterations`.
#[must_use]
pub fn escape_time(c: Complex, max_iterations: u32) -> u32 {
    let mut z = Complex::ZERO;
    let mut count = 0;

    while z.magnitude_squared() <= ESCAPE_RADIUS_SQUARED && count < max_iterations {
        z = z.mandelbrot_step(c);
        count += 1;
    }

    count
}

#[derive(Debug, Clone, PartialEq)]
pub struct MandelbrotAlgorithm {
    size: GridSize,
    mapping: PlaneMapping,
    max_iterations: u32,
}

impl FractalAlgorithm for MandelbrotAlgorithm {
    type Output = u32;

    fn grid_size(&self) -> GridSize {
        self.size
    }

    fn compute(&self, cell: Cell) -> u32 {
        escape_time(self.mapping.to_complex(cell), self.max_iterations)
    }
}

impl MandelbrotAlgorithm {
    pub fn new(
        size: GridSize,
        window: PlaneWindow,
        max_iterations: u32,
    ) -> Result<Self, MandelbrotError> {
        if max_iterations == 0 {
            return Err(MandelbrotError::ZeroMaxIterationsError);
        }

        Ok(Self {
            size,
            mapping: PlaneMapping::new(size, window),
            max_iterations,
        })
    }

    /// The fixed benchmark view with the default iteration cap.
    #[must_use]
    pub fn classic(size: GridSize) -> Self {
        Self {
            size,
            mapping: PlaneMapping::new(size, PlaneWindow::CLASSIC),
            max_iterations: MAX_ITERATIONS,
        }
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }
}
