use crate::core::data::complex::Complex;
use crate::core::data::grid_size::{Cell, GridSize};
use crate::core::data::plane_window::PlaneWindow;

/// Maps grid cells onto a plane window using half-open sampling: column and
/// row 0 land exactly on the window minimum, the maximum edge is never
/// visited.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PlaneMapping {
    origin: Complex,
    x_step: f64,
    y_step: f64,
}

impl PlaneMapping {
    #[must_use]
    pub fn new(size: GridSize, window: PlaneWindow) -> Self {
        // infinite for zero-sized grids, which never map a cell
        let x_step = window.width() / size.width as f64;
        let y_step = window.height() / size.height as f64;

        Self {
            origin: window.min(),
            x_step,
            y_step,
        }
    }

    #[must_use]
    pub fn to_complex(&self, cell: Cell) -> Complex {
        Complex {
            real: self.origin.real + cell.col as f64 * self.x_step,
            imag: self.origin.imag + cell.row as f64 * self.y_step,
        }
    }
}
