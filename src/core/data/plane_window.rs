use crate::core::data::complex::Complex;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum PlaneWindowError {
    InvalidSize { width: f64, height: f64 },
}

impl fmt::Display for PlaneWindowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize { width, height } => {
                write!(
                    f,
                    "plane window size must be positive: {}x{}",
                    width, height
                )
            }
        }
    }
}

impl Error for PlaneWindowError {}

/// Rectangle of the complex plane mapped onto a pixel grid.
///
/// `min` holds (xMin, yMin) and `max` holds (xMax, yMax).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PlaneWindow {
    min: Complex,
    max: Complex,
}

impl PlaneWindow {
    /// The benchmark's fixed view: x in [-2.0, 1.0], y in [-1.5, 1.5].
    pub const CLASSIC: Self = Self {
        min: Complex {
            real: -2.0,
            imag: -1.5,
        },
        max: Complex {
            real: 1.0,
            imag: 1.5,
        },
    };

    pub fn new(min: Complex, max: Complex) -> Result<Self, PlaneWindowError> {
        let width = max.real - min.real;
        let height = max.imag - min.imag;

        // written negated so NaN bounds are rejected too
        if !(width > 0.0 && height > 0.0) {
            return Err(PlaneWindowError::InvalidSize { width, height });
        }

        Ok(Self { min, max })
    }

    #[must_use]
    pub fn min(&self) -> Complex {
        self.min
    }

    #[must_use]
    pub fn max(&self) -> Complex {
        self.max
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.max.real - self.min.real
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.max.imag - self.min.imag
    }
}

impl Default for PlaneWindow {
    fn default() -> Self {
        Self::CLASSIC
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plane_window_new_valid() {
        let min = Complex {
            real: -2.0,
            imag: -1.0,
        };
        let max = Complex {
            real: 1.0,
            imag: 1.0,
        };

        let window = PlaneWindow::new(min, max).unwrap();

        assert_eq!(window.min(), min);
        assert_eq!(window.max(), max);
    }

    #[test]
    fn test_plane_window_dimensions_must_be_positive() {
        let zero_width = PlaneWindow::new(
            Complex {
                real: 0.0,
                imag: 0.0,
            },
            Complex {
                real: 0.0,
                imag: 100.0,
            },
        );

        let negative_height = PlaneWindow::new(
            Complex {
                real: 0.0,
                imag: 0.0,
            },
            Complex {
                real: 100.0,
                imag: -10.0,
            },
        );

        assert_eq!(
            zero_width,
            Err(PlaneWindowError::InvalidSize {
                width: 0.0,
                height: 100.0
            })
        );
        assert_eq!(
            negative_height,
            Err(PlaneWindowError::InvalidSize {
                width: 100.0,
                height: -10.0
            })
        );
    }

    #[test]
    fn test_plane_window_rejects_nan_bounds() {
        let window = PlaneWindow::new(
            Complex {
                real: f64::NAN,
                imag: 0.0,
            },
            Complex {
                real: 1.0,
                imag: 1.0,
            },
        );

        assert!(window.is_err());
    }

    #[test]
    fn test_classic_window_dimensions() {
        let window = PlaneWindow::default();

        assert_eq!(window, PlaneWindow::CLASSIC);
        assert_eq!(window.width(), 3.0);
        assert_eq!(window.height(), 3.0);
        assert_eq!(window.min().real, -2.0);
        assert_eq!(window.min().imag, -1.5);
    }
}
