use std::{error::Error, fmt, io};

use crate::core::fractals::mandelbrot::errors::MandelbrotError;

#[derive(Debug)]
pub enum BenchmarkError {
    ZeroIterations,
    Mandelbrot(MandelbrotError),
    Io(io::Error),
}

impl fmt::Display for BenchmarkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroIterations => write!(f, "Benchmark iterations must be greater than zero"),
            Self::Mandelbrot(err) => write!(f, "invalid fractal settings: {}", err),
            Self::Io(err) => write!(f, "failed to report benchmark progress: {}", err),
        }
    }
}

impl Error for BenchmarkError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::ZeroIterations => None,
            Self::Mandelbrot(err) => Some(err),
            Self::Io(err) => Some(err),
        }
    }
}

impl From<MandelbrotError> for BenchmarkError {
    fn from(err: MandelbrotError) -> Self {
        Self::Mandelbrot(err)
    }
}

impl From<io::Error> for BenchmarkError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}
