use std::{error::Error, fmt};

use crate::core::data::plane_window::PlaneWindowError;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MandelbrotError {
    ZeroMaxIterationsError,
    Window(PlaneWindowError),
}

impl fmt::Display for MandelbrotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroMaxIterationsError => {
                write!(f, "Maximum iterations must be greater than zero")
            }
            Self::Window(err) => write!(f, "invalid plane window: {}", err),
        }
    }
}

impl Error for MandelbrotError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::ZeroMaxIterationsError => None,
            Self::Window(err) => Some(err),
        }
    }
}

impl From<PlaneWindowError> for MandelbrotError {
    fn from(err: PlaneWindowError) -> Self {
        Self::Window(err)
    }
}
