use std::error::Error;
use std::fmt;

use crate::core::data::grid_size::{Cell, GridSize};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EscapeGridError {
    BoundsMismatch { cell_count: usize, buffer_size: usize },
}

impl fmt::Display for EscapeGridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BoundsMismatch {
                cell_count,
                buffer_size,
            } => {
                write!(
                    f,
                    "grid cell count {} does not match buffer size {}",
                    cell_count, buffer_size
                )
            }
        }
    }
}

impl Error for EscapeGridError {}

/// Row-major grid of escape counts, one per pixel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EscapeGrid {
    size: GridSize,
    cells: Vec<u32>,
}

impl EscapeGrid {
    pub fn from_cells(size: GridSize, cells: Vec<u32>) -> Result<Self, EscapeGridError> {
        if cells.len() != size.cell_count() {
            return Err(EscapeGridError::BoundsMismatch {
                cell_count: size.cell_count(),
                buffer_size: cells.len(),
            });
        }

        Ok(Self { size, cells })
    }

    /// For generator output, which visits every cell of `size` exactly once.
    pub(crate) fn from_generated(size: GridSize, cells: Vec<u32>) -> Self {
        debug_assert_eq!(cells.len(), size.cell_count());

        Self { size, cells }
    }

    #[must_use]
    pub fn size(&self) -> GridSize {
        self.size
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.size.width
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.size.height
    }

    #[must_use]
    pub fn cells(&self) -> &[u32] {
        &self.cells
    }

    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<u32> {
        self.size
            .index_of(Cell { row, col })
            .map(|index| self.cells[index])
    }

    /// Yields exactly `height` rows, each `width` cells long.
    pub fn rows(&self) -> impl Iterator<Item = &[u32]> {
        let width = self.size.width;

        (0..self.size.height).map(move |row| &self.cells[row * width..(row + 1) * width])
    }

    #[must_use]
    pub fn checksum(&self) -> u64 {
        self.cells.iter().map(|&count| u64::from(count)).sum()
    }
}
