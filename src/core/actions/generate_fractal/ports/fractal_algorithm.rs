use crate::core::data::grid_size::{Cell, GridSize};

pub trait FractalAlgorithm {
    type Output;

    /// The grid this algorithm was built for.
    fn grid_size(&self) -> GridSize;

    fn compute(&self, cell: Cell) -> Self::Output;
}
