use rayon::prelude::*;

use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::grid_size::Cell;

/// Generates fractal data in parallel using rayon's work-stealing scheduler.
///
/// Rows are split across the pool and results come back in row-major order,
/// so the output matches [`generate_fractal`](super::generate_fractal::generate_fractal)
/// element for element.
pub fn generate_fractal_rayon<Alg>(algorithm: &Alg) -> Vec<Alg::Output>
where
    Alg: FractalAlgorithm + Sync,
    Alg::Output: Send,
{
    let size = algorithm.grid_size();
    let width = size.width;

    (0..size.height)
        .into_par_iter()
        .flat_map_iter(|row| (0..width).map(move |col| algorithm.compute(Cell { row, col })))
        .collect()
}
