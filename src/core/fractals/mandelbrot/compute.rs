use crate::core::{
    actions::generate_fractal::{
        generate_fractal::generate_fractal, generate_fractal_rayon::generate_fractal_rayon,
        ports::fractal_algorithm::FractalAlgorithm,
    },
    data::{escape_grid::EscapeGrid, grid_size::GridSize},
    fractals::mandelbrot::{
        algorithm::MandelbrotAlgorithm, errors::MandelbrotError,
        mandelbrot_config::MandelbrotConfig,
    },
};

/// Escape-time grid of the classic view, computed on the calling thread.
#[must_use]
pub fn compute(width: usize, height: usize) -> EscapeGrid {
    let algorithm = MandelbrotAlgorithm::classic(GridSize::new(width, height));

    render(&algorithm, generate_fractal::<MandelbrotAlgorithm>)
}

/// Same grid as [`compute`], spread over the rayon pool.
#[must_use]
pub fn compute_parallel(width: usize, height: usize) -> EscapeGrid {
    let algorithm = MandelbrotAlgorithm::classic(GridSize::new(width, height));

    render(&algorithm, generate_fractal_rayon::<MandelbrotAlgorithm>)
}

pub fn compute_with(size: GridSize, config: &MandelbrotConfig) -> Result<EscapeGrid, MandelbrotError> {
    let algorithm = config.build_algorithm(size)?;

    Ok(render(&algorithm, generate_fractal::<MandelbrotAlgorithm>))
}

pub(crate) fn render(
    algorithm: &MandelbrotAlgorithm,
    generate: impl Fn(&MandelbrotAlgorithm) -> Vec<u32>,
) -> EscapeGrid {
    EscapeGrid::from_generated(algorithm.grid_size(), generate(algorithm))
}
