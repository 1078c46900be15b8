mod controllers;
mod core;
mod presenters;

pub use controllers::benchmark::benchmark_config::{
    BenchmarkConfig, DEFAULT_GRID_HEIGHT, DEFAULT_GRID_WIDTH, DEFAULT_ITERATIONS, DEFAULT_LABEL,
};
pub use controllers::benchmark::controller::BenchmarkController;
pub use controllers::benchmark::errors::BenchmarkError;
pub use controllers::benchmark::report::{BenchmarkReport, RunTiming};
pub use controllers::ports::run_presenter::RunPresenterPort;

pub use crate::core::data::complex::Complex;
pub use crate::core::data::escape_grid::{EscapeGrid, EscapeGridError};
pub use crate::core::data::grid_size::{Cell, GridSize};
pub use crate::core::data::plane_window::{PlaneWindow, PlaneWindowError};
pub use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
pub use crate::core::fractals::mandelbrot::algorithm::{MAX_ITERATIONS, MandelbrotAlgorithm, escape_time};
pub use crate::core::fractals::mandelbrot::compute::{compute, compute_parallel, compute_with};
pub use crate::core::fractals::mandelbrot::errors::MandelbrotError;
pub use crate::core::fractals::mandelbrot::mandelbrot_config::MandelbrotConfig;

pub use presenters::console::console_presenter::ConsolePresenter;
