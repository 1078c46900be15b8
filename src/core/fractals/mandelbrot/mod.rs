pub mod algorithm;
pub mod compute;
pub mod errors;
pub mod mandelbrot_config;
