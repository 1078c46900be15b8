pub mod complex;
pub mod escape_grid;
pub mod grid_size;
pub mod plane_window;
