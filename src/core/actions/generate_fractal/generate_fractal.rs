use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;

/// Computes every cell of the algorithm's grid on the calling thread, in
/// row-major order.
pub fn generate_fractal<Alg: FractalAlgorithm>(algorithm: &Alg) -> Vec<Alg::Output> {
    let size = algorithm.grid_size();
    let mut values = Vec::with_capacity(size.cell_count());

    values.extend(size.cells().map(|cell| algorithm.compute(cell)));
    values
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::grid_size::{Cell, GridSize};

    struct StubAlgorithm {
        size: GridSize,
    }

    impl FractalAlgorithm for StubAlgorithm {
        type Output = (usize, usize);

        fn grid_size(&self) -> GridSize {
            self.size
        }

        fn compute(&self, cell: Cell) -> Self::Output {
            (cell.row, cell.col)
        }
    }

    #[test]
    fn test_generates_in_row_major_order() {
        let algorithm = StubAlgorithm {
            size: GridSize::new(2, 2),
        };

        let values = generate_fractal(&algorithm);

        assert_eq!(values, vec![(0, 0), (0, 1), (1, 0), (1, 1)]);
    }

    #[test]
    fn test_empty_grid_generates_nothing() {
        let algorithm = StubAlgorithm {
            size: GridSize::new(0, 7),
        };

        assert!(generate_fractal(&algorithm).is_empty());
    }
}
