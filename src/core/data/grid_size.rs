#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

/// Pixel dimensions of an escape grid. Zero in either axis is allowed and
/// produces an empty grid.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct GridSize {
    pub width: usize,
    pub height: usize,
}

impl GridSize {
    #[must_use]
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.width * self.height
    }

    #[must_use]
    pub fn index_of(&self, cell: Cell) -> Option<usize> {
        if cell.row < self.height && cell.col < self.width {
            Some(cell.row * self.width + cell.col)
        } else {
            None
        }
    }

    /// Every cell in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + use<> {
        let GridSize { width, height } = *self;

        (0..height).flat_map(move |row| (0..width).map(move |col| Cell { row, col }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cells_are_row_major() {
        let size = GridSize::new(3, 2);
        let cells: Vec<Cell> = size.cells().collect();

        assert_eq!(cells.len(), size.cell_count());
        assert_eq!(cells[0], Cell { row: 0, col: 0 });
        assert_eq!(cells[2], Cell { row: 0, col: 2 });
        assert_eq!(cells[3], Cell { row: 1, col: 0 });
    }

    #[test]
    fn test_zero_sized_grid_has_no_cells() {
        assert_eq!(GridSize::new(0, 5).cells().count(), 0);
        assert_eq!(GridSize::new(5, 0).cells().count(), 0);
    }

    #[test]
    fn test_index_of() {
        let size = GridSize::new(4, 3);

        assert_eq!(size.index_of(Cell { row: 0, col: 0 }), Some(0));
        assert_eq!(size.index_of(Cell { row: 2, col: 3 }), Some(11));
        assert_eq!(size.index_of(Cell { row: 3, col: 0 }), None);
        assert_eq!(size.index_of(Cell { row: 0, col: 4 }), None);
    }
}
