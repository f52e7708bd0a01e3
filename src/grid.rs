use crate::Cell;

/// Row-major buffer of `width * height` cells.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<Cell>,
    width: usize,
    height: usize,
}

impl Grid {
    /// All-dead grid. Both sides must be positive, which `Board` checks.
    pub(crate) fn blank(width: usize, height: usize) -> Self {
        debug_assert!(width >= 1 && height >= 1);
        Self {
            cells: vec![Cell::Dead; width * height],
            width,
            height,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Cell at (`row`, `col`), or `None` outside the grid.
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        if row < self.height && col < self.width {
            Some(self.cells[col + row * self.width])
        } else {
            None
        }
    }

    /// Indices must be in range.
    #[inline]
    pub(crate) fn at(&self, row: usize, col: usize) -> Cell {
        self.cells[col + row * self.width]
    }

    pub(crate) fn set(&mut self, row: usize, col: usize, cell: Cell) {
        self.cells[col + row * self.width] = cell;
    }

    /// Cells of `row`, or `None` outside the grid.
    pub fn row(&self, row: usize) -> Option<&[Cell]> {
        if row < self.height {
            Some(&self.cells[row * self.width..(row + 1) * self.width])
        } else {
            None
        }
    }

    pub fn rows(&self) -> std::slice::ChunksExact<'_, Cell> {
        self.cells.chunks_exact(self.width)
    }

    pub(crate) fn rows_mut(&mut self) -> std::slice::ChunksExactMut<'_, Cell> {
        self.cells.chunks_exact_mut(self.width)
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [Cell] {
        &mut self.cells
    }

    pub fn population(&self) -> usize {
        self.cells.iter().filter(|c| c.is_alive()).count()
    }
}

impl std::fmt::Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.rows() {
            for cell in row {
                f.write_str(if cell.is_alive() { "■" } else { "." })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
