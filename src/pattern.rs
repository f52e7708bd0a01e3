use crate::{Cell, Error, Result};

/// Rectangular shape stamped onto a [`crate::Board`] by
/// [`crate::Board::load_pattern`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pattern {
    cells: Vec<Cell>,
    width: usize,
    height: usize,
}

impl Pattern {
    /// Builds a pattern from rows of `0`/`1` values.
    ///
    /// `rows` must contain exactly `height` rows of `width` values each.
    pub fn new<R: AsRef<[u8]>>(width: usize, height: usize, rows: &[R]) -> Result<Self> {
        Self::build(width, height, rows, |&v| {
            Cell::try_from(v)
                .map_err(|v| Error::InvalidPattern(format!("cell value {} is not 0 or 1", v)))
        })
    }

    /// Builds a pattern from rows of booleans, `true` being alive.
    pub fn from_bools<R: AsRef<[bool]>>(width: usize, height: usize, rows: &[R]) -> Result<Self> {
        Self::build(width, height, rows, |&v| Ok(Cell::from(v)))
    }

    /// Builds a pattern from rows of cells.
    pub fn from_cells<R: AsRef<[Cell]>>(width: usize, height: usize, rows: &[R]) -> Result<Self> {
        Self::build(width, height, rows, |&v| Ok(v))
    }

    fn build<T, R: AsRef<[T]>>(
        width: usize,
        height: usize,
        rows: &[R],
        mut convert: impl FnMut(&T) -> Result<Cell>,
    ) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension {
                width: width as i64,
                height: height as i64,
            });
        }
        if rows.len() != height {
            return Err(Error::InvalidPattern(format!(
                "expected {} rows, got {}",
                height,
                rows.len()
            )));
        }
        let mut cells = Vec::with_capacity(width * height);
        for (i, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != width {
                return Err(Error::InvalidPattern(format!(
                    "row {} has {} cells, expected {}",
                    i,
                    row.len(),
                    width
                )));
            }
            for v in row {
                cells.push(convert(v)?);
            }
        }
        Ok(Self {
            cells,
            width,
            height,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        if row < self.height && col < self.width {
            Some(self.cells[col + row * self.width])
        } else {
            None
        }
    }

    pub fn rows(&self) -> std::slice::ChunksExact<'_, Cell> {
        self.cells.chunks_exact(self.width)
    }

    pub fn population(&self) -> usize {
        self.cells.iter().filter(|c| c.is_alive()).count()
    }

    /// Pattern of `width x height` with the listed (row, col) cells alive.
    fn from_alive(width: usize, height: usize, alive: &[(usize, usize)]) -> Self {
        let mut cells = vec![Cell::Dead; width * height];
        for &(r, c) in alive {
            cells[c + r * width] = Cell::Alive;
        }
        Self {
            cells,
            width,
            height,
        }
    }

    /// 2x2 still life.
    pub fn block() -> Self {
        Self::from_alive(2, 2, &[(0, 0), (0, 1), (1, 0), (1, 1)])
    }

    /// Horizontal period-2 oscillator padded to 3x3.
    pub fn blinker() -> Self {
        Self::from_alive(3, 3, &[(1, 0), (1, 1), (1, 2)])
    }

    /// Glider travelling towards increasing rows and columns.
    pub fn glider() -> Self {
        Self::from_alive(3, 3, &[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)])
    }

    pub fn toad() -> Self {
        Self::from_alive(4, 2, &[(0, 1), (0, 2), (0, 3), (1, 0), (1, 1), (1, 2)])
    }

    pub fn beacon() -> Self {
        Self::from_alive(
            4,
            4,
            &[(0, 0), (0, 1), (1, 0), (1, 1), (2, 2), (2, 3), (3, 2), (3, 3)],
        )
    }

    pub fn r_pentomino() -> Self {
        Self::from_alive(3, 3, &[(0, 1), (0, 2), (1, 0), (1, 1), (2, 1)])
    }

    /// Gosper glider gun, 36x9.
    #[rustfmt::skip]
    pub fn gosper_glider_gun() -> Self {
        Self::from_alive(36, 9, &[
            (4, 0), (4, 1), (5, 0), (5, 1),
            (4, 10), (5, 10), (6, 10), (3, 11), (7, 11), (2, 12), (8, 12),
            (2, 13), (8, 13), (5, 14), (3, 15), (7, 15), (4, 16), (5, 16),
            (6, 16), (5, 17), (2, 20), (3, 20), (4, 20), (2, 21), (3, 21),
            (4, 21), (1, 22), (5, 22), (0, 24), (1, 24), (5, 24), (6, 24),
            (2, 34), (3, 34), (2, 35), (3, 35),
        ])
    }

    /// Looks up a preset by its lowercase name.
    pub fn preset(name: &str) -> Option<Self> {
        let pattern = match name {
            "block" => Self::block(),
            "blinker" => Self::blinker(),
            "glider" => Self::glider(),
            "toad" => Self::toad(),
            "beacon" => Self::beacon(),
            "r-pentomino" => Self::r_pentomino(),
            "glider-gun" => Self::gosper_glider_gun(),
            _ => return None,
        };
        Some(pattern)
    }
}
