use crate::{Cell, Error, Grid, Pattern, Result, Topology};
use log::debug;

/// Fixed-size Game of Life field with a pair of generation buffers.
///
/// `current` is the generation being read, `next` is the one being written by
/// [`crate::Stepper::step`]. [`Board::swap`] exchanges them.
pub struct Board {
    current: Grid,
    next: Grid,
    width: usize,
    height: usize,
    topology: Topology,
    generation: u64,
}

impl Board {
    /// Create a field of `width` columns and `height` rows, all cells dead.
    ///
    /// The topology starts as [`Topology::Bounded`].
    pub fn new(width: i64, height: i64) -> Result<Self> {
        // Both buffers are `Vec<Cell>` of one byte per cell.
        let fits = |w: usize, h: usize| {
            w > 0 && h > 0 && w.checked_mul(h).is_some_and(|n| n <= isize::MAX as usize)
        };
        let sides = match (usize::try_from(width), usize::try_from(height)) {
            (Ok(w), Ok(h)) if fits(w, h) => Some((w, h)),
            _ => None,
        };
        let Some((w, h)) = sides else {
            return Err(Error::InvalidDimension { width, height });
        };
        debug!("new board {}x{}", w, h);
        Ok(Self {
            current: Grid::blank(w, h),
            next: Grid::blank(w, h),
            width: w,
            height: h,
            topology: Topology::Bounded,
            generation: 0,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// `true` selects the torus, `false` treats cells beyond the edges as dead.
    pub fn set_boundary_policy(&mut self, wrap: bool) {
        self.set_topology(Topology::from_wrap(wrap));
    }

    pub fn wrap(&self) -> bool {
        self.topology.wraps()
    }

    pub fn set_topology(&mut self, topology: Topology) {
        debug!("topology {:?} -> {:?}", self.topology, topology);
        self.topology = topology;
    }

    pub fn topology(&self) -> Topology {
        self.topology
    }

    /// Number of swaps since creation or the last [`Board::clear`].
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Copy `pattern` into the current generation with its top-left corner at
    /// (`row_offset`, `column_offset`), overwriting whatever was there.
    ///
    /// Fails without touching the board if any part of the pattern would land
    /// outside it.
    pub fn load_pattern(&mut self, pattern: &Pattern, row_offset: i64, column_offset: i64) -> Result<()> {
        let fits = |offset: i64, extent: usize, side: usize| {
            offset >= 0
                && (offset as u64)
                    .checked_add(extent as u64)
                    .is_some_and(|end| end <= side as u64)
        };
        if !fits(row_offset, pattern.height(), self.height)
            || !fits(column_offset, pattern.width(), self.width)
        {
            return Err(Error::OutOfBounds {
                row: row_offset,
                column: column_offset,
                rows: pattern.height(),
                columns: pattern.width(),
                height: self.height,
                width: self.width,
            });
        }
        let (r0, c0) = (row_offset as usize, column_offset as usize);
        for (r, row) in pattern.rows().enumerate() {
            for (c, &cell) in row.iter().enumerate() {
                self.current.set(r0 + r, c0 + c, cell);
            }
        }
        debug!(
            "loaded {}x{} pattern at ({}, {})",
            pattern.width(),
            pattern.height(),
            r0,
            c0
        );
        Ok(())
    }

    /// Exchange the current and next generations without copying cells.
    pub fn swap(&mut self) {
        std::mem::swap(&mut self.current, &mut self.next);
        self.generation += 1;
    }

    pub fn read_cell(&self, row: i64, col: i64) -> Result<Cell> {
        let (r, c) = self.checked_index(row, col)?;
        Ok(self.current.at(r, c))
    }

    pub fn write_cell(&mut self, row: i64, col: i64, cell: Cell) -> Result<()> {
        let (r, c) = self.checked_index(row, col)?;
        self.current.set(r, c, cell);
        Ok(())
    }

    fn checked_index(&self, row: i64, col: i64) -> Result<(usize, usize)> {
        if row < 0 || col < 0 || row as u64 >= self.height as u64 || col as u64 >= self.width as u64 {
            return Err(Error::OutOfBounds {
                row,
                column: col,
                rows: 1,
                columns: 1,
                height: self.height,
                width: self.width,
            });
        }
        Ok((row as usize, col as usize))
    }

    /// The generation being read; this is what renderers should draw.
    pub fn current(&self) -> &Grid {
        &self.current
    }

    /// Read `current` while writing `next`.
    pub(crate) fn buffers(&mut self) -> (&Grid, &mut Grid) {
        (&self.current, &mut self.next)
    }

    /// Kill every cell of the current generation.
    pub fn clear(&mut self) {
        self.current.cells_mut().fill(Cell::Dead);
        self.generation = 0;
    }

    /// Fill the current generation with random cells.
    ///
    /// `seed` - random seed (if `None`, then random seed is generated)
    ///
    /// `fill_rate` is clamped to `[0, 1]`; NaN fills nothing.
    pub fn randomize(&mut self, seed: Option<u64>, fill_rate: f64) {
        use rand::{Rng, SeedableRng};
        use rand_chacha::ChaCha8Rng;

        let mut rng = if let Some(x) = seed {
            ChaCha8Rng::seed_from_u64(x)
        } else {
            ChaCha8Rng::from_entropy()
        };
        let fill_rate = if fill_rate.is_nan() {
            0.
        } else {
            fill_rate.clamp(0., 1.)
        };
        for cell in self.current.cells_mut() {
            *cell = Cell::from(rng.gen_bool(fill_rate));
        }
    }

    /// Total number of alive cells in the current generation.
    pub fn population(&self) -> usize {
        self.current.population()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.current, f)
    }
}
