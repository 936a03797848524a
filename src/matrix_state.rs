/// The on/off state of every LED in the matrix.
///
/// Cells live in a single row-major buffer, so cell `(row, col)` sits at
/// `row * width + col`. Coordinates given as `(x, y)` address column `x` of row `y`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MatrixState {
    width: usize,
    height: usize,
    cells: Vec<bool>,
}

impl MatrixState {
    /// Create a `width` x `height` grid with every cell set to `initial_state`.
    ///
    /// # Panics
    /// Panics if `width * height` overflows `usize`
    pub fn new(width: usize, height: usize, initial_state: bool) -> Self {
        let len = width
            .checked_mul(height)
            .unwrap_or_else(|| panic!("{width}x{height} matrix has too many cells"));
        Self {
            width,
            height,
            cells: vec![initial_state; len],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Get the state of the LED at column `x`, row `y`, or `None` if it is off the grid
    pub fn get(&self, x: isize, y: isize) -> Option<bool> {
        let (col, row) = (self.column(x)?, self.row(y)?);
        Some(self.cells[self.index(row, col)])
    }

    /// Set the state of the LED at column `x`, row `y`. Coordinates off the grid are ignored.
    pub fn set(&mut self, x: isize, y: isize, state: bool) {
        match (self.column(x), self.row(y)) {
            (Some(col), Some(row)) => {
                let index = self.index(row, col);
                self.cells[index] = state;
            }
            _ => log::trace!("Ignoring write to ({x}, {y}) outside {}x{} matrix.", self.width, self.height),
        }
    }

    /// Set every LED in column `x`. Only touches the cells of that column.
    pub fn set_column(&mut self, x: isize, state: bool) {
        let Some(col) = self.column(x) else {
            log::trace!("Ignoring write to column {x} outside {}x{} matrix.", self.width, self.height);
            return;
        };

        for cell in self.cells.iter_mut().skip(col).step_by(self.width) {
            *cell = state;
        }
    }

    /// Set every LED in row `y`. Only touches the cells of that row.
    pub fn set_row(&mut self, y: isize, state: bool) {
        let Some(row) = self.row(y) else {
            log::trace!("Ignoring write to row {y} outside {}x{} matrix.", self.width, self.height);
            return;
        };

        let start = row * self.width;
        self.cells[start..start + self.width].fill(state);
    }

    /// Sweep every cell, calling `predicate(row, col)` for each.
    ///
    /// Cells where the predicate holds are set to `state`. The rest are set to `!state`
    /// when `set_others` is true, and left alone otherwise.
    pub fn set_with_predicate<P>(&mut self, mut predicate: P, state: bool, set_others: bool)
    where
        P: FnMut(usize, usize) -> bool,
    {
        for row in 0..self.height {
            for col in 0..self.width {
                let index = self.index(row, col);
                if predicate(row, col) {
                    self.cells[index] = state;
                } else if set_others {
                    self.cells[index] = !state;
                }
            }
        }
    }

    /// Iterate over rows, each yielded as a slice of cells ordered by column
    pub fn rows(&self) -> impl Iterator<Item = &[bool]> {
        // chunks panics on zero, and a zero-width grid has no rows worth yielding anyway
        self.cells.chunks(self.width.max(1)).take(self.height)
    }

    /// Number of LEDs currently on
    pub fn lit_count(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell).count()
    }

    fn index(&self, row: usize, col: usize) -> usize {
        row * self.width + col
    }

    fn column(&self, x: isize) -> Option<usize> {
        usize::try_from(x).ok().filter(|&col| col < self.width)
    }

    fn row(&self, y: isize) -> Option<usize> {
        usize::try_from(y).ok().filter(|&row| row < self.height)
    }
}
