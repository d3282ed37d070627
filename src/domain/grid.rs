use super::GridError;

/// State of a fully alive cell.
pub const ALIVE: f32 = 1.0;

/// State of a dead cell.
pub const DEAD: f32 = 0.0;

/// Grid manages the toroidal 2D field of continuous cell states.
/// Every coordinate wraps, so reads and writes never fail.
#[derive(Clone, Debug, PartialEq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<f32>,
}

impl Grid {
    /// Create a new grid with all cells dead
    pub fn new(width: usize, height: usize) -> Result<Self, GridError> {
        let invalid = GridError::InvalidDimension { width, height };
        if width == 0 || height == 0 {
            return Err(invalid);
        }
        // Both axes must fit in isize for signed wrapping
        if isize::try_from(width).is_err() || isize::try_from(height).is_err() {
            return Err(invalid);
        }
        let len = width.checked_mul(height).ok_or(invalid)?;

        Ok(Self {
            width,
            height,
            cells: vec![DEAD; len],
        })
    }

    pub const fn width(&self) -> usize {
        self.width
    }

    pub const fn height(&self) -> usize {
        self.height
    }

    /// Get grid dimensions
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Reduce a signed coordinate pair onto the torus, into `[0, W) x [0, H)`.
    /// Callers adding offsets to arbitrary anchors wrap first so the sum
    /// cannot overflow.
    pub fn wrap(&self, x: isize, y: isize) -> (isize, isize) {
        (
            x.rem_euclid(self.width as isize),
            y.rem_euclid(self.height as isize),
        )
    }

    /// Row-major: y selects the row, x the column.
    fn wrapped_index(&self, x: isize, y: isize) -> usize {
        let (wx, wy) = self.wrap(x, y);
        wy as usize * self.width + wx as usize
    }

    /// Get cell state at any integer position, wrapping both axes
    #[inline]
    pub fn get(&self, x: isize, y: isize) -> f32 {
        self.cells[self.wrapped_index(x, y)]
    }

    /// Set cell state at any integer position, wrapping both axes
    #[inline]
    pub fn set(&mut self, x: isize, y: isize, value: f32) {
        let idx = self.wrapped_index(x, y);
        self.cells[idx] = value;
    }

    /// Reset every cell to dead
    pub fn clear(&mut self) {
        self.cells.fill(DEAD);
    }

    /// Row-major view of all states.
    pub fn cells(&self) -> &[f32] {
        &self.cells
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [f32] {
        &mut self.cells
    }

    /// Iterate over all cells with their positions
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, f32)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(idx, &state)| (idx % self.width, idx / self.width, state))
    }

    /// Arithmetic mean of all cell states
    pub fn mean_state(&self) -> f32 {
        let total: f64 = self.cells.iter().map(|&s| f64::from(s)).sum();
        (total / self.cells.len() as f64) as f32
    }

    /// Number of cells whose state is exactly 1.0 (the rule's notion of alive)
    pub fn alive_count(&self) -> usize {
        self.cells.iter().filter(|&&s| s == ALIVE).count()
    }

    /// Number of cells with any non-zero state
    pub fn live_count(&self) -> usize {
        self.cells.iter().filter(|&&s| s > DEAD).count()
    }
}
