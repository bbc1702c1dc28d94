// grid.rs - Grid types for Langton's Ant

use crate::error::{ConfigError, Result};

/// Per-cell state, an index into the rule table and the palette.
/// Rule tables never exceed 20 entries so a byte is plenty.
pub type CellState = u8;

/// Grid dimensions in cells.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct GridSize {
    pub width: usize,
    pub height: usize,
}

impl GridSize {
    pub fn new(width: usize, height: usize) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(ConfigError::ZeroDimension { width, height }.into());
        }
        Ok(Self { width, height })
    }

    /// Derives the grid from a canvas in pixels and a cell size in pixels,
    /// truncating partial cells on each axis.
    pub fn from_canvas(canvas_width: u32, canvas_height: u32, resolution: u32) -> Result<Self> {
        if resolution == 0 {
            return Err(ConfigError::ZeroResolution.into());
        }
        let width = (canvas_width / resolution) as usize;
        let height = (canvas_height / resolution) as usize;
        if width == 0 || height == 0 {
            return Err(ConfigError::EmptyGrid {
                canvas_width,
                canvas_height,
                resolution,
            }
            .into());
        }
        Ok(Self { width, height })
    }

    /// Cell the ant starts on: `(⌊W/2⌋, ⌊H/2⌋)`.
    pub fn center(self) -> (usize, usize) {
        (self.width / 2, self.height / 2)
    }

    pub fn cell_count(self) -> usize {
        self.width * self.height
    }

    pub fn contains(self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height
    }
}

/// Dense row-major grid of cell states.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    size: GridSize,
    cells: Vec<CellState>,
}

impl Grid {
    /// Creates an all-zero grid.
    pub fn new(size: GridSize) -> Self {
        Self {
            size,
            cells: vec![0; size.cell_count()],
        }
    }

    pub fn size(&self) -> GridSize {
        self.size
    }

    pub fn width(&self) -> usize {
        self.size.width
    }

    pub fn height(&self) -> usize {
        self.size.height
    }

    #[inline]
    fn index(&self, x: usize, y: usize) -> usize {
        debug_assert!(self.size.contains(x, y));
        y * self.size.width + x
    }

    /// Panics if `(x, y)` is outside the grid.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> CellState {
        self.cells[self.index(x, y)]
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, state: CellState) {
        let idx = self.index(x, y);
        self.cells[idx] = state;
    }

    pub fn clear(&mut self) {
        self.cells.fill(0);
    }

    pub fn cells(&self) -> &[CellState] {
        &self.cells
    }

    /// Iterates `(x, y, state)` over every cell that is not in state 0.
    pub fn non_zero(&self) -> impl Iterator<Item = (usize, usize, CellState)> + '_ {
        let width = self.size.width;
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &s)| s != 0)
            .map(move |(i, &s)| (i % width, i / width, s))
    }
}
