use crate::{Error, Rng};

/// The symbols eligible to appear in a grid cell, ordered from densest to lightest.
pub const SYMBOLS: [char; 8] = ['#', '%', '&', '*', '+', '-', '.', ' '];

/// The number of rows in the default artwork.
pub const HEIGHT: usize = 20;

/// The number of columns in the default artwork.
pub const WIDTH: usize = 50;

#[derive(Clone, Debug, PartialEq, Eq)]
/// A fully populated artwork: an owned, row-major buffer of sampled symbols with explicit
/// dimensions. Every cell holds a member of the alphabet it was generated from.
pub struct Grid {
    cells: Vec<char>,
    height: usize,
    width: usize,
}

impl Grid {
    /// Returns the number of rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns the number of columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the symbol at `(row, col)`, or `None` if the position is out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<char> {
        if row < self.height && col < self.width {
            self.cells.get(row * self.width + col).copied()
        } else {
            None
        }
    }

    /// Returns an iterator over the rows, top to bottom, each a slice of `width` symbols.
    pub fn rows(&self) -> impl Iterator<Item = &[char]> {
        self.cells.chunks_exact(self.width)
    }
}

/// Generates a `height` by `width` grid by drawing each cell independently and uniformly
/// from `alphabet`, in row-major order. Cells are uncorrelated by construction.
///
/// # Example
/// ```
/// # use glyphgrid::{generate, Rng, SYMBOLS};
/// let rng = Rng::with_seed(42);
/// let grid = generate(4, 10, &SYMBOLS, &rng)?;
/// assert_eq!(grid.height(), 4);
/// assert_eq!(grid.width(), 10);
/// # Ok::<(), glyphgrid::Error>(())
/// ```
pub fn generate(height: usize, width: usize, alphabet: &[char], rng: &Rng) -> Result<Grid, Error> {
    if height == 0 {
        return Err(Error::InvalidArgument("height must be positive"));
    }
    if width == 0 {
        return Err(Error::InvalidArgument("width must be positive"));
    }
    if alphabet.is_empty() {
        return Err(Error::InvalidArgument("alphabet must not be empty"));
    }
    let len = height
        .checked_mul(width)
        .ok_or(Error::InvalidArgument("grid dimensions overflow"))?;

    let mut cells = Vec::with_capacity(len);
    for _ in 0..len {
        let index = rng.bounded(0, alphabet.len() as u64) as usize;
        cells.push(alphabet[index]);
    }
    Ok(Grid {
        cells,
        height,
        width,
    })
}
