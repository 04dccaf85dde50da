//! Random symbol-grid text art.
//!
//! A [`Grid`] is filled by drawing each cell independently and uniformly from
//! a symbol alphabet, then rendered one row per line. The random source is a
//! [`Rng`] handle created once per run, either time-seeded or from an explicit
//! seed for reproducible output.
//!
//! # Example
//! ```
//! use glyphgrid::{generate, render, Rng, HEIGHT, SYMBOLS, WIDTH};
//!
//! let rng = Rng::with_seed(1234);
//! let grid = generate(HEIGHT, WIDTH, &SYMBOLS, &rng)?;
//! let text = render(&grid);
//! assert_eq!(text.lines().count(), HEIGHT);
//! # Ok::<(), glyphgrid::Error>(())
//! ```

mod error;
mod grid;
#[cfg(feature = "rand")]
mod rand_support;
mod render;
mod rng;

#[cfg(test)]
mod tests;

pub use error::Error;
pub use grid::{generate, Grid, HEIGHT, SYMBOLS, WIDTH};
pub use render::render;
pub use rng::Rng;
