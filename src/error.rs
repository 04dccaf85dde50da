use std::{io, time::SystemTimeError};

use thiserror::Error;

#[derive(Debug, Error)]
/// Errors surfaced by grid generation and the binary entry point.
pub enum Error {
    /// A caller-supplied dimension or alphabet was degenerate.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),

    /// The wall clock was unusable for seeding the random source.
    #[error("system clock unavailable: {0}")]
    Clock(#[from] SystemTimeError),

    /// Writing the rendered grid failed.
    #[error(transparent)]
    Io(#[from] io::Error),
}
