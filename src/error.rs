//! Error type shared by every fallible operation in the crate.
use thiserror::Error;

/// Broad classification of an [`InterpError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The observation point lies above the grid and the
    /// requested method does not extrapolate.
    OutOfRange,
    /// The inputs violate a precondition of the method,
    /// including an observation point below the grid.
    InvalidInput,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InterpError {
    #[error("observation point lies above the grid; extrapolation required")]
    OutsideHigh,

    #[error("observation point lies below the grid; extrapolation required")]
    OutsideLow,

    #[error("insufficient points: got {got}, need at least {need}")]
    InsufficientPoints { got: usize, need: usize },

    #[error("length mismatch: grid has {grid} entries, values have {vals}")]
    LengthMismatch { grid: usize, vals: usize },

    #[error("output has {out} entries, expected {obs}")]
    OutputMismatch { obs: usize, out: usize },

    #[error("grid must be strictly increasing; violated at index {index}")]
    NonIncreasing { index: usize },

    #[error("extrapolation stencil has coincident abscissas")]
    DegenerateStencil,

    #[error("grid step must be finite and positive")]
    InvalidStep,

    #[error("observation point is NaN")]
    NotANumber,

    #[error("unrepresentable number")]
    Unrepresentable,
}

impl InterpError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            InterpError::OutsideHigh => ErrorKind::OutOfRange,
            _ => ErrorKind::InvalidInput,
        }
    }
}
