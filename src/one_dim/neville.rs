//! Fixed-stencil polynomial interpolation by Neville's algorithm.
//!
//! ```rust
//! use polyinterp::{interp, InterpError};
//!
//! // A cubic is reproduced exactly by the degree-5 local fit
//! let x = [0.0_f64, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0];
//! let y = x.map(|v| v * v * v);
//!
//! let v = interp(3.5, &x, &y).unwrap();
//! assert!((v - 42.875).abs() < 1e-9);
//!
//! // Points above the grid are an explicit error, not a silent zero
//! assert_eq!(interp(7.5, &x, &y), Err(InterpError::OutsideHigh));
//! ```
//!
//! References
//! * https://en.wikipedia.org/wiki/Neville%27s_algorithm
use num_traits::Float;

use super::{Extrap, Grid1D, Interp1D, RectilinearGrid1D};
use crate::{InterpError, Scale};

/// Evaluate the unique polynomial of degree `N - 1` through `N` points at `loc`.
///
/// Builds Neville's triangular table in place, one stage at a time from
/// left to right. After stage `k`, entry `i` holds the value at `loc` of the
/// polynomial through points `i..=i + k`, so entry 0 of the last stage is
/// the result.
///
/// Abscissas are assumed distinct; a repeated abscissa divides by zero and
/// the resulting inf or NaN propagates to the output.
#[inline]
pub fn neville<T: Float, const N: usize>(loc: T, x: &[T; N], y: &[T; N]) -> T {
    const {
        assert!(N > 0, "Neville table needs at least one point");
    }

    let mut p = *y;
    for k in 1..N {
        for i in 0..N - k {
            p[i] = ((loc - x[i + k]) * p[i] - (loc - x[i]) * p[i + 1]) / (x[i] - x[i + k]);
        }
    }

    p[0]
}

/// Degree-5 local polynomial interpolation over a 6-point edge-clamped stencil.
///
/// Observation points outside the grid produce [`InterpError::OutsideLow`]
/// or [`InterpError::OutsideHigh`]; use
/// [`NevilleLinearExtrap1D`](super::linear::NevilleLinearExtrap1D) to
/// extrapolate instead.
pub struct Neville1D<G> {
    grid: G,
    scale: Scale,
}

impl<G> Neville1D<G> {
    pub fn new(grid: G) -> Self {
        Self {
            grid,
            scale: Scale::Linear,
        }
    }

    /// Interpolate in log space, for positive values spanning many decades.
    pub fn new_log(grid: G) -> Self {
        Self {
            grid,
            scale: Scale::Log,
        }
    }
}

impl<'a, T, G> Interp1D<'a, T, G> for Neville1D<G>
where
    T: Float,
    G: Grid1D<'a, T>,
{
    #[inline]
    fn eval_one(&self, loc: T) -> Result<T, InterpError> {
        let (j, extrap) = self.grid.bracket(loc)?;

        match extrap {
            Extrap::Inside => {
                let s = self.grid.window(j, extrap)?;
                let y = self.scale.forward_arr(&s.y);
                Ok(self.scale.inverse(neville(loc, &s.x, &y)))
            }
            Extrap::OutsideLow => Err(InterpError::OutsideLow),
            Extrap::OutsideHigh => Err(InterpError::OutsideHigh),
        }
    }
}

/// Interpolate `vals` sampled on `grid` at a single observation point.
///
/// # Errors
/// * [`InterpError::OutsideHigh`] if `loc` is above the last grid point
/// * [`InterpError::OutsideLow`] if `loc` is below the first grid point
/// * If the grid fails validation (see [`RectilinearGrid1D::new`])
pub fn interp<T: Float>(loc: T, grid: &[T], vals: &[T]) -> Result<T, InterpError> {
    Neville1D::new(RectilinearGrid1D::new(grid, vals)?).eval_one(loc)
}

/// Like [`interp`], but interpolates `log_fix(vals)` and exponentiates the result.
pub fn interp_log<T: Float>(loc: T, grid: &[T], vals: &[T]) -> Result<T, InterpError> {
    Neville1D::new_log(RectilinearGrid1D::new(grid, vals)?).eval_one(loc)
}

/// Interpolate at each of `locs`, writing into `out`.
///
/// The grid is validated once for the whole batch.
pub fn interp_many<T: Float>(
    locs: &[T],
    grid: &[T],
    vals: &[T],
    out: &mut [T],
) -> Result<(), InterpError> {
    Neville1D::new(RectilinearGrid1D::new(grid, vals)?).eval(locs, out)
}

/// Log-space version of [`interp_many`].
pub fn interp_log_many<T: Float>(
    locs: &[T],
    grid: &[T],
    vals: &[T],
    out: &mut [T],
) -> Result<(), InterpError> {
    Neville1D::new_log(RectilinearGrid1D::new(grid, vals)?).eval(locs, out)
}

/// Evaluate interpolant, allocating a new Vec for the output.
///
/// For best results, use [`interp_many`] with preallocated output.
#[cfg(feature = "std")]
pub fn interp_alloc<T: Float>(locs: &[T], grid: &[T], vals: &[T]) -> Result<Vec<T>, InterpError> {
    Neville1D::new(RectilinearGrid1D::new(grid, vals)?).eval_alloc(locs)
}

/// Log-space version of [`interp_alloc`].
#[cfg(feature = "std")]
pub fn interp_log_alloc<T: Float>(
    locs: &[T],
    grid: &[T],
    vals: &[T],
) -> Result<Vec<T>, InterpError> {
    Neville1D::new_log(RectilinearGrid1D::new(grid, vals)?).eval_alloc(locs)
}
