//! One-dimensional grids and the edge-clamped stencil selection shared by
//! the interpolators in this module.
//!
//! Every interpolator evaluates a degree-5 polynomial through a 6-point
//! window of the grid. Away from the edges the window is centered on the
//! bracketing cell; within three cells of either end it is pinned to the
//! first or last six points so that it never runs off the grid.

pub mod linear;
pub mod neville;

use core::cmp::Ordering;

use num_traits::{Float, NumCast};

use crate::InterpError;

/// Number of grid points in an interpolation stencil.
pub const STENCIL: usize = 6;

/// Extrapolation flag
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Extrap {
    Inside,
    OutsideLow,
    OutsideHigh,
}

/// A fixed-size window of grid locations and values.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stencil<T, const N: usize> {
    pub x: [T; N],
    pub y: [T; N],
    pub extrap: Extrap,
}

/// Index of the first point of the 6-point window on a grid of `n` points,
/// given the bracketing index `j` (the largest index with `x[j] < loc`).
///
/// Windows are pinned to `[0, 6)` while `j < 3` (or when no point lies
/// below the observation), pinned to `[n - 6, n)` while fewer than four
/// points remain above `j`, and span `[j - 3, j + 3)` otherwise.
///
/// Assumes `n >= 6`.
#[inline]
pub fn window_start(j: Option<usize>, n: usize) -> usize {
    const HALF: usize = STENCIL / 2;
    match j {
        None => 0,
        Some(j) if j < HALF => 0,
        Some(j) if j > n - (HALF + 1) => n - STENCIL,
        Some(j) => j - HALF,
    }
}

/// A regular or rectilinear 1D grid with paired values.
pub trait Grid1D<'a, T: Float> {
    /// Number of grid points.
    fn len(&self) -> usize;

    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Location and value of the grid point at index `i`, like `(x, y)`.
    fn point(&self, i: usize) -> Result<(T, T), InterpError>;

    /// Get the bracketing index (the largest `j` with `x[j] < loc`, or `None`
    /// if no grid point is below `loc`) along with the extrapolation flag.
    ///
    /// It is highly recommended to inline implementations of this function.
    fn bracket(&self, loc: T) -> Result<(Option<usize>, Extrap), InterpError>;

    /// Select the edge-clamped 6-point window for an observation point.
    #[inline]
    fn stencil(&self, loc: T) -> Result<Stencil<T, STENCIL>, InterpError> {
        let (j, extrap) = self.bracket(loc)?;
        self.window(j, extrap)
    }

    /// Build the edge-clamped 6-point window from a result of [`Grid1D::bracket`].
    #[inline]
    fn window(
        &self,
        j: Option<usize>,
        extrap: Extrap,
    ) -> Result<Stencil<T, STENCIL>, InterpError> {
        let start = window_start(j, self.len());

        let mut x = [T::zero(); STENCIL];
        let mut y = [T::zero(); STENCIL];
        for k in 0..STENCIL {
            (x[k], y[k]) = self.point(start + k)?;
        }

        Ok(Stencil { x, y, extrap })
    }

    /// The two outermost points on the side indicated by `extrap`;
    /// the last two points for `OutsideHigh`, otherwise the first two.
    #[inline]
    fn edge(&self, extrap: Extrap) -> Result<Stencil<T, 2>, InterpError> {
        let start = match extrap {
            Extrap::OutsideHigh => self.len() - 2,
            _ => 0,
        };
        let (x0, y0) = self.point(start)?;
        let (x1, y1) = self.point(start + 1)?;

        Ok(Stencil {
            x: [x0, x1],
            y: [y0, y1],
            extrap,
        })
    }
}

/// A one-dimensional interpolator.
pub trait Interp1D<'a, T: Float, G: Grid1D<'a, T>> {
    /// Evaluate the interpolant at an observation point.
    ///
    /// It is highly recommended to inline implementations of this function.
    fn eval_one(&self, loc: T) -> Result<T, InterpError>;

    /// Evaluate the interpolant at a set of observation points.
    #[inline]
    fn eval(&self, locs: &[T], out: &mut [T]) -> Result<(), InterpError> {
        if locs.len() != out.len() {
            return Err(InterpError::OutputMismatch {
                obs: locs.len(),
                out: out.len(),
            });
        }

        for i in 0..locs.len() {
            out[i] = self.eval_one(locs[i])?;
        }

        Ok(())
    }

    /// Evaluate the interpolant at a set of observation points, allocating
    /// for the output values for convenience.
    #[cfg(feature = "std")]
    #[inline]
    fn eval_alloc(&self, locs: &[T]) -> Result<Vec<T>, InterpError> {
        let mut out = vec![T::zero(); locs.len()];
        self.eval(locs, &mut out)?;
        Ok(out)
    }
}

/// A rectilinear grid, which may have uneven spacing.
#[derive(Clone, Copy, Debug)]
pub struct RectilinearGrid1D<'a, T: Float> {
    grid: &'a [T],
    vals: &'a [T],
}

impl<'a, T: Float> RectilinearGrid1D<'a, T> {
    /// Build a grid, checking every precondition of the 6-point method.
    ///
    /// This is O(n) in the grid size.
    ///
    /// # Errors
    /// * If `grid` and `vals` differ in length
    /// * If there are fewer than 6 points
    /// * If `grid` is not strictly increasing (including repeated or NaN entries)
    pub fn new(grid: &'a [T], vals: &'a [T]) -> Result<Self, InterpError> {
        if grid.len() != vals.len() {
            return Err(InterpError::LengthMismatch {
                grid: grid.len(),
                vals: vals.len(),
            });
        }
        if grid.len() < STENCIL {
            return Err(InterpError::InsufficientPoints {
                got: grid.len(),
                need: STENCIL,
            });
        }
        if let Some(index) =
            (1..grid.len()).find(|&i| grid[i].partial_cmp(&grid[i - 1]) != Some(Ordering::Greater))
        {
            return Err(InterpError::NonIncreasing { index });
        }

        Ok(Self { grid, vals })
    }

    pub fn grid(&self) -> &'a [T] {
        self.grid
    }

    pub fn vals(&self) -> &'a [T] {
        self.vals
    }
}

impl<'a, T: Float> Grid1D<'a, T> for RectilinearGrid1D<'a, T> {
    #[inline]
    fn len(&self) -> usize {
        self.grid.len()
    }

    #[inline]
    fn point(&self, i: usize) -> Result<(T, T), InterpError> {
        Ok((self.grid[i], self.vals[i]))
    }

    #[inline]
    fn bracket(&self, loc: T) -> Result<(Option<usize>, Extrap), InterpError> {
        if loc.is_nan() {
            return Err(InterpError::NotANumber);
        }

        let extrap = match loc {
            x if x < self.grid[0] => Extrap::OutsideLow,
            x if x > self.grid[self.grid.len() - 1] => Extrap::OutsideHigh,
            _ => Extrap::Inside,
        };

        // Bisection search; yields 0 if no point is below `loc`
        let j = self.grid.partition_point(|v| *v < loc).checked_sub(1);

        Ok((j, extrap))
    }
}

/// A regular grid, which has the same spacing between each point.
#[derive(Clone, Copy, Debug)]
pub struct RegularGrid1D<'a, T: Float> {
    start: T,
    stop: T,
    step: T,
    vals: &'a [T],
}

impl<'a, T: Float> RegularGrid1D<'a, T> {
    /// # Errors
    /// * If there are fewer than 6 values
    /// * If `start` is not finite, or `step` is not finite and positive
    /// * If the number of values is not representable in `T`
    pub fn new(start: T, step: T, vals: &'a [T]) -> Result<Self, InterpError> {
        if vals.len() < STENCIL {
            return Err(InterpError::InsufficientPoints {
                got: vals.len(),
                need: STENCIL,
            });
        }
        if !start.is_finite() || !step.is_finite() || step <= T::zero() {
            return Err(InterpError::InvalidStep);
        }
        let stop = start
            + step * <T as NumCast>::from(vals.len() - 1).ok_or(InterpError::Unrepresentable)?;

        Ok(Self {
            start,
            stop,
            step,
            vals,
        })
    }

    pub fn vals(&self) -> &'a [T] {
        self.vals
    }
}

impl<'a, T: Float> Grid1D<'a, T> for RegularGrid1D<'a, T> {
    #[inline]
    fn len(&self) -> usize {
        self.vals.len()
    }

    #[inline]
    fn point(&self, i: usize) -> Result<(T, T), InterpError> {
        let x = self.start
            + self.step * <T as NumCast>::from(i).ok_or(InterpError::Unrepresentable)?;
        Ok((x, self.vals[i]))
    }

    #[inline]
    fn bracket(&self, loc: T) -> Result<(Option<usize>, Extrap), InterpError> {
        if loc.is_nan() {
            return Err(InterpError::NotANumber);
        }

        let n = self.vals.len();
        match loc {
            x if x < self.start => Ok((None, Extrap::OutsideLow)),
            x if x > self.stop => Ok((Some(n - 1), Extrap::OutsideHigh)),
            _ => {
                // Nominal index of the last point strictly below `loc`.
                // Ties at grid points may land on either neighbor, which
                // only moves the window when the point sits on a window edge.
                let t = ((loc - self.start) / self.step).ceil() - T::one();
                let j = if t < T::zero() {
                    None
                } else {
                    let j = <usize as NumCast>::from(t).ok_or(InterpError::Unrepresentable)?;
                    Some(j.min(n - 2))
                };
                Ok((j, Extrap::Inside))
            }
        }
    }
}

/// Check whether any observation point is outside the grid by more than
/// an absolute tolerance `atol`. NaN observation points count as outside.
///
/// Assumes the grid is sorted in increasing order.
///
/// # Errors
/// * If the grid is empty
pub fn check_bounds<T: Float>(grid: &[T], locs: &[T], atol: T) -> Result<bool, InterpError> {
    match (grid.first(), grid.last()) {
        (Some(&lo), Some(&hi)) => Ok(locs
            .iter()
            .any(|&x| x.is_nan() || (x - lo) < -atol || (x - hi) > atol)),
        _ => Err(InterpError::InsufficientPoints { got: 0, need: 1 }),
    }
}
