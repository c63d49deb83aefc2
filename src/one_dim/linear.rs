//! Two-point linear extrapolation, and an interpolator that falls back to it
//! outside the grid.

use num_traits::Float;

use super::neville::neville;
use super::{Extrap, Grid1D, Interp1D};
use crate::{InterpError, Scale};

/// Evaluate the line through `(x[0], y[0])` and `(x[1], y[1])` at `loc`.
///
/// # Errors
/// * [`InterpError::DegenerateStencil`] if `x[0] == x[1]`
#[inline]
pub fn linear_extrap<T: Float>(loc: T, x: &[T; 2], y: &[T; 2]) -> Result<T, InterpError> {
    if x[0] == x[1] {
        return Err(InterpError::DegenerateStencil);
    }
    let slope = (y[1] - y[0]) / (x[1] - x[0]);
    Ok(y[0] + slope * (loc - x[0]))
}

/// Linear extrapolation of `log_fix(y)`, exponentiated.
///
/// Equivalent to extending a power-law-in-`e` (exponential) trend through
/// the two points.
#[inline]
pub fn log_linear_extrap<T: Float>(loc: T, x: &[T; 2], y: &[T; 2]) -> Result<T, InterpError> {
    let log_y = Scale::Log.forward_arr(y);
    Ok(linear_extrap(loc, x, &log_y)?.exp())
}

/// Degree-5 local polynomial interpolation inside the grid, with linear
/// extrapolation through the two outermost points on either side.
///
/// In log space, extrapolation follows the exponential trend of the edge
/// points instead.
pub struct NevilleLinearExtrap1D<G> {
    grid: G,
    scale: Scale,
}

impl<G> NevilleLinearExtrap1D<G> {
    pub fn new(grid: G) -> Self {
        Self {
            grid,
            scale: Scale::Linear,
        }
    }

    pub fn new_log(grid: G) -> Self {
        Self {
            grid,
            scale: Scale::Log,
        }
    }
}

impl<'a, T, G> Interp1D<'a, T, G> for NevilleLinearExtrap1D<G>
where
    T: Float,
    G: Grid1D<'a, T>,
{
    #[inline]
    fn eval_one(&self, loc: T) -> Result<T, InterpError> {
        let (j, extrap) = self.grid.bracket(loc)?;

        let v = match extrap {
            Extrap::Inside => {
                let s = self.grid.window(j, extrap)?;
                neville(loc, &s.x, &self.scale.forward_arr(&s.y))
            }
            Extrap::OutsideLow | Extrap::OutsideHigh => {
                let s = self.grid.edge(extrap)?;
                linear_extrap(loc, &s.x, &self.scale.forward_arr(&s.y))?
            }
        };

        Ok(self.scale.inverse(v))
    }
}
