//! Log-space transform for positive data spanning many orders of magnitude.
//!
//! Interpolating `ln(y)` instead of `y` is far more accurate when the samples
//! vary exponentially. Exact zeros are mapped to a large negative sentinel
//! rather than `-inf`, so a nominally-zero sample still participates in a
//! stencil; results near such a sample saturate toward `exp(-200)`.
//!
//! Negative samples are not checked. Their logarithm is NaN, which propagates
//! to the interpolated value.
use num_traits::{Float, NumCast};

use crate::InterpError;

/// Value substituted for `ln(0)`.
pub const LOG_ZERO: f64 = -200.0;

/// Evaluation space for an interpolator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Scale {
    /// Interpolate the samples directly
    #[default]
    Linear,
    /// Interpolate `log_fix` of the samples and exponentiate the result
    Log,
}

impl Scale {
    /// Map a sample into the evaluation space.
    #[inline]
    pub fn forward<T: Float>(&self, v: T) -> T {
        match self {
            Scale::Linear => v,
            Scale::Log => log_fix_one(v),
        }
    }

    /// Map a value from the evaluation space back to sample space.
    #[inline]
    pub fn inverse<T: Float>(&self, v: T) -> T {
        match self {
            Scale::Linear => v,
            Scale::Log => v.exp(),
        }
    }

    /// Apply `forward` to each entry of a fixed-size stencil.
    #[inline]
    pub(crate) fn forward_arr<T: Float, const N: usize>(&self, vals: &[T; N]) -> [T; N] {
        match self {
            Scale::Linear => *vals,
            Scale::Log => {
                let mut out = *vals;
                out.iter_mut().for_each(|v| *v = log_fix_one(*v));
                out
            }
        }
    }
}

/// [`LOG_ZERO`] in the working float type.
///
/// Saturates to the most negative finite value for types that cannot represent it.
#[inline]
pub fn log_zero<T: Float>() -> T {
    <T as NumCast>::from(LOG_ZERO).unwrap_or_else(T::min_value)
}

/// Natural log of a single sample, with zero mapped to [`LOG_ZERO`].
#[inline]
pub fn log_fix_one<T: Float>(v: T) -> T {
    if v == T::zero() {
        log_zero()
    } else {
        v.ln()
    }
}

/// Write the safe natural log of each entry of `vals` into `out`.
///
/// # Errors
/// * If `vals` and `out` differ in length
pub fn log_fix_into<T: Float>(vals: &[T], out: &mut [T]) -> Result<(), InterpError> {
    if vals.len() != out.len() {
        return Err(InterpError::OutputMismatch {
            obs: vals.len(),
            out: out.len(),
        });
    }
    for i in 0..vals.len() {
        out[i] = log_fix_one(vals[i]);
    }
    Ok(())
}

/// Safe natural log of each entry of `vals`, allocating for the output.
#[cfg(feature = "std")]
pub fn log_fix<T: Float>(vals: &[T]) -> Vec<T> {
    vals.iter().map(|&v| log_fix_one(v)).collect()
}
