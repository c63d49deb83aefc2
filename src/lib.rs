//! Pointwise interpolation of tabulated 1D functions by local degree-5
//! polynomials, no-std and no-alloc compatible.
//!
//! Each evaluation fits the unique quintic through a 6-point window of the
//! grid using Neville's algorithm. The window is centered on the bracketing
//! cell in the interior and pinned to the first or last six points near the
//! edges. A log-space variant interpolates `ln(y)` for positive data that
//! spans many orders of magnitude, and two-point linear extrapolation covers
//! observation points beyond the grid.
//!
//! | Method                        | RAM  | Interp. Cost               |
//! |-------------------------------|------|----------------------------|
//! | `interp` / `interp_log`       | O(1) | O(n) checks + log2(n) + 15 |
//! | `Neville1D` (rectilinear)     | O(1) | log2(n) + 15               |
//! | `Neville1D` (regular)         | O(1) | 15                         |
//! | `linear_extrap`               | O(1) | 1                          |
//!
//! The free functions validate the whole grid on every call; build a grid and
//! interpolator once to evaluate many points.
//!
//! # Example: Free functions
//! ```rust
//! use polyinterp::{interp, interp_log, linear_extrap, log_fix, InterpError};
//!
//! let x = [0.0_f64, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0];
//! let y = x.map(|v| (-2.0 * v).exp());
//!
//! // Inside the grid
//! let v = interp_log(3.25, &x, &y).unwrap();
//! assert!((v - (-6.5_f64).exp()).abs() / v < 1e-12);
//!
//! // Above the grid the caller must choose an extrapolation
//! assert_eq!(interp(8.0, &x, &y), Err(InterpError::OutsideHigh));
//! let log_y = log_fix(&y);
//! let v = linear_extrap(8.0, &[x[6], x[7]], &[log_y[6], log_y[7]]).unwrap().exp();
//! assert!((v - (-16.0_f64).exp()).abs() / v < 1e-12);
//! ```
//!
//! # Example: Interpolator structs
//! ```rust
//! use polyinterp::{Interp1D, NevilleLinearExtrap1D, RegularGrid1D};
//!
//! // Values at 0.0, 0.5, ..., 3.5
//! let y = [1.0_f64, 2.0, 4.0, 8.0, 16.0, 32.0, 64.0, 128.0];
//! let grid = RegularGrid1D::new(0.0, 0.5, &y).unwrap();
//! let interpolator = NevilleLinearExtrap1D::new_log(grid);
//!
//! // Points to interpolate/extrapolate
//! let obs = [-1.0, 0.25, 3.0, 5.0];
//! let mut out = [0.0; 4];
//! interpolator.eval(&obs, &mut out).unwrap();
//!
//! for (loc, v) in obs.iter().zip(out) {
//!     assert!((v - 4.0_f64.powf(*loc)).abs() / v < 1e-12);
//! }
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
// These "needless" range loops are a significant speedup
#![allow(clippy::needless_range_loop)]

pub mod error;
pub use error::{ErrorKind, InterpError};

pub mod logspace;
#[cfg(feature = "std")]
pub use logspace::log_fix;
pub use logspace::{log_fix_into, log_fix_one, Scale, LOG_ZERO};

pub mod one_dim;
pub use one_dim::{
    check_bounds,
    linear::{linear_extrap, log_linear_extrap, NevilleLinearExtrap1D},
    neville::{interp, interp_log, interp_log_many, interp_many, neville, Neville1D},
    Extrap, Grid1D, Interp1D, RectilinearGrid1D, RegularGrid1D, Stencil, STENCIL,
};
#[cfg(feature = "std")]
pub use one_dim::neville::{interp_alloc, interp_log_alloc};

#[cfg(feature = "std")]
pub mod utils;

#[cfg(all(test, feature = "std"))]
pub(crate) mod testing;
