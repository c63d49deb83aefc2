//! Convenience methods for constructing grids in a way that echoes,
//! but does not exactly match, methods common in scripting languages.
use num_traits::Float;

/// Generates evenly spaced values from start to stop,
/// including the endpoint.
///
/// Returns an empty Vec for `n == 0` and `[start]` for `n == 1`.
pub fn linspace<T>(start: T, stop: T, n: usize) -> Vec<T>
where
    T: Float,
{
    if n < 2 {
        return vec![start; n];
    }
    let dx: T = (stop - start) / T::from(n - 1).unwrap_or_else(T::nan);
    (0..n)
        .map(|i| start + T::from(i).unwrap_or_else(T::nan) * dx)
        .collect()
}

/// Generates values evenly spaced in log10 from `10^start` to `10^stop`,
/// including the endpoint.
pub fn logspace<T>(start: T, stop: T, n: usize) -> Vec<T>
where
    T: Float,
{
    let ten = T::from(10.0).unwrap_or_else(T::nan);
    linspace(start, stop, n)
        .into_iter()
        .map(|p| ten.powf(p))
        .collect()
}
