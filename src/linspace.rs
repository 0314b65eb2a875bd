//! Evenly spaced sequences

use num::{Float, NumCast};

/// Returns `n` evenly spaced values from `start` to `stop`, both included.
///
/// For `n == 1` this is just `[start]`, for `n == 0` it's empty.
/// The last value is always exactly `stop`.
pub fn linspace<T: Float>(start: T, stop: T, n: usize) -> Vec<T> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let last = n - 1;
            let steps: T = <T as NumCast>::from(last).unwrap_or_else(T::one);
            let mut values: Vec<T> = (0..last)
                .map(|i| {
                    let t = <T as NumCast>::from(i).unwrap_or_else(T::zero) / steps;
                    start + (stop - start) * t
                })
                .collect();
            values.push(stop);
            values
        }
    }
}

/// Returns `n` values between `0` and `1` spaced such that they grow like `t^power`.
///
/// The first value is always `0` and the last always `1` (for `n >= 2`) regardless of `power`.
pub fn power_spaced<T: Float>(power: T, n: usize) -> Vec<T> {
    linspace(T::zero(), T::one(), n)
        .into_iter()
        .map(|t| t.powf(power))
        .collect()
}
