//! Bounded averaging.

use std::ops::RangeInclusive;
use thiserror::Error;

/// Smallest value accepted by [`bounded_avg`].
pub const MIN_BOUND: f64 = 1.0;
/// Largest value accepted by [`bounded_avg`].
pub const MAX_BOUND: f64 = 100.0;

const BOUNDS: RangeInclusive<f64> = MIN_BOUND..=MAX_BOUND;

/// Failure to compute a bounded average.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AvgError {
    #[error("outside of bounds 1-100")]
    OutOfBounds,

    #[error("cannot average an empty sequence (division by zero)")]
    DivisionByZero,
}

/// Check whether `val` lies in the inclusive range [`MIN_BOUND`, `MAX_BOUND`].
///
/// NaN is never in bounds.
pub fn in_bounds(val: f64) -> bool {
    BOUNDS.contains(&val)
}

/// Return the average of `nums`, making sure every value is within 1-100.
///
/// Values are checked in order and the first one out of bounds aborts the
/// computation. The quotient is always a true division, even for integers.
///
/// Any element type that converts losslessly into `f64` is accepted
/// (`i8`, `i16`, `i32`, `u8`, `u16`, `u32`, `f32`, `f64`). Wider integers
/// such as `i64` and `u64` must be converted by the caller first.
///
/// ```
/// use agestats::stats::bounded_avg;
///
/// assert_eq!(bounded_avg(&[2, 4, 6]), Ok(4.0));
/// assert_eq!(bounded_avg(&[1, 100]), Ok(50.5));
///
/// let ages: [i64; 2] = [30, 45];
/// let ages: Vec<f64> = ages.iter().map(|&age| age as f64).collect();
/// assert_eq!(bounded_avg(&ages), Ok(37.5));
/// ```
///
/// # Errors
/// Returns [`AvgError::OutOfBounds`] if any value is below 1 or above 100,
/// and [`AvgError::DivisionByZero`] if `nums` is empty.
///
/// ```
/// use agestats::stats::{AvgError, bounded_avg};
///
/// assert_eq!(bounded_avg(&[10, 40, 50, 99, 103, 2, 0]), Err(AvgError::OutOfBounds));
/// assert_eq!(bounded_avg::<i32>(&[]), Err(AvgError::DivisionByZero));
/// ```
pub fn bounded_avg<T>(nums: &[T]) -> Result<f64, AvgError>
where
    T: Copy + Into<f64>,
{
    let mut sum = 0.0;
    for &num in nums {
        let val: f64 = num.into();
        if !in_bounds(val) {
            return Err(AvgError::OutOfBounds);
        }
        sum += val;
    }

    if nums.is_empty() {
        return Err(AvgError::DivisionByZero);
    }
    Ok(sum / nums.len() as f64)
}
