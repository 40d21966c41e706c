//! Math utilities shared by the trackbot crates.

#![no_std]

use num_traits::Float;

/// Scales down the values in an array so that none exceed a given maximum magnitude.
///
/// The element with the largest absolute value decides the scale. If its magnitude is
/// greater than `max`, every element is scaled by the same factor so that the largest
/// magnitude equals `max`. Arrays already within the limit are returned unchanged, so the
/// ratio between the two sides of a tank command is preserved.
///
/// # Examples
///
/// ```
/// use trackbot_math::desaturate;
///
/// let values = [3.0, -4.0, 1.0];
/// assert_eq!(desaturate(values, 2.0), [1.5, -2.0, 0.5]);
///
/// // Already within bounds, so unchanged:
/// let values = [0.5, -1.2, 0.8];
/// assert_eq!(desaturate(values, 2.0), values);
/// ```
pub fn desaturate<T: Float, const N: usize>(values: [T; N], max: T) -> [T; N] {
    let largest_magnitude = values
        .iter()
        .map(|v| v.abs())
        .fold(T::zero(), T::max);

    if largest_magnitude > max {
        values.map(|v| v * max / largest_magnitude)
    } else {
        values
    }
}

/// Clamps `value` into `[-max, max]`.
///
/// NaN maps to zero so that a bad computation never reaches an actuator.
///
/// ```
/// use trackbot_math::clamp_magnitude;
///
/// assert_eq!(clamp_magnitude(1.7, 1.0), 1.0);
/// assert_eq!(clamp_magnitude(-0.4, 1.0), -0.4);
/// assert_eq!(clamp_magnitude(f64::NAN, 1.0), 0.0);
/// ```
pub fn clamp_magnitude<T: Float>(value: T, max: T) -> T {
    if value.is_nan() {
        T::zero()
    } else {
        value.max(-max).min(max)
    }
}

/// Linearly maps `value` from the range `from` onto the range `to`.
///
/// The input is clamped to `from` first.
///
/// ```
/// use trackbot_math::remap;
///
/// assert_eq!(remap(0.5, (0.0, 1.0), (-50.0, 50.0)), 0.0);
/// assert_eq!(remap(2.0, (0.0, 1.0), (-50.0, 50.0)), 50.0);
/// ```
pub fn remap<T: Float>(value: T, from: (T, T), to: (T, T)) -> T {
    let (from_lo, from_hi) = from;
    let (to_lo, to_hi) = to;
    let span = from_hi - from_lo;
    if span == T::zero() {
        return to_lo;
    }

    let t = ((value - from_lo) / span).max(T::zero()).min(T::one());
    to_lo + t * (to_hi - to_lo)
}
