//! Math utility functions.

use num_traits::Float;

use crate::Component;

/// Euclidean remainder of `n / m`. The result always has the sign of `m`, so
/// any hue lands in `[0, 360)`.
pub fn modulo<T: Float>(n: T, m: T) -> T {
    ((n % m) + m) % m
}

/// Clamp a value to the unit interval.
pub fn clamp_unit<T: Float>(value: T) -> T {
    value.max(T::zero()).min(T::one())
}

/// Round a value to the nearest 8-bit channel value.
pub fn to_channel(value: Component) -> u8 {
    value.round().clamp(0.0, 255.0) as u8
}
