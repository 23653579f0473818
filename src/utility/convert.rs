/// Converts a `u64` value into an `f64` value in the half-open range `[0.0, 1.0)`.
///
/// Only the 53 most significant bits of `x` contribute to the result, so the
/// largest possible output is `(2^53 - 1) / 2^53`, strictly below `1.0`.
#[inline]
pub fn f64_from_u64_unit(x: u64) -> f64 {
    (x >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
}
