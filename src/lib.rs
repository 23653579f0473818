//! A pseudo-random number generation library derived from a single
//! unit-interval primitive.

pub mod utility;

pub mod sources;
pub mod system;

pub use half::f16;
pub use unit_rng_derive::FromSource;

/// The default pseudo-random number source.
///
/// This general purpose source should be sufficient in a vast majority of cases.
pub type DefaultSource = sources::Xoshiro256PlusPlus;

/// A seeded source of uniform pseudo-random numbers.
///
/// Concrete generators supply the [`next_unit`] primitive; every other
/// operation has a default implementation expressed in terms of that single
/// draw, so all implementations share the same range-scaling behavior.
///
/// [`next_unit`]: Source::next_unit
pub trait Source {
    /// Creates a new [`Source`] instance from the provided seed.
    fn from_seed(seed: u64) -> Self
    where
        Self: Sized;

    /// Draws the next value in the half-open range `[0.0, 1.0)`.
    ///
    /// The upper bound is exclusive: implementations must never return `1.0`.
    fn next_unit(&mut self) -> f64;

    /// Draws an integer in the range `[0, max)`.
    ///
    /// The scaled draw is truncated toward zero. Bounds are not validated: a
    /// non-positive `max` goes through the same formula unchanged.
    #[inline(always)]
    fn next_bounded(&mut self, max: i32) -> i32 {
        (max as f64 * self.next_unit()) as i32
    }

    /// Draws an integer in the range `[min, max)`.
    ///
    /// Bounds are not validated: callers are responsible for `min <= max`.
    #[inline(always)]
    fn next_ranged(&mut self, min: i32, max: i32) -> i32 {
        self.next_bounded(max - min) + min
    }

    /// Shorthand for [`next_bounded`](Source::next_bounded).
    #[inline(always)]
    fn sample(&mut self, max: i32) -> i32 {
        self.next_bounded(max)
    }

    /// Shorthand for [`next_ranged`](Source::next_ranged).
    #[inline(always)]
    fn sample_between(&mut self, min: i32, max: i32) -> i32 {
        self.next_ranged(min, max)
    }

    /// Draws the next unit-interval value, narrowed to single precision.
    #[inline(always)]
    fn next_f32(&mut self) -> f32 {
        self.next_unit() as f32
    }

    /// Draws the next unit-interval value, narrowed to half precision.
    #[inline(always)]
    fn next_f16(&mut self) -> f16 {
        f16::from_f64(self.next_unit())
    }
}

/// A trait for types that can be generated from a random number source.
pub trait FromSource {
    /// Generates a new instance of `Self` from the provided source.
    fn from_source(source: &mut impl Source) -> Self;
}

impl FromSource for f64 {
    #[inline]
    fn from_source(source: &mut impl Source) -> Self {
        source.next_unit()
    }
}

impl FromSource for f32 {
    #[inline]
    fn from_source(source: &mut impl Source) -> Self {
        source.next_f32()
    }
}

impl FromSource for f16 {
    #[inline]
    fn from_source(source: &mut impl Source) -> Self {
        source.next_f16()
    }
}
