//! Concrete implementations of the [`Source`](crate::Source) trait.

mod xoshiro256plusplus;
pub use xoshiro256plusplus::*;
