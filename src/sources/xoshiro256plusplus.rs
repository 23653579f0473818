use crate::{utility, Source};

/// A general-purpose pseudo-random number source.
///
/// The 64-bit core of this source is based on [xoshiro256++][source]; each
/// unit-interval draw keeps the 53 most significant bits of one core output.
///
/// [source]: https://prng.di.unimi.it/xoshiro256plusplus.c
#[derive(Debug, Clone)]
pub struct Xoshiro256PlusPlus {
    a: u64,
    b: u64,
    c: u64,
    d: u64,
}

impl Xoshiro256PlusPlus {
    /// Creates a new instance seeded with entropy from the operating system.
    pub fn from_entropy() -> Self {
        <Self as Source>::from_seed(crate::system::entropy())
    }

    /// Advances the core state and returns the next 64-bit output.
    fn next_bits(&mut self) -> u64 {
        let ret = self
            .a
            .wrapping_add(self.c)
            .rotate_left(23)
            .wrapping_add(self.a);

        let t = self.b << 17;

        self.c ^= self.a;
        self.d ^= self.b;
        self.b ^= self.c;
        self.a ^= self.d;

        self.c ^= t;

        self.d = self.d.rotate_left(45);

        ret
    }
}

impl Source for Xoshiro256PlusPlus {
    fn from_seed(seed: u64) -> Self {
        let a = utility::splitmix64(seed);
        let b = utility::splitmix64(a);
        let c = utility::splitmix64(b);
        let d = utility::splitmix64(c);

        Self { a, b, c, d }
    }

    fn next_unit(&mut self) -> f64 {
        utility::f64_from_u64_unit(self.next_bits())
    }
}
