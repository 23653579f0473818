/// A simple implementation of the [SplitMix64] algorithm.
///
/// This is mainly used to expand a 64-bit seed into the larger base state
/// required by the main random number source.
///
/// [SplitMix64]: http://prng.di.unimi.it/splitmix64.c
pub fn splitmix64(state: u64) -> u64 {
    let mut z = state.wrapping_add(0x9e3779b97f4a7c15);
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58476d1ce4e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d049bb133111eb);
    z ^ (z >> 31)
}
