use unit_rng::Source;

/// A source that replays a fixed list of unit draws.
pub struct Script {
    draws: Vec<f64>,
    at: usize,
}

impl Script {
    pub fn new(draws: &[f64]) -> Self {
        Self {
            draws: draws.to_vec(),
            at: 0,
        }
    }

    /// Returns the number of draws consumed so far.
    pub fn consumed(&self) -> usize {
        self.at
    }
}

impl Source for Script {
    fn from_seed(_seed: u64) -> Self {
        Self::new(&[])
    }

    fn next_unit(&mut self) -> f64 {
        let value = self.draws[self.at];
        self.at += 1;
        value
    }
}
