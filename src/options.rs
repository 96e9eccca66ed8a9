use crate::error::Error;

/// Construction-time settings for a [`SkipMap`](crate::SkipMap).
///
/// ```
/// use ordered_skipmap::{Options, OrdComparator, SkipMap};
///
/// let options = Options::default().with_probability(0.25).with_seed(7);
/// let mut map = SkipMap::with_options(OrdComparator, options).unwrap();
/// map.set(1, "one");
/// assert_eq!(map.get(&1), Ok(&"one"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Options {
    /// Chance that a new node grows one more level. Must be in `[0, 1)`.
    pub probability: f64,
    /// Upper bound on generated node heights.
    pub max_height: usize,
    /// Number of levels the empty map starts with.
    pub initial_height: usize,
    /// Seed for the level generator; `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl Options {
    pub const DEFAULT_PROBABILITY: f64 = 0.5;
    pub const DEFAULT_MAX_HEIGHT: usize = 32;
    pub const DEFAULT_INITIAL_HEIGHT: usize = 1;

    pub fn with_probability(mut self, probability: f64) -> Self {
        self.probability = probability;
        self
    }

    pub fn with_max_height(mut self, max_height: usize) -> Self {
        self.max_height = max_height;
        self
    }

    pub fn with_initial_height(mut self, initial_height: usize) -> Self {
        self.initial_height = initial_height;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn validate(&self) -> Result<(), Error> {
        if !(0.0..1.0).contains(&self.probability) {
            return Err(Error::InvalidArgument("probability must be in [0, 1)"));
        }
        if self.max_height == 0 {
            return Err(Error::InvalidArgument("max_height must be at least 1"));
        }
        if self.initial_height == 0 || self.initial_height > self.max_height {
            return Err(Error::InvalidArgument(
                "initial_height must be between 1 and max_height",
            ));
        }
        Ok(())
    }
}

impl Default for Options {
    fn default() -> Self {
        Self {
            probability: Self::DEFAULT_PROBABILITY,
            max_height: Self::DEFAULT_MAX_HEIGHT,
            initial_height: Self::DEFAULT_INITIAL_HEIGHT,
            seed: None,
        }
    }
}
