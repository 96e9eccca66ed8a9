//! Height generation for new nodes.
//!
//! Every insertion of a fresh key asks a [`LevelGenerator`] how many levels
//! the new node should span. The default, [`GeometricLevels`], draws from a
//! geometric distribution:
//!
//! ```text
//! P(height = k) = p^(k - 1) * (1 - p)
//! ```
//!
//! so with `p = 0.5` half of the nodes reach level 1, a quarter reach level 2,
//! and so on. Because the source of randomness is an ordinary `RngCore`,
//! tests can pass a seeded generator, or swap the whole strategy for
//! [`ScriptedLevels`] and dictate every height.

use crate::error::Error;
use crate::options::Options;
use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};

/// Picks the height of newly inserted nodes.
pub trait LevelGenerator {
    /// Returns the number of levels the next node participates in.
    ///
    /// A return value of `0` is treated as `1`; every node lives on level 0.
    fn random_height(&mut self) -> usize;
}

impl<G: LevelGenerator + ?Sized> LevelGenerator for &mut G {
    #[inline]
    fn random_height(&mut self) -> usize {
        (**self).random_height()
    }
}

impl<G: LevelGenerator + ?Sized> LevelGenerator for Box<G> {
    #[inline]
    fn random_height(&mut self) -> usize {
        (**self).random_height()
    }
}

/// Geometrically distributed heights driven by an injectable RNG.
#[derive(Debug, Clone)]
pub struct GeometricLevels<R = StdRng> {
    probability: f64,
    max_height: usize,
    rng: R,
}

impl<R: RngCore> GeometricLevels<R> {
    /// `probability` is the chance of growing one more level and must lie in
    /// `[0, 1)`. Heights are capped at `max_height`, which must be non-zero.
    pub fn new(probability: f64, max_height: usize, rng: R) -> Result<Self, Error> {
        if !(0.0..1.0).contains(&probability) {
            return Err(Error::InvalidArgument("probability must be in [0, 1)"));
        }
        if max_height == 0 {
            return Err(Error::InvalidArgument("max_height must be at least 1"));
        }
        Ok(Self {
            probability,
            max_height,
            rng,
        })
    }

    pub fn probability(&self) -> f64 {
        self.probability
    }

    pub fn max_height(&self) -> usize {
        self.max_height
    }
}

impl GeometricLevels<StdRng> {
    /// Builds the generator described by `options`, seeded from
    /// `options.seed` when present and from OS entropy otherwise.
    pub fn from_options(options: &Options) -> Result<Self, Error> {
        let rng = match options.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        GeometricLevels::new(options.probability, options.max_height, rng)
    }
}

impl Default for GeometricLevels<StdRng> {
    fn default() -> Self {
        Self {
            probability: Options::DEFAULT_PROBABILITY,
            max_height: Options::DEFAULT_MAX_HEIGHT,
            rng: StdRng::from_entropy(),
        }
    }
}

impl<R: RngCore> LevelGenerator for GeometricLevels<R> {
    fn random_height(&mut self) -> usize {
        let mut height = 1;
        while height < self.max_height && self.rng.gen::<f64>() < self.probability {
            height += 1;
        }
        height
    }
}

/// Replays a fixed sequence of heights, wrapping around at the end.
///
/// An empty script always yields `1`.
#[derive(Debug, Clone, Default)]
pub struct ScriptedLevels {
    heights: Vec<usize>,
    pos: usize,
}

impl ScriptedLevels {
    pub fn new<I: IntoIterator<Item = usize>>(heights: I) -> Self {
        Self {
            heights: heights.into_iter().collect(),
            pos: 0,
        }
    }
}

impl LevelGenerator for ScriptedLevels {
    fn random_height(&mut self) -> usize {
        if self.heights.is_empty() {
            return 1;
        }
        let height = self.heights[self.pos % self.heights.len()];
        self.pos = self.pos.wrapping_add(1);
        height
    }
}
