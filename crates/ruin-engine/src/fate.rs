//! Gameplay randomness.
//!
//! Every draw that changes the outcome of a turn goes through [`Fate`], so a
//! seeded `StdRng` reproduces a whole expedition and tests can force the
//! dice. Cosmetic glyphs use their own generator (see [`crate::glyph`]).

use rand::Rng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

/// Source of gameplay randomness.
pub trait Fate {
    /// A uniformly chosen index in `0..len`. `len` must be non-zero.
    fn index(&mut self, len: usize) -> usize;

    /// A random ordering of `0..len`.
    fn permutation(&mut self, len: usize) -> Vec<usize>;

    /// A fair coin. `true` is the favourable side.
    fn coin(&mut self) -> bool {
        self.index(2) == 0
    }
}

impl Fate for StdRng {
    fn index(&mut self, len: usize) -> usize {
        self.random_range(0..len)
    }

    fn permutation(&mut self, len: usize) -> Vec<usize> {
        let mut order: Vec<usize> = (0..len).collect();
        order.shuffle(self);
        order
    }
}

/// A fate that replays a fixed script of indices.
///
/// Each draw consumes the next value modulo the requested range; an empty
/// script yields 0. Permutations reverse the input so a scrambled word is
/// visibly different from the plain word.
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct ScriptedFate {
    script: std::collections::VecDeque<usize>,
    draws: usize,
}

#[cfg(test)]
impl ScriptedFate {
    pub(crate) fn new(script: impl IntoIterator<Item = usize>) -> Self {
        Self {
            script: script.into_iter().collect(),
            draws: 0,
        }
    }

    /// Number of index draws made so far.
    pub(crate) fn draws(&self) -> usize {
        self.draws
    }
}

#[cfg(test)]
impl Fate for ScriptedFate {
    fn index(&mut self, len: usize) -> usize {
        self.draws += 1;
        self.script.pop_front().unwrap_or(0) % len
    }

    fn permutation(&mut self, len: usize) -> Vec<usize> {
        (0..len).rev().collect()
    }
}
