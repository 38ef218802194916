//! Alien glyphs and speech.
//!
//! Glyph strings are decoration. Alien speech is a fixed message whose
//! leading characters are fogged by glyphs; each two points of knowledge
//! clear one more character from the right.

use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// The alphabet used for decorative glyph strings.
pub const GLYPHS: [char; 19] = [
    '⟁', '⌖', '⟟', '⌬', '⋔', '⟊', '⏃', '⊑', '⟒', '⍜', '⎅', '⋉', '⌇', '⌿', '⍀', '☌', '☍', '☊', '⚳',
];

/// The alphabet that fogs alien speech.
pub const FOG: [char; 6] = ['⟟', '⋔', '⟊', '⍜', '⎅', '⌇'];

/// Generate `length` random glyphs.
pub fn alien_glyphs<R: Rng + ?Sized>(length: usize, rng: &mut R) -> String {
    (0..length)
        .map(|_| GLYPHS[rng.random_range(0..GLYPHS.len())])
        .collect()
}

/// Number of trailing characters a given knowledge level renders legibly.
pub fn clarity(knowledge: u32) -> usize {
    (knowledge / 2) as usize
}

/// Render `message` as heard with the given knowledge.
///
/// The last `knowledge / 2` characters are kept; every earlier character is
/// replaced by a random fog symbol. Lengths are counted in characters.
pub fn obscure<R: Rng + ?Sized>(message: &str, knowledge: u32, rng: &mut R) -> String {
    let len = message.chars().count();
    let clear = clarity(knowledge);
    if clear >= len {
        return message.to_string();
    }
    let fogged = len - clear;
    message
        .chars()
        .enumerate()
        .map(|(i, c)| {
            if i < fogged {
                FOG[rng.random_range(0..FOG.len())]
            } else {
                c
            }
        })
        .collect()
}

/// A seeded source of cosmetic glyphs, kept apart from gameplay randomness.
#[derive(Debug, Clone)]
pub struct GlyphGenerator {
    rng: StdRng,
}

impl GlyphGenerator {
    /// Create a generator from a seed.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Generate `length` random glyphs.
    pub fn generate(&mut self, length: usize) -> String {
        alien_glyphs(length, &mut self.rng)
    }

    /// Render alien speech at the given knowledge level.
    pub fn obscure(&mut self, message: &str, knowledge: u32) -> String {
        obscure(message, knowledge, &mut self.rng)
    }
}
