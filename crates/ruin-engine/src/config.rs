//! Configuration for an expedition.

use std::time::Duration;

/// Configuration for an expedition session.
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// RNG seed for reproducible events and glyphs.
    pub seed: u64,
    /// Pause between characters when narration is paced.
    pub text_delay: Duration,
    /// Whether to play the opening narration.
    pub intro: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            text_delay: Duration::from_millis(30),
            intro: true,
        }
    }
}

impl GameConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the per-character narration delay.
    pub fn with_text_delay(mut self, delay: Duration) -> Self {
        self.text_delay = delay;
        self
    }

    /// Enable or disable the opening narration.
    pub fn with_intro(mut self, intro: bool) -> Self {
        self.intro = intro;
        self
    }
}
