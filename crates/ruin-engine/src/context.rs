//! Per-turn access to the player, randomness, and the terminal.

use crate::error::GameResult;
use crate::fate::Fate;
use crate::glyph::GlyphGenerator;
use crate::io::{InputProvider, OutputSink, Tone};
use crate::player::PlayerState;

/// Mutable context lent to locations, events, and the finale for one turn.
pub struct TurnContext<'a> {
    /// The explorer.
    pub player: &'a mut PlayerState,
    /// Gameplay randomness.
    pub fate: &'a mut dyn Fate,
    /// Cosmetic glyphs and alien speech.
    pub glyphs: &'a mut GlyphGenerator,
    /// Where answers come from.
    pub input: &'a mut dyn InputProvider,
    /// Where text goes.
    pub output: &'a mut dyn OutputSink,
}

impl TurnContext<'_> {
    /// Write story text.
    pub fn narrate(&mut self, text: impl AsRef<str>) -> GameResult<()> {
        self.output.emit(text.as_ref(), Tone::Narration)?;
        Ok(())
    }

    /// Write a refusal or mistake.
    pub fn warn(&mut self, text: impl AsRef<str>) -> GameResult<()> {
        self.output.emit(text.as_ref(), Tone::Warning)?;
        Ok(())
    }

    /// Ask a question and read the answer. Exhausted input reads as empty.
    pub fn ask(&mut self, prompt: &str) -> GameResult<String> {
        Ok(self.input.read_line(prompt)?.unwrap_or_default())
    }
}

/// Owned pieces for building a [`TurnContext`] in tests.
#[cfg(test)]
pub(crate) struct TestRig {
    pub(crate) player: PlayerState,
    pub(crate) fate: crate::fate::ScriptedFate,
    pub(crate) glyphs: GlyphGenerator,
    pub(crate) input: crate::io::ScriptedInput,
    pub(crate) output: crate::io::TranscriptOutput,
}

#[cfg(test)]
impl TestRig {
    pub(crate) fn new(script: &[usize], answers: &[&str]) -> Self {
        Self {
            player: PlayerState::new(),
            fate: crate::fate::ScriptedFate::new(script.iter().copied()),
            glyphs: GlyphGenerator::new(42),
            input: crate::io::ScriptedInput::new(answers.iter().copied()),
            output: crate::io::TranscriptOutput::new(),
        }
    }

    pub(crate) fn ctx(&mut self) -> TurnContext<'_> {
        TurnContext {
            player: &mut self.player,
            fate: &mut self.fate,
            glyphs: &mut self.glyphs,
            input: &mut self.input,
            output: &mut self.output,
        }
    }
}
