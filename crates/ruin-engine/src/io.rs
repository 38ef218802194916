//! Input and output capabilities.
//!
//! The engine never touches a terminal. It reads lines from an
//! [`InputProvider`] and writes tagged text to an [`OutputSink`]; the CLI
//! supplies stdin/stdout versions with pacing and colour, tests supply
//! [`ScriptedInput`] and [`TranscriptOutput`].

use std::collections::VecDeque;
use std::io;

/// How a piece of output should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    /// Story text, printed at a reading pace.
    Narration,
    /// The stats line shown before every turn.
    Status,
    /// A question the player is about to answer.
    Prompt,
    /// A refusal or mistake the player should notice.
    Warning,
}

/// Somewhere to send game text.
pub trait OutputSink {
    /// Write one line of text.
    fn emit(&mut self, text: &str, tone: Tone) -> io::Result<()>;
}

/// Somewhere to read the player's answers from.
pub trait InputProvider {
    /// Show `prompt` and read one line without its line ending.
    ///
    /// Returns `Ok(None)` once input is exhausted.
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>>;
}

/// Input replayed from a fixed list of lines.
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    lines: VecDeque<String>,
    prompts: Vec<String>,
}

impl ScriptedInput {
    /// Create scripted input from lines, answered in order.
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
            prompts: Vec::new(),
        }
    }

    /// Every prompt that has been asked, including ones that found no answer.
    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }

    /// Lines not yet consumed.
    pub fn remaining(&self) -> usize {
        self.lines.len()
    }
}

impl InputProvider for ScriptedInput {
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        self.prompts.push(prompt.to_string());
        Ok(self.lines.pop_front())
    }
}

/// Output captured in memory.
#[derive(Debug, Clone, Default)]
pub struct TranscriptOutput {
    lines: Vec<(Tone, String)>,
}

impl TranscriptOutput {
    /// Create an empty transcript.
    pub fn new() -> Self {
        Self::default()
    }

    /// All captured lines with their tone.
    pub fn lines(&self) -> &[(Tone, String)] {
        &self.lines
    }

    /// The whole transcript as one string.
    pub fn text(&self) -> String {
        self.lines
            .iter()
            .map(|(_, l)| l.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Whether any line contains `needle`.
    pub fn contains(&self, needle: &str) -> bool {
        self.lines.iter().any(|(_, l)| l.contains(needle))
    }

    /// Number of lines written with the given tone.
    pub fn count(&self, tone: Tone) -> usize {
        self.lines.iter().filter(|(t, _)| *t == tone).count()
    }
}

impl OutputSink for TranscriptOutput {
    fn emit(&mut self, text: &str, tone: Tone) -> io::Result<()> {
        self.lines.push((tone, text.to_string()));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scripted_input_replays_then_ends() {
        let mut input = ScriptedInput::new(["ruins", "quit"]);
        assert_eq!(input.read_line("> ").unwrap().as_deref(), Some("ruins"));
        assert_eq!(input.remaining(), 1);
        assert_eq!(input.read_line("> ").unwrap().as_deref(), Some("quit"));
        assert_eq!(input.read_line("> ").unwrap(), None);
        assert_eq!(input.prompts().len(), 3);
    }

    #[test]
    fn transcript_records_tone() {
        let mut out = TranscriptOutput::new();
        out.emit("hello", Tone::Narration).unwrap();
        out.emit("careful", Tone::Warning).unwrap();
        assert!(out.contains("care"));
        assert_eq!(out.count(Tone::Warning), 1);
        assert_eq!(out.text(), "hello\ncareful");
    }
}
