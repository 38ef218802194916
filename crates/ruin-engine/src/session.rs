//! Expedition session management.
//!
//! `Expedition` owns the player, the random sources, and the journal. It
//! drives the turn loop: show the stats, ask where to go, dispatch to the
//! location, then check whether body or mind has given out. Once a terminal
//! state is reached the session never takes another turn.

use chrono::Utc;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::GameConfig;
use crate::context::TurnContext;
use crate::error::GameResult;
use crate::fate::Fate;
use crate::finale::Ending;
use crate::glyph::GlyphGenerator;
use crate::io::{InputProvider, OutputSink, Tone};
use crate::journal::{Journal, JournalEntry};
use crate::location::{Visit, enter};
use crate::player::PlayerState;

/// Mixed into the seed so glyphs do not mirror gameplay draws.
const GLYPH_SEED_SALT: u64 = 0x9E37_79B9_7F4A_7C15;

/// The turn prompt.
pub const TURN_PROMPT: &str = "Where will you go? [ruins / jungle / caves / temple / quit]";

/// How an expedition ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Terminal {
    /// The player chose to leave.
    Quit,
    /// Health or sanity reached zero.
    Collapse,
    /// The guardian decided the player's fate.
    Ending(Ending),
}

impl std::fmt::Display for Terminal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Quit => write!(f, "Turned back"),
            Self::Collapse => write!(f, "Collapsed"),
            Self::Ending(ending) => write!(f, "{ending}"),
        }
    }
}

impl Terminal {
    /// Whether the player came out of the ruin alive and victorious.
    pub fn is_victory(&self) -> bool {
        matches!(self, Self::Ending(ending) if ending.is_victory())
    }

    /// Closing narration.
    pub fn epilogue(&self) -> Vec<&'static str> {
        match self {
            Self::Quit => vec!["Your journey ends here... but the glyphs remain."],
            Self::Collapse => vec![
                "💀 Your mind or body could not endure the alien world...",
                "The ruins fall silent once more.",
            ],
            Self::Ending(ending) => vec![ending.epilogue()],
        }
    }
}

/// A single expedition into the ruin.
pub struct Expedition {
    player: PlayerState,
    fate: Box<dyn Fate>,
    glyphs: GlyphGenerator,
    journal: Journal,
    config: GameConfig,
    turn: u32,
    terminal: Option<Terminal>,
}

impl Expedition {
    /// Start an expedition with gameplay randomness seeded from the config.
    pub fn new(config: GameConfig) -> Self {
        let fate = Box::new(StdRng::seed_from_u64(config.seed));
        Self::with_fate(config, fate)
    }

    /// Start an expedition with a caller-supplied source of gameplay randomness.
    pub fn with_fate(config: GameConfig, fate: Box<dyn Fate>) -> Self {
        let mut journal = Journal::new();
        journal.append(JournalEntry::Departure {
            seed: config.seed,
            timestamp: Utc::now(),
        });

        Self {
            player: PlayerState::new(),
            fate,
            glyphs: GlyphGenerator::new(config.seed ^ GLYPH_SEED_SALT),
            journal,
            config,
            turn: 0,
            terminal: None,
        }
    }

    /// Get the player state.
    pub fn player(&self) -> &PlayerState {
        &self.player
    }

    #[cfg(test)]
    pub(crate) fn player_mut(&mut self) -> &mut PlayerState {
        &mut self.player
    }

    /// Get the journal.
    pub fn journal(&self) -> &Journal {
        &self.journal
    }

    /// Get the configuration.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Number of turns taken.
    pub fn turn(&self) -> u32 {
        self.turn
    }

    /// How the expedition ended, if it has.
    pub fn terminal(&self) -> Option<Terminal> {
        self.terminal
    }

    /// Play the opening narration.
    pub fn intro(&mut self, output: &mut dyn OutputSink) -> GameResult<()> {
        output.emit(
            "🌌 You awaken under two moons, in the ruins of a forgotten alien world...",
            Tone::Narration,
        )?;
        output.emit("Glyphs burn into your mind:", Tone::Narration)?;
        output.emit(&self.glyphs.generate(30), Tone::Narration)?;
        output.emit(
            "A whisper: 'SEEK... THE TEMPLE... THREE KEYS... TRUTH...'",
            Tone::Narration,
        )?;
        Ok(())
    }

    /// Run the whole expedition: intro, then turns until a terminal state.
    pub fn run(
        &mut self,
        input: &mut dyn InputProvider,
        output: &mut dyn OutputSink,
    ) -> GameResult<Terminal> {
        if self.config.intro && self.turn == 0 && self.terminal.is_none() {
            self.intro(output)?;
        }
        loop {
            if let Some(terminal) = self.play_turn(input, output)? {
                return Ok(terminal);
            }
        }
    }

    /// Play a single turn. Returns the terminal state once one is reached.
    ///
    /// A finished expedition returns its terminal state again without asking
    /// anything.
    pub fn play_turn(
        &mut self,
        input: &mut dyn InputProvider,
        output: &mut dyn OutputSink,
    ) -> GameResult<Option<Terminal>> {
        if let Some(terminal) = self.terminal {
            return Ok(Some(terminal));
        }
        if self.player.is_collapsed() {
            return self.finish(Terminal::Collapse, output).map(Some);
        }

        self.turn += 1;
        output.emit(&self.player.stats_line(), Tone::Status)?;
        output.emit(&self.player.inventory_line(), Tone::Status)?;
        output.emit(TURN_PROMPT, Tone::Prompt)?;

        let Some(line) = input.read_line("> ")? else {
            return self.finish(Terminal::Quit, output).map(Some);
        };
        let choice = line.trim().to_lowercase();
        if choice == "quit" {
            return self.finish(Terminal::Quit, output).map(Some);
        }

        let mut ctx = TurnContext {
            player: &mut self.player,
            fate: self.fate.as_mut(),
            glyphs: &mut self.glyphs,
            input: &mut *input,
            output: &mut *output,
        };

        match enter(&choice, &mut ctx) {
            Ok(visit) => {
                let location = visit.location().to_string();
                self.journal.append(JournalEntry::Arrival {
                    turn: self.turn,
                    location: location.clone(),
                    timestamp: Utc::now(),
                });
                match visit {
                    Visit::Explored { outcome, .. } => {
                        self.journal.append(JournalEntry::Event {
                            turn: self.turn,
                            location,
                            event: outcome.event.to_string(),
                            outcome: outcome.outcome,
                            timestamp: Utc::now(),
                        });
                    }
                    Visit::Finale(finale) => {
                        self.journal.append(JournalEntry::Finale {
                            turn: self.turn,
                            choice: finale.choice.to_string(),
                            ending: finale.ending.to_string(),
                            timestamp: Utc::now(),
                        });
                        return self.finish(Terminal::Ending(finale.ending), output).map(Some);
                    }
                }
            }
            Err(e) if e.is_narrative() => {
                ctx.warn(e.to_string())?;
                self.journal.append(JournalEntry::Refused {
                    turn: self.turn,
                    input: choice,
                    reason: e.to_string(),
                    timestamp: Utc::now(),
                });
            }
            Err(e) => return Err(e),
        }

        if self.player.is_collapsed() {
            return self.finish(Terminal::Collapse, output).map(Some);
        }
        Ok(None)
    }

    fn finish(&mut self, terminal: Terminal, output: &mut dyn OutputSink) -> GameResult<Terminal> {
        match terminal {
            Terminal::Quit => self.journal.append(JournalEntry::Quit {
                turn: self.turn,
                timestamp: Utc::now(),
            }),
            Terminal::Collapse => self.journal.append(JournalEntry::Collapse {
                turn: self.turn,
                health: self.player.health(),
                sanity: self.player.sanity(),
                timestamp: Utc::now(),
            }),
            Terminal::Ending(_) => {}
        }
        for line in terminal.epilogue() {
            output.emit(line, Tone::Narration)?;
        }
        self.terminal = Some(terminal);
        Ok(terminal)
    }
}
