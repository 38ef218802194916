//! Game engine for an expedition into an alien ruin.
//!
//! Provides the player's resource tracks and inventory, random exploration
//! events, the artifact-gated temple and its final encounter, and the turn
//! loop that ties them together. Input and output are capabilities supplied
//! by the caller, and every random draw comes from a seedable source.

pub mod config;
pub mod context;
pub mod error;
pub mod event;
pub mod fate;
pub mod finale;
pub mod glyph;
pub mod io;
pub mod journal;
pub mod location;
pub mod player;
pub mod session;

pub use config::GameConfig;
pub use context::TurnContext;
pub use error::{GameError, GameResult};
pub use event::RuinEvent;
pub use fate::Fate;
pub use finale::Ending;
pub use glyph::GlyphGenerator;
pub use io::{InputProvider, OutputSink, ScriptedInput, Tone, TranscriptOutput};
pub use journal::{Journal, JournalEntry};
pub use location::Location;
pub use player::{PlayerState, REQUIRED_ARTIFACTS};
pub use session::{Expedition, Terminal};
