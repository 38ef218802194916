//! Journal entry types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single entry in the expedition journal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum JournalEntry {
    /// The expedition began.
    Departure {
        /// Seed the session was started with, for replaying it.
        seed: u64,
        /// When the expedition began.
        timestamp: DateTime<Utc>,
    },
    /// The player entered a location.
    Arrival {
        /// Turn number.
        turn: u32,
        /// Location name.
        location: String,
        /// When the player arrived.
        timestamp: DateTime<Utc>,
    },
    /// An exploration event was resolved.
    Event {
        /// Turn number.
        turn: u32,
        /// Location the event happened in.
        location: String,
        /// Event name.
        event: String,
        /// What came of it.
        outcome: String,
        /// When it happened.
        timestamp: DateTime<Utc>,
    },
    /// A move was refused: an unknown path or the sealed temple.
    Refused {
        /// Turn number.
        turn: u32,
        /// What the player typed.
        input: String,
        /// Why the move was refused.
        reason: String,
        /// When it was refused.
        timestamp: DateTime<Utc>,
    },
    /// The final encounter was decided.
    Finale {
        /// Turn number.
        turn: u32,
        /// The player's choice.
        choice: String,
        /// The resulting ending.
        ending: String,
        /// When it was decided.
        timestamp: DateTime<Utc>,
    },
    /// Body or mind gave out.
    Collapse {
        /// Turn number.
        turn: u32,
        /// Health at the moment of collapse.
        health: i32,
        /// Sanity at the moment of collapse.
        sanity: i32,
        /// When the player collapsed.
        timestamp: DateTime<Utc>,
    },
    /// The player walked away.
    Quit {
        /// Turn number.
        turn: u32,
        /// When the player quit.
        timestamp: DateTime<Utc>,
    },
}

impl JournalEntry {
    /// When the entry was recorded.
    pub fn timestamp(&self) -> DateTime<Utc> {
        match self {
            Self::Departure { timestamp, .. }
            | Self::Arrival { timestamp, .. }
            | Self::Event { timestamp, .. }
            | Self::Refused { timestamp, .. }
            | Self::Finale { timestamp, .. }
            | Self::Collapse { timestamp, .. }
            | Self::Quit { timestamp, .. } => *timestamp,
        }
    }
}
